use crate::utils::encoding::base64_encode_standard;
use log::warn;

/// Get a UTF16 (little endian) string from provided bytes data. A trailing odd byte is ignored
pub(crate) fn extract_utf16_string(data: &[u8]) -> String {
    let min_byte_size = 2;
    let utf16_data: Vec<u16> = data
        .chunks_exact(min_byte_size)
        .map(|wide_char| u16::from_le_bytes([wide_char[0], wide_char[1]]))
        .collect();

    // Windows uses UTF16
    let utf16_result = String::from_utf16(&utf16_data);
    match utf16_result {
        Ok(results) => results.trim_end_matches('\0').to_string(),
        Err(err) => {
            warn!("[strings] Failed to get UTF16 string: {err:?}");
            format!("Failed to get UTF16: {}", encode_issue(data))
        }
    }
}

/// Get a UTF8 string from provided bytes data
pub(crate) fn extract_utf8_string(data: &[u8]) -> String {
    let utf8_result = String::from_utf8(data.to_vec());
    match utf8_result {
        Ok(result) => result.trim_end_matches('\0').to_string(),
        Err(err) => {
            warn!("[strings] Failed to get UTF8 string: {err:?}");
            format!("Failed to get UTF8 string: {}", encode_issue(data))
        }
    }
}

fn encode_issue(data: &[u8]) -> String {
    let max_size = 2097152;
    if data.len() < max_size {
        base64_encode_standard(data)
    } else {
        format!("Binary data size larger than 2MB, size: {}", data.len())
    }
}
