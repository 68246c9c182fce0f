use super::error::{LnkError, Section};
use crate::utils::{
    cursor::{check_section_size, LnkCursor},
    strings::{extract_utf16_string, extract_utf8_string},
};
use common::shortcuts::{DataFlags, StringData};
use log::warn;

/**
 * Parse the `StringData` section. Each string is only present if its flag is set in the header.
 * Strings are prefixed with a character count and are not NULL terminated
 */
pub(crate) fn parse_string_data<'a>(
    data: &'a [u8],
    flags: &[DataFlags],
    max_size: u64,
) -> Result<(&'a [u8], StringData), LnkError> {
    let mut cursor = LnkCursor::new(data, Section::StringData);
    let mut strings = StringData {
        is_unicode: flags.contains(&DataFlags::IsUnicode),
        ..Default::default()
    };

    let fields = [
        (DataFlags::HasName, "name"),
        (DataFlags::HasRelativePath, "relative_path"),
        (DataFlags::HasWorkingDirectory, "working_directory"),
        (DataFlags::HasArguments, "arguments"),
        (DataFlags::HasIconLocation, "icon_location"),
    ];

    for (flag, field) in fields {
        if !flags.contains(&flag) {
            continue;
        }

        let value = read_string(&mut cursor, field, &mut strings, max_size)?;
        match flag {
            DataFlags::HasName => strings.name = Some(value),
            DataFlags::HasRelativePath => strings.relative_path = Some(value),
            DataFlags::HasWorkingDirectory => strings.working_directory = Some(value),
            DataFlags::HasArguments => strings.arguments = Some(value),
            _ => strings.icon_location = Some(value),
        }
    }

    Ok((cursor.rest(), strings))
}

/// Read a single counted string. Character width depends on the header `IsUnicode` flag
fn read_string(
    cursor: &mut LnkCursor<'_>,
    field: &'static str,
    strings: &mut StringData,
    max_size: u64,
) -> Result<String, LnkError> {
    let count = cursor.read_u16(field)?;

    // The Windows implementation of the Shortcut format limits string sizes to 260 characters
    // Even though the Shortcut file format allows string sizes up to 64K
    let max_string_size = 260;
    if count > max_string_size {
        // Larger strings were created manually or using non-Windows tools
        // This is sometimes used by threat actors to hide Shortcut data from forensic tools
        // See: https://harfanglab.io/insidethelab/sadfuture-xdspy-latest-evolution/#tid_specifications_ignored
        warn!(
            "[shortcuts] Got abnormal {field} size {count}. LNK data could be malformed or possibly malicious"
        );
        strings.is_abnormal = true;
    }

    let unicode_size = 2;
    let string_size = if strings.is_unicode {
        count as usize * unicode_size
    } else {
        count as usize
    };
    check_section_size(Section::StringData, string_size as u64, max_size)?;

    let string_data = cursor.read_bytes(string_size, field)?;
    if strings.is_unicode {
        return Ok(extract_utf16_string(string_data));
    }
    Ok(extract_utf8_string(string_data))
}
