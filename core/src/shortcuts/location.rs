use super::{
    error::{LnkError, Section},
    flags::{decode_flags, LOCATION_FLAGS},
    network::parse_network,
    volume::parse_volume,
};
use crate::utils::{
    cursor::LnkCursor,
    strings::{extract_utf16_string, extract_utf8_string},
};
use common::shortcuts::{LinkInfo, LocationFlag};
use log::warn;

/**
 * Parse the `LinkInfo` section from `Shortcut` data.
 * The whole section is buffered first since every offset inside it is relative to the section start.
 * Offsets larger than the section are treated as corruption
 * https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-shllink/6813269d-0cc8-4be2-933f-e96e8e3412dc
 */
pub(crate) fn parse_location(data: &[u8], max_size: u64) -> Result<(&[u8], LinkInfo), LnkError> {
    let mut outer = LnkCursor::new(data, Section::LinkInfo);
    let mut cursor = outer.sized_section(Section::LinkInfo, max_size)?;

    let header_size = cursor.read_u32("link_info_header_size")?;
    let flag_value = cursor.read_u32("link_info_flags")?;
    let volume_id_offset = cursor.read_u32("volume_id_offset")?;
    let local_base_path_offset = cursor.read_u32("local_base_path_offset")?;
    let network_link_offset = cursor.read_u32("network_link_offset")?;
    let common_path_suffix_offset = cursor.read_u32("common_path_suffix_offset")?;

    let no_unicode = 0x1c;
    let has_unicode = 0x24;
    let (local_base_path_offset_unicode, common_path_suffix_offset_unicode) =
        if header_size >= has_unicode {
            (
                Some(cursor.read_u32("local_base_path_offset_unicode")?),
                Some(cursor.read_u32("common_path_suffix_offset_unicode")?),
            )
        } else {
            if header_size != no_unicode {
                warn!("[shortcuts] Unexpected LinkInfo header size {header_size:#x}, ignoring unicode offsets");
            }
            (None, None)
        };

    let mut info = LinkInfo {
        size: cursor.len() as u32,
        header_size,
        flags: decode_flags(flag_value, &LOCATION_FLAGS),
        volume_id_offset,
        local_base_path_offset,
        network_link_offset,
        common_path_suffix_offset,
        local_base_path_offset_unicode,
        common_path_suffix_offset_unicode,
        volume_id: None,
        local_base_path: None,
        network_link: None,
        common_path_suffix: None,
        local_base_path_unicode: None,
        common_path_suffix_unicode: None,
    };

    let no_offset = 0;
    if info.flags.contains(&LocationFlag::VolumeIDAndLocalBasePath) {
        if volume_id_offset != no_offset {
            info.volume_id = Some(parse_volume(&cursor, volume_id_offset, max_size)?);
        }
        if local_base_path_offset != no_offset {
            info.local_base_path = Some(read_ascii_at(
                &cursor,
                local_base_path_offset,
                "local_base_path_offset",
            )?);
        }
    }

    if info
        .flags
        .contains(&LocationFlag::CommonNetworkRelativeLinkAndPathSuffix)
        && network_link_offset != no_offset
    {
        info.network_link = Some(parse_network(&cursor, network_link_offset, max_size)?);
    }

    if common_path_suffix_offset != no_offset {
        info.common_path_suffix = Some(read_ascii_at(
            &cursor,
            common_path_suffix_offset,
            "common_path_suffix_offset",
        )?);
    }

    if let Some(offset) = local_base_path_offset_unicode {
        if offset != no_offset {
            info.local_base_path_unicode = Some(read_unicode_at(
                &cursor,
                offset,
                "local_base_path_offset_unicode",
            )?);
        }
    }
    if let Some(offset) = common_path_suffix_offset_unicode {
        if offset != no_offset {
            info.common_path_suffix_unicode = Some(read_unicode_at(
                &cursor,
                offset,
                "common_path_suffix_offset_unicode",
            )?);
        }
    }

    Ok((outer.rest(), info))
}

/// Read a NULL terminated ASCII string at an offset relative to the start of the section
pub(super) fn read_ascii_at(
    cursor: &LnkCursor<'_>,
    offset: u32,
    field: &'static str,
) -> Result<String, LnkError> {
    let mut string_cursor = cursor.anchored(offset, field)?;
    let string_data = string_cursor.read_until_null(field)?;
    Ok(extract_utf8_string(string_data))
}

/// Read a NULL terminated UTF16 string at an offset relative to the start of the section
pub(super) fn read_unicode_at(
    cursor: &LnkCursor<'_>,
    offset: u32,
    field: &'static str,
) -> Result<String, LnkError> {
    let mut string_cursor = cursor.anchored(offset, field)?;
    let string_data = string_cursor.read_until_double_null(field)?;
    Ok(extract_utf16_string(string_data))
}
