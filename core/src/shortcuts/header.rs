use super::{
    error::{LnkError, Section},
    flags::{decode_flags, ATTRIBUTE_FLAGS, DATA_FLAGS},
    hotkey::hotkey_string,
};
use crate::utils::{
    cursor::LnkCursor, time::filetime_to_datetime, uuid::format_guid_le_bytes,
};
use common::shortcuts::{LnkHeader, ShowCommand};
use log::error;

/// Size of the `Shortcut` header. Also the value of the first header field
pub(crate) const HEADER_SIZE: u32 = 0x4c;
const SHORTCUT_CLASS_ID: &str = "00021401-0000-0000-c000-000000000046";

/**
 * Parse the `Shortcut` file header. Contains the flags that control which structures follow,
 * and the target file size and created, accessed, modified timestamps.
 * Returns the bytes after the header (offset 0x4c)
 */
pub(crate) fn parse_header(data: &[u8]) -> Result<(&[u8], LnkHeader), LnkError> {
    let mut cursor = LnkCursor::new(data, Section::Header);

    let size = cursor.read_u32("header_size")?;
    if size != HEADER_SIZE {
        error!("[shortcuts] Header size is {size:#x}, not a shortcut file");
        return Err(LnkError::BadMagic(size));
    }

    let guid_size = 16;
    let class_id = format_guid_le_bytes(cursor.read_bytes(guid_size, "class_id")?);
    if class_id != SHORTCUT_CLASS_ID {
        error!("[shortcuts] Unexpected shortcut class id {class_id}");
        return Err(LnkError::BadClassId(class_id));
    }

    let data_flags = cursor.read_u32("link_flags")?;
    let attribute_flags = cursor.read_u32("file_attributes")?;

    let created = cursor.read_u64("creation_time")?;
    let accessed = cursor.read_u64("access_time")?;
    let modified = cursor.read_u64("write_time")?;

    let file_size = cursor.read_u32("file_size")?;
    let icon_index = cursor.read_i32("icon_index")?;
    let show_command_value = cursor.read_u32("show_command")?;
    let hotkey_value = cursor.read_u16("hotkey")?;

    // Reserved fields are never used but must be consumed
    let reserved = cursor.read_u16("reserved1")?;
    let reserved2 = cursor.read_u32("reserved2")?;
    let reserved3 = cursor.read_u32("reserved3")?;

    let header = LnkHeader {
        size,
        class_id,
        data_flags: decode_flags(data_flags, &DATA_FLAGS),
        attribute_flags: decode_flags(attribute_flags, &ATTRIBUTE_FLAGS),
        created: filetime_to_datetime(created),
        accessed: filetime_to_datetime(accessed),
        modified: filetime_to_datetime(modified),
        file_size,
        icon_index,
        show_command: show_command(show_command_value),
        show_command_value,
        hotkey: hotkey_string(hotkey_value),
        hotkey_value,
        reserved,
        reserved2,
        reserved3,
    };

    Ok((cursor.rest(), header))
}

/// Windows treats every unknown value as `SW_SHOWNORMAL`
fn show_command(value: u32) -> ShowCommand {
    match value {
        0x3 => ShowCommand::ShowMaximized,
        0x7 => ShowCommand::ShowMinNoActive,
        _ => ShowCommand::ShowNormal,
    }
}

/// Verify if provided bytes start with a `Shortcut` header. Never fails
pub fn check_header(data: &[u8]) -> bool {
    let mut cursor = LnkCursor::new(data, Section::Header);
    let size = match cursor.read_u32("header_size") {
        Ok(result) => result,
        Err(_err) => return false,
    };

    let guid_size = 16;
    let guid_data = match cursor.read_bytes(guid_size, "class_id") {
        Ok(result) => result,
        Err(_err) => return false,
    };

    size == HEADER_SIZE && format_guid_le_bytes(guid_data) == SHORTCUT_CLASS_ID
}
