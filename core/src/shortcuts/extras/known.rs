use crate::shortcuts::error::{LnkError, Section};
use crate::utils::{cursor::LnkCursor, uuid::format_guid_le_bytes};
use common::shortcuts::KnownFolderBlock;
use std::mem::size_of;

/// Parse `Shortcut` Known Folder info from the `KnownFolderDataBlock` payload
pub(crate) fn parse_known(data: &[u8]) -> Result<KnownFolderBlock, LnkError> {
    let mut cursor = LnkCursor::new(data, Section::ExtraData);
    let guid_data = cursor.read_bytes(size_of::<u128>(), "known_folder_id")?;
    // Offset to the shell item in the IDList that refers to the known folder
    let offset = cursor.read_u32("known_folder_offset")?;

    Ok(KnownFolderBlock {
        known_folder_id: format_guid_le_bytes(guid_data),
        offset,
    })
}
