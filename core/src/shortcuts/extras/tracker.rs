use crate::shortcuts::error::{LnkError, Section};
use crate::utils::{
    cursor::LnkCursor, strings::extract_utf8_string, uuid::format_guid_le_bytes,
};
use common::shortcuts::TrackerBlock;
use std::mem::size_of;

/**
 * Parse the `TrackerDataBlock` payload (everything after the block size and signature).
 * Contains the NetBIOS name of the machine the target was last seen on, plus the distributed link tracking ids
 */
pub(crate) fn parse_tracker(data: &[u8]) -> Result<TrackerBlock, LnkError> {
    let mut cursor = LnkCursor::new(data, Section::ExtraData);
    let length = cursor.read_u32("tracker_length")?;
    let version = cursor.read_u32("tracker_version")?;

    let machine_data = cursor.read_bytes(size_of::<u128>(), "machine_id")?;
    let droid_volume = cursor.read_bytes(size_of::<u128>(), "droid_volume_id")?;
    let droid_file = cursor.read_bytes(size_of::<u128>(), "droid_file_id")?;
    let birth_volume = cursor.read_bytes(size_of::<u128>(), "birth_droid_volume_id")?;
    let birth_file = cursor.read_bytes(size_of::<u128>(), "birth_droid_file_id")?;

    // Machine id is NULL padded
    let machine_name = machine_data
        .split(|byte| *byte == 0)
        .next()
        .unwrap_or_default();

    let tracker = TrackerBlock {
        length,
        version,
        machine_id: extract_utf8_string(machine_name),
        droid_volume_id: format_guid_le_bytes(droid_volume),
        droid_file_id: format_guid_le_bytes(droid_file),
        birth_droid_volume_id: format_guid_le_bytes(birth_volume),
        birth_droid_file_id: format_guid_le_bytes(birth_file),
    };

    Ok(tracker)
}
