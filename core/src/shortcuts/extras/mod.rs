//! `ExtraData` blocks appended after the `StringData` section.
//! Only the Tracker and Known Folder blocks are decoded field by field, every other block keeps its raw bytes

use super::error::{LnkError, Section};
use crate::utils::cursor::{check_section_size, LnkCursor};
use common::shortcuts::{BlockPayload, ExtraData, ExtraDataBlock};
use known::parse_known;
use log::{debug, warn};
use tracker::parse_tracker;

pub(crate) mod known;
pub(crate) mod tracker;

const TRACKER_SIGNATURE: u32 = 0xa0000003;
const KNOWN_FOLDER_SIGNATURE: u32 = 0xa000000b;

/// Parse the chain of `ExtraData` blocks until the terminal block (any size smaller than 4)
pub(crate) fn parse_extra_data(data: &[u8], max_size: u64) -> Result<(&[u8], ExtraData), LnkError> {
    let mut cursor = LnkCursor::new(data, Section::ExtraData);
    let mut blocks = Vec::new();

    let min_size = 4;
    let header_size = 8;
    let terminal = loop {
        let size = cursor.read_u32("block_size")?;
        if size < min_size {
            break size;
        }

        check_section_size(Section::ExtraData, u64::from(size), max_size)?;
        if size < header_size {
            return Err(LnkError::SizeOverflow {
                section: Section::ExtraData,
                size: u64::from(size),
                max: max_size,
            });
        }

        let signature = cursor.read_u32("block_signature")?;
        let block_data = cursor.read_bytes((size - header_size) as usize, "block_data")?;

        let block = ExtraDataBlock {
            size,
            signature,
            block_type: block_type(signature),
            data: block_data.to_vec(),
            payload: block_payload(signature, block_data),
        };
        debug!("[shortcuts] Read extra data block {}", block.block_type);
        blocks.push(block);
    };

    Ok((cursor.rest(), ExtraData { blocks, terminal }))
}

/// Name for the block signature. Unknown signatures get a label containing the hex value
fn block_type(signature: u32) -> String {
    let name = match signature {
        0xa0000001 => "EnvironmentVariableDataBlock",
        0xa0000002 => "ConsoleDataBlock",
        TRACKER_SIGNATURE => "TrackerDataBlock",
        0xa0000004 => "ConsoleFEDataBlock",
        0xa0000005 => "SpecialFolderDataBlock",
        0xa0000006 => "DarwinDataBlock",
        0xa0000007 => "IconEnvironmentDataBlock",
        0xa0000008 => "ShimDataBlock",
        0xa0000009 => "PropertyStoreDataBlock",
        KNOWN_FOLDER_SIGNATURE => "KnownFolderDataBlock",
        0xa000000c => "VistaAndAboveIDListDataBlock",
        _ => {
            warn!("[shortcuts] Unknown extra data signature {signature:#010x}");
            return format!("Unknown signature 0x{signature:08x}");
        }
    };
    name.to_string()
}

/// Decode the block payload if there is a field level decoder for the signature
fn block_payload(signature: u32, data: &[u8]) -> BlockPayload {
    let result = match signature {
        TRACKER_SIGNATURE => parse_tracker(data).map(BlockPayload::Tracker),
        KNOWN_FOLDER_SIGNATURE => parse_known(data).map(BlockPayload::KnownFolder),
        _ => return BlockPayload::Opaque,
    };

    match result {
        Ok(payload) => payload,
        Err(err) => {
            warn!("[shortcuts] Could not decode extra data block {signature:#x}: {err}");
            BlockPayload::Opaque
        }
    }
}
