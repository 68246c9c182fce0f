use super::error::{LnkError, Section};
use crate::utils::cursor::{check_section_size, LnkCursor};
use common::shortcuts::{IdList, ItemId};
use log::debug;
use std::mem::size_of;

/**
 * Parse the `LinkTargetIDList`. A 2 byte list size followed by shell items, each prefixed with a size that
 * includes the prefix itself. A zero size ends the list.
 * Shell item contents are kept as raw bytes. A list size of zero is an empty list
 */
pub(crate) fn parse_id_list(data: &[u8], max_size: u64) -> Result<(&[u8], IdList), LnkError> {
    let mut cursor = LnkCursor::new(data, Section::IdList);
    let size = cursor.read_u16("id_list_size")?;
    check_section_size(Section::IdList, u64::from(size), max_size)?;

    let list_data = cursor.read_bytes(size as usize, "id_list")?;
    let mut list_cursor = LnkCursor::new(list_data, Section::IdList);

    let mut items = Vec::new();
    if list_data.is_empty() {
        debug!("[shortcuts] LinkTargetIDList has a size of zero");
        let id_list = IdList {
            size,
            items,
            terminal: 0,
        };
        return Ok((cursor.rest(), id_list));
    }

    let terminal = loop {
        let item_size = list_cursor.read_u16("item_size")?;
        if item_size == 0 {
            break item_size;
        }

        let adjust_size = size_of::<u16>() as u16;
        if item_size < adjust_size {
            return Err(LnkError::ItemUnderflow { size: item_size });
        }
        check_section_size(Section::IdList, u64::from(item_size), max_size)?;

        let item_data = list_cursor.read_bytes((item_size - adjust_size) as usize, "item_data")?;
        items.push(ItemId {
            size: item_size,
            data: item_data.to_vec(),
        });
    };

    debug!("[shortcuts] Read {} shell items", items.len());

    let id_list = IdList {
        size,
        items,
        terminal,
    };
    Ok((cursor.rest(), id_list))
}
