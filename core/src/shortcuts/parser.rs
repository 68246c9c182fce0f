/**
 * Windows `Shortcut` files point to another file or directory.  
 * They use the `lnk` extension and can exist in any directory.  
 * The `Shortcut` files found in `C:\Users\<user>\AppData\Roaming\Microsoft\Windows\Recent` can be used to identify recent files and directories accessed by a user
 *
 * `Shortcut` files can also be used by malware to execute remote commands
 *
 * Decoding happens in one pass over bytes already in memory. Every size read from the file is checked against a
 * caller provided maximum before anything is buffered
 *
 * References:
 * `https://github.com/libyal/liblnk/blob/main/documentation/Windows%20Shortcut%20File%20(LNK)%20format.asciidoc`  
 * `https://winprotocoldoc.blob.core.windows.net/productionwindowsarchives/MS-SHLLINK/%5bMS-SHLLINK%5d.pdf`
 */
use super::{
    error::LnkError, extras::parse_extra_data, header::parse_header, idlist::parse_id_list,
    location::parse_location, strings::parse_string_data,
};
use common::shortcuts::{DataFlags, ShortcutLink};
use log::{debug, error};
use std::{
    fs::{metadata, File},
    io::Read,
};

/// Parse a single `Shortcut` file. The file size is used as the max section size
pub fn parse_lnk_file(path: &str) -> Result<ShortcutLink, LnkError> {
    let meta = match metadata(path) {
        Ok(result) => result,
        Err(err) => {
            error!("[shortcuts] Could not get metadata for lnk file {path}: {err:?}");
            return Err(LnkError::ReadFile);
        }
    };
    if !meta.is_file() {
        error!("[shortcuts] Path {path} is not a file");
        return Err(LnkError::NotFile);
    }

    let reader = match File::open(path) {
        Ok(result) => result,
        Err(err) => {
            error!("[shortcuts] Could not open lnk file {path}: {err:?}");
            return Err(LnkError::ReadFile);
        }
    };
    parse_lnk_reader(reader, meta.len())
}

/// Read all `Shortcut` data from a reader. `max_section_size` limits each section, not the whole stream
pub fn parse_lnk_reader<R: Read>(
    mut reader: R,
    max_section_size: u64,
) -> Result<ShortcutLink, LnkError> {
    let mut lnk_data = Vec::new();
    if let Err(err) = reader.read_to_end(&mut lnk_data) {
        error!("[shortcuts] Could not read lnk data: {err:?}");
        return Err(LnkError::ReadFile);
    }
    parse_lnk_data(&lnk_data, max_section_size)
}

/// Parse the raw bytes of `Shortcut` data
pub fn parse_lnk_data(data: &[u8], max_section_size: u64) -> Result<ShortcutLink, LnkError> {
    let (input, header) = parse_header(data)?;

    let (input, id_list) = if header.data_flags.contains(&DataFlags::HasTargetIdList) {
        let (input, list) = parse_id_list(input, max_section_size)?;
        (input, Some(list))
    } else {
        (input, None)
    };

    let (input, link_info) = if header.data_flags.contains(&DataFlags::HasLinkInfo) {
        let (input, info) = parse_location(input, max_section_size)?;
        (input, Some(info))
    } else {
        (input, None)
    };

    let (input, string_data) = parse_string_data(input, &header.data_flags, max_section_size)?;
    let (input, extra_data) = parse_extra_data(input, max_section_size)?;
    if !input.is_empty() {
        debug!(
            "[shortcuts] {} bytes remaining after the ExtraData terminal block",
            input.len()
        );
    }

    Ok(ShortcutLink {
        header,
        id_list,
        link_info,
        string_data,
        extra_data,
    })
}
