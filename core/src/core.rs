use crate::{
    shortcuts::{error::LnkError, parser::parse_lnk_data},
    structs::options::{ShortcutOptions, ShortcutToml},
};
use common::shortcuts::ShortcutLink;
use log::error;
use std::str::from_utf8;

/// Parse a TOML file containing the `[shortcuts]` options
pub fn parse_options_toml(toml_data: &[u8]) -> Result<ShortcutOptions, LnkError> {
    let toml_results = toml::from_str(from_utf8(toml_data).unwrap_or_default());
    let options: ShortcutToml = match toml_results {
        Ok(results) => results,
        Err(err) => {
            error!("[shortcuts] Failed to parse TOML data. Error: {err:?}");
            return Err(LnkError::BadToml);
        }
    };

    Ok(options.shortcuts)
}

/// Parse `Shortcut` data using the provided options
pub fn parse_with_options(
    data: &[u8],
    options: &ShortcutOptions,
) -> Result<ShortcutLink, LnkError> {
    let max_size = options.max_section_size.unwrap_or(data.len() as u64);
    parse_lnk_data(data, max_size)
}
