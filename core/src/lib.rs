//! Decoder for Windows `Shortcut` (lnk) files.
//!
//! ```no_run
//! let link = lnkparse::parse_lnk_file("C:\\Users\\Public\\Desktop\\Firefox.lnk").unwrap();
//! println!("{:?}", link.link_info);
//! ```

mod core;
pub mod shortcuts;
pub mod structs;
pub(crate) mod utils;

pub use crate::core::{parse_options_toml, parse_with_options};
pub use shortcuts::error::{LnkError, Section};
pub use shortcuts::flags::decode_flags;
pub use shortcuts::header::check_header;
pub use shortcuts::hotkey::hotkey_string;
pub use shortcuts::parser::{parse_lnk_data, parse_lnk_file, parse_lnk_reader};
pub use structs::options::ShortcutOptions;
