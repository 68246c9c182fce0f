pub mod error;
pub(crate) mod extras;
pub mod flags;
pub(crate) mod header;
pub mod hotkey;
pub(crate) mod idlist;
pub(crate) mod location;
pub(crate) mod network;
pub mod parser;
pub(crate) mod strings;
pub(crate) mod volume;
