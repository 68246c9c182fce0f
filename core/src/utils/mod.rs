pub(crate) mod cursor;
pub(crate) mod encoding;
pub(crate) mod strings;
pub(crate) mod time;
pub(crate) mod uuid;
