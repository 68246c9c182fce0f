use std::fmt;

/// Part of the `Shortcut` structure being decoded when an error occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Section {
    Header,
    IdList,
    LinkInfo,
    VolumeId,
    NetworkLink,
    StringData,
    ExtraData,
}

#[derive(Debug, PartialEq)]
pub enum LnkError {
    Truncated {
        section: Section,
        field: &'static str,
        wanted: usize,
        remaining: usize,
    },
    BadMagic(u32),
    BadClassId(String),
    SizeOverflow {
        section: Section,
        size: u64,
        max: u64,
    },
    OffsetOverflow {
        section: Section,
        field: &'static str,
        offset: u32,
        size: u32,
    },
    ItemUnderflow {
        size: u16,
    },
    ReadFile,
    NotFile,
    BadToml,
}

impl std::error::Error for LnkError {}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Header => write!(f, "ShellLinkHeader"),
            Section::IdList => write!(f, "LinkTargetIDList"),
            Section::LinkInfo => write!(f, "LinkInfo"),
            Section::VolumeId => write!(f, "VolumeID"),
            Section::NetworkLink => write!(f, "CommonNetworkRelativeLink"),
            Section::StringData => write!(f, "StringData"),
            Section::ExtraData => write!(f, "ExtraData"),
        }
    }
}

impl fmt::Display for LnkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LnkError::Truncated {
                section,
                field,
                wanted,
                remaining,
            } => write!(
                f,
                "Truncated {section} data reading {field}: wanted {wanted} bytes, {remaining} remaining"
            ),
            LnkError::BadMagic(magic) => {
                write!(f, "Bad LNK header size: got {magic:#x}, expected 0x4c")
            }
            LnkError::BadClassId(class_id) => write!(f, "Bad LNK class id: {class_id}"),
            LnkError::SizeOverflow { section, size, max } => write!(
                f,
                "{section} size {size} is not valid (max section size {max})"
            ),
            LnkError::OffsetOverflow {
                section,
                field,
                offset,
                size,
            } => write!(
                f,
                "{section} {field} {offset:#x} is outside the section ({size} bytes)"
            ),
            LnkError::ItemUnderflow { size } => {
                write!(f, "LinkTargetIDList item size {size} is smaller than 2")
            }
            LnkError::ReadFile => write!(f, "Could not read lnk file"),
            LnkError::NotFile => write!(f, "Not a file"),
            LnkError::BadToml => write!(f, "Failed to parse TOML data"),
        }
    }
}
