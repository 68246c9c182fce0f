use common::shortcuts::{AttributeFlags, DataFlags, LocationFlag, NetworkFlags};

/// `LinkFlags` names in bit order, starting at bit 0
pub(crate) const DATA_FLAGS: [DataFlags; 27] = [
    DataFlags::HasTargetIdList,
    DataFlags::HasLinkInfo,
    DataFlags::HasName,
    DataFlags::HasRelativePath,
    DataFlags::HasWorkingDirectory,
    DataFlags::HasArguments,
    DataFlags::HasIconLocation,
    DataFlags::IsUnicode,
    DataFlags::ForceNoLinkInfo,
    DataFlags::HasExpString,
    DataFlags::RunInSeparateProcess,
    DataFlags::Unused1,
    DataFlags::HasDarwinId,
    DataFlags::RunAsUser,
    DataFlags::HasExpIcon,
    DataFlags::NoPidlAlias,
    DataFlags::Unused2,
    DataFlags::RunWithShimLayer,
    DataFlags::ForceNoLinkTrack,
    DataFlags::EnableTargetMetadata,
    DataFlags::DisableLinkPathTracking,
    DataFlags::DisableKnownFolderTracking,
    DataFlags::DisableKnownFolderAlias,
    DataFlags::AllowLinkToLink,
    DataFlags::UnaliasOnSave,
    DataFlags::PreferEnvironmentPath,
    DataFlags::KeepLocalIdListForUncTarget,
];

/// Target file attribute names in bit order
pub(crate) const ATTRIBUTE_FLAGS: [AttributeFlags; 15] = [
    AttributeFlags::ReadOnly,
    AttributeFlags::Hidden,
    AttributeFlags::System,
    AttributeFlags::Reserved1,
    AttributeFlags::Directory,
    AttributeFlags::Archive,
    AttributeFlags::Reserved2,
    AttributeFlags::Normal,
    AttributeFlags::Temporary,
    AttributeFlags::SparseFile,
    AttributeFlags::ReparsePoint,
    AttributeFlags::Compressed,
    AttributeFlags::Offline,
    AttributeFlags::NotContentIndexed,
    AttributeFlags::Encrypted,
];

pub(crate) const LOCATION_FLAGS: [LocationFlag; 2] = [
    LocationFlag::VolumeIDAndLocalBasePath,
    LocationFlag::CommonNetworkRelativeLinkAndPathSuffix,
];

pub(crate) const NETWORK_FLAGS: [NetworkFlags; 2] =
    [NetworkFlags::ValidDevice, NetworkFlags::ValidNetType];

/**
 * Map every set bit of `value` to the name at the same index in `names`.
 * Bit `i` maps to `names[i]` and bits without a name are ignored.
 * Results are ordered by increasing bit position
 */
pub fn decode_flags<T: Clone>(value: u32, names: &[T]) -> Vec<T> {
    let mut flags = Vec::new();
    for (bit, name) in names.iter().enumerate().take(u32::BITS as usize) {
        if (value >> bit) & 1 == 1 {
            flags.push(name.clone());
        }
    }
    flags
}
