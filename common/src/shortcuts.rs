use chrono::{DateTime, Utc};
use serde::Serialize;

/// A fully decoded `Shortcut` (lnk) file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortcutLink {
    pub header: LnkHeader,
    pub id_list: Option<IdList>,
    pub link_info: Option<LinkInfo>,
    pub string_data: StringData,
    pub extra_data: ExtraData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LnkHeader {
    /**Always 0x4c (76) */
    pub size: u32,
    /**Always 00021401-0000-0000-c000-000000000046 */
    pub class_id: String,
    pub data_flags: Vec<DataFlags>,
    pub attribute_flags: Vec<AttributeFlags>,
    /**`None` when the FILETIME is zero (not set) */
    pub created: Option<DateTime<Utc>>,
    pub accessed: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    /**Lower 32 bits only if the target is larger than 4GB */
    pub file_size: u32,
    pub icon_index: i32,
    pub show_command: ShowCommand,
    pub show_command_value: u32,
    pub hotkey: String,
    pub hotkey_value: u16,
    pub reserved: u16,
    pub reserved2: u32,
    pub reserved3: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DataFlags {
    HasTargetIdList,
    HasLinkInfo,
    HasName,
    HasRelativePath,
    HasWorkingDirectory,
    HasArguments,
    HasIconLocation,
    IsUnicode,
    ForceNoLinkInfo,
    HasExpString,
    RunInSeparateProcess,
    Unused1,
    HasDarwinId,
    RunAsUser,
    HasExpIcon,
    NoPidlAlias,
    Unused2,
    RunWithShimLayer,
    ForceNoLinkTrack,
    EnableTargetMetadata,
    DisableLinkPathTracking,
    DisableKnownFolderTracking,
    DisableKnownFolderAlias,
    AllowLinkToLink,
    UnaliasOnSave,
    PreferEnvironmentPath,
    KeepLocalIdListForUncTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AttributeFlags {
    ReadOnly,
    Hidden,
    System,
    Reserved1,
    Directory,
    Archive,
    Reserved2,
    Normal,
    Temporary,
    SparseFile,
    ReparsePoint,
    Compressed,
    Offline,
    NotContentIndexed,
    Encrypted,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ShowCommand {
    ShowNormal,
    ShowMaximized,
    ShowMinNoActive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdList {
    /**Size of the item list, not including this field */
    pub size: u16,
    pub items: Vec<ItemId>,
    pub terminal: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemId {
    /**Size of the item including the size field itself */
    pub size: u16,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkInfo {
    pub size: u32,
    pub header_size: u32,
    pub flags: Vec<LocationFlag>,
    pub volume_id_offset: u32,
    pub local_base_path_offset: u32,
    pub network_link_offset: u32,
    pub common_path_suffix_offset: u32,
    pub local_base_path_offset_unicode: Option<u32>,
    pub common_path_suffix_offset_unicode: Option<u32>,
    pub volume_id: Option<VolumeId>,
    pub local_base_path: Option<String>,
    pub network_link: Option<NetworkLink>,
    pub common_path_suffix: Option<String>,
    pub local_base_path_unicode: Option<String>,
    pub common_path_suffix_unicode: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LocationFlag {
    VolumeIDAndLocalBasePath,
    CommonNetworkRelativeLinkAndPathSuffix,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeId {
    pub size: u32,
    pub drive_type: DriveType,
    pub drive_type_value: u32,
    /**Raw serial bytes as stored on disk */
    pub drive_serial_number: [u8; 4],
    /**Serial rendered the way `vol` shows it */
    pub drive_serial: String,
    pub volume_label_offset: u32,
    pub volume_label_offset_unicode: Option<u32>,
    pub volume_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DriveType {
    DriveUnknown,
    DriveNoRootDir,
    DriveRemovable,
    DriveFixed,
    DriveRemote,
    DriveCdrom,
    DriveRamdisk,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkLink {
    pub size: u32,
    pub flags: Vec<NetworkFlags>,
    pub net_name_offset: u32,
    pub device_name_offset: u32,
    pub provider_type: NetworkProviderType,
    pub provider_value: u32,
    pub net_name_offset_unicode: Option<u32>,
    pub device_name_offset_unicode: Option<u32>,
    pub net_name: Option<String>,
    pub device_name: Option<String>,
    pub net_name_unicode: Option<String>,
    pub device_name_unicode: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum NetworkFlags {
    ValidDevice,
    ValidNetType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum NetworkProviderType {
    WnncNetAvid,
    WnncNetDocuspace,
    WnncNetMangosoft,
    WnncNetSernet,
    WnncNetRiverFront1,
    WnncNetRiverFront2,
    WnncNetDecorb,
    WnncNetProtstor,
    WnncNetFjRedir,
    WnncNetDistinct,
    WnncNetTwins,
    WnncNetRdr2Sample,
    WnncNetCsc,
    WnncNet3In1,
    WnncNetExtendNet,
    WnncNetStac,
    WnncNetFoxbat,
    WnncNetYahoo,
    WnncNetExifs,
    WnncNetDav,
    WnncNetKnoware,
    WnncNetObjectDire,
    WnncNetMasfax,
    WnncNetHobNfs,
    WnncNetShiva,
    WnncNetIbmal,
    WnncNetLock,
    WnncNetTermsrv,
    WnncNetSrt,
    WnncNetQuincy,
    WnncNetOpenafs,
    WnncNetAvid1,
    WnncNetDfs,
    WnncNetKwnp,
    WnncNetZenworks,
    WnncNetDriveOnWeb,
    WnncNetVmware,
    WnncNetRsfx,
    WnncNetMfiles,
    WnncNetMsNfs,
    WnncNetGoogle,
    Unknown,
    /**ValidNetType flag not set */
    None,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StringData {
    pub name: Option<String>,
    pub relative_path: Option<String>,
    pub working_directory: Option<String>,
    pub arguments: Option<String>,
    pub icon_location: Option<String>,
    pub is_unicode: bool,
    /**Set when a string is longer than Windows itself would ever write */
    pub is_abnormal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtraData {
    pub blocks: Vec<ExtraDataBlock>,
    /**Terminal block value, always less than 4 */
    pub terminal: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtraDataBlock {
    pub size: u32,
    pub signature: u32,
    pub block_type: String,
    /**Block bytes after the size and signature */
    pub data: Vec<u8>,
    pub payload: BlockPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BlockPayload {
    Tracker(TrackerBlock),
    KnownFolder(KnownFolderBlock),
    /**No field level decoder for this signature. See `ExtraDataBlock::data` */
    Opaque,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerBlock {
    pub length: u32,
    pub version: u32,
    pub machine_id: String,
    pub droid_volume_id: String,
    pub droid_file_id: String,
    pub birth_droid_volume_id: String,
    pub birth_droid_file_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnownFolderBlock {
    pub known_folder_id: String,
    /**Offset into the target IDList */
    pub offset: u32,
}
