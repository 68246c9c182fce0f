use common::shortcuts::{
    AttributeFlags, BlockPayload, DataFlags, LocationFlag, NetworkFlags, NetworkProviderType,
    ShowCommand,
};
use lnkparse::{
    check_header, decode_flags, hotkey_string, parse_lnk_data, parse_lnk_file, parse_options_toml,
    parse_with_options, LnkError, Section,
};
use std::{fs::read, path::PathBuf};

fn lnk_path(name: &str) -> String {
    let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    test_location.push("tests/test_data/lnk");
    test_location.push(name);
    test_location.display().to_string()
}

#[test]
fn test_network_share_lnk() {
    let result = parse_lnk_file(&lnk_path("network_share.lnk")).unwrap();

    assert_eq!(
        result.header.data_flags,
        [
            DataFlags::HasLinkInfo,
            DataFlags::HasName,
            DataFlags::HasWorkingDirectory,
            DataFlags::HasArguments,
            DataFlags::HasIconLocation,
            DataFlags::IsUnicode
        ]
    );
    assert_eq!(result.header.attribute_flags, [AttributeFlags::Archive]);
    assert_eq!(result.header.file_size, 123456);
    assert_eq!(result.header.show_command, ShowCommand::ShowMaximized);
    assert_eq!(result.header.hotkey, "CTRL+F");
    assert_eq!(result.header.created.unwrap().timestamp(), 1668204504);
    assert_eq!(result.header.accessed.unwrap().timestamp(), 1668204505);
    assert_eq!(result.header.modified.unwrap().timestamp(), 1668204506);
    assert!(result.id_list.is_none());

    let info = result.link_info.unwrap();
    assert_eq!(
        info.flags,
        [LocationFlag::CommonNetworkRelativeLinkAndPathSuffix]
    );
    assert!(info.volume_id.is_none());
    assert!(info.local_base_path.is_none());
    assert_eq!(info.common_path_suffix.unwrap(), "docs\\report.txt");

    let network = info.network_link.unwrap();
    assert_eq!(
        network.flags,
        [NetworkFlags::ValidDevice, NetworkFlags::ValidNetType]
    );
    assert_eq!(network.net_name.unwrap(), "\\\\server\\share");
    assert_eq!(network.device_name.unwrap(), "Z:");
    // 0x20000 is not a known provider
    assert_eq!(network.provider_type, NetworkProviderType::Unknown);
    assert_eq!(network.provider_value, 0x20000);

    let strings = result.string_data;
    assert_eq!(strings.name.unwrap(), "Quarterly report");
    assert_eq!(strings.relative_path, None);
    assert_eq!(strings.working_directory.unwrap(), "\\\\server\\share\\docs");
    assert_eq!(strings.arguments.unwrap(), "/print \"report.txt\"");
    assert_eq!(
        strings.icon_location.unwrap(),
        "%SystemRoot%\\system32\\shell32.dll"
    );
    assert!(!strings.is_abnormal);

    let extra = result.extra_data;
    assert_eq!(extra.blocks.len(), 2);
    assert_eq!(extra.blocks[0].block_type, "SpecialFolderDataBlock");
    assert_eq!(extra.blocks[0].data, [36, 0, 0, 0, 28, 0, 0, 0]);
    assert_eq!(extra.blocks[1].block_type, "Unknown signature 0xa0000042");
    assert_eq!(extra.blocks[1].payload, BlockPayload::Opaque);
    assert_eq!(extra.terminal, 0);
}

#[test]
fn test_projects_dir_lnk_json() {
    let result = parse_lnk_file(&lnk_path("projects_dir.lnk")).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(
        value["header"]["class_id"],
        "00021401-0000-0000-c000-000000000046"
    );
    assert_eq!(value["header"]["created"], "2022-11-03T02:09:27.905994200Z");
    assert_eq!(value["header"]["attribute_flags"][0], "Directory");
    assert_eq!(
        value["link_info"]["volume_id"]["drive_type"],
        "DriveFixed"
    );
    assert_eq!(
        value["extra_data"]["blocks"][0]["payload"]["Tracker"]["machine_id"],
        "desktop-eis938n"
    );
    assert_eq!(value["extra_data"]["blocks"][1]["payload"], "Opaque");
}

#[test]
fn test_minimal_lnk() {
    let data = read(lnk_path("minimal.lnk")).unwrap();
    assert!(check_header(&data));

    let result = parse_with_options(&data, &parse_options_toml(b"").unwrap()).unwrap();
    assert_eq!(result.header.data_flags, [DataFlags::IsUnicode]);
    assert!(result.header.created.is_none());
    assert!(result.header.accessed.is_none());
    assert!(result.header.modified.is_none());
    assert_eq!(result.header.hotkey, "no hotkey assigned");
}

#[test]
fn test_truncated_header() {
    let data = read(lnk_path("minimal.lnk")).unwrap();
    let err = parse_lnk_data(&data[..70], 1024).unwrap_err();
    assert_eq!(
        err,
        LnkError::Truncated {
            section: Section::Header,
            field: "reserved2",
            wanted: 4,
            remaining: 2
        }
    );
}

#[test]
fn test_not_lnk_data() {
    let data = read(lnk_path("minimal.lnk")).unwrap();
    let mut bad = data.clone();
    bad[0] = 0;
    assert!(!check_header(&bad));
    assert_eq!(parse_lnk_data(&bad, 1024).unwrap_err(), LnkError::BadMagic(0));
}

#[test]
fn test_public_helpers() {
    assert_eq!(hotkey_string(0x0490), "ALT+NUM LOCK");
    assert_eq!(
        decode_flags(0b101, &["ValidDevice", "ValidNetType"]),
        ["ValidDevice"]
    );
}
