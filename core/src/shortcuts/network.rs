use super::{
    error::{LnkError, Section},
    flags::{decode_flags, NETWORK_FLAGS},
    location::{read_ascii_at, read_unicode_at},
};
use crate::utils::cursor::LnkCursor;
use common::shortcuts::{NetworkFlags, NetworkLink, NetworkProviderType};
use log::warn;

/// Parse the `CommonNetworkRelativeLink` structure located inside the `LinkInfo` section
pub(crate) fn parse_network(
    location: &LnkCursor<'_>,
    offset: u32,
    max_size: u64,
) -> Result<NetworkLink, LnkError> {
    let mut start = location.anchored(offset, "network_link_offset")?;
    let mut cursor = start.sized_section(Section::NetworkLink, max_size)?;

    let flag_value = cursor.read_u32("flags")?;
    let net_name_offset = cursor.read_u32("net_name_offset")?;
    let device_name_offset = cursor.read_u32("device_name_offset")?;
    let provider_value = cursor.read_u32("network_provider_type")?;

    let flags = decode_flags(flag_value, &NETWORK_FLAGS);
    // Provider type is only meaningful if ValidNetType is set
    let provider_type = if flags.contains(&NetworkFlags::ValidNetType) {
        provider_type(provider_value)
    } else {
        NetworkProviderType::None
    };

    let mut network = NetworkLink {
        size: cursor.len() as u32,
        flags,
        net_name_offset,
        device_name_offset,
        provider_type,
        provider_value,
        net_name_offset_unicode: None,
        device_name_offset_unicode: None,
        net_name: None,
        device_name: None,
        net_name_unicode: None,
        device_name_unicode: None,
    };

    let has_unicode = 0x14;
    let no_name = 0;
    if net_name_offset > has_unicode {
        let net_unicode = cursor.read_u32("net_name_offset_unicode")?;
        let device_unicode = cursor.read_u32("device_name_offset_unicode")?;
        network.net_name_offset_unicode = Some(net_unicode);
        network.device_name_offset_unicode = Some(device_unicode);

        if net_unicode != no_name {
            network.net_name_unicode = Some(read_unicode_at(
                &cursor,
                net_unicode,
                "net_name_offset_unicode",
            )?);
        }
        if device_unicode != no_name {
            network.device_name_unicode = Some(read_unicode_at(
                &cursor,
                device_unicode,
                "device_name_offset_unicode",
            )?);
        }
        return Ok(network);
    }

    if net_name_offset != no_name {
        network.net_name = Some(read_ascii_at(&cursor, net_name_offset, "net_name_offset")?);
    }
    if network.flags.contains(&NetworkFlags::ValidDevice) && device_name_offset != no_name {
        network.device_name = Some(read_ascii_at(
            &cursor,
            device_name_offset,
            "device_name_offset",
        )?);
    }

    Ok(network)
}

/// Get provider type for network device
fn provider_type(provider: u32) -> NetworkProviderType {
    match provider {
        0x1a0000 => NetworkProviderType::WnncNetAvid,
        0x1b0000 => NetworkProviderType::WnncNetDocuspace,
        0x1c0000 => NetworkProviderType::WnncNetMangosoft,
        0x1d0000 => NetworkProviderType::WnncNetSernet,
        0x1e0000 => NetworkProviderType::WnncNetRiverFront1,
        0x1f0000 => NetworkProviderType::WnncNetRiverFront2,
        0x200000 => NetworkProviderType::WnncNetDecorb,
        0x210000 => NetworkProviderType::WnncNetProtstor,
        0x220000 => NetworkProviderType::WnncNetFjRedir,
        0x230000 => NetworkProviderType::WnncNetDistinct,
        0x240000 => NetworkProviderType::WnncNetTwins,
        0x250000 => NetworkProviderType::WnncNetRdr2Sample,
        0x260000 => NetworkProviderType::WnncNetCsc,
        0x270000 => NetworkProviderType::WnncNet3In1,
        0x290000 => NetworkProviderType::WnncNetExtendNet,
        0x2a0000 => NetworkProviderType::WnncNetStac,
        0x2b0000 => NetworkProviderType::WnncNetFoxbat,
        0x2c0000 => NetworkProviderType::WnncNetYahoo,
        0x2d0000 => NetworkProviderType::WnncNetExifs,
        0x2e0000 => NetworkProviderType::WnncNetDav,
        0x2f0000 => NetworkProviderType::WnncNetKnoware,
        0x300000 => NetworkProviderType::WnncNetObjectDire,
        0x310000 => NetworkProviderType::WnncNetMasfax,
        0x320000 => NetworkProviderType::WnncNetHobNfs,
        0x330000 => NetworkProviderType::WnncNetShiva,
        0x340000 => NetworkProviderType::WnncNetIbmal,
        0x350000 => NetworkProviderType::WnncNetLock,
        0x360000 => NetworkProviderType::WnncNetTermsrv,
        0x370000 => NetworkProviderType::WnncNetSrt,
        0x380000 => NetworkProviderType::WnncNetQuincy,
        0x390000 => NetworkProviderType::WnncNetOpenafs,
        0x3a0000 => NetworkProviderType::WnncNetAvid1,
        0x3b0000 => NetworkProviderType::WnncNetDfs,
        0x3c0000 => NetworkProviderType::WnncNetKwnp,
        0x3d0000 => NetworkProviderType::WnncNetZenworks,
        0x3e0000 => NetworkProviderType::WnncNetDriveOnWeb,
        0x3f0000 => NetworkProviderType::WnncNetVmware,
        0x400000 => NetworkProviderType::WnncNetRsfx,
        0x410000 => NetworkProviderType::WnncNetMfiles,
        0x420000 => NetworkProviderType::WnncNetMsNfs,
        0x430000 => NetworkProviderType::WnncNetGoogle,
        _ => {
            warn!("[shortcuts] Unknown network provider type: {provider:#x}");
            NetworkProviderType::Unknown
        }
    }
}
