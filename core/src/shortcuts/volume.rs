use super::{
    error::{LnkError, Section},
    location::{read_ascii_at, read_unicode_at},
};
use crate::utils::cursor::LnkCursor;
use common::shortcuts::{DriveType, VolumeId};
use log::warn;

/// Parse the `VolumeID` structure located inside the `LinkInfo` section
pub(crate) fn parse_volume(
    location: &LnkCursor<'_>,
    offset: u32,
    max_size: u64,
) -> Result<VolumeId, LnkError> {
    let mut start = location.anchored(offset, "volume_id_offset")?;
    let mut cursor = start.sized_section(Section::VolumeId, max_size)?;

    let drive_type_value = cursor.read_u32("drive_type")?;
    let serial_size = 4;
    let serial_data = cursor.read_bytes(serial_size, "drive_serial_number")?;
    let volume_label_offset = cursor.read_u32("volume_label_offset")?;

    let mut drive_serial_number = [0; 4];
    drive_serial_number.copy_from_slice(serial_data);

    // An offset of 0x14 means the ASCII label is ignored and the unicode label offset follows
    let use_unicode = 0x14;
    let (volume_label_offset_unicode, volume_label) = if volume_label_offset == use_unicode {
        let unicode_offset = cursor.read_u32("volume_label_offset_unicode")?;
        let label = read_unicode_at(&cursor, unicode_offset, "volume_label_offset_unicode")?;
        (Some(unicode_offset), label)
    } else {
        let label = read_ascii_at(&cursor, volume_label_offset, "volume_label_offset")?;
        (None, label)
    };

    let volume = VolumeId {
        size: cursor.len() as u32,
        drive_type: drive_type(drive_type_value),
        drive_type_value,
        drive_serial_number,
        drive_serial: format!("{:08X}", u32::from_le_bytes(drive_serial_number)),
        volume_label_offset,
        volume_label_offset_unicode,
        volume_label,
    };
    Ok(volume)
}

/// Get drive types from `Shortcut` data
fn drive_type(value: u32) -> DriveType {
    match value {
        0 => DriveType::DriveUnknown,
        1 => DriveType::DriveNoRootDir,
        2 => DriveType::DriveRemovable,
        3 => DriveType::DriveFixed,
        4 => DriveType::DriveRemote,
        5 => DriveType::DriveCdrom,
        6 => DriveType::DriveRamdisk,
        _ => {
            warn!("[shortcuts] Unknown drive type: {value}");
            DriveType::Invalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{drive_type, parse_volume};
    use crate::shortcuts::error::{LnkError, Section};
    use crate::utils::cursor::LnkCursor;
    use common::shortcuts::DriveType;

    #[test]
    fn test_parse_volume() {
        let test = [
            9, 9, 9, 9, 17, 0, 0, 0, 3, 0, 0, 0, 111, 18, 157, 212, 16, 0, 0, 0, 0,
        ];
        let location = LnkCursor::new(&test, Section::LinkInfo);
        let result = parse_volume(&location, 4, 100).unwrap();
        assert_eq!(result.size, 17);
        assert_eq!(result.drive_type, DriveType::DriveFixed);
        assert_eq!(result.drive_type_value, 3);
        assert_eq!(result.drive_serial_number, [111, 18, 157, 212]);
        assert_eq!(result.drive_serial, "D49D126F");
        assert_eq!(result.volume_label_offset, 16);
        assert_eq!(result.volume_label_offset_unicode, None);
        assert_eq!(result.volume_label, "");
    }

    #[test]
    fn test_parse_volume_ascii_label() {
        let test = [
            21, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 16, 0, 0, 0, 85, 83, 66, 0, 0,
        ];
        let location = LnkCursor::new(&test, Section::LinkInfo);
        let result = parse_volume(&location, 0, 100).unwrap();
        assert_eq!(result.drive_type, DriveType::DriveRemovable);
        assert_eq!(result.drive_serial, "00000001");
        assert_eq!(result.volume_label, "USB");
    }

    #[test]
    fn test_parse_volume_unicode_label() {
        // Label offset 0x14 points to the unicode offset field instead of an ASCII label
        let test = [
            32, 0, 0, 0, 5, 0, 0, 0, 1, 2, 3, 4, 20, 0, 0, 0, 20, 0, 0, 0, 68, 0, 86, 0, 68, 0,
            0, 0, 0, 0, 0, 0,
        ];
        let location = LnkCursor::new(&test, Section::LinkInfo);
        let result = parse_volume(&location, 0, 100).unwrap();
        assert_eq!(result.drive_type, DriveType::DriveCdrom);
        assert_eq!(result.drive_serial, "04030201");
        assert_eq!(result.volume_label_offset, 20);
        assert_eq!(result.volume_label_offset_unicode, Some(20));
        assert_eq!(result.volume_label, "DVD");
    }

    #[test]
    fn test_parse_volume_label_outside() {
        let test = [17, 0, 0, 0, 3, 0, 0, 0, 1, 2, 3, 4, 64, 0, 0, 0, 0];
        let location = LnkCursor::new(&test, Section::LinkInfo);
        let err = parse_volume(&location, 0, 100).unwrap_err();
        assert_eq!(
            err,
            LnkError::OffsetOverflow {
                section: Section::VolumeId,
                field: "volume_label_offset",
                offset: 64,
                size: 17
            }
        );
    }

    #[test]
    fn test_parse_volume_too_large() {
        let test = [17, 0, 0, 0, 3, 0, 0, 0, 1, 2, 3, 4, 16, 0, 0, 0, 0];
        let location = LnkCursor::new(&test, Section::LinkInfo);
        assert!(matches!(
            parse_volume(&location, 0, 10),
            Err(LnkError::SizeOverflow {
                section: Section::VolumeId,
                ..
            })
        ));
    }

    #[test]
    fn test_drive_type() {
        assert_eq!(drive_type(6), DriveType::DriveRamdisk);
        assert_eq!(drive_type(1), DriveType::DriveNoRootDir);
        assert_eq!(drive_type(7), DriveType::Invalid);
    }
}
