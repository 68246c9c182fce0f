/**
 * A forward reading, bounds checked cursor over bytes that have already been read into memory.
 *
 * `Shortcut` data mixes two access patterns: fields read back to back, and strings/structures located by
 * offsets relative to the start of their own section. A cursor always keeps the full section bytes so it can be
 * re-anchored at any offset inside the section. Every read is done with `nom` and a failed read becomes a
 * `LnkError::Truncated` naming the section and field.
 */
use crate::shortcuts::error::{LnkError, Section};
use nom::{
    bytes::complete::{take, take_till},
    number::complete::{le_i32, le_u16, le_u32, le_u64},
};
use std::mem::size_of;

#[derive(Debug, Clone)]
pub(crate) struct LnkCursor<'a> {
    data: &'a [u8],
    position: usize,
    section: Section,
}

impl<'a> LnkCursor<'a> {
    pub(crate) fn new(data: &'a [u8], section: Section) -> LnkCursor<'a> {
        LnkCursor {
            data,
            position: 0,
            section,
        }
    }

    /// Create a new cursor over the same section bytes starting at `offset`
    pub(crate) fn anchored(&self, offset: u32, field: &'static str) -> Result<LnkCursor<'a>, LnkError> {
        if offset as usize > self.data.len() {
            return Err(LnkError::OffsetOverflow {
                section: self.section,
                field,
                offset,
                size: self.data.len() as u32,
            });
        }

        Ok(LnkCursor {
            data: self.data,
            position: offset as usize,
            section: self.section,
        })
    }

    #[cfg(test)]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn remaining(&self) -> usize {
        self.input().len()
    }

    /// Length of the whole buffered section
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Bytes after the current position
    pub(crate) fn rest(&self) -> &'a [u8] {
        self.input()
    }

    fn input(&self) -> &'a [u8] {
        self.data.get(self.position..).unwrap_or_default()
    }

    fn truncated(&self, field: &'static str, wanted: usize) -> LnkError {
        LnkError::Truncated {
            section: self.section,
            field,
            wanted,
            remaining: self.remaining(),
        }
    }

    fn read_number<T>(
        &mut self,
        field: &'static str,
        parser: fn(&'a [u8]) -> nom::IResult<&'a [u8], T>,
    ) -> Result<T, LnkError> {
        let input = self.input();
        match parser(input) {
            Ok((remaining, value)) => {
                self.position += input.len() - remaining.len();
                Ok(value)
            }
            Err(_err) => Err(self.truncated(field, size_of::<T>())),
        }
    }

    pub(crate) fn read_u16(&mut self, field: &'static str) -> Result<u16, LnkError> {
        self.read_number(field, le_u16)
    }

    pub(crate) fn read_u32(&mut self, field: &'static str) -> Result<u32, LnkError> {
        self.read_number(field, le_u32)
    }

    pub(crate) fn read_i32(&mut self, field: &'static str) -> Result<i32, LnkError> {
        self.read_number(field, le_i32)
    }

    pub(crate) fn read_u64(&mut self, field: &'static str) -> Result<u64, LnkError> {
        self.read_number(field, le_u64)
    }

    /// Read exactly `count` bytes
    pub(crate) fn read_bytes(&mut self, count: usize, field: &'static str) -> Result<&'a [u8], LnkError> {
        let input = self.input();
        let result: nom::IResult<&'a [u8], &'a [u8]> = take(count)(input);
        match result {
            Ok((_, value)) => {
                self.position += count;
                Ok(value)
            }
            Err(_err) => Err(self.truncated(field, count)),
        }
    }

    /// Read bytes up to a single 0 byte. The terminator is consumed but not returned
    pub(crate) fn read_until_null(&mut self, field: &'static str) -> Result<&'a [u8], LnkError> {
        let input = self.input();
        let result: nom::IResult<&'a [u8], &'a [u8]> = take_till(|b| b == 0)(input);
        let (remaining, value) = match result {
            Ok(result) => result,
            Err(_err) => return Err(self.truncated(field, input.len() + 1)),
        };

        if remaining.is_empty() {
            return Err(self.truncated(field, input.len() + 1));
        }

        let end_of_string = 1;
        self.position += value.len() + end_of_string;
        Ok(value)
    }

    /// Read UTF16 code units up to a 0x0000 unit. The terminator is consumed but not returned
    pub(crate) fn read_until_double_null(&mut self, field: &'static str) -> Result<&'a [u8], LnkError> {
        let input = self.input();
        let unit_size = size_of::<u16>();
        let end = input
            .chunks_exact(unit_size)
            .position(|unit| unit == [0, 0]);

        let string_size = match end {
            Some(units) => units * unit_size,
            None => return Err(self.truncated(field, input.len() + unit_size)),
        };

        let value = self.read_bytes(string_size, field)?;
        self.position += unit_size;
        Ok(value)
    }

    /**
     * Buffer a nested section whose first four (4) bytes are its size, including the size field itself.
     * The returned cursor is positioned right after the size field, and offsets read from it are relative to the
     * section start
     */
    pub(crate) fn sized_section(
        &mut self,
        section: Section,
        max_size: u64,
    ) -> Result<LnkCursor<'a>, LnkError> {
        let mut section_cursor = LnkCursor {
            data: self.data,
            position: self.position,
            section,
        };
        let size = section_cursor.read_u32("size")?;

        let adjust_size = size_of::<u32>() as u32;
        check_section_size(section, u64::from(size), max_size)?;
        if size < adjust_size {
            return Err(LnkError::SizeOverflow {
                section,
                size: u64::from(size),
                max: max_size,
            });
        }

        let input = self.input();
        let result: nom::IResult<&'a [u8], &'a [u8]> = take(size as usize)(input);
        let section_data = match result {
            Ok((_, value)) => value,
            Err(_err) => {
                return Err(LnkError::Truncated {
                    section,
                    field: "section data",
                    wanted: size as usize,
                    remaining: input.len(),
                })
            }
        };
        self.position += section_data.len();

        Ok(LnkCursor {
            data: section_data,
            position: adjust_size as usize,
            section,
        })
    }
}

/// Verify a size read from the file does not exceed the caller provided maximum before buffering it
pub(crate) fn check_section_size(section: Section, size: u64, max_size: u64) -> Result<(), LnkError> {
    if size > max_size {
        return Err(LnkError::SizeOverflow {
            section,
            size,
            max: max_size,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_section_size, LnkCursor};
    use crate::shortcuts::error::{LnkError, Section};

    #[test]
    fn test_read_numbers() {
        let test = [1, 0, 2, 0, 0, 0, 255, 255, 255, 255, 8, 7, 6, 5, 4, 3, 2, 1];
        let mut cursor = LnkCursor::new(&test, Section::Header);
        assert_eq!(cursor.read_u16("a").unwrap(), 1);
        assert_eq!(cursor.read_u32("b").unwrap(), 2);
        assert_eq!(cursor.read_i32("c").unwrap(), -1);
        assert_eq!(cursor.read_u64("d").unwrap(), 0x0102030405060708);
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.position(), 18);
    }

    #[test]
    fn test_short_read() {
        let test = [1, 0, 2];
        let mut cursor = LnkCursor::new(&test, Section::StringData);
        assert_eq!(cursor.read_u16("count").unwrap(), 1);

        let err = cursor.read_u32("value").unwrap_err();
        assert_eq!(
            err,
            LnkError::Truncated {
                section: Section::StringData,
                field: "value",
                wanted: 4,
                remaining: 1
            }
        );
        // A failed read does not move the cursor
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_read_bytes_past_end() {
        let test = [1, 2, 3];
        let mut cursor = LnkCursor::new(&test, Section::IdList);
        let err = cursor.read_bytes(10, "item").unwrap_err();
        assert_eq!(
            err,
            LnkError::Truncated {
                section: Section::IdList,
                field: "item",
                wanted: 10,
                remaining: 3
            }
        );
    }

    #[test]
    fn test_read_until_null() {
        let test = [67, 58, 92, 0, 65, 0];
        let mut cursor = LnkCursor::new(&test, Section::LinkInfo);
        assert_eq!(cursor.read_until_null("path").unwrap(), b"C:\\");
        assert_eq!(cursor.read_until_null("path").unwrap(), b"A");
        assert!(cursor.read_until_null("path").is_err());
    }

    #[test]
    fn test_read_until_null_unterminated() {
        let test = [67, 58, 92];
        let mut cursor = LnkCursor::new(&test, Section::LinkInfo);
        assert!(matches!(
            cursor.read_until_null("path"),
            Err(LnkError::Truncated { .. })
        ));
    }

    #[test]
    fn test_read_until_double_null() {
        // "C" then a unit whose high byte is 0 must not end the string early
        let test = [67, 0, 0, 1, 0, 0, 99];
        let mut cursor = LnkCursor::new(&test, Section::LinkInfo);
        assert_eq!(
            cursor.read_until_double_null("path").unwrap(),
            &[67, 0, 0, 1]
        );
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn test_anchored() {
        let test = [9, 9, 9, 9, 65, 66, 0];
        let cursor = LnkCursor::new(&test, Section::VolumeId);
        let mut label = cursor.anchored(4, "label_offset").unwrap();
        assert_eq!(label.read_until_null("label").unwrap(), b"AB");

        let err = cursor.anchored(8, "label_offset").unwrap_err();
        assert_eq!(
            err,
            LnkError::OffsetOverflow {
                section: Section::VolumeId,
                field: "label_offset",
                offset: 8,
                size: 7
            }
        );
    }

    #[test]
    fn test_sized_section() {
        let test = [8, 0, 0, 0, 1, 0, 0, 0, 77];
        let mut cursor = LnkCursor::new(&test, Section::Header);
        let mut section = cursor.sized_section(Section::LinkInfo, 100).unwrap();
        assert_eq!(section.len(), 8);
        assert_eq!(section.position(), 4);
        assert_eq!(section.read_u32("flags").unwrap(), 1);
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn test_sized_section_too_large() {
        let test = [0, 1, 0, 0, 1, 0, 0, 0];
        let mut cursor = LnkCursor::new(&test, Section::Header);
        let err = cursor.sized_section(Section::LinkInfo, 100).unwrap_err();
        assert_eq!(
            err,
            LnkError::SizeOverflow {
                section: Section::LinkInfo,
                size: 256,
                max: 100
            }
        );

        let err = cursor.sized_section(Section::LinkInfo, 1000).unwrap_err();
        assert_eq!(
            err,
            LnkError::Truncated {
                section: Section::LinkInfo,
                field: "section data",
                wanted: 256,
                remaining: 8
            }
        );
    }

    #[test]
    fn test_sized_section_smaller_than_size_field() {
        let test = [2, 0, 0, 0];
        let mut cursor = LnkCursor::new(&test, Section::Header);
        assert!(matches!(
            cursor.sized_section(Section::VolumeId, 100),
            Err(LnkError::SizeOverflow { .. })
        ));
    }

    #[test]
    fn test_check_section_size() {
        assert!(check_section_size(Section::ExtraData, 10, 10).is_ok());
        assert!(check_section_size(Section::ExtraData, 11, 10).is_err());
    }
}
