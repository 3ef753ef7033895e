//! Fixed-offset field access over a byte buffer.

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use crate::{text::decode_text, Error, Result};

/// A fixed byte range inside a section payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FieldSpan {
    pub offset: usize,
    pub len: usize,
}

impl FieldSpan {
    pub const fn new(offset: usize, len: usize) -> Self {
        FieldSpan { offset, len }
    }

    pub const fn end(&self) -> usize {
        self.offset + self.len
    }
}

pub fn slice(data: &[u8], span: FieldSpan) -> Result<&[u8]> {
    data.get(span.offset..span.end())
        .ok_or(Error::FieldOutOfBounds {
            offset: span.offset,
            len: span.len,
            size: data.len(),
        })
}

pub fn read_u8(data: &[u8], offset: usize) -> Result<u8> {
    Ok(slice(data, FieldSpan::new(offset, 1))?[0])
}

pub fn read_u16(data: &[u8], offset: usize) -> Result<u16> {
    Ok(LittleEndian::read_u16(slice(data, FieldSpan::new(offset, 2))?))
}

pub fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    Ok(LittleEndian::read_u32(slice(data, FieldSpan::new(offset, 4))?))
}

pub fn read_text(data: &[u8], span: FieldSpan) -> Result<String> {
    Ok(decode_text(slice(data, span)?))
}

/// Reads a little-endian integer of up to four bytes covering `span`.
pub fn read_uint(data: &[u8], span: FieldSpan) -> Result<u32> {
    let bytes = slice(data, span)?;
    match bytes.len() {
        0 => Ok(0),
        len => Ok(LittleEndian::read_uint(bytes, len.min(4)) as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian() {
        let data = [0x25, 0x20, 0x01, 0x08, 0xaa];
        assert_eq!(read_u32(&data, 0).unwrap(), 0x0801_2025);
        assert_eq!(read_u16(&data, 1).unwrap(), 0x0120);
        assert_eq!(read_u8(&data, 4).unwrap(), 0xaa);
        assert_eq!(read_uint(&data, FieldSpan::new(0, 2)).unwrap(), 0x2025);
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let data = [0u8; 4];
        assert!(matches!(
            read_u32(&data, 1),
            Err(Error::FieldOutOfBounds {
                offset: 1,
                len: 4,
                size: 4
            })
        ));
    }
}
