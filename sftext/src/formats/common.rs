//! Shared binary primitives and the common record payload
//!
//! All SpellForce text formats are built from the same primitives:
//! little-endian fixed-width integers and length-prefixed UTF-16 strings
//! ("wide strings"). The wide string layout is a u32 code-unit count
//! followed by that many UTF-16LE code units; a count of zero is a valid
//! empty string with no payload bytes.

use crate::error::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Read};

/// Bytes left between the cursor position and the end of input.
pub(crate) fn remaining(cursor: &Cursor<&[u8]>) -> usize {
    let len = cursor.get_ref().len() as u64;
    len.saturating_sub(cursor.position()) as usize
}

/// Read a little-endian u8, labelling the field on truncation.
pub(crate) fn read_u8(cursor: &mut Cursor<&[u8]>, what: &'static str) -> Result<u8> {
    cursor
        .read_u8()
        .map_err(|_| Error::TruncatedInput { what })
}

/// Read a little-endian u16, labelling the field on truncation.
pub(crate) fn read_u16(cursor: &mut Cursor<&[u8]>, what: &'static str) -> Result<u16> {
    cursor
        .read_u16::<LittleEndian>()
        .map_err(|_| Error::TruncatedInput { what })
}

/// Read a little-endian u32, labelling the field on truncation.
pub(crate) fn read_u32(cursor: &mut Cursor<&[u8]>, what: &'static str) -> Result<u32> {
    cursor
        .read_u32::<LittleEndian>()
        .map_err(|_| Error::TruncatedInput { what })
}

/// Read a length-prefixed UTF-16LE string.
///
/// A zero count yields the empty string without consuming payload bytes.
/// Unpaired surrogates in the input decode to U+FFFD; Rust strings cannot
/// hold lone surrogates, so such (malformed) files do not round-trip
/// byte-identically. Well-formed UTF-16 always does.
pub(crate) fn read_wide_string(cursor: &mut Cursor<&[u8]>, what: &'static str) -> Result<String> {
    let count = read_u32(cursor, what)? as usize;
    if count == 0 {
        return Ok(String::new());
    }

    let byte_len = count * 2;
    if remaining(cursor) < byte_len {
        return Err(Error::TruncatedInput { what });
    }
    let mut buf = vec![0u8; byte_len];
    cursor.read_exact(&mut buf)?;

    let units: Vec<u16> = buf
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    Ok(String::from_utf16_lossy(&units))
}

/// Write a string as a length-prefixed UTF-16LE wide string.
///
/// The empty string writes only the 4-byte zero count.
pub(crate) fn write_wide_string(out: &mut Vec<u8>, text: &str) -> Result<()> {
    let units: Vec<u16> = text.encode_utf16().collect();
    out.write_u32::<LittleEndian>(units.len() as u32)?;
    for unit in units {
        out.write_u16::<LittleEndian>(unit)?;
    }
    Ok(())
}

/// Serialized size in bytes of a wide string: 4-byte count + 2 bytes per
/// UTF-16 code unit.
pub fn wide_size(text: &str) -> usize {
    4 + text.encode_utf16().count() * 2
}

/// The record payload shared by quests, glossaries, and dialogue tables.
///
/// Two leading u32 fields of unknown meaning are preserved verbatim through
/// decode/encode; they are never interpreted, validated, or defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    /// First opaque header field. Meaning unknown; preserved verbatim.
    pub unknown1: u32,
    /// Second opaque header field. Meaning unknown; preserved verbatim.
    pub unknown2: u32,
    /// Short tooltip text.
    pub tip: String,
    /// Primary description text.
    pub description1: String,
    /// Secondary description text.
    pub description2: String,
}

impl Record {
    /// Decode one record: two u32 fields then three wide strings, in order.
    pub(crate) fn read(cursor: &mut Cursor<&[u8]>) -> Result<Self> {
        Ok(Self {
            unknown1: read_u32(cursor, "unknown1")?,
            unknown2: read_u32(cursor, "unknown2")?,
            tip: read_wide_string(cursor, "tip")?,
            description1: read_wide_string(cursor, "description1")?,
            description2: read_wide_string(cursor, "description2")?,
        })
    }

    /// Encode one record in the same fixed field order.
    pub(crate) fn write(&self, out: &mut Vec<u8>) -> Result<()> {
        out.write_u32::<LittleEndian>(self.unknown1)?;
        out.write_u32::<LittleEndian>(self.unknown2)?;
        write_wide_string(out, &self.tip)?;
        write_wide_string(out, &self.description1)?;
        write_wide_string(out, &self.description2)?;
        Ok(())
    }

    /// Serialized size in bytes, recomputed from the current field contents.
    ///
    /// Callers doing offset arithmetic must call this again after any
    /// mutation; the value is never cached.
    pub fn serialized_size(&self) -> usize {
        4 + 4 + wide_size(&self.tip) + wide_size(&self.description1) + wide_size(&self.description2)
    }
}
