//! Glossary tables
//!
//! A glossary file is a u32-counted sequence of categorized sets. Each set
//! carries two opaque u32 fields, a wide-string category label, and a
//! u32-counted list of records.

use crate::error::{Error, Result};
use crate::formats::common::{self, Record};
use byteorder::{LittleEndian, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// One glossary category and its entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlossarySet {
    /// First opaque header field. Meaning unknown; preserved verbatim.
    pub unknown1: u32,
    /// Second opaque header field. Meaning unknown; preserved verbatim.
    pub unknown2: u32,
    /// Category label shown in the in-game glossary.
    pub category: String,
    /// Entries belonging to this category, in file order.
    pub entries: Vec<Record>,
}

/// A glossary file: every category set in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlossaryTable {
    pub sets: Vec<GlossarySet>,
}

/// Read a glossary file from disk.
pub fn read_glossary<P: AsRef<Path>>(path: P) -> Result<GlossaryTable> {
    let buffer = fs::read(path)?;
    parse_glossary_bytes(&buffer)
}

/// Parse glossary data from bytes.
pub fn parse_glossary_bytes(data: &[u8]) -> Result<GlossaryTable> {
    let mut cursor = Cursor::new(data);

    let count = common::read_u32(&mut cursor, "glossary set count")? as usize;
    let mut sets = Vec::with_capacity(count.min(1024));
    for i in 0..count {
        let set =
            read_glossary_set(&mut cursor).map_err(Error::element("glossary set", i, count))?;
        sets.push(set);
    }

    Ok(GlossaryTable { sets })
}

fn read_glossary_set(cursor: &mut Cursor<&[u8]>) -> Result<GlossarySet> {
    let unknown1 = common::read_u32(cursor, "unknown1")?;
    let unknown2 = common::read_u32(cursor, "unknown2")?;
    let category = common::read_wide_string(cursor, "category")?;

    let count = common::read_u32(cursor, "entry count")? as usize;
    let mut entries = Vec::with_capacity(count.min(1024));
    for i in 0..count {
        let record = Record::read(cursor).map_err(Error::element("glossary entry", i, count))?;
        entries.push(record);
    }

    Ok(GlossarySet {
        unknown1,
        unknown2,
        category,
        entries,
    })
}

/// Encode a glossary table to bytes.
pub fn glossary_to_bytes(table: &GlossaryTable) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.write_u32::<LittleEndian>(table.sets.len() as u32)?;
    for (i, set) in table.sets.iter().enumerate() {
        write_glossary_set(&mut out, set)
            .map_err(Error::element("glossary set", i, table.sets.len()))?;
    }
    Ok(out)
}

fn write_glossary_set(out: &mut Vec<u8>, set: &GlossarySet) -> Result<()> {
    out.write_u32::<LittleEndian>(set.unknown1)?;
    out.write_u32::<LittleEndian>(set.unknown2)?;
    common::write_wide_string(out, &set.category)?;
    out.write_u32::<LittleEndian>(set.entries.len() as u32)?;
    for record in &set.entries {
        record.write(out)?;
    }
    Ok(())
}

/// Write a glossary file to disk.
pub fn write_glossary<P: AsRef<Path>>(path: P, table: &GlossaryTable) -> Result<()> {
    fs::write(path, glossary_to_bytes(table)?)?;
    Ok(())
}
