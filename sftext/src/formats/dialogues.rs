//! Dialogue tables
//!
//! A dialogues file starts with a one-byte toggle that decides whether every
//! entry carries a trailing wide-string description. The toggle is read once
//! and threaded through all entries; it is never re-read per element.
//!
//! Entry identifiers are raw length-prefixed bytes, not wide strings. They
//! are interpreted as UTF-8 only at the model boundary and re-encoded as the
//! same bytes, never through the wide-string path.

use crate::error::{Error, Result};
use crate::formats::common::{self, Record};
use byteorder::{LittleEndian, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

/// One dialogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dialogue {
    /// The shared record payload.
    pub content: Record,
    /// Raw identifier string (ASCII in shipped files).
    pub id: String,
    /// Extra description, only present in files whose toggle is set.
    #[serde(default)]
    pub description: String,
}

/// A dialogues file: the description toggle plus all entries in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DialogueTable {
    /// Whether entries carry the trailing description field.
    pub has_description: bool,
    pub dialogues: Vec<Dialogue>,
}

/// Read a dialogues file from disk.
pub fn read_dialogues<P: AsRef<Path>>(path: P) -> Result<DialogueTable> {
    let buffer = fs::read(path)?;
    parse_dialogues_bytes(&buffer)
}

/// Parse dialogues data from bytes.
pub fn parse_dialogues_bytes(data: &[u8]) -> Result<DialogueTable> {
    let mut cursor = Cursor::new(data);

    let has_description = common::read_u8(&mut cursor, "description toggle")? != 0;
    let count = common::read_u32(&mut cursor, "dialogue count")? as usize;

    let mut dialogues = Vec::with_capacity(count.min(1024));
    for i in 0..count {
        let entry = read_dialogue(&mut cursor, has_description)
            .map_err(Error::element("dialogue", i, count))?;
        dialogues.push(entry);
    }

    Ok(DialogueTable {
        has_description,
        dialogues,
    })
}

fn read_dialogue(cursor: &mut Cursor<&[u8]>, has_description: bool) -> Result<Dialogue> {
    let content = Record::read(cursor)?;

    let id_len = common::read_u32(cursor, "identifier length")? as usize;
    if common::remaining(cursor) < id_len {
        return Err(Error::TruncatedInput { what: "identifier" });
    }
    let mut id_bytes = vec![0u8; id_len];
    cursor.read_exact(&mut id_bytes)?;
    let id = String::from_utf8(id_bytes)?;

    let description = if has_description {
        common::read_wide_string(cursor, "description")?
    } else {
        String::new()
    };

    Ok(Dialogue {
        content,
        id,
        description,
    })
}

/// Encode a dialogue table to bytes.
///
/// With the toggle off, entry descriptions are not written even when the
/// in-memory model holds non-empty ones.
pub fn dialogues_to_bytes(table: &DialogueTable) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.write_u8(u8::from(table.has_description))?;
    out.write_u32::<LittleEndian>(table.dialogues.len() as u32)?;
    for (i, entry) in table.dialogues.iter().enumerate() {
        write_dialogue(&mut out, entry, table.has_description)
            .map_err(Error::element("dialogue", i, table.dialogues.len()))?;
    }
    Ok(out)
}

fn write_dialogue(out: &mut Vec<u8>, entry: &Dialogue, has_description: bool) -> Result<()> {
    entry.content.write(out)?;

    // Raw byte length, not a UTF-16 code-unit count.
    out.write_u32::<LittleEndian>(entry.id.len() as u32)?;
    out.extend_from_slice(entry.id.as_bytes());

    if has_description {
        common::write_wide_string(out, &entry.description)?;
    }
    Ok(())
}

/// Write a dialogues file to disk.
pub fn write_dialogues<P: AsRef<Path>>(path: P, table: &DialogueTable) -> Result<()> {
    fs::write(path, dialogues_to_bytes(table)?)?;
    Ok(())
}
