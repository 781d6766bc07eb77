//! `.ctx` file reading and boundary inference

use super::{CtxDocument, CtxEntry, LanguageIndex};
use crate::error::{Error, Result};
use crate::formats::common::{self, read_u32, read_wide_string};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Read a `.ctx` file from disk.
pub fn read_ctx<P: AsRef<Path>>(path: P) -> Result<CtxDocument> {
    let buffer = fs::read(path)?;
    parse_ctx_bytes(&buffer)
}

/// Parse `.ctx` data from bytes.
///
/// Walks the record region once, splitting it into per-language entry lists
/// by comparing the running consumed-byte count against each next index
/// entry's declared offset. The last language runs until end-of-stream; EOF
/// exactly at an entry boundary is the clean terminal state.
pub fn parse_ctx_bytes(data: &[u8]) -> Result<CtxDocument> {
    let mut cursor = Cursor::new(data);

    let unknown1 = read_u32(&mut cursor, "header field 1")?;
    let unknown2 = read_u32(&mut cursor, "header field 2")?;

    let count = read_u32(&mut cursor, "language count")? as usize;
    let mut document = CtxDocument {
        unknown1,
        unknown2,
        index: Vec::new(),
        languages: Vec::new(),
    };
    // A container with no languages ends right after the count.
    if count == 0 {
        return Ok(document);
    }

    document.index.reserve(count.min(64));
    for i in 0..count {
        let entry =
            read_language_index(&mut cursor).map_err(Error::element("language index", i, count))?;
        document.index.push(entry);
    }

    if document.index[0].offset != 0 {
        return Err(Error::InvalidOffsetBase {
            found: document.index[0].offset,
        });
    }

    // The record region is one contiguous stream; the running offset keeps
    // counting across language boundaries.
    let region_base = cursor.position();
    document.languages = vec![Vec::new(); count];
    for k in 0..count {
        let last = k == count - 1;
        let limit = if last {
            None
        } else {
            Some(document.index[k + 1].offset)
        };

        loop {
            let consumed = (cursor.position() - region_base) as u32;
            match limit {
                Some(end) if consumed == end => break,
                Some(end) if consumed > end => {
                    return Err(Error::OffsetMismatch {
                        language: k,
                        expected: end,
                        actual: consumed,
                    });
                }
                _ => {}
            }
            if last && common::remaining(&cursor) == 0 {
                break;
            }

            let entry = read_entry(&mut cursor).map_err(|source| Error::TruncatedRecord {
                language: k,
                offset: consumed,
                limit,
                source: Box::new(source),
            })?;
            document.languages[k].push(entry);
        }
    }

    Ok(document)
}

fn read_language_index(cursor: &mut Cursor<&[u8]>) -> Result<LanguageIndex> {
    Ok(LanguageIndex {
        name: read_wide_string(cursor, "language name")?,
        offset: read_u32(cursor, "language offset")?,
    })
}

fn read_entry(cursor: &mut Cursor<&[u8]>) -> Result<CtxEntry> {
    Ok(CtxEntry {
        id: read_u32(cursor, "entry id")?,
        text: read_wide_string(cursor, "entry text")?,
    })
}
