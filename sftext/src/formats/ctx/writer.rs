//! `.ctx` file writing and offset recomputation

use super::CtxDocument;
use crate::error::{Error, Result};
use crate::formats::common::write_wide_string;
use byteorder::{LittleEndian, WriteBytesExt};
use std::fs;
use std::path::Path;

/// Encode a `.ctx` container to bytes.
///
/// The language index offsets are derived in a pre-pass from the serialized
/// sizes of the entries that precede each language. Whatever offsets the
/// caller left in the model never reach the output, mirroring how decode
/// must reconstruct boundaries from the declared offsets.
pub fn ctx_to_bytes(document: &CtxDocument) -> Result<Vec<u8>> {
    if document.index.len() != document.languages.len() {
        return Err(Error::StructuralMismatch {
            index_len: document.index.len(),
            language_len: document.languages.len(),
        });
    }

    let mut out = Vec::new();
    out.write_u32::<LittleEndian>(document.unknown1)?;
    out.write_u32::<LittleEndian>(document.unknown2)?;
    out.write_u32::<LittleEndian>(document.index.len() as u32)?;
    if document.index.is_empty() {
        return Ok(out);
    }

    // Pre-pass: each language starts where the previous one's entries end.
    let mut offsets = Vec::with_capacity(document.languages.len());
    let mut running: u32 = 0;
    for entries in &document.languages {
        offsets.push(running);
        for entry in entries {
            running += entry.serialized_size() as u32;
        }
    }

    for (index, offset) in document.index.iter().zip(&offsets) {
        write_wide_string(&mut out, &index.name)?;
        out.write_u32::<LittleEndian>(*offset)?;
    }

    for entries in &document.languages {
        for entry in entries {
            out.write_u32::<LittleEndian>(entry.id)?;
            write_wide_string(&mut out, &entry.text)?;
        }
    }

    Ok(out)
}

/// Write a `.ctx` file to disk.
pub fn write_ctx<P: AsRef<Path>>(path: P, document: &CtxDocument) -> Result<()> {
    fs::write(path, ctx_to_bytes(document)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::ctx::{parse_ctx_bytes, CtxEntry, LanguageIndex};
    use pretty_assertions::assert_eq;

    fn language(name: &str, offset: u32) -> LanguageIndex {
        LanguageIndex {
            name: name.into(),
            offset,
        }
    }

    fn entry(id: u32, text: &str) -> CtxEntry {
        CtxEntry {
            id,
            text: text.into(),
        }
    }

    #[test]
    fn caller_offsets_are_ignored() {
        // Garbage offsets in the model; the output must carry derived ones.
        let document = CtxDocument {
            unknown1: 1,
            unknown2: 2,
            index: vec![language("en", 999), language("de", 3)],
            languages: vec![vec![entry(7, "Hi")], Vec::new()],
        };

        let bytes = ctx_to_bytes(&document).unwrap();
        let decoded = parse_ctx_bytes(&bytes).unwrap();
        assert_eq!(decoded.index[0].offset, 0);
        assert_eq!(decoded.index[1].offset, 12);
        assert_eq!(decoded.languages, document.languages);
    }

    #[test]
    fn offsets_are_prefix_sums_of_entry_sizes() {
        let document = CtxDocument {
            unknown1: 0,
            unknown2: 0,
            index: vec![language("en", 0), language("de", 0), language("fr", 0)],
            languages: vec![
                vec![entry(1, "one"), entry(2, "two")],
                vec![entry(1, "eins")],
                Vec::new(),
            ],
        };

        let bytes = ctx_to_bytes(&document).unwrap();
        let decoded = parse_ctx_bytes(&bytes).unwrap();

        let lang0: usize = document.languages[0]
            .iter()
            .map(CtxEntry::serialized_size)
            .sum();
        let lang1: usize = document.languages[1]
            .iter()
            .map(CtxEntry::serialized_size)
            .sum();
        assert_eq!(decoded.index[0].offset, 0);
        assert_eq!(decoded.index[1].offset, lang0 as u32);
        assert_eq!(decoded.index[2].offset, (lang0 + lang1) as u32);
    }

    #[test]
    fn mismatched_lists_are_rejected() {
        let document = CtxDocument {
            unknown1: 0,
            unknown2: 0,
            index: vec![language("en", 0)],
            languages: Vec::new(),
        };
        let err = ctx_to_bytes(&document).unwrap_err();
        assert!(matches!(
            err,
            Error::StructuralMismatch {
                index_len: 1,
                language_len: 0,
            }
        ));
    }

    #[test]
    fn empty_container_round_trips() {
        let document = CtxDocument {
            unknown1: 10,
            unknown2: 20,
            index: Vec::new(),
            languages: Vec::new(),
        };
        let bytes = ctx_to_bytes(&document).unwrap();
        assert_eq!(bytes.len(), 12);
        assert_eq!(parse_ctx_bytes(&bytes).unwrap(), document);
    }

    #[test]
    fn full_round_trip_normalizes_offsets_only() {
        let original = CtxDocument {
            unknown1: 42,
            unknown2: 0,
            index: vec![language("English", 0), language("Deutsch", 0)],
            languages: vec![
                vec![entry(100, "Sword"), entry(101, "")],
                vec![entry(100, "Schwert"), entry(101, "")],
            ],
        };

        let bytes = ctx_to_bytes(&original).unwrap();
        let decoded = parse_ctx_bytes(&bytes).unwrap();
        // Entry data and names survive untouched; offsets become derived.
        assert_eq!(decoded.languages, original.languages);
        assert_eq!(decoded.index[0].name, "English");
        assert_eq!(decoded.index[1].offset, 26);
        // A second encode is byte-stable.
        assert_eq!(ctx_to_bytes(&decoded).unwrap(), bytes);
    }
}
