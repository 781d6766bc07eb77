//! Quest chain tables
//!
//! A quest table is a u32-counted sequence of quest sets. Each set is one
//! mandatory record followed by a u16-counted list of successive records,
//! so a set can hold at most 65535 successive quests.

use crate::error::{Error, Result};
use crate::formats::common::{self, Record};
use byteorder::{LittleEndian, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Maximum number of successive quests a set can hold (u16 count field).
pub const MAX_SUCCESSIVE_QUESTS: usize = u16::MAX as usize;

/// One quest chain: the opening quest plus its successors in order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestSet {
    /// The mandatory first quest of the chain.
    pub first: Record,
    /// Follow-up quests, in chain order.
    pub successive: Vec<Record>,
}

/// A quests file: every quest chain in the game, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestTable {
    pub sets: Vec<QuestSet>,
}

/// Read a quests file from disk.
pub fn read_quests<P: AsRef<Path>>(path: P) -> Result<QuestTable> {
    let buffer = fs::read(path)?;
    parse_quests_bytes(&buffer)
}

/// Parse quests data from bytes.
pub fn parse_quests_bytes(data: &[u8]) -> Result<QuestTable> {
    let mut cursor = Cursor::new(data);

    let count = common::read_u32(&mut cursor, "quest set count")? as usize;
    let mut sets = Vec::with_capacity(count.min(1024));
    for i in 0..count {
        let set = read_quest_set(&mut cursor).map_err(Error::element("quest set", i, count))?;
        sets.push(set);
    }

    Ok(QuestTable { sets })
}

fn read_quest_set(cursor: &mut Cursor<&[u8]>) -> Result<QuestSet> {
    let first = Record::read(cursor)?;
    let count = common::read_u16(cursor, "successive quest count")? as usize;
    let mut successive = Vec::with_capacity(count.min(1024));
    for i in 0..count {
        let record =
            Record::read(cursor).map_err(Error::element("successive quest", i, count))?;
        successive.push(record);
    }
    Ok(QuestSet { first, successive })
}

/// Encode a quest table to bytes.
///
/// The counts are re-derived from the in-memory sequence lengths; a set with
/// more than [`MAX_SUCCESSIVE_QUESTS`] successors fails with
/// [`Error::CountOverflow`].
pub fn quests_to_bytes(table: &QuestTable) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.write_u32::<LittleEndian>(table.sets.len() as u32)?;
    for (i, set) in table.sets.iter().enumerate() {
        write_quest_set(&mut out, set).map_err(Error::element("quest set", i, table.sets.len()))?;
    }
    Ok(out)
}

fn write_quest_set(out: &mut Vec<u8>, set: &QuestSet) -> Result<()> {
    set.first.write(out)?;

    if set.successive.len() > MAX_SUCCESSIVE_QUESTS {
        return Err(Error::CountOverflow {
            what: "successive quests",
            len: set.successive.len(),
            max: MAX_SUCCESSIVE_QUESTS,
        });
    }
    out.write_u16::<LittleEndian>(set.successive.len() as u16)?;
    for record in &set.successive {
        record.write(out)?;
    }
    Ok(())
}

/// Write a quests file to disk.
pub fn write_quests<P: AsRef<Path>>(path: P, table: &QuestTable) -> Result<()> {
    fs::write(path, quests_to_bytes(table)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_record(tip: &str) -> Record {
        Record {
            unknown1: 1,
            unknown2: 2,
            tip: tip.into(),
            description1: "desc".into(),
            description2: String::new(),
        }
    }

    #[test]
    fn quest_table_round_trip() {
        let table = QuestTable {
            sets: vec![
                QuestSet {
                    first: sample_record("chain start"),
                    successive: vec![sample_record("step 1"), sample_record("step 2")],
                },
                QuestSet {
                    first: sample_record("lone quest"),
                    successive: Vec::new(),
                },
            ],
        };

        let bytes = quests_to_bytes(&table).unwrap();
        assert_eq!(parse_quests_bytes(&bytes).unwrap(), table);
    }

    #[test]
    fn empty_table_is_four_bytes() {
        let bytes = quests_to_bytes(&QuestTable::default()).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0]);
        assert_eq!(parse_quests_bytes(&bytes).unwrap(), QuestTable::default());
    }

    #[test]
    fn successive_count_at_limit_encodes() {
        let table = QuestTable {
            sets: vec![QuestSet {
                first: Record::default(),
                successive: vec![Record::default(); MAX_SUCCESSIVE_QUESTS],
            }],
        };
        let bytes = quests_to_bytes(&table).unwrap();
        let decoded = parse_quests_bytes(&bytes).unwrap();
        assert_eq!(decoded.sets[0].successive.len(), MAX_SUCCESSIVE_QUESTS);
    }

    #[test]
    fn successive_count_over_limit_overflows() {
        let table = QuestTable {
            sets: vec![QuestSet {
                first: Record::default(),
                successive: vec![Record::default(); MAX_SUCCESSIVE_QUESTS + 1],
            }],
        };
        let err = quests_to_bytes(&table).unwrap_err();
        match err {
            Error::Element { label, source, .. } => {
                assert_eq!(label, "quest set");
                assert!(matches!(*source, Error::CountOverflow { max: 65535, .. }));
            }
            other => panic!("expected positional context, got {other}"),
        }
    }

    #[test]
    fn truncated_set_reports_position() {
        let table = QuestTable {
            sets: vec![QuestSet {
                first: sample_record("a"),
                successive: vec![sample_record("b")],
            }],
        };
        let mut bytes = quests_to_bytes(&table).unwrap();
        bytes.truncate(bytes.len() - 3);

        let err = parse_quests_bytes(&bytes).unwrap_err();
        assert!(err.to_string().starts_with("quest set 0/1"));
    }
}
