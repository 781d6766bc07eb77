//! Binary ↔ JSON conversions
//!
//! The text projection maps every decoded model to a structured
//! [`serde_json::Value`] tree and back, losslessly. The tree shape is
//! defined by the serde derives on the model types; pretty-printing is a
//! presentation detail layered on top.

use crate::error::Result;
use crate::formats::{self, Direction, FormatKind, GameData};

use serde_json::Value;
use std::fs;
use std::path::Path;

/// Project a decoded model onto a structured text tree.
pub fn to_text(data: &GameData) -> Result<Value> {
    let value = match data {
        GameData::Ctx(document) => serde_json::to_value(document)?,
        GameData::Quests(table) => serde_json::to_value(table)?,
        GameData::Dialogues(table) => serde_json::to_value(table)?,
        GameData::Glossary(table) => serde_json::to_value(table)?,
    };
    Ok(value)
}

/// Rebuild a model of the given format from a structured text tree.
pub fn from_text(kind: FormatKind, value: Value) -> Result<GameData> {
    let data = match kind {
        FormatKind::Ctx => GameData::Ctx(serde_json::from_value(value)?),
        FormatKind::Quests => GameData::Quests(serde_json::from_value(value)?),
        FormatKind::Dialogues => GameData::Dialogues(serde_json::from_value(value)?),
        FormatKind::Glossary => GameData::Glossary(serde_json::from_value(value)?),
    };
    Ok(data)
}

/// Render a model as pretty-printed JSON with a trailing newline.
pub fn to_json_string(data: &GameData) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&to_text(data)?)?;
    json.push('\n');
    Ok(json)
}

/// Parse a JSON string into a model of the given format.
pub fn from_json_str(kind: FormatKind, content: &str) -> Result<GameData> {
    from_text(kind, serde_json::from_str(content)?)
}

/// Convert a binary asset file to a JSON file.
///
/// The format is detected from the source file name unless overridden.
pub fn convert_binary_to_json<P: AsRef<Path>>(
    source: P,
    dest: P,
    kind: Option<FormatKind>,
) -> Result<()> {
    let kind = resolve_kind(source.as_ref(), kind)?;
    tracing::info!(
        "Converting {kind}→JSON: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );

    let buffer = fs::read(&source)?;
    let data = formats::decode(kind, &buffer)?;
    fs::write(dest, to_json_string(&data)?)?;
    Ok(())
}

/// Convert a JSON file back to a binary asset file.
///
/// The format is detected from the source file name unless overridden.
pub fn convert_json_to_binary<P: AsRef<Path>>(
    source: P,
    dest: P,
    kind: Option<FormatKind>,
) -> Result<()> {
    let kind = resolve_kind(source.as_ref(), kind)?;
    tracing::info!(
        "Converting JSON→{kind}: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );

    let content = fs::read_to_string(&source)?;
    let data = from_json_str(kind, &content)?;
    fs::write(dest, formats::encode(&data)?)?;
    Ok(())
}

/// Convert one file in whichever direction its name implies.
///
/// Returns the direction that was applied, so callers can report it.
pub fn convert_file<P: AsRef<Path>>(
    source: P,
    dest: P,
    kind: Option<FormatKind>,
) -> Result<Direction> {
    let direction = Direction::detect(source.as_ref());
    match direction {
        Direction::Parse => convert_binary_to_json(source, dest, kind)?,
        Direction::Compile => convert_json_to_binary(source, dest, kind)?,
    }
    Ok(direction)
}

fn resolve_kind(source: &Path, kind: Option<FormatKind>) -> Result<FormatKind> {
    match kind {
        Some(kind) => Ok(kind),
        None => FormatKind::detect(source).ok_or_else(|| {
            crate::error::Error::UndetectedFormat(source.display().to_string())
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::ctx::{CtxDocument, CtxEntry, LanguageIndex};
    use crate::formats::dialogues::{Dialogue, DialogueTable};
    use crate::formats::quests::{QuestSet, QuestTable};
    use crate::formats::common::Record;
    use pretty_assertions::assert_eq;

    fn sample_ctx() -> GameData {
        GameData::Ctx(CtxDocument {
            unknown1: 1,
            unknown2: 2,
            index: vec![
                LanguageIndex {
                    name: "en".into(),
                    offset: 0,
                },
                LanguageIndex {
                    name: "de".into(),
                    offset: 12,
                },
            ],
            languages: vec![
                vec![CtxEntry {
                    id: 7,
                    text: "Hi".into(),
                }],
                Vec::new(),
            ],
        })
    }

    #[test]
    fn text_projection_round_trips() {
        let data = sample_ctx();
        let tree = to_text(&data).unwrap();
        let back = from_text(FormatKind::Ctx, tree).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn json_string_round_trips() {
        let data = GameData::Quests(QuestTable {
            sets: vec![QuestSet {
                first: Record {
                    unknown1: 1,
                    unknown2: 2,
                    tip: "tip".into(),
                    description1: "a \"quoted\" line".into(),
                    description2: String::new(),
                },
                successive: Vec::new(),
            }],
        });
        let json = to_json_string(&data).unwrap();
        assert!(json.ends_with('\n'));
        assert_eq!(from_json_str(FormatKind::Quests, &json).unwrap(), data);
    }

    #[test]
    fn missing_field_is_projection_error() {
        let err = from_json_str(FormatKind::Dialogues, r#"{"dialogues": []}"#).unwrap_err();
        assert!(matches!(err, crate::Error::TextProjection(_)));
    }

    #[test]
    fn dialogue_description_defaults_when_absent() {
        let json = r#"{
            "has_description": false,
            "dialogues": [{
                "content": {
                    "unknown1": 0, "unknown2": 0,
                    "tip": "", "description1": "", "description2": ""
                },
                "id": "d_01"
            }]
        }"#;
        let data = from_json_str(FormatKind::Dialogues, json).unwrap();
        let GameData::Dialogues(DialogueTable { dialogues, .. }) = data else {
            panic!("wrong variant");
        };
        assert_eq!(dialogues[0].description, "");
        assert_eq!(dialogues[0].id, "d_01");
    }

    #[test]
    fn file_conversion_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let binary = dir.path().join("map1.ctx");
        let json = dir.path().join("map1.ctx.json");
        let rebuilt = dir.path().join("rebuilt.ctx");

        let GameData::Ctx(document) = sample_ctx() else {
            unreachable!()
        };
        crate::formats::write_ctx(&binary, &document).unwrap();

        assert_eq!(
            convert_file(&binary, &json, None).unwrap(),
            Direction::Parse
        );
        assert_eq!(
            convert_file(&json, &rebuilt, None).unwrap(),
            Direction::Compile
        );

        assert_eq!(
            std::fs::read(&rebuilt).unwrap(),
            std::fs::read(&binary).unwrap()
        );
    }
}
