//! File format handlers for SpellForce text assets
//!
//! Four record-oriented binary formats share the primitives in [`common`]:
//! quest chains, dialogue tables, glossaries, and the offset-indexed CTX
//! multi-language containers.

pub mod common;
pub mod ctx;
pub mod dialogues;
pub mod glossary;
pub mod quests;

// Re-export the model types and codec entry points for convenience
pub use common::{Record, wide_size};
pub use ctx::{
    CtxDocument, CtxEntry, LanguageIndex, ctx_to_bytes, parse_ctx_bytes, read_ctx, write_ctx,
};
pub use dialogues::{
    Dialogue, DialogueTable, dialogues_to_bytes, parse_dialogues_bytes, read_dialogues,
    write_dialogues,
};
pub use glossary::{
    GlossarySet, GlossaryTable, glossary_to_bytes, parse_glossary_bytes, read_glossary,
    write_glossary,
};
pub use quests::{
    MAX_SUCCESSIVE_QUESTS, QuestSet, QuestTable, parse_quests_bytes, quests_to_bytes, read_quests,
    write_quests,
};

use crate::error::{Error, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The four recognized asset formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// `.ctx` multi-language text container.
    Ctx,
    /// Quest chain table (`quests*` files).
    Quests,
    /// Dialogue table (`dialogues*` files).
    Dialogues,
    /// Glossary table (`glossary*` files).
    Glossary,
}

impl FormatKind {
    /// Detect the format from a file name, following the game's own naming:
    /// a `.ctx` extension selects CTX, otherwise a basename starting with
    /// `quests`, `glossary`, or `dialogues` selects that table format. A
    /// trailing `.json` suffix (the text-side twin of a binary file) is
    /// ignored for detection.
    pub fn detect<P: AsRef<Path>>(path: P) -> Option<Self> {
        let name = path.as_ref().file_name()?.to_str()?;
        let stem = name.strip_suffix(".json").unwrap_or(name);
        if stem.ends_with(".ctx") {
            return Some(Self::Ctx);
        }
        if stem.starts_with("quests") {
            Some(Self::Quests)
        } else if stem.starts_with("glossary") {
            Some(Self::Glossary)
        } else if stem.starts_with("dialogues") {
            Some(Self::Dialogues)
        } else {
            None
        }
    }

    /// The lowercase format name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ctx => "ctx",
            Self::Quests => "quests",
            Self::Dialogues => "dialogues",
            Self::Glossary => "glossary",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ctx" => Ok(Self::Ctx),
            "quests" => Ok(Self::Quests),
            "dialogues" => Ok(Self::Dialogues),
            "glossary" => Ok(Self::Glossary),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Which way a file should be converted, inferred from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Binary asset to JSON text.
    Parse,
    /// JSON text back to a binary asset.
    Compile,
}

impl Direction {
    /// `.json` files compile back to binary; everything else parses.
    pub fn detect<P: AsRef<Path>>(path: P) -> Self {
        let is_json = path
            .as_ref()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json { Self::Compile } else { Self::Parse }
    }
}

/// A decoded asset of any of the four formats.
#[derive(Debug, Clone, PartialEq)]
pub enum GameData {
    Ctx(CtxDocument),
    Quests(QuestTable),
    Dialogues(DialogueTable),
    Glossary(GlossaryTable),
}

impl GameData {
    /// The format this model belongs to.
    pub fn kind(&self) -> FormatKind {
        match self {
            Self::Ctx(_) => FormatKind::Ctx,
            Self::Quests(_) => FormatKind::Quests,
            Self::Dialogues(_) => FormatKind::Dialogues,
            Self::Glossary(_) => FormatKind::Glossary,
        }
    }
}

/// Decode a binary asset of the given format.
pub fn decode(kind: FormatKind, data: &[u8]) -> Result<GameData> {
    match kind {
        FormatKind::Ctx => Ok(GameData::Ctx(parse_ctx_bytes(data)?)),
        FormatKind::Quests => Ok(GameData::Quests(parse_quests_bytes(data)?)),
        FormatKind::Dialogues => Ok(GameData::Dialogues(parse_dialogues_bytes(data)?)),
        FormatKind::Glossary => Ok(GameData::Glossary(parse_glossary_bytes(data)?)),
    }
}

/// Encode a model back to its binary format.
pub fn encode(data: &GameData) -> Result<Vec<u8>> {
    match data {
        GameData::Ctx(document) => ctx_to_bytes(document),
        GameData::Quests(table) => quests_to_bytes(table),
        GameData::Dialogues(table) => dialogues_to_bytes(table),
        GameData::Glossary(table) => glossary_to_bytes(table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detects_formats_from_file_names() {
        assert_eq!(FormatKind::detect("data/map23.ctx"), Some(FormatKind::Ctx));
        assert_eq!(FormatKind::detect("map23.ctx.json"), Some(FormatKind::Ctx));
        assert_eq!(FormatKind::detect("quests.dat"), Some(FormatKind::Quests));
        assert_eq!(
            FormatKind::detect("dialogues_extra"),
            Some(FormatKind::Dialogues)
        );
        assert_eq!(
            FormatKind::detect("glossary.json"),
            Some(FormatKind::Glossary)
        );
        assert_eq!(FormatKind::detect("texture.dds"), None);
    }

    #[test]
    fn detects_direction_from_json_suffix() {
        assert_eq!(Direction::detect("quests.json"), Direction::Compile);
        assert_eq!(Direction::detect("map23.ctx"), Direction::Parse);
    }

    #[test]
    fn format_names_round_trip() {
        for kind in [
            FormatKind::Ctx,
            FormatKind::Quests,
            FormatKind::Dialogues,
            FormatKind::Glossary,
        ] {
            assert_eq!(kind.as_str().parse::<FormatKind>().unwrap(), kind);
        }
        assert!("lsf".parse::<FormatKind>().is_err());
    }
}
