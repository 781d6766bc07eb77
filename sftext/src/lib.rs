//! # sftext
//!
//! A pure-Rust library for working with SpellForce text asset formats.
//!
//! ## Supported Formats
//!
//! - **CTX** - Offset-indexed multi-language text containers
//! - **Quests** - Ordered quest chain tables
//! - **Dialogues** - Dialogue tables with an optional description field
//! - **Glossary** - Categorized glossary entries
//!
//! Every format converts losslessly in both directions between its binary
//! layout and an editable JSON representation; re-encoding an unmodified
//! decode is byte-for-byte identical to the original file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sftext::formats::{read_ctx, write_ctx};
//!
//! // Decode a CTX container, touch up a string, write it back
//! let mut document = read_ctx("map23.ctx")?;
//! document.languages[0][0].text = "Hello".into();
//! write_ctx("map23.ctx", &document)?;
//! # Ok::<(), sftext::Error>(())
//! ```
//!
//! ### Converting to and from JSON
//!
//! ```no_run
//! use sftext::converter::{convert_binary_to_json, convert_json_to_binary};
//!
//! convert_binary_to_json("quests.dat", "quests.dat.json", None)?;
//! convert_json_to_binary("quests.dat.json", "quests.dat", None)?;
//! # Ok::<(), sftext::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! ```
//! use sftext::prelude::*;
//!
//! // Now you have access to:
//! // - FormatKind, Direction, GameData, decode, encode
//! // - CtxDocument, QuestTable, DialogueTable, GlossaryTable
//! // - Error, Result, and more
//! ```

pub mod batch;
pub mod converter;
pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::{Direction, FormatKind, GameData, decode, encode};

    pub use crate::formats::common::Record;
    pub use crate::formats::ctx::{CtxDocument, CtxEntry, LanguageIndex, read_ctx, write_ctx};
    pub use crate::formats::dialogues::{Dialogue, DialogueTable, read_dialogues, write_dialogues};
    pub use crate::formats::glossary::{GlossarySet, GlossaryTable, read_glossary, write_glossary};
    pub use crate::formats::quests::{QuestSet, QuestTable, read_quests, write_quests};

    pub use crate::batch::{BatchResult, batch_convert, find_asset_files};
    pub use crate::converter::{
        convert_binary_to_json, convert_file, convert_json_to_binary, from_text, to_text,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
