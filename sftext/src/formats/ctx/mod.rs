//! CTX multi-language text containers
//!
//! A `.ctx` file stores the same set of text entries once per language. The
//! layout is self-describing but indirect: after two opaque header fields
//! comes a language index of (name, byte offset) pairs, then one contiguous
//! record region holding every language's entries back to back. Entry lists
//! have no stored length; each language's end is inferred from the next
//! index entry's offset, and the last language runs to end-of-stream.
//!
//! The decoder reconstructs explicit per-language boundaries from the
//! declared offsets; the encoder does the mirror image and derives the
//! offsets from the actual serialized entry sizes. Offsets stored in the
//! in-memory model are never trusted on encode.

mod reader;
mod writer;

pub use reader::{parse_ctx_bytes, read_ctx};
pub use writer::{ctx_to_bytes, write_ctx};

use crate::formats::common::wide_size;
use serde::{Deserialize, Serialize};

/// One text entry inside a language's record list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CtxEntry {
    /// Numeric text identifier, shared across languages.
    pub id: u32,
    /// The localized text.
    pub text: String,
}

impl CtxEntry {
    /// Serialized size in bytes: u32 id plus the wide-string text.
    pub fn serialized_size(&self) -> usize {
        4 + wide_size(&self.text)
    }
}

/// One entry of the leading language index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageIndex {
    /// Language name, e.g. `"English"`.
    pub name: String,
    /// Byte offset of this language's first entry within the record region.
    /// Informational after decode; recomputed from entry sizes on encode.
    pub offset: u32,
}

/// A decoded `.ctx` container.
///
/// `index` and `languages` are parallel: `languages[k]` holds the entries of
/// the language named by `index[k]`. Encoding fails if their lengths differ.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CtxDocument {
    /// First opaque header field. Meaning unknown; preserved verbatim.
    pub unknown1: u32,
    /// Second opaque header field. Meaning unknown; preserved verbatim.
    pub unknown2: u32,
    /// The language index, in file order.
    pub index: Vec<LanguageIndex>,
    /// Per-language entry lists, parallel to `index`.
    pub languages: Vec<Vec<CtxEntry>>,
}
