//! Error types for `sftext`

use thiserror::Error;

/// The error type for `sftext` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Binary Decode Errors ====================
    /// The input ended before a fixed-size field could be read.
    #[error("input truncated while reading {what}")]
    TruncatedInput {
        /// The field that was being read.
        what: &'static str,
    },

    /// The input ended mid-entry while walking a CTX record region.
    #[error("truncated entry in language {language} at record offset {offset} (next boundary: {limit:?}): {source}")]
    TruncatedRecord {
        /// Index of the language being decoded.
        language: usize,
        /// Byte offset into the record region where the entry started.
        offset: u32,
        /// The declared end of this language's range, if it is not the last.
        limit: Option<u32>,
        /// The underlying decode failure.
        source: Box<Error>,
    },

    // ==================== CTX Container Errors ====================
    /// The first language index entry has a nonzero offset.
    #[error("invalid CTX index: first language offset is {found}, expected 0")]
    InvalidOffsetBase {
        /// The offset found in the first index entry.
        found: u32,
    },

    /// The running offset overshot the next language's declared offset.
    #[error("CTX offset mismatch in language {language}: consumed {actual} bytes past the declared boundary at {expected}")]
    OffsetMismatch {
        /// Index of the language being decoded.
        language: usize,
        /// The next index entry's declared offset.
        expected: u32,
        /// The running consumed-byte count that overshot it.
        actual: u32,
    },

    /// Language index and record list lengths differ at encode time.
    #[error("CTX structural mismatch: {index_len} index entries but {language_len} language record lists")]
    StructuralMismatch {
        /// Number of entries in the language index.
        index_len: usize,
        /// Number of per-language record lists.
        language_len: usize,
    },

    // ==================== Encode Errors ====================
    /// A sequence is too long for its count field.
    #[error("{what} has {len} elements, exceeding the limit of {max}")]
    CountOverflow {
        /// The sequence that overflowed.
        what: &'static str,
        /// The actual element count.
        len: usize,
        /// The maximum the count field can hold.
        max: usize,
    },

    // ==================== Text Projection Errors ====================
    /// Malformed structured text input (missing field, wrong type, bad JSON).
    #[error("text projection error: {0}")]
    TextProjection(#[from] serde_json::Error),

    /// UTF-8 conversion error (dialogue identifiers).
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    // ==================== Dispatch Errors ====================
    /// The format name is not one of ctx/quests/dialogues/glossary.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The format could not be detected from a file name.
    #[error("cannot detect format from file name: {0}")]
    UndetectedFormat(String),

    // ==================== Positional Context ====================
    /// A decode or encode failure inside the n-th element of a sequence.
    #[error("{label} {index}/{total}: {source}")]
    Element {
        /// What kind of element failed (e.g. "quest set").
        label: &'static str,
        /// Zero-based index of the failing element.
        index: usize,
        /// Length of the enclosing sequence.
        total: usize,
        /// The underlying failure.
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an error with the position of the sequence element it occurred in.
    ///
    /// Used with `map_err` so nested failures carry their full
    /// innermost-to-outermost path, e.g. `quest set 3/7: successive quest 0/2:
    /// input truncated while reading tip`.
    pub(crate) fn element(
        label: &'static str,
        index: usize,
        total: usize,
    ) -> impl FnOnce(Error) -> Error {
        move |source| Error::Element {
            label,
            index,
            total,
            source: Box::new(source),
        }
    }
}

/// A specialized Result type for `sftext` operations.
pub type Result<T> = std::result::Result<T, Error>;
