//! Error types for nsxrecord.
//!
//! Codec errors are local data errors. Feeding the same bytes (or the same
//! record) through the codec again can never succeed, so none of them are
//! retryable.

use thiserror::Error;

use crate::schema::FieldKind;

/// Error produced while decoding a document into records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input is not well-formed markup.
    #[error("Malformed document at byte {position}: {message}")]
    Malformed {
        /// Byte offset reported by the parser.
        position: u64,
        /// Parser diagnostic.
        message: String,
    },

    /// Tag names or character data are not valid UTF-8.
    #[error("Document is not valid UTF-8")]
    InvalidUtf8,

    /// The document contains no element at all.
    #[error("Document contains no root element")]
    EmptyDocument,

    /// The root tag names neither the resource nor the envelope.
    #[error("Unexpected root <{found}>, expected {expected}")]
    UnexpectedRoot {
        /// Human-readable list of accepted roots.
        expected: String,
        /// Tag name(s) found at the top level.
        found: String,
    },

    /// The document decoded to a shape the caller did not ask for.
    #[error("Expected {expected}, document holds {found}")]
    UnexpectedShape {
        /// Shape the caller asked for.
        expected: &'static str,
        /// Shape actually present.
        found: &'static str,
    },

    /// Elements nest deeper than the configured limit.
    #[error("Document nesting exceeds limit of {limit}")]
    TooDeep {
        /// Configured maximum depth.
        limit: usize,
    },

    /// A field's text cannot be converted to its declared kind.
    #[error("Field `{field}` expects {kind}, got {text:?}")]
    InvalidValue {
        /// Logical field name from the field table.
        field: &'static str,
        /// Declared kind of the field.
        kind: FieldKind,
        /// Raw offending text.
        text: String,
    },

    /// The resource's field table is structurally inconsistent.
    #[error("Invalid field table: {0}")]
    InvalidTable(String),
}

impl DecodeError {
    /// Codec errors are never retryable.
    #[inline]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Error produced while encoding records into a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The resource's field table is structurally inconsistent.
    #[error("Invalid field table: {0}")]
    InvalidTable(String),

    /// A bare collection with no records has no document form.
    #[error("Bare collection is empty, nothing to write")]
    EmptyBareCollection,

    /// The markup writer failed.
    #[error("Write error: {0}")]
    Write(String),
}

impl EncodeError {
    /// Codec errors are never retryable.
    #[inline]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Any failure while turning records into text or back.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Reading an XML document failed.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Writing an XML document failed.
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    /// A diagnostic JSON rendition could not be produced or read.
    #[error("JSON rendition failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for operations that may fail with any [`CodecError`].
pub type Result<T> = std::result::Result<T, CodecError>;
