//! JSON codec using `serde_json`.
//!
//! Used for diagnostic renditions of records: logs, debugging output,
//! fixtures. Field names are camelCase and absent fields are skipped.

use crate::error::Result;

/// JSON codec for records and collections.
pub struct JsonCodec;

impl JsonCodec {
    /// Encode a value to compact JSON.
    #[inline]
    pub fn encode<T: serde::Serialize>(value: &T) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }

    /// Encode a value to indented JSON.
    #[inline]
    pub fn encode_pretty<T: serde::Serialize>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    /// Decode a value from JSON text.
    #[inline]
    pub fn decode<T: serde::de::DeserializeOwned>(text: &str) -> Result<T> {
        Ok(serde_json::from_str(text)?)
    }
}
