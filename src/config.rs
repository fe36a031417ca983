//! Codec configuration.
//!
//! [`CodecConfig`] controls how documents are written (indentation, XML
//! declaration) and what the decoder accepts (envelope tag, nesting limit).
//!
//! # Example
//!
//! ```
//! use nsxrecord::config::CodecConfig;
//!
//! let config = CodecConfig::builder()
//!     .indent(2)
//!     .xml_declaration(true)
//!     .build();
//! assert_eq!(config.indent, Some(2));
//! assert_eq!(config.envelope, "list");
//! ```

/// Default envelope tag wrapping a list of resources.
pub const DEFAULT_ENVELOPE: &str = "list";

/// Default maximum element nesting accepted by the decoder.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration shared by encode and decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Tag name of the envelope element around a collection.
    pub envelope: String,
    /// Spaces per indentation level, `None` for compact output.
    pub indent: Option<usize>,
    /// Prefix output with `<?xml version="1.0" encoding="UTF-8"?>`.
    pub xml_declaration: bool,
    /// Maximum element nesting accepted on decode.
    pub max_depth: usize,
}

impl CodecConfig {
    /// Start building a configuration from defaults.
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::new()
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            envelope: DEFAULT_ENVELOPE.to_string(),
            indent: None,
            xml_declaration: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Fluent builder for [`CodecConfig`].
#[derive(Debug, Clone, Default)]
pub struct CodecConfigBuilder {
    config: CodecConfig,
}

impl CodecConfigBuilder {
    /// Create a builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the envelope tag name.
    ///
    /// Must be a valid tag name distinct from the resource element. The
    /// codec checks this on use and reports an `InvalidTable` error.
    ///
    /// Default: `list`
    pub fn envelope(mut self, tag: &str) -> Self {
        self.config.envelope = tag.to_string();
        self
    }

    /// Indent output by `spaces` per level.
    pub fn indent(mut self, spaces: usize) -> Self {
        self.config.indent = Some(spaces);
        self
    }

    /// Write compact output without line breaks (the default).
    pub fn compact(mut self) -> Self {
        self.config.indent = None;
        self
    }

    /// Emit an XML declaration before the first element.
    pub fn xml_declaration(mut self, enabled: bool) -> Self {
        self.config.xml_declaration = enabled;
        self
    }

    /// Set the maximum nesting depth accepted on decode.
    ///
    /// Default: 64
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Finish building.
    pub fn build(self) -> CodecConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.envelope, DEFAULT_ENVELOPE);
        assert_eq!(config.indent, None);
        assert!(!config.xml_declaration);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_builder_overrides() {
        let config = CodecConfig::builder()
            .envelope("ipsets")
            .indent(4)
            .xml_declaration(true)
            .max_depth(8)
            .build();

        assert_eq!(config.envelope, "ipsets");
        assert_eq!(config.indent, Some(4));
        assert!(config.xml_declaration);
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn test_compact_clears_indent() {
        let config = CodecConfig::builder().indent(2).compact().build();
        assert_eq!(config.indent, None);
    }
}
