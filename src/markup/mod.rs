//! Markup module - a minimal element tree over `quick-xml`.
//!
//! The codec never walks raw events. Documents are parsed into [`Element`]
//! trees (tag name, text, children) and records are built into the same
//! trees before writing:
//! - [`parse_document`] - bytes to top-level elements
//! - [`write_elements`] - elements to bytes
//!
//! Attributes are not part of the resource format and are dropped.

mod element;
mod reader;
mod writer;

pub use element::Element;
pub use reader::parse_document;
pub use writer::write_elements;
