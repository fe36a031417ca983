//! Schema module - the field-to-path table behind every resource.
//!
//! A resource describes itself once, as a static table of [`FieldSpec`]
//! rows. Each row names a field, the tag path where it lives below the
//! resource element, and a typed [`Accessor`]. The codec engine in
//! [`crate::codec`] walks the table for every resource type, so no type
//! carries hand-written parse code.
//!
//! # Example
//!
//! ```
//! use nsxrecord::schema::{FieldKind, FieldSpec, Resource};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Tag {
//!     name: Option<String>,
//!     scope: Option<String>,
//! }
//!
//! static TAG_FIELDS: [FieldSpec<Tag>; 2] = [
//!     FieldSpec::text("name", &["name"], |t| t.name.as_deref(), |t, v| t.name = Some(v)),
//!     FieldSpec::text(
//!         "scope",
//!         &["meta", "scope"],
//!         |t| t.scope.as_deref(),
//!         |t, v| t.scope = Some(v),
//!     ),
//! ];
//!
//! impl Resource for Tag {
//!     const ELEMENT: &'static str = "tag";
//!     fn fields() -> &'static [FieldSpec<Self>] {
//!         &TAG_FIELDS
//!     }
//! }
//!
//! assert_eq!(Tag::fields()[1].tag_path(), "meta>scope");
//! assert_eq!(Tag::fields()[1].kind(), FieldKind::Text);
//! ```

mod field;
mod table;

pub use field::{parse_bool, Accessor, FieldKind, FieldSpec};
pub use table::{is_valid_tag, validate_table};

/// A typed record with a static field-to-path table.
///
/// `Default` must produce the record with every field absent; decoding
/// starts from it and fills in the fields found in the document.
pub trait Resource: Default + Sized + 'static {
    /// Tag name of the element holding one record.
    const ELEMENT: &'static str;

    /// The field table, in output order.
    fn fields() -> &'static [FieldSpec<Self>];

    /// Look up a field row by logical name.
    fn field(name: &str) -> Option<&'static FieldSpec<Self>> {
        Self::fields().iter().find(|f| f.name == name)
    }
}
