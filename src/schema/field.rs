//! Field descriptors: where a field lives in the document and how its text
//! converts to and from the record.

use std::fmt;

use crate::error::DecodeError;

/// Semantic type of a field's character data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Verbatim text.
    Text,
    /// Signed 64-bit integer.
    Integer,
    /// Boolean (`true`/`false`, `1`/`0`, `t`/`f` and capitalized forms).
    Boolean,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Typed getter/setter pair for one field of `R`.
///
/// Plain function pointers, so a whole table can sit in a `static`.
/// `None` from a getter means the field is absent and must not be written.
pub enum Accessor<R> {
    /// Text field.
    Text {
        /// Read the current value.
        get: fn(&R) -> Option<&str>,
        /// Store a decoded value.
        set: fn(&mut R, String),
    },
    /// Integer field.
    Integer {
        /// Read the current value.
        get: fn(&R) -> Option<i64>,
        /// Store a decoded value.
        set: fn(&mut R, i64),
    },
    /// Boolean field.
    Boolean {
        /// Read the current value.
        get: fn(&R) -> Option<bool>,
        /// Store a decoded value.
        set: fn(&mut R, bool),
    },
}

impl<R> Accessor<R> {
    /// Kind of value this accessor carries.
    pub fn kind(&self) -> FieldKind {
        match self {
            Accessor::Text { .. } => FieldKind::Text,
            Accessor::Integer { .. } => FieldKind::Integer,
            Accessor::Boolean { .. } => FieldKind::Boolean,
        }
    }

    /// Render the field as character data, or `None` when absent.
    pub fn render(&self, record: &R) -> Option<String> {
        match self {
            Accessor::Text { get, .. } => get(record).map(str::to_string),
            Accessor::Integer { get, .. } => get(record).map(|v| v.to_string()),
            Accessor::Boolean { get, .. } => get(record).map(|v| v.to_string()),
        }
    }

    /// Convert `text` to the field's kind and store it in `record`.
    ///
    /// An empty (or whitespace-only) integer or boolean element stores the
    /// zero value, `0` or `false`, the way the management API's own
    /// clients read such leaves.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidValue`] naming `field` and carrying the
    /// raw text when conversion fails. `record` is left untouched then.
    pub fn apply(
        &self,
        record: &mut R,
        field: &'static str,
        text: &str,
    ) -> Result<(), DecodeError> {
        match self {
            Accessor::Text { set, .. } => set(record, text.to_string()),
            Accessor::Integer { set, .. } => {
                let trimmed = text.trim();
                let value = if trimmed.is_empty() {
                    0
                } else {
                    trimmed
                        .parse::<i64>()
                        .map_err(|_| invalid_value(field, FieldKind::Integer, text))?
                };
                set(record, value);
            }
            Accessor::Boolean { set, .. } => {
                let value = if text.trim().is_empty() {
                    false
                } else {
                    parse_bool(text).ok_or_else(|| invalid_value(field, FieldKind::Boolean, text))?
                };
                set(record, value);
            }
        }
        Ok(())
    }
}

fn invalid_value(field: &'static str, kind: FieldKind, text: &str) -> DecodeError {
    DecodeError::InvalidValue {
        field,
        kind,
        text: text.to_string(),
    }
}

/// Parse boolean character data, ignoring surrounding whitespace.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// One row of a resource's field-to-path table.
pub struct FieldSpec<R> {
    /// Logical field name, used in diagnostics.
    pub name: &'static str,
    /// Tag path below the resource element, outermost first.
    pub path: &'static [&'static str],
    /// Typed access to the field.
    pub accessor: Accessor<R>,
}

impl<R> FieldSpec<R> {
    /// Text field at `path`.
    pub const fn text(
        name: &'static str,
        path: &'static [&'static str],
        get: fn(&R) -> Option<&str>,
        set: fn(&mut R, String),
    ) -> Self {
        Self {
            name,
            path,
            accessor: Accessor::Text { get, set },
        }
    }

    /// Integer field at `path`.
    pub const fn integer(
        name: &'static str,
        path: &'static [&'static str],
        get: fn(&R) -> Option<i64>,
        set: fn(&mut R, i64),
    ) -> Self {
        Self {
            name,
            path,
            accessor: Accessor::Integer { get, set },
        }
    }

    /// Boolean field at `path`.
    pub const fn boolean(
        name: &'static str,
        path: &'static [&'static str],
        get: fn(&R) -> Option<bool>,
        set: fn(&mut R, bool),
    ) -> Self {
        Self {
            name,
            path,
            accessor: Accessor::Boolean { get, set },
        }
    }

    /// Kind of value stored in this field.
    #[inline]
    pub fn kind(&self) -> FieldKind {
        self.accessor.kind()
    }

    /// Path in `outer>inner` notation.
    pub fn tag_path(&self) -> String {
        self.path.join(">")
    }

    /// Whether the field sits below a wrapper tag.
    #[inline]
    pub fn is_nested(&self) -> bool {
        self.path.len() > 1
    }

    /// First path segment: the direct child tag of the resource element.
    #[inline]
    pub fn top_tag(&self) -> Option<&'static str> {
        self.path.first().copied()
    }
}

impl<R> fmt::Debug for FieldSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("path", &self.tag_path())
            .field("kind", &self.kind())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Sample {
        label: Option<String>,
        count: Option<i64>,
        enabled: Option<bool>,
    }

    fn label() -> FieldSpec<Sample> {
        FieldSpec::text(
            "label",
            &["meta", "label"],
            |p| p.label.as_deref(),
            |p, v| p.label = Some(v),
        )
    }

    fn count() -> FieldSpec<Sample> {
        FieldSpec::integer("count", &["count"], |p| p.count, |p, v| p.count = Some(v))
    }

    fn enabled() -> FieldSpec<Sample> {
        FieldSpec::boolean(
            "enabled",
            &["enabled"],
            |p| p.enabled,
            |p, v| p.enabled = Some(v),
        )
    }

    #[test]
    fn test_kinds_and_paths() {
        assert_eq!(label().kind(), FieldKind::Text);
        assert_eq!(count().kind(), FieldKind::Integer);
        assert_eq!(enabled().kind(), FieldKind::Boolean);

        assert_eq!(label().tag_path(), "meta>label");
        assert!(label().is_nested());
        assert!(!count().is_nested());
        assert_eq!(label().top_tag(), Some("meta"));
    }

    #[test]
    fn test_render_absent_is_none() {
        let sample = Sample::default();
        assert_eq!(label().accessor.render(&sample), None);
        assert_eq!(count().accessor.render(&sample), None);
        assert_eq!(enabled().accessor.render(&sample), None);
    }

    #[test]
    fn test_render_present_zero_values() {
        let sample = Sample {
            label: Some(String::new()),
            count: Some(0),
            enabled: Some(false),
        };
        assert_eq!(label().accessor.render(&sample), Some(String::new()));
        assert_eq!(count().accessor.render(&sample), Some("0".to_string()));
        assert_eq!(enabled().accessor.render(&sample), Some("false".to_string()));
    }

    #[test]
    fn test_apply_text_is_verbatim() {
        let mut sample = Sample::default();
        label().accessor.apply(&mut sample, "label", "  spaced  ").unwrap();
        assert_eq!(sample.label.as_deref(), Some("  spaced  "));
    }

    #[test]
    fn test_apply_integer_trims_whitespace() {
        let mut sample = Sample::default();
        count().accessor.apply(&mut sample, "count", "\n  -42 ").unwrap();
        assert_eq!(sample.count, Some(-42));
    }

    #[test]
    fn test_apply_integer_rejects_garbage() {
        let mut sample = Sample::default();
        let err = count().accessor.apply(&mut sample, "count", "seven").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidValue {
                field: "count",
                kind: FieldKind::Integer,
                text: "seven".to_string(),
            }
        );
        assert_eq!(sample.count, None);
    }

    #[test]
    fn test_apply_empty_text_stores_zero_value() {
        let mut sample = Sample::default();
        count().accessor.apply(&mut sample, "count", "").unwrap();
        enabled().accessor.apply(&mut sample, "enabled", " \n ").unwrap();
        assert_eq!(sample.count, Some(0));
        assert_eq!(sample.enabled, Some(false));

        label().accessor.apply(&mut sample, "label", "").unwrap();
        assert_eq!(sample.label.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_bool_forms() {
        for text in ["1", "t", "T", "true", "TRUE", "True", " true\n"] {
            assert_eq!(parse_bool(text), Some(true), "{text:?}");
        }
        for text in ["0", "f", "F", "false", "FALSE", "False"] {
            assert_eq!(parse_bool(text), Some(false), "{text:?}");
        }
        for text in ["", "yes", "no", "tRuE", "2"] {
            assert_eq!(parse_bool(text), None, "{text:?}");
        }
    }

    #[test]
    fn test_apply_boolean_rejects_garbage() {
        let mut sample = Sample::default();
        let err = enabled()
            .accessor
            .apply(&mut sample, "enabled", "maybe")
            .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidValue {
                field: "enabled",
                kind: FieldKind::Boolean,
                ..
            }
        ));
    }

    #[test]
    fn test_debug_output() {
        let debug = format!("{:?}", label());
        assert!(debug.contains("meta>label"));
        assert!(debug.contains("Text"));
    }
}
