//! Structural checks for a resource's field table.

use super::Resource;

/// Check that `name` can be written as a tag and matched back on decode.
///
/// Rejects empty names, names starting with a digit, `-` or `.`, and names
/// containing whitespace, markup characters or a namespace separator.
pub fn is_valid_tag(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };
    if first.is_ascii_digit() || first == '-' || first == '.' {
        return false;
    }
    name.chars().all(|c| {
        !c.is_whitespace()
            && !c.is_control()
            && !matches!(c, '<' | '>' | '&' | '\'' | '"' | '/' | '=' | '?' | '!' | ':')
    })
}

/// Verify the field table of `R`.
///
/// A table is consistent when every tag is valid, every path is non-empty,
/// no two fields share a path, and no field's path is a strict prefix of
/// another's (a tag cannot be both a value and a wrapper).
///
/// Returns a description of the first violation found.
pub fn validate_table<R: Resource>() -> Result<(), String> {
    if !is_valid_tag(R::ELEMENT) {
        return Err(format!("resource element {:?} is not a valid tag", R::ELEMENT));
    }

    let fields = R::fields();
    for (index, field) in fields.iter().enumerate() {
        if field.path.is_empty() {
            return Err(format!("field `{}` has an empty path", field.name));
        }
        if let Some(bad) = field.path.iter().find(|segment| !is_valid_tag(segment)) {
            return Err(format!(
                "field `{}` has invalid tag {:?} in path {}",
                field.name,
                bad,
                field.tag_path()
            ));
        }

        for other in &fields[index + 1..] {
            if other.path == field.path {
                return Err(format!(
                    "fields `{}` and `{}` share path {}",
                    field.name,
                    other.name,
                    field.tag_path()
                ));
            }
            let (short, long) = if field.path.len() < other.path.len() {
                (field, other)
            } else {
                (other, field)
            };
            if long.path.starts_with(short.path) {
                return Err(format!(
                    "field `{}` at {} is nested inside value field `{}` at {}",
                    long.name,
                    long.tag_path(),
                    short.name,
                    short.tag_path()
                ));
            }
        }
    }

    Ok(())
}
