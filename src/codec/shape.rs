//! Decoded document shapes.

use serde::{Deserialize, Serialize};

/// How a collection was laid out in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionShape {
    /// Records repeated at the top level with no enclosing element.
    Bare,
    /// Records wrapped in an envelope element (`<list>` by default).
    #[default]
    Enveloped,
}

/// Ordered sequence of records.
///
/// Bare and enveloped documents decode to this same type; `shape` only
/// decides how the collection is written back.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Collection<R> {
    /// Records in document order.
    pub items: Vec<R>,
    /// Layout used when encoding.
    pub shape: CollectionShape,
}

impl<R> Collection<R> {
    /// Create a collection with the given layout.
    pub fn new(items: Vec<R>, shape: CollectionShape) -> Self {
        Self { items, shape }
    }

    /// Records repeated at the top level.
    pub fn bare(items: Vec<R>) -> Self {
        Self::new(items, CollectionShape::Bare)
    }

    /// Records wrapped in the envelope element.
    pub fn enveloped(items: Vec<R>) -> Self {
        Self::new(items, CollectionShape::Enveloped)
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.items.iter()
    }

    /// Take the records, dropping the layout.
    pub fn into_items(self) -> Vec<R> {
        self.items
    }
}

impl<R> IntoIterator for Collection<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<R> FromIterator<R> for Collection<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::enveloped(iter.into_iter().collect())
    }
}

/// Result of decoding a document whose shape was not known in advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<R> {
    /// A single record root.
    Single(R),
    /// A bare or enveloped sequence of records.
    Collection(Collection<R>),
}

impl<R> Decoded<R> {
    /// Whether the document held exactly one record root.
    #[inline]
    pub fn is_single(&self) -> bool {
        matches!(self, Decoded::Single(_))
    }

    /// Short name of the shape, for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Decoded::Single(_) => "single record",
            Decoded::Collection(c) => match c.shape {
                CollectionShape::Bare => "bare collection",
                CollectionShape::Enveloped => "enveloped collection",
            },
        }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        match self {
            Decoded::Single(_) => 1,
            Decoded::Collection(c) => c.len(),
        }
    }

    /// Whether no records are held (only an empty envelope).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten to records in document order.
    pub fn into_records(self) -> Vec<R> {
        match self {
            Decoded::Single(record) => vec![record],
            Decoded::Collection(c) => c.into_items(),
        }
    }
}

impl<R> From<Collection<R>> for Decoded<R> {
    fn from(collection: Collection<R>) -> Self {
        Decoded::Collection(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_shapes_compare_items() {
        let bare = Collection::bare(vec![1, 2]);
        let enveloped = Collection::enveloped(vec![1, 2]);
        assert_eq!(bare.items, enveloped.items);
        assert_ne!(bare, enveloped);
    }

    #[test]
    fn test_decoded_accessors() {
        let single: Decoded<u8> = Decoded::Single(7);
        assert!(single.is_single());
        assert_eq!(single.len(), 1);
        assert_eq!(single.shape_name(), "single record");
        assert_eq!(single.into_records(), vec![7]);

        let empty: Decoded<u8> = Collection::enveloped(Vec::new()).into();
        assert!(empty.is_empty());
        assert_eq!(empty.shape_name(), "enveloped collection");
    }

    #[test]
    fn test_collect_defaults_to_envelope() {
        let collection: Collection<u8> = (1..=3).collect();
        assert_eq!(collection.shape, CollectionShape::Enveloped);
        assert_eq!(collection.len(), 3);
        let doubled: Vec<u8> = collection.iter().map(|v| v * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
    }
}
