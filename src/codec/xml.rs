//! XML codec - the table-driven engine shared by every resource type.
//!
//! Decoding resolves the document shape once, from the top-level tags:
//!
//! ```text
//! <ipset>..</ipset>                        -> Decoded::Single
//! <ipset>..</ipset><ipset>..</ipset>       -> Decoded::Collection (Bare)
//! <list><ipset>..</ipset>..</list>         -> Decoded::Collection (Enveloped)
//! ```
//!
//! Each record element is then read through the resource's field table:
//! one path segment is a direct child, more segments descend through
//! wrapper tags. Tags the table does not mention are ignored. Encoding is
//! the inverse, and fields that are absent are not written at all.
//!
//! # Example
//!
//! ```
//! use nsxrecord::codec::{Decoded, XmlCodec};
//! use nsxrecord::resources::IpSet;
//!
//! let codec = XmlCodec::new();
//! let doc = b"<ipset><type><typeName>IPSet</typeName></type><name>web</name></ipset>";
//!
//! let decoded = codec.decode::<IpSet>(doc).unwrap();
//! let Decoded::Single(set) = decoded else { panic!("expected a single record") };
//! assert_eq!(set.name.as_deref(), Some("web"));
//! assert_eq!(set.type_name.as_deref(), Some("IPSet"));
//!
//! let encoded = codec.encode_record(&set).unwrap();
//! assert_eq!(&encoded[..], &doc[..]);
//! ```

use bytes::Bytes;

use super::{Collection, CollectionShape, Decoded};
use crate::config::CodecConfig;
use crate::error::{DecodeError, EncodeError};
use crate::markup::{parse_document, write_elements, Element};
use crate::schema::{is_valid_tag, validate_table, Resource};

/// Codec between typed resources and their XML documents.
///
/// Holds only configuration; cheap to clone and safe to share between
/// threads.
#[derive(Debug, Clone, Default)]
pub struct XmlCodec {
    config: CodecConfig,
}

impl XmlCodec {
    /// Create a codec with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with a custom configuration.
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decode a document of unknown shape.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] for malformed markup, an unexpected root,
    /// or a field whose text does not convert to its declared kind. No
    /// partial result is ever returned.
    pub fn decode<R: Resource>(&self, input: &[u8]) -> Result<Decoded<R>, DecodeError> {
        validate_table::<R>().map_err(DecodeError::InvalidTable)?;
        self.check_envelope::<R>().map_err(DecodeError::InvalidTable)?;

        let roots = parse_document(input, self.config.max_depth)?;
        let decoded = self.resolve_shape::<R>(roots)?;

        tracing::debug!(
            resource = R::ELEMENT,
            shape = decoded.shape_name(),
            records = decoded.len(),
            "decoded document"
        );
        Ok(decoded)
    }

    /// Decode a document that must hold exactly one record root.
    ///
    /// # Errors
    ///
    /// As [`decode`](Self::decode), plus [`DecodeError::UnexpectedShape`]
    /// when the document holds a collection.
    pub fn decode_record<R: Resource>(&self, input: &[u8]) -> Result<R, DecodeError> {
        match self.decode::<R>(input)? {
            Decoded::Single(record) => Ok(record),
            other => Err(DecodeError::UnexpectedShape {
                expected: "single record",
                found: other.shape_name(),
            }),
        }
    }

    /// Decode a document of any shape into a collection.
    ///
    /// A single record root becomes a one-element bare collection.
    pub fn decode_collection<R: Resource>(
        &self,
        input: &[u8],
    ) -> Result<Collection<R>, DecodeError> {
        Ok(match self.decode::<R>(input)? {
            Decoded::Single(record) => Collection::bare(vec![record]),
            Decoded::Collection(collection) => collection,
        })
    }

    /// Encode a single record or a collection.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidTable`] when the resource's field table
    /// is inconsistent, or [`EncodeError::Write`] if writing fails.
    pub fn encode<R: Resource>(&self, payload: &Decoded<R>) -> Result<Vec<u8>, EncodeError> {
        match payload {
            Decoded::Single(record) => self.encode_record(record),
            Decoded::Collection(collection) => self.encode_collection(collection),
        }
    }

    /// Encode one record as a single root element.
    pub fn encode_record<R: Resource>(&self, record: &R) -> Result<Vec<u8>, EncodeError> {
        validate_table::<R>().map_err(EncodeError::InvalidTable)?;
        write_elements(&[build_record(record)], &self.config)
    }

    /// Encode a collection in its recorded layout.
    ///
    /// A bare collection of one record is written as a lone root element,
    /// which decodes back as [`Decoded::Single`]. Use the enveloped shape
    /// to keep a one-record list a list.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::EmptyBareCollection`] for a bare collection
    /// without records, and [`EncodeError::InvalidTable`] when the table or
    /// the configured envelope tag is unusable.
    pub fn encode_collection<R: Resource>(
        &self,
        collection: &Collection<R>,
    ) -> Result<Vec<u8>, EncodeError> {
        validate_table::<R>().map_err(EncodeError::InvalidTable)?;

        let records: Vec<Element> = collection.iter().map(build_record).collect();
        match collection.shape {
            CollectionShape::Bare if records.is_empty() => Err(EncodeError::EmptyBareCollection),
            CollectionShape::Bare => write_elements(&records, &self.config),
            CollectionShape::Enveloped => {
                self.check_envelope::<R>().map_err(EncodeError::InvalidTable)?;
                let mut envelope = Element::new(self.config.envelope.as_str());
                envelope.children = records;
                write_elements(&[envelope], &self.config)
            }
        }
    }

    /// Encode into a shareable buffer for hand-off to a transport.
    pub fn encode_bytes<R: Resource>(&self, payload: &Decoded<R>) -> Result<Bytes, EncodeError> {
        self.encode(payload).map(Bytes::from)
    }

    fn resolve_shape<R: Resource>(
        &self,
        mut roots: Vec<Element>,
    ) -> Result<Decoded<R>, DecodeError> {
        let envelope = self.config.envelope.as_str();

        match roots.len() {
            0 => Err(DecodeError::EmptyDocument),
            1 => {
                let root = roots.remove(0);
                if root.name == R::ELEMENT {
                    Ok(Decoded::Single(read_record(&root)?))
                } else if root.name == envelope {
                    let items = root
                        .children_named(R::ELEMENT)
                        .map(read_record)
                        .collect::<Result<Vec<R>, _>>()?;
                    Ok(Decoded::Collection(Collection::enveloped(items)))
                } else {
                    Err(self.unexpected_root::<R>(root.name))
                }
            }
            _ => {
                if let Some(stray) = roots.iter().find(|r| r.name != R::ELEMENT) {
                    return Err(self.unexpected_root::<R>(stray.name.clone()));
                }
                let items = roots.iter().map(read_record).collect::<Result<Vec<R>, _>>()?;
                Ok(Decoded::Collection(Collection::bare(items)))
            }
        }
    }

    /// The envelope must be a usable tag and must not collide with the
    /// resource element, or the two shapes become indistinguishable.
    fn check_envelope<R: Resource>(&self) -> Result<(), String> {
        let envelope = self.config.envelope.as_str();
        if !is_valid_tag(envelope) {
            return Err(format!("envelope {envelope:?} is not a valid tag name"));
        }
        if envelope == R::ELEMENT {
            return Err(format!("envelope <{envelope}> clashes with the resource element"));
        }
        Ok(())
    }

    fn unexpected_root<R: Resource>(&self, found: String) -> DecodeError {
        DecodeError::UnexpectedRoot {
            expected: format!("<{}> or <{}>", R::ELEMENT, self.config.envelope),
            found,
        }
    }
}

/// Decode a document of unknown shape with the default configuration.
#[inline]
pub fn decode<R: Resource>(input: &[u8]) -> Result<Decoded<R>, DecodeError> {
    XmlCodec::new().decode(input)
}

/// Encode a record or collection with the default configuration.
#[inline]
pub fn encode<R: Resource>(payload: &Decoded<R>) -> Result<Vec<u8>, EncodeError> {
    XmlCodec::new().encode(payload)
}

fn read_record<R: Resource>(element: &Element) -> Result<R, DecodeError> {
    let fields = R::fields();
    let mut record = R::default();

    for field in fields {
        if let Some(node) = element.find(field.path) {
            field.accessor.apply(&mut record, field.name, &node.text)?;
        }
    }

    for child in &element.children {
        if !fields.iter().any(|f| f.top_tag() == Some(child.name.as_str())) {
            tracing::trace!(resource = R::ELEMENT, tag = %child.name, "ignoring unknown tag");
        }
    }

    Ok(record)
}

fn build_record<R: Resource>(record: &R) -> Element {
    let mut element = Element::new(R::ELEMENT);

    for field in R::fields() {
        let Some(text) = field.accessor.render(record) else {
            continue;
        };
        let Some((leaf, wrappers)) = field.path.split_last() else {
            continue;
        };

        let mut node = &mut element;
        for wrapper in wrappers {
            node = node.child_or_insert(wrapper);
        }
        node.push(Element::with_text(*leaf, text));
    }

    element
}
