//! Codec module - converting resources to and from bytes.
//!
//! - [`XmlCodec`] - the table-driven XML engine used on the management API
//! - [`JsonCodec`] - JSON using `serde_json`, for diagnostics
//!
//! # Design
//!
//! The XML engine is generic over [`Resource`](crate::schema::Resource):
//! one engine, one static table per resource type. The JSON codec is a
//! marker struct with static methods and works on any record deriving
//! `Serialize`/`Deserialize`.
//!
//! # Example
//!
//! ```
//! use nsxrecord::codec::{Decoded, XmlCodec};
//! use nsxrecord::resources::IpSet;
//!
//! let codec = XmlCodec::new();
//! let doc = b"<list><ipset><name>a</name></ipset><ipset><name>b</name></ipset></list>";
//!
//! match codec.decode::<IpSet>(doc).unwrap() {
//!     Decoded::Collection(sets) => assert_eq!(sets.len(), 2),
//!     Decoded::Single(_) => unreachable!(),
//! }
//! ```

mod json;
mod shape;
mod xml;

pub use json::JsonCodec;
pub use shape::{Collection, CollectionShape, Decoded};
pub use xml::{decode, encode, XmlCodec};
