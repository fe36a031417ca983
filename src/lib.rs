//! # nsxrecord
//!
//! Typed XML resource marshaling for network-virtualization management APIs.
//!
//! Resources such as IP sets travel as XML documents. This crate maps them
//! to and from plain Rust structs through a static field-to-path table per
//! resource type and one shared engine.
//!
//! ## Architecture
//!
//! - **Schema**: each resource declares its fields, tag paths and kinds
//! - **Markup**: documents are parsed into, and written from, element trees
//! - **Codec**: walks the table to build records from trees and back, and
//!   resolves single record, bare list and `<list>` envelope shapes on decode
//!
//! Transport, authentication and retries are left to the caller. The codec
//! performs no I/O and holds no state, so one instance can be shared freely.
//!
//! ## Example
//!
//! ```
//! use nsxrecord::codec::XmlCodec;
//! use nsxrecord::resources::IpSet;
//!
//! let codec = XmlCodec::new();
//!
//! let request = IpSet::new("web-servers")
//!     .with_description("frontend pool")
//!     .with_value("10.0.0.1,10.0.0.2");
//! let body = codec.encode_record(&request).unwrap();
//!
//! let response = b"<list><ipset><objectId>ipset-1</objectId></ipset></list>";
//! let sets = codec.decode_collection::<IpSet>(response).unwrap();
//! assert_eq!(sets.items[0].object_id.as_deref(), Some("ipset-1"));
//! # assert!(body.starts_with(b"<ipset><name>web-servers</name>"));
//! ```
//!
//! ## Demo
//!
//! Runnable programs live in `demos/` rather than `examples/`, and are
//! registered as Cargo examples in `Cargo.toml`:
//!
//! ```text
//! RUST_LOG=nsxrecord=trace cargo run --example ipset_roundtrip
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod markup;
pub mod resources;
pub mod schema;

pub use codec::{Collection, CollectionShape, Decoded, XmlCodec};
pub use config::CodecConfig;
pub use error::{CodecError, DecodeError, EncodeError};
pub use schema::Resource;
