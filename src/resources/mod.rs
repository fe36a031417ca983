//! Resource records exchanged with the management API.
//!
//! Each resource is a plain struct of optional fields plus a static field
//! table implementing [`Resource`](crate::schema::Resource). Adding a
//! resource type means adding a table; the codec stays the same.

mod ipset;

pub use ipset::{IpSet, IpSetList};
