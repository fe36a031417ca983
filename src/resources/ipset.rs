//! IP set resource.
//!
//! ```text
//! <ipset>
//!   <objectId>ipset-12</objectId>
//!   <objectTypeName>IPSet</objectTypeName>
//!   <vsmUuid>..</vsmUuid>
//!   <nodeId>..</nodeId>
//!   <revision>3</revision>
//!   <type><typeName>IPSet</typeName></type>
//!   <name>web-servers</name>
//!   <description>..</description>
//!   <isUniversal>false</isUniversal>
//!   <inheritanceAllowed>true</inheritanceAllowed>
//!   <value>10.0.0.1,10.0.0.2</value>
//! </ipset>
//! ```

use serde::{Deserialize, Serialize};

use crate::codec::Collection;
use crate::schema::{FieldSpec, Resource};

/// A named set of IP addresses, ranges or networks.
///
/// Every field is optional: `None` is never written, while `Some(false)`,
/// `Some(0)` and `Some("")` are written and read back as themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpSet {
    /// Server-assigned identifier; `None` before creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    /// Type discriminator reported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type_name: Option<String>,
    /// Owning manager instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vsm_uuid: Option<String>,
    /// Owning node or cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Optimistic-concurrency revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<i64>,
    /// Nested `type` > `typeName` value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_universal: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inheritance_allowed: Option<bool>,
    /// Comma-separated members, opaque to the codec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

static IPSET_FIELDS: [FieldSpec<IpSet>; 11] = [
    FieldSpec::text(
        "object_id",
        &["objectId"],
        |s| s.object_id.as_deref(),
        |s, v| s.object_id = Some(v),
    ),
    FieldSpec::text(
        "object_type_name",
        &["objectTypeName"],
        |s| s.object_type_name.as_deref(),
        |s, v| s.object_type_name = Some(v),
    ),
    FieldSpec::text(
        "vsm_uuid",
        &["vsmUuid"],
        |s| s.vsm_uuid.as_deref(),
        |s, v| s.vsm_uuid = Some(v),
    ),
    FieldSpec::text(
        "node_id",
        &["nodeId"],
        |s| s.node_id.as_deref(),
        |s, v| s.node_id = Some(v),
    ),
    FieldSpec::integer(
        "revision",
        &["revision"],
        |s| s.revision,
        |s, v| s.revision = Some(v),
    ),
    FieldSpec::text(
        "type_name",
        &["type", "typeName"],
        |s| s.type_name.as_deref(),
        |s, v| s.type_name = Some(v),
    ),
    FieldSpec::text(
        "name",
        &["name"],
        |s| s.name.as_deref(),
        |s, v| s.name = Some(v),
    ),
    FieldSpec::text(
        "description",
        &["description"],
        |s| s.description.as_deref(),
        |s, v| s.description = Some(v),
    ),
    FieldSpec::boolean(
        "is_universal",
        &["isUniversal"],
        |s| s.is_universal,
        |s, v| s.is_universal = Some(v),
    ),
    FieldSpec::boolean(
        "inheritance_allowed",
        &["inheritanceAllowed"],
        |s| s.inheritance_allowed,
        |s, v| s.inheritance_allowed = Some(v),
    ),
    FieldSpec::text(
        "value",
        &["value"],
        |s| s.value.as_deref(),
        |s, v| s.value = Some(v),
    ),
];

impl Resource for IpSet {
    const ELEMENT: &'static str = "ipset";

    fn fields() -> &'static [FieldSpec<Self>] {
        &IPSET_FIELDS
    }
}

/// A list of IP sets, bare or wrapped in `<list>`.
pub type IpSetList = Collection<IpSet>;

impl IpSet {
    /// New IP set carrying only a name, ready for a create request.
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_object_id(mut self, object_id: &str) -> Self {
        self.object_id = Some(object_id.to_string());
        self
    }

    /// Set both halves of the owner reference.
    pub fn with_owner(mut self, vsm_uuid: &str, node_id: &str) -> Self {
        self.vsm_uuid = Some(vsm_uuid.to_string());
        self.node_id = Some(node_id.to_string());
        self
    }

    pub fn with_revision(mut self, revision: i64) -> Self {
        self.revision = Some(revision);
        self
    }

    pub fn with_type_name(mut self, type_name: &str) -> Self {
        self.type_name = Some(type_name.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_universal(mut self, universal: bool) -> Self {
        self.is_universal = Some(universal);
        self
    }

    pub fn with_inheritance_allowed(mut self, allowed: bool) -> Self {
        self.inheritance_allowed = Some(allowed);
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Members listed in `value`, split on commas.
    ///
    /// Entries are trimmed and empty entries dropped. Returns an empty list
    /// when `value` is absent.
    pub fn addresses(&self) -> Vec<&str> {
        self.value
            .as_deref()
            .map(|v| v.split(',').map(str::trim).filter(|a| !a.is_empty()).collect())
            .unwrap_or_default()
    }
}
