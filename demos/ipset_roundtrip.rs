//! IP set round trip - decode a list response and build a create request.
//!
//! This example demonstrates:
//! - Decoding a `<list>` response without knowing its shape in advance
//! - Reading typed fields, including the nested `type` > `typeName`
//! - Encoding a new record for a create request with indentation
//!
//! # Running
//!
//! ```text
//! RUST_LOG=nsxrecord=trace cargo run --example ipset_roundtrip
//! ```

use nsxrecord::codec::{Decoded, JsonCodec, XmlCodec};
use nsxrecord::config::CodecConfig;
use nsxrecord::resources::IpSet;
use tracing_subscriber::EnvFilter;

const LIST_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<list>
    <ipset>
        <objectId>ipset-1</objectId>
        <objectTypeName>IPSet</objectTypeName>
        <vsmUuid>42001E0A-7C5F-4C3B-9C1D-6D3B2E0A1F11</vsmUuid>
        <nodeId>0dd4c4d7-2e9a-4cf6-8f54-8ef4cde51f2d</nodeId>
        <revision>2</revision>
        <type>
            <typeName>IPSet</typeName>
        </type>
        <name>web-servers</name>
        <clientHandle></clientHandle>
        <isUniversal>false</isUniversal>
        <inheritanceAllowed>false</inheritanceAllowed>
        <value>10.0.0.10,10.0.0.11</value>
    </ipset>
    <ipset>
        <objectId>ipset-2</objectId>
        <revision>7</revision>
        <name>db-servers</name>
        <value>10.0.1.0/24</value>
    </ipset>
</list>"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let codec = XmlCodec::with_config(
        CodecConfig::builder()
            .indent(2)
            .xml_declaration(true)
            .build(),
    );

    match codec.decode::<IpSet>(LIST_RESPONSE.as_bytes())? {
        Decoded::Single(set) => tracing::info!(name = ?set.name, "single ip set"),
        Decoded::Collection(sets) => {
            for set in &sets {
                tracing::info!(
                    id = ?set.object_id,
                    name = ?set.name,
                    revision = ?set.revision,
                    addresses = set.addresses().len(),
                    "ip set"
                );
            }
            println!("{}", JsonCodec::encode_pretty(&sets)?);
        }
    }

    let request = IpSet::new("app-servers")
        .with_description("application tier")
        .with_inheritance_allowed(true)
        .with_value("10.0.2.10,10.0.2.11,10.0.2.12");
    let body = codec.encode_record(&request)?;
    println!("{}", String::from_utf8(body)?);

    Ok(())
}
