//! Property tests for the XML codec.
//!
//! Arbitrary IP sets must survive encode then decode, unset fields must
//! never leave a tag behind, and no truncation of a valid document may
//! decode or panic.

use nsxrecord::codec::{Collection, Decoded, XmlCodec};
use nsxrecord::config::CodecConfig;
use nsxrecord::error::DecodeError;
use nsxrecord::resources::IpSet;
use proptest::prelude::*;

/// Text without carriage returns, which XML parsers may normalize away.
fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,./:<>&'\"_-]{0,24}"
}

fn arb_ipset() -> impl Strategy<Value = IpSet> {
    (
        (
            proptest::option::of(arb_text()),
            proptest::option::of(arb_text()),
            proptest::option::of(arb_text()),
            proptest::option::of(arb_text()),
            proptest::option::of(any::<i64>()),
            proptest::option::of(arb_text()),
        ),
        (
            proptest::option::of(arb_text()),
            proptest::option::of(arb_text()),
            proptest::option::of(any::<bool>()),
            proptest::option::of(any::<bool>()),
            proptest::option::of(arb_text()),
        ),
    )
        .prop_map(
            |(
                (object_id, object_type_name, vsm_uuid, node_id, revision, type_name),
                (name, description, is_universal, inheritance_allowed, value),
            )| IpSet {
                object_id,
                object_type_name,
                vsm_uuid,
                node_id,
                revision,
                type_name,
                name,
                description,
                is_universal,
                inheritance_allowed,
                value,
            },
        )
}

proptest! {
    /// Any record, compact or indented, decodes back to itself.
    #[test]
    fn record_round_trip(set in arb_ipset(), indent in proptest::option::of(0usize..=4)) {
        let config = match indent {
            Some(spaces) => CodecConfig::builder().indent(spaces).build(),
            None => CodecConfig::default(),
        };
        let codec = XmlCodec::with_config(config);

        let bytes = codec.encode_record(&set).unwrap();
        let decoded = codec.decode::<IpSet>(&bytes).unwrap();
        prop_assert_eq!(decoded, Decoded::Single(set));
    }

    /// Collections of any length round-trip in both shapes.
    #[test]
    fn collection_round_trip(
        items in proptest::collection::vec(arb_ipset(), 2..6),
        enveloped in any::<bool>(),
    ) {
        let codec = XmlCodec::new();
        let collection = if enveloped {
            Collection::enveloped(items)
        } else {
            Collection::bare(items)
        };

        let bytes = codec.encode_collection(&collection).unwrap();
        let decoded = codec.decode::<IpSet>(&bytes).unwrap();
        prop_assert_eq!(decoded, Decoded::Collection(collection));
    }

    /// A field left unset never appears as a tag.
    #[test]
    fn unset_fields_omitted(set in arb_ipset()) {
        let text = String::from_utf8(XmlCodec::new().encode_record(&set).unwrap()).unwrap();

        let checks = [
            ("<objectId>", set.object_id.is_some()),
            ("<objectTypeName>", set.object_type_name.is_some()),
            ("<vsmUuid>", set.vsm_uuid.is_some()),
            ("<nodeId>", set.node_id.is_some()),
            ("<revision>", set.revision.is_some()),
            ("<type>", set.type_name.is_some()),
            ("<name>", set.name.is_some()),
            ("<description>", set.description.is_some()),
            ("<isUniversal>", set.is_universal.is_some()),
            ("<inheritanceAllowed>", set.inheritance_allowed.is_some()),
            ("<value>", set.value.is_some()),
        ];
        for (tag, present) in checks {
            prop_assert_eq!(text.contains(tag), present, "{} in {}", tag, text);
        }
    }

    /// Cutting a valid document short always yields an error, never a record.
    #[test]
    fn truncation_never_decodes(set in arb_ipset(), cut in any::<prop::sample::Index>()) {
        let codec = XmlCodec::new();
        let bytes = codec.encode_record(&set).unwrap();
        let end = cut.index(bytes.len());

        let result = codec.decode::<IpSet>(&bytes[..end]);
        prop_assert!(result.is_err(), "prefix of {} bytes decoded", end);
    }

    /// Arbitrary bytes never panic the decoder.
    #[test]
    fn arbitrary_bytes_do_not_panic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = XmlCodec::new().decode::<IpSet>(&bytes);
    }

    /// Integer fields accept any i64 with surrounding whitespace and reject
    /// text that is not a number.
    #[test]
    fn revision_parsing(revision in any::<i64>(), junk in "[a-z]{1,8}") {
        let codec = XmlCodec::new();

        let doc = format!("<ipset><revision>\n  {revision}  \n</revision></ipset>");
        let set = codec.decode_record::<IpSet>(doc.as_bytes()).unwrap();
        prop_assert_eq!(set.revision, Some(revision));

        let bad = format!("<ipset><revision>{junk}</revision></ipset>");
        let is_invalid = matches!(
            codec.decode::<IpSet>(bad.as_bytes()),
            Err(DecodeError::InvalidValue { field: "revision", .. })
        );
        prop_assert!(is_invalid);
    }
}
