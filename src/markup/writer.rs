//! Document writer built on `quick-xml`.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::Element;
use crate::config::CodecConfig;
use crate::error::EncodeError;

/// Serialize `elements` one after another.
///
/// Leaf elements always carry a text event, even an empty one, so an
/// empty value is written as `<tag></tag>` and never gains indentation
/// whitespace.
///
/// # Errors
///
/// Returns [`EncodeError::Write`] if the underlying writer fails.
pub fn write_elements(elements: &[Element], config: &CodecConfig) -> Result<Vec<u8>, EncodeError> {
    let mut writer = match config.indent {
        Some(spaces) => Writer::new_with_indent(Vec::new(), b' ', spaces),
        None => Writer::new(Vec::new()),
    };

    if config.xml_declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(write_error)?;
    }

    for element in elements {
        write_element(&mut writer, element)?;
    }

    Ok(writer.into_inner())
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), EncodeError> {
    writer
        .write_event(Event::Start(BytesStart::new(element.name.as_str())))
        .map_err(write_error)?;

    if element.is_leaf() {
        writer
            .write_event(Event::Text(BytesText::new(&element.text)))
            .map_err(write_error)?;
    } else {
        for child in &element.children {
            write_element(writer, child)?;
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(write_error)?;
    Ok(())
}

fn write_error(e: impl std::fmt::Display) -> EncodeError {
    EncodeError::Write(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse_document;

    fn sample() -> Element {
        let mut root = Element::new("ipset");
        root.push(Element::with_text("name", "a<b & c"));
        let mut wrapper = Element::new("type");
        wrapper.push(Element::with_text("typeName", "IPSet"));
        root.push(wrapper);
        root.push(Element::with_text("description", ""));
        root
    }

    #[test]
    fn test_compact_output() {
        let bytes = write_elements(&[sample()], &CodecConfig::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "<ipset><name>a&lt;b &amp; c</name>\
             <type><typeName>IPSet</typeName></type>\
             <description></description></ipset>"
        );
    }

    #[test]
    fn test_declaration_prefix() {
        let config = CodecConfig::builder().xml_declaration(true).build();
        let bytes = write_elements(&[Element::new("list")], &config).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(text.ends_with("<list></list>"));
    }

    #[test]
    fn test_indented_output_reparses_identically() {
        let config = CodecConfig::builder().indent(2).build();
        let bytes = write_elements(&[sample()], &config).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("\n  <name>"));
        assert!(text.contains("<description></description>"));

        let roots = parse_document(&bytes, 8).unwrap();
        let root = &roots[0];
        assert_eq!(root.child("name").unwrap().text, "a<b & c");
        assert_eq!(root.find(&["type", "typeName"]).unwrap().text, "IPSet");
        assert_eq!(root.child("description").unwrap().text, "");
    }

    #[test]
    fn test_multiple_top_level_elements() {
        let elements = vec![Element::new("ipset"), Element::new("ipset")];
        let bytes = write_elements(&elements, &CodecConfig::default()).unwrap();
        assert_eq!(bytes, b"<ipset></ipset><ipset></ipset>");
    }
}
