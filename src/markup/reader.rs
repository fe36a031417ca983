//! Document parser built on `quick-xml` pull events.
//!
//! The whole document is read into a list of top-level [`Element`]s. Only
//! a complete, balanced document produces a result; any failure discards
//! everything read so far.

use quick_xml::events::Event;
use quick_xml::Reader;

use super::Element;
use crate::error::DecodeError;

/// Parse `input` into its top-level elements.
///
/// Declarations, comments, processing instructions, DOCTYPE and whitespace
/// outside elements are skipped. Multiple top-level elements are allowed.
///
/// # Errors
///
/// - [`DecodeError::Malformed`] for syntax errors, mismatched or stray end
///   tags, text outside any element, and unterminated documents
/// - [`DecodeError::InvalidUtf8`] when a tag name is not UTF-8
/// - [`DecodeError::TooDeep`] when nesting exceeds `max_depth`
pub fn parse_document(input: &[u8], max_depth: usize) -> Result<Vec<Element>, DecodeError> {
    let mut reader = Reader::from_reader(input);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = true;
    config.expand_empty_elements = false;

    let mut roots = Vec::new();
    let mut stack: Vec<Element> = Vec::new();

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => return Err(malformed(reader.buffer_position() as u64, e.to_string())),
        };

        match event {
            Event::Start(start) => {
                if stack.len() >= max_depth {
                    return Err(DecodeError::TooDeep { limit: max_depth });
                }
                stack.push(Element::new(tag_name(start.local_name().as_ref())?));
            }
            Event::Empty(start) => {
                if stack.len() >= max_depth {
                    return Err(DecodeError::TooDeep { limit: max_depth });
                }
                let element = Element::new(tag_name(start.local_name().as_ref())?);
                attach(&mut stack, &mut roots, element);
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    malformed(reader.buffer_position() as u64, "unmatched end tag")
                })?;
                attach(&mut stack, &mut roots, element);
            }
            Event::Text(text) => {
                let position = reader.buffer_position() as u64;
                let content = text
                    .unescape()
                    .map_err(|e| malformed(position, e.to_string()))?;
                append_text(&mut stack, &content, position)?;
            }
            Event::CData(cdata) => {
                let position = reader.buffer_position() as u64;
                let raw = cdata.into_inner();
                let content = std::str::from_utf8(&raw).map_err(|_| DecodeError::InvalidUtf8)?;
                append_text(&mut stack, content, position)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(malformed(
            reader.buffer_position() as u64,
            format!("unexpected end of document, <{}> is not closed", open.name),
        ));
    }

    Ok(roots)
}

fn tag_name(raw: &[u8]) -> Result<String, DecodeError> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|_| DecodeError::InvalidUtf8)
}

fn attach(stack: &mut [Element], roots: &mut Vec<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.push(element),
        None => roots.push(element),
    }
}

fn append_text(stack: &mut [Element], content: &str, position: u64) -> Result<(), DecodeError> {
    match stack.last_mut() {
        Some(current) => {
            current.text.push_str(content);
            Ok(())
        }
        None if content.trim().is_empty() => Ok(()),
        None => Err(malformed(position, "text outside of root element")),
    }
}

fn malformed(position: u64, message: impl Into<String>) -> DecodeError {
    DecodeError::Malformed {
        position,
        message: message.into(),
    }
}
