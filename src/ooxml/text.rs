//! Helpers for pulling character data and attributes out of quick-xml events.
//!
//! quick-xml reports entity and character references as separate
//! [`Event::GeneralRef`] events, so text content has to be stitched back
//! together from `Text`, `GeneralRef` and `CData` events.

use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

/// Append the character data carried by `event` to `out`.
///
/// Returns `true` when the event was character data, `false` otherwise.
pub(crate) fn push_char_data(out: &mut String, event: &Event<'_>) -> Result<bool> {
    match event {
        Event::Text(e) => {
            let text = e.decode().map_err(|e| OoxmlError::Xml(e.to_string()))?;
            out.push_str(&text);
        },
        Event::CData(e) => {
            let text = e.decode().map_err(|e| OoxmlError::Xml(e.to_string()))?;
            out.push_str(&text);
        },
        Event::GeneralRef(e) => {
            if let Some(ch) = e.resolve_char_ref()? {
                out.push(ch);
            } else {
                let name = e.decode().map_err(|e| OoxmlError::Xml(e.to_string()))?;
                match resolve_predefined_entity(&name) {
                    Some(resolved) => out.push_str(resolved),
                    None => {
                        return Err(OoxmlError::Xml(format!("unknown entity reference &{};", name)));
                    },
                }
            }
        },
        _ => return Ok(false),
    }
    Ok(true)
}

/// Look up an attribute by local name, ignoring any namespace prefix.
pub(crate) fn attr_value(e: &BytesStart<'_>, local_name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == local_name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
