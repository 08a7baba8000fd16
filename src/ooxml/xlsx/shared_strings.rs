//! Shared strings table for Excel files.
//!
//! Excel stores most cell text once in `xl/sharedStrings.xml` and refers to
//! it by index from `t="s"` cells.

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::text::push_char_data;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Shared strings table.
#[derive(Debug, Default)]
pub struct SharedStrings {
    /// The strings, in table order
    strings: Vec<String>,
}

impl SharedStrings {
    /// Create a new empty shared strings table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse shared strings from xl/sharedStrings.xml content.
    ///
    /// Rich-text items are flattened by concatenating their runs. Phonetic
    /// hints (`<rPh>`) are not part of the cell text and are dropped.
    pub fn parse(content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(content);
        let mut strings = Vec::new();

        let mut current: Option<String> = None;
        let mut in_text = false;
        let mut phonetic_depth = 0usize;

        loop {
            let event = reader.read_event().map_err(|e| OoxmlError::Xml(e.to_string()))?;
            match &event {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"si" => current = Some(String::new()),
                    b"rPh" => phonetic_depth += 1,
                    b"t" => in_text = current.is_some() && phonetic_depth == 0,
                    _ => {},
                },
                Event::Empty(e) => {
                    if e.local_name().as_ref() == b"si" {
                        strings.push(String::new());
                    }
                },
                Event::End(e) => match e.local_name().as_ref() {
                    b"si" => {
                        if let Some(text) = current.take() {
                            strings.push(text);
                        }
                    },
                    b"rPh" => phonetic_depth = phonetic_depth.saturating_sub(1),
                    b"t" => in_text = false,
                    _ => {},
                },
                Event::Eof => break,
                _ => {
                    if in_text && let Some(text) = current.as_mut() {
                        push_char_data(text, &event)?;
                    }
                },
            }
        }

        Ok(SharedStrings { strings })
    }

    /// Get a string by its index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(|s| s.as_str())
    }

    /// Get the number of strings in the table.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Collect the text of an inline string (`<is>`) element.
///
/// The reader must be positioned just after `start`. Consumes events up to
/// and including the matching end tag.
pub(crate) fn read_inline_string(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<String> {
    let end_name = start.name().as_ref().to_vec();
    let mut text = String::new();
    let mut depth = 0usize;
    let mut in_text = false;
    let mut phonetic_depth = 0usize;

    loop {
        let event = reader.read_event().map_err(|e| OoxmlError::Xml(e.to_string()))?;
        match &event {
            Event::Start(e) => {
                depth += 1;
                match e.local_name().as_ref() {
                    b"rPh" => phonetic_depth += 1,
                    b"t" => in_text = phonetic_depth == 0,
                    _ => {},
                }
            },
            Event::End(e) => {
                if depth == 0 && e.name().as_ref() == end_name.as_slice() {
                    break;
                }
                depth = depth.saturating_sub(1);
                match e.local_name().as_ref() {
                    b"rPh" => phonetic_depth = phonetic_depth.saturating_sub(1),
                    b"t" => in_text = false,
                    _ => {},
                }
            },
            Event::Eof => {
                return Err(OoxmlError::Xml("unexpected end of inline string".to_string()));
            },
            _ => {
                if in_text {
                    push_char_data(&mut text, &event)?;
                }
            },
        }
    }

    Ok(text)
}
