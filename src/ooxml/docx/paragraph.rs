/// Paragraph structure for Word documents.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::text::{attr_value, push_char_data};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smallvec::SmallVec;

/// A paragraph in a Word document.
///
/// Represents a `<w:p>` element. The text of a paragraph is made up of the
/// runs that are direct children of the paragraph or of a direct-child
/// hyperlink. Runs buried deeper (inside field results held by content
/// controls, text boxes, inserted revisions) are not part of it.
///
/// # Example
///
/// ```rust,ignore
/// for para in document.paragraphs()? {
///     println!("Paragraph text: {}", para.text()?);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Paragraph {
    /// The raw XML bytes for this paragraph
    xml_bytes: Vec<u8>,
}

/// What an open element means for text collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Paragraph,
    Hyperlink,
    Run,
    Text,
    Other,
}

impl Paragraph {
    /// Create a new Paragraph from XML bytes.
    ///
    /// # Arguments
    ///
    /// * `xml_bytes` - The XML content of the `<w:p>` element
    pub fn new(xml_bytes: Vec<u8>) -> Self {
        Self { xml_bytes }
    }

    /// Raw XML of the paragraph.
    #[inline]
    pub fn xml_bytes(&self) -> &[u8] {
        &self.xml_bytes
    }

    /// Get the text content of this paragraph.
    ///
    /// - `w:t` contributes its text verbatim, whitespace included
    /// - `w:tab` and `w:ptab` become `\t`
    /// - `w:cr` and text-wrapping `w:br` become `\n`; page and column breaks
    ///   contribute nothing
    /// - `w:noBreakHyphen` becomes `-`
    ///
    /// Deleted text and field instructions are skipped.
    pub fn text(&self) -> Result<String> {
        let mut reader = Reader::from_reader(&self.xml_bytes[..]);

        let mut result = String::with_capacity(self.xml_bytes.len() / 4);
        let mut scopes: SmallVec<[Scope; 16]> = SmallVec::new();
        let mut buf = Vec::with_capacity(1024);

        loop {
            buf.clear();
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            match &event {
                Event::Start(e) => {
                    let parent = scopes.last().copied();
                    if parent == Some(Scope::Run) {
                        push_run_content(&mut result, e)?;
                    }
                    scopes.push(classify(parent, e));
                },
                Event::Empty(e) => {
                    if scopes.last() == Some(&Scope::Run) {
                        push_run_content(&mut result, e)?;
                    }
                },
                Event::End(_) => {
                    scopes.pop();
                },
                Event::Eof => break,
                _ => {
                    if scopes.last() == Some(&Scope::Text) {
                        push_char_data(&mut result, &event)?;
                    }
                },
            }
        }

        Ok(result)
    }
}

fn classify(parent: Option<Scope>, e: &BytesStart<'_>) -> Scope {
    match (parent, e.local_name().as_ref()) {
        (None, b"p") => Scope::Paragraph,
        (Some(Scope::Paragraph), b"hyperlink") => Scope::Hyperlink,
        (Some(Scope::Paragraph | Scope::Hyperlink), b"r") => Scope::Run,
        (Some(Scope::Run), b"t") => Scope::Text,
        _ => Scope::Other,
    }
}

/// Text contributed by a non-`w:t` child of a run.
fn push_run_content(out: &mut String, e: &BytesStart<'_>) -> Result<()> {
    match e.local_name().as_ref() {
        b"tab" | b"ptab" => out.push('\t'),
        b"cr" => out.push('\n'),
        b"br" => match attr_value(e, b"type")?.as_deref() {
            None | Some("textWrapping") => out.push('\n'),
            _ => {},
        },
        b"noBreakHyphen" => out.push('-'),
        _ => {},
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(xml: &str) -> String {
        Paragraph::new(xml.as_bytes().to_vec()).text().unwrap()
    }

    #[test]
    fn test_runs_concatenate() {
        let xml = r#"<w:p><w:r><w:t>Hello, </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>world</w:t></w:r></w:p>"#;
        assert_eq!(text_of(xml), "Hello, world");
    }

    #[test]
    fn test_whitespace_preserved() {
        let xml = r#"<w:p><w:r><w:t xml:space="preserve">  Body text  </w:t></w:r></w:p>"#;
        assert_eq!(text_of(xml), "  Body text  ");
    }

    #[test]
    fn test_hyperlink_runs_included() {
        let xml = r#"<w:p><w:r><w:t>See </w:t></w:r><w:hyperlink r:id="rId5"><w:r><w:t>the site</w:t></w:r></w:hyperlink></w:p>"#;
        assert_eq!(text_of(xml), "See the site");
    }

    #[test]
    fn test_tabs_breaks_and_hyphens() {
        let xml = concat!(
            "<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t>",
            r#"<w:br w:type="page"/><w:t>d</w:t><w:cr/><w:t>e</w:t>"#,
            "<w:noBreakHyphen/><w:t>f</w:t><w:ptab/></w:r></w:p>"
        );
        assert_eq!(text_of(xml), "a\tb\ncd\ne-f\t");
    }

    #[test]
    fn test_text_wrapping_break() {
        let xml = r#"<w:p><w:r><w:t>x</w:t><w:br w:type="textWrapping"/><w:t>y</w:t><w:br w:type="column"/></w:r></w:p>"#;
        assert_eq!(text_of(xml), "x\ny");
    }

    #[test]
    fn test_deleted_text_and_field_codes_skipped() {
        let xml = concat!(
            "<w:p><w:r><w:instrText> PAGE </w:instrText></w:r>",
            "<w:del><w:r><w:delText>gone</w:delText></w:r></w:del>",
            "<w:r><w:t>kept</w:t></w:r></w:p>"
        );
        assert_eq!(text_of(xml), "kept");
    }

    #[test]
    fn test_nested_runs_skipped() {
        let xml = concat!(
            "<w:p><w:ins><w:r><w:t>inserted</w:t></w:r></w:ins>",
            "<w:sdt><w:sdtContent><w:r><w:t>control</w:t></w:r></w:sdtContent></w:sdt>",
            "<w:r><w:t>direct</w:t></w:r></w:p>"
        );
        assert_eq!(text_of(xml), "direct");
    }

    #[test]
    fn test_entities_resolved() {
        let xml = "<w:p><w:r><w:t>R&amp;D &#8211; Q&#x33;</w:t></w:r></w:p>";
        assert_eq!(text_of(xml), "R&D \u{2013} Q3");
    }

    #[test]
    fn test_empty_paragraph() {
        assert_eq!(text_of("<w:p/>"), "");
        assert_eq!(text_of("<w:p><w:pPr><w:jc w:val=\"center\"/></w:pPr></w:p>"), "");
    }
}
