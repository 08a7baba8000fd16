/// DocumentPart - the main document.xml part of a Word document.
use crate::ooxml::docx::paragraph::Paragraph;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::part::Part;
use quick_xml::Reader;
use quick_xml::events::Event;
use smallvec::SmallVec;
use tracing::debug;

/// The main document part of a Word document.
///
/// This corresponds to the `/word/document.xml` part in the package.
pub struct DocumentPart<'a> {
    /// The underlying part
    part: Part<'a>,
}

impl<'a> DocumentPart<'a> {
    /// Create a DocumentPart from a Part.
    pub fn from_part(part: Part<'a>) -> Result<Self> {
        Ok(Self { part })
    }

    /// Get the XML bytes of the document.
    #[inline]
    pub fn xml_bytes(&self) -> &'a [u8] {
        self.part.blob()
    }

    /// Name of the part inside the package.
    #[inline]
    pub fn partname(&self) -> &str {
        self.part.partname().as_str()
    }

    /// Extract the text of every body-level paragraph, joined by newlines.
    pub fn extract_text(&self) -> Result<String> {
        let paragraphs = self.paragraphs()?;
        let mut result = String::with_capacity(self.xml_bytes().len() / 8);

        for (index, para) in paragraphs.iter().enumerate() {
            if index > 0 {
                result.push('\n');
            }
            result.push_str(&para.text()?);
        }

        Ok(result)
    }

    /// Count the body-level paragraphs in the document.
    pub fn paragraph_count(&self) -> Result<usize> {
        Ok(self.paragraphs()?.len())
    }

    /// Get all body-level paragraphs in the document.
    ///
    /// Only `<w:p>` elements whose parent is `<w:body>` are returned. Each
    /// paragraph keeps a copy of its own XML, sliced straight out of the
    /// part so nothing is re-serialized.
    pub fn paragraphs(&self) -> Result<SmallVec<[Paragraph; 32]>> {
        let xml = self.part.xml_str()?;
        let mut reader = Reader::from_str(xml);

        let mut paragraphs = SmallVec::new();
        let mut depth = 0usize;
        let mut body_depth: Option<usize> = None;
        let mut para_start: Option<usize> = None;

        loop {
            let start = reader.buffer_position() as usize;
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    depth += 1;
                    match e.local_name().as_ref() {
                        b"body" if body_depth.is_none() => body_depth = Some(depth),
                        b"p" if body_depth == Some(depth - 1) => para_start = Some(start),
                        _ => {},
                    }
                },
                Ok(Event::Empty(e)) => {
                    if e.local_name().as_ref() == b"p" && body_depth == Some(depth) {
                        let end = reader.buffer_position() as usize;
                        paragraphs.push(Paragraph::new(xml.as_bytes()[start..end].to_vec()));
                    }
                },
                Ok(Event::End(e)) => {
                    if e.local_name().as_ref() == b"p" && body_depth == Some(depth - 1) {
                        if let Some(para_start) = para_start.take() {
                            let end = reader.buffer_position() as usize;
                            paragraphs
                                .push(Paragraph::new(xml.as_bytes()[para_start..end].to_vec()));
                        }
                    } else if body_depth == Some(depth) {
                        body_depth = None;
                    }
                    depth = depth.saturating_sub(1);
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
        }

        debug!(part = self.partname(), count = paragraphs.len(), "collected body paragraphs");
        Ok(paragraphs)
    }
}
