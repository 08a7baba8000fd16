/// Document - the API for reading Word document content.
use crate::ooxml::docx::paragraph::Paragraph;
use crate::ooxml::docx::parts::DocumentPart;
use crate::ooxml::error::Result;

/// A Word document.
///
/// Provides access to the body-level paragraphs of the main document part,
/// in document order.
///
/// # Examples
///
/// ```rust,no_run
/// use ooxml_dump::ooxml::docx::Package;
///
/// let pkg = Package::open("document.docx")?;
/// let doc = pkg.document()?;
///
/// println!("Number of paragraphs: {}", doc.paragraph_count()?);
/// println!("Document text: {}", doc.text()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Document<'a> {
    /// The underlying document part
    part: DocumentPart<'a>,
}

impl<'a> Document<'a> {
    /// Create a new Document from a DocumentPart.
    #[inline]
    pub(crate) fn new(part: DocumentPart<'a>) -> Self {
        Self { part }
    }

    /// Get the text of all paragraphs, one paragraph per line.
    pub fn text(&self) -> Result<String> {
        self.part.extract_text()
    }

    /// Get the number of body-level paragraphs in the document.
    pub fn paragraph_count(&self) -> Result<usize> {
        self.part.paragraph_count()
    }

    /// Get access to the underlying document part.
    #[inline]
    pub fn part(&self) -> &DocumentPart<'a> {
        &self.part
    }

    /// Get all body-level paragraphs in the document.
    ///
    /// Paragraphs nested in tables, content controls or text boxes are not
    /// included.
    pub fn paragraphs(&self) -> Result<Vec<Paragraph>> {
        Ok(self.part.paragraphs()?.into_iter().collect())
    }
}
