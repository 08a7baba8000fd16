/// Word (.docx) document support.
///
/// This module reads the main document part of a Word package and exposes
/// its body-level paragraphs.
///
/// # Architecture
///
/// - `Package`: The overall .docx file package
/// - `Document`: The main document content
/// - `Paragraph`: A body-level paragraph and its text
/// - `DocumentPart`: The core document.xml part
///
/// # Example
///
/// ```rust,no_run
/// use ooxml_dump::ooxml::docx::Package;
///
/// let package = Package::open("document.docx")?;
/// let doc = package.document()?;
///
/// for para in doc.paragraphs()? {
///     println!("Paragraph: {}", para.text()?);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub mod document;
pub mod package;
pub mod paragraph;
pub mod parts;

pub use document::Document;
pub use package::Package;
pub use paragraph::Paragraph;
pub use parts::DocumentPart;
