//! Paragraph dump of a Word document.

use super::config::DocxDumpConfig;
use super::{DumpError, DumpSummary, ensure_exists, write_line};
use crate::common::OutputEncoding;
use crate::ooxml::docx::Package;
use std::io::{self, Write};
use tracing::debug;

/// Print the non-blank paragraphs of `config.path` to `out`.
///
/// Each body-level paragraph is stripped of surrounding whitespace; blank
/// ones are skipped, the rest are written one per line in document order.
pub fn run<W: Write>(config: &DocxDumpConfig, out: &mut W) -> Result<DumpSummary, DumpError> {
    ensure_exists(&config.path)?;

    let package = Package::open(&config.path)?;
    let document = package.document()?;
    let paragraphs = document
        .paragraphs()?
        .iter()
        .map(|para| para.text())
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = paragraphs.len(), "read paragraphs");

    let units_written = write_paragraphs(&paragraphs, &config.encoding, out)?;
    Ok(DumpSummary {
        path: config.path.clone(),
        units_written,
    })
}

/// Write each non-blank, stripped paragraph on its own line.
///
/// Returns the number of lines written.
pub fn write_paragraphs<I, S, W>(
    paragraphs: I,
    encoding: &OutputEncoding,
    out: &mut W,
) -> io::Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut written = 0;
    for paragraph in paragraphs {
        let text = paragraph.as_ref().trim();
        if text.is_empty() {
            continue;
        }
        write_line(out, &encoding.encode(text))?;
        written += 1;
    }
    Ok(written)
}
