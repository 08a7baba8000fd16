//! Print the non-blank paragraphs of a Word document, one per line.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use ooxml_dump::dump::config::DocxDumpConfig;
use ooxml_dump::dump::{DumpError, docx, logging};

fn main() -> ExitCode {
    logging::init();
    let config = DocxDumpConfig::from_args();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = docx::run(&config, &mut out).and_then(|summary| {
        out.flush()?;
        Ok::<_, DumpError>(summary)
    });

    match result {
        Ok(summary) => {
            tracing::info!(paragraphs = summary.units_written, "done");
            ExitCode::SUCCESS
        },
        Err(err) => {
            let _ = err.report(&mut io::stderr().lock());
            ExitCode::from(err.exit_code())
        },
    }
}
