//! Print the sheet names of an Excel workbook and the first rows of its
//! first sheet.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use ooxml_dump::dump::config::XlsxDumpConfig;
use ooxml_dump::dump::{DumpError, logging, xlsx};

fn main() -> ExitCode {
    logging::init();
    let config = XlsxDumpConfig::from_args();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = xlsx::run(&config, &mut out).and_then(|summary| {
        out.flush()?;
        Ok::<_, DumpError>(summary)
    });

    match result {
        Ok(summary) => {
            tracing::info!(rows = summary.units_written, max_rows = config.max_rows, "done");
            ExitCode::SUCCESS
        },
        Err(err) => {
            let _ = err.report(&mut io::stderr().lock());
            ExitCode::from(err.exit_code())
        },
    }
}
