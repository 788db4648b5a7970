//! CSV exporter.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use dircsv_core::{ExportError, ExportOutcome, Record, CSV_COLUMNS};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Written before the header so spreadsheet tools detect UTF-8.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write records to `destination`.
///
/// An empty sequence creates no file and returns
/// [`ExportOutcome::NothingToExport`]. On failure a partial file may remain.
pub fn export(records: &[Record], destination: &Path) -> Result<ExportOutcome, ExportError> {
    if records.is_empty() {
        info!("No files to save");
        return Ok(ExportOutcome::NothingToExport);
    }

    let mut out = BufWriter::new(File::create(destination)?);
    out.write_all(UTF8_BOM)?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .has_headers(false)
        .from_writer(out);

    writer.write_record(CSV_COLUMNS).map_err(write_error)?;
    for record in records {
        writer
            .write_record([
                record.relative_path(),
                record.file_name(),
                record.file_extension(),
                record.content(),
            ])
            .map_err(write_error)?;
    }
    writer.flush()?;

    info!("CSV successfully created: {}", destination.display());
    info!("Entry count: {}", records.len());

    Ok(ExportOutcome::Written {
        path: destination.to_path_buf(),
        rows: records.len(),
    })
}

fn write_error(err: csv::Error) -> ExportError {
    match err.into_kind() {
        csv::ErrorKind::Io(e) => ExportError::Io(e),
        kind => ExportError::Write(format!("{kind:?}")),
    }
}
