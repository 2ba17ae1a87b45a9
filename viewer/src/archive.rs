use crate::catalog::CatalogEntry;
use airfoilcore::telemetry::MetricsRecorder;
use airfoilcore::{Airfoil, ExportOptions, OutputFormat};
use anyhow::Context;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Download name of the archive for `format`.
pub fn archive_name(format: OutputFormat) -> String {
    format!("airfoils_{}.zip", format.name())
}

/// Zips one export per entry, each from its own freshly parsed airfoil.
///
/// Entries are named after the source file with the format extension
/// appended, e.g. `naca0012.dat.svg`.
pub fn build_archive(
    entries: &[&CatalogEntry],
    format: OutputFormat,
    options: &ExportOptions,
    metrics: &MetricsRecorder,
) -> anyhow::Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let file_options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        let airfoil = Airfoil::from_path(&entry.path)
            .with_context(|| format!("reading {}", entry.path.display()))?;
        let mut buffer = Vec::new();
        format
            .write(&airfoil, options, &mut buffer)
            .with_context(|| format!("exporting {} as {}", entry.name, format))?;

        zip.start_file(format!("{}.{}", entry.file_name, format.extension()), file_options)?;
        zip.write_all(&buffer)?;
        metrics.record_export();
    }

    Ok(zip.finish()?.into_inner())
}
