// Table-to-CSV export: normalizes visible cell text, escapes it for the
// delimited format and hands the finished document to a download sink.
pub mod normalize;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use shared::models::Table;

use crate::error::UiError;

pub const CSV_MIME_TYPE: &str = "text/csv";

/// The finished export: one delimited line per input row, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    lines: Vec<String>,
}

impl ExportDocument {
    /// Serializes a table. Every row yields exactly one line and every cell
    /// exactly one field; nothing is reordered or dropped.
    pub fn from_table(table: &Table) -> Self {
        let lines = table
            .rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| normalize::export_field(&cell.text))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        ExportDocument { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Document body: lines joined with a single newline, no trailing
    /// newline after the last line.
    pub fn body(&self) -> String {
        self.lines.join("\n")
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body().into_bytes()
    }
}

/// Resolves a table identifier to the table it names. Implemented by the
/// host UI layer; the exporter never constructs or validates the structure.
pub trait TableSource {
    fn resolve(&self, table_id: &str) -> Option<&Table>;
}

/// In-memory table registry, the provided `TableSource` implementation for
/// hosts that register their visible tables by id.
#[derive(Debug, Default)]
pub struct TableRegistry {
    tables: HashMap<String, Table>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, table_id: impl Into<String>, table: Table) {
        self.tables.insert(table_id.into(), table);
    }

    pub fn remove(&mut self, table_id: &str) -> Option<Table> {
        self.tables.remove(table_id)
    }
}

impl TableSource for TableRegistry {
    fn resolve(&self, table_id: &str) -> Option<&Table> {
        self.tables.get(table_id)
    }
}

/// Receives the finished export. The host decides what "download" means;
/// the exporter only guarantees the payload is handed over once and not
/// retained afterwards.
pub trait DownloadSink {
    fn deliver(&mut self, filename: &str, mime_type: &str, bytes: &[u8]) -> Result<(), UiError>;
}

/// Download sink that writes into a directory, the native counterpart of a
/// browser-initiated file download.
#[derive(Debug)]
pub struct FileDownloadSink {
    directory: PathBuf,
}

impl FileDownloadSink {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        FileDownloadSink {
            directory: directory.as_ref().to_path_buf(),
        }
    }
}

impl DownloadSink for FileDownloadSink {
    fn deliver(&mut self, filename: &str, mime_type: &str, bytes: &[u8]) -> Result<(), UiError> {
        fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(filename);
        fs::write(&path, bytes)?;
        tracing::info!(
            path = %path.display(),
            mime_type,
            size = bytes.len(),
            "Export delivered"
        );
        Ok(())
    }
}

pub struct TableExporter;

impl TableExporter {
    /// Exports a table the caller already holds. The document is built,
    /// delivered and dropped within this call.
    pub fn export_table(
        table: &Table,
        filename: &str,
        sink: &mut dyn DownloadSink,
    ) -> Result<(), UiError> {
        let document = ExportDocument::from_table(table);
        tracing::debug!(
            filename,
            rows = document.line_count(),
            "Exporting table to CSV"
        );
        sink.deliver(filename, CSV_MIME_TYPE, &document.into_bytes())
    }

    /// Exports the table named by `table_id`. An id that resolves to nothing
    /// is a no-op: the caller is not notified beyond a warn-level log entry.
    /// Callers that need a hard failure should resolve the table themselves
    /// and use [`TableExporter::export_table`].
    pub fn export_by_id(
        source: &dyn TableSource,
        table_id: &str,
        filename: &str,
        sink: &mut dyn DownloadSink,
    ) -> Result<(), UiError> {
        match source.resolve(table_id) {
            Some(table) => Self::export_table(table, filename, sink),
            None => {
                tracing::warn!(table_id, "Export requested for unknown table, skipping");
                Ok(())
            }
        }
    }
}

/// Builds a dated export filename, e.g. `produk_2025-01-31.csv`.
pub fn dated_filename(prefix: &str, date_format: &str) -> String {
    format!("{}_{}.csv", prefix, Local::now().format(date_format))
}
