use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    // For host FormStore implementations; the in-memory store never fails.
    #[error("Form storage error: {0}")]
    StorageError(String),

    #[error("Snapshot serialization error: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Shortcut binding error: {0}")]
    ShortcutError(String),

    // For host DownloadSink implementations; the file sink reports IoError.
    #[error("Export delivery error: {0}")]
    ExportError(String),

    // Catch-all for anyhow errors when direct conversion is suitable
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}
