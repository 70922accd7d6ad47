use thiserror::Error;

/// Fatal failures with a fixed shape. Everything else flows through
/// `anyhow` with context at the call site.
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("sheet {sheet} has {found} columns, expected at least {expected}")]
    MissingColumns {
        sheet: String,
        found: usize,
        expected: usize,
    },

    #[error("blob {name} already exists; pass --overwrite-blobs to replace it")]
    BlobConflict { name: String },

    #[error("upload of blob {name} failed with HTTP status {status}")]
    UploadFailed { name: String, status: u16 },
}
