use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PricewatchError {
    #[error("Corrupt history store {path}: {source}")]
    CorruptStore {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write history store {path}: {source}")]
    StoreWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Fatal extraction failure: {0}")]
    FatalExtraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PricewatchError>;
