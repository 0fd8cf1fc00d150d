use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SymtreeError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid ignore pattern: {0}")]
    Pattern(String),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl SymtreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SymtreeError::Io {
            path: path.into(),
            source,
        }
    }
}
