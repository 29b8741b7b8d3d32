use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by an [`EditorHost`](crate::host::EditorHost) or
/// [`TextEditor`](crate::host::TextEditor) implementation.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("The editor rejected the edit: {0}")]
    EditRejected(String),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
