//! Error type for the adapter layer.
//!
//! The optimizer core never fails; only parsing and I/O at the edges do.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid page list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate page id '{id}'")]
    DuplicatePageId { id: String },

    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
