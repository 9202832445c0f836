use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("catalog root must be a JSON object, found {0}")]
    InvalidRoot(&'static str),
}
