use std::io;
use std::path::PathBuf;

use shrdlurn_core::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("coverage span {index} is invalid: {message}")]
    InvalidCoverage { index: usize, message: String },
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }
}
