use thiserror::Error;

/// Problems found while validating renderer configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("board width must be at least one cell")]
    ZeroWidth,

    #[error("{field} must be a finite positive number, got {value}")]
    InvalidScalar { field: &'static str, value: f64 },

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("alpha for new blocks must lie in [0, 1], got {0}")]
    InvalidAlpha(f64),

    #[error("palette has no entry for colour index {index}")]
    MissingColor { index: u32 },
}
