use shrdlurn_core::ConfigError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("block colour index {index} has no palette entry")]
    UnknownColor { index: u32 },

    #[error("invalid renderer configuration: {0}")]
    Config(#[from] ConfigError),
}
