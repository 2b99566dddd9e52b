use thiserror::Error;

use crate::target::UiTarget;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    #[error("missing UI target {target} (looked up as {selector})")]
    MissingTarget { target: UiTarget, selector: String },

    #[error("{target} has no entry at index {index}")]
    ChildOutOfRange { target: UiTarget, index: usize },

    #[error("DOM operation failed: {0}")]
    Dom(String),
}
