use shrdlurn_io::LoadError;
use shrdlurn_renderer::RenderError;
use shrdlurn_ui::UiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Ui(#[from] UiError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to serialise frame: {0}")]
    Json(#[from] serde_json::Error),

    #[error("history entry {index} does not refer to a known step")]
    UnknownStep { index: usize },

    #[error("step {step} has no saved board state")]
    MissingState { step: u32 },
}
