//! Offline rendering of a block list to a projected frame.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use shrdlurn_io::{load_config, read_blocks, AppConfig, LoadError};
use shrdlurn_renderer::{BoardRenderer, IsoProjection, RenderFrame, Scene};

use crate::error::AppError;

/// Which of the two boards to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardChoice {
    #[default]
    Main,
    Target,
}

/// Loads `blocks_path` (and `config_path`, if given), renders the chosen board and projects
/// it onto a `width` x `height` canvas, scaled to fit.
pub fn render_file(
    blocks_path: &Path,
    config_path: Option<&Path>,
    board: BoardChoice,
    width: f64,
    height: f64,
) -> Result<RenderFrame, AppError> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    let file = File::open(blocks_path).map_err(|e| LoadError::io(blocks_path, e))?;
    let blocks = read_blocks(BufReader::new(file))?;
    log::info!("rendering {} blocks from {}", blocks.len(), blocks_path.display());

    let mut renderer = BoardRenderer::new(
        config.board,
        config.palette,
        config.color_count,
        Scene::new(),
        Scene::new(),
    )?;
    let scene = match board {
        BoardChoice::Main => {
            renderer.render_canvas(&blocks)?;
            renderer.main()
        }
        BoardChoice::Target => {
            renderer.render_target(&blocks)?;
            renderer.target()
        }
    };

    let mut projection = IsoProjection::new(width, height);
    projection.fit_scene(scene);
    Ok(scene.project(&projection))
}
