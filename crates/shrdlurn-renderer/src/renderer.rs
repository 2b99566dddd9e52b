use shrdlurn_core::{Block, BoardConfig, Palette};

use crate::board::build_board;
use crate::error::RenderError;
use crate::painter::{check_colors, paint_blocks};
use crate::surface::RenderSurface;

/// Owns the main board surface and the half-scale target preview surface.
#[derive(Debug)]
pub struct BoardRenderer<S> {
    config: BoardConfig,
    palette: Palette,
    main: S,
    target: S,
}

impl<S: RenderSurface> BoardRenderer<S> {
    /// Validates the configuration, checks the palette covers colours `0..color_count`, and
    /// draws an empty board on both surfaces.
    pub fn new(
        config: BoardConfig,
        palette: Palette,
        color_count: u32,
        main: S,
        target: S,
    ) -> Result<Self, RenderError> {
        config.validate()?;
        palette.validate_covers(color_count)?;
        let mut renderer = Self {
            config,
            palette,
            main,
            target,
        };
        renderer.render_canvas(&[])?;
        renderer.render_target(&[])?;
        Ok(renderer)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn main(&self) -> &S {
        &self.main
    }

    pub fn target(&self) -> &S {
        &self.target
    }

    /// Redraws the main board with `blocks`. On error the previous frame is kept.
    pub fn render_canvas(&mut self, blocks: &[Block]) -> Result<(), RenderError> {
        let scale = self.config.main_scale;
        Self::render(&mut self.main, &self.config, &self.palette, blocks, scale)
    }

    /// Redraws the target preview with `blocks`. On error the previous frame is kept.
    pub fn render_target(&mut self, blocks: &[Block]) -> Result<(), RenderError> {
        let scale = self.config.target_scale;
        Self::render(&mut self.target, &self.config, &self.palette, blocks, scale)
    }

    fn render(
        surface: &mut S,
        config: &BoardConfig,
        palette: &Palette,
        blocks: &[Block],
        scale: f64,
    ) -> Result<(), RenderError> {
        check_colors(palette, blocks)?;
        surface.clear();
        build_board(surface, config, scale);
        paint_blocks(surface, config, palette, blocks, scale)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shrdlurn_core::ConfigError;

    use crate::surface::Scene;

    fn renderer() -> BoardRenderer<Scene> {
        BoardRenderer::new(
            BoardConfig::default(),
            Palette::default(),
            6,
            Scene::new(),
            Scene::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_construction_draws_empty_boards() {
        let r = renderer();
        assert_eq!(r.main().len(), 144);
        assert_eq!(r.target().len(), 144);
    }

    #[test]
    fn test_palette_gap_fails_at_construction() {
        let err = BoardRenderer::new(
            BoardConfig::default(),
            Palette::default(),
            7,
            Scene::new(),
            Scene::new(),
        )
        .unwrap_err();
        assert_eq!(err, RenderError::Config(ConfigError::MissingColor { index: 6 }));
    }

    #[test]
    fn test_rerender_replaces_previous_frame() {
        let mut r = renderer();
        r.render_canvas(&[Block::new(0, 0, 0, 1), Block::new(0, 0, 1, 1)])
            .unwrap();
        assert_eq!(r.main().len(), 146);
        r.render_canvas(&[Block::new(5, 5, 0, 3)]).unwrap();
        assert_eq!(r.main().len(), 145);
        assert_eq!(r.target().len(), 144);
    }

    #[test]
    fn test_target_is_drawn_at_half_scale() {
        let mut r = renderer();
        let block = Block::new(4, 4, 0, 0);
        r.render_canvas(std::slice::from_ref(&block)).unwrap();
        r.render_target(std::slice::from_ref(&block)).unwrap();

        let extent = |s: &Scene| {
            let zs: Vec<f64> = s.items()[144].shape.points().map(|p| p.z).collect();
            zs.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
                - zs.iter().cloned().fold(f64::INFINITY, f64::min)
        };
        assert!((extent(r.main()) - 0.8).abs() < 1e-10);
        assert!((extent(r.target()) - 0.4).abs() < 1e-10);
    }

    #[test]
    fn test_bad_block_keeps_previous_frame() {
        let mut r = renderer();
        r.render_canvas(&[Block::new(0, 0, 0, 1)]).unwrap();
        let err = r.render_canvas(&[Block::new(0, 0, 0, 99)]).unwrap_err();
        assert_eq!(err, RenderError::UnknownColor { index: 99 });
        assert_eq!(r.main().len(), 145);
    }
}
