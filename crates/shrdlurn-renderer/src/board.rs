use shrdlurn_core::{BoardConfig, Point3, Shape};

use crate::surface::RenderSurface;

/// The tile for cell `(x, y)` on a surface drawn at `scale`.
pub fn tile_shape(config: &BoardConfig, x: u32, y: u32, scale: f64) -> Shape {
    let translate_by = config.translate_by(scale);
    Shape::prism(
        Point3::new(
            config.inset(x as f64) * scale,
            config.inset(y as f64) * scale,
            0.0,
        ),
        config.basic_unit * scale,
        config.basic_unit * scale,
        config.base_height * scale,
    )
    .rotate_z(&config.center_point(), config.rotation)
    .translate(translate_by, translate_by, translate_by)
}

/// Adds one thin tile per grid cell, far corner first. Returns the number of tiles added.
pub fn build_board<S: RenderSurface>(surface: &mut S, config: &BoardConfig, scale: f64) -> usize {
    let mut count = 0;
    for x in (0..config.width).rev() {
        for y in (0..config.width).rev() {
            surface.add(tile_shape(config, x, y, scale), config.tile_color);
            count += 1;
        }
    }
    log::debug!("Board built: {count} tiles at scale {scale}");
    count
}
