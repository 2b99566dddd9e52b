use shrdlurn_core::{sort_blocks, Block, BoardConfig, Color, Palette, Point3, Shape};

use crate::error::RenderError;
use crate::surface::RenderSurface;

/// The cuboid for `block` on a surface drawn at `scale`.
pub fn block_shape(config: &BoardConfig, block: &Block, scale: f64) -> Shape {
    let translate_by = config.translate_by(scale);
    let z = block.z as f64;
    Shape::prism(
        Point3::new(
            config.inset(block.x as f64) * scale,
            config.inset(block.y as f64) * scale,
            (z + config.base_height + config.border_width * z) * scale,
        ),
        config.basic_unit * scale,
        config.basic_unit * scale,
        config.basic_unit * scale,
    )
    .rotate_z(&config.center_point(), config.rotation)
    .translate(translate_by, translate_by, translate_by)
}

/// Palette colour for `block`, translucent when it is a provisional placement.
pub fn block_color(
    config: &BoardConfig,
    palette: &Palette,
    block: &Block,
) -> Result<Color, RenderError> {
    let color = palette
        .get(block.color)
        .ok_or(RenderError::UnknownColor { index: block.color })?;
    if block.is_new() {
        Ok(color.with_alpha(config.new_block_alpha))
    } else {
        Ok(color)
    }
}

/// Fails on the first block whose colour the palette does not know.
pub fn check_colors(palette: &Palette, blocks: &[Block]) -> Result<(), RenderError> {
    match blocks.iter().find(|b| !palette.contains(b.color)) {
        Some(block) => Err(RenderError::UnknownColor { index: block.color }),
        None => Ok(()),
    }
}

/// Adds every block in draw order. Colours are checked up front, so on error nothing has
/// been added. Returns the number of blocks painted.
pub fn paint_blocks<S: RenderSurface>(
    surface: &mut S,
    config: &BoardConfig,
    palette: &Palette,
    blocks: &[Block],
    scale: f64,
) -> Result<usize, RenderError> {
    check_colors(palette, blocks)?;
    let sorted = sort_blocks(blocks);
    for block in &sorted {
        let color = block_color(config, palette, block)?;
        surface.add(block_shape(config, block, scale), color);
    }
    log::debug!("Painted {} blocks at scale {scale}", sorted.len());
    Ok(sorted.len())
}
