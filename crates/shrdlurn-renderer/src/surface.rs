use serde::{Deserialize, Serialize};
use shrdlurn_core::{Color, Shape};

use crate::projection::IsoProjection;
use crate::render_data::{RenderFrame, RenderPolygon};

/// Something shapes can be drawn onto, in the order they are added.
pub trait RenderSurface {
    /// Discards everything added so far.
    fn clear(&mut self);
    fn add(&mut self, shape: Shape, color: Color);
}

/// A shape together with the colour it was added with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneItem {
    pub shape: Shape,
    pub color: Color,
}

/// In-memory surface that records shapes in draw order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    items: Vec<SceneItem>,
}

impl Scene {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flattens the scene into screen-space polygons, faces of each shape back to front.
    pub fn project(&self, projection: &IsoProjection) -> RenderFrame {
        let mut frame = RenderFrame::empty(projection.canvas_width, projection.canvas_height);
        for item in &self.items {
            for face in item.shape.ordered_faces() {
                let vertices = face
                    .points
                    .iter()
                    .flat_map(|p| {
                        let (x, y) = projection.project(p);
                        [x, y]
                    })
                    .collect();
                frame.polygons.push(RenderPolygon {
                    vertices,
                    color: item.color.to_f32_array(),
                });
            }
        }
        frame
    }
}

impl RenderSurface for Scene {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn add(&mut self, shape: Shape, color: Color) {
        self.items.push(SceneItem { shape, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shrdlurn_core::Point3;

    #[test]
    fn test_scene_records_in_order_and_clears() {
        let mut scene = Scene::new();
        let cube = Shape::prism(Point3::new(0.0, 0.0, 0.0), 1.0, 1.0, 1.0);
        scene.add(cube.clone(), Color::rgb(1, 2, 3));
        scene.add(cube, Color::rgb(4, 5, 6));
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.items()[1].color, Color::rgb(4, 5, 6));

        scene.clear();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_project_emits_one_polygon_per_face() {
        let mut scene = Scene::new();
        scene.add(
            Shape::prism(Point3::new(0.0, 0.0, 0.0), 1.0, 1.0, 1.0),
            Color::rgba(255, 0, 0, 0.5),
        );
        let frame = scene.project(&IsoProjection::new(400.0, 300.0));
        assert_eq!(frame.polygons.len(), 6);
        assert!(frame.polygons.iter().all(|p| p.vertices.len() == 8));
        assert_eq!(frame.polygons[0].color, [1.0, 0.0, 0.0, 0.5]);
    }
}
