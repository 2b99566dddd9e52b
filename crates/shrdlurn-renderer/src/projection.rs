use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use shrdlurn_core::Point3;

use crate::surface::Scene;

/// Parallel projection from board space onto a canvas, with the x and y axes drawn at
/// `angle` above the horizontal and `z` pointing straight up the screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IsoProjection {
    /// Screen position of the board-space origin, in pixels.
    pub origin_x: f64,
    pub origin_y: f64,
    /// Pixels per board unit.
    pub scale: f64,
    pub angle: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl IsoProjection {
    /// Origin at the bottom centre of the canvas, 70 pixels per unit.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            origin_x: canvas_width / 2.0,
            origin_y: canvas_height * 0.9,
            scale: 70.0,
            angle: PI / 6.0,
            canvas_width,
            canvas_height,
        }
    }

    pub fn project(&self, p: &Point3) -> (f64, f64) {
        let (sin_a, cos_a) = self.angle.sin_cos();
        let (sin_b, cos_b) = (PI - self.angle).sin_cos();
        let x = self.origin_x + p.x * self.scale * cos_a + p.y * self.scale * cos_b;
        let y = self.origin_y
            - p.x * self.scale * sin_a
            - p.y * self.scale * sin_b
            - p.z * self.scale;
        (x, y)
    }

    /// Rescales and re-centres so every vertex of `scene` fits the canvas with a 10% margin.
    /// Leaves the projection alone for an empty or degenerate scene.
    pub fn fit_scene(&mut self, scene: &Scene) {
        let unit = Self {
            origin_x: 0.0,
            origin_y: 0.0,
            scale: 1.0,
            ..*self
        };
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        for p in scene.items().iter().flat_map(|item| item.shape.points()) {
            let (x, y) = unit.project(p);
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((min_x, min_y, max_x, max_y)) => {
                    (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                }
            });
        }
        let Some((min_x, min_y, max_x, max_y)) = bounds else {
            return;
        };
        let width = max_x - min_x;
        let height = max_y - min_y;
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let scale_x = self.canvas_width / width * 0.9;
        let scale_y = self.canvas_height / height * 0.9;
        self.scale = scale_x.min(scale_y);
        self.origin_x = self.canvas_width / 2.0 - (min_x + max_x) / 2.0 * self.scale;
        self.origin_y = self.canvas_height / 2.0 - (min_y + max_y) / 2.0 * self.scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shrdlurn_core::{Color, Shape};

    use crate::surface::RenderSurface;

    #[test]
    fn test_origin_and_axes() {
        let proj = IsoProjection::new(400.0, 300.0);
        let (x, y) = proj.project(&Point3::new(0.0, 0.0, 0.0));
        assert!((x - 200.0).abs() < 1e-10);
        assert!((y - 270.0).abs() < 1e-10);

        // +z goes straight up the screen.
        let (x, y) = proj.project(&Point3::new(0.0, 0.0, 1.0));
        assert!((x - 200.0).abs() < 1e-10);
        assert!((y - 200.0).abs() < 1e-10);

        // +x goes right and up, +y goes left and up, symmetrically.
        let (xa, ya) = proj.project(&Point3::new(1.0, 0.0, 0.0));
        let (xb, yb) = proj.project(&Point3::new(0.0, 1.0, 0.0));
        assert!((xa - 200.0 + (xb - 200.0)).abs() < 1e-10);
        assert!((ya - yb).abs() < 1e-10);
        assert!(ya < 270.0);
    }

    #[test]
    fn test_fit_scene_keeps_points_on_canvas() {
        let mut scene = Scene::new();
        scene.add(
            Shape::prism(Point3::new(0.0, 0.0, 0.0), 12.0, 12.0, 3.0),
            Color::rgb(0, 0, 0),
        );
        let mut proj = IsoProjection::new(200.0, 100.0);
        proj.fit_scene(&scene);
        for p in scene.items()[0].shape.points() {
            let (x, y) = proj.project(p);
            assert!((0.0..=200.0).contains(&x), "x out of canvas: {x}");
            assert!((0.0..=100.0).contains(&y), "y out of canvas: {y}");
        }
    }

    #[test]
    fn test_fit_empty_scene_is_noop() {
        let mut proj = IsoProjection::new(200.0, 100.0);
        proj.fit_scene(&Scene::new());
        assert!((proj.scale - 70.0).abs() < 1e-10);
    }
}
