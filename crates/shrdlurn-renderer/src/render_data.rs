use serde::{Deserialize, Serialize};

/// A flat-coloured polygon in canvas pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderPolygon {
    /// Flat array of vertices: [x0, y0, x1, y1, ...]
    pub vertices: Vec<f64>,
    /// RGBA, each channel in [0, 1].
    pub color: [f32; 4],
}

/// Everything a frontend canvas needs to draw one board, polygons in paint order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub polygons: Vec<RenderPolygon>,
}

impl RenderFrame {
    pub fn empty(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
            polygons: Vec::new(),
        }
    }

    /// [min_x, min_y, max_x, max_y] over all vertices.
    pub fn bounds(&self) -> Option<[f64; 4]> {
        let mut points = self
            .polygons
            .iter()
            .flat_map(|p| p.vertices.chunks_exact(2).map(|v| (v[0], v[1])));
        let (x, y) = points.next()?;
        Some(points.fold([x, y, x, y], |[min_x, min_y, max_x, max_y], (x, y)| {
            [min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y)]
        }))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let mut frame = RenderFrame::empty(10.0, 10.0);
        assert!(frame.bounds().is_none());
        frame.polygons.push(RenderPolygon {
            vertices: vec![1.0, 2.0, 5.0, -1.0, 3.0, 4.0],
            color: [0.0; 4],
        });
        assert_eq!(frame.bounds(), Some([1.0, -1.0, 5.0, 4.0]));
    }
}
