use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Point3;
use crate::palette::Color;

/// Fixed layout constants shared by the main board and the target preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of cells along each side of the square board.
    pub width: u32,
    /// Edge length of a block in world units.
    pub basic_unit: f64,
    /// Negative inset ratio; shrinks the spacing between cells to leave gutters.
    pub border_width: f64,
    /// Height of a board tile.
    pub base_height: f64,
    /// Rotation about the vertical axis through the board centre, in radians.
    pub rotation: f64,
    /// Re-centring offset, as a multiple of `basic_unit`.
    pub translate_factor: f64,
    pub main_scale: f64,
    pub target_scale: f64,
    pub tile_color: Color,
    /// Opacity of provisional (`_new`) blocks.
    pub new_block_alpha: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 12,
            basic_unit: 0.8,
            border_width: -0.15,
            base_height: 0.1,
            rotation: PI / 12.0,
            translate_factor: -0.5,
            main_scale: 1.0,
            target_scale: 0.5,
            tile_color: Color::rgb(120, 120, 120),
            new_block_alpha: 0.5,
        }
    }
}

impl BoardConfig {
    /// The point the board is rotated about. It is not affected by the surface scale.
    pub fn center_point(&self) -> Point3 {
        let half = self.width as f64 / 2.0;
        Point3::new(half, half, half)
    }

    /// Per-axis offset applied after rotation for a surface drawn at `scale`.
    pub fn translate_by(&self, scale: f64) -> f64 {
        self.translate_factor * self.basic_unit * scale
    }

    /// Position of cell `index` along one axis, before scaling.
    pub fn inset(&self, index: f64) -> f64 {
        index + self.border_width * index
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        for (field, value) in [
            ("basic_unit", self.basic_unit),
            ("main_scale", self.main_scale),
            ("target_scale", self.target_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidScalar { field, value });
            }
        }
        for (field, value) in [
            ("border_width", self.border_width),
            ("base_height", self.base_height),
            ("rotation", self.rotation),
            ("translate_factor", self.translate_factor),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.new_block_alpha) {
            return Err(ConfigError::InvalidAlpha(self.new_block_alpha));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let cfg = BoardConfig::default();
        assert!(cfg.validate().is_ok());
        let c = cfg.center_point();
        assert!((c.x - 6.0).abs() < 1e-10);
        assert!((c.z - 6.0).abs() < 1e-10);
        assert!((cfg.translate_by(1.0) + 0.4).abs() < 1e-10);
        assert!((cfg.translate_by(0.5) + 0.2).abs() < 1e-10);
        assert!((cfg.inset(10.0) - 8.5).abs() < 1e-10);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cfg = BoardConfig {
            width: 0,
            ..BoardConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroWidth));

        let cfg = BoardConfig {
            target_scale: 0.0,
            ..BoardConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidScalar { field: "target_scale", .. })
        ));

        let cfg = BoardConfig {
            rotation: f64::INFINITY,
            ..BoardConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite { field: "rotation", .. }));
        assert_eq!(err.to_string(), "rotation must be a finite number, got inf");

        // negative inset and offset are normal
        let cfg = BoardConfig {
            border_width: -0.3,
            translate_factor: -2.0,
            ..BoardConfig::default()
        };
        assert!(cfg.validate().is_ok());

        let cfg = BoardConfig {
            new_block_alpha: 1.5,
            ..BoardConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidAlpha(1.5)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: BoardConfig = serde_json::from_str(r#"{"width": 8}"#).unwrap();
        assert_eq!(cfg.width, 8);
        assert!((cfg.basic_unit - 0.8).abs() < 1e-10);
        assert!((cfg.rotation - PI / 12.0).abs() < 1e-10);
    }
}
