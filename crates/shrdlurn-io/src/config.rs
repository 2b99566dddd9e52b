use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shrdlurn_core::{BoardConfig, Palette};
use shrdlurn_ui::{ElementIds, ReactionGlyphs, UiSettings};

use crate::error::LoadError;

/// Everything the page needs to set up the renderer and the reflectors. Every field has a
/// default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub palette: Palette,
    /// Number of block colours the game uses; the palette must cover `0..color_count`.
    pub color_count: u32,
    pub elements: ElementIds,
    pub glyphs: ReactionGlyphs,
    pub assistant_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let ui = UiSettings::default();
        Self {
            board: BoardConfig::default(),
            palette: Palette::blocks(),
            color_count: 6,
            elements: ui.elements,
            glyphs: ui.glyphs,
            assistant_name: ui.assistant_name,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), LoadError> {
        self.board.validate()?;
        self.palette.validate_covers(self.color_count)?;
        Ok(())
    }

    pub fn ui_settings(&self) -> UiSettings {
        UiSettings {
            assistant_name: self.assistant_name.clone(),
            glyphs: self.glyphs.clone(),
            elements: self.elements.clone(),
        }
    }
}

/// Reads and validates a configuration file.
pub fn load_config(path: &Path) -> Result<AppConfig, LoadError> {
    let json = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let config = AppConfig::from_json(&json)?;
    log::info!(
        "loaded config from {}: {} colours, board width {}",
        path.display(),
        config.color_count,
        config.board.width
    );
    Ok(config)
}

pub fn save_config(path: &Path, config: &AppConfig) -> Result<(), LoadError> {
    let json = config.to_json()?;
    fs::write(path, json).map_err(|e| LoadError::io(path, e))?;
    log::info!("saved config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shrdlurn_core::ConfigError;

    #[test]
    fn test_empty_object_is_default() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config.color_count, 6);
        assert_eq!(config.palette, Palette::blocks());
        assert_eq!(config.ui_settings(), UiSettings::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(
            r#"{"assistant_name": "Blocky", "board": {"target_scale": 0.25}}"#,
        )
        .unwrap();
        assert_eq!(config.assistant_name, "Blocky");
        assert!((config.board.target_scale - 0.25).abs() < 1e-10);
        assert_eq!(config.board.width, 12);
    }

    #[test]
    fn test_palette_gap_rejected() {
        let err = AppConfig::from_json(r#"{"color_count": 7}"#).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Config(ConfigError::MissingColor { index: 6 })
        ));
    }

    #[test]
    fn test_custom_palette() {
        let config =
            AppConfig::from_json(r#"{"palette": {"0": [1, 2, 3]}, "color_count": 1}"#).unwrap();
        assert_eq!(config.palette.len(), 1);
        assert!(config.palette.contains(0));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "shrdlurn-config-{}.json",
            std::process::id()
        ));
        let mut config = AppConfig::default();
        config.assistant_name = "Blocky".to_string();

        save_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.assistant_name, "Blocky");
        assert_eq!(loaded.palette, config.palette);
        assert_eq!(loaded.elements, config.elements);
        assert!((loaded.board.rotation - config.board.rotation).abs() < 1e-10);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/shrdlurn.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
