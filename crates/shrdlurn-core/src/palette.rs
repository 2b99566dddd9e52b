use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An RGB colour with an opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32,
        ]
    }
}

/// Block colours keyed by the colour index the game sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: BTreeMap<u32, [u8; 3]>,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// Colours used by the block world: red, orange, yellow, green, blue, brown.
    pub fn blocks() -> Self {
        let mut palette = Self::new();
        palette.insert(0, [231, 76, 60]);
        palette.insert(1, [230, 126, 34]);
        palette.insert(2, [241, 196, 15]);
        palette.insert(3, [46, 204, 113]);
        palette.insert(4, [52, 152, 219]);
        palette.insert(5, [160, 110, 70]);
        palette
    }

    pub fn insert(&mut self, index: u32, rgb: [u8; 3]) {
        self.colors.insert(index, rgb);
    }

    /// Opaque colour for `index`, if the palette has one.
    pub fn get(&self, index: u32) -> Option<Color> {
        self.colors
            .get(&index)
            .map(|&[r, g, b]| Color::rgb(r, g, b))
    }

    pub fn contains(&self, index: u32) -> bool {
        self.colors.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Checks that every colour index in `0..count` has an entry.
    pub fn validate_covers(&self, count: u32) -> Result<(), ConfigError> {
        match (0..count).find(|i| !self.contains(*i)) {
            Some(index) => Err(ConfigError::MissingColor { index }),
            None => Ok(()),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::blocks()
    }
}
