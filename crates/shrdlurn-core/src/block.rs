use serde::{Deserialize, Serialize};

/// Tag carried by a block that has been placed provisionally and is not yet accepted.
pub const NEW_TAG: &str = "_new";

/// A single block on the board, as supplied by the game for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    /// Index into the palette.
    pub color: u32,
    #[serde(default)]
    pub names: Vec<String>,
}

impl Block {
    pub fn new(x: i32, y: i32, z: i32, color: u32) -> Self {
        Self {
            x,
            y,
            z,
            color,
            names: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.names.push(name.to_string());
        self
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Whether the block is a provisional placement (rendered translucent).
    pub fn is_new(&self) -> bool {
        self.has_name(NEW_TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_default_to_empty() {
        let block: Block = serde_json::from_str(r#"{"x":2,"y":4,"z":0,"color":1}"#).unwrap();
        assert_eq!(block, Block::new(2, 4, 0, 1));
        assert!(!block.is_new());
    }

    #[test]
    fn test_new_tag() {
        let block = Block::new(0, 1, 0, 1).with_name("S").with_name(NEW_TAG);
        assert!(block.is_new());
        assert!(block.has_name("S"));
        assert!(!Block::new(0, 1, 0, 1).with_name("A").is_new());
    }
}
