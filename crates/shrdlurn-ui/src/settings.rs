use serde::{Deserialize, Serialize};

use crate::reaction::ReactionGlyphs;
use crate::target::ElementIds;

/// Page-level settings shared by the reflectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Name the assistant uses for itself in dialog text.
    pub assistant_name: String,
    pub glyphs: ReactionGlyphs,
    pub elements: ElementIds,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            assistant_name: "SHRDLURN".to_string(),
            glyphs: ReactionGlyphs::default(),
            elements: ElementIds::default(),
        }
    }
}
