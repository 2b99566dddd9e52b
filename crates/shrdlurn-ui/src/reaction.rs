use serde::{Deserialize, Serialize};

use crate::error::UiError;
use crate::target::UiTarget;
use crate::view::ViewBinding;

/// Lower bounds of the reaction bins, most confident first. The last one catches
/// everything at or above -1.
pub const REACTION_CUTOFFS: [f64; 7] = [0.5, 0.1, 0.05, 0.01, 0.001, 0.00001, -1.0];

/// How the assistant feels about its last answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// The game reported no answer at all (probability exactly 0).
    NoAnswer,
    /// Index into `REACTION_CUTOFFS`.
    Bin(usize),
}

/// Bins a probability. NaN is read as 0, which falls through to the last bin rather than
/// the no-answer sentinel; anything below -1 also lands in the last bin.
pub fn reaction_for(prob: f64) -> Reaction {
    if prob == 0.0 {
        return Reaction::NoAnswer;
    }
    let prob = if prob.is_nan() { 0.0 } else { prob };
    let bin = REACTION_CUTOFFS
        .iter()
        .position(|&cutoff| prob >= cutoff)
        .unwrap_or(REACTION_CUTOFFS.len() - 1);
    Reaction::Bin(bin)
}

/// Markup written into the reaction element for each bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionGlyphs {
    pub no_answer: String,
    pub bins: [String; 7],
}

impl Default for ReactionGlyphs {
    fn default() -> Self {
        Self {
            no_answer: "🤔".to_string(),
            bins: [
                "😀".to_string(),
                "🙂".to_string(),
                "😐".to_string(),
                "😕".to_string(),
                "😟".to_string(),
                "😧".to_string(),
                "😵".to_string(),
            ],
        }
    }
}

impl ReactionGlyphs {
    pub fn glyph(&self, reaction: Reaction) -> &str {
        match reaction {
            Reaction::NoAnswer => &self.no_answer,
            Reaction::Bin(i) => self
                .bins
                .get(i)
                .or_else(|| self.bins.last())
                .map(String::as_str)
                .unwrap_or_default(),
        }
    }
}

/// Writes the glyph for `prob` into the reaction element.
pub fn update_reaction<V: ViewBinding + ?Sized>(
    view: &mut V,
    glyphs: &ReactionGlyphs,
    prob: f64,
) -> Result<Reaction, UiError> {
    let reaction = reaction_for(prob);
    view.set_html(UiTarget::Reaction, glyphs.glyph(reaction))?;
    Ok(reaction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryView;

    #[test]
    fn test_bins() {
        assert_eq!(reaction_for(0.0), Reaction::NoAnswer);
        assert_eq!(reaction_for(0.6), Reaction::Bin(0));
        assert_eq!(reaction_for(0.5), Reaction::Bin(0));
        assert_eq!(reaction_for(0.2), Reaction::Bin(1));
        assert_eq!(reaction_for(0.07), Reaction::Bin(2));
        assert_eq!(reaction_for(0.02), Reaction::Bin(3));
        assert_eq!(reaction_for(0.002), Reaction::Bin(4));
        assert_eq!(reaction_for(0.00002), Reaction::Bin(5));
        assert_eq!(reaction_for(0.000001), Reaction::Bin(6));
        assert_eq!(reaction_for(-0.5), Reaction::Bin(6));
    }

    #[test]
    fn test_nan_and_far_negative_use_last_bin() {
        assert_eq!(reaction_for(f64::NAN), Reaction::Bin(6));
        assert_eq!(reaction_for(-5.0), Reaction::Bin(6));
    }

    #[test]
    fn test_no_answer_glyph_is_distinct() {
        let glyphs = ReactionGlyphs::default();
        assert!(glyphs.bins.iter().all(|g| *g != glyphs.no_answer));
    }

    #[test]
    fn test_update_reaction_carries_no_state() {
        let glyphs = ReactionGlyphs::default();
        let mut view = MemoryView::with_all_targets();

        update_reaction(&mut view, &glyphs, 0.07).unwrap();
        assert_eq!(view.html(UiTarget::Reaction), Some(glyphs.bins[2].as_str()));

        update_reaction(&mut view, &glyphs, 0.0).unwrap();
        assert_eq!(view.html(UiTarget::Reaction), Some(glyphs.no_answer.as_str()));

        update_reaction(&mut view, &glyphs, 0.6).unwrap();
        assert_eq!(view.html(UiTarget::Reaction), Some(glyphs.bins[0].as_str()));
    }

    #[test]
    fn test_glyphs_from_partial_json() {
        let glyphs: ReactionGlyphs = serde_json::from_str(r#"{"no_answer": "?"}"#).unwrap();
        assert_eq!(glyphs.glyph(Reaction::NoAnswer), "?");
        assert_eq!(glyphs.glyph(Reaction::Bin(0)), "😀");
    }
}
