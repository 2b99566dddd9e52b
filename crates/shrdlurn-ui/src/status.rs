//! Status line, step counters and the skip counter.

use crate::error::UiError;
use crate::reaction::{update_reaction, ReactionGlyphs};
use crate::target::UiTarget;
use crate::view::ViewBinding;

/// Shows `msg` (markup supplied by the game) and the pending command, then updates the
/// reaction for `prob`.
pub fn status<V: ViewBinding + ?Sized>(
    view: &mut V,
    glyphs: &ReactionGlyphs,
    msg: &str,
    query: &str,
    prob: f64,
) -> Result<(), UiError> {
    view.set_html(UiTarget::Status, msg)?;

    let current = if query.is_empty() {
        "<b>enter a command</b>".to_string()
    } else {
        format!("<b>↵: {}</b>", html_escape::encode_text(query))
    };
    view.set_html(UiTarget::CurrentCommand, &current)?;

    update_reaction(view, glyphs, prob)?;
    Ok(())
}

pub fn set_steps<V: ViewBinding + ?Sized>(
    view: &mut V,
    possible: u32,
    max: u32,
) -> Result<(), UiError> {
    view.set_html(UiTarget::PossibleSteps, &possible.to_string())?;
    view.set_html(UiTarget::MaxSteps, &max.to_string())
}

pub fn update_steps<V: ViewBinding + ?Sized>(view: &mut V, current: u32) -> Result<(), UiError> {
    view.set_html(UiTarget::CurrentSteps, &current.to_string())
}

/// Shows the remaining skips, or hides the skip button once none are left. A later
/// non-zero count does not bring the button back.
pub fn set_skips<V: ViewBinding + ?Sized>(view: &mut V, skips_left: u32) -> Result<(), UiError> {
    if skips_left != 0 {
        view.set_html(UiTarget::SkipsLeft, &skips_left.to_string())
    } else {
        view.hide(UiTarget::SkipButton)
    }
}
