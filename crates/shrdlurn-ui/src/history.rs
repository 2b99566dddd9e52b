use shrdlurn_core::HistoryEntry;

use crate::error::UiError;
use crate::target::UiTarget;
use crate::view::{ElementSpec, ViewBinding};

pub const STEP_ATTRIBUTE: &str = "data-stepN";
pub const TYPE_ATTRIBUTE: &str = "data-type";

/// Element created for one history entry.
pub fn history_element(entry: &HistoryEntry) -> ElementSpec {
    let query = html_escape::encode_text(&entry.query);
    let html = if entry.is_accepted() {
        format!("{}. {}", entry.step_n, query)
    } else {
        query.into_owned()
    };
    ElementSpec::new(html)
        .with_attribute(TYPE_ATTRIBUTE, entry.kind.as_str())
        .with_attribute(STEP_ATTRIBUTE, entry.step_n.to_string())
}

/// Replaces the history list, newest entry first.
pub fn render_history<V: ViewBinding + ?Sized>(
    view: &mut V,
    history: &[HistoryEntry],
) -> Result<(), UiError> {
    let children: Vec<ElementSpec> = history.iter().rev().map(history_element).collect();
    view.replace_children(UiTarget::History, &children)
}
