use crate::error::UiError;
use crate::target::UiTarget;

/// Class that hides an element.
pub const HIDDEN: &str = "hidden";

/// A child element to be created under a target (one history entry, for example).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSpec {
    pub html: String,
    pub attributes: Vec<(String, String)>,
    pub classes: Vec<String>,
}

impl ElementSpec {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push((name.to_string(), value.into()));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Writable handles for every `UiTarget`.
///
/// Single-element targets must exist, otherwise `UiError::MissingTarget` is returned.
/// Group targets (the step counters) apply the operation to every matching element, which
/// may be none.
pub trait ViewBinding {
    fn set_html(&mut self, target: UiTarget, html: &str) -> Result<(), UiError>;
    fn add_class(&mut self, target: UiTarget, class: &str) -> Result<(), UiError>;
    fn remove_class(&mut self, target: UiTarget, class: &str) -> Result<(), UiError>;
    fn focus(&mut self, target: UiTarget) -> Result<(), UiError>;

    /// Replaces all children of `target` with freshly created elements.
    fn replace_children(&mut self, target: UiTarget, children: &[ElementSpec])
        -> Result<(), UiError>;

    /// Reads attribute `name` of the `index`-th child of `target`.
    fn child_attribute(
        &self,
        target: UiTarget,
        index: usize,
        name: &str,
    ) -> Result<Option<String>, UiError>;

    fn add_child_class(&mut self, target: UiTarget, index: usize, class: &str)
        -> Result<(), UiError>;

    fn hide(&mut self, target: UiTarget) -> Result<(), UiError> {
        self.add_class(target, HIDDEN)
    }

    fn show(&mut self, target: UiTarget) -> Result<(), UiError> {
        self.remove_class(target, HIDDEN)
    }
}
