use std::collections::{BTreeSet, HashMap};

use crate::error::UiError;
use crate::target::{ElementIds, UiTarget};
use crate::view::{ElementSpec, ViewBinding, HIDDEN};

/// State of one element held by a `MemoryView`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub html: String,
    pub classes: BTreeSet<String>,
    pub children: Vec<ElementSpec>,
}

/// A page kept entirely in memory. Targets must be registered before use, exactly as
/// elements must exist in a real document.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    elements: HashMap<UiTarget, Vec<MemoryElement>>,
    focused: Option<UiTarget>,
    ids: ElementIds,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports missing targets using `ids` rather than the default element names.
    pub fn with_ids(mut self, ids: ElementIds) -> Self {
        self.ids = ids;
        self
    }

    /// One element for every target.
    pub fn with_all_targets() -> Self {
        let mut view = Self::new();
        for target in UiTarget::ALL {
            view.register(target);
        }
        view
    }

    pub fn register(&mut self, target: UiTarget) {
        self.register_many(target, 1);
    }

    /// Registers `count` elements for a group target. Single-element targets keep one.
    pub fn register_many(&mut self, target: UiTarget, count: usize) {
        let count = if target.is_group() { count } else { count.min(1) };
        self.elements
            .insert(target, vec![MemoryElement::default(); count]);
    }

    pub fn unregister(&mut self, target: UiTarget) {
        self.elements.remove(&target);
    }

    pub fn element(&self, target: UiTarget) -> Option<&MemoryElement> {
        self.elements.get(&target).and_then(|els| els.first())
    }

    pub fn html(&self, target: UiTarget) -> Option<&str> {
        self.element(target).map(|e| e.html.as_str())
    }

    pub fn html_all(&self, target: UiTarget) -> Vec<&str> {
        self.elements
            .get(&target)
            .map(|els| els.iter().map(|e| e.html.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, target: UiTarget, class: &str) -> bool {
        self.element(target)
            .map(|e| e.classes.contains(class))
            .unwrap_or(false)
    }

    pub fn is_hidden(&self, target: UiTarget) -> bool {
        self.has_class(target, HIDDEN)
    }

    pub fn children(&self, target: UiTarget) -> &[ElementSpec] {
        self.element(target)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn focused(&self) -> Option<UiTarget> {
        self.focused
    }

    fn all_mut(&mut self, target: UiTarget) -> Result<&mut Vec<MemoryElement>, UiError> {
        match self.elements.get_mut(&target) {
            Some(els) if !els.is_empty() || target.is_group() => Ok(els),
            _ => Err(missing(&self.ids, target)),
        }
    }

    fn single(&self, target: UiTarget) -> Result<&MemoryElement, UiError> {
        self.element(target).ok_or_else(|| missing(&self.ids, target))
    }

    fn single_mut(&mut self, target: UiTarget) -> Result<&mut MemoryElement, UiError> {
        self.elements
            .get_mut(&target)
            .and_then(|els| els.first_mut())
            .ok_or_else(|| missing(&self.ids, target))
    }
}

fn missing(ids: &ElementIds, target: UiTarget) -> UiError {
    UiError::MissingTarget {
        target,
        selector: ids.selector(target).to_string(),
    }
}

impl ViewBinding for MemoryView {
    fn set_html(&mut self, target: UiTarget, html: &str) -> Result<(), UiError> {
        for el in self.all_mut(target)? {
            el.html = html.to_string();
            el.children.clear();
        }
        Ok(())
    }

    fn add_class(&mut self, target: UiTarget, class: &str) -> Result<(), UiError> {
        for el in self.all_mut(target)? {
            el.classes.insert(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&mut self, target: UiTarget, class: &str) -> Result<(), UiError> {
        for el in self.all_mut(target)? {
            el.classes.remove(class);
        }
        Ok(())
    }

    fn focus(&mut self, target: UiTarget) -> Result<(), UiError> {
        self.single(target)?;
        self.focused = Some(target);
        Ok(())
    }

    fn replace_children(
        &mut self,
        target: UiTarget,
        children: &[ElementSpec],
    ) -> Result<(), UiError> {
        let el = self.single_mut(target)?;
        el.html.clear();
        el.children = children.to_vec();
        Ok(())
    }

    fn child_attribute(
        &self,
        target: UiTarget,
        index: usize,
        name: &str,
    ) -> Result<Option<String>, UiError> {
        let child = self
            .single(target)?
            .children
            .get(index)
            .ok_or(UiError::ChildOutOfRange { target, index })?;
        Ok(child.attribute(name).map(str::to_string))
    }

    fn add_child_class(
        &mut self,
        target: UiTarget,
        index: usize,
        class: &str,
    ) -> Result<(), UiError> {
        let child = self
            .single_mut(target)?
            .children
            .get_mut(index)
            .ok_or(UiError::ChildOutOfRange { target, index })?;
        if !child.has_class(class) {
            child.classes.push(class.to_string());
        }
        Ok(())
    }
}
