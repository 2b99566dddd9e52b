//! `ViewBinding` over the browser document.

use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::error::UiError;
use crate::target::{ElementIds, UiTarget};
use crate::view::{ElementSpec, ViewBinding};

fn dom_error(err: JsValue) -> UiError {
    UiError::Dom(format!("{err:?}"))
}

pub struct DomView {
    document: Document,
    ids: ElementIds,
}

impl DomView {
    /// Binds to the document of the global window.
    pub fn new(ids: ElementIds) -> Result<Self, UiError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| UiError::Dom("no global document".to_string()))?;
        Ok(Self::with_document(document, ids))
    }

    pub fn with_document(document: Document, ids: ElementIds) -> Self {
        Self { document, ids }
    }

    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    fn single(&self, target: UiTarget) -> Result<Element, UiError> {
        self.document
            .get_element_by_id(self.ids.name_of(target))
            .ok_or_else(|| UiError::MissingTarget {
                target,
                selector: self.ids.selector(target).to_string(),
            })
    }

    /// Every element the target resolves to: all members of a class group, or the single
    /// element with the target's id.
    fn elements(&self, target: UiTarget) -> Result<Vec<Element>, UiError> {
        if !target.is_group() {
            return Ok(vec![self.single(target)?]);
        }
        let collection = self
            .document
            .get_elements_by_class_name(self.ids.name_of(target));
        Ok((0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect())
    }

    fn child(&self, target: UiTarget, index: usize) -> Result<Element, UiError> {
        let children = self.single(target)?.children();
        u32::try_from(index)
            .ok()
            .and_then(|i| children.item(i))
            .ok_or(UiError::ChildOutOfRange { target, index })
    }

    fn create(&self, spec: &ElementSpec) -> Result<Element, UiError> {
        let el = self.document.create_element("div").map_err(dom_error)?;
        el.set_inner_html(&spec.html);
        for (name, value) in &spec.attributes {
            el.set_attribute(name, value).map_err(dom_error)?;
        }
        for class in &spec.classes {
            el.class_list().add_1(class).map_err(dom_error)?;
        }
        Ok(el)
    }
}

impl ViewBinding for DomView {
    fn set_html(&mut self, target: UiTarget, html: &str) -> Result<(), UiError> {
        for el in self.elements(target)? {
            el.set_inner_html(html);
        }
        Ok(())
    }

    fn add_class(&mut self, target: UiTarget, class: &str) -> Result<(), UiError> {
        for el in self.elements(target)? {
            el.class_list().add_1(class).map_err(dom_error)?;
        }
        Ok(())
    }

    fn remove_class(&mut self, target: UiTarget, class: &str) -> Result<(), UiError> {
        for el in self.elements(target)? {
            el.class_list().remove_1(class).map_err(dom_error)?;
        }
        Ok(())
    }

    fn focus(&mut self, target: UiTarget) -> Result<(), UiError> {
        let el = self.single(target)?;
        let html = el
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| UiError::Dom(format!("{target} is not focusable")))?;
        html.focus().map_err(dom_error)
    }

    fn replace_children(
        &mut self,
        target: UiTarget,
        children: &[ElementSpec],
    ) -> Result<(), UiError> {
        let parent = self.single(target)?;
        parent.set_inner_html("");
        for spec in children {
            let child = self.create(spec)?;
            parent.append_child(&child).map_err(dom_error)?;
        }
        Ok(())
    }

    fn child_attribute(
        &self,
        target: UiTarget,
        index: usize,
        name: &str,
    ) -> Result<Option<String>, UiError> {
        Ok(self.child(target, index)?.get_attribute(name))
    }

    fn add_child_class(
        &mut self,
        target: UiTarget,
        index: usize,
        class: &str,
    ) -> Result<(), UiError> {
        self.child(target, index)?
            .class_list()
            .add_1(class)
            .map_err(dom_error)
    }
}
