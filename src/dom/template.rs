// ============================================================================
// ELEMENT TEMPLATE - Descripción de un elemento, materializada con render()
// ============================================================================
// La plantilla es solo datos hasta render(): se puede construir y revisar
// sin DOM (tests nativos).
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, create_element, set_attribute, set_text_content};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementTemplate<'a> {
    pub tag: &'a str,
    pub id: Option<&'a str>,
    pub classes: Vec<&'a str>,
    pub attrs: Vec<(&'a str, &'a str)>,
    pub text: Option<&'a str>,
    pub children: Vec<Element>,
}

impl<'a> ElementTemplate<'a> {
    pub fn tag(tag: &'a str) -> Self {
        Self { tag, ..Self::default() }
    }

    pub fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Se acumulan; render() las une con espacios
    pub fn with_class(mut self, class: &'a str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn with_attr(mut self, name: &'a str, value: &'a str) -> Self {
        self.attrs.push((name, value));
        self
    }

    pub fn with_text(mut self, text: &'a str) -> Self {
        self.text = Some(text);
        self
    }

    /// Acepta cualquier iterable (un Option incluido)
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        self.children.extend(children);
        self
    }

    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Crear el elemento real en el document
    pub fn render(self) -> Result<Element, JsValue> {
        let element = create_element(self.tag)?;
        if let Some(id) = self.id {
            set_attribute(&element, "id", id)?;
        }
        if !self.classes.is_empty() {
            element.set_class_name(&self.class_name());
        }
        for (name, value) in &self.attrs {
            set_attribute(&element, name, value)?;
        }
        if let Some(text) = self.text {
            set_text_content(&element, text);
        }
        for child in &self.children {
            append_child(&element, child)?;
        }
        Ok(element)
    }
}
