//! Browser host over `web-sys`

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom::{Dom, ElementSpec};
use crate::error::DomError;
use crate::Result;

/// host that creates real DOM elements in a `web_sys::Document`
#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    /// use the document of the global window
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(DomError::NoDocument)?;
        Ok(Self { document })
    }

    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl Dom for WebDom {
    type Node = Element;

    fn create_element(&self, spec: ElementSpec<'_>) -> Result<Element> {
        let element = self
            .document
            .create_element(spec.tag)
            .map_err(|e| DomError::CreateElement {
                tag: spec.tag.to_string(),
                message: js_message(e),
            })?;

        if let Some(id) = spec.id {
            element.set_id(id);
        }
        if let Some(text) = spec.text {
            // text node, never parsed as html
            element.set_text_content(Some(text));
        }

        Ok(element)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<()> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| DomError::Append(js_message(e)))
    }

    fn clear_children(&self, parent: &Element) -> Result<()> {
        parent.set_inner_html("");
        Ok(())
    }
}
