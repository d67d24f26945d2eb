//! Browser implementations of the document seam.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::document::{ClassList, Document, ReadyCallback, ReadyState};
use crate::error::{Result, StencilError};
use crate::Html;

/// [`Document`] over the live `web_sys::Document`
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    pub fn new(document: web_sys::Document) -> Self {
        BrowserDocument { document }
    }

    /// The document of the global window
    pub fn current() -> std::result::Result<Self, JsValue> {
        let window = web_sys::window().ok_or("No global window object")?;
        let document = window.document().ok_or("No document object")?;

        Ok(Self::new(document))
    }

    pub fn inner(&self) -> &web_sys::Document {
        &self.document
    }
}

impl Document for BrowserDocument {
    fn contains_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_inner_html(&self, id: &str, html: &Html) -> Result<()> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| StencilError::ContainerNotFound(id.to_owned()))?;

        element.set_inner_html(html.as_str());

        Ok(())
    }

    fn ready_state(&self) -> ReadyState {
        ReadyState::from_dom(&self.document.ready_state())
    }

    fn when_ready(&self, callback: ReadyCallback) {
        if !self.ready_state().is_loading() {
            callback();
            return;
        }

        let listener = Closure::once_into_js(move || callback());

        if let Err(err) = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())
        {
            tracing::warn!(error = ?err, "failed to register DOMContentLoaded listener");
        }
    }
}

impl ClassList for web_sys::Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.class_list().add_1(class) {
            tracing::warn!(class, error = ?err, "failed to add class");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.class_list().remove_1(class) {
            tracing::warn!(class, error = ?err, "failed to remove class");
        }
    }
}

/// Convert a plain JS value to JSON by round-tripping through `JSON.stringify`.
///
/// `undefined` becomes `null`.
pub fn js_to_json(value: &JsValue) -> Option<serde_json::Value> {
    if value.is_undefined() {
        return Some(serde_json::Value::Null);
    }

    let json_string = js_sys::JSON::stringify(value).ok()?;
    let json_str = json_string.as_string()?;

    serde_json::from_str(&json_str).ok()
}
