//! Named template registry.
//!
//! A [`TemplateRegistry`] maps names to [`Template`]s. It is an ordinary value:
//! build one at startup, register templates on it, and hand it (usually behind
//! an `Rc`) to whatever needs to render. Templates receive the registry they
//! are rendered from, so a template can compose other registered templates by
//! name and pick up overrides.
//!
//! Lookup failures never reach the caller of [`TemplateRegistry::render`] or
//! [`TemplateRegistry::insert`]. They are logged and the call degrades to an
//! empty string or a no-op.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::document::Document;
use crate::error::{Result, StencilError};
use crate::Html;

/// Open data record passed to templates.
pub type RenderData = serde_json::Value;

/// A render function from data to HTML
///
/// Implementations must be pure: the output depends only on `data` and the
/// templates registered on `registry`.
pub trait Template {
    fn render(&self, registry: &TemplateRegistry, data: &RenderData) -> Html;
}

impl<F> Template for F
where
    F: Fn(&TemplateRegistry, &RenderData) -> Html,
{
    fn render(&self, registry: &TemplateRegistry, data: &RenderData) -> Html {
        self(registry, data)
    }
}

#[derive(Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Rc<dyn Template>>,
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();

        f.debug_struct("TemplateRegistry")
            .field("templates", &names)
            .finish()
    }
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template under `name`. The last registration wins.
    pub fn register<T>(&mut self, name: impl Into<String>, template: T) -> &mut Self
    where
        T: Template + 'static,
    {
        let name = name.into();

        if self.templates.insert(name.clone(), Rc::new(template)).is_some() {
            tracing::debug!(template = %name, "replaced registered template");
        }

        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render `name` against `data`, returning lookup failures to the caller.
    pub fn try_render(&self, name: &str, data: &RenderData) -> Result<Html> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| StencilError::TemplateNotFound(name.to_owned()))?;

        Ok(template.render(self, data))
    }

    /// Render `name` against `data`.
    ///
    /// An unknown name logs an error and yields empty HTML.
    pub fn render(&self, name: &str, data: &RenderData) -> Html {
        self.try_render(name, data).unwrap_or_else(|err| {
            tracing::error!(%err, "failed to render template");
            Html::default()
        })
    }

    /// Replace the content of `container_id` with the render of `name`.
    ///
    /// A missing container logs an error and leaves the document untouched.
    pub fn insert<D>(&self, document: &D, name: &str, container_id: &str, data: &RenderData)
    where
        D: Document + ?Sized,
    {
        if !document.contains_element(container_id) {
            let err = StencilError::ContainerNotFound(container_id.to_owned());
            tracing::error!(%err, template = %name, "failed to insert template");
            return;
        }

        let html = self.render(name, data);

        if let Err(err) = document.set_inner_html(container_id, &html) {
            tracing::error!(%err, template = %name, "failed to insert template");
        }
    }
}
