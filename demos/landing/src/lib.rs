#![allow(missing_docs)]

//! Landing page built from the stencil built-in templates.
//!
//! The server pre-renders the page and hands the same data to the client
//! through `window.INIT_DATA`; the client re-inserts the templates and wires
//! up the widgets.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use stencil::init_data::init_data_script;
use stencil::prelude::*;
use stencil_components::{BUTTON_GROUP, TITLE_SECTION, builtin_registry};
use stencil_widgets::WidgetConfig;

#[cfg(target_arch = "wasm32")]
pub mod client;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;

#[cfg(target_arch = "wasm32")]
pub use client::TemplateManager;

pub const HEADER_CONTAINER: &str = "header";
pub const NAV_CONTAINER: &str = "nav";

/// Everything the page needs, as sent in `INIT_DATA`.
///
/// Absent fields read as `null` (template defaults) or the default widget
/// config, not as the demo content of [`PageData::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    /// `titleSection` data.
    #[serde(default)]
    pub title: Value,
    /// `buttonGroup` data.
    #[serde(default)]
    pub nav: Value,
    #[serde(default)]
    pub widgets: WidgetConfig,
}

impl Default for PageData {
    fn default() -> Self {
        PageData {
            title: json!({
                "title": "Stencil",
                "searchPlaceholder": "Search the docs...",
                "dropdownItems": [
                    { "text": "Guide", "href": "/guide", "icon": "📘" },
                    { "text": "API", "href": "/api", "icon": "🧩" },
                    { "text": "Source", "href": "https://github.com", "target": "_blank" },
                ],
            }),
            nav: json!({
                "alignment": "center",
                "buttons": [
                    { "text": "Get started", "href": "/guide", "icon": "🚀" },
                    { "text": "Examples", "href": "/examples", "style": "secondary" },
                    { "text": "Back", "onclick": "history.back()", "style": "outline", "size": "small" },
                ],
            }),
            widgets: WidgetConfig::default(),
        }
    }
}

pub fn build_registry() -> TemplateRegistry {
    builtin_registry()
}

/// Queue or perform the page inserts into `document`.
pub fn mount_page<D>(registry: &Rc<TemplateRegistry>, document: &Rc<D>, page: &PageData)
where
    D: Document + 'static,
{
    load_template(
        registry,
        document,
        TITLE_SECTION,
        HEADER_CONTAINER,
        page.title.clone(),
    );
    load_template(registry, document, BUTTON_GROUP, NAV_CONTAINER, page.nav.clone());
}

/// Full HTML document for `page`, with both sections pre-rendered.
pub fn page_shell(registry: &TemplateRegistry, page: &PageData) -> Result<String, serde_json::Error> {
    let header = registry.render(TITLE_SECTION, &page.title);
    let nav = registry.render(BUTTON_GROUP, &page.nav);
    let init_data = init_data_script(page)?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Stencil Landing</title>
    {init_data}
    <script type="module">
        import init from '/pkg/landing.js';

        init().catch((error) => console.error('Failed to load WASM:', error));
    </script>
</head>
<body>
    <header id="{HEADER_CONTAINER}">{header}</header>
    <nav id="{NAV_CONTAINER}">{nav}</nav>
</body>
</html>
"#
    ))
}
