use std::rc::Rc;

use serde_json::Value;
use stencil::init_data::read_init_data;
use stencil::prelude::*;
use stencil::web::js_to_json;
use stencil_widgets::SearchBox;
use stencil_widgets::bind::bind_widgets;
use wasm_bindgen::prelude::*;

use crate::{PageData, build_registry, mount_page};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();

    stencil::logging::init();

    let page: PageData = read_init_data().unwrap_or_else(|| {
        tracing::warn!("INIT_DATA missing or malformed, using default page");
        PageData::default()
    });

    let registry = Rc::new(build_registry());
    let document = Rc::new(BrowserDocument::current()?);

    mount_page(&registry, &document, &page);
    bind_widgets(
        document.inner(),
        &page.widgets,
        SearchBox::new(&page.widgets),
    )?;

    tracing::info!("landing page started");
    Ok(())
}

fn to_data(data: &JsValue) -> Value {
    js_to_json(data).unwrap_or_else(|| {
        tracing::warn!("template data is not JSON-compatible, rendering with defaults");
        Value::Null
    })
}

/// Template registry handle for page scripts
#[wasm_bindgen(js_name = TemplateManager)]
#[derive(Debug)]
pub struct TemplateManager {
    registry: Rc<TemplateRegistry>,
    document: Rc<BrowserDocument>,
}

#[wasm_bindgen(js_class = TemplateManager)]
impl TemplateManager {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<TemplateManager, JsValue> {
        Ok(TemplateManager {
            registry: Rc::new(build_registry()),
            document: Rc::new(BrowserDocument::current()?),
        })
    }

    pub fn render(&self, name: &str, data: JsValue) -> String {
        self.registry.render(name, &to_data(&data)).into_string()
    }

    #[wasm_bindgen(js_name = insertTemplate)]
    pub fn insert_template(&self, name: &str, container_id: &str, data: JsValue) {
        self.registry
            .insert(self.document.as_ref(), name, container_id, &to_data(&data));
    }

    /// Returns `true` when the insert was deferred until the document is ready.
    #[wasm_bindgen(js_name = loadTemplate)]
    pub fn load_template(&self, name: &str, container_id: &str, data: JsValue) -> bool {
        let outcome = stencil::load_template(
            &self.registry,
            &self.document,
            name,
            container_id,
            to_data(&data),
        );

        outcome == LoadOutcome::Deferred
    }

    #[wasm_bindgen(js_name = templateNames)]
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry.names().map(str::to_owned).collect();
        names.sort();
        names
    }
}
