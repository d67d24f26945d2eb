pub use crate::{
    ClassList, Document, Element, Html, LoadOutcome, Node, RenderData, StencilError, Template,
    TemplateRegistry, View, load_template,
};

#[cfg(target_arch = "wasm32")]
pub use crate::web::BrowserDocument;
