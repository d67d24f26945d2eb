#![allow(missing_docs)]

pub mod document;
pub mod error;
pub mod init_data;
pub mod loader;
pub mod logging;
pub mod markup;
pub mod prelude;
pub mod registry;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use js_sys;
pub use wasm_bindgen;
pub use web_sys;

pub use document::{ClassList, Document, MemoryDocument, MemoryElement, ReadyState};
pub use error::{Result, StencilError};
pub use loader::{LoadOutcome, load_template};
pub use markup::{Element, Node};
pub use registry::{RenderData, Template, TemplateRegistry};

/// Trait that defines the view layer for components
///
/// Components implement this trait to provide their HTML rendering logic.
/// Rendering must not touch the document, so views render the same way on
/// the server and in the browser.
pub trait View {
    /// Render the component to Html
    fn render(&self) -> Html;
}

/// Represents rendered HTML content
///
/// Content built from a [`Node`] tree is escaped on the way in. Content
/// converted from a string is taken as trusted markup and used verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Html {
    content: String,
}

impl Html {
    /// Create Html from markup that is already safe to insert
    pub fn new(content: impl Into<String>) -> Self {
        Html {
            content: content.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

impl From<String> for Html {
    fn from(content: String) -> Self {
        Html { content }
    }
}

impl From<&str> for Html {
    fn from(content: &str) -> Self {
        Html {
            content: content.to_owned(),
        }
    }
}

impl From<Node> for Html {
    fn from(node: Node) -> Self {
        Html {
            content: node.to_html_string(),
        }
    }
}

impl From<Element> for Html {
    fn from(element: Element) -> Self {
        Node::from(element).into()
    }
}

impl FromIterator<Html> for Html {
    fn from_iter<I: IntoIterator<Item = Html>>(iter: I) -> Self {
        let mut content = String::new();
        for html in iter {
            content.push_str(&html.content);
        }
        Html { content }
    }
}

impl std::fmt::Display for Html {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_from_node_escapes_and_from_str_does_not() {
        let escaped = Html::from(Node::text("<b>"));
        let trusted = Html::from("<b>");

        assert_eq!(escaped.as_str(), "&lt;b&gt;");
        assert_eq!(trusted.as_str(), "<b>");
        assert_eq!(trusted.to_string(), "<b>");
    }

    #[test]
    fn html_collects_in_order() {
        let joined: Html = ["<i>a</i>", "<i>b</i>"].into_iter().map(Html::from).collect();

        assert_eq!(joined.as_str(), "<i>a</i><i>b</i>");
        assert!(Html::default().is_empty());
    }
}
