//! Markup tree built by templates and rendered to an HTML string.

use stencil_utils::{escape_attr, escape_text};

use crate::Html;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node of the markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped when rendered.
    Text(String),
    /// Pre-rendered markup inserted verbatim.
    Raw(Html),
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    pub fn raw(html: impl Into<Html>) -> Self {
        Node::Raw(html.into())
    }

    pub fn fragment(nodes: impl IntoIterator<Item = Node>) -> Self {
        Node::Fragment(nodes.into_iter().collect())
    }

    /// An empty fragment, rendered as nothing.
    pub fn empty() -> Self {
        Node::Fragment(Vec::new())
    }

    pub fn to_html_string(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.render_into(out),
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Raw(html) => out.push_str(html.as_str()),
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.render_into(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Option<Node>> for Node {
    fn from(node: Option<Node>) -> Self {
        node.unwrap_or_else(Node::empty)
    }
}

/// An HTML element with ordered attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Element {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Set an attribute, replacing an earlier value with the same name.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn attr_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::text(value))
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);

        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }

        out.push('>');

        if self.is_void() {
            return;
        }

        for child in &self.children {
            child.render_into(out);
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}
