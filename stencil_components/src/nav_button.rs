use serde::Serialize;
use stencil::{Element, Html, Node, RenderData, Template, TemplateRegistry, View};
use stencil_utils::{text_field, text_or};

/// Link target used when the button runs an inline action instead of navigating.
pub const NOOP_HREF: &str = "javascript:void(0)";

/// A single styled navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavButton {
    pub text: String,
    pub href: String,
    pub style: String,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub target: String,
    /// Inline script run on click in place of navigation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onclick: Option<String>,
}

impl Default for NavButton {
    fn default() -> Self {
        NavButton {
            text: "Button".to_owned(),
            href: "#".to_owned(),
            style: "primary".to_owned(),
            size: "medium".to_owned(),
            icon: None,
            target: "_self".to_owned(),
            onclick: None,
        }
    }
}

impl NavButton {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        NavButton {
            text: text.into(),
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn from_data(data: &RenderData) -> Self {
        let defaults = Self::default();

        NavButton {
            text: text_or(data, "text", &defaults.text),
            href: text_or(data, "href", &defaults.href),
            style: text_or(data, "style", &defaults.style),
            size: text_or(data, "size", &defaults.size),
            icon: text_field(data, "icon"),
            target: text_or(data, "target", &defaults.target),
            onclick: text_field(data, "onclick"),
        }
    }

    fn class_name(&self) -> String {
        format!(
            "nav-button nav-button--{} nav-button--{}",
            self.style, self.size
        )
    }

    pub(crate) fn to_node(&self) -> Node {
        let href: &str = match self.onclick {
            Some(_) => NOOP_HREF,
            None => &self.href,
        };

        let icon: Option<Node> = self
            .icon
            .as_ref()
            .map(|icon| Element::new("span").class("button-icon").text(icon).into());

        Element::new("a")
            .attr("href", href)
            .attr("target", &self.target)
            .class(self.class_name())
            .attr_opt(
                "onclick",
                self.onclick
                    .as_ref()
                    .map(|action| format!("{action}; return false;")),
            )
            .child(Node::from(icon))
            .child(Element::new("span").class("button-text").text(&self.text))
            .into()
    }
}

impl View for NavButton {
    fn render(&self) -> Html {
        self.to_node().into()
    }
}

/// Registry adapter for [`NavButton`]
#[derive(Debug, Clone, Copy, Default)]
pub struct NavButtonTemplate;

impl Template for NavButtonTemplate {
    fn render(&self, _registry: &TemplateRegistry, data: &RenderData) -> Html {
        NavButton::from_data(data).render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_for_empty_data() {
        let button = NavButton::from_data(&json!({}));

        assert_eq!(button, NavButton::default());
        assert_eq!(
            button.render().as_str(),
            concat!(
                r##"<a href="#" target="_self" class="nav-button nav-button--primary nav-button--medium">"##,
                r#"<span class="button-text">Button</span></a>"#
            )
        );
    }

    #[test]
    fn style_size_and_icon() {
        let button = NavButton::from_data(&json!({
            "text": "Docs",
            "href": "/docs",
            "style": "secondary",
            "size": "large",
            "icon": "📘",
            "target": "_blank",
        }));

        assert_eq!(
            button.render().as_str(),
            concat!(
                r#"<a href="/docs" target="_blank" class="nav-button nav-button--secondary nav-button--large">"#,
                r#"<span class="button-icon">📘</span><span class="button-text">Docs</span></a>"#
            )
        );
    }

    #[test]
    fn inline_action_replaces_navigation() {
        let button = NavButton::from_data(&json!({
            "text": "Back",
            "href": "/ignored",
            "onclick": "history.back()",
        }));

        let html = button.render();

        assert!(html.as_str().starts_with(r#"<a href="javascript:void(0)" "#));
        assert!(html.as_str().contains(r#"onclick="history.back(); return false;""#));
        assert!(!html.as_str().contains("/ignored"));
    }

    #[test]
    fn action_text_is_escaped_in_attribute() {
        let button = NavButton {
            onclick: Some(r#"alert("hi")"#.to_owned()),
            ..NavButton::default()
        };

        assert!(
            button
                .render()
                .as_str()
                .contains(r#"onclick="alert(&quot;hi&quot;); return false;""#)
        );
    }
}
