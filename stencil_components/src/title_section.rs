use serde::Serialize;
use stencil::{Element, Html, Node, RenderData, Template, TemplateRegistry, View};
use stencil_utils::{flag_field, list_field, text_field, text_or};

use crate::ids;

const SEARCH_ICON: &str = "🔍";
const MENU_ICON: &str = "☰";
const MENU_ARROW: &str = "▼";

/// One entry of the title section dropdown menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownItem {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub text: String,
}

impl Default for DropdownItem {
    fn default() -> Self {
        DropdownItem {
            href: "#".to_owned(),
            target: None,
            icon: None,
            text: "Item".to_owned(),
        }
    }
}

impl DropdownItem {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        DropdownItem {
            href: href.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn from_data(data: &RenderData) -> Self {
        let defaults = Self::default();

        DropdownItem {
            href: text_or(data, "href", &defaults.href),
            target: text_field(data, "target"),
            icon: text_field(data, "icon"),
            text: text_or(data, "text", &defaults.text),
        }
    }

    fn to_node(&self) -> Node {
        let icon: Option<Node> = self.icon.as_ref().map(|icon| {
            Element::new("span")
                .class("dropdown-item-icon")
                .text(icon)
                .into()
        });

        Element::new("a")
            .attr("href", &self.href)
            .class("dropdown-item")
            .attr_opt("target", self.target.as_ref())
            .child(Node::from(icon))
            .child(Element::new("span").class("dropdown-item-text").text(&self.text))
            .into()
    }
}

/// Page heading with an optional search bar and dropdown menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleSection {
    pub title: String,
    pub search_placeholder: String,
    pub show_search: bool,
    pub show_dropdown: bool,
    pub dropdown_items: Vec<DropdownItem>,
}

impl Default for TitleSection {
    fn default() -> Self {
        TitleSection {
            title: "Welcome".to_owned(),
            search_placeholder: "Search...".to_owned(),
            show_search: true,
            show_dropdown: true,
            dropdown_items: Vec::new(),
        }
    }
}

impl TitleSection {
    pub fn new(title: impl Into<String>) -> Self {
        TitleSection {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Read options from an open data record, defaulting absent fields.
    pub fn from_data(data: &RenderData) -> Self {
        let defaults = Self::default();

        TitleSection {
            title: text_or(data, "title", &defaults.title),
            search_placeholder: text_or(data, "searchPlaceholder", &defaults.search_placeholder),
            show_search: flag_field(data, "showSearch"),
            show_dropdown: flag_field(data, "showDropdown"),
            dropdown_items: list_field(data, "dropdownItems")
                .iter()
                .map(DropdownItem::from_data)
                .collect(),
        }
    }

    fn search(&self) -> Option<Node> {
        if !self.show_search {
            return None;
        }

        let container = Element::new("div")
            .class("search-container")
            .child(
                Element::new("input")
                    .attr("type", "text")
                    .class("search-bar")
                    .attr("placeholder", &self.search_placeholder)
                    .id(ids::SEARCH_INPUT_ID),
            )
            .child(
                Element::new("button")
                    .attr("type", "button")
                    .class(ids::SEARCH_BUTTON_CLASS)
                    .attr("aria-label", "Search")
                    .text(SEARCH_ICON),
            );

        Some(container.into())
    }

    fn dropdown(&self) -> Option<Node> {
        if !self.show_dropdown || self.dropdown_items.is_empty() {
            return None;
        }

        let toggle = Element::new("button")
            .attr("type", "button")
            .class(ids::DROPDOWN_TOGGLE_CLASS)
            .attr("aria-label", "Menu")
            .child(Element::new("span").class("dropdown-icon").text(MENU_ICON))
            .child(Element::new("span").class("dropdown-text").text("Menu"))
            .child(Element::new("span").class("dropdown-arrow").text(MENU_ARROW));

        let menu = Element::new("div")
            .class("dropdown-menu")
            .id(ids::DROPDOWN_MENU_ID)
            .children(self.dropdown_items.iter().map(DropdownItem::to_node));

        Some(
            Element::new("div")
                .class(ids::DROPDOWN_CLASS)
                .child(toggle)
                .child(menu)
                .into(),
        )
    }
}

impl View for TitleSection {
    fn render(&self) -> Html {
        Element::new("section")
            .class("title-section")
            .child(
                Element::new("div")
                    .class("title-container")
                    .child(Element::new("h1").class("page-title").text(&self.title))
                    .child(
                        Element::new("div")
                            .class("title-right")
                            .child(Node::from(self.search()))
                            .child(Node::from(self.dropdown())),
                    ),
            )
            .into()
    }
}

/// Registry adapter for [`TitleSection`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleSectionTemplate;

impl Template for TitleSectionTemplate {
    fn render(&self, _registry: &TemplateRegistry, data: &RenderData) -> Html {
        TitleSection::from_data(data).render()
    }
}
