use serde::Serialize;
use stencil::{Element, Html, Node, RenderData, Template, TemplateRegistry, View};
use stencil_utils::{list_field, text_or};

use crate::NAV_BUTTON;
use crate::nav_button::NavButton;

/// A row of [`NavButton`]s
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonGroup {
    pub buttons: Vec<NavButton>,
    pub alignment: String,
    pub spacing: String,
}

impl Default for ButtonGroup {
    fn default() -> Self {
        ButtonGroup {
            buttons: Vec::new(),
            alignment: "left".to_owned(),
            spacing: "normal".to_owned(),
        }
    }
}

impl ButtonGroup {
    pub fn new(buttons: impl IntoIterator<Item = NavButton>) -> Self {
        ButtonGroup {
            buttons: buttons.into_iter().collect(),
            ..Self::default()
        }
    }

    fn container(alignment: &str, spacing: &str, buttons: impl IntoIterator<Item = Node>) -> Node {
        Element::new("div")
            .class(format!(
                "button-group button-group--{alignment} button-group--{spacing}"
            ))
            .children(buttons)
            .into()
    }
}

impl View for ButtonGroup {
    fn render(&self) -> Html {
        Self::container(
            &self.alignment,
            &self.spacing,
            self.buttons.iter().map(NavButton::to_node),
        )
        .into()
    }
}

/// Registry adapter for [`ButtonGroup`]
///
/// Buttons are rendered through the registry's `navButton` template, so an
/// override registered under that name applies to every group.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonGroupTemplate;

impl Template for ButtonGroupTemplate {
    fn render(&self, registry: &TemplateRegistry, data: &RenderData) -> Html {
        let defaults = ButtonGroup::default();
        let alignment = text_or(data, "alignment", &defaults.alignment);
        let spacing = text_or(data, "spacing", &defaults.spacing);

        let buttons = list_field(data, "buttons")
            .iter()
            .map(|button| Node::raw(registry.render(NAV_BUTTON, button)));

        ButtonGroup::container(&alignment, &spacing, buttons).into()
    }
}
