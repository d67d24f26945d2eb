use serde::{Deserialize, Serialize};
use stencil_components::ids;

/// Element lookups, marker classes and keys used by the widgets.
///
/// Every field has a default matching the markup of the built-in title
/// section, so an empty JSON object deserializes to [`WidgetConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub search_input_id: String,
    pub search_button_selector: String,
    pub dropdown_selector: String,
    pub menu_id: String,
    pub toggle_selector: String,
    pub open_marker: String,
    pub active_marker: String,
    /// Key that submits the search field.
    pub activation_key: String,
    /// Key that closes the dropdown from anywhere on the page.
    pub close_key: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            search_input_id: ids::SEARCH_INPUT_ID.to_owned(),
            search_button_selector: format!(".{}", ids::SEARCH_BUTTON_CLASS),
            dropdown_selector: format!(".{}", ids::DROPDOWN_CLASS),
            menu_id: ids::DROPDOWN_MENU_ID.to_owned(),
            toggle_selector: format!(".{}", ids::DROPDOWN_TOGGLE_CLASS),
            open_marker: ids::OPEN_MARKER.to_owned(),
            active_marker: ids::ACTIVE_MARKER.to_owned(),
            activation_key: "Enter".to_owned(),
            close_key: "Escape".to_owned(),
        }
    }
}
