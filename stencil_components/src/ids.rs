//! Element ids and class names shared by the templates and the widgets.

pub const SEARCH_INPUT_ID: &str = "searchInput";
pub const SEARCH_BUTTON_CLASS: &str = "search-button";

pub const DROPDOWN_CLASS: &str = "dropdown";
pub const DROPDOWN_MENU_ID: &str = "dropdownMenu";
pub const DROPDOWN_TOGGLE_CLASS: &str = "dropdown-toggle";

/// Marker on the menu while the dropdown is open.
pub const OPEN_MARKER: &str = "show";
/// Marker on the toggle control while the dropdown is open.
pub const ACTIVE_MARKER: &str = "active";
