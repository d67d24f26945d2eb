//! Built-in page templates.
//!
//! Each template comes in two forms: a typed option record implementing
//! [`View`](stencil::View) for Rust callers, and a unit struct implementing
//! [`Template`](stencil::Template) that reads an open [`RenderData`] record,
//! fills in defaults, and renders the typed record.

use stencil::TemplateRegistry;

pub mod button_group;
pub mod ids;
pub mod nav_button;
pub mod title_section;

pub use button_group::{ButtonGroup, ButtonGroupTemplate};
pub use nav_button::{NavButton, NavButtonTemplate};
pub use title_section::{DropdownItem, TitleSection, TitleSectionTemplate};

#[doc(no_inline)]
pub use stencil::RenderData;

/// Registered name of the title section template.
pub const TITLE_SECTION: &str = "titleSection";
/// Registered name of the navigation button template.
pub const NAV_BUTTON: &str = "navButton";
/// Registered name of the button group template.
pub const BUTTON_GROUP: &str = "buttonGroup";

/// Register every built-in template under its standard name.
pub fn register_builtins(registry: &mut TemplateRegistry) -> &mut TemplateRegistry {
    registry
        .register(TITLE_SECTION, TitleSectionTemplate)
        .register(NAV_BUTTON, NavButtonTemplate)
        .register(BUTTON_GROUP, ButtonGroupTemplate)
}

/// A registry holding only the built-in templates.
pub fn builtin_registry() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    register_builtins(&mut registry);
    registry
}
