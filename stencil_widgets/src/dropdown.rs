//! Dropdown menu state machine.
//!
//! The machine has two states and three inputs:
//!
//! | State  | toggle | outside click | close key |
//! |--------|--------|---------------|-----------|
//! | Closed | Open   | Closed        | Closed    |
//! | Open   | Closed | Closed        | Closed    |
//!
//! [`Dropdown`] runs it against live elements. The current state is whatever
//! the open marker on the menu says, so the machine stays in step with the
//! page even if something else touches the markers.

use stencil::ClassList;

use crate::WidgetConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

impl DropdownState {
    pub fn is_open(self) -> bool {
        self == DropdownState::Open
    }

    pub fn on_toggle(self) -> Self {
        match self {
            DropdownState::Closed => DropdownState::Open,
            DropdownState::Open => DropdownState::Closed,
        }
    }

    pub fn on_outside_click(self) -> Self {
        DropdownState::Closed
    }

    pub fn on_escape(self) -> Self {
        DropdownState::Closed
    }

    /// A click somewhere on the page; only clicks outside the dropdown close it.
    pub fn on_click(self, inside: bool) -> Self {
        if inside { self } else { self.on_outside_click() }
    }
}

/// Dropdown bound to its menu and toggle elements
///
/// Either element may be missing from the page. Toggling needs both; closing
/// updates whichever is present.
#[derive(Debug, Clone)]
pub struct Dropdown<E> {
    menu: Option<E>,
    toggle: Option<E>,
    open_marker: String,
    active_marker: String,
    close_key: String,
}

impl<E: ClassList> Dropdown<E> {
    pub fn new(config: &WidgetConfig, menu: Option<E>, toggle: Option<E>) -> Self {
        Dropdown {
            menu,
            toggle,
            open_marker: config.open_marker.clone(),
            active_marker: config.active_marker.clone(),
            close_key: config.close_key.clone(),
        }
    }

    /// Current state, read from the open marker on the menu.
    pub fn state(&self) -> DropdownState {
        match &self.menu {
            Some(menu) if menu.has_class(&self.open_marker) => DropdownState::Open,
            _ => DropdownState::Closed,
        }
    }

    /// Click on the toggle control.
    pub fn toggle(&self) -> DropdownState {
        let current = self.state();

        if self.menu.is_none() || self.toggle.is_none() {
            return current;
        }

        let next = current.on_toggle();
        self.apply(next);
        next
    }

    /// Click anywhere on the page. `inside` tells whether the click target is
    /// within the dropdown container.
    pub fn handle_document_click(&self, inside: bool) -> DropdownState {
        let next = self.state().on_click(inside);
        if !inside {
            self.apply(next);
        }
        next
    }

    /// Route a page click.
    ///
    /// `on_toggle` tells whether the click hit the toggle control. `inside`
    /// is `None` when the page has no dropdown container, in which case
    /// nothing closes.
    pub fn handle_page_click(&self, on_toggle: bool, inside: Option<bool>) -> DropdownState {
        if on_toggle {
            return self.toggle();
        }

        match inside {
            Some(inside) => self.handle_document_click(inside),
            None => self.state(),
        }
    }

    /// Key pressed anywhere on the page.
    pub fn handle_key(&self, key: &str) -> DropdownState {
        if key != self.close_key {
            return self.state();
        }

        let next = self.state().on_escape();
        self.apply(next);
        next
    }

    fn apply(&self, state: DropdownState) {
        if let Some(menu) = &self.menu {
            set_marker(menu, &self.open_marker, state.is_open());
        }
        if let Some(toggle) = &self.toggle {
            set_marker(toggle, &self.active_marker, state.is_open());
        }
    }
}

fn set_marker<E: ClassList>(element: &E, marker: &str, present: bool) {
    if present {
        element.add_class(marker);
    } else {
        element.remove_class(marker);
    }
}
