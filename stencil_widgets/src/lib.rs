//! Search and dropdown widgets for the title section.
//!
//! The widgets are plain state machines over the [`ClassList`](stencil::ClassList)
//! seam. Event wiring is done by the `bind` module in the browser.

pub mod config;
pub mod dropdown;
pub mod search;

#[cfg(target_arch = "wasm32")]
pub mod bind;

pub use config::WidgetConfig;
pub use dropdown::{Dropdown, DropdownState};
pub use search::{SearchAction, SearchBox, normalize_query};
