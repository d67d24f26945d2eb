//! The document collaborator seam.
//!
//! Templates never touch a document. Insertion and widget behavior go through
//! the [`Document`] and [`ClassList`] traits, implemented over `web_sys` in the
//! browser (see the `web` module) and in memory for servers and tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::rc::Rc;

use crate::error::{Result, StencilError};
use crate::Html;

/// Loading state of a document, as reported by `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Parse a `document.readyState` string. Unknown values count as loaded.
    pub fn from_dom(value: &str) -> Self {
        match value {
            "loading" => ReadyState::Loading,
            "interactive" => ReadyState::Interactive,
            _ => ReadyState::Complete,
        }
    }

    pub fn is_loading(self) -> bool {
        self == ReadyState::Loading
    }
}

/// Callback queued until the document finishes loading.
pub type ReadyCallback = Box<dyn FnOnce()>;

/// Element lookup and content replacement on a live document
pub trait Document {
    fn contains_element(&self, id: &str) -> bool;

    /// Replace the content of the element with `id`.
    fn set_inner_html(&self, id: &str, html: &Html) -> Result<()>;

    fn ready_state(&self) -> ReadyState;

    /// Run `callback` once the document has finished loading.
    fn when_ready(&self, callback: ReadyCallback);
}

/// Class-list access on a single element
pub trait ClassList {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// In-memory [`Document`] keyed by element id.
///
/// Starts out loaded. [`MemoryDocument::loading`] creates one that queues
/// ready callbacks until [`MemoryDocument::finish_loading`] is called.
pub struct MemoryDocument {
    elements: RefCell<HashMap<String, String>>,
    state: Cell<ReadyState>,
    pending: RefCell<Vec<ReadyCallback>>,
    mutations: Cell<usize>,
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDocument")
            .field("elements", &self.elements.borrow())
            .field("state", &self.state.get())
            .field("pending", &self.pending.borrow().len())
            .field("mutations", &self.mutations.get())
            .finish()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::with_state(ReadyState::Complete)
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self::with_state(ReadyState::Loading)
    }

    /// Document reporting `state`. Only [`ReadyState::Loading`] queues
    /// ready callbacks.
    pub fn with_state(state: ReadyState) -> Self {
        MemoryDocument {
            elements: RefCell::new(HashMap::new()),
            state: Cell::new(state),
            pending: RefCell::new(Vec::new()),
            mutations: Cell::new(0),
        }
    }

    /// Add an empty element that templates can be inserted into.
    pub fn with_container(self, id: impl Into<String>) -> Self {
        self.elements.borrow_mut().insert(id.into(), String::new());
        self
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).cloned()
    }

    /// Number of successful content replacements so far.
    pub fn mutation_count(&self) -> usize {
        self.mutations.get()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Mark the document loaded and run queued callbacks in order.
    pub fn finish_loading(&self) {
        self.state.set(ReadyState::Complete);

        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        for callback in pending {
            callback();
        }
    }
}

impl Document for MemoryDocument {
    fn contains_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn set_inner_html(&self, id: &str, html: &Html) -> Result<()> {
        let mut elements = self.elements.borrow_mut();
        let content = elements
            .get_mut(id)
            .ok_or_else(|| StencilError::ContainerNotFound(id.to_owned()))?;

        html.as_str().clone_into(content);
        self.mutations.set(self.mutations.get() + 1);

        Ok(())
    }

    fn ready_state(&self) -> ReadyState {
        self.state.get()
    }

    fn when_ready(&self, callback: ReadyCallback) {
        if self.state.get().is_loading() {
            self.pending.borrow_mut().push(callback);
        } else {
            callback();
        }
    }
}

/// In-memory element holding only a class list.
///
/// Clones share the same class list, like handles to one DOM element.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        let element = Self::new();
        for class in classes {
            element.add_class(class);
        }
        element
    }

    /// Classes in sorted order, joined like a `class` attribute.
    pub fn class_name(&self) -> String {
        self.classes
            .borrow()
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ClassList for MemoryElement {
    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_owned());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }
}
