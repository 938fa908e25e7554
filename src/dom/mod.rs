// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Document capability set used by the page logic.
//! Behavior code only talks to [`Dom`], so it runs the same against the
//! rendered document and against a fresh one in tests.

pub mod memory;

pub use memory::MemoryDom;

/// Handle to an element inside a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u32);

/// Handle to a registered document-level key listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u32);

/// Keys the page reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
}

/// Keyboard event delivered to a handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    /// Suppress the host's default action (scrolling on Space, etc.).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Non-keyboard event (click, submit) with its target element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub target: ElementId,
    default_prevented: bool,
}

impl Event {
    pub fn new(target: ElementId) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[cfg(test)]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Minimal document capabilities.
///
/// Operations on an element the document does not know are no-ops (or return
/// the empty/absent value); callers never have to handle an error.
pub trait Dom {
    /// Create a detached element with the given tag name.
    fn create_element(&mut self, tag: &str) -> ElementId;

    /// Find an attached or detached element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    fn has_class(&self, el: ElementId, class: &str) -> bool;
    fn add_class(&mut self, el: ElementId, class: &str);
    fn remove_class(&mut self, el: ElementId, class: &str);

    fn attribute(&self, el: ElementId, name: &str) -> Option<String>;
    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str);

    fn text(&self, el: ElementId) -> String;
    fn set_text(&mut self, el: ElementId, text: &str);

    /// Append `child` to `parent`, detaching it from any previous parent first.
    fn append_child(&mut self, parent: ElementId, child: ElementId);
    /// Detach `child` from `parent`. Returns false when it was not a child.
    fn remove_child(&mut self, parent: ElementId, child: ElementId) -> bool;
    fn parent(&self, el: ElementId) -> Option<ElementId>;
    fn children(&self, el: ElementId) -> Vec<ElementId>;

    fn focus(&mut self, el: ElementId);
    fn focused(&self) -> Option<ElementId>;

    /// Register a document-level keydown listener.
    fn add_key_listener(&mut self) -> ListenerId;
    /// Unregister a listener. Returns false when it was not registered.
    fn remove_key_listener(&mut self, id: ListenerId) -> bool;
    /// Registered listeners in registration order.
    fn key_listeners(&self) -> Vec<ListenerId>;
}
