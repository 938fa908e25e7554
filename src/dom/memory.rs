// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! In-memory element tree implementing [`Dom`].

use std::collections::BTreeMap;

use super::{Dom, ElementId, ListenerId};

#[derive(Clone, Debug, Default)]
struct Node {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// Document held entirely in memory. Nodes are never freed; a removed element
/// simply has no parent.
#[derive(Clone, Debug, Default)]
pub struct MemoryDom {
    nodes: Vec<Node>,
    focused: Option<ElementId>,
    listeners: Vec<ListenerId>,
    next_listener: u32,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, el: ElementId) -> Option<&Node> {
        self.nodes.get(el.0 as usize)
    }

    fn node_mut(&mut self, el: ElementId) -> Option<&mut Node> {
        self.nodes.get_mut(el.0 as usize)
    }

    fn detach(&mut self, child: ElementId) {
        let Some(parent) = self.node(child).and_then(|n| n.parent) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|c| *c != child);
        }
        if let Some(c) = self.node_mut(child) {
            c.parent = None;
        }
    }

    fn is_ancestor_or_self(&self, candidate: ElementId, el: ElementId) -> bool {
        let mut cursor = Some(el);
        while let Some(current) = cursor {
            if current == candidate {
                return true;
            }
            cursor = self.node(current).and_then(|n| n.parent);
        }
        false
    }
}

impl Dom for MemoryDom {
    // Tag names are not tracked; nothing on the page inspects them.
    fn create_element(&mut self, _tag: &str) -> ElementId {
        let id = ElementId(self.nodes.len() as u32);
        self.nodes.push(Node::default());
        id
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .position(|n| n.attributes.get("id").is_some_and(|v| v == id))
            .map(|idx| ElementId(idx as u32))
    }

    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.node(el)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, el: ElementId, class: &str) {
        if class.is_empty() {
            return;
        }
        if let Some(n) = self.node_mut(el)
            && !n.classes.iter().any(|c| c == class)
        {
            n.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, el: ElementId, class: &str) {
        if let Some(n) = self.node_mut(el) {
            n.classes.retain(|c| c != class);
        }
    }

    fn attribute(&self, el: ElementId, name: &str) -> Option<String> {
        self.node(el).and_then(|n| n.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) {
        if let Some(n) = self.node_mut(el) {
            n.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn text(&self, el: ElementId) -> String {
        self.node(el).map(|n| n.text.clone()).unwrap_or_default()
    }

    fn set_text(&mut self, el: ElementId, text: &str) {
        if let Some(n) = self.node_mut(el) {
            n.text = text.to_string();
        }
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if self.node(parent).is_none() || self.node(child).is_none() {
            return;
        }
        // Refuse to create a cycle.
        if self.is_ancestor_or_self(child, parent) {
            return;
        }
        self.detach(child);
        if let Some(p) = self.node_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.node_mut(child) {
            c.parent = Some(parent);
        }
    }

    fn remove_child(&mut self, parent: ElementId, child: ElementId) -> bool {
        if self.parent(child) != Some(parent) {
            return false;
        }
        self.detach(child);
        true
    }

    fn parent(&self, el: ElementId) -> Option<ElementId> {
        self.node(el).and_then(|n| n.parent)
    }

    fn children(&self, el: ElementId) -> Vec<ElementId> {
        self.node(el).map(|n| n.children.clone()).unwrap_or_default()
    }

    fn focus(&mut self, el: ElementId) {
        if self.node(el).is_some() {
            self.focused = Some(el);
        }
    }

    fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    fn add_key_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(id);
        id
    }

    fn remove_key_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| *l != id);
        self.listeners.len() != before
    }

    fn key_listeners(&self) -> Vec<ListenerId> {
        self.listeners.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_moves_child_between_parents() {
        let mut dom = MemoryDom::new();
        let a = dom.create_element("div");
        let b = dom.create_element("div");
        let child = dom.create_element("span");

        dom.append_child(a, child);
        dom.append_child(b, child);

        assert!(dom.children(a).is_empty());
        assert_eq!(dom.children(b), vec![child]);
        assert_eq!(dom.parent(child), Some(b));
    }

    #[test]
    fn append_refuses_cycles() {
        let mut dom = MemoryDom::new();
        let outer = dom.create_element("div");
        let inner = dom.create_element("div");
        dom.append_child(outer, inner);

        dom.append_child(inner, outer);

        assert_eq!(dom.parent(outer), None);
        assert_eq!(dom.parent(inner), Some(outer));
    }

    #[test]
    fn remove_child_only_detaches_direct_children() {
        let mut dom = MemoryDom::new();
        let parent = dom.create_element("div");
        let other = dom.create_element("div");
        let child = dom.create_element("div");
        dom.append_child(parent, child);

        assert!(!dom.remove_child(other, child));
        assert!(dom.remove_child(parent, child));
        assert!(!dom.remove_child(parent, child));
        assert_eq!(dom.parent(child), None);
    }

    #[test]
    fn classes_are_a_set() {
        let mut dom = MemoryDom::new();
        let el = dom.create_element("div");

        dom.add_class(el, "show");
        dom.add_class(el, "show");
        dom.remove_class(el, "show");

        assert!(!dom.has_class(el, "show"));
    }

    #[test]
    fn listeners_keep_registration_order() {
        let mut dom = MemoryDom::new();
        let first = dom.add_key_listener();
        let second = dom.add_key_listener();

        assert_eq!(dom.key_listeners(), vec![first, second]);
        assert!(dom.remove_key_listener(first));
        assert!(!dom.remove_key_listener(first));
        assert_eq!(dom.key_listeners(), vec![second]);
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let mut dom = MemoryDom::new();
        let ghost = ElementId(42);

        dom.add_class(ghost, "x");
        dom.set_attribute(ghost, "aria-hidden", "true");
        dom.focus(ghost);

        assert!(!dom.has_class(ghost, "x"));
        assert_eq!(dom.attribute(ghost, "aria-hidden"), None);
        assert_eq!(dom.focused(), None);
        assert!(dom.children(ghost).is_empty());
    }

    #[test]
    fn element_lookup_by_id_attribute() {
        let mut dom = MemoryDom::new();
        let el = dom.create_element("button");
        dom.set_attribute(el, "id", "openModal");

        assert_eq!(dom.element_by_id("openModal"), Some(el));
        assert_eq!(dom.element_by_id("closeModal"), None);
    }
}
