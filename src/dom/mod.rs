//! In-memory element tree the booking page runs against.
//!
//! Elements live in an arena owned by [`Document`] and are referenced by
//! [`ElementId`]. Components never look elements up on their own during event
//! handling: they receive ids at construction time and read/write through the
//! document handed to each handler.

pub mod event;
pub mod render;

use std::collections::BTreeMap;

/// Handle of an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    value: String,
    disabled: bool,
    selected: bool,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            text: String::new(),
            value: String::new(),
            disabled: false,
            selected: false,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `data-*` attribute lookup, `data("seat")` reads `data-seat`.
    pub fn data(&self, name: &str) -> Option<&str> {
        self.attr(&format!("data-{name}"))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    body: ElementId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
            body: ElementId(0),
        }
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.nodes.push(Element::new(tag));
        ElementId(self.nodes.len() - 1)
    }

    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if parent == child || self.element(parent).is_none() || self.element(child).is_none() {
            return;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Drops every child of `id` from the tree (the `innerHTML = ''` step).
    pub fn clear_children(&mut self, id: ElementId) {
        let Some(element) = self.nodes.get_mut(id.0) else {
            return;
        };
        let children = std::mem::take(&mut element.children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    /// Detaches `id` from its parent. The arena slot stays valid, the element
    /// just stops being part of the rendered tree.
    pub fn remove(&mut self, id: ElementId) {
        self.detach(id);
    }

    fn detach(&mut self, id: ElementId) {
        if let Some(parent) = self.nodes.get(id.0).and_then(|e| e.parent) {
            self.nodes[parent.0].children.retain(|c| *c != id);
            self.nodes[id.0].parent = None;
        }
    }

    /// Whether the element is reachable from the body.
    pub fn is_attached(&self, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            if cur == self.body {
                return true;
            }
            current = self.nodes.get(cur.0).and_then(|e| e.parent);
        }
        false
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id.0)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        self.descendants(self.body)
            .into_iter()
            .find(|el| self.nodes[el.0].id.as_deref() == Some(id))
    }

    /// Attached descendants of `root` in document order, `root` excluded.
    pub fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let Some(element) = self.element(root) else {
            return out;
        };
        let mut stack: Vec<ElementId> = element.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    pub fn query_class(&self, root: ElementId, class: &str) -> Vec<ElementId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| self.nodes[id.0].has_class(class))
            .collect()
    }

    pub fn first_by_class(&self, class: &str) -> Option<ElementId> {
        self.query_class(self.body, class).into_iter().next()
    }

    /// Elements carrying `name="value"`, e.g. `data-bs-toggle="tooltip"`.
    pub fn query_attr(&self, name: &str, value: &str) -> Vec<ElementId> {
        self.descendants(self.body)
            .into_iter()
            .filter(|id| self.nodes[id.0].attr(name) == Some(value))
            .collect()
    }

    // --- mutation ---

    fn with_mut(&mut self, id: ElementId, f: impl FnOnce(&mut Element)) {
        if let Some(element) = self.nodes.get_mut(id.0) {
            f(element);
        }
    }

    pub fn set_id(&mut self, id: ElementId, value: &str) {
        self.with_mut(id, |e| e.id = Some(value.to_string()));
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        self.with_mut(id, |e| {
            if !e.has_class(class) {
                e.classes.push(class.to_string());
            }
        });
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        self.with_mut(id, |e| e.classes.retain(|c| c != class));
    }

    pub fn toggle_class(&mut self, id: ElementId, class: &str, on: bool) {
        if on {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        self.with_mut(id, |e| {
            e.attrs.insert(name.to_string(), value.to_string());
        });
    }

    pub fn remove_attr(&mut self, id: ElementId, name: &str) {
        self.with_mut(id, |e| {
            e.attrs.remove(name);
        });
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) {
        self.with_mut(id, |e| e.text = text.to_string());
    }

    pub fn set_value(&mut self, id: ElementId, value: &str) {
        self.with_mut(id, |e| e.value = value.to_string());
    }

    pub fn set_disabled(&mut self, id: ElementId, disabled: bool) {
        self.with_mut(id, |e| e.disabled = disabled);
    }

    pub fn set_selected(&mut self, id: ElementId, selected: bool) {
        self.with_mut(id, |e| e.selected = selected);
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.attr(name))
    }

    pub fn value(&self, id: ElementId) -> &str {
        self.element(id).map(Element::value).unwrap_or("")
    }

    pub fn text(&self, id: ElementId) -> &str {
        self.element(id).map(Element::text).unwrap_or("")
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    pub fn is_disabled(&self, id: ElementId) -> bool {
        self.element(id).is_some_and(Element::is_disabled)
    }

    // --- <select> ---

    pub fn options(&self, select: ElementId) -> Vec<ElementId> {
        self.element(select)
            .map(|e| {
                e.children
                    .iter()
                    .copied()
                    .filter(|c| self.nodes[c.0].tag == "option")
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Value of the selected option, `""` when nothing is selected.
    pub fn select_value(&self, select: ElementId) -> &str {
        self.options(select)
            .into_iter()
            .find(|o| self.nodes[o.0].selected)
            .map(|o| self.nodes[o.0].value.as_str())
            .unwrap_or("")
    }

    /// Selects the first option whose value matches; with no match the select
    /// ends up with nothing selected.
    pub fn set_select_value(&mut self, select: ElementId, value: &str) {
        let options = self.options(select);
        let target = options
            .iter()
            .copied()
            .find(|o| self.nodes[o.0].value == value);
        for option in options {
            self.nodes[option.0].selected = Some(option) == target;
        }
    }

    pub fn append_option(
        &mut self,
        select: ElementId,
        value: &str,
        label: &str,
        disabled: bool,
        selected: bool,
    ) -> ElementId {
        let option = self.create_element("option");
        self.set_value(option, value);
        self.set_text(option, label);
        self.set_disabled(option, disabled);
        self.set_selected(option, selected);
        self.append_child(select, option);
        option
    }
}
