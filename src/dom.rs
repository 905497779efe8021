//! In-memory document model.
//!
//! A small element tree with the parts of the browser DOM the page controller
//! relies on: lookup by id and by class, text content, attributes, the
//! `display` style, checkbox state and `change` listeners. Elements live in an
//! arena owned by the [`Document`] and are addressed by [`NodeId`].
//!
//! The finished tree serializes to HTML with [`Document::to_html`].

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: [&str; 5] = ["br", "hr", "img", "input", "meta"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("element #{0} not found in document")]
    MissingElement(String),
}

/// Handle to an element owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Value of an element's inline `display` style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// No inline style; the element renders with its default display.
    #[default]
    Default,
    /// `display: none`
    None,
}

/// Handler invoked with the document and the control's new checked state.
pub type ChangeListener = Arc<dyn Fn(&mut Document, bool) + Send + Sync>;

#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: String,
    display: Display,
    checked: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            text: String::new(),
            display: Display::Default,
            checked: false,
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

    /// Space-separated class list, as in the `class` attribute.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn display(&self) -> Display {
        self.display
    }

    pub fn is_hidden(&self) -> bool {
        self.display == Display::None
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// An element tree rooted at `<body>`.
///
/// Elements are never freed: detached elements stay in the arena until the
/// document is dropped. A document is built for one page load.
pub struct Document {
    title: String,
    nodes: Vec<Element>,
    body: NodeId,
    listeners: Vec<(NodeId, ChangeListener)>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("title", &self.title)
            .field("nodes", &self.nodes.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            nodes: vec![Element::new("body")],
            body: NodeId(0),
            listeners: Vec::new(),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Create a detached element. It becomes part of the page once appended.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        self.element_mut(node).id = Some(id.to_string());
    }

    /// Replace the class list with the whitespace-separated classes in `class_name`.
    pub fn set_class_name(&mut self, node: NodeId, class_name: &str) {
        self.element_mut(node).classes = class_name.split_whitespace().map(String::from).collect();
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let attributes = &mut self.element_mut(node).attributes;
        match attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn set_display(&mut self, node: NodeId, display: Display) {
        self.element_mut(node).display = display;
    }

    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        self.element_mut(node).checked = checked;
    }

    /// Replace everything inside the element with a single run of text.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        self.detach_children(node);
        self.element_mut(node).text = text.to_string();
    }

    /// Remove all text and children from the element.
    pub fn clear(&mut self, node: NodeId) {
        self.set_text_content(node, "");
    }

    /// Concatenated text of the element and all of its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut text = self.element(node).text.clone();
        for &child in self.element(node).children() {
            text.push_str(&self.text_content(child));
        }
        text
    }

    /// Append `child` as the last child of `parent`, moving it if it is already attached.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old_parent) = self.element(child).parent {
            self.element_mut(old_parent).children.retain(|&c| c != child);
        }
        self.element_mut(child).parent = Some(parent);
        self.element_mut(parent).children.push(child);
    }

    fn detach_children(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.element_mut(node).children);
        for child in children {
            self.element_mut(child).parent = None;
        }
    }

    /// Elements attached under `<body>`, in document order.
    fn attached(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.body];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.element(node).children.iter().rev().copied());
        }
        order
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.attached()
            .into_iter()
            .find(|&node| self.element(node).id() == Some(id))
    }

    /// Like [`Document::get_element_by_id`], but a missing element is an error.
    pub fn require_element_by_id(&self, id: &str) -> Result<NodeId, DomError> {
        self.get_element_by_id(id)
            .ok_or_else(|| DomError::MissingElement(id.to_string()))
    }

    /// All attached elements carrying `class`, in document order.
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        self.attached()
            .into_iter()
            .filter(|&node| self.element(node).has_class(class))
            .collect()
    }

    pub fn add_change_listener<F>(&mut self, node: NodeId, listener: F)
    where
        F: Fn(&mut Document, bool) + Send + Sync + 'static,
    {
        self.listeners.push((node, Arc::new(listener)));
    }

    /// Drop every change listener registered on `node`.
    pub fn remove_change_listeners(&mut self, node: NodeId) {
        self.listeners.retain(|(target, _)| *target != node);
    }

    pub fn change_listener_count(&self, node: NodeId) -> usize {
        self.listeners
            .iter()
            .filter(|(target, _)| *target == node)
            .count()
    }

    /// Set the control's checked state as a user would, then run its change listeners.
    pub fn dispatch_change(&mut self, node: NodeId, checked: bool) {
        self.set_checked(node, checked);

        let listeners: Vec<ChangeListener> = self
            .listeners
            .iter()
            .filter(|(target, _)| *target == node)
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(self, checked);
        }
    }

    /// Serialize one element and its subtree.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_element(node, &mut out);
        out
    }

    /// Serialize the whole page.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape_text(&self.title)));
        out.push_str("</head>\n");
        self.write_element(self.body, &mut out);
        out.push_str("\n</html>\n");
        out
    }

    fn write_element(&self, node: NodeId, out: &mut String) {
        let element = self.element(node);

        out.push('<');
        out.push_str(&element.tag);
        if let Some(id) = element.id() {
            push_attribute(out, "id", id);
        }
        if !element.classes.is_empty() {
            push_attribute(out, "class", &element.class_name());
        }
        for (name, value) in &element.attributes {
            push_attribute(out, name, value);
        }
        if element.is_hidden() {
            push_attribute(out, "style", "display: none");
        }
        if element.checked {
            out.push_str(" checked");
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&element.tag.as_str()) {
            return;
        }

        out.push_str(&escape_text(&element.text));
        for &child in &element.children {
            self.write_element(child, out);
        }
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attribute(value));
    out.push('"');
}

pub(crate) fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub(crate) fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
