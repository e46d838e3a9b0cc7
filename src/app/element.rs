//! Element - Abstract UI Node Descriptions
//!
//! Components describe their output as a tree of [`Node`]s: labelled elements
//! with classes, attributes, children and event handlers. The host decides
//! how to paint them; this crate only inspects and serializes them.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::error::Result;
use crate::eventing::{Position, UiEvent};

/// Tags rendered without a closing tag
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img"];

/// One node of a rendered tree
#[derive(Debug, Clone, Serialize)]
pub enum Node {
    /// A labelled element with children
    Element(Element),
    /// Plain text content
    Text(String),
    /// Nothing rendered
    Empty,
}

impl Node {
    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Whether this node renders nothing
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// The element, if this node is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Find the element with the given id (depth-first)
    pub fn find(&self, id: &str) -> Option<&Element> {
        self.find_first(|el| el.element_id() == Some(id))
    }

    /// Find the first element matching `pred` (depth-first, pre-order)
    pub fn find_first(&self, pred: impl Fn(&Element) -> bool) -> Option<&Element> {
        fn walk<'a>(node: &'a Node, pred: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
            let Node::Element(el) = node else {
                return None;
            };
            if pred(el) {
                return Some(el);
            }
            el.children.iter().find_map(|child| walk(child, pred))
        }
        walk(self, &pred)
    }

    /// Collect every element matching `pred`, in document order
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<&Element> {
        fn walk<'a>(node: &'a Node, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
            if let Node::Element(el) = node {
                if pred(el) {
                    out.push(el);
                }
                for child in &el.children {
                    walk(child, pred, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(self, &pred, &mut out);
        out
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            Node::Text(text) => out.push_str(text),
            Node::Empty => {}
        }
    }

    /// HTML-like markup for inspection and snapshots
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_markup(out),
            Node::Text(text) => out.push_str(&escape(text)),
            Node::Empty => {}
        }
    }

    /// Pretty JSON description of the tree (handlers omitted)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// A labelled UI element
#[derive(Debug, Clone, Serialize)]
pub struct Element {
    tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    attrs: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
    #[serde(skip)]
    handlers: Handlers,
}

impl Element {
    /// Create an element with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
            handlers: Handlers::default(),
        }
    }

    // ==================== Builders ====================

    /// Set the element id (event target address)
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add a class when `condition` holds
    pub fn class_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition { self.class(class) } else { self }
    }

    /// Set an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Append a child; empty nodes are dropped
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        let child = child.into();
        if !child.is_empty() {
            self.children.push(child);
        }
        self
    }

    /// Append several children
    pub fn children(self, children: impl IntoIterator<Item = Node>) -> Self {
        children.into_iter().fold(self, |el, child| el.child(child))
    }

    /// Set the activation handler
    pub fn on_activate(mut self, handler: impl Fn() + 'static) -> Self {
        self.handlers.on_activate = Some(Rc::new(handler));
        self
    }

    /// Set the text input handler
    pub fn on_input(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.handlers.on_input = Some(Rc::new(handler));
        self
    }

    /// Set the pointer move handler
    pub fn on_pointer_move(mut self, handler: impl Fn(Position) + 'static) -> Self {
        self.handlers.on_pointer_move = Some(Rc::new(handler));
        self
    }

    /// Attach a host-owned value reference
    pub fn node_ref(mut self, input_ref: &InputRef) -> Self {
        self.handlers.input_ref = Some(input_ref.clone());
        self
    }

    // ==================== Getters ====================

    /// Element tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Element id
    pub fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Classes in insertion order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the element has `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Child nodes
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.children.iter().for_each(|c| c.collect_text(&mut out));
        out
    }

    /// Deliver `event` to this element's handlers
    ///
    /// Returns whether anything consumed the event.
    pub fn handle(&self, event: &UiEvent) -> bool {
        self.handlers.handle(event)
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = &self.id {
            out.push_str(&format!(" id=\"{}\"", escape(id)));
        }
        if !self.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape(&self.classes.join(" "))));
        }
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {name}=\"{}\"", escape(value)));
        }

        if VOID_TAGS.contains(&self.tag.as_str()) && self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for child in &self.children {
            child.write_markup(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Shorthand for `Element::new("div")`
pub fn div() -> Element {
    Element::new("div")
}

/// Shorthand for `Element::new("button")`
pub fn button() -> Element {
    Element::new("button")
}

/// Shorthand for a text `input` element
pub fn text_field() -> Element {
    Element::new("input").attr("type", "text")
}

/// Event handlers attached to an element
#[derive(Clone, Default)]
struct Handlers {
    on_activate: Option<Rc<dyn Fn()>>,
    on_input: Option<Rc<dyn Fn(&str)>>,
    on_pointer_move: Option<Rc<dyn Fn(Position)>>,
    input_ref: Option<InputRef>,
}

impl Handlers {
    fn handle(&self, event: &UiEvent) -> bool {
        match event {
            UiEvent::Activate => match &self.on_activate {
                Some(handler) => {
                    handler();
                    true
                }
                None => false,
            },
            UiEvent::Input(text) => {
                // The host-owned value is written before any handler sees it.
                let mut handled = false;
                if let Some(input_ref) = &self.input_ref {
                    input_ref.set(text.clone());
                    handled = true;
                }
                if let Some(handler) = &self.on_input {
                    handler(text);
                    handled = true;
                }
                handled
            }
            UiEvent::PointerMove(position) => match &self.on_pointer_move {
                Some(handler) => {
                    handler(*position);
                    true
                }
                None => false,
            },
        }
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("on_activate", &self.on_activate.is_some())
            .field("on_input", &self.on_input.is_some())
            .field("on_pointer_move", &self.on_pointer_move.is_some())
            .field("input_ref", &self.input_ref.is_some())
            .finish()
    }
}

/// Reference to a value owned by the host element rather than by state
///
/// The host writes into it when input arrives; components read it on demand.
#[derive(Clone, Debug, Default)]
pub struct InputRef {
    current: Rc<RefCell<String>>,
}

impl InputRef {
    /// Create an empty reference
    pub fn new() -> Self {
        Self::default()
    }

    /// Current host-side value
    pub fn current(&self) -> String {
        self.current.borrow().clone()
    }

    /// Overwrite the host-side value
    pub fn set(&self, value: impl Into<String>) {
        *self.current.borrow_mut() = value.into();
    }
}

/// Escape text for markup output
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
