//! Semantic element tree produced by components.
//!
//! The tree is what queries run against and what `render::tree_widget` turns into
//! terminal cells. It carries no layout beyond "stack vertically" for
//! containers and "place side by side" for rows.

use std::fmt;
use std::sync::Arc;

use crate::store::StoreError;

/// Callback attached to an activatable element.
pub type ClickHandler = Arc<dyn Fn() -> Result<(), StoreError> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Children stacked vertically.
    Container,
    /// Children placed on one line.
    Row,
    Heading,
    Button,
    Text,
}

/// How an element is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Element whose own text equals the value (surrounding whitespace ignored).
    Text(String),
    /// Element carrying the test identifier.
    TestId(String),
}

impl Selector {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn test_id(id: impl Into<String>) -> Self {
        Self::TestId(id.into())
    }

    pub fn matches(&self, node: &Node) -> bool {
        match self {
            Self::Text(expected) => node
                .text
                .as_deref()
                .is_some_and(|text| text.trim() == expected.trim()),
            Self::TestId(expected) => node.test_id.as_deref() == Some(expected.as_str()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "text {text:?}"),
            Self::TestId(id) => write!(f, "test id {id:?}"),
        }
    }
}

#[derive(Clone)]
pub struct Node {
    role: Role,
    text: Option<String>,
    test_id: Option<String>,
    on_click: Option<ClickHandler>,
    children: Vec<Node>,
}

impl Node {
    fn new(role: Role) -> Self {
        Self {
            role,
            text: None,
            test_id: None,
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn container(children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::new(Role::Container)
        }
    }

    pub fn row(children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::new(Role::Row)
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(Role::Heading)
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(Role::Text)
        }
    }

    pub fn button<F>(label: impl Into<String>, on_click: F) -> Self
    where
        F: Fn() -> Result<(), StoreError> + Send + Sync + 'static,
    {
        Self {
            text: Some(label.into()),
            on_click: Some(Arc::new(on_click)),
            ..Self::new(Role::Button)
        }
    }

    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Text carried by this element itself, without descendants.
    pub fn own_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn click_handler(&self) -> Option<ClickHandler> {
        self.on_click.clone()
    }

    /// Own text followed by every descendant's text, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Every element matching `selector`, pre-order.
    pub fn find_all(&self, selector: &Selector) -> Vec<&Node> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if selector.matches(node) {
                found.push(node);
            }
        });
        found
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Node");
        s.field("role", &self.role);
        if let Some(text) = &self.text {
            s.field("text", text);
        }
        if let Some(id) = &self.test_id {
            s.field("test_id", id);
        }
        if self.on_click.is_some() {
            s.field("clickable", &true);
        }
        if !self.children.is_empty() {
            s.field("children", &self.children);
        }
        s.finish()
    }
}
