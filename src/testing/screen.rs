//! Queries over a mounted element tree.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::buffer::Buffer;

use crate::testing::error::QueryError;
use crate::ui::component::SharedTree;
use crate::ui::node::{ClickHandler, Node, Role, Selector};

/// The mounted container: the live element tree plus the cells it was last
/// drawn into.
#[derive(Clone)]
pub struct Screen {
    tree: SharedTree,
    buffer: Arc<Mutex<Buffer>>,
}

impl Screen {
    pub(crate) fn new(tree: SharedTree, buffer: Arc<Mutex<Buffer>>) -> Self {
        Self { tree, buffer }
    }

    /// The single element whose own text is `text`.
    pub fn get_by_text(&self, text: &str) -> Result<Element, QueryError> {
        self.get(Selector::text(text))
    }

    /// The single element carrying test id `id`.
    pub fn get_by_test_id(&self, id: &str) -> Result<Element, QueryError> {
        self.get(Selector::test_id(id))
    }

    /// Like [`Screen::get_by_text`], but absence is `Ok(None)`.
    pub fn query_by_text(&self, text: &str) -> Result<Option<Element>, QueryError> {
        self.query(Selector::text(text))
    }

    /// Like [`Screen::get_by_test_id`], but absence is `Ok(None)`.
    pub fn query_by_test_id(&self, id: &str) -> Result<Option<Element>, QueryError> {
        self.query(Selector::test_id(id))
    }

    /// Every element whose own text is `text`, in document order.
    pub fn get_all_by_text(&self, text: &str) -> Result<Vec<Element>, QueryError> {
        let selector = Selector::text(text);
        let count = self.tree.lock().find_all(&selector).len();
        if count == 0 {
            return Err(QueryError::NotFound { selector });
        }
        Ok((0..count)
            .map(|index| Element {
                tree: Arc::clone(&self.tree),
                selector: selector.clone(),
                index: Some(index),
            })
            .collect())
    }

    /// Drawn cells, one line per row with trailing blanks trimmed.
    pub fn screen_text(&self) -> String {
        let buffer = self.buffer.lock();
        let width = usize::from(buffer.area.width.max(1));
        buffer
            .content
            .chunks(width)
            .map(|row| {
                let line: String = row.iter().map(|cell| cell.symbol()).collect();
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Text content of the whole tree.
    pub fn text_content(&self) -> String {
        self.tree.lock().text_content()
    }

    fn get(&self, selector: Selector) -> Result<Element, QueryError> {
        let element = Element {
            tree: Arc::clone(&self.tree),
            selector,
            index: None,
        };
        element.resolve(|_| ())?;
        Ok(element)
    }

    fn query(&self, selector: Selector) -> Result<Option<Element>, QueryError> {
        match self.get(selector) {
            Ok(element) => Ok(Some(element)),
            Err(QueryError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("tree", &*self.tree.lock())
            .finish()
    }
}

/// Live handle to an element.
///
/// The selector is resolved against the current tree every time the element
/// is read, so a handle obtained before a click reflects the re-rendered
/// tree after it.
#[derive(Clone)]
pub struct Element {
    tree: SharedTree,
    selector: Selector,
    /// Position among all matches; `None` requires a unique match.
    index: Option<usize>,
}

impl Element {
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn text_content(&self) -> Result<String, QueryError> {
        self.resolve(Node::text_content)
    }

    pub fn role(&self) -> Result<Role, QueryError> {
        self.resolve(Node::role)
    }

    /// Whether the element's text content equals `expected` exactly.
    pub fn has_text_content(&self, expected: &str) -> Result<bool, QueryError> {
        self.resolve(|node| node.text_content() == expected)
    }

    pub(crate) fn click_handler(&self) -> Result<Option<ClickHandler>, QueryError> {
        self.resolve(Node::click_handler)
    }

    fn resolve<R>(&self, read: impl FnOnce(&Node) -> R) -> Result<R, QueryError> {
        let tree = self.tree.lock();
        let matches = tree.find_all(&self.selector);
        let node = match self.index {
            Some(index) => matches.get(index).copied(),
            None if matches.len() > 1 => {
                return Err(QueryError::Multiple {
                    selector: self.selector.clone(),
                    count: matches.len(),
                })
            }
            None => matches.first().copied(),
        };
        node.map(read).ok_or_else(|| QueryError::NotFound {
            selector: self.selector.clone(),
        })
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("selector", &self.selector)
            .field("index", &self.index)
            .finish()
    }
}
