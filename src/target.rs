//! JsonTable Render Targets
//!
//! A render target is whatever a table draws into. `Table::refresh()` is the
//! only write path: it renders a fresh [`TableView`] and hands it to
//! [`RenderTarget::replace`], which discards the previous content.

use crate::view::TableView;
use std::cell::RefCell;
use std::rc::Rc;

pub trait RenderTarget {
    /// Replace the target's content with `view`.
    fn replace(&mut self, view: &TableView);
}

/// Targets shared with the caller stay inspectable after being handed to a
/// table.
impl<T: RenderTarget + ?Sized> RenderTarget for Rc<RefCell<T>> {
    fn replace(&mut self, view: &TableView) {
        self.borrow_mut().replace(view);
    }
}

/// Keeps the last view it was given.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    view: Option<TableView>,
    replace_count: usize,
}

/// A [`MemoryTarget`] the caller keeps a handle to.
pub type SharedTarget = Rc<RefCell<MemoryTarget>>;

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedTarget {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn view(&self) -> Option<&TableView> {
        self.view.as_ref()
    }

    /// Number of times the content was replaced.
    pub fn replace_count(&self) -> usize {
        self.replace_count
    }
}

impl RenderTarget for MemoryTarget {
    fn replace(&mut self, view: &TableView) {
        self.view = Some(view.clone());
        self.replace_count += 1;
    }
}

/// Keeps the plain-text rendering of the last view.
#[derive(Debug, Default)]
pub struct TextTarget {
    text: String,
}

impl TextTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl RenderTarget for TextTarget {
    fn replace(&mut self, view: &TableView) {
        self.text = view.to_text();
    }
}

/// Keeps the HTML rendering of the last view.
#[derive(Debug, Default)]
pub struct HtmlTarget {
    html: String,
}

impl HtmlTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

impl RenderTarget for HtmlTarget {
    fn replace(&mut self, view: &TableView) {
        self.html = view.to_html();
    }
}
