//! JsonTable Column Implementation in Rust
//!
//! A column is a field name plus an optional cell renderer. Columns are
//! fixed when the table is built: either inferred from the first record's
//! keys or declared explicitly by the caller.
//!
//! # Ordering
//!
//! Columns are stably sorted by their index in a caller-supplied priority
//! list. A column missing from that list sorts as index -1, so unlisted
//! columns come first and keep the order they were first seen in.

use crate::error::RenderError;
use serde_json::Value;
use std::fmt::{self, Debug};
use std::rc::Rc;

/// Cell renderer: maps a raw field value to its display value.
pub type Renderer = Rc<dyn Fn(&Value) -> Result<Value, RenderError>>;

/// Wrap an infallible closure as a [`Renderer`].
///
/// # Examples
///
/// ```
/// use jsontable::column::renderer;
/// use serde_json::json;
///
/// let upper = renderer(|v| match v.as_str() {
///     Some(s) => json!(s.to_uppercase()),
///     None => v.clone(),
/// });
/// assert_eq!(upper(&json!("hi")).unwrap(), json!("HI"));
/// ```
pub fn renderer<F>(f: F) -> Renderer
where
    F: Fn(&Value) -> Value + 'static,
{
    Rc::new(move |value: &Value| Ok(f(value)))
}

/// Wrap a fallible closure as a [`Renderer`].
pub fn try_renderer<F>(f: F) -> Renderer
where
    F: Fn(&Value) -> Result<Value, RenderError> + 'static,
{
    Rc::new(f)
}

/// A single column descriptor: name and optional renderer.
#[derive(Clone)]
pub struct ColumnSpec {
    name: String,
    renderer: Option<Renderer>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>) -> Self {
        ColumnSpec {
            name: name.into(),
            renderer: None,
        }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn renderer(&self) -> Option<&Renderer> {
        self.renderer.as_ref()
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Render a raw value for this column.
    ///
    /// Identity rendering is the default: without a renderer the raw value
    /// is returned unchanged.
    pub fn render(&self, raw: &Value) -> Result<Value, RenderError> {
        match self.renderer {
            Some(ref render) => render(raw),
            None => Ok(raw.clone()),
        }
    }
}

impl Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ColumnSpec {{ name: '{}', renderer: {} }}",
            self.name,
            self.has_renderer()
        )
    }
}

/// Position of `name` in `order`, or -1 when absent.
fn order_key(order: &[String], name: &str) -> isize {
    order
        .iter()
        .position(|o| o == name)
        .map(|i| i as isize)
        .unwrap_or(-1)
}

/// Sort column names by their priority in `order`.
///
/// The sort is stable, so names with equal keys (all names missing from
/// `order`) keep their input order. Duplicate input names are dropped after
/// their first occurrence.
pub fn order_columns<'a, I>(names: I, order: &[String]) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut columns: Vec<String> = Vec::new();
    for name in names {
        if !columns.iter().any(|c| c == name) {
            columns.push(name.to_string());
        }
    }
    columns.sort_by_key(|name| order_key(order, name));
    columns
}
