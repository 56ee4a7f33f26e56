//! JsonTable - Selectable JSON Record Table
//!
//! Renders an ordered collection of JSON records as a table, tracks per-row
//! checkbox selection keyed by a caller-supplied identity function, and
//! notifies observers whenever the selection changes.
//!
//! Rendering produces a plain [`TableView`] value that a render target turns
//! into whatever its host UI needs (text, HTML, or a retained view tree).

pub mod column;
pub mod config;
pub mod error;
pub mod record;
pub mod row;
pub mod selection;
pub mod summary;
pub mod table;
pub mod target;
pub mod view;

pub use column::{order_columns, renderer, try_renderer, ColumnSpec, Renderer};
pub use config::{TableConfig, TableOptions};
pub use error::{RenderError, TableError};
pub use record::{field_id, records_from_json, records_from_values, FieldId, Record};
pub use row::{Cell, RenderOptions, Row};
pub use selection::{Changeset, SelectionChange, SelectionObserver, SelectionSet};
pub use summary::SelectionSummary;
pub use table::{Schema, Table, TableEvent, DEFAULT_SELECT_LABEL};
pub use target::{HtmlTarget, MemoryTarget, RenderTarget, SharedTarget, TextTarget};
pub use view::{CellView, Checkbox, RowView, TableView};
