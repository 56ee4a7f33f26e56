//! JsonTable Row Implementation in Rust
//!
//! A Row wraps one record, its cells in column order, the identity produced
//! by the caller's `get_id`, and its selection state. Rows are built once
//! when the table is constructed; refreshing re-renders them without
//! rebuilding.
//!
//! The row holds no reference to its table. The table addresses rows by
//! index, and the rendered checkbox carries that index back.

use crate::error::{RenderError, TableError};
use crate::record::Record;
use crate::table::Schema;
use crate::view::{CellView, Checkbox, RowView};
use serde_json::Value;
use std::rc::Rc;

/// A raw (unrendered) cell of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub column: String,
    pub raw: Value,
}

/// Options controlling how a single row is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render a read-only duplicate without the selection checkbox
    pub copy: bool,
}

impl RenderOptions {
    pub fn copy() -> Self {
        RenderOptions { copy: true }
    }
}

#[derive(Debug, Clone)]
pub struct Row<K> {
    record: Rc<Record>,
    cells: Vec<Cell>,
    id: K,
    selected: bool,
}

impl<K: Clone> Row<K> {
    /// Build a row from a record, laying its cells out in schema order.
    ///
    /// Columns the record lacks get a `null` cell; keys the schema does not
    /// know about are ignored.
    pub fn new<F>(record: Rc<Record>, schema: &Schema, get_id: F) -> Self
    where
        F: Fn(&Record) -> K,
    {
        let cells = schema
            .columns()
            .iter()
            .map(|col| Cell {
                column: col.name().to_string(),
                raw: record.get(col.name()).cloned().unwrap_or(Value::Null),
            })
            .collect();
        let id = get_id(&*record);

        Row {
            record,
            cells,
            id,
            selected: false,
        }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    /// The original record, as supplied by the caller.
    pub fn record(&self) -> &Rc<Record> {
        &self.record
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Render one cell with its column's renderer, or unchanged if the
    /// column has none.
    pub fn render_cell(&self, cell: &Cell, schema: &Schema) -> Result<Value, RenderError> {
        match schema.column(&cell.column) {
            Some(col) => col.render(&cell.raw),
            None => Ok(cell.raw.clone()),
        }
    }

    /// Render this row. `index` is the row's position in its table and is
    /// stored in the checkbox so the UI can address it.
    pub fn render(
        &self,
        index: usize,
        schema: &Schema,
        options: RenderOptions,
    ) -> Result<RowView, TableError> {
        let checkbox = if options.copy {
            None
        } else {
            Some(Checkbox {
                row: index,
                checked: self.selected,
            })
        };

        let cells = self
            .cells
            .iter()
            .map(|cell| {
                self.render_cell(cell, schema)
                    .map(|value| CellView {
                        column: cell.column.clone(),
                        value,
                    })
                    .map_err(|e| TableError::render(index, cell.column.as_str(), e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RowView { checkbox, cells })
    }
}
