//! Selection Summary for JsonTable
//!
//! Optional secondary target showing the currently selected rows. It is
//! re-rendered after every selection change with read-only copies of the
//! selected rows (no checkbox column), in selection order. A batch such as
//! `Table::set_all` redraws it once.

use crate::error::TableError;
use crate::row::{RenderOptions, Row};
use crate::selection::SelectionSet;
use crate::table::Schema;
use crate::target::RenderTarget;
use crate::view::TableView;
use std::hash::Hash;

pub struct SelectionSummary {
    target: Box<dyn RenderTarget>,
}

impl SelectionSummary {
    pub fn new(target: Box<dyn RenderTarget>) -> Self {
        SelectionSummary { target }
    }

    /// Build the summary view: the column headers followed by a copy of
    /// each selected row.
    pub fn render<K: Clone + Eq + Hash>(
        rows: &[Row<K>],
        selection: &SelectionSet<K>,
        schema: &Schema,
    ) -> Result<TableView, TableError> {
        let header = schema.names().into_iter().map(str::to_string).collect();
        let rows = selection
            .indices()
            .filter_map(|i| rows.get(i).map(|row| (i, row)))
            .map(|(i, row)| row.render(i, schema, RenderOptions::copy()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TableView { header, rows })
    }

    pub fn refresh<K: Clone + Eq + Hash>(
        &mut self,
        rows: &[Row<K>],
        selection: &SelectionSet<K>,
        schema: &Schema,
    ) -> Result<(), TableError> {
        let view = Self::render(rows, selection, schema)?;
        self.replace(&view);
        Ok(())
    }

    /// Hand an already rendered summary view to the target.
    pub fn replace(&mut self, view: &TableView) {
        self.target.replace(view);
    }
}

impl std::fmt::Debug for SelectionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SelectionSummary { .. }")
    }
}
