//! JsonTable Table Implementation in Rust
//!
//! A Table owns an ordered list of rows, the column schema, and the
//! selection set (identity value -> selected row). It renders into a
//! [`RenderTarget`] and notifies observers whenever a row's selection state
//! is set.
//!
//! # Examples
//!
//! ```
//! use jsontable::{field_id, records_from_json, MemoryTarget, TableOptions};
//!
//! let data = records_from_json(r#"[{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]"#).unwrap();
//! let target = MemoryTarget::shared();
//!
//! let mut table = TableOptions::new()
//!     .data(data)
//!     .get_id(field_id("id"))
//!     .target(target.clone())
//!     .build()
//!     .unwrap();
//!
//! table.set_selected(0, true).unwrap();
//! assert_eq!(table.get_selected()[0]["name"], "A");
//! assert_eq!(target.borrow().replace_count(), 1);
//! ```

use crate::column::{order_columns, ColumnSpec, Renderer};
use crate::error::TableError;
use crate::record::Record;
use crate::row::{RenderOptions, Row};
use crate::selection::{Changeset, SelectionChange, SelectionObserver, SelectionSet};
use crate::summary::SelectionSummary;
use crate::target::RenderTarget;
use crate::view::{RowView, TableView};
use log::{debug, trace, warn};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

/// Label of the header cell above the selection checkboxes.
pub const DEFAULT_SELECT_LABEL: &str = "Select";

/// Ordered column descriptors.
///
/// A schema is fixed for the lifetime of a table: records with keys the
/// schema does not name do not grow it.
///
/// # Examples
///
/// ```
/// use jsontable::{ColumnSpec, Schema};
///
/// let schema = Schema::new(vec![ColumnSpec::new("id"), ColumnSpec::new("email")]);
///
/// assert_eq!(schema.len(), 2);
/// assert_eq!(schema.get_column_index("email"), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
}

impl Schema {
    /// Explicit schema: columns in exactly the given order.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Schema { columns }
    }

    /// Infer columns from a record's keys, sorted by `order`, attaching any
    /// renderers registered by column name.
    pub fn infer(record: &Record, order: &[String], renderers: &HashMap<String, Renderer>) -> Self {
        let columns = order_columns(record.keys().map(|k| k.as_str()), order)
            .into_iter()
            .map(|name| {
                let spec = ColumnSpec::new(name.as_str());
                match renderers.get(&name) {
                    Some(r) => spec.with_renderer(r.clone()),
                    None => spec,
                }
            })
            .collect();
        Schema { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }
}

/// Events a UI routes back into the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// The checkbox of `row` changed to `checked`
    CheckboxChanged { row: usize, checked: bool },
}

/// Selectable table of JSON records.
///
/// `K` is the identity type returned by the caller's `get_id`. Identities
/// must be unique and stable across the table's lifetime: rows sharing an
/// identity are conflated in the selection set.
pub struct Table<K: Clone + Eq + Hash + Debug> {
    schema: Schema,
    rows: Vec<Row<K>>,
    selection: SelectionSet<K>,
    /// Selection changes not yet drained by the caller
    changeset: Changeset<K>,
    /// Whether `changeset` records anything; off unless requested
    track_changes: bool,
    observers: Vec<SelectionObserver<K>>,
    target: Box<dyn RenderTarget>,
    summary: Option<SelectionSummary>,
    select_label: String,
}

impl<K: Clone + Eq + Hash + Debug> Table<K> {
    /// Build a table with columns inferred from `data[0]` and refresh it
    /// once.
    ///
    /// This is the plain constructor; [`crate::TableOptions`] adds explicit
    /// schemas, a selection summary and configuration.
    pub fn new<F>(
        data: Vec<Record>,
        order: Vec<String>,
        render: HashMap<String, Renderer>,
        target: Box<dyn RenderTarget>,
        get_id: F,
    ) -> Result<Self, TableError>
    where
        F: Fn(&Record) -> K + 'static,
    {
        let first = data.first().ok_or(TableError::EmptyData)?;
        let schema = Schema::infer(first, &order, &render);
        Self::from_parts(
            data,
            schema,
            &get_id,
            target,
            None,
            DEFAULT_SELECT_LABEL.to_string(),
        )
    }

    pub(crate) fn from_parts(
        data: Vec<Record>,
        schema: Schema,
        get_id: &dyn Fn(&Record) -> K,
        target: Box<dyn RenderTarget>,
        summary: Option<SelectionSummary>,
        select_label: String,
    ) -> Result<Self, TableError> {
        let rows: Vec<Row<K>> = data
            .into_iter()
            .map(|record| Row::new(Rc::new(record), &schema, get_id))
            .collect();

        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert(row.id()) {
                warn!(
                    "duplicate row identity {:?}; selections of these rows will be conflated",
                    row.id()
                );
            }
        }

        let mut table = Table {
            schema,
            rows,
            selection: SelectionSet::new(),
            changeset: Changeset::new(),
            track_changes: false,
            observers: Vec::new(),
            target,
            summary,
            select_label,
        };

        debug!(
            "built table with {} rows and columns {:?}",
            table.rows.len(),
            table.schema.names()
        );
        table.refresh()?;
        Ok(table)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Column names in display order.
    pub fn headers(&self) -> Vec<&str> {
        self.schema.names()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&Row<K>> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[Row<K>] {
        &self.rows
    }

    /// Index of the first row with the given identity.
    pub fn find_row(&self, id: &K) -> Option<usize> {
        self.rows.iter().position(|r| r.id() == id)
    }

    fn check_index(&self, index: usize) -> Result<(), TableError> {
        if index >= self.rows.len() {
            return Err(TableError::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        Ok(())
    }

    // ==================== Rendering ====================

    /// Build the full view: the select label and column headers, then one
    /// interactive row per row. Pure; the table is not modified.
    pub fn render(&self) -> Result<TableView, TableError> {
        let mut header = Vec::with_capacity(self.schema.len() + 1);
        header.push(self.select_label.clone());
        header.extend(self.schema.names().into_iter().map(str::to_string));

        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| row.render(i, &self.schema, RenderOptions::default()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TableView { header, rows })
    }

    /// Render a single row. With `options.copy` the row is a read-only
    /// duplicate without the checkbox.
    pub fn render_row(&self, index: usize, options: RenderOptions) -> Result<RowView, TableError> {
        self.check_index(index)?;
        self.rows[index].render(index, &self.schema, options)
    }

    /// Replace the render target's content with a fresh render.
    ///
    /// Selection changes are not drawn until the next refresh.
    pub fn refresh(&mut self) -> Result<(), TableError> {
        let view = self.render()?;
        debug!("refreshing table view ({} rows)", view.len());
        self.target.replace(&view);
        Ok(())
    }

    // ==================== Selection ====================

    /// Set the selection state of a row.
    ///
    /// Selecting inserts the row under its identity; deselecting removes
    /// that identity. Observers are notified on every call, even if the
    /// state did not change.
    ///
    /// If the selection summary fails to render, the change is rolled back
    /// and no observer is notified.
    pub fn set_selected(&mut self, index: usize, selected: bool) -> Result<(), TableError> {
        self.apply_selection(&[(index, selected)])
    }

    /// Flip a row's selection state. Returns the new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool, TableError> {
        self.check_index(index)?;
        let selected = !self.rows[index].is_selected();
        self.set_selected(index, selected)?;
        Ok(selected)
    }

    /// Set every row to `selected`, one change per row. All or nothing: a
    /// summary render failure leaves the selection untouched.
    pub fn set_all(&mut self, selected: bool) -> Result<(), TableError> {
        let changes: Vec<(usize, bool)> = (0..self.rows.len()).map(|i| (i, selected)).collect();
        self.apply_selection(&changes)
    }

    /// Deselect every currently selected row.
    pub fn clear_selection(&mut self) -> Result<(), TableError> {
        let changes: Vec<(usize, bool)> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_selected())
            .map(|(i, _)| (i, false))
            .collect();
        self.apply_selection(&changes)
    }

    /// Apply a batch of selection changes, redraw the summary once, then
    /// notify observers in order.
    fn apply_selection(&mut self, changes: &[(usize, bool)]) -> Result<(), TableError> {
        for &(index, _) in changes {
            self.check_index(index)?;
        }

        // Only a summary render can fail after the state is touched
        let saved = self.summary.as_ref().map(|_| {
            let flags: Vec<bool> = changes
                .iter()
                .map(|&(index, _)| self.rows[index].is_selected())
                .collect();
            (flags, self.selection.clone())
        });

        let mut applied = Vec::with_capacity(changes.len());
        for &(index, selected) in changes {
            let row = &mut self.rows[index];
            row.set_selected(selected);
            let id = row.id().clone();

            if selected {
                if let Some(previous) = self.selection.insert(id.clone(), index) {
                    if previous != index {
                        trace!("row {} replaces row {} under identity {:?}", index, previous, id);
                    }
                }
            } else {
                self.selection.remove(&id);
            }
            applied.push(SelectionChange {
                row: index,
                id,
                selected,
            });
        }

        if let Some(summary) = self.summary.as_mut() {
            match SelectionSummary::render(&self.rows, &self.selection, &self.schema) {
                Ok(view) => summary.replace(&view),
                Err(e) => {
                    if let Some((flags, selection)) = saved {
                        for (&(index, _), was) in changes.iter().zip(flags).rev() {
                            self.rows[index].set_selected(was);
                        }
                        self.selection = selection;
                    }
                    warn!("selection summary failed to render, change rolled back: {}", e);
                    return Err(e);
                }
            }
        }

        for change in applied {
            trace!(
                "change-selected: row {} ({:?}) -> {}",
                change.row,
                change.id,
                change.selected
            );
            for observer in self.observers.iter_mut() {
                observer(&change);
            }
            if self.track_changes {
                self.changeset.push(change);
            }
        }
        Ok(())
    }

    /// Route a UI event into the table.
    pub fn handle_event(&mut self, event: TableEvent) -> Result<(), TableError> {
        match event {
            TableEvent::CheckboxChanged { row, checked } => self.set_selected(row, checked),
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.rows.get(index).map(|r| r.is_selected()).unwrap_or(false)
    }

    /// The original records of the selected rows, in selection order.
    pub fn get_selected(&self) -> Vec<Rc<Record>> {
        self.selection
            .indices()
            .filter_map(|i| self.rows.get(i))
            .map(|row| row.record().clone())
            .collect()
    }

    pub fn selected_ids(&self) -> Vec<K> {
        self.selection.ids().cloned().collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// The selected records as a JSON array, e.g. for a bulk-action request
    /// body.
    pub fn selected_json(&self) -> Value {
        Value::Array(
            self.get_selected()
                .into_iter()
                .map(|record| Value::Object((*record).clone()))
                .collect(),
        )
    }

    // ==================== Observers & change log ====================

    /// Register a callback fired synchronously on every selection change.
    pub fn on_change<F>(&mut self, observer: F)
    where
        F: FnMut(&SelectionChange<K>) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Start or stop recording selection changes for [`Table::drain_changes`].
    ///
    /// Recording is off by default, since observers already see every
    /// change. Turning it off drops anything not yet drained.
    pub fn set_change_tracking(&mut self, enabled: bool) {
        self.track_changes = enabled;
        if !enabled && !self.changeset.is_empty() {
            self.changeset.clear();
        }
    }

    pub fn is_tracking_changes(&self) -> bool {
        self.track_changes
    }

    /// Selection changes since the last drain. Empty unless change tracking
    /// is on.
    pub fn changes(&self) -> &[SelectionChange<K>] {
        self.changeset.changes()
    }

    pub fn changeset_generation(&self) -> u64 {
        self.changeset.generation()
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.changeset.is_empty()
    }

    pub fn drain_changes(&mut self) -> Vec<SelectionChange<K>> {
        self.changeset.drain()
    }
}

impl<K: Clone + Eq + Hash + Debug> Debug for Table<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.schema.names())
            .field("rows", &self.rows.len())
            .field("selected", &self.selection.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{renderer, try_renderer};
    use crate::config::TableOptions;
    use crate::error::RenderError;
    use crate::record::{field_id, records_from_values, FieldId};
    use crate::target::{MemoryTarget, SharedTarget};
    use serde_json::json;
    use std::cell::{Cell, RefCell};

    fn records(values: Vec<Value>) -> Vec<Record> {
        records_from_values(values).unwrap()
    }

    fn people() -> Vec<Record> {
        records(vec![
            json!({"id": 1, "name": "A"}),
            json!({"id": 2, "name": "B"}),
            json!({"id": 3, "name": "C"}),
        ])
    }

    fn table(data: Vec<Record>) -> Table<FieldId> {
        Table::new(
            data,
            Vec::new(),
            HashMap::new(),
            Box::new(MemoryTarget::new()),
            field_id("id"),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_data_is_an_error() {
        let err = Table::new(
            Vec::new(),
            Vec::new(),
            HashMap::new(),
            Box::new(MemoryTarget::new()),
            field_id("id"),
        )
        .unwrap_err();
        assert!(matches!(err, TableError::EmptyData));
    }

    #[test]
    fn test_nothing_selected_after_construction() {
        let table = table(people());
        assert_eq!(table.len(), 3);
        assert!(table.get_selected().is_empty());
        assert!(!table.has_pending_changes());
        assert!((0..3).all(|i| !table.is_selected(i)));
    }

    #[test]
    fn test_construction_refreshes_once() {
        let target = MemoryTarget::shared();
        let _table = Table::new(
            people(),
            Vec::new(),
            HashMap::new(),
            Box::new(target.clone()),
            field_id("id"),
        )
        .unwrap();

        let target = target.borrow();
        assert_eq!(target.replace_count(), 1);
        let view = target.view().unwrap();
        assert_eq!(view.header, vec!["Select", "id", "name"]);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_headers_follow_order() {
        let data = records(vec![json!({"a": 1, "b": 2, "c": 3})]);
        let table = Table::new(
            data,
            vec!["b".to_string(), "a".to_string()],
            HashMap::new(),
            Box::new(MemoryTarget::new()),
            |_: &Record| 0,
        )
        .unwrap();

        let headers = table.headers();
        let b = headers.iter().position(|h| *h == "b").unwrap();
        let a = headers.iter().position(|h| *h == "a").unwrap();
        assert!(b < a);
        assert_eq!(headers.iter().filter(|h| **h == "c").count(), 1);
    }

    #[test]
    fn test_columns_fixed_by_first_record() {
        let data = records(vec![json!({"id": 1}), json!({"id": 2, "late": "x"})]);
        let table = table(data);
        assert_eq!(table.headers(), vec!["id"]);

        let view = table.render().unwrap();
        assert_eq!(view.rows[1].cells.len(), 1);
    }

    #[test]
    fn test_cell_renderer() {
        let mut render = HashMap::new();
        render.insert(
            "x".to_string(),
            renderer(|v| json!(v.as_str().unwrap_or_default().to_uppercase())),
        );
        let data = records(vec![json!({"x": "hi", "y": "lo"})]);
        let table = Table::new(
            data,
            Vec::new(),
            render,
            Box::new(MemoryTarget::new()),
            |_: &Record| 1,
        )
        .unwrap();

        let view = table.render().unwrap();
        assert_eq!(view.rows[0].value("x"), Some(&json!("HI")));
        assert_eq!(view.rows[0].value("y"), Some(&json!("lo")));
    }

    #[test]
    fn test_select_and_deselect() {
        let mut table = table(people());

        table.set_selected(1, true).unwrap();
        let selected = table.get_selected();
        assert_eq!(selected.len(), 1);
        assert_eq!(*selected[0], *json!({"id": 2, "name": "B"}).as_object().unwrap());

        table.set_selected(1, false).unwrap();
        assert!(table.get_selected().is_empty());
        assert!(!table.is_selected(1));
    }

    #[test]
    fn test_select_twice_is_idempotent_but_notifies_twice() {
        let mut table = table(people());
        table.set_change_tracking(true);
        let fired = Rc::new(RefCell::new(0));
        let counter = fired.clone();
        table.on_change(move |_| *counter.borrow_mut() += 1);

        table.set_selected(0, true).unwrap();
        table.set_selected(0, true).unwrap();

        assert_eq!(table.get_selected().len(), 1);
        assert_eq!(*fired.borrow(), 2);
        assert_eq!(table.changes().len(), 2);
    }

    #[test]
    fn test_deselect_unselected_still_notifies() {
        let mut table = table(people());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        table.on_change(move |change| log.borrow_mut().push(change.clone()));

        table.set_selected(2, false).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![SelectionChange {
                row: 2,
                id: FieldId::Int(3),
                selected: false,
            }]
        );
    }

    #[test]
    fn test_identity_collision_last_selected_wins() {
        let data = records(vec![
            json!({"id": 7, "name": "first"}),
            json!({"id": 7, "name": "second"}),
        ]);
        let mut table = table(data);

        table.set_selected(0, true).unwrap();
        table.set_selected(1, true).unwrap();

        let selected = table.get_selected();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0]["name"], "second");
    }

    #[test]
    fn test_identity_collision_deselect_drops_shared_entry() {
        let data = records(vec![
            json!({"id": 7, "name": "first"}),
            json!({"id": 7, "name": "second"}),
        ]);
        let mut table = table(data);

        table.set_selected(0, true).unwrap();
        table.set_selected(1, true).unwrap();
        table.set_selected(0, false).unwrap();

        // the entry is keyed by identity, so row 1 loses it too
        assert!(table.get_selected().is_empty());
        assert!(table.is_selected(1));
        assert!(!table.is_selected(0));
    }

    #[test]
    fn test_change_log_off_by_default() {
        let mut table = table(people());
        assert!(!table.is_tracking_changes());

        for i in 0..10_000 {
            table.set_selected(i % 3, i % 2 == 0).unwrap();
        }
        assert!(table.changes().is_empty());
        assert!(!table.has_pending_changes());
    }

    #[test]
    fn test_disabling_change_tracking_drops_pending() {
        let mut table = table(people());
        table.set_change_tracking(true);
        table.set_selected(0, true).unwrap();
        assert!(table.has_pending_changes());

        table.set_change_tracking(false);
        assert!(!table.has_pending_changes());
        table.set_selected(1, true).unwrap();
        assert!(table.changes().is_empty());
    }

    fn failing_summary_table(fail: Rc<Cell<bool>>) -> (Table<FieldId>, SharedTarget) {
        let summary = MemoryTarget::shared();
        let table = TableOptions::new()
            .data(people())
            .render(
                "name",
                try_renderer(move |v| {
                    if fail.get() {
                        Err(RenderError::new("renderer offline"))
                    } else {
                        Ok(v.clone())
                    }
                }),
            )
            .get_id(field_id("id"))
            .target(MemoryTarget::new())
            .selected(summary.clone())
            .track_changes(true)
            .build()
            .unwrap();
        (table, summary)
    }

    #[test]
    fn test_summary_failure_rolls_back_selection() {
        let fail = Rc::new(Cell::new(false));
        let (mut table, summary) = failing_summary_table(fail.clone());
        let fired = Rc::new(RefCell::new(0));
        let counter = fired.clone();
        table.on_change(move |_| *counter.borrow_mut() += 1);

        table.set_selected(2, true).unwrap();
        assert_eq!(summary.borrow().replace_count(), 1);

        fail.set(true);
        let err = table.set_selected(0, true).unwrap_err();
        assert!(matches!(err, TableError::Render { row: 2, .. }));

        assert!(!table.is_selected(0));
        assert!(table.is_selected(2));
        assert_eq!(table.selected_ids(), vec![FieldId::Int(3)]);
        assert_eq!(*fired.borrow(), 1);
        assert_eq!(table.changes().len(), 1);
        assert_eq!(summary.borrow().replace_count(), 1);
    }

    #[test]
    fn test_set_all_is_all_or_nothing() {
        let fail = Rc::new(Cell::new(false));
        let (mut table, summary) = failing_summary_table(fail.clone());

        fail.set(true);
        assert!(table.set_all(true).is_err());
        assert_eq!(table.selected_count(), 0);
        assert!((0..3).all(|i| !table.is_selected(i)));
        assert!(!table.has_pending_changes());
        assert_eq!(summary.borrow().replace_count(), 0);

        fail.set(false);
        table.set_all(true).unwrap();
        assert_eq!(table.selected_count(), 3);
        // one summary redraw per batch
        assert_eq!(summary.borrow().replace_count(), 1);
        assert_eq!(table.drain_changes().len(), 3);
    }

    #[test]
    fn test_selection_order_is_selection_order() {
        let mut table = table(people());
        table.set_selected(2, true).unwrap();
        table.set_selected(0, true).unwrap();
        assert_eq!(table.selected_ids(), vec![FieldId::Int(3), FieldId::Int(1)]);
    }

    #[test]
    fn test_out_of_range() {
        let mut table = table(people());
        let err = table.set_selected(3, true).unwrap_err();
        assert!(matches!(err, TableError::RowOutOfRange { index: 3, len: 3 }));
        assert!(table.toggle(10).is_err());
        assert!(!table.has_pending_changes());
    }

    #[test]
    fn test_toggle_set_all_and_clear() {
        let mut table = table(people());
        table.set_change_tracking(true);

        assert!(table.toggle(1).unwrap());
        assert!(!table.toggle(1).unwrap());

        table.set_all(true).unwrap();
        assert_eq!(table.selected_count(), 3);

        table.clear_selection().unwrap();
        assert_eq!(table.selected_count(), 0);
        // two toggles, three selects, three deselects
        assert_eq!(table.drain_changes().len(), 8);
        assert!(!table.has_pending_changes());
        assert_eq!(table.changeset_generation(), 1);
    }

    #[test]
    fn test_handle_event() {
        let mut table = table(people());
        table
            .handle_event(TableEvent::CheckboxChanged {
                row: 0,
                checked: true,
            })
            .unwrap();
        assert!(table.is_selected(0));
    }

    #[test]
    fn test_selection_visible_after_refresh_only() {
        let target = MemoryTarget::shared();
        let mut table = Table::new(
            people(),
            Vec::new(),
            HashMap::new(),
            Box::new(target.clone()),
            field_id("id"),
        )
        .unwrap();

        table.set_selected(0, true).unwrap();
        let stale = target.borrow().view().unwrap().rows[0].checkbox.unwrap();
        assert!(!stale.checked);

        table.refresh().unwrap();
        let fresh = target.borrow().view().unwrap().rows[0].checkbox.unwrap();
        assert!(fresh.checked);
        assert_eq!(target.borrow().replace_count(), 2);
    }

    #[test]
    fn test_renderer_error_fails_whole_render() {
        let mut render = HashMap::new();
        render.insert(
            "n".to_string(),
            try_renderer(|v| match v.as_i64() {
                Some(n) if n < 0 => Err(RenderError::new("negative")),
                _ => Ok(v.clone()),
            }),
        );
        let data = records(vec![json!({"n": 1}), json!({"n": -1})]);

        let err = Table::new(data, Vec::new(), render, Box::new(MemoryTarget::new()), |r: &Record| {
            r["n"].as_i64().unwrap_or_default()
        })
        .unwrap_err();
        assert!(matches!(err, TableError::Render { row: 1, .. }));
    }

    #[test]
    fn test_selected_json() {
        let mut table = table(people());
        table.set_selected(0, true).unwrap();
        assert_eq!(table.selected_json(), json!([{"id": 1, "name": "A"}]));
    }

    #[test]
    fn test_render_row_copy() {
        let table = table(people());
        let row = table.render_row(2, RenderOptions::copy()).unwrap();
        assert!(row.is_copy());
        assert_eq!(row.value("name"), Some(&json!("C")));
        assert!(table.render_row(5, RenderOptions::default()).is_err());
    }

    #[test]
    fn test_find_row() {
        let table = table(people());
        assert_eq!(table.find_row(&FieldId::Int(2)), Some(1));
        assert_eq!(table.find_row(&FieldId::Int(9)), None);
    }
}
