//! Selection Tracking for JsonTable
//!
//! The selection set maps identity values to row indices. Every call to
//! `Table::set_selected` produces a [`SelectionChange`], which is handed to
//! each registered observer. Tables with change tracking on also push it onto
//! their [`Changeset`].
//!
//! # Ordering
//!
//! The set is backed by an `IndexMap`: iteration follows the order in which
//! identities were first selected. Re-selecting an identity that is already
//! present keeps its position and replaces the row it points to.

use indexmap::IndexMap;
use std::hash::Hash;

/// The "change-selected" signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange<K> {
    /// Index of the row whose selection state was set
    pub row: usize,
    /// Identity of that row
    pub id: K,
    /// The state the row was set to
    pub selected: bool,
}

/// Callback invoked synchronously on every selection change.
pub type SelectionObserver<K> = Box<dyn FnMut(&SelectionChange<K>)>;

/// Mapping from identity value to the index of the selected row.
#[derive(Debug, Clone)]
pub struct SelectionSet<K: Clone + Eq + Hash> {
    selected: IndexMap<K, usize>,
}

impl<K: Clone + Eq + Hash> Default for SelectionSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> SelectionSet<K> {
    pub fn new() -> Self {
        SelectionSet {
            selected: IndexMap::new(),
        }
    }

    /// Insert `id -> row`. Returns the row previously stored under `id`.
    ///
    /// Two rows sharing an identity are conflated: the last one inserted wins.
    pub fn insert(&mut self, id: K, row: usize) -> Option<usize> {
        self.selected.insert(id, row)
    }

    /// Remove `id`, returning the row it pointed to.
    pub fn remove(&mut self, id: &K) -> Option<usize> {
        // shift_remove keeps the remaining entries in selection order
        self.selected.shift_remove(id)
    }

    pub fn contains(&self, id: &K) -> bool {
        self.selected.contains_key(id)
    }

    pub fn get(&self, id: &K) -> Option<usize> {
        self.selected.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Selected identities in selection order.
    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.selected.keys()
    }

    /// Selected row indices in selection order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.values().copied()
    }
}

/// Buffer of selection changes not yet consumed by the caller.
#[derive(Debug, Clone)]
pub struct Changeset<K> {
    changes: Vec<SelectionChange<K>>,
    /// Incremented each time the buffer is cleared or drained
    generation: u64,
}

impl<K> Default for Changeset<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Changeset<K> {
    pub fn new() -> Self {
        Changeset {
            changes: Vec::new(),
            generation: 0,
        }
    }

    pub fn push(&mut self, change: SelectionChange<K>) {
        self.changes.push(change);
    }

    /// Returns all changes since the last clear
    pub fn changes(&self) -> &[SelectionChange<K>] {
        &self.changes
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Clear all changes and increment generation
    pub fn clear(&mut self) {
        self.changes.clear();
        self.generation += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Drain changes, returning ownership and clearing the buffer
    pub fn drain(&mut self) -> Vec<SelectionChange<K>> {
        self.generation += 1;
        std::mem::take(&mut self.changes)
    }
}
