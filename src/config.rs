//! JsonTable Options and Configuration
//!
//! [`TableOptions`] is the builder behind every table. [`TableConfig`] is the
//! plain-data part of it (column order, select label, identity field) and can
//! be loaded from JSON or from the environment.

use crate::column::{ColumnSpec, Renderer};
use crate::error::TableError;
use crate::record::{field_id, FieldId, Record};
use crate::summary::SelectionSummary;
use crate::table::{Schema, Table, DEFAULT_SELECT_LABEL};
use crate::target::RenderTarget;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Environment variable holding a comma-separated column order.
pub const ENV_ORDER: &str = "JSONTABLE_ORDER";
/// Environment variable overriding the select column label.
pub const ENV_SELECT_LABEL: &str = "JSONTABLE_SELECT_LABEL";

/// Serializable table settings.
///
/// # Examples
///
/// ```
/// use jsontable::TableConfig;
///
/// let config = TableConfig::from_json(r#"{"order": ["name", "id"], "id_field": "id"}"#).unwrap();
/// assert_eq!(config.order, vec!["name", "id"]);
/// assert_eq!(config.select_label, "Select");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Column priority list
    pub order: Vec<String>,
    /// Header label of the checkbox column
    pub select_label: String,
    /// Field holding each record's identity, for `FieldId` tables
    pub id_field: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            order: Vec::new(),
            select_label: DEFAULT_SELECT_LABEL.to_string(),
            id_field: None,
        }
    }
}

impl TableConfig {
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read `JSONTABLE_ORDER` and `JSONTABLE_SELECT_LABEL`; unset variables
    /// keep their defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = TableConfig::default();
        if let Some(order) = var(ENV_ORDER) {
            config.order = order
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(label) = var(ENV_SELECT_LABEL) {
            config.select_label = label;
        }
        config
    }
}

/// Builder for [`Table`].
///
/// `get_id` and `target` are required. Without an explicit `columns` schema
/// the columns are inferred from the first record, which then must exist.
pub struct TableOptions<K> {
    data: Vec<Record>,
    order: Vec<String>,
    render: HashMap<String, Renderer>,
    columns: Option<Vec<ColumnSpec>>,
    get_id: Option<Box<dyn Fn(&Record) -> K>>,
    target: Option<Box<dyn RenderTarget>>,
    selected: Option<Box<dyn RenderTarget>>,
    select_label: String,
    track_changes: bool,
}

impl<K> Default for TableOptions<K> {
    fn default() -> Self {
        TableOptions {
            data: Vec::new(),
            order: Vec::new(),
            render: HashMap::new(),
            columns: None,
            get_id: None,
            target: None,
            selected: None,
            select_label: DEFAULT_SELECT_LABEL.to_string(),
            track_changes: false,
        }
    }
}

impl<K: Clone + Eq + Hash + Debug> TableOptions<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(mut self, data: Vec<Record>) -> Self {
        self.data = data;
        self
    }

    pub fn order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Register a renderer for a column.
    pub fn render(mut self, column: impl Into<String>, renderer: Renderer) -> Self {
        self.render.insert(column.into(), renderer);
        self
    }

    /// Use an explicit schema instead of inferring one from the first record.
    ///
    /// Renderers registered with [`TableOptions::render`] still apply to
    /// columns that do not carry their own.
    pub fn columns(mut self, columns: Vec<ColumnSpec>) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn get_id<F>(mut self, get_id: F) -> Self
    where
        F: Fn(&Record) -> K + 'static,
    {
        self.get_id = Some(Box::new(get_id));
        self
    }

    pub fn target(mut self, target: impl RenderTarget + 'static) -> Self {
        self.target = Some(Box::new(target));
        self
    }

    /// Secondary target receiving a summary of the selected rows after every
    /// selection change.
    pub fn selected(mut self, target: impl RenderTarget + 'static) -> Self {
        self.selected = Some(Box::new(target));
        self
    }

    pub fn select_label(mut self, label: impl Into<String>) -> Self {
        self.select_label = label.into();
        self
    }

    /// Record selection changes for [`Table::drain_changes`]. Off by default.
    pub fn track_changes(mut self, enabled: bool) -> Self {
        self.track_changes = enabled;
        self
    }

    /// Apply column order and select label from a config.
    pub fn config(mut self, config: &TableConfig) -> Self {
        self.order = config.order.clone();
        self.select_label = config.select_label.clone();
        self
    }

    fn schema(&self) -> Result<Schema, TableError> {
        match self.columns {
            Some(ref columns) => Ok(Schema::new(
                columns
                    .iter()
                    .map(|col| match self.render.get(col.name()) {
                        Some(r) if !col.has_renderer() => col.clone().with_renderer(r.clone()),
                        _ => col.clone(),
                    })
                    .collect(),
            )),
            None => {
                let first = self.data.first().ok_or(TableError::EmptyData)?;
                Ok(Schema::infer(first, &self.order, &self.render))
            }
        }
    }

    /// Validate the options, build the rows and refresh the target once.
    pub fn build(self) -> Result<Table<K>, TableError> {
        let schema = self.schema()?;
        let get_id = self.get_id.ok_or(TableError::MissingIdentity)?;
        let target = self.target.ok_or(TableError::MissingTarget)?;
        let summary = self.selected.map(SelectionSummary::new);

        let mut table = Table::from_parts(
            self.data,
            schema,
            &*get_id,
            target,
            summary,
            self.select_label,
        )?;
        table.set_change_tracking(self.track_changes);
        Ok(table)
    }
}

impl TableOptions<FieldId> {
    /// Apply a config, also installing `field_id(id_field)` as the identity
    /// function when the config names one.
    pub fn with_config(self, config: &TableConfig) -> Self {
        let options = self.config(config);
        match config.id_field {
            Some(ref field) => options.get_id(field_id(field.as_str())),
            None => options,
        }
    }
}
