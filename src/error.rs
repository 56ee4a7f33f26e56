//! JsonTable Errors
//!
//! Construction-time validation errors fail fast. Renderer errors propagate
//! out of `render()`/`refresh()` untouched: a single failing cell fails the
//! whole render.

/// Error returned by a column renderer while formatting a cell value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct RenderError {
    message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error type for table construction, rendering and selection.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Columns are inferred from the first record, so there must be one.
    #[error("empty data set: cannot infer columns without at least one record")]
    EmptyData,

    #[error("no identity function supplied; selection tracking requires `get_id`")]
    MissingIdentity,

    #[error("no render target supplied")]
    MissingTarget,

    #[error("row {index} out of range [0, {len})")]
    RowOutOfRange { index: usize, len: usize },

    /// A column renderer failed while rendering a cell.
    #[error("failed to render column '{column}' of row {row}: {source}")]
    Render {
        row: usize,
        column: String,
        #[source]
        source: RenderError,
    },

    #[error("element {index} of the data set is not a JSON object")]
    NotAnObject { index: usize },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TableError {
    pub(crate) fn render(row: usize, column: impl Into<String>, source: RenderError) -> Self {
        Self::Render {
            row,
            column: column.into(),
            source,
        }
    }

    /// Returns true for errors raised while validating construction options.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TableError::EmptyData | TableError::MissingIdentity | TableError::MissingTarget
        )
    }
}
