//! JsonTable View Tree
//!
//! `Table::render()` produces a [`TableView`]: a plain value describing the
//! header row and one [`RowView`] per row. Views are serializable so a host
//! UI can consume them directly, and can be flattened to text or HTML.

use comfy_table::Table as Grid;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write;

/// Grid style for [`TableView::to_text`]: no outer border, `|` between
/// columns, `-` under the header.
const TEXT_PRESET: &str = "     -| |          ";

/// Interactive selection cell leading a non-copy row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Checkbox {
    /// Index of the row the checkbox toggles
    pub row: usize,
    pub checked: bool,
}

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    pub column: String,
    pub value: Value,
}

/// One rendered row. `checkbox` is `None` for read-only copies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub checkbox: Option<Checkbox>,
    pub cells: Vec<CellView>,
}

impl RowView {
    pub fn is_copy(&self) -> bool {
        self.checkbox.is_none()
    }

    /// Rendered value of `column`, if the row has that column.
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|c| c.column == column)
            .map(|c| &c.value)
    }
}

/// A fully assembled table: header labels followed by rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableView {
    pub header: Vec<String>,
    pub rows: Vec<RowView>,
}

/// Display text for a cell value: strings unquoted, null empty.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Literal `|` would read as a column break in the text grid.
fn text_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

impl TableView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row cells as display strings, with the checkbox flattened to
    /// `[x]`/`[ ]` when present.
    fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let mut line = Vec::with_capacity(row.cells.len() + 1);
                if let Some(checkbox) = row.checkbox {
                    line.push(String::from(if checkbox.checked { "[x]" } else { "[ ]" }));
                }
                line.extend(row.cells.iter().map(|c| text_cell(&display_value(&c.value))));
                line
            })
            .collect()
    }

    /// Render as an aligned plain-text grid: ` | ` between columns and a
    /// dashed rule under the header.
    ///
    /// Widths are terminal display widths, so wide characters line up.
    /// Values containing newlines span several lines within their row.
    pub fn to_text(&self) -> String {
        let mut grid = Grid::new();
        grid.load_preset(TEXT_PRESET);
        grid.set_header(self.header.iter().map(|h| text_cell(h)).collect::<Vec<_>>());
        for line in self.text_rows() {
            grid.add_row(line);
        }

        let mut out = String::new();
        for line in grid.to_string().lines() {
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }

    /// Render as an HTML `<table>`. Interactive rows get a checkbox input
    /// carrying its row index in `data-row`.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<table>\n<thead><tr>");
        for label in &self.header {
            let _ = write!(out, "<th>{}</th>", escape_html(label));
        }
        out.push_str("</tr></thead>\n<tbody>\n");

        for row in &self.rows {
            out.push_str("<tr>");
            if let Some(checkbox) = row.checkbox {
                let _ = write!(
                    out,
                    "<td><input type=\"checkbox\" data-row=\"{}\"{}></td>",
                    checkbox.row,
                    if checkbox.checked { " checked" } else { "" }
                );
            }
            for cell in &row.cells {
                let _ = write!(out, "<td>{}</td>", escape_html(&display_value(&cell.value)));
            }
            out.push_str("</tr>\n");
        }

        out.push_str("</tbody>\n</table>\n");
        out
    }
}
