//! JsonTable Records and Identities
//!
//! A Record is an opaque, caller-owned mapping from field name to JSON value.
//! Key order is preserved (serde_json `preserve_order`), so the first record's
//! keys enumerate in the order they were written.

use crate::error::TableError;
use serde_json::Value;
use std::fmt;

/// One data item displayed as a table row.
pub type Record = serde_json::Map<String, Value>;

/// Parse a JSON array of objects into records.
///
/// # Examples
///
/// ```
/// use jsontable::records_from_json;
///
/// let records = records_from_json(r#"[{"id": 1, "name": "A"}]"#).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0]["name"], "A");
/// ```
pub fn records_from_json(json: &str) -> Result<Vec<Record>, TableError> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    records_from_values(values)
}

/// Convert already-parsed JSON values into records.
pub fn records_from_values(values: Vec<Value>) -> Result<Vec<Record>, TableError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Object(map) => Ok(map),
            _ => Err(TableError::NotAnObject { index }),
        })
        .collect()
}

/// Hashable identity taken from a scalar JSON field.
///
/// JSON values are not `Hash`, so selection keys read from a field are
/// normalized into this type. Floats are keyed by their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
}

impl FieldId {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => FieldId::Null,
            Value::Bool(b) => FieldId::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldId::Int(i),
                None => FieldId::Str(n.to_string()),
            },
            Value::String(s) => FieldId::Str(s.clone()),
            // Composite ids are keyed by their serialized form
            other => FieldId::Str(other.to_string()),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::Null => write!(f, "null"),
            FieldId::Bool(b) => write!(f, "{}", b),
            FieldId::Int(i) => write!(f, "{}", i),
            FieldId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for FieldId {
    fn from(value: i64) -> Self {
        FieldId::Int(value)
    }
}

impl From<&str> for FieldId {
    fn from(value: &str) -> Self {
        FieldId::Str(value.to_string())
    }
}

/// Identity extractor reading a single field of the record.
///
/// A record without the field yields `FieldId::Null`; two such records
/// collide in the selection set.
pub fn field_id(field: impl Into<String>) -> impl Fn(&Record) -> FieldId + 'static {
    let field = field.into();
    move |record: &Record| {
        record
            .get(&field)
            .map(FieldId::from_value)
            .unwrap_or(FieldId::Null)
    }
}
