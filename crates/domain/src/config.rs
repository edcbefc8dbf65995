//! Configuration documents and their render-time field descriptors.
//!
//! A configuration document is a flat JSON object. Keys starting with `_` are
//! hidden from the console; `_comment_<key>` carries the help text shown next
//! to `<key>`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

const HIDDEN_PREFIX: char = '_';
const COMMENT_PREFIX: &str = "_comment_";

/// Input type a field is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Number,
    Text,
}

/// One row of a configuration table as handed to the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigField {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A whole configuration table as handed to the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTable {
    pub name: String,
    pub fields: Vec<ConfigField>,
}

/// A named configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub name: String,
    pub values: Map<String, Value>,
}

impl ConfigDocument {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Visible fields in document order.
    #[must_use]
    pub fn fields(&self) -> Vec<ConfigField> {
        self.values
            .iter()
            .filter(|(key, _)| !key.starts_with(HIDDEN_PREFIX))
            .map(|(key, value)| ConfigField {
                name: key.clone(),
                kind: if value.is_i64() || value.is_u64() {
                    FieldKind::Number
                } else {
                    FieldKind::Text
                },
                value: display_value(value),
                comment: self
                    .values
                    .get(&format!("{COMMENT_PREFIX}{key}"))
                    .map(display_value),
            })
            .collect()
    }

    #[must_use]
    pub fn render(&self) -> RenderedTable {
        RenderedTable {
            name: self.name.clone(),
            fields: self.fields(),
        }
    }

    /// Apply submitted form values, casting each back to the JSON kind the
    /// field already holds. Nothing is written unless every value casts.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] for keys that are not visible
    /// fields of the document, or [`ValidationError::InvalidValue`] when a
    /// value does not parse as the field's kind.
    pub fn apply(&mut self, submitted: &IndexMap<String, String>) -> Result<(), ValidationError> {
        let mut casted = Vec::with_capacity(submitted.len());
        for (key, raw) in submitted {
            let existing = self
                .values
                .get(key)
                .filter(|_| !key.starts_with(HIDDEN_PREFIX))
                .ok_or_else(|| ValidationError::UnknownField { field: key.clone() })?;
            casted.push((key.clone(), cast_like(existing, key, raw)?));
        }
        for (key, value) in casted {
            self.values.insert(key, value);
        }
        Ok(())
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn cast_like(existing: &Value, field: &str, raw: &str) -> Result<Value, ValidationError> {
    let invalid = |expected| ValidationError::InvalidValue {
        field: field.to_string(),
        value: raw.to_string(),
        expected,
    };
    let trimmed = raw.trim();
    match existing {
        Value::Number(n) if n.is_i64() || n.is_u64() => trimmed
            .parse::<i64>()
            .map(Value::from)
            .or_else(|_| trimmed.parse::<u64>().map(Value::from))
            .map_err(|_| invalid("integer")),
        Value::Number(_) => trimmed
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| invalid("number")),
        Value::Bool(_) => trimmed
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|_| invalid("boolean")),
        _ => Ok(Value::String(raw.to_string())),
    }
}
