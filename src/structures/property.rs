use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A property record as the server returns it. Only `id` is ever looked at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Property(Value);

impl Property {
    pub fn new(value: Value) -> Self {
        Property(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// Javascript truthiness of the `id` field. Missing, `null`, `false`, `0` and `""` are falsy.
    pub fn has_truthy_id(&self) -> bool {
        match self.id() {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// The id as a browser would print it, `42.0` gives `"42"` and `[1, 2]` gives `"1,2"`.
    pub fn rendered_id(&self) -> Option<String> {
        match self.id()? {
            Value::Null => None,
            other => Some(display_string(other)),
        }
    }

    /// Compares the id with an identifier taken from a route, `42` matches `"42"`.
    pub fn id_matches(&self, id: &str) -> bool {
        self.has_truthy_id() && self.rendered_id().map_or(false, |rendered| rendered == id)
    }
}

fn display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        // Holes and nulls print as empty strings when an array is joined.
        Value::Array(items) => items.iter().map(|item| match item {
            Value::Null => String::new(),
            other => display_string(other),
        }).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn display_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

impl From<Value> for Property {
    fn from(value: Value) -> Self {
        Property(value)
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
