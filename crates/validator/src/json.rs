//! `serde_json` interop.
//!
//! Validating decoded JSON bodies is the common case, so a
//! [`serde_json::Value`] converts straight into a [`Value`]:
//!
//! | JSON     | `Value`                                            |
//! |----------|----------------------------------------------------|
//! | `null`   | `Absent`                                           |
//! | boolean  | `Bool`                                             |
//! | number   | `Uint` if it fits, else `Int`, else `Float`        |
//! | string   | `Text`                                             |
//! | array    | `List`                                             |
//! | object   | `Map` (key order preserved)                        |
//!
//! # Examples
//!
//! ```
//! use fieldcheck::Session;
//! use serde_json::json;
//!
//! let body = json!({ "name": "", "tags": ["a", "b", "c"], "age": 17 });
//!
//! let mut session = Session::new();
//! session.chain("name", body["name"].clone()).required();
//! session.chain("tags", body["tags"].clone()).max_count(2);
//! session.chain("age", body["age"].clone()).min(18);
//!
//! let errors = session.finish().unwrap_err();
//! assert_eq!(errors.to_json()["tags"]["tag"], "max_count");
//! ```

use crate::foundation::{ValidationErrors, Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_u64().map_or_else(
                || {
                    n.as_i64()
                        .map_or_else(|| Value::Float(n.as_f64().unwrap_or(f64::NAN)), Value::Int)
                },
                Value::Uint,
            ),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Value::from(value.clone())
    }
}

impl ValidationErrors {
    /// Serializes the aggregate as a JSON object keyed by field, in
    /// first-seen order.
    ///
    /// Each entry carries `field`, `message`, `tag`, `value` and, when
    /// present, `params`.
    pub fn to_json(&self) -> serde_json::Value {
        // Every key is a string and every leaf a JSON-representable scalar.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
