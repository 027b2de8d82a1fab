//! Conversions between [`Value`] and `serde_json::Value`

use super::{Object, Value};
use crate::error::LookupError;

/// Largest magnitude at which every integer is exactly representable in an f64
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl TryFrom<serde_json::Value> for Value {
    type Error = LookupError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match json {
            serde_json::Value::Object(map) => {
                let mut object = Object::with_capacity(map.len());
                for (key, member) in map {
                    object.insert(key, Value::try_from(member)?);
                }
                Value::Object(object)
            }
            serde_json::Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            serde_json::Value::String(text) => Value::String(text),
            serde_json::Value::Number(number) => {
                let n = number
                    .as_f64()
                    .ok_or_else(|| LookupError::unrecognized_type(format!("number {number}")))?;
                Value::Number(n)
            }
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Null => Value::Null,
        })
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(key, member)| (key, serde_json::Value::from(member)))
                    .collect(),
            ),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::String(text) => serde_json::Value::String(text),
            Value::Number(n) => number_to_json(n),
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Null => serde_json::Value::Null,
        }
    }
}

/// The integer an f64 holds exactly, if any
#[allow(clippy::cast_possible_truncation)]
pub(super) fn exact_integer(n: f64) -> Option<i64> {
    (n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER).then(|| n as i64)
}

/// Integral values come back as integers; non-finite values have no JSON form
fn number_to_json(n: f64) -> serde_json::Value {
    if let Some(int) = exact_integer(n) {
        return serde_json::Value::from(int);
    }
    serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::String(text)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}
