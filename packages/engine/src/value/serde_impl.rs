//! `serde` support for [`Value`]

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::Value;
use super::conversions::exact_integer;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, member) in map {
                    out.serialize_entry(key, member)?;
                }
                out.end()
            }
            Value::Array(items) => {
                let mut out = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    out.serialize_element(item)?;
                }
                out.end()
            }
            Value::String(text) => serializer.serialize_str(text),
            Value::Number(n) => match exact_integer(*n) {
                Some(int) => serializer.serialize_i64(int),
                None => serializer.serialize_f64(*n),
            },
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Null => serializer.serialize_unit(),
        }
    }
}

// Decoding goes through serde_json's own value type so that every path into
// the model shares one conversion.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Value::try_from(json).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_text() {
        let value: Value =
            serde_json::from_str(r#"{"a": [1, "two", null]}"#).expect("valid JSON should decode");
        let items = value.get("a").and_then(Value::as_array).expect("array member");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], Value::Number(1.0));
        assert_eq!(items[1], Value::from("two"));
        assert!(items[2].is_null());
    }

    #[test]
    fn test_serialize_non_finite_as_null() {
        let text = serde_json::to_string(&Value::Number(f64::NAN)).expect("serializes");
        assert_eq!(text, "null");
    }

    #[test]
    fn test_serialize_fractional_number() {
        let text = serde_json::to_string(&Value::Number(-0.5)).expect("serializes");
        assert_eq!(text, "-0.5");
    }
}
