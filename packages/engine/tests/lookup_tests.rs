//! Lookup facade integration tests
//!
//! Exercise the three public operations end to end, from raw bytes.

use std::sync::Arc;
use std::thread;

use serde_json::json;
use spjson_engine::{JsonParser, LookupError, Value};

fn value(json: serde_json::Value) -> Value {
    Value::try_from(json).expect("fixture should convert")
}

fn bytes(json: &serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(json).expect("fixture should serialize")
}

const NO_SEGMENTS: &[&str] = &[];

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_schema_scenario_key_search() {
        init_logging();
        let parser = JsonParser::new();
        let data = br#"{"properties":{"allOf":{"items":1},"other":{"allOf":2}}}"#;

        let all_of = parser
            .get_by_key(data, "allOf", None)
            .expect("valid JSON should decode");
        assert_eq!(all_of, vec![value(json!({"items": 1})), Value::Number(2.0)]);

        let items = parser
            .get_by_key(data, "items", Some("allOf"))
            .expect("valid JSON should decode");
        assert_eq!(items, vec![Value::Number(1.0)]);
    }

    #[test]
    fn test_array_root_scenario() {
        let parser = JsonParser::new();
        let data = b"[10,20,30]";

        assert_eq!(parser.get_by_path(data, NO_SEGMENTS).expect("valid JSON"), None);
        assert_eq!(
            parser.get_by_path(data, &["[1]"]).expect("valid JSON"),
            Some(Value::Number(20.0))
        );
    }

    #[test]
    fn test_nested_path_scenario() {
        let parser = JsonParser::new();
        let found = parser
            .get_by_path(br#"{"a":{"b":[{"c":5}]}}"#, &["a", "b", "[0]", "c"])
            .expect("valid JSON");
        assert_eq!(found, Some(Value::Number(5.0)));
    }

    #[test]
    fn test_path_beyond_structure_is_not_found() {
        let parser = JsonParser::new();
        let data = br#"{"a":{"b":[{"c":5}]}}"#;

        for path in [
            vec!["a", "b", "[0]", "c", "d"],
            vec!["a", "b", "[1]"],
            vec!["a", "x", "b"],
            vec!["b"],
        ] {
            assert_eq!(
                parser.get_by_path(data, path.as_slice()).expect("valid JSON"),
                None,
                "path {path:?} should not resolve"
            );
        }
    }

    #[test]
    fn test_every_exact_chain_resolves() {
        let parser = JsonParser::new();
        let doc = json!({
            "properties": {
                "nc:Vehicle": {"oneOf": [{"$ref": "#/a"}, {"type": "array"}]},
                "count": 3,
                "flags": [true, false, null]
            }
        });
        let data = bytes(&doc);

        let cases: Vec<(Vec<&str>, serde_json::Value)> = vec![
            (vec!["properties", "nc:Vehicle", "oneOf", "[0]"], json!({"$ref": "#/a"})),
            (vec!["properties", "nc:Vehicle", "oneOf", "[1]", "type"], json!("array")),
            (vec!["properties", "count"], json!(3)),
            (vec!["properties", "flags", "[1]"], json!(false)),
            (vec!["properties", "flags", "[2]"], json!(null)),
        ];
        for (path, expected) in cases {
            assert_eq!(
                parser.get_by_path(&data, path.as_slice()).expect("valid JSON"),
                Some(value(expected)),
                "path {path:?}"
            );
        }
    }

    #[test]
    fn test_ungated_search_counts_every_occurrence() {
        let parser = JsonParser::new();
        let doc = json!({
            "id": 1,
            "children": [
                {"id": 2, "children": [{"id": 3}, {"name": "no id"}]},
                {"meta": {"id": 4}},
                [{"id": 5}]
            ]
        });

        let mut found: Vec<f64> = parser
            .get_by_key(&bytes(&doc), "id", None)
            .expect("valid JSON")
            .iter()
            .filter_map(Value::as_f64)
            .collect();
        found.sort_by(f64::total_cmp);
        assert_eq!(found, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_parent_match_precedes_descendants() {
        let parser = JsonParser::new();
        let data = br#"{"k": {"inner": {"k": {"k": 3}}}}"#;

        let found = parser.get_by_key(data, "k", None).expect("valid JSON");
        assert_eq!(
            found,
            vec![
                value(json!({"inner": {"k": {"k": 3}}})),
                value(json!({"k": 3})),
                Value::Number(3.0),
            ]
        );
    }

    #[test]
    fn test_gated_search_excludes_outside_matches() {
        let parser = JsonParser::new();
        let doc = json!({
            "name": "outside",
            "definitions": {"name": "gate-level", "a": {"name": "inside"}},
            "other": {"name": "also outside"}
        });

        let found = parser
            .get_by_key(&bytes(&doc), "name", Some("definitions"))
            .expect("valid JSON");
        let mut names: Vec<&str> = found.iter().filter_map(Value::as_str).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["gate-level", "inside"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let parser = JsonParser::new();
        let found = parser
            .get_by_key(br#"{"a": [1, 2, {"b": null}]}"#, "missing", None)
            .expect("valid JSON");
        assert!(found.is_empty());

        let gated = parser
            .get_by_key(br#"{"b": 1}"#, "b", Some("a"))
            .expect("valid JSON");
        assert!(gated.is_empty());
    }

    #[test]
    fn test_raw_is_an_echo() {
        let parser = JsonParser::new();
        for doc in [
            json!({"a": [1, 2.5, "x", null, true], "b": {}}),
            json!([]),
            json!("just a string"),
            json!(-12.75),
            json!(false),
            json!(null),
        ] {
            let raw = parser.get_raw(&bytes(&doc)).expect("valid JSON");
            assert_eq!(raw, value(doc.clone()));
            assert_eq!(serde_json::Value::from(raw), doc);
        }
    }

    #[test]
    fn test_malformed_input_fails_every_operation() {
        let parser = JsonParser::new();
        let data = br#"{"a":"#;

        let by_path = parser.get_by_path(data, &["a"]).expect_err("truncated");
        let by_key = parser.get_by_key(data, "a", None).expect_err("truncated");
        let raw = parser.get_raw(data).expect_err("truncated");

        assert!(by_path.is_decode());
        assert!(by_key.is_decode());
        assert!(matches!(raw, LookupError::Decode(_)));
        assert_eq!(parser.stats().snapshot().decode_errors, 3);
    }

    #[test]
    fn test_scalar_roots() {
        let parser = JsonParser::new();
        assert_eq!(parser.get_by_path(b"42", &["k"]).expect("valid JSON"), None);
        assert!(parser.get_by_key(b"42", "k", None).expect("valid JSON").is_empty());
        assert_eq!(parser.get_raw(b"42").expect("valid JSON"), Value::Number(42.0));
    }

    #[test]
    fn test_wrapper_never_aliases_real_keys() {
        let parser = JsonParser::new();
        // a key named "k" is an ordinary key here
        let data = br#"[{"k": "real"}]"#;
        assert_eq!(parser.get_by_path(data, &["k"]).expect("valid JSON"), None);
        assert_eq!(
            parser.get_by_path(data, &["[0]", "k"]).expect("valid JSON"),
            Some(Value::from("real"))
        );
        assert_eq!(
            parser.get_by_key(data, "k", None).expect("valid JSON"),
            vec![Value::from("real")]
        );
    }

    #[test]
    fn test_concurrent_callers_share_one_parser() {
        let parser = Arc::new(JsonParser::new());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let parser = Arc::clone(&parser);
                thread::spawn(move || {
                    let doc = json!({"n": n, "wrap": {"gate": {"n": n}}});
                    let data = bytes(&doc);
                    for _ in 0..50 {
                        let found = parser
                            .get_by_key(&data, "n", Some("gate"))
                            .expect("valid JSON");
                        assert_eq!(found, vec![Value::Number(f64::from(n))]);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("worker should not panic");
        }
        assert_eq!(parser.stats().snapshot().lookups, 400);
    }
}
