use super::*;

#[derive(Debug, Deserialize)]
struct Probe {
    #[serde(default, deserialize_with = "string_or_number")]
    text: String,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    maybe: Option<String>,
    #[serde(default, deserialize_with = "u32_from_string_or_number")]
    count: u32,
}

fn probe(value: serde_json::Value) -> Result<Probe, serde_json::Error> {
    serde_json::from_value(value)
}

#[test]
fn string_or_number_accepts_both_shapes() {
    assert_eq!(probe(serde_json::json!({ "text": "A1" })).unwrap().text, "A1");
    assert_eq!(probe(serde_json::json!({ "text": 12 })).unwrap().text, "12");
}

#[test]
fn string_or_number_maps_null_and_missing_to_empty() {
    assert_eq!(probe(serde_json::json!({ "text": null })).unwrap().text, "");
    assert_eq!(probe(serde_json::json!({})).unwrap().text, "");
}

#[test]
fn string_or_number_rejects_objects() {
    assert!(probe(serde_json::json!({ "text": { "nested": 1 } })).is_err());
}

#[test]
fn optional_string_or_number_keeps_null_as_none() {
    assert_eq!(probe(serde_json::json!({ "maybe": null })).unwrap().maybe, None);
    assert_eq!(probe(serde_json::json!({ "maybe": 3 })).unwrap().maybe, Some("3".to_owned()));
}

#[test]
fn u32_accepts_numeric_strings_and_integral_floats() {
    assert_eq!(probe(serde_json::json!({ "count": "12" })).unwrap().count, 12);
    assert_eq!(probe(serde_json::json!({ "count": " 4 " })).unwrap().count, 4);
    assert_eq!(probe(serde_json::json!({ "count": 3.0 })).unwrap().count, 3);
    assert_eq!(probe(serde_json::json!({ "count": "" })).unwrap().count, 0);
}

#[test]
fn u32_rejects_negative_and_fractional_values() {
    assert!(probe(serde_json::json!({ "count": -1 })).is_err());
    assert!(probe(serde_json::json!({ "count": 1.5 })).is_err());
    assert!(probe(serde_json::json!({ "count": "two" })).is_err());
}

#[test]
fn parse_count_reads_leading_digits() {
    assert_eq!(parse_count("12"), 12);
    assert_eq!(parse_count(" 7abc"), 7);
    assert_eq!(parse_count(""), 0);
    assert_eq!(parse_count("x1"), 0);
}

#[test]
fn same_id_ignores_numeric_formatting() {
    assert!(same_id("07", "7"));
    assert!(same_id(" 3 ", "3"));
    assert!(same_id("room-a", "room-a"));
    assert!(!same_id("2", "3"));
    assert!(!same_id("room-a", "room-b"));
}
