use crate::*;
use serde_json::json;

#[test]
fn display_matches_template_substitution_rules() {
    assert_eq!(AttributeValue::Null.to_string(), "");
    assert_eq!(AttributeValue::Bool(true).to_string(), "True");
    assert_eq!(AttributeValue::Bool(false).to_string(), "False");
    assert_eq!(AttributeValue::Number(1200.0).to_string(), "1200");
    assert_eq!(AttributeValue::Number(0.1).to_string(), "0.1");
    assert_eq!(AttributeValue::Number(-2.5).to_string(), "-2.5");
    assert_eq!(AttributeValue::from("Park").to_string(), "Park");
    assert_eq!(
        AttributeValue::from_epoch_millis(0).to_string(),
        "01/01/1970 00:00:00"
    );
}

#[test]
fn numeric_conversion_falls_back_to_zero() {
    assert_eq!(AttributeValue::from("1,234.5").to_f64(), 1234.5);
    assert_eq!(AttributeValue::from("  42 ").to_f64(), 42.0);
    assert_eq!(AttributeValue::from("abc").to_f64(), 0.0);
    assert_eq!(AttributeValue::from("").to_f64(), 0.0);
    assert_eq!(AttributeValue::from("NaN").try_f64(), None);
    assert_eq!(AttributeValue::from("inf").try_f64(), None);
    assert_eq!(AttributeValue::Bool(true).to_f64(), 1.0);
    assert_eq!(AttributeValue::Null.try_f64(), None);
    assert_eq!(AttributeValue::from_epoch_millis(1_000).try_f64(), None);
}

#[test]
fn attribute_map_from_json_keeps_order_and_types() {
    let attrs = AttributeMap::from_json_value(&json!({
        "NAME": "Park",
        "POP": 1200,
        "OPEN": true,
        "NOTE": null,
        "TAGS": ["a", "b"]
    }))
    .unwrap();
    let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["NAME", "POP", "OPEN", "NOTE", "TAGS"]);
    assert_eq!(attrs.get("POP"), Some(&AttributeValue::Number(1200.0)));
    assert_eq!(attrs.get("OPEN"), Some(&AttributeValue::Bool(true)));
    assert!(attrs.get("NOTE").is_some_and(AttributeValue::is_null));
    assert_eq!(
        attrs.get("TAGS").and_then(AttributeValue::as_text),
        Some(r#"["a","b"]"#)
    );
}

#[test]
fn attribute_map_rejects_non_objects() {
    let err = AttributeMap::from_json_str("[1, 2]").unwrap_err();
    assert!(matches!(err, Error::InvalidAttributes { found: "an array" }));
    assert!(matches!(
        AttributeMap::from_json_str("{").unwrap_err(),
        Error::Json(_)
    ));
}

#[test]
fn attribute_values_serialize_back_to_json() {
    let attrs: AttributeMap = [
        ("A", AttributeValue::Number(1.5)),
        ("B", AttributeValue::Null),
        ("C", AttributeValue::from_epoch_millis(0)),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        serde_json::to_value(&attrs).unwrap(),
        json!({ "A": 1.5, "B": null, "C": "1970-01-01T00:00:00+00:00" })
    );
}
