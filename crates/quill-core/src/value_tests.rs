use indexmap::IndexMap;

use crate::value::{Kind, Value};

#[test]
fn kind_names() {
    assert_eq!(Value::Null.kind().name(), "null");
    assert_eq!(Value::Bool(true).kind().name(), "boolean");
    assert_eq!(Value::Number(1.5).kind().name(), "number");
    assert_eq!(Value::String("s".into()).kind().name(), "string");
    assert_eq!(Value::Array(vec![]).kind().name(), "array");
    assert_eq!(Value::Object(IndexMap::new()).kind().name(), "object");
}

#[test]
fn string_extraction() {
    assert_eq!(Value::from("abc").as_str(), Some("abc"));
    assert_eq!(Value::Number(1.0).as_str(), None);
    assert_eq!(Value::Bool(false).as_bool(), Some(false));
    assert!(Value::Null.is_null());
}

#[test]
fn from_json_round_trip() {
    let text = r#"{"a":[1,2.5,"x"],"b":null,"c":true}"#;
    let value = Value::from_json(text).unwrap();
    assert_eq!(value.kind(), Kind::Object);
    assert_eq!(serde_json::to_string(&value).unwrap(), text);
}

#[test]
fn integral_numbers_serialize_without_fraction() {
    let value = Value::Array(vec![Value::Number(3.0), Value::Number(-1.0), Value::Number(0.5)]);
    assert_eq!(serde_json::to_string(&value).unwrap(), "[3,-1,0.5]");
}

#[test]
fn object_preserves_field_order() {
    let mut fields = IndexMap::new();
    fields.insert("z".to_owned(), Value::from(1));
    fields.insert("a".to_owned(), Value::from(2));
    let value = Value::Object(fields);
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"z":1,"a":2}"#);
}
