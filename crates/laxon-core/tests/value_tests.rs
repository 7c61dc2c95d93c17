use std::collections::HashMap;

use laxon_core::Value;

// ============================================================================
// Conversions
// ============================================================================

#[test]
fn scalar_conversions() {
    assert_eq!(Value::from(()), Value::Void);
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(3u8), Value::Number(3.0));
    assert_eq!(Value::from(-7i64), Value::Number(-7.0));
    assert_eq!(Value::from(1.5f32), Value::Number(1.5));
    assert_eq!(Value::from('x'), Value::String("x".to_string()));
    assert_eq!(Value::from("abc"), Value::String("abc".to_string()));
    assert_eq!(Value::from("abc".to_string()), Value::from("abc"));
}

#[test]
fn option_conversions() {
    assert_eq!(Value::from(None::<bool>), Value::Void);
    assert_eq!(Value::from(Some(1.5f64)), Value::Number(1.5));
}

#[test]
fn sequence_conversions() {
    assert_eq!(
        Value::from(vec![1u8, 2, 3]),
        Value::Array(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
        ])
    );
    let flags: &[bool] = &[true, false];
    assert_eq!(
        Value::from(flags),
        Value::Array(vec![Value::Bool(true), Value::Bool(false)])
    );
}

#[test]
fn map_conversion() {
    let map = HashMap::from([("k".to_string(), 1.0f64)]);
    let value = Value::from(map);
    assert_eq!(value.as_object().unwrap()["k"], Value::Number(1.0));
}

#[test]
fn collecting_iterators() {
    let array: Value = (1..=3).map(Value::from).collect();
    assert_eq!(array.as_array().unwrap().len(), 3);

    let object: Value = [("a".to_string(), Value::Bool(true))].into_iter().collect();
    assert_eq!(object.as_object().unwrap()["a"], Value::Bool(true));
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn accessors_return_some_for_the_matching_case() {
    assert!(Value::Void.is_void());
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Number(2.5).as_f64(), Some(2.5));
    assert_eq!(Value::from("s").as_str(), Some("s"));
    assert_eq!(Value::Array(vec![]).as_array(), Some(&[][..]));
    assert!(Value::Object(HashMap::new()).as_object().is_some());
}

#[test]
fn accessors_return_none_across_cases() {
    assert!(!Value::Bool(true).is_void());
    assert_eq!(Value::Void.as_bool(), None);
    assert_eq!(Value::from("s").as_f64(), None);
    assert_eq!(Value::Number(1.0).as_str(), None);
    assert_eq!(Value::Void.as_array(), None);
    assert_eq!(Value::Bool(false).as_object(), None);
}

#[test]
fn default_is_void() {
    assert_eq!(Value::default(), Value::Void);
}

// ============================================================================
// Equality rules
// ============================================================================

#[test]
fn nan_is_not_equal_to_itself() {
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
}

#[test]
fn array_equality_is_order_sensitive() {
    let a = Value::from(vec![1.0, 2.0]);
    let b = Value::from(vec![2.0, 1.0]);
    assert_ne!(a, b);
}

#[test]
fn object_equality_ignores_member_order() {
    let a: Value = [
        ("x".to_string(), Value::Number(1.0)),
        ("y".to_string(), Value::Number(2.0)),
    ]
    .into_iter()
    .collect();
    let b: Value = [
        ("y".to_string(), Value::Number(2.0)),
        ("x".to_string(), Value::Number(1.0)),
    ]
    .into_iter()
    .collect();
    assert_eq!(a, b);
}

// ============================================================================
// FromStr
// ============================================================================

#[test]
fn from_str_parses() {
    let value: Value = "[1, 'two']".parse().unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert!("not laxon".parse::<Value>().is_err());
}
