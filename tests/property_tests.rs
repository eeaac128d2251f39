//! Property-based tests: round-trip guarantees over generated trees.
//!
//! Trees are generated in "canonical" form — each integer holds the
//! narrowest width the parser itself would pick (non-negative values
//! unsigned, i32 only for negatives, 64-bit widths only past the 32-bit
//! range) and doubles sit on a milli-grid that fixed 15-digit formatting
//! reproduces exactly — so round-trips can be checked with plain equality.

use bijson::{parse, parse_str, to_binary, to_text, to_text_pretty, Format, Value};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (i32::MIN..0i32).prop_map(Value::Int),
        any::<u32>().prop_map(Value::UInt),
        (i64::MIN..i64::from(i32::MIN)).prop_map(Value::Int64),
        (u64::from(u32::MAX) + 1..=u64::MAX).prop_map(Value::UInt64),
        (-1_000_000i64..1_000_000i64).prop_map(|n| Value::Double(n as f64 / 1000.0)),
        ".*".prop_map(Value::String),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{0,8}", inner), 0..6)
                .prop_map(|entries| entries.into_iter().collect::<bijson::JsonMap>().into()),
        ]
    })
}

/// Builder-constructible roots: objects or arrays.
fn container_root() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(tree(), 0..6).prop_map(Value::Array),
        prop::collection::vec(("[a-z]{0,8}", tree()), 0..6)
            .prop_map(|entries| entries.into_iter().collect::<bijson::JsonMap>().into()),
    ]
}

/// Scalars the binary format can carry without narrowing failures.
fn binary_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (i32::MIN..0i32).prop_map(Value::Int),
        (0u32..=i32::MAX as u32).prop_map(Value::UInt),
        (i64::MIN..i64::from(i32::MIN)).prop_map(Value::Int64),
        (u64::from(u32::MAX) + 1..=u64::MAX).prop_map(Value::UInt64),
        (-1_000_000i64..1_000_000i64).prop_map(|n| Value::Double(n as f64 / 1000.0)),
        ".*".prop_map(Value::String),
    ]
}

/// Binary-encodable roots: an object whose descendants are scalars and
/// arrays (the format has no nested-object records).
fn binary_root() -> impl Strategy<Value = Value> {
    let element = binary_scalar().prop_recursive(3, 16, 5, |inner| {
        prop::collection::vec(inner, 0..5).prop_map(Value::Array)
    });
    prop::collection::vec(("[a-z]{1,8}", element), 0..6)
        .prop_map(|entries| entries.into_iter().collect::<bijson::JsonMap>().into())
}

proptest! {
    #[test]
    fn prop_text_roundtrip(value in container_root()) {
        let text = to_text(&value);
        let back = parse_str(&text).unwrap();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn prop_pretty_preserves_semantics(value in container_root()) {
        let compact = parse_str(&to_text(&value)).unwrap();
        let pretty = parse_str(&to_text_pretty(&value)).unwrap();
        prop_assert_eq!(pretty, compact);
    }

    #[test]
    fn prop_text_idempotent(value in container_root()) {
        let first = to_text(&value);
        let second = to_text(&parse_str(&first).unwrap());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_output_is_ascii(value in container_root()) {
        prop_assert!(to_text(&value).is_ascii());
    }

    #[test]
    fn prop_binary_roundtrip(value in binary_root()) {
        let bytes = to_binary(&value).unwrap();
        let back = parse(&bytes, Format::Binary).unwrap();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn prop_string_escape_roundtrip(content in ".*") {
        let mut map = bijson::JsonMap::new();
        map.insert("s".to_string(), Value::String(content.clone()));
        let value = Value::Object(map);
        let back = parse_str(&to_text(&value)).unwrap();
        prop_assert_eq!(back.get("s").and_then(Value::as_str), Some(content.as_str()));
    }

    #[test]
    fn prop_singleton_char_roundtrip(ch in any::<char>()) {
        let mut map = bijson::JsonMap::new();
        map.insert("c".to_string(), Value::String(ch.to_string()));
        let value = Value::Object(map);
        let back = parse_str(&to_text(&value)).unwrap();
        prop_assert_eq!(back, value);
    }
}
