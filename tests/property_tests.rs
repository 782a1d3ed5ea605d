//! Property-based tests - pragmatic approach testing core roundtrip guarantees
//!
//! These tests complement the integration tests by verifying properties across
//! a wide range of generated inputs. Roundtrips go through struct or map roots
//! because a bare scalar serializes to a line with an empty key path.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use dotpath::{from_str, parse, to_query_string, to_string, Value};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Wrap<T> {
    v: T,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Numbers {
    signed: i64,
    unsigned: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Items {
    #[serde(default)]
    items: Vec<i32>,
}

proptest! {
    // Primitive fields
    #[test]
    fn prop_integer_fields(signed in any::<i64>(), unsigned in any::<u32>()) {
        let value = Numbers { signed, unsigned };
        prop_assert!(roundtrip(&value));
    }

    #[test]
    fn prop_float_fields(v in any::<f64>().prop_filter("NaN is not equal to itself", |f| !f.is_nan())) {
        let value = Wrap { v };
        prop_assert!(roundtrip(&value));
    }

    #[test]
    fn prop_bool_fields(v in any::<bool>()) {
        let value = Wrap { v };
        prop_assert!(roundtrip(&value));
    }

    // Values are written verbatim, so any single-line text survives
    #[test]
    fn prop_string_fields(v in "[ -~]{0,40}") {
        let value = Wrap { v };
        prop_assert!(roundtrip(&value));
    }

    // Collections
    #[test]
    fn prop_vec_fields(items in prop::collection::vec(any::<i32>(), 0..20)) {
        let value = Items { items };
        prop_assert!(roundtrip(&value));
    }

    #[test]
    fn prop_option_fields(v in proptest::option::of(any::<i32>())) {
        let value = Wrap { v };
        prop_assert!(roundtrip(&value));
    }

    #[test]
    fn prop_tuple_fields(v in (any::<i32>(), any::<bool>())) {
        let value = Wrap { v };
        prop_assert!(roundtrip(&value));
    }

    #[test]
    fn prop_flat_maps(map in prop::collection::hash_map("[a-z][a-z0-9_]{0,8}", any::<i32>(), 0..8)) {
        let map: HashMap<String, i32> = map;
        prop_assert!(roundtrip(&map));
    }

    // Tree construction
    #[test]
    fn prop_last_write_wins(a in any::<i32>(), b in any::<i32>()) {
        let text = format!("v={}\nv={}", a, b);
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed.lookup("v"), Some(&Value::String(b.to_string())));
    }

    #[test]
    fn prop_sparse_index_sets_length(index in 0usize..50) {
        let parsed = parse(&format!("a[{}]=x", index)).unwrap();
        match parsed.lookup("a") {
            Some(Value::Array(items)) => prop_assert_eq!(items.len(), index + 1),
            other => prop_assert!(false, "expected a list, found {:?}", other),
        }
    }

    // Query strings
    #[test]
    fn prop_query_strings_are_encoded(v in "[ -~]{0,40}") {
        let query = to_query_string(&Wrap { v }).unwrap();
        prop_assert!(!query.contains(' '));
        prop_assert!(!query.contains('/'));
    }
}
