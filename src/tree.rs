//! Tree builder: folds tokenized lines into a nested value tree.
//!
//! Each [`ParsedLine`] is one write against a root map. Intermediate path
//! segments materialize the containers they need (a map for a plain name, a
//! list plus a map in the addressed slot for an indexed name), and the last
//! segment stores the value text as a string leaf.
//!
//! Writes never fail. When a segment finds a value of the wrong kind in its
//! way, the later line wins and the old value is replaced. Lists pad with
//! [`Value::Null`] up to the addressed index, so `a[2]=x` against an empty
//! tree produces a three-element list with two holes.

use crate::path::ParsedLine;
use crate::{DotMap, Value};

/// Applies one tokenized line to `root`.
///
/// # Examples
///
/// ```rust
/// use dotpath::{tree, DotMap, ParsedLine};
///
/// let mut root = DotMap::new();
/// tree::insert(&mut root, ParsedLine::parse("user.name=Alice", 1).unwrap());
/// tree::insert(&mut root, ParsedLine::parse("user.pets[1]=Bo", 2).unwrap());
///
/// let user = root.get("user").and_then(|v| v.as_object()).unwrap();
/// assert_eq!(user.get("name").and_then(|v| v.as_str()), Some("Alice"));
/// let pets = user.get("pets").and_then(|v| v.as_array()).unwrap();
/// assert_eq!(pets.len(), 2);
/// assert!(pets[0].is_null());
/// ```
pub fn insert(root: &mut DotMap, line: ParsedLine) {
    let ParsedLine { segments, value } = line;
    let Some((last, walk)) = segments.split_last() else {
        return;
    };

    let mut current = root;
    for segment in walk {
        current = match segment.index {
            Some(index) => {
                let items = array_entry(current, &segment.name);
                fill_to(items, index);
                object_slot(&mut items[index])
            }
            None => object_entry(current, &segment.name),
        };
    }

    match last.index {
        Some(index) => {
            let items = array_entry(current, &last.name);
            fill_to(items, index);
            items[index] = Value::String(value);
        }
        None => {
            current.insert(last.name.clone(), Value::String(value));
        }
    }
}

/// Returns the array under `name`, replacing whatever else was there.
fn array_entry<'a>(map: &'a mut DotMap, name: &str) -> &'a mut Vec<Value> {
    if !matches!(map.get(name), Some(Value::Array(_))) {
        map.insert(name.to_string(), Value::Array(Vec::new()));
    }
    match map.get_mut(name) {
        Some(Value::Array(items)) => items,
        _ => unreachable!("slot was just made an array"),
    }
}

/// Returns the map under `name`, replacing whatever else was there.
fn object_entry<'a>(map: &'a mut DotMap, name: &str) -> &'a mut DotMap {
    if !matches!(map.get(name), Some(Value::Object(_))) {
        map.insert(name.to_string(), Value::Object(DotMap::new()));
    }
    match map.get_mut(name) {
        Some(Value::Object(inner)) => inner,
        _ => unreachable!("slot was just made a map"),
    }
}

/// Returns the map in a list slot, replacing a hole or a scalar.
fn object_slot(slot: &mut Value) -> &mut DotMap {
    if !matches!(slot, Value::Object(_)) {
        *slot = Value::Object(DotMap::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just made a map"),
    }
}

/// Pads with null holes so `items[index]` is addressable.
fn fill_to(items: &mut Vec<Value>, index: usize) {
    if items.len() <= index {
        items.resize(index + 1, Value::Null);
    }
}
