//! Ordered map type for dot notation objects.
//!
//! This module provides [`DotMap`], a wrapper around [`IndexMap`] that maintains
//! insertion order for map entries. Order matters in dot notation: parsing a
//! document and serializing it again must emit entries in the order the lines
//! appeared, and serializing a hand-built tree must follow the order keys were
//! inserted.
//!
//! ## Why IndexMap?
//!
//! `IndexMap` instead of `HashMap` ensures:
//!
//! - **Deterministic output**: entries serialize in a consistent order
//! - **Line-order round trips**: parse then serialize preserves entry order
//! - **Predictable tests**: output can be compared as plain text
//!
//! Lookup itself is unordered, exactly like a hash map.
//!
//! ## Examples
//!
//! ```rust
//! use dotpath::{DotMap, Value};
//!
//! let mut map = DotMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to dot notation values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order.
/// The parser builds one of these at the root of every document, and the
/// serializer walks entries in insertion order.
///
/// # Examples
///
/// ```rust
/// use dotpath::{DotMap, Value};
///
/// let mut map = DotMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DotMap(IndexMap<String, crate::Value>);

impl DotMap {
    /// Creates an empty `DotMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::DotMap;
    ///
    /// let map = DotMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        DotMap(IndexMap::new())
    }

    /// Creates an empty `DotMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        DotMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    /// Re-inserting an existing key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::{DotMap, Value};
    ///
    /// let mut map = DotMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::{DotMap, Value};
    ///
    /// let mut map = DotMap::new();
    /// map.insert("key".to_string(), Value::from(42));
    /// assert_eq!(map.get("key").and_then(|v| v.as_i64()), Some(42));
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// The relative order of the remaining entries is preserved.
    pub fn remove(&mut self, key: &str) -> Option<crate::Value> {
        self.0.shift_remove(key)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::{DotMap, Value};
    ///
    /// let mut map = DotMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert("key".to_string(), Value::from(42));
    /// assert_eq!(map.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }

    /// Returns a mutable iterator over the key-value pairs, in insertion order.
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, crate::Value> {
        self.0.iter_mut()
    }
}

impl Default for DotMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, crate::Value>> for DotMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        DotMap(map.into_iter().collect())
    }
}

impl From<DotMap> for HashMap<String, crate::Value> {
    fn from(map: DotMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for DotMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DotMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for DotMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        DotMap(IndexMap::from_iter(iter))
    }
}
