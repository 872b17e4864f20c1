// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shared handles for heap values.
//!
//! Readers hand out snapshots (`Vec<Value>` of cloned handles) rather than
//! borrows, so no `RefCell` borrow outlives a single method call.

use super::{Identity, Value};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Mutable ordered collection.
#[derive(Clone, Default)]
pub struct List(Rc<RefCell<Vec<Value>>>);

impl List {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from values.
    pub fn from_values<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self(Rc::new(RefCell::new(
            items.into_iter().map(Into::into).collect(),
        )))
    }

    /// Append a value.
    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    /// Get element by index.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Replace element by index. Returns `false` if out of bounds.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> bool {
        match self.0.borrow_mut().get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Snapshot of the elements.
    pub fn items(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Identity of this list.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

/// Immutable ordered collection.
///
/// Tuples that appear as elements of a list, tuple or set are unpacked one
/// level during inspection; see [`Inspector`](crate::Inspector).
#[derive(Clone)]
pub struct Tuple(Rc<[Value]>);

impl Tuple {
    /// Create a tuple from values.
    pub fn from_values<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    /// Elements of the tuple.
    pub fn items(&self) -> &[Value] {
        &self.0
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the tuple is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Identity of this tuple.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

/// Collection of unique elements, kept in insertion order.
#[derive(Clone, Default)]
pub struct Set(Rc<RefCell<Vec<Value>>>);

impl Set {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from values; duplicates are dropped.
    pub fn from_values<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let set = Self::new();
        for item in items {
            set.insert(item);
        }
        set
    }

    /// Insert a value. Returns `false` if an equal value is already present.
    pub fn insert(&self, value: impl Into<Value>) -> bool {
        let value = value.into();
        let mut items = self.0.borrow_mut();
        if items.contains(&value) {
            return false;
        }
        items.push(value);
        true
    }

    /// Check membership.
    pub fn contains(&self, value: &Value) -> bool {
        self.0.borrow().contains(value)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Snapshot of the elements.
    pub fn items(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Identity of this set.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

/// Key/value associative container, kept in insertion order.
#[derive(Clone, Default)]
pub struct Map(Rc<RefCell<Vec<(Value, Value)>>>);

impl Map {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map from entries; later keys replace earlier ones.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let map = Self::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        map
    }

    /// Insert an entry, returning the previous value for an equal key.
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(&self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        let mut entries = self.0.borrow_mut();
        if let Some((_, slot)) = entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, value));
        }
        entries.push((key, value));
        None
    }

    /// Look up a value by key.
    pub fn get(&self, key: &Value) -> Option<Value> {
        self.0
            .borrow()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    /// Remove an entry by key.
    pub fn remove(&self, key: &Value) -> Option<Value> {
        let mut entries = self.0.borrow_mut();
        let index = entries.iter().position(|(k, _)| k == key)?;
        Some(entries.remove(index).1)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Snapshot of the entries.
    pub fn entries(&self) -> Vec<(Value, Value)> {
        self.0.borrow().clone()
    }

    /// Identity of this map.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

struct ObjectInner {
    class: Arc<str>,
    attrs: RefCell<Vec<(String, Value)>>,
}

/// Instance of a named class with a dynamic attribute map.
#[derive(Clone)]
pub struct Object(Rc<ObjectInner>);

impl Object {
    /// Create an object with no attributes.
    pub fn new(class: impl Into<Arc<str>>) -> Self {
        Self(Rc::new(ObjectInner {
            class: class.into(),
            attrs: RefCell::new(Vec::new()),
        }))
    }

    /// Builder-style attribute setter.
    pub fn with_attr(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Class name.
    pub fn class_name(&self) -> &str {
        &self.0.class
    }

    pub(crate) fn class_name_shared(&self) -> Arc<str> {
        Arc::clone(&self.0.class)
    }

    /// Set an attribute, returning the previous value.
    ///
    /// A replaced attribute keeps its original position.
    pub fn set_attr(&self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        let mut attrs = self.0.attrs.borrow_mut();
        if let Some((_, slot)) = attrs.iter_mut().find(|(n, _)| *n == name) {
            return Some(std::mem::replace(slot, value));
        }
        attrs.push((name, value));
        None
    }

    /// Get an attribute by name.
    pub fn get_attr(&self, name: &str) -> Option<Value> {
        self.0
            .attrs
            .borrow()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// Attribute names, in insertion order.
    pub fn attr_names(&self) -> Vec<String> {
        self.0.attrs.borrow().iter().map(|(n, _)| n.clone()).collect()
    }

    /// Snapshot of the attributes.
    pub fn attrs(&self) -> Vec<(String, Value)> {
        self.0.attrs.borrow().clone()
    }

    /// Snapshot of the attribute values, in insertion order.
    pub fn attr_values(&self) -> Vec<Value> {
        self.0.attrs.borrow().iter().map(|(_, v)| v.clone()).collect()
    }

    /// Number of attributes.
    pub fn attr_count(&self) -> usize {
        self.0.attrs.borrow().len()
    }

    /// Identity of this object.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

macro_rules! debug_via_display {
    ($($handle:ident),*) => {
        $(
            impl fmt::Debug for $handle {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&Value::from(self.clone()), f)
                }
            }
        )*
    };
}

debug_via_display!(List, Tuple, Set, Map, Object);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_mutation() {
        let list = List::new();
        assert!(list.is_empty());
        list.push(1i64);
        list.push("two");
        assert_eq!(list.len(), 2);
        assert!(list.set(0, 10i64));
        assert!(!list.set(5, 0i64));
        assert_eq!(list.get(0).and_then(|v| v.as_int()), Some(10));
        assert!(list.get(2).is_none());
    }

    #[test]
    fn test_set_uniqueness() {
        let set = Set::from_values([1i64, 2, 1, 3]);
        assert_eq!(set.len(), 3);
        assert!(!set.insert(2i64));
        assert!(set.contains(&Value::Int(3)));

        // Handles are unique by identity, not contents.
        let a = Value::list([1i64]);
        let b = Value::list([1i64]);
        assert!(set.insert(a.clone()));
        assert!(set.insert(b));
        assert!(!set.insert(a));
    }

    #[test]
    fn test_map_replace_keeps_position() {
        let map = Map::from_entries([("a", 1i64), ("b", 2)]);
        assert_eq!(map.insert("a", 9i64).and_then(|v| v.as_int()), Some(1));
        let keys: Vec<_> = map
            .entries()
            .iter()
            .filter_map(|(k, _)| k.as_str().map(str::to_owned))
            .collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(map.get(&"a".into()).and_then(|v| v.as_int()), Some(9));
        assert_eq!(map.remove(&"b".into()).and_then(|v| v.as_int()), Some(2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_object_attributes() {
        let obj = Object::new("Point").with_attr("x", 1i64).with_attr("y", 2i64);
        assert_eq!(obj.class_name(), "Point");
        assert_eq!(obj.attr_names(), ["x", "y"]);
        assert!(obj.set_attr("x", 5i64).is_some());
        assert_eq!(obj.get_attr("x").and_then(|v| v.as_int()), Some(5));
        assert_eq!(obj.attr_count(), 2);
        assert!(obj.get_attr("z").is_none());
    }

    #[test]
    fn test_identity_distinct_per_allocation() {
        let a = Tuple::from_values([1i64, 2]);
        let b = Tuple::from_values([1i64, 2]);
        assert_ne!(a.identity(), b.identity());
        assert_eq!(a.identity(), a.clone().identity());
    }
}
