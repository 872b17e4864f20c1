// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Classification of values into traversal shapes.
//!
//! Precedence is fixed: mapping, then sequence/set-like container, then
//! attribute-bearing, then leaf. Strings and byte strings are always leaves.

use crate::value::Value;

/// Traversal shape of a value, with a snapshot of its children.
#[derive(Debug, Clone)]
pub enum Shape {
    /// Key/value entries, in iteration order.
    Mapping(Vec<(Value, Value)>),
    /// Elements of a list, tuple or set, in iteration order.
    Container(Vec<Value>),
    /// Attribute values, in attribute order. Names are not part of the shape.
    AttributeBearing(Vec<Value>),
    /// No further descent.
    Leaf,
}

impl Shape {
    /// Short label for the shape.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "mapping",
            Self::Container(_) => "container",
            Self::AttributeBearing(_) => "attribute-bearing",
            Self::Leaf => "leaf",
        }
    }

    /// Number of direct children in the snapshot.
    ///
    /// Mapping entries count once per entry.
    pub fn child_count(&self) -> usize {
        match self {
            Self::Mapping(entries) => entries.len(),
            Self::Container(items) | Self::AttributeBearing(items) => items.len(),
            Self::Leaf => 0,
        }
    }
}

/// Classify a value.
///
/// Attribute-bearing classification ignores inspector configuration; the
/// inspector decides whether to descend into attributes.
pub fn classify(value: &Value) -> Shape {
    match value {
        Value::Map(map) => Shape::Mapping(map.entries()),
        Value::List(list) => Shape::Container(list.items()),
        Value::Tuple(tuple) => Shape::Container(tuple.items().to_vec()),
        Value::Set(set) => Shape::Container(set.items()),
        Value::Object(obj) => Shape::AttributeBearing(obj.attr_values()),
        Value::Native(native) => native
            .attributes()
            .map_or(Shape::Leaf, Shape::AttributeBearing),
        Value::Null
        | Value::Bool(_)
        | Value::Int(_)
        | Value::Float(_)
        | Value::Str(_)
        | Value::Bytes(_) => Shape::Leaf,
    }
}
