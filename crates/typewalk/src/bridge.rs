// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bridges from parsed documents to inspectable values.
//!
//! Lets a decoded JSON or YAML document be walked like any other value graph,
//! e.g. to check what a dynamic config actually contains.
//!
//! | Document | Value |
//! |----------|-------|
//! | null / bool / string | `Null` / `Bool` / `Str` |
//! | number fitting `i64` | `Int` |
//! | other number | `Float` |
//! | array / sequence | `List` |
//! | object / mapping | `Map` |
//! | YAML `!Tag value` | `Object` of class `Tag`, attribute `value` |

use crate::value::{List, Map, Value};
#[cfg(feature = "yaml")]
use crate::value::Object;

#[cfg(feature = "json")]
impl From<&serde_json::Value> for Value {
    fn from(doc: &serde_json::Value) -> Self {
        match doc {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::from(s.as_str()),
            serde_json::Value::Array(items) => {
                Value::List(List::from_values(items.iter().map(Value::from)))
            }
            serde_json::Value::Object(fields) => Value::Map(Map::from_entries(
                fields.iter().map(|(k, v)| (Value::from(k.as_str()), Value::from(v))),
            )),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(doc: serde_json::Value) -> Self {
        Value::from(&doc)
    }
}

#[cfg(feature = "yaml")]
impl From<&serde_yaml::Value> for Value {
    fn from(doc: &serde_yaml::Value) -> Self {
        match doc {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(*b),
            serde_yaml::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_yaml::Value::String(s) => Value::from(s.as_str()),
            serde_yaml::Value::Sequence(items) => {
                Value::List(List::from_values(items.iter().map(Value::from)))
            }
            serde_yaml::Value::Mapping(fields) => Value::Map(Map::from_entries(
                fields.iter().map(|(k, v)| (Value::from(k), Value::from(v))),
            )),
            serde_yaml::Value::Tagged(tagged) => {
                let tag = tagged.tag.to_string();
                let class = tag.trim_start_matches('!');
                Value::Object(Object::new(class).with_attr("value", Value::from(&tagged.value)))
            }
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Value> for Value {
    fn from(doc: serde_yaml::Value) -> Self {
        Value::from(&doc)
    }
}
