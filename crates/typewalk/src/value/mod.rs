// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Inspectable object model.
//!
//! A [`Value`] is either a scalar (copied, no identity) or a handle to a
//! shared, reference-counted node. Handles carry an [`Identity`] and mutable
//! handles use interior mutability, so arbitrary graphs, including reference
//! cycles, can be built and then walked by the [`Inspector`](crate::Inspector).
//!
//! # Example
//!
//! ```rust
//! use typewalk::{List, Value};
//!
//! let list = List::new();
//! list.push(1i64);
//! list.push(Value::List(list.clone())); // list contains itself
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(Value::List(list).to_string(), "[1, [...]]");
//! ```

mod display;
mod handles;

pub use handles::{List, Map, Object, Set, Tuple};

use crate::type_descriptor::{TypeDescriptor, TypeKind};
use std::fmt;
use std::rc::Rc;

/// Stable identity token of a heap value.
///
/// This is the address of the shared allocation; it stays valid as long as
/// any handle to the value is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(usize);

impl Identity {
    pub(crate) fn of<T: ?Sized>(rc: &Rc<T>) -> Self {
        Self(Rc::as_ptr(rc).cast::<()>() as usize)
    }

    /// Raw address backing this identity.
    pub fn addr(self) -> usize {
        self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Capability for Rust types that want to take part in inspection.
///
/// Only types implementing this trait are ever descended into as
/// attribute-bearing values; there is no reflection over arbitrary structs.
///
/// ```rust
/// use typewalk::{Inspectable, Value};
///
/// struct Reading {
///     sensor: String,
///     celsius: f64,
/// }
///
/// impl Inspectable for Reading {
///     fn type_name(&self) -> &'static str {
///         "Reading"
///     }
///
///     fn attributes(&self) -> Option<Vec<Value>> {
///         Some(vec![self.sensor.as_str().into(), self.celsius.into()])
///     }
/// }
/// ```
pub trait Inspectable {
    /// Runtime type name reported in the type descriptor.
    fn type_name(&self) -> &'static str;

    /// Attribute values, in a stable order.
    ///
    /// `None` means the type exposes no attribute map and is a leaf.
    fn attributes(&self) -> Option<Vec<Value>> {
        None
    }
}

/// A dynamic value that can be inspected.
///
/// Cloning is cheap: heap variants clone the handle, not the contents.
#[derive(Clone, Default)]
pub enum Value {
    // Scalars
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Rc<str>),
    Bytes(Rc<[u8]>),

    // Containers
    List(List),
    Tuple(Tuple),
    Set(Set),
    Map(Map),

    // Attribute-bearing
    Object(Object),
    Native(Rc<dyn Inspectable>),
}

impl Value {
    /// Build a list from values.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::List(List::from_values(items))
    }

    /// Build a tuple from values.
    pub fn tuple<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Tuple(Tuple::from_values(items))
    }

    /// Build a two-element tuple.
    pub fn pair(first: impl Into<Value>, second: impl Into<Value>) -> Self {
        Self::Tuple(Tuple::from_values([first.into(), second.into()]))
    }

    /// Build a set from values; duplicates are dropped.
    pub fn set<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Set(Set::from_values(items))
    }

    /// Build a map from key/value pairs; later keys replace earlier ones.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Self::Map(Map::from_entries(entries))
    }

    /// Wrap a native Rust value.
    pub fn native<T: Inspectable + 'static>(value: T) -> Self {
        Self::Native(Rc::new(value))
    }

    /// Build a byte string.
    pub fn bytes(data: impl AsRef<[u8]>) -> Self {
        Self::Bytes(Rc::from(data.as_ref()))
    }

    /// Type kind of this value.
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Null => TypeKind::Null,
            Self::Bool(_) => TypeKind::Bool,
            Self::Int(_) => TypeKind::Int,
            Self::Float(_) => TypeKind::Float,
            Self::Str(_) => TypeKind::Str,
            Self::Bytes(_) => TypeKind::Bytes,
            Self::List(_) => TypeKind::List,
            Self::Tuple(_) => TypeKind::Tuple,
            Self::Set(_) => TypeKind::Set,
            Self::Map(_) => TypeKind::Map,
            Self::Object(_) => TypeKind::Object,
            Self::Native(_) => TypeKind::Native,
        }
    }

    /// Runtime type descriptor of this value.
    pub fn type_descriptor(&self) -> TypeDescriptor {
        match self {
            Self::Object(obj) => TypeDescriptor::class(obj.class_name_shared()),
            Self::Native(native) => TypeDescriptor::native(native.type_name()),
            other => TypeDescriptor::builtin(other.kind()),
        }
    }

    /// Identity of heap values; `None` for scalars.
    pub fn identity(&self) -> Option<Identity> {
        match self {
            Self::Null
            | Self::Bool(_)
            | Self::Int(_)
            | Self::Float(_)
            | Self::Str(_)
            | Self::Bytes(_) => None,
            Self::List(list) => Some(list.identity()),
            Self::Tuple(tuple) => Some(tuple.identity()),
            Self::Set(set) => Some(set.identity()),
            Self::Map(map) => Some(map.identity()),
            Self::Object(obj) => Some(obj.identity()),
            Self::Native(native) => Some(Identity::of(native)),
        }
    }

    /// Check if both values are the same heap node.
    pub fn same_identity(&self, other: &Value) -> bool {
        match (self.identity(), other.identity()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as byte string.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as list handle.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as map handle.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as object handle.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }
}

/// Scalars compare by value (floats by bit pattern), handles by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            _ => self.same_identity(other),
        }
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// Conversion traits
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::list(v)
    }
}

impl From<List> for Value {
    fn from(v: List) -> Self {
        Self::List(v)
    }
}

impl From<Tuple> for Value {
    fn from(v: Tuple) -> Self {
        Self::Tuple(v)
    }
}

impl From<Set> for Value {
    fn from(v: Set) -> Self {
        Self::Set(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Map(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}
