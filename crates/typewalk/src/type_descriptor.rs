// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors for runtime type information.

use std::fmt;
use std::sync::Arc;

/// Type kind enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Bytes,
    /// Mutable ordered collection.
    List,
    /// Immutable ordered collection (pairs, records).
    Tuple,
    /// Collection of unique elements.
    Set,
    /// Key/value associative container.
    Map,
    /// Named class with a dynamic attribute map.
    Object,
    /// Rust type exposed through [`Inspectable`](crate::Inspectable).
    Native,
}

impl TypeKind {
    /// Name used for builtin kinds.
    ///
    /// `Object` and `Native` descriptors carry their own class name instead.
    pub fn builtin_name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Bytes => "bytes",
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::Set => "set",
            Self::Map => "map",
            Self::Object => "object",
            Self::Native => "native",
        }
    }

    /// Check if this kind is a container (mapping or sequence/set-like).
    pub fn is_container(self) -> bool {
        matches!(self, Self::List | Self::Tuple | Self::Set | Self::Map)
    }

    /// Check if this kind is a scalar (no identity, no children).
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Null | Self::Bool | Self::Int | Self::Float | Self::Str | Self::Bytes
        )
    }
}

#[derive(Debug, Clone)]
enum TypeName {
    Static(&'static str),
    Shared(Arc<str>),
}

impl TypeName {
    fn as_str(&self) -> &str {
        match self {
            Self::Static(name) => name,
            Self::Shared(name) => name,
        }
    }
}

/// Runtime type identity of a visited value.
///
/// Cheap to clone: builtin names are static and class names are shared.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    kind: TypeKind,
    name: TypeName,
}

impl TypeDescriptor {
    /// Descriptor for a builtin kind, named after the kind.
    pub fn builtin(kind: TypeKind) -> Self {
        Self {
            kind,
            name: TypeName::Static(kind.builtin_name()),
        }
    }

    /// Descriptor for an attribute-bearing object of the given class.
    pub fn class(name: Arc<str>) -> Self {
        Self {
            kind: TypeKind::Object,
            name: TypeName::Shared(name),
        }
    }

    /// Descriptor for a native Rust type.
    pub fn native(name: &'static str) -> Self {
        Self {
            kind: TypeKind::Native,
            name: TypeName::Static(name),
        }
    }

    /// Type kind.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Type name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.name() == other.name()
    }
}

impl Eq for TypeDescriptor {}

impl std::hash::Hash for TypeDescriptor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.name().hash(state);
    }
}

impl From<TypeKind> for TypeDescriptor {
    fn from(kind: TypeKind) -> Self {
        Self::builtin(kind)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        assert_eq!(TypeDescriptor::builtin(TypeKind::Int).name(), "int");
        assert_eq!(TypeDescriptor::builtin(TypeKind::Map).name(), "map");
        assert_eq!(TypeDescriptor::from(TypeKind::Str).to_string(), "str");
    }

    #[test]
    fn test_class_descriptor_equality() {
        let a = TypeDescriptor::class(Arc::from("Sensor"));
        let b = TypeDescriptor::class(Arc::from("Sensor"));
        let c = TypeDescriptor::class(Arc::from("Actuator"));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.kind(), TypeKind::Object);
    }

    #[test]
    fn test_kind_disambiguates_same_name() {
        // A class called "int" is not the builtin int.
        let class = TypeDescriptor::class(Arc::from("int"));
        assert_ne!(class, TypeDescriptor::builtin(TypeKind::Int));
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TypeKind::Set.is_container());
        assert!(!TypeKind::Str.is_container());
        assert!(TypeKind::Bytes.is_scalar());
        assert!(!TypeKind::Object.is_scalar());
    }
}
