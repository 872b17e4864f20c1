// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # typewalk - recursive type discovery over object graphs
//!
//! Walks a value, its elements and its attributes, and returns the flat,
//! ordered list of runtime types encountered. Useful to understand the shape
//! of deeply nested, heterogeneous data: a decoded config, a payload about to
//! be serialized, a graph with shared or cyclic references.
//!
//! ## Quick Start
//!
//! ```rust
//! use typewalk::{Inspector, Value};
//!
//! let value = Value::map([
//!     ("a", Value::list([1i64, 2])),
//!     ("b", Value::set([3i64, 4])),
//! ]);
//!
//! let mut inspector = Inspector::new();
//! let types: Vec<String> = inspector
//!     .inspect(&value)
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//!
//! assert_eq!(
//!     types,
//!     ["map", "str", "list", "int", "int", "str", "set", "int", "int"]
//! );
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Inspector`] | Traversal engine: depth bound, identity guard, flattening |
//! | [`Value`] | Inspectable object model (scalars and shared handles) |
//! | [`TypeDescriptor`] | One entry of the result: kind plus type name |
//! | [`Shape`] | Classification of a value: mapping, container, attribute-bearing, leaf |
//! | [`DiagnosticSink`] | Receiver of debug/warning events (defaults to `log`) |
//!
//! ## Features
//!
//! - `config-loaders` (default): read [`InspectorConfig`] from YAML/JSON
//! - `json` (default): `Value: From<serde_json::Value>`
//! - `yaml` (default): `Value: From<serde_yaml::Value>`
//!
//! ## Caveats
//!
//! Truncated branches (depth cutoff or a repeated identity) leave no marker
//! in the output; they look exactly like empty containers or leaves.

pub mod classify;
pub mod config;
pub mod inspector;
pub mod session;
pub mod sink;
pub mod type_descriptor;
pub mod value;

#[cfg(any(feature = "json", feature = "yaml"))]
mod bridge;

pub use classify::{classify, Shape};
#[cfg(feature = "config-loaders")]
pub use config::ConfigError;
pub use config::InspectorConfig;
pub use inspector::{Inspector, InspectorBuilder};
pub use session::InspectionSession;
pub use sink::{DiagnosticLevel, DiagnosticSink, LogSink, NullSink, RecordingSink, SinkEvent};
pub use type_descriptor::{TypeDescriptor, TypeKind};
pub use value::{Identity, Inspectable, List, Map, Object, Set, Tuple, Value};
