// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Recursive, depth-bounded type discovery.
//!
//! # Traversal rules
//!
//! For each node, in order:
//!
//! 1. **Depth guard**: past `max_depth` the node is dropped entirely.
//! 2. **Identity guard**: a heap value already seen in this session is
//!    dropped and a warning is emitted. This catches cycles, but also
//!    aliases: a value shared by two sibling branches is reported once.
//!    Entered values are retained until [`Inspector::reset`], so a value
//!    built during traversal never inherits the identity of an earlier one.
//! 3. The node's own [`TypeDescriptor`] is recorded.
//! 4. Children are visited at `depth + 1` according to [`classify`]:
//!    - mapping: key then value of every entry
//!    - container: every element, except that tuple elements are unpacked
//!      one level and their items visited instead (the tuple itself is not
//!      recorded)
//!    - attribute-bearing: every attribute value, when `include_attributes`
//!    - leaf: nothing
//!
//! A tuple that is the root, a map key/value or an attribute value is a
//! regular container and records its own descriptor.
//!
//! Recursion depth is limited only by `max_depth` or by the thread stack.

use crate::classify::{classify, Shape};
use crate::config::InspectorConfig;
use crate::session::InspectionSession;
use crate::sink::{DiagnosticLevel, DiagnosticSink, LogSink};
use crate::type_descriptor::TypeDescriptor;
use crate::value::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Walks values and lists the runtime types encountered.
///
/// Session state persists across calls until [`reset`](Self::reset): a
/// second `inspect` of values already seen reports nothing for them.
///
/// ```rust
/// use typewalk::{Inspector, Value};
///
/// let mut inspector = Inspector::new();
/// let names: Vec<String> = inspector
///     .inspect(&Value::list([Value::pair(1i64, "x"), Value::pair(2i64, "y")]))
///     .iter()
///     .map(|t| t.name().to_owned())
///     .collect();
///
/// assert_eq!(names, ["list", "int", "str", "int", "str"]);
/// ```
pub struct Inspector {
    config: InspectorConfig,
    sink: Arc<dyn DiagnosticSink>,
    session: InspectionSession,
}

impl Inspector {
    /// Inspector with default configuration, logging through `log`.
    pub fn new() -> Self {
        Self::with_config(InspectorConfig::default())
    }

    /// Inspector with the given configuration, logging through `log`.
    pub fn with_config(config: InspectorConfig) -> Self {
        Self {
            config,
            sink: Arc::new(LogSink::default()),
            session: InspectionSession::new(),
        }
    }

    /// Start building an inspector.
    pub fn builder() -> InspectorBuilder {
        InspectorBuilder::new()
    }

    /// Active configuration.
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Number of identities recorded in the current session.
    pub fn visited_count(&self) -> usize {
        self.session.len()
    }

    /// Inspect a value from depth 0.
    pub fn inspect(&mut self, value: &Value) -> Vec<TypeDescriptor> {
        self.inspect_at(value, 0)
    }

    /// Inspect a value as if it sat at `depth` in a larger traversal.
    pub fn inspect_at(&mut self, value: &Value, depth: usize) -> Vec<TypeDescriptor> {
        let mut types = Vec::new();
        self.visit(value, depth, &mut types);
        types
    }

    /// [`reset`](Self::reset), then [`inspect`](Self::inspect).
    pub fn inspect_fresh(&mut self, value: &Value) -> Vec<TypeDescriptor> {
        self.reset();
        self.inspect(value)
    }

    /// Clear the session so earlier visits no longer suppress anything.
    pub fn reset(&mut self) {
        self.session.clear();
    }

    fn visit(&mut self, value: &Value, depth: usize, types: &mut Vec<TypeDescriptor>) {
        if self.config.exceeds_max_depth(depth) {
            if let Some(max) = self.config.max_depth {
                self.debug(format_args!(
                    "max depth of {} reached, stopping recursion",
                    max
                ));
            }
            return;
        }

        if !self.session.enter(value) {
            if self.sink.enabled(DiagnosticLevel::Warning) {
                self.sink.emit(
                    DiagnosticLevel::Warning,
                    format_args!("circular reference detected for object: {}", value),
                );
            }
            return;
        }

        let descriptor = value.type_descriptor();
        self.debug(format_args!(
            "detected type: {} at depth {}",
            descriptor, depth
        ));
        types.push(descriptor);

        match classify(value) {
            Shape::Mapping(entries) => {
                for (key, val) in &entries {
                    self.visit(key, depth + 1, types);
                    self.visit(val, depth + 1, types);
                }
            }
            Shape::Container(items) => self.visit_items(&items, depth, types),
            Shape::AttributeBearing(attrs) if self.config.include_attributes => {
                for attr in &attrs {
                    self.visit(attr, depth + 1, types);
                }
            }
            Shape::AttributeBearing(_) | Shape::Leaf => {}
        }
    }

    fn visit_items(&mut self, items: &[Value], depth: usize, types: &mut Vec<TypeDescriptor>) {
        for item in items {
            match item {
                Value::Tuple(tuple) => {
                    for inner in tuple.items() {
                        self.visit(inner, depth + 1, types);
                    }
                }
                other => self.visit(other, depth + 1, types),
            }
        }
    }

    fn debug(&self, message: fmt::Arguments<'_>) {
        if self.sink.enabled(DiagnosticLevel::Debug) {
            self.sink.emit(DiagnosticLevel::Debug, message);
        }
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Inspector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspector")
            .field("config", &self.config)
            .field("visited", &self.session.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Inspector`].
#[derive(Default)]
pub struct InspectorBuilder {
    config: InspectorConfig,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl InspectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: InspectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Descend into attribute maps (default: on).
    pub fn include_attributes(mut self, include: bool) -> Self {
        self.config.include_attributes = include;
        self
    }

    /// Deepest depth still inspected.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = Some(max_depth);
        self
    }

    /// Remove the depth bound (default).
    pub fn unbounded(mut self) -> Self {
        self.config.max_depth = None;
        self
    }

    /// Send diagnostics to a custom sink.
    pub fn sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Log through `log` under a custom target.
    pub fn log_target(self, target: impl Into<Cow<'static, str>>) -> Self {
        self.sink(Arc::new(LogSink::new(target)))
    }

    pub fn build(self) -> Inspector {
        Inspector {
            config: self.config,
            sink: self.sink.unwrap_or_else(|| Arc::new(LogSink::default())),
            session: InspectionSession::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;
    use crate::value::{List, Object};

    fn names(types: &[TypeDescriptor]) -> Vec<&str> {
        types.iter().map(TypeDescriptor::name).collect()
    }

    #[test]
    fn test_scalar_root() {
        let mut inspector = Inspector::new();
        assert_eq!(names(&inspector.inspect(&Value::Int(7))), ["int"]);
        assert_eq!(inspector.visited_count(), 0);
    }

    #[test]
    fn test_mapping_entries_are_unpacked() {
        let value = Value::map([
            ("a", Value::list([1i64, 2])),
            ("b", Value::set([3i64, 4])),
        ]);
        let mut inspector = Inspector::new();
        assert_eq!(
            names(&inspector.inspect(&value)),
            ["map", "str", "list", "int", "int", "str", "set", "int", "int"]
        );
    }

    #[test]
    fn test_tuple_elements_are_flattened() {
        let value = Value::list([Value::pair(1i64, "x"), Value::pair(2i64, "y")]);
        let mut inspector = Inspector::new();
        assert_eq!(
            names(&inspector.inspect(&value)),
            ["list", "int", "str", "int", "str"]
        );
    }

    #[test]
    fn test_root_tuple_records_itself() {
        let value = Value::tuple([Value::Int(1), Value::pair(2i64, 3i64)]);
        let mut inspector = Inspector::new();
        // Root tuple is a container; its inner tuple element is unpacked.
        assert_eq!(names(&inspector.inspect(&value)), ["tuple", "int", "int", "int"]);
    }

    #[test]
    fn test_map_value_tuple_is_not_unpacked() {
        let value = Value::map([("k", Value::pair(1i64, 2i64))]);
        let mut inspector = Inspector::new();
        assert_eq!(
            names(&inspector.inspect(&value)),
            ["map", "str", "tuple", "int", "int"]
        );
    }

    #[test]
    fn test_attribute_tuple_is_not_unpacked() {
        let obj = Object::new("Span").with_attr("range", Value::pair(0i64, 9i64));
        let mut inspector = Inspector::new();
        assert_eq!(
            names(&inspector.inspect(&obj.into())),
            ["Span", "tuple", "int", "int"]
        );
    }

    #[test]
    fn test_self_referencing_list() {
        let list = List::from_values([1i64]);
        list.push(list.clone());
        list.push("tail");

        let sink = Arc::new(RecordingSink::new());
        let mut inspector = Inspector::builder().sink(sink.clone()).build();

        assert_eq!(
            names(&inspector.inspect(&list.into())),
            ["list", "int", "str"]
        );
        assert_eq!(
            sink.warnings(),
            ["circular reference detected for object: [1, [...], \"tail\"]"]
        );
    }

    #[test]
    fn test_max_depth_zero_keeps_root_only() {
        let value = Value::list([Value::list([1i64])]);
        let sink = Arc::new(RecordingSink::new());
        let mut inspector = Inspector::builder().max_depth(0).sink(sink.clone()).build();

        assert_eq!(names(&inspector.inspect(&value)), ["list"]);
        assert!(sink
            .debugs()
            .contains(&"max depth of 0 reached, stopping recursion".to_string()));
        assert!(sink.warnings().is_empty());
    }

    #[test]
    fn test_cutoff_node_is_dropped_not_recorded() {
        // Depth bound 1: the inner list is at depth 1 and kept, its ints at
        // depth 2 are dropped.
        let value = Value::list([Value::list([1i64, 2]), Value::Int(3)]);
        let mut inspector = Inspector::builder().max_depth(1).build();
        assert_eq!(names(&inspector.inspect(&value)), ["list", "list", "int"]);
    }

    #[test]
    fn test_attribute_toggle() {
        let obj: Value = Object::new("Sensor")
            .with_attr("id", 4i64)
            .with_attr("tags", Value::list(["a"]))
            .into();

        let mut off = Inspector::builder().include_attributes(false).build();
        assert_eq!(names(&off.inspect(&obj)), ["Sensor"]);

        let mut on = Inspector::new();
        assert_eq!(names(&on.inspect(&obj)), ["Sensor", "int", "list", "str"]);
    }

    #[test]
    fn test_session_persists_until_reset() {
        let value = Value::list([1i64]);
        let mut inspector = Inspector::new();

        assert_eq!(names(&inspector.inspect(&value)), ["list", "int"]);
        assert!(inspector.inspect(&value).is_empty());
        assert_eq!(inspector.visited_count(), 1);

        inspector.reset();
        assert_eq!(inspector.visited_count(), 0);
        assert_eq!(names(&inspector.inspect(&value)), ["list", "int"]);
        assert_eq!(names(&inspector.inspect_fresh(&value)), ["list", "int"]);
    }

    #[test]
    fn test_debug_event_per_node() {
        let sink = Arc::new(RecordingSink::new());
        let mut inspector = Inspector::builder().sink(sink.clone()).build();
        inspector.inspect(&Value::list([true]));
        assert_eq!(
            sink.debugs(),
            ["detected type: list at depth 0", "detected type: bool at depth 1"]
        );
    }

    #[test]
    fn test_inspect_at_offsets_depth() {
        let mut inspector = Inspector::builder().max_depth(2).build();
        let value = Value::list([Value::list([1i64])]);
        // Starting at depth 1 leaves room for one level below the root.
        assert_eq!(names(&inspector.inspect_at(&value, 1)), ["list", "list"]);
        assert!(inspector.inspect_at(&Value::Int(1), 3).is_empty());
    }

    #[test]
    fn test_builder_config_roundtrip() {
        let config = InspectorConfig {
            include_attributes: false,
            max_depth: Some(5),
        };
        let inspector = Inspector::builder().config(config).build();
        assert_eq!(*inspector.config(), config);

        let unbounded = Inspector::builder().max_depth(1).unbounded().build();
        assert_eq!(unbounded.config().max_depth, None);

        let logged = Inspector::builder().log_target("app::shape").build();
        assert!(format!("{:?}", logged).starts_with("Inspector"));
    }
}
