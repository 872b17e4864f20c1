// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Diagnostic sinks for inspection events.
//!
//! The inspector reports two kinds of events: a debug event per visited
//! node (and per depth cutoff) and a warning per suppressed repeat identity.
//! Sinks only observe; nothing they do feeds back into traversal.
//!
//! - [`LogSink`]: forwards to the `log` facade under a target (default)
//! - [`NullSink`]: drops everything
//! - [`RecordingSink`]: keeps events in memory

use parking_lot::Mutex;
use std::borrow::Cow;
use std::fmt;

/// Severity of a diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticLevel {
    /// Per-node traversal detail.
    Debug = 0,
    /// Suppressed repeat identity.
    Warning = 1,
}

impl DiagnosticLevel {
    /// Returns the string representation of the level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Warning => "WARN ",
        }
    }
}

/// Destination for inspection diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Receive one event.
    fn emit(&self, level: DiagnosticLevel, message: fmt::Arguments<'_>);

    /// Whether events of `level` are wanted at all.
    ///
    /// The inspector checks this before formatting, so an expensive
    /// rendering of a value is skipped when nobody listens.
    fn enabled(&self, _level: DiagnosticLevel) -> bool {
        true
    }
}

/// Default target: the inspector module path.
pub const DEFAULT_LOG_TARGET: &str = "typewalk::inspector";

/// Sink forwarding to the `log` crate.
#[derive(Debug, Clone)]
pub struct LogSink {
    target: Cow<'static, str>,
}

impl LogSink {
    /// Sink logging under the given target.
    pub fn new(target: impl Into<Cow<'static, str>>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Log target in use.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_TARGET)
    }
}

impl DiagnosticSink for LogSink {
    fn emit(&self, level: DiagnosticLevel, message: fmt::Arguments<'_>) {
        let target: &str = &self.target;
        match level {
            DiagnosticLevel::Debug => log::debug!(target: target, "{}", message),
            DiagnosticLevel::Warning => log::warn!(target: target, "{}", message),
        }
    }

    fn enabled(&self, level: DiagnosticLevel) -> bool {
        let target: &str = &self.target;
        match level {
            DiagnosticLevel::Debug => log::log_enabled!(target: target, log::Level::Debug),
            DiagnosticLevel::Warning => log::log_enabled!(target: target, log::Level::Warn),
        }
    }
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _level: DiagnosticLevel, _message: fmt::Arguments<'_>) {}

    fn enabled(&self, _level: DiagnosticLevel) -> bool {
        false
    }
}

/// A captured diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkEvent {
    pub level: DiagnosticLevel,
    pub message: String,
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events, in emission order.
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().clone()
    }

    /// Messages of warning events.
    pub fn warnings(&self) -> Vec<String> {
        self.messages(DiagnosticLevel::Warning)
    }

    /// Messages of debug events.
    pub fn debugs(&self) -> Vec<String> {
        self.messages(DiagnosticLevel::Debug)
    }

    fn messages(&self, level: DiagnosticLevel) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, level: DiagnosticLevel, message: fmt::Arguments<'_>) {
        self.events.lock().push(SinkEvent {
            level,
            message: message.to_string(),
        });
    }
}
