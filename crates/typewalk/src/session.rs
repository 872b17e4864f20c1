// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Traversal session state.

use crate::value::{Identity, Value};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Set of identities visited during a traversal session.
///
/// Serves both as the cycle detector and as an alias filter: once an
/// identity is recorded, every later encounter is refused, whether it closes
/// a cycle or is a shared reference in a sibling branch.
///
/// Each entered handle is retained until [`clear`](Self::clear), so its
/// address cannot be reused by a value created later in the session (for
/// example attributes built on the fly by an [`Inspectable`](crate::Inspectable)).
#[derive(Debug, Default)]
pub struct InspectionSession {
    visited: HashMap<Identity, Value>,
}

impl InspectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value. Returns `false` if its identity was already visited.
    ///
    /// Scalars have no identity and are always accepted without being stored.
    pub fn enter(&mut self, value: &Value) -> bool {
        let Some(id) = value.identity() else {
            return true;
        };
        match self.visited.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value.clone());
                true
            }
        }
    }

    pub fn contains(&self, id: Identity) -> bool {
        self.visited.contains_key(&id)
    }

    /// Number of recorded identities.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Forget every recorded identity and release the retained handles.
    pub fn clear(&mut self) {
        self.visited.clear();
    }
}
