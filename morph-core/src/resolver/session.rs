// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Per-call mapping state.
//!
//! A session lives for exactly one top-level map call (one session spans a
//! whole batch call), is never shared across threads, and tracks the
//! identities of shared source handles already encountered so that aliased
//! and cyclic graphs terminate.
//!
//! Two policies, selected at mapper construction and never mixed:
//!
//! - *Preserving* (default): identities map to their destination handles.
//!   A handle seen again yields a clone of the destination built for its
//!   first occurrence — sharing is preserved and cycles observe the
//!   pre-registered placeholder instead of recursing.
//! - *Visited* (legacy): only the identities on the active traversal path
//!   are tracked. A cycle back onto the path drops that branch to the
//!   default value; completed duplicates are re-constructed independently,
//!   so destination identity is not shared.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};

enum State {
    Preserving {
        /// (source address, destination type) -> destination handle.
        /// Destination type participates in the key because one source node
        /// may map into several destination types within a single graph.
        seen: HashMap<(usize, TypeId), Box<dyn Any>>,
    },
    Visited {
        /// Source addresses on the active traversal path.
        path: HashSet<usize>,
    },
}

pub struct MappingSession {
    state: State,
}

impl MappingSession {
    pub fn new(preserve_refs: bool) -> Self {
        let state = if preserve_refs {
            State::Preserving {
                seen: HashMap::new(),
            }
        } else {
            State::Visited {
                path: HashSet::new(),
            }
        };
        MappingSession { state }
    }

    #[inline(always)]
    pub fn is_preserving(&self) -> bool {
        matches!(self.state, State::Preserving { .. })
    }

    /// Destination handle registered for this identity, if any.
    pub fn lookup(&self, identity: usize, dest: TypeId) -> Option<&dyn Any> {
        match &self.state {
            State::Preserving { seen } => seen.get(&(identity, dest)).map(|b| b.as_ref()),
            State::Visited { .. } => None,
        }
    }

    /// Registers the destination handle for a source identity. Called with
    /// the placeholder before recursing so cyclic recursion observes it.
    pub fn register(&mut self, identity: usize, dest: TypeId, handle: Box<dyn Any>) {
        if let State::Preserving { seen } = &mut self.state {
            seen.insert((identity, dest), handle);
        }
    }

    /// Removes a registration after a failed construction.
    pub fn unregister(&mut self, identity: usize, dest: TypeId) {
        if let State::Preserving { seen } = &mut self.state {
            seen.remove(&(identity, dest));
        }
    }

    /// Visited-mode path entry. Returns false when the identity is already
    /// on the active path, i.e. the traversal has cycled.
    pub fn enter(&mut self, identity: usize) -> bool {
        match &mut self.state {
            State::Visited { path } => path.insert(identity),
            State::Preserving { .. } => true,
        }
    }

    /// Visited-mode path exit; the branch below this identity is complete.
    pub fn leave(&mut self, identity: usize) {
        if let State::Visited { path } = &mut self.state {
            path.remove(&identity);
        }
    }
}
