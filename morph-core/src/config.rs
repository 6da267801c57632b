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

/// Configuration for plan synthesis and mapping behavior.
///
/// Shared between the [`Morph`](crate::morph::Morph) facade, the plan
/// builder, and every [`Mapper`](crate::mapper::Mapper) it hands out, so all
/// parts of one instance agree on the same policies.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether nested complex fields, elements, and shared handles are
    /// mapped recursively. When disabled, every nested-complex binding
    /// produces the destination default instead.
    pub allow_nested: bool,
    /// Maximum nesting depth of the compiled plan graph. Bounds plan
    /// synthesis for self-referential type graphs; runtime cycle safety is
    /// the mapping session's job and does not depend on this value.
    pub max_plan_depth: u32,
    /// Whether reference tracking is enabled. When enabled, shared and
    /// circular references are preserved: every occurrence of one source
    /// handle maps to one destination handle. When disabled, repeat
    /// occurrences of a handle within one call drop to the default value.
    pub preserve_refs: bool,
    /// Capacity of each plan cache (initializers and assigners are cached
    /// separately). Eviction is least-recently-used; an evicted plan is
    /// cheaply rebuilt on next use.
    pub plan_cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            allow_nested: true,
            max_plan_depth: 5,
            preserve_refs: true,
            plan_cache_capacity: 100,
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nested mapping is enabled.
    #[inline(always)]
    pub fn is_allow_nested(&self) -> bool {
        self.allow_nested
    }

    /// Get maximum plan depth.
    #[inline(always)]
    pub fn max_plan_depth(&self) -> u32 {
        self.max_plan_depth
    }

    /// Check if reference preservation is enabled.
    #[inline(always)]
    pub fn is_preserve_refs(&self) -> bool {
        self.preserve_refs
    }

    /// Get the plan cache capacity.
    #[inline(always)]
    pub fn plan_cache_capacity(&self) -> usize {
        self.plan_cache_capacity
    }
}
