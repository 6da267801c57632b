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

use std::sync::Arc;

use crate::config::Config;
use crate::error::Error;
use crate::mapper::Mapper;
use crate::meta::{Kind, Morphable};
use crate::plan::builder::PlanBuilder;
use crate::plan::{Assigner, Initializer};
use crate::resolver::plan_cache::{PlanCache, PlanKey};

/// The main morph mapping facade.
///
/// `Morph` owns the process-wide plan caches and the configuration every
/// mapper it hands out shares. Create one instance at process start, keep it
/// for the process lifetime, and request mappers from it; plans are
/// synthesized on the first request for a type pair and reused by all later
/// mappers and map calls for that pair.
///
/// # Examples
///
/// Basic usage:
///
/// ```rust, ignore
/// use morph::{Morph, MorphObject};
///
/// #[derive(MorphObject, Default)]
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// #[derive(MorphObject, Default)]
/// struct UserDto {
///     id: i64,
///     name: String,
/// }
///
/// let morph = Morph::default();
/// let mapper = morph.mapper::<User, UserDto>()?;
/// let dto = mapper.map(&User { id: 1, name: "Test".into() })?;
/// ```
///
/// Custom configuration:
///
/// ```rust
/// use morph_core::Morph;
///
/// let morph = Morph::default()
///     .allow_nested(true)
///     .max_plan_depth(10)
///     .preserve_refs(false);
/// ```
pub struct Morph {
    config: Config,
    init_cache: Arc<PlanCache<Initializer>>,
    assign_cache: Arc<PlanCache<Assigner>>,
}

impl Default for Morph {
    fn default() -> Self {
        let config = Config::default();
        let capacity = config.plan_cache_capacity();
        Morph {
            config,
            init_cache: Arc::new(PlanCache::new(capacity)),
            assign_cache: Arc::new(PlanCache::new(capacity)),
        }
    }
}

impl Morph {
    /// Enables or disables nested (recursive) mapping of complex fields,
    /// elements, and shared handles.
    ///
    /// When disabled, nested-complex destination bindings produce the
    /// destination default instead of recursing.
    ///
    /// Returns `self` for method chaining. The default is `true`.
    pub fn allow_nested(mut self, allow_nested: bool) -> Self {
        self.config.allow_nested = allow_nested;
        self
    }

    /// Sets the maximum nesting depth of compiled plan graphs.
    ///
    /// The budget bounds how deep plan synthesis follows nested complex
    /// fields before substituting a constant default — it bounds the
    /// *compiled plan*, not runtime data. Self-referential type graphs
    /// therefore terminate at plan-build time. Runtime cycle safety is
    /// handled by the mapping session regardless of this value.
    ///
    /// Returns `self` for method chaining. The default is `5`.
    pub fn max_plan_depth(mut self, max_plan_depth: u32) -> Self {
        self.config.max_plan_depth = max_plan_depth;
        self
    }

    /// Enables or disables reference preservation.
    ///
    /// When enabled (the default), every occurrence of one shared source
    /// handle within a single map call maps to one destination handle, and
    /// cyclic graphs are reconstructed as cyclic destinations. When
    /// disabled, the legacy policy applies: a cycle back onto the active
    /// traversal path drops that branch, and duplicates are mapped
    /// independently.
    ///
    /// Returns `self` for method chaining.
    pub fn preserve_refs(mut self, preserve_refs: bool) -> Self {
        self.config.preserve_refs = preserve_refs;
        self
    }

    /// Sets the capacity of the plan caches and resets them.
    ///
    /// Returns `self` for method chaining. The default is `100`.
    pub fn plan_cache_capacity(mut self, capacity: usize) -> Self {
        self.config.plan_cache_capacity = capacity;
        self.init_cache = Arc::new(PlanCache::new(capacity));
        self.assign_cache = Arc::new(PlanCache::new(capacity));
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds (or fetches from cache) the plans for the pair and returns a
    /// typed mapper over them.
    ///
    /// This is where configuration errors surface: a destination with no
    /// usable construction strategy or a field with no applicable conversion
    /// rule fails here, on the first request for the pair, never later
    /// during a map call.
    pub fn mapper<S: Morphable, D: Morphable>(&self) -> Result<Mapper<S, D>, Error> {
        let builder = PlanBuilder::new(&self.config, &self.init_cache);
        let init = builder.build_initializer(S::SHAPE, D::SHAPE)?;
        // For struct pairs the in-place plan is synthesized eagerly too, so
        // a mapper that can be created never fails configuration checks on
        // a later map_into call.
        if let (Kind::Struct(_), Kind::Struct(_)) = (&S::SHAPE.kind, &D::SHAPE.kind) {
            let key = PlanKey::new(S::SHAPE.type_id(), D::SHAPE.type_id());
            self.assign_cache
                .get_or_add(key, || builder.build_assigner(S::SHAPE, D::SHAPE))?;
        }
        Ok(Mapper::new(
            self.config.clone(),
            init,
            self.init_cache.clone(),
            self.assign_cache.clone(),
        ))
    }
}
