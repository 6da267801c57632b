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

//! The typed mapper facade.
//!
//! A [`Mapper`] wraps the cached plans for one (source, destination) pair.
//! Every entry point opens exactly one [`MappingSession`] for its duration:
//! single-object and in-place calls get a fresh session each, a batch call
//! shares one session across all elements so reference preservation and
//! cycle detection span the whole batch.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::config::Config;
use crate::error::Error;
use crate::meta::{take, Morphable};
use crate::plan::builder::PlanBuilder;
use crate::plan::{Assigner, Initializer};
use crate::resolver::plan_cache::{PlanCache, PlanKey};
use crate::resolver::session::MappingSession;

/// Compiled, reusable transformer from `S` values to `D` values.
///
/// Cheap to clone and safe to share across threads; all mutable state lives
/// in per-call sessions.
pub struct Mapper<S, D> {
    config: Config,
    init: Initializer,
    init_cache: Arc<PlanCache<Initializer>>,
    assign_cache: Arc<PlanCache<Assigner>>,
    _marker: PhantomData<fn(&S) -> D>,
}

impl<S, D> Clone for Mapper<S, D> {
    fn clone(&self) -> Self {
        Mapper {
            config: self.config.clone(),
            init: self.init.clone(),
            init_cache: self.init_cache.clone(),
            assign_cache: self.assign_cache.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, D> std::fmt::Debug for Mapper<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapper").finish_non_exhaustive()
    }
}

impl<S: Morphable, D: Morphable> Mapper<S, D> {
    pub(crate) fn new(
        config: Config,
        init: Initializer,
        init_cache: Arc<PlanCache<Initializer>>,
        assign_cache: Arc<PlanCache<Assigner>>,
    ) -> Self {
        Mapper {
            config,
            init,
            init_cache,
            assign_cache,
            _marker: PhantomData,
        }
    }

    /// Transforms one source value into a newly constructed destination.
    pub fn map(&self, source: &S) -> Result<D, Error> {
        let mut session = MappingSession::new(self.config.is_preserve_refs());
        self.map_in_session(&mut session, source)
    }

    /// Like [`Mapper::map`], for callers holding an optional source. An
    /// absent source fails with [`Error::NullSource`].
    pub fn map_opt(&self, source: Option<&S>) -> Result<D, Error> {
        match source {
            Some(source) => self.map(source),
            None => Err(Error::null_source(format!(
                "source value of type {} is required",
                S::SHAPE.name
            ))),
        }
    }

    /// Copies matching fields of the source onto an existing destination.
    /// No construction occurs; destination fields without a source
    /// counterpart keep their current values. Assignment follows destination
    /// field declaration order and is not atomic on failure.
    pub fn map_into(&self, source: &S, dest: &mut D) -> Result<(), Error> {
        let assigner = self.assigner()?;
        let mut session = MappingSession::new(self.config.is_preserve_refs());
        assigner.apply(&mut session, source as &dyn Any, dest as &mut dyn Any)
    }

    /// Transforms a batch of sources into an eagerly materialized vector,
    /// matching input cardinality and order. One session spans the whole
    /// batch: two elements aliasing the same source handle map to the same
    /// destination handle.
    pub fn map_many<'s, I>(&self, sources: I) -> Result<Vec<D>, Error>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
    {
        let iter = sources.into_iter();
        let mut out = Vec::with_capacity(iter.size_hint().0);
        let mut session = MappingSession::new(self.config.is_preserve_refs());
        for source in iter {
            out.push(self.map_in_session(&mut session, source)?);
        }
        Ok(out)
    }

    fn map_in_session(&self, session: &mut MappingSession, source: &S) -> Result<D, Error> {
        let built = self.init.apply(session, source as &dyn Any)?;
        let boxed = built.ok_or_else(|| {
            Error::conversion(format!(
                "mapping produced no value for {}",
                D::SHAPE.name
            ))
        })?;
        take::<D>(boxed, "map result")
    }

    /// The assigner plan is its own cache entry, built on first in-place
    /// call for this pair.
    fn assigner(&self) -> Result<Assigner, Error> {
        let key = PlanKey::new(S::SHAPE.type_id(), D::SHAPE.type_id());
        self.assign_cache.get_or_add(key, || {
            PlanBuilder::new(&self.config, &self.init_cache)
                .build_assigner(S::SHAPE, D::SHAPE)
        })
    }
}
