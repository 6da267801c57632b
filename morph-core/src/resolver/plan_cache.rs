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

//! Bounded LRU store for compiled plans.
//!
//! Keyed by (source type, destination type). `get_or_add` runs the factory
//! outside the lock: concurrent first-time builds for one pair may race and
//! redundantly compute the same logical plan. That is safe — plan synthesis
//! is a pure function of the two shapes, every candidate is behaviorally
//! identical, and whichever entry the cache retains is correct. The factory
//! may re-enter the cache for sub-pairs.
//!
//! Eviction is least-recently-used. An evicted plan is cheaply rebuilt on
//! next use.

use std::any::TypeId;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::error::Error;

/// Cache key: the ordered (source, destination) type pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlanKey {
    pub source: TypeId,
    pub dest: TypeId,
}

impl PlanKey {
    pub fn new(source: TypeId, dest: TypeId) -> Self {
        PlanKey { source, dest }
    }
}

struct CacheInner<V> {
    map: HashMap<PlanKey, V>,
    /// Recency order, most recent at the front.
    order: VecDeque<PlanKey>,
}

pub struct PlanCache<V> {
    capacity: usize,
    inner: Mutex<CacheInner<V>>,
}

impl<V: Clone> PlanCache<V> {
    /// Creates a cache holding up to `capacity` plans.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than zero");
        PlanCache {
            capacity,
            inner: Mutex::new(CacheInner {
                map: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Returns the cached value for `key`, refreshing its recency.
    pub fn get(&self, key: PlanKey) -> Option<V> {
        let mut inner = self.lock();
        let value = inner.map.get(&key).cloned();
        if value.is_some() {
            Self::touch(&mut inner, key);
        }
        value
    }

    /// Returns the value for `key`, computing and storing it on a miss.
    ///
    /// The factory runs without the lock held and may re-enter the cache;
    /// when candidates for one key race — concurrent first builds, or a
    /// self-referential pair completing its own nested builds first — the
    /// last completed insert is retained and the caller keeps the value it
    /// built. A factory error is propagated and nothing is stored.
    pub fn get_or_add(
        &self,
        key: PlanKey,
        factory: impl FnOnce() -> Result<V, Error>,
    ) -> Result<V, Error> {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }
        let value = factory()?;
        let mut inner = self.lock();
        let replaced = inner.map.insert(key, value.clone()).is_some();
        Self::touch(&mut inner, key);
        if !replaced && inner.map.len() > self.capacity {
            if let Some(oldest) = inner.order.pop_back() {
                inner.map.remove(&oldest);
            }
        }
        Ok(value)
    }

    /// Number of cached plans.
    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn touch(inner: &mut CacheInner<V>, key: PlanKey) {
        if let Some(pos) = inner.order.iter().position(|k| *k == key) {
            inner.order.remove(pos);
        }
        inner.order.push_front(key);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner<V>> {
        // A poisoned lock means a factory-free section panicked; the map
        // itself is still structurally sound.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
