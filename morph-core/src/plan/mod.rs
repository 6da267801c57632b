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

//! Compiled transformation plans.
//!
//! A plan is an opaque, pure function synthesized once per (source type,
//! destination type) pair and invoked on every map call. Plans are immutable
//! after synthesis, `Send + Sync`, and shared process-wide through the plan
//! cache; mappers hold only references.
//!
//! A value function yields `Ok(None)` when a branch produced no value — an
//! absent optional source, a dropped cycle branch in visited mode, or an
//! exhausted plan-depth budget. The enclosing binding turns `None` into the
//! destination's default value.

pub mod builder;
pub mod convert;

use std::any::Any;
use std::sync::Arc;

use crate::error::Error;
use crate::meta::Shape;
use crate::resolver::session::MappingSession;

/// Compiled transformation of one dynamic value into another.
pub type ValueFn =
    Arc<dyn Fn(&mut MappingSession, &dyn Any) -> Result<Option<Box<dyn Any>>, Error> + Send + Sync>;

/// Compiled in-place field assignment onto an existing destination.
pub type AssignFn = Arc<
    dyn Fn(&mut MappingSession, &dyn Any, &mut dyn Any) -> Result<(), Error> + Send + Sync,
>;

/// Compiled initializer: produces a new destination value from a source
/// value within one mapping session.
#[derive(Clone)]
pub struct Initializer {
    pub(crate) source: &'static Shape,
    pub(crate) dest: &'static Shape,
    pub(crate) func: ValueFn,
}

impl Initializer {
    #[inline]
    pub fn apply(
        &self,
        session: &mut MappingSession,
        source: &dyn Any,
    ) -> Result<Option<Box<dyn Any>>, Error> {
        (self.func)(session, source)
    }

    pub fn source_shape(&self) -> &'static Shape {
        self.source
    }

    pub fn dest_shape(&self) -> &'static Shape {
        self.dest
    }
}

/// Compiled assigner: copies matching fields onto an existing destination.
/// Never constructs; unmatched destination fields are left untouched.
#[derive(Clone)]
pub struct Assigner {
    pub(crate) source: &'static Shape,
    pub(crate) dest: &'static Shape,
    pub(crate) func: AssignFn,
}

impl Assigner {
    #[inline]
    pub fn apply(
        &self,
        session: &mut MappingSession,
        source: &dyn Any,
        dest: &mut dyn Any,
    ) -> Result<(), Error> {
        (self.func)(session, source, dest)
    }

    pub fn source_shape(&self) -> &'static Shape {
        self.source
    }

    pub fn dest_shape(&self) -> &'static Shape {
        self.dest
    }
}
