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

//! Core engine of the morph object-graph transformation framework.
//!
//! Given a source value of one shape and a destination type of another, the
//! engine produces (or populates) a destination whose fields are derived
//! from the source's by convention — case-insensitive name matching —
//! without either type declaring any mapping-specific contract. Per
//! (source type, destination type) pair a transformation plan is synthesized
//! once from runtime type metadata, compiled into directly callable
//! closures, cached, and reused by every later call.
//!
//! The moving parts:
//!
//! - [`meta`] — the reflection substrate: [`Shape`](meta::Shape) metadata
//!   trees exposed through the [`Morphable`](meta::Morphable) trait,
//!   emitted for user types by `#[derive(MorphObject)]`.
//! - [`classify`] — pure predicates categorizing shapes into scalars,
//!   sequences, dictionaries, and complex types.
//! - [`plan`] — plan synthesis and the compiled plan types.
//! - [`resolver`] — the bounded LRU plan cache and the per-call mapping
//!   session that makes aliased and cyclic graphs terminate.
//! - [`morph::Morph`] / [`mapper::Mapper`] — the facade handed to callers.
//!
//! Most users depend on the `morph` facade crate instead of this one.

pub mod classify;
pub mod config;
pub mod error;
pub mod mapper;
pub mod meta;
pub mod morph;
pub mod plan;
pub mod resolver;
mod shape;

pub use config::Config;
pub use error::Error;
pub use mapper::Mapper;
pub use meta::Morphable;
pub use morph::Morph;
