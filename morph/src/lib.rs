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

//! # Morph
//!
//! Morph is a convention-based object-graph transformation framework: it
//! maps a value of one type into a value of another type whose fields are
//! derived from the source's fields, with no mapping declaration on either
//! type. Field pairing is by case-insensitive name; per (source,
//! destination) pair a transformation plan is synthesized once from runtime
//! type metadata, compiled into directly callable closures, cached, and
//! reused — map calls after the first run at near-hand-written speed.
//!
//! ## Key Features
//!
//! - **Convention over configuration**: same-name fields map automatically;
//!   neither type declares anything beyond `#[derive(MorphObject)]`
//! - **Compiled plans**: one synthesis per type pair, cached in a bounded
//!   LRU store and shared across threads
//! - **Deep graphs**: nested objects, optionals, boxes, `Vec`/`HashSet`
//!   collections, numeric and enum coercions
//! - **Reference preservation**: aliased and cyclic `Rc<RefCell<_>>` graphs
//!   map to aliased and cyclic destinations, by default
//! - **Fail fast**: unmappable pairs are rejected when the mapper is
//!   created, not on a later map call
//!
//! ## Mapping objects
//!
//! ```rust
//! use morph::{Morph, MorphObject};
//!
//! #[derive(MorphObject, Debug)]
//! struct User {
//!     id: i64,
//!     name: String,
//!     age: i32,
//! }
//!
//! #[derive(MorphObject, Default, Debug, PartialEq)]
//! struct UserDto {
//!     id: i64,
//!     name: String,
//!     age: i64,
//! }
//!
//! # fn main() -> Result<(), morph::Error> {
//! let morph = Morph::default();
//! let mapper = morph.mapper::<User, UserDto>()?;
//!
//! let user = User {
//!     id: 7,
//!     name: "Alice".to_string(),
//!     age: 30,
//! };
//! let dto = mapper.map(&user)?;
//!
//! assert_eq!(dto.id, 7);
//! assert_eq!(dto.name, "Alice");
//! assert_eq!(dto.age, 30i64);
//! # Ok(())
//! # }
//! ```
//!
//! ## Record-shaped destinations
//!
//! Destinations are built through their all-field constructor (the
//! primary-constructor path), so immutable record-like types need no
//! setters and no `Default`:
//!
//! ```rust
//! use morph::{Morph, MorphObject};
//!
//! #[derive(MorphObject)]
//! struct Source {
//!     id: i32,
//!     name: String,
//! }
//!
//! #[derive(MorphObject, Debug, PartialEq)]
//! struct Record {
//!     id: i32,
//!     name: String,
//! }
//!
//! # fn main() -> Result<(), morph::Error> {
//! let mapper = Morph::default().mapper::<Source, Record>()?;
//! let record = mapper.map(&Source { id: 1, name: "Test".into() })?;
//! assert_eq!(record, Record { id: 1, name: "Test".into() });
//! # Ok(())
//! # }
//! ```
//!
//! ## Shared references and cycles
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use morph::{Morph, MorphObject};
//!
//! #[derive(MorphObject, Default)]
//! struct Node {
//!     value: i32,
//!     next: Option<Rc<RefCell<Node>>>,
//! }
//!
//! #[derive(MorphObject, Default)]
//! struct NodeDto {
//!     value: i32,
//!     next: Option<Rc<RefCell<NodeDto>>>,
//! }
//!
//! # fn main() -> Result<(), morph::Error> {
//! let a = Rc::new(RefCell::new(Node { value: 1, next: None }));
//! let b = Rc::new(RefCell::new(Node { value: 2, next: Some(a.clone()) }));
//! a.borrow_mut().next = Some(b.clone());
//!
//! let mapper = Morph::default().mapper::<Rc<RefCell<Node>>, Rc<RefCell<NodeDto>>>()?;
//! let dto = mapper.map(&a)?;
//!
//! // The cycle is reconstructed: a -> b -> a.
//! let back = dto.borrow().next.as_ref().unwrap().borrow().next.clone().unwrap();
//! assert!(Rc::ptr_eq(&dto, &back));
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use morph::Morph;
//!
//! let morph = Morph::default()
//!     .allow_nested(true)
//!     .max_plan_depth(10)
//!     .preserve_refs(false);
//! ```
//!
//! - `allow_nested` — map nested complex fields recursively (default on)
//! - `max_plan_depth` — bound on the compiled plan graph; self-referential
//!   type graphs terminate at plan-build time (default 5)
//! - `preserve_refs` — preserve reference sharing and reconstruct cycles
//!   (default on); off selects the legacy visited-set policy that drops
//!   cyclic branches instead
//!
//! ## Error Handling
//!
//! All fallible surfaces return [`Error`]:
//! configuration errors (`mapper()` time — no construction strategy, no
//! conversion rule), null-source errors (`map_opt(None)`), and call-time
//! conversion errors (an enum-by-name parse with no matching variant).
//!
//! ```rust
//! use morph::{Error, Morph, MorphObject};
//!
//! #[derive(MorphObject)]
//! struct Payload {
//!     value: i32,
//! }
//!
//! #[derive(MorphObject, Default)]
//! struct PayloadDto {
//!     value: i32,
//! }
//!
//! fn convert(payload: Option<&Payload>) -> Result<PayloadDto, Error> {
//!     let mapper = Morph::default().mapper::<Payload, PayloadDto>()?;
//!     mapper.map_opt(payload)
//! }
//! ```

pub use morph_core::{
    classify, config::Config, error::Error, mapper::Mapper, meta, meta::Morphable, morph::Morph,
};
pub use morph_derive::MorphObject;
