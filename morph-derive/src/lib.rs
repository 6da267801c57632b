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

//! # Morph Derive Macros
//!
//! Procedural macros for the morph object-graph transformation framework.
//!
//! ## `#[derive(MorphObject)]`
//!
//! Emits the runtime type metadata (`impl Morphable`) the mapping engine
//! synthesizes its plans from. The metadata is generic reflection — field
//! names, shapes, accessors, a constructor — and carries no mapping-specific
//! contract: which pairs a type participates in is decided entirely at
//! runtime, by convention.
//!
//! **Supported types:**
//! - Structs with named fields
//! - Unit structs
//! - Enums whose variants are all unit variants (the classic C-like enum)
//!
//! **Example:**
//! ```rust, ignore
//! use morph::MorphObject;
//!
//! #[derive(MorphObject, Default)]
//! struct Person {
//!     id: i64,
//!     name: String,
//!     address: Address,
//!     hobbies: Vec<String>,
//! }
//!
//! #[derive(MorphObject, Default)]
//! struct Address {
//!     street: String,
//!     city: String,
//! }
//!
//! #[derive(MorphObject, Default, Clone, Copy, PartialEq, Debug)]
//! enum Status {
//!     #[default]
//!     Active,
//!     Inactive,
//!     Suspended = 10,
//! }
//! ```
//!
//! Deriving `Default` as well is optional but recommended for destination
//! types: the engine uses the default value for unmatched destination fields
//! and for the placeholders that make cyclic graphs mappable. The derive
//! detects an existing `Default` impl automatically; nothing is required on
//! the type beyond the derive itself.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;

/// Derive macro emitting runtime type metadata for the morph engine.
///
/// # Example
///
/// ```rust, ignore
/// use morph::MorphObject;
///
/// #[derive(MorphObject, Default)]
/// struct User {
///     id: i64,
///     name: String,
/// }
/// ```
#[proc_macro_derive(MorphObject)]
pub fn proc_macro_derive_morph_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_morphable(&input)
}
