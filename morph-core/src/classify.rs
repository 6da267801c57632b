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

//! Type classification.
//!
//! Pure, stateless predicates over [`Shape`]s. The classifier decides which
//! transformation rule family the plan builder applies to a destination
//! field; it never inspects values and is safe to call concurrently from
//! racing plan builds.
//!
//! The sequence boundary rule: a sequence whose element type is scalar or
//! nullable-scalar is primitive; every other sequence is complex.

use crate::meta::{Kind, ScalarKind, Shape};

/// Coarse category of a shape, as seen by the plan builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Atomic value: copied or converted, never recursed into.
    Scalar,
    /// `Option` of a scalar.
    NullableScalar,
    /// Unit enum; scalar-like with its own conversion rules.
    Enum,
    /// Sequence of scalar-or-nullable-scalar elements; bulk-converted.
    PrimitiveSequence,
    /// Sequence of complex elements; element-wise transformed.
    ComplexSequence,
    /// Key/value dictionary; detected, no transformation strategy exists.
    Dictionary,
    /// Anything recursed into field-by-field (structs, boxes, shared
    /// handles, options of those).
    Complex,
}

/// Classifies a shape into its transformation category.
pub fn classify(shape: &Shape) -> Category {
    match &shape.kind {
        Kind::Scalar(_) => Category::Scalar,
        Kind::Enum(_) => Category::Enum,
        Kind::Option(option) => match &option.inner.kind {
            Kind::Scalar(_) => Category::NullableScalar,
            Kind::Enum(_) => Category::NullableScalar,
            _ => Category::Complex,
        },
        Kind::Sequence(sequence) => {
            if is_scalar_or_nullable_scalar(sequence.element) {
                Category::PrimitiveSequence
            } else {
                Category::ComplexSequence
            }
        }
        Kind::Dictionary(_) => Category::Dictionary,
        Kind::Struct(_) | Kind::Boxed(_) | Kind::Shared(_) => Category::Complex,
    }
}

/// True for atomic value kinds: numerics, boolean, character, text, the
/// date/time kinds, and enumerations.
pub fn is_scalar(shape: &Shape) -> bool {
    matches!(shape.kind, Kind::Scalar(_) | Kind::Enum(_))
}

/// True for an optional wrapper around a scalar.
pub fn is_nullable_scalar(shape: &Shape) -> bool {
    match &shape.kind {
        Kind::Option(option) => is_scalar(option.inner),
        _ => false,
    }
}

fn is_scalar_or_nullable_scalar(shape: &Shape) -> bool {
    is_scalar(shape) || is_nullable_scalar(shape)
}

/// True for sequences whose elements are scalar or nullable-scalar.
pub fn is_primitive_sequence(shape: &Shape) -> bool {
    classify(shape) == Category::PrimitiveSequence
}

/// True for sequences whose elements are complex.
pub fn is_complex_sequence(shape: &Shape) -> bool {
    classify(shape) == Category::ComplexSequence
}

/// True for any shape the plan builder recurses into rather than copies:
/// structs, boxes, shared handles, and optionals of those.
pub fn is_complex(shape: &Shape) -> bool {
    classify(shape) == Category::Complex
}

/// True for dictionary shapes. Detected for completeness; no transformation
/// strategy exists for them.
pub fn is_dictionary(shape: &Shape) -> bool {
    matches!(shape.kind, Kind::Dictionary(_))
}

/// True when standard explicit numeric conversion applies, after unwrapping
/// optionality.
pub fn is_numeric(shape: &Shape) -> bool {
    match &shape.kind {
        Kind::Scalar(scalar) => scalar.kind.is_numeric(),
        Kind::Option(option) => match &option.inner.kind {
            Kind::Scalar(scalar) => scalar.kind.is_numeric(),
            _ => false,
        },
        _ => false,
    }
}

/// The scalar kind of a shape, unwrapping one level of optionality.
pub fn scalar_kind(shape: &Shape) -> Option<ScalarKind> {
    match &shape.kind {
        Kind::Scalar(scalar) => Some(scalar.kind),
        Kind::Option(option) => match &option.inner.kind {
            Kind::Scalar(scalar) => Some(scalar.kind),
            _ => None,
        },
        _ => None,
    }
}
