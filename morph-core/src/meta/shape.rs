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

//! Runtime type metadata.
//!
//! A [`Shape`] is a `'static` description of one Rust type: what kind of
//! thing it is and how to manipulate values of it dynamically. Every hook is
//! a plain `fn` pointer, so a shape tree is a constant — built at compile
//! time, shared freely across threads, and cheap to traverse during plan
//! synthesis.
//!
//! Shapes of struct fields are reached through a `fn() -> &'static Shape`
//! thunk rather than a direct reference; the layer of indirection allows for
//! cyclic type definitions.

use std::any::{Any, TypeId};

use crate::error::Error;
use crate::meta::value::{ScalarKind, ScalarValue};

/// A type whose [`Shape`] is known. Implemented by `#[derive(MorphObject)]`
/// for user structs and unit enums, and by this crate for scalars, wrappers,
/// collections, and shared handles.
///
/// The trait is pure metadata: it carries no mapping-specific contract.
pub trait Morphable: Sized + 'static {
    const SHAPE: &'static Shape;
}

/// Convenience accessor for the shape of `T`.
#[inline(always)]
pub fn shape_of<T: Morphable>() -> &'static Shape {
    T::SHAPE
}

/// Lazy shape accessor; breaks shape-constant cycles for recursive types.
pub type ShapeFn = fn() -> &'static Shape;

/// Projects a field (or inner value) out of a dynamically typed container.
pub type GetFn = for<'a> fn(&'a dyn Any) -> &'a dyn Any;

/// Writes a dynamically typed value into a field of a container.
pub type SetFn = fn(&mut dyn Any, Box<dyn Any>) -> Result<(), Error>;

/// Produces the default value of a type, when one exists.
pub type TryDefaultFn = fn() -> Option<Box<dyn Any>>;

/// Constructs a value from per-field arguments, in field declaration order.
/// Every slot must be populated; the plan builder fills unmatched slots with
/// field defaults before invoking this.
pub type ConstructFn = fn(&mut [Option<Box<dyn Any>>]) -> Result<Box<dyn Any>, Error>;

/// Borrows the value behind a shared handle and runs the callback on it.
/// The borrow is released before the callback's result is returned.
pub type WithInnerFn = fn(
    &dyn Any,
    &mut dyn FnMut(&dyn Any) -> Result<Option<Box<dyn Any>>, Error>,
) -> Result<Option<Box<dyn Any>>, Error>;

/// Metadata root for one type.
pub struct Shape {
    /// Short type name, for diagnostics only.
    pub name: &'static str,
    /// Identity accessor; `(id)()` is the `TypeId` of the described type.
    pub id: fn() -> TypeId,
    /// What kind of type this is, with the kind-specific vtable.
    pub kind: Kind,
    /// Default-value hook. Returns `None` when the type has no default;
    /// the plan builder treats that as a configuration error wherever a
    /// default would be needed.
    pub try_default: TryDefaultFn,
}

impl Shape {
    #[inline(always)]
    pub fn type_id(&self) -> TypeId {
        (self.id)()
    }

    #[inline(always)]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shape").field("name", &self.name).finish()
    }
}

/// The classification axis of a shape.
pub enum Kind {
    Scalar(&'static ScalarShape),
    Enum(&'static EnumShape),
    Option(&'static OptionShape),
    Sequence(&'static SequenceShape),
    Dictionary(&'static DictionaryShape),
    Struct(&'static StructShape),
    Boxed(&'static BoxedShape),
    Shared(&'static SharedShape),
}

/// Vtable for atomic values.
pub struct ScalarShape {
    pub kind: ScalarKind,
    /// Copies the value out into dynamic transport.
    pub read: fn(&dyn Any) -> Result<ScalarValue, Error>,
    /// Materializes a value of exactly this kind from dynamic transport.
    pub write: fn(ScalarValue) -> Result<Box<dyn Any>, Error>,
}

/// One variant of a unit enum.
pub struct VariantShape {
    pub name: &'static str,
    pub discriminant: i64,
}

/// Vtable for unit enums. Variant order matches declaration order.
pub struct EnumShape {
    pub variants: &'static [VariantShape],
    /// Builds the variant at the given index in `variants`.
    pub from_index: fn(usize) -> Result<Box<dyn Any>, Error>,
    /// Index in `variants` of the given value.
    pub index_of: fn(&dyn Any) -> Result<usize, Error>,
}

impl EnumShape {
    /// Case-insensitive variant lookup by name.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.variants
            .iter()
            .position(|v| v.name.eq_ignore_ascii_case(name))
    }

    /// Variant lookup by discriminant value.
    pub fn find_by_discriminant(&self, discriminant: i64) -> Option<usize> {
        self.variants
            .iter()
            .position(|v| v.discriminant == discriminant)
    }
}

/// Vtable for `Option<T>`.
pub struct OptionShape {
    pub inner: &'static Shape,
    /// `Some(&inner)` when present, `None` when absent.
    pub peek: for<'a> fn(&'a dyn Any) -> Result<Option<&'a dyn Any>, Error>,
    /// Wraps an inner value into `Some`.
    pub some: fn(Box<dyn Any>) -> Result<Box<dyn Any>, Error>,
    /// Builds `None`.
    pub none: fn() -> Box<dyn Any>,
}

/// Distinguishes ordered from unordered sequences; both follow the same
/// element rules, only materialization differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceKind {
    List,
    Set,
}

/// Vtable for homogeneous sequences (`Vec<T>`, `HashSet<T>`).
pub struct SequenceShape {
    pub kind: SequenceKind,
    pub element: &'static Shape,
    pub len: fn(&dyn Any) -> Result<usize, Error>,
    /// Borrowing iterator over the elements as dynamic values.
    pub iter: for<'a> fn(&'a dyn Any) -> Result<Box<dyn Iterator<Item = &'a dyn Any> + 'a>, Error>,
    /// Materializes the destination sequence from mapped elements.
    pub build: fn(Vec<Box<dyn Any>>) -> Result<Box<dyn Any>, Error>,
}

/// Vtable for dictionaries. Detected by the classifier; no transformation
/// strategy exists for them, so the plan builder rejects dictionary-typed
/// destination bindings.
pub struct DictionaryShape {
    pub key: &'static Shape,
    pub value: &'static Shape,
}

/// One public field of a struct shape.
pub struct FieldShape {
    /// Field name; source/destination pairing compares names
    /// case-insensitively.
    pub name: &'static str,
    /// Shape of the field type, behind a thunk so self-referential structs
    /// are expressible.
    pub shape: ShapeFn,
    pub get: GetFn,
    pub set: SetFn,
}

impl FieldShape {
    #[inline(always)]
    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }
}

/// Vtable for struct types.
pub struct StructShape {
    /// Public fields in declaration order.
    pub fields: &'static [FieldShape],
    /// All-field constructor. Present for every derived struct (the
    /// primary-constructor analog: parameter names are the field names);
    /// hand-written impls may omit it, in which case construction falls back
    /// to the default value plus per-field assignment.
    pub construct: Option<ConstructFn>,
}

impl StructShape {
    /// Case-insensitive field lookup.
    pub fn find_field(&self, name: &str) -> Option<&'static FieldShape> {
        self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }
}

/// Vtable for `Box<T>`: plain owned indirection, no observable identity.
pub struct BoxedShape {
    pub inner: &'static Shape,
    /// `&Box<T> -> &T`.
    pub deref: GetFn,
    /// Boxes a built inner value.
    pub wrap: fn(Box<dyn Any>) -> Result<Box<dyn Any>, Error>,
}

/// Vtable for shared handles (`Rc<RefCell<T>>`, `Arc<T>`). These are the
/// types with observable identity, so reference preservation and cycle
/// handling attach here.
pub struct SharedShape {
    pub inner: &'static Shape,
    /// Whether the handle supports the placeholder protocol (interior
    /// mutability). Cycles can only be constructed through such handles.
    pub cyclic: bool,
    /// Stable address of the pointee, used as the identity key within one
    /// mapping session.
    pub identity: fn(&dyn Any) -> Result<usize, Error>,
    /// Borrows the pointee and maps it through the callback.
    pub with_inner: WithInnerFn,
    /// Wraps a built inner value into a fresh handle.
    pub wrap: fn(Box<dyn Any>) -> Result<Box<dyn Any>, Error>,
    /// Clones the handle (shares the pointee).
    pub clone_handle: fn(&dyn Any) -> Result<Box<dyn Any>, Error>,
    /// Allocates a default-valued handle to pre-register before recursing.
    /// `None` when the inner type has no default value.
    pub new_placeholder: fn() -> Option<Box<dyn Any>>,
    /// Replaces the pointee of a placeholder handle with the built value.
    /// `None` for handles without interior mutability.
    pub fill: Option<fn(&dyn Any, Box<dyn Any>) -> Result<(), Error>>,
}

/// Downcasts a borrowed dynamic value, or panics with the plan-wiring
/// invariant that was violated. Plans only ever feed a value to hooks of its
/// own shape, so a failure here is a bug in plan synthesis, not user error.
#[inline(always)]
pub fn expect_ref<T: 'static>(any: &dyn Any) -> &T {
    any.downcast_ref::<T>()
        .expect("shape hook received a value of a foreign type")
}

/// Mutable counterpart of [`expect_ref`].
#[inline(always)]
pub fn expect_mut<T: 'static>(any: &mut dyn Any) -> &mut T {
    any.downcast_mut::<T>()
        .expect("shape hook received a value of a foreign type")
}

/// Downcasts an owned dynamic value, reporting the expected type on failure.
#[inline(always)]
pub fn take<T: 'static>(value: Box<dyn Any>, context: &'static str) -> Result<T, Error> {
    value
        .downcast::<T>()
        .map(|b| *b)
        .map_err(|_| Error::type_error(format!("{context}: value is not a {}", std::any::type_name::<T>())))
}
