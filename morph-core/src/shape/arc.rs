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

//! Shape support for `Arc<T>`, the shared immutable handle.
//!
//! Carries identity, so aliased occurrences map to one destination handle
//! under reference preservation. No interior mutability means no placeholder
//! protocol; that is fine because a strong-reference cycle through plain
//! `Arc` values cannot be constructed in the first place — the handle is
//! registered after its pointee has been built.

use std::any::{Any, TypeId};
use std::sync::Arc;

use crate::error::Error;
use crate::meta::{expect_ref, take, Kind, Morphable, Shape, SharedShape};

fn identity<T: Morphable>(any: &dyn Any) -> Result<usize, Error> {
    Ok(Arc::as_ptr(expect_ref::<Arc<T>>(any)) as usize)
}

fn with_inner<T: Morphable>(
    any: &dyn Any,
    f: &mut dyn FnMut(&dyn Any) -> Result<Option<Box<dyn Any>>, Error>,
) -> Result<Option<Box<dyn Any>>, Error> {
    f(expect_ref::<Arc<T>>(any).as_ref())
}

fn wrap<T: Morphable>(value: Box<dyn Any>) -> Result<Box<dyn Any>, Error> {
    Ok(Box::new(Arc::new(take::<T>(value, "Arc wrap")?)) as Box<dyn Any>)
}

fn clone_handle<T: Morphable>(any: &dyn Any) -> Result<Box<dyn Any>, Error> {
    Ok(Box::new(expect_ref::<Arc<T>>(any).clone()) as Box<dyn Any>)
}

fn new_placeholder<T: Morphable>() -> Option<Box<dyn Any>> {
    None
}

fn try_default<T: Morphable>() -> Option<Box<dyn Any>> {
    let inner = take::<T>((T::SHAPE.try_default)()?, "Arc default").ok()?;
    Some(Box::new(Arc::new(inner)) as Box<dyn Any>)
}

impl<T: Morphable> Morphable for Arc<T> {
    const SHAPE: &'static Shape = &Shape {
        name: "Arc",
        id: TypeId::of::<Arc<T>>,
        kind: Kind::Shared(&SharedShape {
            inner: T::SHAPE,
            cyclic: false,
            identity: identity::<T>,
            with_inner: with_inner::<T>,
            wrap: wrap::<T>,
            clone_handle: clone_handle::<T>,
            new_placeholder: new_placeholder::<T>,
            fill: None,
        }),
        try_default: try_default::<T>,
    };
}
