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

//! Shape support for `Rc<RefCell<T>>`, the shared mutable handle of object
//! graphs with parent/child links, aliasing, and cycles.
//!
//! The handle carries identity (`Rc::as_ptr`) and supports the placeholder
//! protocol: a default-valued cell can be registered in the mapping session
//! before recursion and filled with the built value afterwards, which is how
//! cyclic graphs terminate while preserving reference sharing.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Error;
use crate::meta::{expect_ref, take, Kind, Morphable, Shape, SharedShape};

fn identity<T: Morphable>(any: &dyn Any) -> Result<usize, Error> {
    Ok(Rc::as_ptr(expect_ref::<Rc<RefCell<T>>>(any)) as usize)
}

fn with_inner<T: Morphable>(
    any: &dyn Any,
    f: &mut dyn FnMut(&dyn Any) -> Result<Option<Box<dyn Any>>, Error>,
) -> Result<Option<Box<dyn Any>>, Error> {
    let handle = expect_ref::<Rc<RefCell<T>>>(any);
    let guard = handle.borrow();
    f(&*guard as &dyn Any)
}

fn wrap<T: Morphable>(value: Box<dyn Any>) -> Result<Box<dyn Any>, Error> {
    let inner = take::<T>(value, "Rc<RefCell> wrap")?;
    Ok(Box::new(Rc::new(RefCell::new(inner))) as Box<dyn Any>)
}

fn clone_handle<T: Morphable>(any: &dyn Any) -> Result<Box<dyn Any>, Error> {
    Ok(Box::new(expect_ref::<Rc<RefCell<T>>>(any).clone()) as Box<dyn Any>)
}

fn new_placeholder<T: Morphable>() -> Option<Box<dyn Any>> {
    let inner = take::<T>((T::SHAPE.try_default)()?, "Rc<RefCell> placeholder").ok()?;
    Some(Box::new(Rc::new(RefCell::new(inner))) as Box<dyn Any>)
}

fn fill<T: Morphable>(placeholder: &dyn Any, built: Box<dyn Any>) -> Result<(), Error> {
    let handle = expect_ref::<Rc<RefCell<T>>>(placeholder);
    *handle.borrow_mut() = take::<T>(built, "Rc<RefCell> fill")?;
    Ok(())
}

fn try_default<T: Morphable>() -> Option<Box<dyn Any>> {
    new_placeholder::<T>()
}

impl<T: Morphable> Morphable for Rc<RefCell<T>> {
    const SHAPE: &'static Shape = &Shape {
        name: "Rc<RefCell>",
        id: TypeId::of::<Rc<RefCell<T>>>,
        kind: Kind::Shared(&SharedShape {
            inner: T::SHAPE,
            cyclic: true,
            identity: identity::<T>,
            with_inner: with_inner::<T>,
            wrap: wrap::<T>,
            clone_handle: clone_handle::<T>,
            new_placeholder: new_placeholder::<T>,
            fill: Some(fill::<T>),
        }),
        try_default: try_default::<T>,
    };
}
