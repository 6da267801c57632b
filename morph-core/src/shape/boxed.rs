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

//! Shape support for `Box<T>`: owned indirection with no observable
//! identity. Each occurrence is mapped independently; reference tracking
//! does not apply.

use std::any::{Any, TypeId};

use crate::error::Error;
use crate::meta::{expect_ref, take, BoxedShape, Kind, Morphable, Shape};

fn deref<'a, T: Morphable>(any: &'a dyn Any) -> &'a dyn Any {
    expect_ref::<Box<T>>(any).as_ref()
}

fn wrap<T: Morphable>(value: Box<dyn Any>) -> Result<Box<dyn Any>, Error> {
    Ok(Box::new(Box::new(take::<T>(value, "Box wrap")?)) as Box<dyn Any>)
}

fn try_default<T: Morphable>() -> Option<Box<dyn Any>> {
    let inner = take::<T>((T::SHAPE.try_default)()?, "Box default").ok()?;
    Some(Box::new(Box::new(inner)) as Box<dyn Any>)
}

impl<T: Morphable> Morphable for Box<T> {
    const SHAPE: &'static Shape = &Shape {
        name: "Box",
        id: TypeId::of::<Box<T>>,
        kind: Kind::Boxed(&BoxedShape {
            inner: T::SHAPE,
            deref: deref::<T>,
            wrap: wrap::<T>,
        }),
        try_default: try_default::<T>,
    };
}
