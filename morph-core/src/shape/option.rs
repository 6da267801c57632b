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

//! Shape support for `Option<T>`.
//!
//! An optional wrapper is transparent to classification: `Option<scalar>` is
//! a nullable scalar, `Option<complex>` a nullable complex value. The plan
//! builder peels the wrapper on either side of a binding; absence flows
//! through as `None` and lands as the destination default when the
//! destination is not optional itself.

use std::any::{Any, TypeId};

use crate::error::Error;
use crate::meta::{expect_ref, take, Kind, Morphable, OptionShape, Shape};

fn peek<'a, T: Morphable>(any: &'a dyn Any) -> Result<Option<&'a dyn Any>, Error> {
    Ok(expect_ref::<Option<T>>(any).as_ref().map(|v| v as &dyn Any))
}

fn some<T: Morphable>(value: Box<dyn Any>) -> Result<Box<dyn Any>, Error> {
    Ok(Box::new(Some(take::<T>(value, "Option wrap")?)) as Box<dyn Any>)
}

fn none<T: Morphable>() -> Box<dyn Any> {
    Box::new(None::<T>) as Box<dyn Any>
}

fn try_default<T: Morphable>() -> Option<Box<dyn Any>> {
    Some(Box::new(None::<T>) as Box<dyn Any>)
}

impl<T: Morphable> Morphable for Option<T> {
    const SHAPE: &'static Shape = &Shape {
        name: "Option",
        id: TypeId::of::<Option<T>>,
        kind: Kind::Option(&OptionShape {
            inner: T::SHAPE,
            peek: peek::<T>,
            some: some::<T>,
            none: none::<T>,
        }),
        try_default: try_default::<T>,
    };
}
