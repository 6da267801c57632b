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

//! Shape support for `HashSet<T>`, the unordered kind of the sequence model.
//! Element rules match lists; only materialization differs. Iteration order
//! is whatever the set yields, so mapping a set into a list has no
//! guaranteed order.

use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::hash::Hash;

use crate::error::Error;
use crate::meta::{expect_ref, take, Kind, Morphable, SequenceKind, SequenceShape, Shape};

fn len<T: Morphable + Eq + Hash>(any: &dyn Any) -> Result<usize, Error> {
    Ok(expect_ref::<HashSet<T>>(any).len())
}

fn iter<'a, T: Morphable + Eq + Hash>(
    any: &'a dyn Any,
) -> Result<Box<dyn Iterator<Item = &'a dyn Any> + 'a>, Error> {
    Ok(Box::new(
        expect_ref::<HashSet<T>>(any).iter().map(|v| v as &dyn Any),
    ))
}

fn build<T: Morphable + Eq + Hash>(items: Vec<Box<dyn Any>>) -> Result<Box<dyn Any>, Error> {
    let mut out = HashSet::with_capacity(items.len());
    for item in items {
        out.insert(take::<T>(item, "HashSet element")?);
    }
    Ok(Box::new(out) as Box<dyn Any>)
}

fn try_default<T: Morphable + Eq + Hash>() -> Option<Box<dyn Any>> {
    Some(Box::new(HashSet::<T>::new()) as Box<dyn Any>)
}

impl<T: Morphable + Eq + Hash> Morphable for HashSet<T> {
    const SHAPE: &'static Shape = &Shape {
        name: "HashSet",
        id: TypeId::of::<HashSet<T>>,
        kind: Kind::Sequence(&SequenceShape {
            kind: SequenceKind::Set,
            element: T::SHAPE,
            len: len::<T>,
            iter: iter::<T>,
            build: build::<T>,
        }),
        try_default: try_default::<T>,
    };
}
