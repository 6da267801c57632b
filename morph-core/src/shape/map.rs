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

//! Shape support for `HashMap<K, V>`.
//!
//! Dictionaries are classified but carry no transformation strategy: a
//! destination binding that would have to produce one from a source field is
//! rejected at plan-build time. An unmatched dictionary destination field
//! still defaults to an empty map.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::hash::Hash;

use crate::meta::{DictionaryShape, Kind, Morphable, Shape};

fn try_default<K: Morphable + Eq + Hash, V: Morphable>() -> Option<Box<dyn Any>> {
    Some(Box::new(HashMap::<K, V>::new()) as Box<dyn Any>)
}

impl<K: Morphable + Eq + Hash, V: Morphable> Morphable for HashMap<K, V> {
    const SHAPE: &'static Shape = &Shape {
        name: "HashMap",
        id: TypeId::of::<HashMap<K, V>>,
        kind: Kind::Dictionary(&DictionaryShape {
            key: K::SHAPE,
            value: V::SHAPE,
        }),
        try_default: try_default::<K, V>,
    };
}
