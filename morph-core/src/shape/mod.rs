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

//! [`Morphable`](crate::meta::Morphable) implementations for the built-in
//! type universe.
//!
//! One module per type family. User structs and enums get their shapes from
//! `#[derive(MorphObject)]`; everything here covers what the derive composes
//! with: scalars, wrappers, collections, and shared handles.

macro_rules! impl_scalar {
    ($ty:ty, $kind:ident, $default:expr) => {
        impl $crate::meta::Morphable for $ty {
            const SHAPE: &'static $crate::meta::Shape = &$crate::meta::Shape {
                name: stringify!($ty),
                id: ::std::any::TypeId::of::<$ty>,
                kind: $crate::meta::Kind::Scalar(&$crate::meta::ScalarShape {
                    kind: $crate::meta::ScalarKind::$kind,
                    read: |any| {
                        Ok($crate::meta::ScalarValue::$kind(
                            $crate::meta::expect_ref::<$ty>(any).clone(),
                        ))
                    },
                    write: |value| match value {
                        $crate::meta::ScalarValue::$kind(v) => {
                            Ok(Box::new(v) as Box<dyn ::std::any::Any>)
                        }
                        other => Err($crate::error::Error::type_error(format!(
                            "expected a {} scalar, got {:?}",
                            stringify!($kind),
                            other.kind()
                        ))),
                    },
                }),
                try_default: || Some(Box::new($default) as Box<dyn ::std::any::Any>),
            };
        }
    };
}

pub(crate) use impl_scalar;

mod arc;
mod boxed;
mod datetime;
mod list;
mod map;
mod option;
mod rc;
mod scalar;
mod set;
mod string;
