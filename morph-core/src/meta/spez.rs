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

//! Autoref specialization on stable Rust.
//!
//! Derived code needs to know whether a user type implements [`Default`]
//! without asking the user to declare it: the default value feeds unmatched
//! destination fields and the pre-registered placeholder of the reference
//! preservation protocol. A derive macro cannot see trait impls, so the
//! generated code resolves the question through method-probe priority:
//! the inherent-style impl on `Spez<T>` (which requires `T: Default`) is
//! preferred over the blanket impl on `&Spez<T>` whenever its bound holds.
//!
//! ```rust
//! use morph_core::meta::spez::*;
//!
//! struct NoDefault(u8);
//!
//! assert!((&Spez::<i32>::new()).spez_try_default().is_some());
//! assert!((&Spez::<NoDefault>::new()).spez_try_default().is_none());
//! ```
//!
//! Both traits must be in scope at the probe site; derived code imports the
//! module wholesale.

use std::any::Any;
use std::marker::PhantomData;

/// Probe carrier. The wrapped type is only ever inspected, never stored.
pub struct Spez<T>(PhantomData<T>);

impl<T> Spez<T> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Spez(PhantomData)
    }
}

/// Picked when `T: Default`.
pub trait SpezDefault {
    fn spez_try_default(&self) -> Option<Box<dyn Any>>;
}

impl<T: Default + 'static> SpezDefault for Spez<T> {
    #[inline]
    fn spez_try_default(&self) -> Option<Box<dyn Any>> {
        Some(Box::new(T::default()))
    }
}

/// Fallback picked when `T` has no `Default` impl.
pub trait SpezNoDefault {
    fn spez_try_default(&self) -> Option<Box<dyn Any>>;
}

impl<T> SpezNoDefault for &Spez<T> {
    #[inline]
    fn spez_try_default(&self) -> Option<Box<dyn Any>> {
        None
    }
}
