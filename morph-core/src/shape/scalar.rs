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

use super::impl_scalar;

impl_scalar!(bool, Bool, false);
impl_scalar!(i8, I8, 0i8);
impl_scalar!(i16, I16, 0i16);
impl_scalar!(i32, I32, 0i32);
impl_scalar!(i64, I64, 0i64);
impl_scalar!(u8, U8, 0u8);
impl_scalar!(u16, U16, 0u16);
impl_scalar!(u32, U32, 0u32);
impl_scalar!(u64, U64, 0u64);
impl_scalar!(f32, F32, 0f32);
impl_scalar!(f64, F64, 0f64);
impl_scalar!(char, Char, '\0');
