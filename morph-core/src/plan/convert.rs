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

//! Scalar conversion planning.
//!
//! The converter for a (source kind, destination kind) pair is chosen once,
//! at plan-build time; map calls only execute the chosen `fn`. Identity
//! applies within one kind. Across numeric kinds the host platform's
//! standard explicit conversion applies — `as`-cast semantics: integer
//! narrowing truncates (two's complement), float to integer saturates, no
//! overflow checking, no failure. Every other kind pair has no converter and
//! is a configuration error at the binding that needed it.

use crate::error::Error;
use crate::meta::{ScalarKind, ScalarValue};

/// A compiled scalar conversion step.
pub type ConvertFn = fn(ScalarValue) -> Result<ScalarValue, Error>;

/// Picks the converter for a kind pair, or `None` when no rule applies.
pub fn find_converter(source: ScalarKind, dest: ScalarKind) -> Option<ConvertFn> {
    if source == dest {
        return Some(identity);
    }
    if source.is_numeric() && dest.is_numeric() {
        return Some(numeric_converter(dest));
    }
    None
}

/// The converter used for any numeric source when the destination kind is
/// already known. Also used for enum-discriminant destinations.
pub fn numeric_converter(dest: ScalarKind) -> ConvertFn {
    match dest {
        ScalarKind::I8 => to_i8,
        ScalarKind::I16 => to_i16,
        ScalarKind::I32 => to_i32,
        ScalarKind::I64 => to_i64,
        ScalarKind::U8 => to_u8,
        ScalarKind::U16 => to_u16,
        ScalarKind::U32 => to_u32,
        ScalarKind::U64 => to_u64,
        ScalarKind::F32 => to_f32,
        ScalarKind::F64 => to_f64,
        _ => non_numeric_dest,
    }
}

/// Widens any numeric value to `i64`, truncating floats. Used for enum
/// discriminant matching.
pub fn to_discriminant(value: &ScalarValue) -> Option<i64> {
    if let Some(i) = value.as_i128() {
        return Some(i as i64);
    }
    value.as_f64().map(|f| f as i64)
}

fn identity(value: ScalarValue) -> Result<ScalarValue, Error> {
    Ok(value)
}

fn non_numeric_dest(value: ScalarValue) -> Result<ScalarValue, Error> {
    Err(Error::conversion(format!(
        "no numeric conversion targets {:?}",
        value.kind()
    )))
}

macro_rules! numeric_to {
    ($fn_name:ident, $variant:ident, $ty:ty) => {
        fn $fn_name(value: ScalarValue) -> Result<ScalarValue, Error> {
            if let Some(i) = value.as_i128() {
                return Ok(ScalarValue::$variant(i as $ty));
            }
            if let Some(f) = value.as_f64() {
                return Ok(ScalarValue::$variant(f as $ty));
            }
            Err(Error::conversion(format!(
                "{:?} is not a numeric value",
                value.kind()
            )))
        }
    };
}

numeric_to!(to_i8, I8, i8);
numeric_to!(to_i16, I16, i16);
numeric_to!(to_i32, I32, i32);
numeric_to!(to_i64, I64, i64);
numeric_to!(to_u8, U8, u8);
numeric_to!(to_u16, U16, u16);
numeric_to!(to_u32, U32, u32);
numeric_to!(to_u64, U64, u64);
numeric_to!(to_f32, F32, f32);
numeric_to!(to_f64, F64, f64);
