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

//! Dynamic transport for scalar values.
//!
//! Scalars cross the plan boundary as [`ScalarValue`] so one compiled
//! conversion function can be shared by every field of the same kind pair.
//! Scalars are atomic: the engine copies or converts them, never recurses
//! into them.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// The scalar universe recognized by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Char,
    Str,
    Date,
    DateTime,
    Duration,
}

impl ScalarKind {
    /// Whether standard explicit numeric conversion applies to this kind.
    ///
    /// Mirrors the narrow numeric set: integers and floats. `bool`, `char`,
    /// text, and the date/time kinds only convert to themselves.
    #[inline(always)]
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ScalarKind::I8
                | ScalarKind::I16
                | ScalarKind::I32
                | ScalarKind::I64
                | ScalarKind::U8
                | ScalarKind::U16
                | ScalarKind::U32
                | ScalarKind::U64
                | ScalarKind::F32
                | ScalarKind::F64
        )
    }
}

/// A scalar value detached from its field, ready for conversion.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarValue {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Char(char),
    Str(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Duration(TimeDelta),
}

impl ScalarValue {
    /// The kind of this value.
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::Bool(_) => ScalarKind::Bool,
            ScalarValue::I8(_) => ScalarKind::I8,
            ScalarValue::I16(_) => ScalarKind::I16,
            ScalarValue::I32(_) => ScalarKind::I32,
            ScalarValue::I64(_) => ScalarKind::I64,
            ScalarValue::U8(_) => ScalarKind::U8,
            ScalarValue::U16(_) => ScalarKind::U16,
            ScalarValue::U32(_) => ScalarKind::U32,
            ScalarValue::U64(_) => ScalarKind::U64,
            ScalarValue::F32(_) => ScalarKind::F32,
            ScalarValue::F64(_) => ScalarKind::F64,
            ScalarValue::Char(_) => ScalarKind::Char,
            ScalarValue::Str(_) => ScalarKind::Str,
            ScalarValue::Date(_) => ScalarKind::Date,
            ScalarValue::DateTime(_) => ScalarKind::DateTime,
            ScalarValue::Duration(_) => ScalarKind::Duration,
        }
    }

    /// Widens an integral value to `i128`. `None` for non-integral kinds.
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            ScalarValue::I8(v) => Some(v as i128),
            ScalarValue::I16(v) => Some(v as i128),
            ScalarValue::I32(v) => Some(v as i128),
            ScalarValue::I64(v) => Some(v as i128),
            ScalarValue::U8(v) => Some(v as i128),
            ScalarValue::U16(v) => Some(v as i128),
            ScalarValue::U32(v) => Some(v as i128),
            ScalarValue::U64(v) => Some(v as i128),
            _ => None,
        }
    }

    /// Widens a float value to `f64`. `None` for non-float kinds.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            ScalarValue::F32(v) => Some(v as f64),
            ScalarValue::F64(v) => Some(v),
            _ => None,
        }
    }
}
