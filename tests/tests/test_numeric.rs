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

//! Numeric coercion follows the platform's explicit conversion semantics:
//! integer narrowing truncates, floats drop their fraction toward zero, and
//! optionality unwraps with the zero value standing in for absence.

use morph::{Morph, MorphObject};

#[derive(MorphObject, Debug)]
struct Source {
    wide: i64,
    float: f64,
    small: i32,
    maybe: Option<i32>,
    plain: i32,
}

#[derive(MorphObject, Default, Debug, PartialEq)]
struct Narrowed {
    wide: i8,
    float: f32,
    small: f64,
    maybe: i64,
    plain: Option<i64>,
}

#[test]
fn integer_narrowing_truncates() {
    let mapper = Morph::default().mapper::<Source, Narrowed>().unwrap();
    let source = Source {
        wide: 0x1_42,
        float: 0.0,
        small: 0,
        maybe: None,
        plain: 0,
    };

    let dto = mapper.map(&source).unwrap();

    assert_eq!(dto.wide, 0x42);
}

#[test]
fn float_to_float_and_int_to_float() {
    let mapper = Morph::default().mapper::<Source, Narrowed>().unwrap();
    let source = Source {
        wide: 0,
        float: 2.5,
        small: 7,
        maybe: None,
        plain: 0,
    };

    let dto = mapper.map(&source).unwrap();

    assert_eq!(dto.float, 2.5f32);
    assert_eq!(dto.small, 7.0);
}

#[test]
fn present_optional_converts_absent_yields_zero() {
    let mapper = Morph::default().mapper::<Source, Narrowed>().unwrap();

    let dto = mapper
        .map(&Source {
            wide: 0,
            float: 0.0,
            small: 0,
            maybe: Some(41),
            plain: 0,
        })
        .unwrap();
    assert_eq!(dto.maybe, 41i64);

    let dto = mapper
        .map(&Source {
            wide: 0,
            float: 0.0,
            small: 0,
            maybe: None,
            plain: 0,
        })
        .unwrap();
    assert_eq!(dto.maybe, 0i64);
}

#[test]
fn plain_value_wraps_into_optional_destination() {
    let mapper = Morph::default().mapper::<Source, Narrowed>().unwrap();
    let source = Source {
        wide: 0,
        float: 0.0,
        small: 0,
        maybe: None,
        plain: 123,
    };

    let dto = mapper.map(&source).unwrap();

    assert_eq!(dto.plain, Some(123i64));
}
