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

//! Failure modes: configuration errors surface when the mapper is created,
//! null sources fail the call that passed them, and conversions fail the
//! call that triggered them.

use std::collections::HashMap;

use morph::{Error, Morph, MorphObject};

#[derive(MorphObject, Debug)]
struct Simple {
    id: i32,
    name: String,
}

#[derive(MorphObject, Default, Debug, PartialEq)]
struct SimpleDto {
    id: i32,
    name: String,
}

#[derive(MorphObject, Debug)]
struct WithDict {
    id: i32,
    attributes: HashMap<String, String>,
}

#[derive(MorphObject, Default, Debug)]
struct WithDictDto {
    id: i32,
    attributes: HashMap<String, String>,
}

#[derive(MorphObject, Default, Debug)]
struct DictOnlyOnDest {
    id: i32,
    extras: HashMap<String, i32>,
}

#[derive(MorphObject, Debug)]
struct TextSource {
    id: String,
}

#[derive(MorphObject, Default, Debug)]
struct NumberDto {
    id: i32,
}

#[test]
fn null_source_fails_with_null_input_error() {
    let mapper = Morph::default().mapper::<Simple, SimpleDto>().unwrap();

    let result = mapper.map_opt(None);

    assert!(matches!(result, Err(Error::NullSource(_))));
}

#[test]
fn matched_dictionary_field_is_a_configuration_error() {
    // Dictionaries are classified but have no transformation strategy;
    // binding one fails when the plan is requested, not on a map call.
    let result = Morph::default().mapper::<WithDict, WithDictDto>();

    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn unmatched_dictionary_destination_defaults_to_empty() {
    let mapper = Morph::default().mapper::<Simple, DictOnlyOnDest>().unwrap();

    let dto = mapper
        .map(&Simple {
            id: 1,
            name: "x".to_string(),
        })
        .unwrap();

    assert_eq!(dto.id, 1);
    assert!(dto.extras.is_empty());
}

#[test]
fn text_to_number_has_no_conversion_rule() {
    let result = Morph::default().mapper::<TextSource, NumberDto>();

    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn configuration_errors_carry_a_readable_message() {
    let error = Morph::default()
        .mapper::<WithDict, WithDictDto>()
        .expect_err("dictionary binding must fail");

    let message = error.to_string();
    assert!(message.contains("dictionary"), "message: {message}");
}
