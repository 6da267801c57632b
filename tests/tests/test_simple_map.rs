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

use morph::{Morph, MorphObject};

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
struct CasedSource {
    user_id: i64,
    display_name: String,
}

#[derive(MorphObject, Default, Debug, PartialEq)]
#[allow(non_snake_case)]
struct CasedDto {
    USER_ID: i64,
    Display_Name: String,
}

#[derive(MorphObject, Default, Debug, PartialEq)]
struct WiderDto {
    id: i32,
    name: String,
    comment: String,
    score: f64,
}

#[test]
fn maps_matching_scalar_fields() {
    let mapper = Morph::default().mapper::<Simple, SimpleDto>().unwrap();
    let source = Simple {
        id: 1,
        name: "Test".to_string(),
    };

    let dto = mapper.map(&source).unwrap();

    assert_eq!(
        dto,
        SimpleDto {
            id: 1,
            name: "Test".to_string()
        }
    );
}

#[test]
fn field_matching_is_case_insensitive() {
    let mapper = Morph::default().mapper::<CasedSource, CasedDto>().unwrap();
    let source = CasedSource {
        user_id: 42,
        display_name: "Alice".to_string(),
    };

    let dto = mapper.map(&source).unwrap();

    assert_eq!(dto.USER_ID, 42);
    assert_eq!(dto.Display_Name, "Alice");
}

#[test]
fn unmatched_destination_fields_get_defaults() {
    let mapper = Morph::default().mapper::<Simple, WiderDto>().unwrap();
    let source = Simple {
        id: 9,
        name: "partial".to_string(),
    };

    let dto = mapper.map(&source).unwrap();

    assert_eq!(dto.id, 9);
    assert_eq!(dto.name, "partial");
    assert_eq!(dto.comment, "");
    assert_eq!(dto.score, 0.0);
}

#[test]
fn extra_source_fields_are_ignored() {
    let mapper = Morph::default().mapper::<WiderDto, SimpleDto>().unwrap();
    let source = WiderDto {
        id: 3,
        name: "narrow".to_string(),
        comment: "dropped".to_string(),
        score: 1.5,
    };

    let dto = mapper.map(&source).unwrap();

    assert_eq!(
        dto,
        SimpleDto {
            id: 3,
            name: "narrow".to_string()
        }
    );
}

#[test]
fn independent_map_calls_are_idempotent() {
    let morph = Morph::default();
    let mapper = morph.mapper::<Simple, SimpleDto>().unwrap();
    let source = Simple {
        id: 7,
        name: "again".to_string(),
    };

    let first = mapper.map(&source).unwrap();
    let second = mapper.map(&source).unwrap();

    assert_eq!(first, second);
}

#[test]
fn mappers_from_one_instance_share_plans() {
    let morph = Morph::default();
    let a = morph.mapper::<Simple, SimpleDto>().unwrap();
    let b = morph.mapper::<Simple, SimpleDto>().unwrap();
    let source = Simple {
        id: 11,
        name: "shared".to_string(),
    };

    assert_eq!(a.map(&source).unwrap(), b.map(&source).unwrap());
}
