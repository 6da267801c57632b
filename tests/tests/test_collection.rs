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

use std::collections::HashSet;

use morph::{Morph, MorphObject};

#[derive(MorphObject, Debug)]
struct Item {
    value: i32,
}

#[derive(MorphObject, Default, Debug, PartialEq)]
struct ItemDto {
    value: i64,
}

#[derive(MorphObject, Debug)]
struct Container {
    items: Vec<Item>,
    scores: Vec<i32>,
    tags: Vec<String>,
}

#[derive(MorphObject, Default, Debug, PartialEq)]
struct ContainerDto {
    items: Vec<ItemDto>,
    scores: Vec<i64>,
    tags: HashSet<String>,
}

#[derive(MorphObject, Debug)]
struct NullableNumbers {
    values: Vec<Option<i32>>,
}

#[derive(MorphObject, Default, Debug, PartialEq)]
struct PlainNumbers {
    values: Vec<i64>,
}

#[test]
fn maps_complex_collections_element_wise() {
    let mapper = Morph::default().mapper::<Container, ContainerDto>().unwrap();
    let source = Container {
        items: vec![Item { value: 1 }, Item { value: 2 }],
        scores: vec![],
        tags: vec![],
    };

    let dto = mapper.map(&source).unwrap();

    assert_eq!(dto.items.len(), 2);
    assert_eq!(dto.items[0], ItemDto { value: 1 });
    assert_eq!(dto.items[1], ItemDto { value: 2 });
}

#[test]
fn bulk_converts_primitive_collections() {
    let mapper = Morph::default().mapper::<Container, ContainerDto>().unwrap();
    let source = Container {
        items: vec![],
        scores: vec![10, 20, 30],
        tags: vec![],
    };

    let dto = mapper.map(&source).unwrap();

    assert_eq!(dto.scores, vec![10i64, 20, 30]);
}

#[test]
fn materializes_into_destination_collection_kind() {
    let mapper = Morph::default().mapper::<Container, ContainerDto>().unwrap();
    let source = Container {
        items: vec![],
        scores: vec![],
        tags: vec!["a".to_string(), "b".to_string(), "a".to_string()],
    };

    let dto = mapper.map(&source).unwrap();

    let expected: HashSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    assert_eq!(dto.tags, expected);
}

#[test]
fn nullable_scalar_elements_fall_back_to_zero() {
    let mapper = Morph::default()
        .mapper::<NullableNumbers, PlainNumbers>()
        .unwrap();
    let source = NullableNumbers {
        values: vec![Some(1), None, Some(3)],
    };

    let dto = mapper.map(&source).unwrap();

    assert_eq!(dto.values, vec![1i64, 0, 3]);
}

#[test]
fn preserves_cardinality_and_order() {
    let mapper = Morph::default().mapper::<Container, ContainerDto>().unwrap();
    let source = Container {
        items: (0..100).map(|value| Item { value }).collect(),
        scores: vec![],
        tags: vec![],
    };

    let dto = mapper.map(&source).unwrap();

    assert_eq!(dto.items.len(), 100);
    for (index, item) in dto.items.iter().enumerate() {
        assert_eq!(item.value, index as i64);
    }
}
