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

use chrono::NaiveDate;
use morph::{Morph, MorphObject};

#[derive(MorphObject, Debug)]
struct NestedSource {
    description: String,
    created_at: NaiveDate,
}

#[derive(MorphObject, Default, Debug, PartialEq)]
struct NestedDestination {
    description: String,
    created_at: NaiveDate,
}

#[derive(MorphObject, Debug)]
struct Source {
    id: i32,
    name: String,
    nested: NestedSource,
}

#[derive(MorphObject, Default, Debug, PartialEq)]
struct Destination {
    id: i32,
    name: String,
    nested: NestedDestination,
}

#[derive(MorphObject, Debug)]
struct OptSource {
    id: i32,
    nested: Option<NestedSource>,
}

#[derive(MorphObject, Default, Debug, PartialEq)]
struct OptDestination {
    id: i32,
    nested: Option<NestedDestination>,
}

#[derive(MorphObject, Debug)]
struct BoxedSource {
    inner: Box<NestedSource>,
}

#[derive(MorphObject, Default, Debug, PartialEq)]
struct BoxedDestination {
    inner: Box<NestedDestination>,
}

fn sample_nested() -> NestedSource {
    NestedSource {
        description: "Nested Test".to_string(),
        created_at: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    }
}

#[test]
fn maps_nested_objects_recursively() {
    let mapper = Morph::default().mapper::<Source, Destination>().unwrap();
    let source = Source {
        id: 1,
        name: "Test".to_string(),
        nested: sample_nested(),
    };

    let destination = mapper.map(&source).unwrap();

    assert_eq!(destination.id, 1);
    assert_eq!(destination.name, "Test");
    assert_eq!(destination.nested.description, "Nested Test");
    assert_eq!(
        destination.nested.created_at,
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
    );
}

#[test]
fn absent_nested_source_maps_to_absent_destination() {
    let mapper = Morph::default()
        .mapper::<OptSource, OptDestination>()
        .unwrap();
    let source = OptSource {
        id: 2,
        nested: None,
    };

    let destination = mapper.map(&source).unwrap();

    assert_eq!(destination.id, 2);
    assert_eq!(destination.nested, None);
}

#[test]
fn present_nested_source_maps_to_present_destination() {
    let mapper = Morph::default()
        .mapper::<OptSource, OptDestination>()
        .unwrap();
    let source = OptSource {
        id: 3,
        nested: Some(sample_nested()),
    };

    let destination = mapper.map(&source).unwrap();

    let nested = destination.nested.expect("nested value mapped");
    assert_eq!(nested.description, "Nested Test");
}

#[test]
fn optional_source_into_required_destination_uses_inner_value() {
    let mapper = Morph::default().mapper::<OptSource, Destination>().unwrap();
    let source = OptSource {
        id: 4,
        nested: Some(sample_nested()),
    };

    let destination = mapper.map(&source).unwrap();

    assert_eq!(destination.nested.description, "Nested Test");
    // The destination has no `name` counterpart in the source.
    assert_eq!(destination.name, "");
}

#[test]
fn absent_optional_source_into_required_destination_uses_default() {
    let mapper = Morph::default().mapper::<OptSource, Destination>().unwrap();
    let source = OptSource {
        id: 5,
        nested: None,
    };

    let destination = mapper.map(&source).unwrap();

    assert_eq!(destination.nested, NestedDestination::default());
}

#[test]
fn boxed_nested_objects_are_transparent() {
    let mapper = Morph::default()
        .mapper::<BoxedSource, BoxedDestination>()
        .unwrap();
    let source = BoxedSource {
        inner: Box::new(sample_nested()),
    };

    let destination = mapper.map(&source).unwrap();

    assert_eq!(destination.inner.description, "Nested Test");
}
