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

//! In-place mapping: the assigner copies matching fields onto an existing
//! destination, never constructs, and leaves unmatched fields alone.

use morph::{Error, Morph, MorphObject};

#[derive(MorphObject, Debug)]
struct Patch {
    id: i32,
    name: String,
}

#[derive(MorphObject, Default, Debug, PartialEq)]
struct Target {
    id: i32,
    name: String,
    revision: u32,
}

#[derive(MorphObject, Debug, PartialEq, Clone, Copy)]
enum Mode {
    Fast,
    Safe,
}

#[derive(MorphObject, Debug)]
struct BadPatch {
    before: i32,
    mode: String,
    after: i32,
}

#[derive(MorphObject, Default, Debug)]
struct Ordered {
    before: i32,
    mode: Mode,
    after: i32,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Fast
    }
}

#[test]
fn assigns_matched_fields_in_place() {
    let mapper = Morph::default().mapper::<Patch, Target>().unwrap();
    let mut target = Target {
        id: 0,
        name: "old".to_string(),
        revision: 7,
    };

    mapper
        .map_into(
            &Patch {
                id: 42,
                name: "new".to_string(),
            },
            &mut target,
        )
        .unwrap();

    assert_eq!(target.id, 42);
    assert_eq!(target.name, "new");
    // No source counterpart: untouched, not defaulted.
    assert_eq!(target.revision, 7);
}

#[test]
fn assignment_follows_declaration_order_and_is_not_atomic() {
    let mapper = Morph::default().mapper::<BadPatch, Ordered>().unwrap();
    let mut target = Ordered {
        before: 0,
        mode: Mode::Safe,
        after: 0,
    };

    let result = mapper.map_into(
        &BadPatch {
            before: 1,
            mode: "warp".to_string(),
            after: 2,
        },
        &mut target,
    );

    assert!(matches!(result, Err(Error::Conversion(_))));
    // Fields before the failing one were assigned, later ones were not.
    assert_eq!(target.before, 1);
    assert_eq!(target.mode, Mode::Safe);
    assert_eq!(target.after, 0);
}

#[test]
fn in_place_mapping_requires_struct_shapes() {
    let mapper = Morph::default().mapper::<Vec<i32>, Vec<i64>>().unwrap();
    let mut target: Vec<i64> = vec![];

    let result = mapper.map_into(&vec![1, 2, 3], &mut target);

    assert!(matches!(result, Err(Error::Configuration(_))));
}
