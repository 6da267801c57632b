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

//! Concurrency: plans are shared read-only across threads, racing first
//! builds are benign, and every call owns its session.

use std::sync::Arc;
use std::thread;

use morph::{Morph, MorphObject};

#[derive(MorphObject, Debug)]
struct Event {
    id: i64,
    kind: String,
    weight: f64,
}

#[derive(MorphObject, Default, Debug, PartialEq)]
struct EventDto {
    id: i64,
    kind: String,
    weight: f32,
}

#[test]
fn concurrent_mapping_through_one_shared_instance() {
    let morph = Arc::new(Morph::default());

    let handles: Vec<_> = (0..8)
        .map(|thread_id| {
            let morph = morph.clone();
            thread::spawn(move || {
                // Every thread races plan synthesis for the same pair; the
                // survivors are behaviorally identical.
                let mapper = morph.mapper::<Event, EventDto>().unwrap();
                for i in 0..200i64 {
                    let source = Event {
                        id: thread_id * 1000 + i,
                        kind: format!("kind-{i}"),
                        weight: i as f64 / 2.0,
                    };
                    let dto = mapper.map(&source).unwrap();
                    assert_eq!(dto.id, thread_id * 1000 + i);
                    assert_eq!(dto.kind, format!("kind-{i}"));
                    assert_eq!(dto.weight, (i as f64 / 2.0) as f32);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn mapper_handles_cross_thread_boundaries() {
    let morph = Morph::default();
    let mapper = morph.mapper::<Event, EventDto>().unwrap();

    let handle = thread::spawn(move || {
        let source = Event {
            id: 1,
            kind: "moved".to_string(),
            weight: 1.0,
        };
        mapper.map(&source).unwrap()
    });

    let dto = handle.join().unwrap();
    assert_eq!(dto.kind, "moved");
}

#[test]
fn batches_are_eager_ordered_and_complete() {
    let morph = Morph::default();
    let mapper = morph.mapper::<Event, EventDto>().unwrap();
    let sources: Vec<Event> = (0..50)
        .map(|i| Event {
            id: i,
            kind: format!("k{i}"),
            weight: 0.0,
        })
        .collect();

    let mapped = mapper.map_many(&sources).unwrap();

    assert_eq!(mapped.len(), sources.len());
    for (i, dto) in mapped.iter().enumerate() {
        assert_eq!(dto.id, i as i64);
        assert_eq!(dto.kind, format!("k{i}"));
    }
}
