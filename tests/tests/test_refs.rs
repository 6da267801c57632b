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

//! Reference preservation and cycle handling.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use morph::{Morph, MorphObject};

#[derive(MorphObject, Default, Debug)]
struct Node {
    value: i32,
}

#[derive(MorphObject, Default, Debug)]
struct NodeDto {
    value: i32,
}

#[derive(MorphObject, Default, Debug)]
struct Parent {
    a: Option<Rc<RefCell<Node>>>,
    b: Option<Rc<RefCell<Node>>>,
}

#[derive(MorphObject, Default, Debug)]
struct ParentDto {
    a: Option<Rc<RefCell<NodeDto>>>,
    b: Option<Rc<RefCell<NodeDto>>>,
}

#[derive(MorphObject, Default, Debug)]
struct CyclicA {
    b: Option<Rc<RefCell<CyclicB>>>,
}

#[derive(MorphObject, Default, Debug)]
struct CyclicB {
    a: Option<Rc<RefCell<CyclicA>>>,
}

#[derive(MorphObject, Default, Debug)]
struct CyclicADto {
    b: Option<Rc<RefCell<CyclicBDto>>>,
}

#[derive(MorphObject, Default, Debug)]
struct CyclicBDto {
    a: Option<Rc<RefCell<CyclicADto>>>,
}

#[derive(MorphObject, Default, Debug)]
struct SharedConfig {
    limit: i32,
}

#[derive(MorphObject, Default, Debug)]
struct SharedConfigDto {
    limit: i32,
}

#[derive(MorphObject, Default, Debug)]
struct Service {
    primary: Option<Arc<SharedConfig>>,
    secondary: Option<Arc<SharedConfig>>,
}

#[derive(MorphObject, Default, Debug)]
struct ServiceDto {
    primary: Option<Arc<SharedConfigDto>>,
    secondary: Option<Arc<SharedConfigDto>>,
}

#[test]
fn same_source_reference_maps_to_same_destination_instance() {
    let child = Rc::new(RefCell::new(Node { value: 123 }));
    let source = Parent {
        a: Some(child.clone()),
        b: Some(child),
    };

    let mapper = Morph::default().mapper::<Parent, ParentDto>().unwrap();
    let dto = mapper.map(&source).unwrap();

    let a = dto.a.expect("a mapped");
    let b = dto.b.expect("b mapped");
    assert_eq!(a.borrow().value, 123);
    assert!(Rc::ptr_eq(&a, &b));
}

#[test]
fn distinct_source_references_stay_distinct() {
    let source = Parent {
        a: Some(Rc::new(RefCell::new(Node { value: 1 }))),
        b: Some(Rc::new(RefCell::new(Node { value: 2 }))),
    };

    let mapper = Morph::default().mapper::<Parent, ParentDto>().unwrap();
    let dto = mapper.map(&source).unwrap();

    let a = dto.a.expect("a mapped");
    let b = dto.b.expect("b mapped");
    assert!(!Rc::ptr_eq(&a, &b));
    assert_eq!(a.borrow().value, 1);
    assert_eq!(b.borrow().value, 2);
}

#[test]
fn cyclic_graph_is_reconstructed_as_a_cycle() {
    let a = Rc::new(RefCell::new(CyclicA { b: None }));
    let b = Rc::new(RefCell::new(CyclicB { a: Some(a.clone()) }));
    a.borrow_mut().b = Some(b);

    let mapper = Morph::default()
        .mapper::<Rc<RefCell<CyclicA>>, Rc<RefCell<CyclicADto>>>()
        .unwrap();
    let dto = mapper.map(&a).unwrap();

    let b_dto = dto.borrow().b.clone().expect("b mapped");
    let back = b_dto.borrow().a.clone().expect("back-reference mapped");
    assert!(Rc::ptr_eq(&dto, &back));
}

#[test]
fn cycle_terminates_regardless_of_plan_depth() {
    let a = Rc::new(RefCell::new(CyclicA { b: None }));
    let b = Rc::new(RefCell::new(CyclicB { a: Some(a.clone()) }));
    a.borrow_mut().b = Some(b);

    // A tight plan budget truncates the compiled plan, never the call: the
    // one-level plan still maps `b`, whose back-reference binding was
    // replaced by the constant default.
    let mapper = Morph::default()
        .max_plan_depth(1)
        .mapper::<Rc<RefCell<CyclicA>>, Rc<RefCell<CyclicADto>>>()
        .unwrap();
    let dto = mapper.map(&a).unwrap();

    let b_dto = dto.borrow().b.clone().expect("b mapped within budget");
    assert!(b_dto.borrow().a.is_none());
}

#[test]
fn visited_mode_drops_cyclic_branch() {
    let a = Rc::new(RefCell::new(CyclicA { b: None }));
    let b = Rc::new(RefCell::new(CyclicB { a: Some(a.clone()) }));
    a.borrow_mut().b = Some(b);

    let mapper = Morph::default()
        .preserve_refs(false)
        .mapper::<Rc<RefCell<CyclicA>>, Rc<RefCell<CyclicADto>>>()
        .unwrap();
    let dto = mapper.map(&a).unwrap();

    let b_dto = dto.borrow().b.clone().expect("b mapped");
    assert!(b_dto.borrow().a.is_none());
}

#[test]
fn visited_mode_rebuilds_duplicates_independently() {
    let child = Rc::new(RefCell::new(Node { value: 5 }));
    let source = Parent {
        a: Some(child.clone()),
        b: Some(child),
    };

    let mapper = Morph::default()
        .preserve_refs(false)
        .mapper::<Parent, ParentDto>()
        .unwrap();
    let dto = mapper.map(&source).unwrap();

    let a = dto.a.expect("a mapped");
    let b = dto.b.expect("b mapped");
    assert_eq!(a.borrow().value, 5);
    assert_eq!(b.borrow().value, 5);
    assert!(!Rc::ptr_eq(&a, &b));
}

#[test]
fn one_session_spans_a_whole_batch() {
    let shared = Rc::new(RefCell::new(Node { value: 9 }));
    let sources = vec![shared.clone(), shared];

    let mapper = Morph::default()
        .mapper::<Rc<RefCell<Node>>, Rc<RefCell<NodeDto>>>()
        .unwrap();
    let mapped = mapper.map_many(&sources).unwrap();

    assert_eq!(mapped.len(), 2);
    assert!(Rc::ptr_eq(&mapped[0], &mapped[1]));
}

#[test]
fn independent_calls_do_not_share_sessions() {
    let shared = Rc::new(RefCell::new(Node { value: 9 }));

    let mapper = Morph::default()
        .mapper::<Rc<RefCell<Node>>, Rc<RefCell<NodeDto>>>()
        .unwrap();
    let first = mapper.map(&shared).unwrap();
    let second = mapper.map(&shared).unwrap();

    assert!(!Rc::ptr_eq(&first, &second));
    assert_eq!(first.borrow().value, second.borrow().value);
}

#[test]
fn arc_handles_preserve_sharing() {
    let config = Arc::new(SharedConfig { limit: 10 });
    let source = Service {
        primary: Some(config.clone()),
        secondary: Some(config),
    };

    let mapper = Morph::default().mapper::<Service, ServiceDto>().unwrap();
    let dto = mapper.map(&source).unwrap();

    let primary = dto.primary.expect("primary mapped");
    let secondary = dto.secondary.expect("secondary mapped");
    assert_eq!(primary.limit, 10);
    assert!(Arc::ptr_eq(&primary, &secondary));
}
