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

//! Plan synthesis.
//!
//! Walks a (source shape, destination shape) pair and compiles the
//! transformation into closures over fn-pointer vtables. Build-time failures
//! are configuration errors and surface to the caller that first requested a
//! plan for the pair; nothing is deferred to map calls.
//!
//! Nested initializers are built through the plan cache so work done for a
//! sub-pair is reused. A depth counter guards every nested build: when the
//! budget is exhausted the nested initializer is replaced by a constant
//! function returning no value, which the enclosing binding turns into the
//! destination default. This bounds the compiled plan graph; runtime data
//! traversal is bounded separately by the mapping session.

use std::any::Any;
use std::sync::Arc;

use log::{debug, trace};

use crate::classify::{classify, Category};
use crate::config::Config;
use crate::error::Error;
use crate::meta::{
    GetFn, Kind, ScalarKind, ScalarValue, SetFn, Shape, SharedShape, StructShape, TryDefaultFn,
};
use crate::plan::convert::{find_converter, numeric_converter, to_discriminant};
use crate::plan::{AssignFn, Assigner, Initializer, ValueFn};
use crate::resolver::plan_cache::{PlanCache, PlanKey};

/// Per-field wiring shared by both construction strategies.
struct FieldBinding {
    set: SetFn,
    /// Getter and compiled value function when a source field matched;
    /// `None` binds the field to its default.
    source: Option<(GetFn, ValueFn)>,
    fallback: TryDefaultFn,
}

struct AssignBinding {
    get: GetFn,
    set: SetFn,
    value: ValueFn,
    fallback: TryDefaultFn,
}

pub struct PlanBuilder<'a> {
    config: &'a Config,
    init_cache: &'a PlanCache<Initializer>,
}

impl<'a> PlanBuilder<'a> {
    pub fn new(config: &'a Config, init_cache: &'a PlanCache<Initializer>) -> Self {
        PlanBuilder { config, init_cache }
    }

    /// Synthesizes (or fetches) the initializer for a type pair.
    pub fn build_initializer(
        &self,
        source: &'static Shape,
        dest: &'static Shape,
    ) -> Result<Initializer, Error> {
        self.initializer_for(source, dest, 0)
    }

    /// Synthesizes the assigner for a type pair. The assigner copies
    /// matching fields onto an existing destination and never constructs;
    /// destination fields without a source counterpart are left untouched.
    pub fn build_assigner(
        &self,
        source: &'static Shape,
        dest: &'static Shape,
    ) -> Result<Assigner, Error> {
        let (Kind::Struct(source_struct), Kind::Struct(dest_struct)) = (&source.kind, &dest.kind)
        else {
            return Err(Error::configuration(format!(
                "in-place mapping requires struct shapes on both sides, got {} -> {}",
                source.name, dest.name
            )));
        };

        let mut bindings = Vec::new();
        for dest_field in dest_struct.fields {
            let Some(source_field) = source_struct.find_field(dest_field.name) else {
                continue;
            };
            let value = self.guarded_value_fn(source_field.shape(), dest_field.shape(), 0)?;
            let fallback = self.require_default(dest_field.shape(), dest, dest_field.name)?;
            bindings.push(AssignBinding {
                get: source_field.get,
                set: dest_field.set,
                value,
                fallback,
            });
        }
        debug!(
            "assigner {} -> {}: {} of {} fields bound",
            source.name,
            dest.name,
            bindings.len(),
            dest_struct.fields.len()
        );

        let func: AssignFn = Arc::new(move |session, source_any, dest_any| {
            for binding in &bindings {
                let value = match (binding.value)(session, (binding.get)(source_any))? {
                    Some(value) => value,
                    None => default_or_vanished(binding.fallback)?,
                };
                (binding.set)(dest_any, value)?;
            }
            Ok(())
        });
        Ok(Assigner {
            source,
            dest,
            func,
        })
    }

    fn initializer_for(
        &self,
        source: &'static Shape,
        dest: &'static Shape,
        depth: u32,
    ) -> Result<Initializer, Error> {
        let key = PlanKey::new(source.type_id(), dest.type_id());
        self.init_cache.get_or_add(key, || {
            let func = self.dispatch(source, dest, depth, true)?;
            debug!("synthesized initializer {} -> {}", source.name, dest.name);
            Ok(Initializer {
                source,
                dest,
                func,
            })
        })
    }

    fn value_fn(
        &self,
        source: &'static Shape,
        dest: &'static Shape,
        depth: u32,
    ) -> Result<ValueFn, Error> {
        self.dispatch(source, dest, depth, false)
    }

    /// Field/element boundary: nested complex destinations consume one unit
    /// of the plan-depth budget and honor the nested-mapping switch.
    fn guarded_value_fn(
        &self,
        source: &'static Shape,
        dest: &'static Shape,
        depth: u32,
    ) -> Result<ValueFn, Error> {
        match classify(dest) {
            Category::Complex | Category::ComplexSequence => {
                if !self.config.is_allow_nested() {
                    return Ok(constant_none());
                }
                if depth + 1 > self.config.max_plan_depth() {
                    debug!(
                        "plan depth budget exhausted at {} -> {}",
                        source.name, dest.name
                    );
                    return Ok(constant_none());
                }
                self.value_fn(source, dest, depth + 1)
            }
            _ => self.value_fn(source, dest, depth),
        }
    }

    /// The field-value expression rules. `root` marks the entry made from
    /// `initializer_for`'s factory, where a struct pair must be expanded in
    /// place instead of consulting the cache again.
    fn dispatch(
        &self,
        source: &'static Shape,
        dest: &'static Shape,
        depth: u32,
        root: bool,
    ) -> Result<ValueFn, Error> {
        if matches!(source.kind, Kind::Dictionary(_)) || matches!(dest.kind, Kind::Dictionary(_)) {
            return Err(Error::configuration(format!(
                "no transformation strategy exists for dictionary types ({} -> {})",
                source.name, dest.name
            )));
        }

        match (&source.kind, &dest.kind) {
            // Optionality is peeled before anything else; absence flows
            // through as "no value".
            (Kind::Option(source_opt), Kind::Option(dest_opt)) => {
                let inner = self.value_fn(source_opt.inner, dest_opt.inner, depth)?;
                let peek = source_opt.peek;
                let some = dest_opt.some;
                let none = dest_opt.none;
                Ok(Arc::new(move |session, any| match (peek)(any)? {
                    Some(value) => match inner(session, value)? {
                        Some(built) => Ok(Some((some)(built)?)),
                        None => Ok(Some((none)())),
                    },
                    None => Ok(Some((none)())),
                }))
            }
            (Kind::Option(source_opt), _) => {
                let inner = self.value_fn(source_opt.inner, dest, depth)?;
                let peek = source_opt.peek;
                Ok(Arc::new(move |session, any| match (peek)(any)? {
                    Some(value) => inner(session, value),
                    None => Ok(None),
                }))
            }
            (_, Kind::Option(dest_opt)) => {
                let inner = self.value_fn(source, dest_opt.inner, depth)?;
                let some = dest_opt.some;
                let none = dest_opt.none;
                Ok(Arc::new(move |session, any| match inner(session, any)? {
                    Some(built) => Ok(Some((some)(built)?)),
                    None => Ok(Some((none)())),
                }))
            }

            // Shared handles: identity-aware, see §reference preservation.
            (Kind::Shared(source_shared), Kind::Shared(dest_shared)) => {
                self.shared_plan(source, dest, source_shared, dest_shared, depth)
            }
            (Kind::Shared(source_shared), _) => {
                let inner = self.value_fn(source_shared.inner, dest, depth)?;
                let with_inner = source_shared.with_inner;
                Ok(Arc::new(move |session, any| {
                    (with_inner)(any, &mut |value| inner(session, value))
                }))
            }
            (_, Kind::Shared(dest_shared)) => {
                let inner = self.value_fn(source, dest_shared.inner, depth)?;
                let wrap = dest_shared.wrap;
                Ok(Arc::new(move |session, any| match inner(session, any)? {
                    Some(built) => Ok(Some((wrap)(built)?)),
                    None => Ok(None),
                }))
            }

            // Boxes are transparent indirection.
            (Kind::Boxed(source_box), Kind::Boxed(dest_box)) => {
                let inner = self.value_fn(source_box.inner, dest_box.inner, depth)?;
                let deref = source_box.deref;
                let wrap = dest_box.wrap;
                Ok(Arc::new(move |session, any| {
                    match inner(session, (deref)(any))? {
                        Some(built) => Ok(Some((wrap)(built)?)),
                        None => Ok(None),
                    }
                }))
            }
            (Kind::Boxed(source_box), _) => {
                let inner = self.value_fn(source_box.inner, dest, depth)?;
                let deref = source_box.deref;
                Ok(Arc::new(move |session, any| inner(session, (deref)(any))))
            }
            (_, Kind::Boxed(dest_box)) => {
                let inner = self.value_fn(source, dest_box.inner, depth)?;
                let wrap = dest_box.wrap;
                Ok(Arc::new(move |session, any| match inner(session, any)? {
                    Some(built) => Ok(Some((wrap)(built)?)),
                    None => Ok(None),
                }))
            }

            (Kind::Struct(source_struct), Kind::Struct(dest_struct)) => {
                if root {
                    self.struct_plan(source, dest, source_struct, dest_struct, depth)
                } else {
                    let init = self.initializer_for(source, dest, depth)?;
                    Ok(Arc::new(move |session, any| init.apply(session, any)))
                }
            }

            (Kind::Scalar(source_scalar), Kind::Scalar(dest_scalar)) => {
                let convert = find_converter(source_scalar.kind, dest_scalar.kind).ok_or_else(
                    || {
                        Error::configuration(format!(
                            "no conversion rule from {} to {}",
                            source.name, dest.name
                        ))
                    },
                )?;
                let read = source_scalar.read;
                let write = dest_scalar.write;
                Ok(Arc::new(move |_session, any| {
                    Ok(Some((write)(convert((read)(any)?)?)?))
                }))
            }

            (Kind::Scalar(source_scalar), Kind::Enum(dest_enum)) => {
                let read = source_scalar.read;
                let dest_name = dest.name;
                match source_scalar.kind {
                    ScalarKind::Str => Ok(Arc::new(move |_session, any| {
                        match (read)(any)? {
                            ScalarValue::Str(text) => {
                                let index = dest_enum.find_by_name(&text).ok_or_else(|| {
                                    Error::conversion(format!(
                                        "no variant of {dest_name} matches \"{text}\""
                                    ))
                                })?;
                                Ok(Some((dest_enum.from_index)(index)?))
                            }
                            other => Err(Error::type_error(format!(
                                "expected text for enum parse, got {:?}",
                                other.kind()
                            ))),
                        }
                    })),
                    kind if kind.is_numeric() => Ok(Arc::new(move |_session, any| {
                        let value = (read)(any)?;
                        let discriminant = to_discriminant(&value).ok_or_else(|| {
                            Error::type_error(format!("{:?} is not numeric", value.kind()))
                        })?;
                        let index =
                            dest_enum.find_by_discriminant(discriminant).ok_or_else(|| {
                                Error::conversion(format!(
                                    "no variant of {dest_name} carries discriminant {discriminant}"
                                ))
                            })?;
                        Ok(Some((dest_enum.from_index)(index)?))
                    })),
                    _ => Err(Error::configuration(format!(
                        "no conversion rule from {} to enum {}",
                        source.name, dest.name
                    ))),
                }
            }

            (Kind::Enum(source_enum), Kind::Enum(dest_enum)) => {
                let dest_name = dest.name;
                Ok(Arc::new(move |_session, any| {
                    let index = (source_enum.index_of)(any)?;
                    let discriminant = source_enum.variants[index].discriminant;
                    let index = dest_enum.find_by_discriminant(discriminant).ok_or_else(|| {
                        Error::conversion(format!(
                            "no variant of {dest_name} carries discriminant {discriminant}"
                        ))
                    })?;
                    Ok(Some((dest_enum.from_index)(index)?))
                }))
            }

            (Kind::Enum(source_enum), Kind::Scalar(dest_scalar)) => {
                let write = dest_scalar.write;
                match dest_scalar.kind {
                    ScalarKind::Str => Ok(Arc::new(move |_session, any| {
                        let index = (source_enum.index_of)(any)?;
                        let name = source_enum.variants[index].name;
                        Ok(Some((write)(ScalarValue::Str(name.to_owned()))?))
                    })),
                    kind if kind.is_numeric() => {
                        let convert = numeric_converter(kind);
                        Ok(Arc::new(move |_session, any| {
                            let index = (source_enum.index_of)(any)?;
                            let discriminant = source_enum.variants[index].discriminant;
                            Ok(Some((write)(convert(ScalarValue::I64(discriminant))?)?))
                        }))
                    }
                    _ => Err(Error::configuration(format!(
                        "no conversion rule from enum {} to {}",
                        source.name, dest.name
                    ))),
                }
            }

            (Kind::Sequence(source_seq), Kind::Sequence(dest_seq)) => {
                let element_fn =
                    self.guarded_value_fn(source_seq.element, dest_seq.element, depth)?;
                let element_default = dest_seq.element.try_default;
                let source_len = source_seq.len;
                let source_iter = source_seq.iter;
                let build = dest_seq.build;
                let dest_name = dest.name;
                Ok(Arc::new(move |session, any| {
                    let mut items: Vec<Box<dyn Any>> = Vec::with_capacity((source_len)(any)?);
                    for element in (source_iter)(any)? {
                        match element_fn(session, element)? {
                            Some(built) => items.push(built),
                            None => items.push((element_default)().ok_or_else(|| {
                                Error::conversion(format!(
                                    "element of {dest_name} has no default value"
                                ))
                            })?),
                        }
                    }
                    Ok(Some((build)(items)?))
                }))
            }

            _ => Err(Error::configuration(format!(
                "no conversion rule from {} to {}",
                source.name, dest.name
            ))),
        }
    }

    /// Destination construction for a struct pair.
    ///
    /// Strategy selection: the all-field constructor (the primary
    /// constructor of record-shaped types) is preferred; without one the
    /// member-init path builds the default value and assigns each matched
    /// field. A destination offering neither fails the build.
    fn struct_plan(
        &self,
        source: &'static Shape,
        dest: &'static Shape,
        source_struct: &'static StructShape,
        dest_struct: &'static StructShape,
        depth: u32,
    ) -> Result<ValueFn, Error> {
        let mut bindings = Vec::with_capacity(dest_struct.fields.len());
        let mut bound = 0usize;
        for dest_field in dest_struct.fields {
            let dest_field_shape = dest_field.shape();
            let fallback = self.require_default(dest_field_shape, dest, dest_field.name)?;
            let binding_source = match source_struct.find_field(dest_field.name) {
                Some(source_field) => {
                    let value =
                        self.guarded_value_fn(source_field.shape(), dest_field_shape, depth)?;
                    bound += 1;
                    trace!(
                        "bind {}.{} from source field {}",
                        dest.name,
                        dest_field.name,
                        source_field.name
                    );
                    Some((source_field.get, value))
                }
                None => {
                    trace!(
                        "bind {}.{} to default (no matching source field)",
                        dest.name,
                        dest_field.name
                    );
                    None
                }
            };
            bindings.push(FieldBinding {
                set: dest_field.set,
                source: binding_source,
                fallback,
            });
        }

        if let Some(construct) = dest_struct.construct {
            debug!(
                "initializer {} -> {}: constructor strategy, {}/{} fields bound",
                source.name,
                dest.name,
                bound,
                dest_struct.fields.len()
            );
            Ok(Arc::new(move |session, any| {
                let mut args: Vec<Option<Box<dyn Any>>> = Vec::with_capacity(bindings.len());
                for binding in &bindings {
                    let value = match &binding.source {
                        Some((get, value_fn)) => match value_fn(session, (get)(any))? {
                            Some(value) => value,
                            None => default_or_vanished(binding.fallback)?,
                        },
                        None => default_or_vanished(binding.fallback)?,
                    };
                    args.push(Some(value));
                }
                Ok(Some((construct)(&mut args)?))
            }))
        } else {
            if (dest.try_default)().is_none() {
                return Err(Error::configuration(format!(
                    "type {} has neither a usable constructor nor a default value",
                    dest.name
                )));
            }
            debug!(
                "initializer {} -> {}: member-init strategy, {}/{} fields bound",
                source.name,
                dest.name,
                bound,
                dest_struct.fields.len()
            );
            let make_default = dest.try_default;
            Ok(Arc::new(move |session, any| {
                let mut value = default_or_vanished(make_default)?;
                for binding in &bindings {
                    // Unmatched fields already hold their defaults.
                    if let Some((get, value_fn)) = &binding.source {
                        let field_value = match value_fn(session, (get)(any))? {
                            Some(built) => built,
                            None => default_or_vanished(binding.fallback)?,
                        };
                        (binding.set)(value.as_mut(), field_value)?;
                    }
                }
                Ok(Some(value))
            }))
        }
    }

    /// Reference preservation and cycle handling for shared handles.
    ///
    /// Preserving mode: a handle already seen in this session maps to a
    /// clone of its registered destination. A fresh cyclic handle registers
    /// a default-valued placeholder before recursing, so any recursion
    /// reaching the same source observes the placeholder and stops; the
    /// built value is filled into the placeholder afterwards. Construction
    /// failure removes the registration and drops the branch.
    ///
    /// Visited mode: only the active traversal path is tracked; cycling back
    /// onto it drops the branch, duplicates rebuild independently.
    fn shared_plan(
        &self,
        source: &'static Shape,
        dest: &'static Shape,
        source_shared: &'static SharedShape,
        dest_shared: &'static SharedShape,
        depth: u32,
    ) -> Result<ValueFn, Error> {
        let inner = self.value_fn(source_shared.inner, dest_shared.inner, depth)?;
        let dest_tid = dest.type_id();
        debug!(
            "shared-handle plan {} -> {} ({} mode)",
            source.name,
            dest.name,
            if self.config.is_preserve_refs() {
                "preserving"
            } else {
                "visited"
            }
        );

        if !self.config.is_preserve_refs() {
            return Ok(Arc::new(move |session, any| {
                let identity = (source_shared.identity)(any)?;
                if !session.enter(identity) {
                    return Ok(None);
                }
                let built = (source_shared.with_inner)(any, &mut |value| inner(session, value));
                session.leave(identity);
                match built? {
                    Some(value) => Ok(Some((dest_shared.wrap)(value)?)),
                    None => Ok(None),
                }
            }));
        }

        if dest_shared.fill.is_some() && (dest_shared.new_placeholder)().is_none() {
            return Err(Error::configuration(format!(
                "reference preservation requires a default value for {} to allocate placeholders",
                dest_shared.inner.name
            )));
        }
        Ok(Arc::new(move |session, any| {
            let identity = (source_shared.identity)(any)?;
            if let Some(existing) = session.lookup(identity, dest_tid) {
                return Ok(Some((dest_shared.clone_handle)(existing)?));
            }
            match dest_shared.fill {
                Some(fill) => {
                    let placeholder = (dest_shared.new_placeholder)().ok_or_else(|| {
                        Error::type_error("placeholder allocation failed for cyclic handle")
                    })?;
                    session.register(
                        identity,
                        dest_tid,
                        (dest_shared.clone_handle)(placeholder.as_ref())?,
                    );
                    let built =
                        (source_shared.with_inner)(any, &mut |value| inner(session, value));
                    match built {
                        Ok(Some(value)) => {
                            (fill)(placeholder.as_ref(), value)?;
                            Ok(Some(placeholder))
                        }
                        Ok(None) => {
                            session.unregister(identity, dest_tid);
                            Ok(None)
                        }
                        Err(err) => {
                            session.unregister(identity, dest_tid);
                            debug!("nested construction failed, dropping branch: {err}");
                            Ok(None)
                        }
                    }
                }
                None => {
                    let built =
                        (source_shared.with_inner)(any, &mut |value| inner(session, value))?;
                    match built {
                        Some(value) => {
                            let handle = (dest_shared.wrap)(value)?;
                            session.register(
                                identity,
                                dest_tid,
                                (dest_shared.clone_handle)(handle.as_ref())?,
                            );
                            Ok(Some(handle))
                        }
                        None => Ok(None),
                    }
                }
            }
        }))
    }

    /// Probes the default hook of a destination field shape; its absence is
    /// a configuration error because every binding must be able to produce a
    /// value.
    fn require_default(
        &self,
        shape: &'static Shape,
        dest: &'static Shape,
        field: &'static str,
    ) -> Result<TryDefaultFn, Error> {
        if (shape.try_default)().is_none() {
            return Err(Error::configuration(format!(
                "field {} of {} has type {} with no default value",
                field, dest.name, shape.name
            )));
        }
        Ok(shape.try_default)
    }
}

fn constant_none() -> ValueFn {
    Arc::new(|_session, _any| Ok(None))
}

fn default_or_vanished(fallback: TryDefaultFn) -> Result<Box<dyn Any>, Error> {
    fallback().ok_or_else(|| Error::type_error("default value probed at build time vanished"))
}
