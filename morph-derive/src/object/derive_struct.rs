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

//! Metadata generation for structs.
//!
//! The emitted shape carries one `FieldShape` per field in declaration
//! order, plus the all-field constructor. Field shapes are reached through
//! thunks (`|| T::SHAPE`) so self-referential structs are expressible.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DataStruct, DeriveInput, Fields, Ident, LitStr, Type};

pub fn derive(ast: &DeriveInput, data: &DataStruct) -> TokenStream {
    let name = &ast.ident;
    let name_str = LitStr::new(&name.to_string(), name.span());

    let fields: Vec<(&Ident, &Type)> = match &data.fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|f| (f.ident.as_ref().expect("named field"), &f.ty))
            .collect(),
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => unreachable!("rejected before dispatch"),
    };

    let field_shapes: Vec<TokenStream2> = fields
        .iter()
        .map(|(ident, ty)| field_shape(name, ident, ty))
        .collect();
    let construct = constructor(name, &fields);

    let generated = quote! {
        impl ::morph_core::meta::Morphable for #name {
            const SHAPE: &'static ::morph_core::meta::Shape = &::morph_core::meta::Shape {
                name: #name_str,
                id: ::std::any::TypeId::of::<#name>,
                kind: ::morph_core::meta::Kind::Struct(&::morph_core::meta::StructShape {
                    fields: &[ #(#field_shapes),* ],
                    construct: ::std::option::Option::Some(#construct),
                }),
                try_default: {
                    fn __morph_try_default() -> ::std::option::Option<
                        ::std::boxed::Box<dyn ::std::any::Any>,
                    > {
                        use ::morph_core::meta::spez::*;
                        (&Spez::<#name>::new()).spez_try_default()
                    }
                    __morph_try_default
                },
            };
        }
    };
    generated.into()
}

fn field_shape(name: &Ident, ident: &Ident, ty: &Type) -> TokenStream2 {
    let field_str = LitStr::new(&ident.to_string(), ident.span());
    let context = LitStr::new(&format!("{name}.{ident}"), ident.span());
    quote! {
        ::morph_core::meta::FieldShape {
            name: #field_str,
            shape: || <#ty as ::morph_core::meta::Morphable>::SHAPE,
            get: {
                fn __morph_get(any: &dyn ::std::any::Any) -> &dyn ::std::any::Any {
                    &::morph_core::meta::expect_ref::<#name>(any).#ident
                }
                __morph_get
            },
            set: |any, value| {
                ::morph_core::meta::expect_mut::<#name>(any).#ident =
                    ::morph_core::meta::take::<#ty>(value, #context)?;
                ::std::result::Result::Ok(())
            },
        }
    }
}

fn constructor(name: &Ident, fields: &[(&Ident, &Type)]) -> TokenStream2 {
    let arity = fields.len();
    let locals: Vec<TokenStream2> = fields
        .iter()
        .enumerate()
        .map(|(index, (ident, ty))| {
            let context = LitStr::new(&format!("{name}.{ident}"), ident.span());
            quote! {
                let #ident = match args[#index].take() {
                    ::std::option::Option::Some(value) => {
                        ::morph_core::meta::take::<#ty>(value, #context)?
                    }
                    ::std::option::Option::None => {
                        return ::std::result::Result::Err(
                            ::morph_core::error::Error::type_error(
                                ::std::concat!("missing constructor argument for ", #context),
                            ),
                        );
                    }
                };
            }
        })
        .collect();
    let idents: Vec<&Ident> = fields.iter().map(|(ident, _)| *ident).collect();
    quote! {
        |args| {
            if args.len() != #arity {
                return ::std::result::Result::Err(
                    ::morph_core::error::Error::type_error("constructor argument count mismatch"),
                );
            }
            #(#locals)*
            ::std::result::Result::Ok(
                ::std::boxed::Box::new(#name { #(#idents),* }) as ::std::boxed::Box<dyn ::std::any::Any>,
            )
        }
    }
}
