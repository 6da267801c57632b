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

//! Metadata generation for unit enums.
//!
//! Variants carry their name and discriminant. Discriminants follow the
//! language rule: an explicit integer literal where given, otherwise the
//! previous discriminant plus one, starting from zero.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DataEnum, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Lit, LitStr, UnOp};

pub fn derive(ast: &DeriveInput, data: &DataEnum) -> TokenStream {
    let name = &ast.ident;
    let name_str = LitStr::new(&name.to_string(), name.span());

    let mut variants = Vec::with_capacity(data.variants.len());
    let mut next_discriminant: i64 = 0;
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(
                variant,
                "MorphObject enums must have unit variants only",
            )
            .to_compile_error()
            .into();
        }
        let discriminant = match &variant.discriminant {
            Some((_, expr)) => match literal_discriminant(expr) {
                Some(value) => value,
                None => {
                    return syn::Error::new_spanned(
                        expr,
                        "MorphObject enum discriminants must be integer literals",
                    )
                    .to_compile_error()
                    .into();
                }
            },
            None => next_discriminant,
        };
        next_discriminant = discriminant + 1;
        variants.push((&variant.ident, discriminant));
    }

    let variant_shapes: Vec<TokenStream2> = variants
        .iter()
        .map(|(ident, discriminant)| {
            let variant_str = LitStr::new(&ident.to_string(), ident.span());
            quote! {
                ::morph_core::meta::VariantShape {
                    name: #variant_str,
                    discriminant: #discriminant,
                }
            }
        })
        .collect();

    let from_index_arms: Vec<TokenStream2> = variants
        .iter()
        .enumerate()
        .map(|(index, (ident, _))| {
            quote! {
                #index => ::std::result::Result::Ok(
                    ::std::boxed::Box::new(#name::#ident) as ::std::boxed::Box<dyn ::std::any::Any>,
                ),
            }
        })
        .collect();

    let index_of_arms: Vec<TokenStream2> = variants
        .iter()
        .enumerate()
        .map(|(index, (ident, _))| {
            quote! {
                #name::#ident => ::std::result::Result::Ok(#index),
            }
        })
        .collect();

    // Without a Default impl the first variant stands in, mirroring the
    // zero value of classic enums.
    let default_fallback = match variants.first() {
        Some((first, _)) => quote! {
            .or_else(|| {
                ::std::option::Option::Some(
                    ::std::boxed::Box::new(#name::#first) as ::std::boxed::Box<dyn ::std::any::Any>,
                )
            })
        },
        None => quote! {},
    };

    let generated = quote! {
        impl ::morph_core::meta::Morphable for #name {
            const SHAPE: &'static ::morph_core::meta::Shape = &::morph_core::meta::Shape {
                name: #name_str,
                id: ::std::any::TypeId::of::<#name>,
                kind: ::morph_core::meta::Kind::Enum(&::morph_core::meta::EnumShape {
                    variants: &[ #(#variant_shapes),* ],
                    from_index: |index| match index {
                        #(#from_index_arms)*
                        _ => ::std::result::Result::Err(
                            ::morph_core::error::Error::type_error("variant index out of range"),
                        ),
                    },
                    index_of: |any| match ::morph_core::meta::expect_ref::<#name>(any) {
                        #(#index_of_arms)*
                    },
                }),
                try_default: {
                    fn __morph_try_default() -> ::std::option::Option<
                        ::std::boxed::Box<dyn ::std::any::Any>,
                    > {
                        use ::morph_core::meta::spez::*;
                        (&Spez::<#name>::new()).spez_try_default() #default_fallback
                    }
                    __morph_try_default
                },
            };
        }
    };
    generated.into()
}

fn literal_discriminant(expr: &Expr) -> Option<i64> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => lit.base10_parse::<i64>().ok(),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => literal_discriminant(expr).map(|value| -value),
        _ => None,
    }
}
