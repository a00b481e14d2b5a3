//! Renders an [`Expansion`] as Rust items.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::error::GenerateError;
use crate::options::Options;
use crate::types::{
    Conformance, CopyBody, CopyKind, CopyOperation, CopyReturn, Expansion, SynthesizedType, Variant,
};

/// Where the emitted items live and what they can name.
#[derive(Debug, Clone)]
pub struct EmitContext {
    /// Visibility given to both generated types and their initializers.
    pub vis: syn::Visibility,
    /// Path to the runtime crate.
    pub runtime: syn::Path,
}

impl EmitContext {
    pub fn new(options: &Options, vis: syn::Visibility) -> Self {
        Self {
            vis,
            runtime: options.runtime.clone(),
        }
    }
}

impl Default for EmitContext {
    fn default() -> Self {
        Self::new(&Options::default(), syn::parse_quote!(pub))
    }
}

/// Emit both synthesized types with their impls.
///
/// The immutable type lives in a hidden module and is re-exported, so its
/// private fields stay out of reach of the declaring module too.
pub fn emit(expansion: &Expansion, ctx: &EmitContext) -> Result<TokenStream, GenerateError> {
    let vis = &ctx.vis;
    let rt = &ctx.runtime;
    let interface = type_ident(&expansion.interface)?;
    let mutable = type_ident(&expansion.mutable.name)?;
    let immutable = type_ident(&expansion.immutable.name)?;
    let module = format_ident!("__copyable_{}", immutable);

    let inner_vis = match vis {
        syn::Visibility::Inherited => quote! { pub(super) },
        _ => quote! { pub },
    };
    let immutable_items = emit_type(&expansion.immutable, &interface, &mutable, &inner_vis, rt)?;
    let mutable_items = emit_type(&expansion.mutable, &interface, &mutable, &quote! { #vis }, rt)?;

    Ok(quote! {
        #[doc(hidden)]
        #[allow(non_snake_case)]
        mod #module {
            use super::*;

            #immutable_items
        }

        #[allow(unused_imports)]
        #vis use #module::#immutable;

        #mutable_items
    })
}

struct FieldTokens {
    ident: Ident,
    ty: syn::Type,
    mutable: bool,
}

fn emit_type(
    ty: &SynthesizedType,
    interface: &Ident,
    mutable: &Ident,
    vis: &TokenStream,
    rt: &syn::Path,
) -> Result<TokenStream, GenerateError> {
    let name = type_ident(&ty.name)?;

    let fields = ty
        .fields
        .iter()
        .map(|f| {
            Ok(FieldTokens {
                ident: property_ident(&f.name)?,
                ty: property_type(&f.name, &f.ty)?,
                mutable: f.mutable,
            })
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;

    let field_defs = fields.iter().map(|f| {
        let FieldTokens { ident, ty, mutable } = f;
        if *mutable {
            quote! { pub #ident: #ty }
        } else {
            quote! { #ident: #ty }
        }
    });

    let params = ty
        .initializer
        .parameters
        .iter()
        .map(|p| Ok((property_ident(&p.name)?, property_type(&p.name, &p.ty)?)))
        .collect::<Result<Vec<_>, GenerateError>>()?;
    let param_names: Vec<_> = params.iter().map(|(ident, _)| ident).collect();
    let param_types: Vec<_> = params.iter().map(|(_, ty)| ty).collect();

    let doc = match ty.variant {
        Variant::Immutable => format!(
            "Immutable implementation of [`{interface}`]. Use `copy` to obtain a [`{mutable}`]."
        ),
        Variant::Mutable => format!(
            "Mutable implementation of [`{interface}`]. Fields can be reassigned freely."
        ),
    };

    let mut impls = Vec::new();
    for conformance in &ty.conformances {
        match conformance {
            Conformance::Interface(_) => {
                let getters = fields.iter().map(|FieldTokens { ident, ty, .. }| {
                    quote! {
                        fn #ident(&self) -> #ty {
                            ::core::clone::Clone::clone(&self.#ident)
                        }
                    }
                });
                impls.push(quote! {
                    impl #interface for #name {
                        #(#getters)*
                    }
                });
            }
            // The configured root name is only checked on the declaration; the
            // runtime's marker is always `Object`.
            Conformance::RootMarker(_) => {
                impls.push(quote! {
                    impl #rt::Object for #name {}
                });
            }
            Conformance::MutableCopying => {
                let mut erased = Vec::new();
                let mut concrete = Vec::new();
                for op in &ty.copy_operations {
                    let tokens = emit_copy_operation(op, rt)?;
                    match op.kind {
                        CopyKind::ErasedZone => erased.push(tokens),
                        CopyKind::TypedZone | CopyKind::ZoneFree => concrete.push(tokens),
                    }
                }
                impls.push(quote! {
                    impl #rt::Copying for #name {
                        #(#erased)*
                    }

                    impl #rt::MutableCopying for #name {
                        type Mutable = #mutable;

                        #(#concrete)*
                    }
                });
            }
        }
    }

    Ok(quote! {
        #[doc = #doc]
        #vis struct #name {
            #(#field_defs),*
        }

        #[allow(dead_code, clippy::new_without_default)]
        impl #name {
            /// Creates a new instance from its property values.
            #vis fn new(#(#param_names: #param_types),*) -> Self {
                Self {
                    #(#param_names),*
                }
            }
        }

        #(#impls)*
    })
}

fn emit_copy_operation(op: &CopyOperation, rt: &syn::Path) -> Result<TokenStream, GenerateError> {
    let returns = match &op.returns {
        CopyReturn::Concrete(name) => {
            let ident = type_ident(name)?;
            quote! { #ident }
        }
        CopyReturn::Erased => quote! { ::std::boxed::Box<dyn #rt::Object> },
    };

    let mut stmts = TokenStream::new();
    let (expr, expr_erased) = match &op.body {
        CopyBody::Construct { target, arguments } => {
            let target = type_ident(target)?;
            let args = arguments
                .iter()
                .map(|a| {
                    let label = property_ident(&a.label)?;
                    let field = property_ident(&a.field)?;
                    Ok(quote! { #label: ::core::clone::Clone::clone(&self.#field) })
                })
                .collect::<Result<Vec<_>, GenerateError>>()?;
            if takes_zone(op.kind) {
                stmts = quote! { let _ = zone; };
            }
            let expr = quote! {
                #target {
                    #(#args),*
                }
            };
            (expr, false)
        }
        CopyBody::Delegate {
            operation,
            forward_zone,
        } => {
            let zone = if *forward_zone && takes_zone(op.kind) {
                quote! { zone }
            } else {
                quote! { ::core::option::Option::None }
            };
            let expr = match operation {
                CopyKind::TypedZone => {
                    quote! { <Self as #rt::MutableCopying>::copy_with_zone(self, #zone) }
                }
                CopyKind::ErasedZone => {
                    quote! { <Self as #rt::Copying>::copy_with_zone_erased(self, #zone) }
                }
                CopyKind::ZoneFree => quote! { <Self as #rt::MutableCopying>::copy(self) },
            };
            (expr, *operation == CopyKind::ErasedZone)
        }
    };

    let expr = if op.returns == CopyReturn::Erased && !expr_erased {
        quote! { ::std::boxed::Box::new(#expr) }
    } else {
        expr
    };

    let signature = match op.kind {
        CopyKind::TypedZone => quote! {
            fn copy_with_zone(&self, zone: ::core::option::Option<&#rt::Zone>) -> #returns
        },
        CopyKind::ErasedZone => quote! {
            fn copy_with_zone_erased(&self, zone: ::core::option::Option<&#rt::Zone>) -> #returns
        },
        CopyKind::ZoneFree => quote! {
            fn copy(&self) -> #returns
        },
    };

    Ok(quote! {
        #signature {
            #stmts
            #expr
        }
    })
}

fn takes_zone(kind: CopyKind) -> bool {
    matches!(kind, CopyKind::TypedZone | CopyKind::ErasedZone)
}

fn type_ident(name: &str) -> Result<Ident, GenerateError> {
    syn::parse_str::<Ident>(name).map_err(|_| GenerateError::InvalidTypeName {
        name: name.to_string(),
    })
}

fn property_ident(name: &str) -> Result<Ident, GenerateError> {
    syn::parse_str::<Ident>(name).map_err(|_| GenerateError::InvalidPropertyName {
        pattern: name.to_string(),
    })
}

fn property_type(property: &str, ty: &str) -> Result<syn::Type, GenerateError> {
    syn::parse_str::<syn::Type>(ty).map_err(|_| GenerateError::InvalidPropertyType {
        property: property.to_string(),
        ty: ty.to_string(),
    })
}
