//! # zonecopy-codegen
//!
//! Generator behind `#[copyable]`. Given a getter trait such as
//!
//! ```rust,ignore
//! #[copyable]
//! #[foreign]
//! pub trait SettingsProtocol: Object {
//!     fn count(&self) -> i64;
//!     fn label(&self) -> String;
//! }
//! ```
//!
//! it synthesizes an immutable `Settings` and a mutable `MutableSettings`,
//! both implementing the trait, `Object`, `Copying` and `MutableCopying`.
//! Every copy produces a `MutableSettings`.
//!
//! The pipeline runs on a representation-neutral [`Declaration`]:
//! [`validate`] → [`extract_properties`] → [`NameTemplate::derive`] →
//! [`synthesize`]. [`lower_item`] turns a `syn` item into a declaration and
//! [`emit`] turns the resulting [`Expansion`] into tokens.
//!
//! ## Ahead of time
//!
//! ```rust,ignore
//! // build.rs
//! use zonecopy_codegen::CodeGenerator;
//!
//! fn main() {
//!     CodeGenerator::new()
//!         .set_triggers(&["foreign"])
//!         .add_source_file("src/model.rs").unwrap()
//!         .write_to_file(format!("{}/copyable.rs", std::env::var("OUT_DIR").unwrap())).unwrap();
//!
//!     println!("cargo:rerun-if-changed=src/model.rs");
//! }
//! ```

mod emit;
mod error;
mod extractor;
mod generator;
mod lower;
mod names;
mod options;
mod synthesizer;
mod types;
mod validator;

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;

pub use emit::{EmitContext, emit};
pub use error::{Error, GenerateError};
pub use extractor::extract_properties;
pub use generator::CodeGenerator;
pub use lower::{Lowered, lower_item, lower_trait};
pub use names::NameTemplate;
pub use options::Options;
pub use synthesizer::synthesize;
pub use types::*;
pub use validator::validate;

/// Run the whole pipeline on one declaration.
pub fn generate(decl: &Declaration, options: &Options) -> Result<Expansion, GenerateError> {
    validate(decl, options)?;
    let properties = extract_properties(&decl.members)?;
    let names = options.names.derive(&decl.name)?;

    let immutable = synthesize(
        Variant::Immutable,
        &names,
        &decl.name,
        &options.root_marker,
        &properties,
    );
    let mutable = synthesize(
        Variant::Mutable,
        &names,
        &decl.name,
        &options.root_marker,
        &properties,
    );

    Ok(Expansion {
        interface: decl.name.clone(),
        immutable,
        mutable,
    })
}

/// Expansion of the `#[copyable]` attribute.
///
/// `args` are the attribute arguments (`runtime = path` is the only one);
/// `item` is the annotated item. On success the item is returned unchanged,
/// followed by the generated types.
pub fn expand(args: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let mut options = Options::default();
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("runtime") {
            options.runtime = meta.value()?.parse()?;
            Ok(())
        } else {
            Err(meta.error("unsupported copyable argument"))
        }
    });
    parser.parse2(args)?;

    let parsed: syn::Item = syn::parse2(item.clone())?;
    let lowered = lower_item(&parsed);
    let span = lowered.span;

    let expansion =
        generate(&lowered.declaration, &options).map_err(|err| syn::Error::new(span, err))?;
    let ctx = EmitContext::new(&options, lowered.vis);
    let generated = emit(&expansion, &ctx).map_err(|err| syn::Error::new(span, err))?;

    Ok(quote! {
        #item
        #generated
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn foo() -> Declaration {
        Declaration::interface("FooProtocol")
            .with_attribute("foreign")
            .with_inherit("Object")
            .with_property("bar", "i64")
            .with_property("baz", "String")
            .with_property("qux", "bool")
    }

    #[test]
    fn test_generate_pipeline() {
        let expansion = generate(&foo(), &Options::default()).unwrap();
        assert_eq!(expansion.interface, "FooProtocol");
        assert_eq!(expansion.immutable.name, "Foo");
        assert_eq!(expansion.mutable.name, "MutableFoo");

        for ty in expansion.types() {
            let fields: Vec<_> = ty
                .fields
                .iter()
                .map(|f| (f.name.as_str(), f.ty.as_str()))
                .collect();
            assert_eq!(fields, vec![("bar", "i64"), ("baz", "String"), ("qux", "bool")]);
        }
    }

    #[test]
    fn test_validation_runs_first() {
        let mut decl = foo();
        decl.attributes.clear();
        decl.name = "NotNamedRight".to_string();

        let err = generate(&decl, &Options::default()).unwrap_err();
        assert!(matches!(err, GenerateError::RequiresForeignMarker { .. }));
    }

    #[test]
    fn test_name_template_failure() {
        let mut decl = foo();
        decl.name = "Foo".to_string();

        let err = generate(&decl, &Options::default()).unwrap_err();
        assert!(matches!(err, GenerateError::MissingSuffix { .. }));
    }

    #[test]
    fn test_custom_options() {
        let decl = Declaration::interface("NSStringInterface")
            .with_attribute("interop")
            .with_inherit("NSObject")
            .with_property("length", "usize");

        let mut options = Options::new();
        options
            .set_foreign_markers(&["interop"])
            .set_root_marker("NSObject")
            .set_names(NameTemplate {
                suffix: "Interface".to_string(),
                base_token: Some("NS".to_string()),
                mutable_marker: "Mutable".to_string(),
            });

        let expansion = generate(&decl, &options).unwrap();
        assert_eq!(expansion.immutable.name, "NSString");
        assert_eq!(expansion.mutable.name, "MutableNSString");
        assert_eq!(
            expansion.mutable.conformances[1],
            Conformance::RootMarker("NSObject".to_string())
        );

        let err = generate(&decl, &Options::default()).unwrap_err();
        assert!(matches!(err, GenerateError::RequiresForeignMarker { .. }));
    }

    #[test]
    fn test_expansion_json() {
        let expansion = generate(&foo(), &Options::default()).unwrap();
        let json = expansion.to_json().unwrap();
        let back: Expansion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expansion);
    }

    #[test]
    fn test_expand_keeps_item() {
        let item = quote! {
            #[foreign]
            pub trait FooProtocol: Object {
                fn bar(&self) -> i64;
            }
        };

        let out = expand(TokenStream::new(), item).unwrap();
        let file: syn::File = syn::parse2(out).unwrap();
        assert!(matches!(&file.items[0], syn::Item::Trait(t) if t.ident == "FooProtocol"));
        let structs: Vec<_> = file
            .items
            .iter()
            .flat_map(|i| match i {
                syn::Item::Mod(m) => m
                    .content
                    .as_ref()
                    .map(|(_, items)| items.iter().collect::<Vec<_>>())
                    .unwrap_or_default(),
                item => vec![item],
            })
            .filter_map(|i| match i {
                syn::Item::Struct(s) => Some(s.ident.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(structs, vec!["Foo", "MutableFoo"]);
    }

    #[test]
    fn test_expand_runtime_argument() {
        let item = quote! {
            #[foreign]
            trait FooProtocol: Object {}
        };

        let out = expand(quote!(runtime = crate::rt), item).unwrap().to_string();
        assert!(out.contains("impl crate :: rt :: Object for Foo"));
    }

    #[test]
    fn test_expand_rejects_unknown_argument() {
        let item = quote! {
            #[foreign]
            trait FooProtocol: Object {}
        };

        let err = expand(quote!(color = red), item).unwrap_err();
        assert_eq!(err.to_string(), "unsupported copyable argument");
    }

    #[test]
    fn test_missing_marker_mentions_attribute_order() {
        let item = quote! {
            trait FooProtocol: Object {}
        };

        let err = expand(TokenStream::new(), item).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`FooProtocol` must be marked with #[foreign] to be copyable (#[foreign] goes below #[copyable])"
        );
    }

    #[test]
    fn test_expand_reports_single_error() {
        let item = quote! {
            struct FooProtocol;
        };

        let err = expand(TokenStream::new(), item).unwrap_err();
        assert_eq!(err.into_iter().count(), 1);
    }
}
