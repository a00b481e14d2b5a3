//! Lowers parsed Rust items into the declaration interchange format.

use proc_macro2::Span;
use quote::ToTokens;
use syn::spanned::Spanned;
use syn::{FnArg, ReturnType, TraitItem, TraitItemFn, TypeParamBound};

use crate::types::{Binding, DeclKind, Declaration, Member, Pattern, PropertySignature};

/// A declaration together with what emission needs from the original item.
#[derive(Debug, Clone)]
pub struct Lowered {
    pub declaration: Declaration,
    pub vis: syn::Visibility,
    /// Where diagnostics about this declaration point.
    pub span: Span,
}

/// Lower any item. Only traits become interfaces; everything else keeps its
/// kind and name so validation can reject it.
pub fn lower_item(item: &syn::Item) -> Lowered {
    match item {
        syn::Item::Trait(item) => lower_trait(item),
        syn::Item::Struct(s) => other(DeclKind::Struct, &s.ident, &s.attrs, &s.vis),
        syn::Item::Enum(e) => other(DeclKind::Enum, &e.ident, &e.attrs, &e.vis),
        syn::Item::Fn(f) => other(DeclKind::Function, &f.sig.ident, &f.attrs, &f.vis),
        syn::Item::Type(t) => other(DeclKind::Other, &t.ident, &t.attrs, &t.vis),
        syn::Item::Union(u) => other(DeclKind::Other, &u.ident, &u.attrs, &u.vis),
        syn::Item::Mod(m) => other(DeclKind::Other, &m.ident, &m.attrs, &m.vis),
        syn::Item::Const(c) => other(DeclKind::Other, &c.ident, &c.attrs, &c.vis),
        syn::Item::Static(s) => other(DeclKind::Other, &s.ident, &s.attrs, &s.vis),
        syn::Item::TraitAlias(t) => other(DeclKind::Other, &t.ident, &t.attrs, &t.vis),
        syn::Item::ExternCrate(e) => other(DeclKind::Other, &e.ident, &e.attrs, &e.vis),
        item => Lowered {
            declaration: Declaration {
                kind: DeclKind::Other,
                name: unnamed_item(item),
                attributes: Vec::new(),
                inherits: Vec::new(),
                members: Vec::new(),
            },
            vis: syn::Visibility::Inherited,
            span: item.span(),
        },
    }
}

/// Stand-in name for items without an identifier of their own.
fn unnamed_item(item: &syn::Item) -> String {
    match item {
        syn::Item::Impl(i) => format!("impl {}", i.self_ty.to_token_stream()),
        syn::Item::Use(u) => format!("use {}", u.tree.to_token_stream()),
        syn::Item::ForeignMod(_) => "extern block".to_string(),
        syn::Item::Macro(m) => match &m.ident {
            Some(ident) => ident.to_string(),
            None => format!("{}!", m.mac.path.to_token_stream()),
        },
        _ => "item".to_string(),
    }
}

pub fn lower_trait(item: &syn::ItemTrait) -> Lowered {
    let inherits = item
        .supertraits
        .iter()
        .filter_map(|bound| match bound {
            TypeParamBound::Trait(bound) => bound.path.segments.last(),
            _ => None,
        })
        .map(|segment| segment.ident.to_string())
        .collect();

    Lowered {
        declaration: Declaration {
            kind: DeclKind::Interface,
            name: item.ident.to_string(),
            attributes: attribute_names(&item.attrs),
            inherits,
            members: item.items.iter().map(lower_member).collect(),
        },
        vis: item.vis.clone(),
        span: item.ident.span(),
    }
}

fn other(kind: DeclKind, ident: &syn::Ident, attrs: &[syn::Attribute], vis: &syn::Visibility) -> Lowered {
    Lowered {
        declaration: Declaration {
            kind,
            name: ident.to_string(),
            attributes: attribute_names(attrs),
            inherits: Vec::new(),
            members: Vec::new(),
        },
        vis: vis.clone(),
        span: ident.span(),
    }
}

/// Attribute names by the last path segment, so `foreign`,
/// `zonecopy::foreign` and re-exports under another module all read as
/// `foreign`.
pub(crate) fn attribute_names(attrs: &[syn::Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter_map(|attr| attr.path().segments.last())
        .map(|segment| segment.ident.to_string())
        .collect()
}

fn lower_member(item: &TraitItem) -> Member {
    match item {
        TraitItem::Fn(f) => lower_fn(f),
        TraitItem::Const(c) => Member::other(format!("const {}", c.ident)),
        TraitItem::Type(t) => Member::other(format!("type {}", t.ident)),
        TraitItem::Macro(m) => Member::other(format!("{}!", m.mac.path.to_token_stream())),
        _ => Member::other("unknown item"),
    }
}

/// A getter `fn name(&self) -> T;` is a property. A getter with no return
/// type is a property without a type annotation.
fn lower_fn(f: &TraitItemFn) -> Member {
    let sig = &f.sig;
    let is_getter = f.default.is_none()
        && sig.generics.params.is_empty()
        && sig.generics.where_clause.is_none()
        && sig.constness.is_none()
        && sig.asyncness.is_none()
        && sig.unsafety.is_none()
        && sig.variadic.is_none()
        && sig.inputs.len() == 1
        && matches!(
            sig.inputs.first(),
            Some(FnArg::Receiver(r)) if r.reference.is_some() && r.mutability.is_none() && r.colon_token.is_none()
        );

    if !is_getter {
        return Member::other(format!("fn {}", sig.ident));
    }

    let ty = match &sig.output {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) => Some(ty.to_token_stream().to_string()),
    };
    Member::Property(PropertySignature {
        bindings: vec![Binding {
            pattern: Pattern::Ident(sig.ident.to_string()),
            ty,
        }],
    })
}
