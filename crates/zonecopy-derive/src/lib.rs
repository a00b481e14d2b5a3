//! Attribute macros for zonecopy.
//!
//! `#[copyable]` does the work; `#[foreign]` is a no-op marker that
//! `#[copyable]` requires on the trait, and must therefore be written below it.
//!
//! ```rust,ignore
//! use zonecopy::{copyable, foreign, Object};
//!
//! #[copyable]
//! #[foreign]
//! pub trait PointProtocol: Object {
//!     fn x(&self) -> f64;
//!     fn y(&self) -> f64;
//! }
//!
//! let point = Point::new(1.0, 2.0);
//! ```

use proc_macro::TokenStream;

/// Generates an immutable and a mutable implementation of a getter trait.
///
/// For `FooProtocol` this emits `Foo` (private fields, defined in a hidden
/// module and re-exported) and `MutableFoo` (public fields), each with a
/// memberwise `new` and the `Object`, `Copying` and `MutableCopying` impls.
/// The trait itself is left untouched and must be declared at module level.
///
/// Arguments:
/// * `runtime = path` - path to the runtime crate (default `::zonecopy`)
#[proc_macro_attribute]
pub fn copyable(args: TokenStream, item: TokenStream) -> TokenStream {
    let item = proc_macro2::TokenStream::from(item);
    match zonecopy_codegen::expand(args.into(), item.clone()) {
        Ok(expanded) => expanded.into(),
        Err(err) => {
            // Keep the item so the only diagnostic is ours.
            let mut output = item;
            output.extend(err.to_compile_error());
            output.into()
        }
    }
}

/// Marks a trait as part of the foreign interop surface.
///
/// This macro is a no-op. `#[copyable]` checks for it before expanding.
#[proc_macro_attribute]
pub fn foreign(_args: TokenStream, item: TokenStream) -> TokenStream {
    item
}
