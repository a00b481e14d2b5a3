//! Property extraction from an interface's member list.

use crate::error::GenerateError;
use crate::types::{Member, Pattern, Property};

/// Collect the stored properties of an interface, in declaration order.
///
/// Members that are not single, typed property bindings are skipped. A typed
/// binding whose pattern is not a plain identifier is an error.
pub fn extract_properties(members: &[Member]) -> Result<Vec<Property>, GenerateError> {
    let mut properties = Vec::new();

    for member in members {
        let Member::Property(signature) = member else {
            continue;
        };
        let [binding] = signature.bindings.as_slice() else {
            log::trace!("skipping property with {} bindings", signature.bindings.len());
            continue;
        };
        let Some(ty) = &binding.ty else {
            log::trace!("skipping untyped property `{}`", binding.pattern.describe());
            continue;
        };

        let name = match &binding.pattern {
            Pattern::Ident(name) if is_identifier(name) => name.clone(),
            pattern => {
                return Err(GenerateError::InvalidPropertyName {
                    pattern: pattern.describe(),
                });
            }
        };
        properties.push(Property {
            name,
            ty: ty.clone(),
        });
    }

    Ok(properties)
}

/// Whether `name` can be used as a field and parameter name.
pub(crate) fn is_identifier(name: &str) -> bool {
    syn::parse_str::<syn::Ident>(name).is_ok_and(|ident| ident != "self" && ident != "Self")
}
