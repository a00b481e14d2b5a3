//! Checks that a declaration can be expanded at all.

use crate::error::GenerateError;
use crate::options::Options;
use crate::types::{DeclKind, Declaration};

/// Check kind, foreign marker and root marker, in that order.
pub fn validate(decl: &Declaration, options: &Options) -> Result<(), GenerateError> {
    if decl.kind != DeclKind::Interface {
        return Err(GenerateError::RequiresInterface {
            kind: kind_name(decl.kind).to_string(),
            name: decl.name.clone(),
        });
    }

    let marked = decl
        .attributes
        .iter()
        .any(|attr| options.foreign_markers.iter().any(|m| m == attr));
    if !marked {
        return Err(GenerateError::RequiresForeignMarker {
            interface: decl.name.clone(),
            marker: options.primary_foreign_marker().to_string(),
        });
    }

    let rooted = decl
        .inherits
        .iter()
        .any(|name| name.trim() == options.root_marker);
    if !rooted {
        return Err(GenerateError::RequiresRootMarker {
            interface: decl.name.clone(),
            root: options.root_marker.clone(),
        });
    }

    Ok(())
}

fn kind_name(kind: DeclKind) -> &'static str {
    match kind {
        DeclKind::Interface => "trait",
        DeclKind::Struct => "struct",
        DeclKind::Enum => "enum",
        DeclKind::Function => "function",
        DeclKind::Other => "item",
    }
}
