//! Error types.

use std::io;
use std::path::PathBuf;

/// Diagnostic raised while expanding a single declaration.
///
/// Generation is all-or-nothing: when one of these is returned no type has
/// been synthesized for the declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("#[copyable] can only be applied to a trait, found {kind} `{name}`")]
    RequiresInterface { kind: String, name: String },

    #[error(
        "`{interface}` must be marked with #[{marker}] to be copyable (#[{marker}] goes below #[copyable])"
    )]
    RequiresForeignMarker { interface: String, marker: String },

    #[error("`{interface}` must inherit `{root}` to be copyable")]
    RequiresRootMarker { interface: String, root: String },

    #[error("property `{pattern}` must be bound to a plain identifier")]
    InvalidPropertyName { pattern: String },

    #[error("interface name `{name}` must end with `{suffix}`")]
    MissingSuffix { name: String, suffix: String },

    #[error("interface name `{name}` leaves an empty type name once `{suffix}` is removed")]
    EmptyTypeName { name: String, suffix: String },

    #[error("type name `{name}` does not contain `{token}`")]
    MissingBaseToken { name: String, token: String },

    #[error("generated type name `{name}` collides with another name")]
    NameCollision { name: String },

    #[error("`{name}` is not a valid type name")]
    InvalidTypeName { name: String },

    #[error("property `{property}` has an unparsable type `{ty}`")]
    InvalidPropertyType { property: String, ty: String },
}

/// Errors from the build-script [`CodeGenerator`](crate::CodeGenerator).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error("failed to parse {}: {source}", .path.display())]
    Parse { path: PathBuf, source: syn::Error },

    #[error("invalid declaration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot expand `{interface}`: {source}")]
    Generate {
        interface: String,
        source: GenerateError,
    },
}
