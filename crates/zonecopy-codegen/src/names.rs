//! Output type naming.

use crate::error::GenerateError;
use crate::types::DerivedNames;

/// Naming rules for the two synthesized types.
///
/// With the defaults, `SettingsProtocol` becomes `Settings` and
/// `MutableSettings`. Setting a base token switches to in-place substitution:
/// with `base_token = "Object"`, `ObjectStoreProtocol` becomes `ObjectStore`
/// and `MutableObjectStore`, while `BlobObjectProtocol` becomes `BlobObject`
/// and `BlobMutableObject`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    /// Trailing token every interface name must carry.
    pub suffix: String,
    /// Token of the immutable name that receives the marker. `None` prefixes
    /// the whole name.
    pub base_token: Option<String>,
    /// Inserted in front of the base token to name the mutable type.
    pub mutable_marker: String,
}

impl Default for NameTemplate {
    fn default() -> Self {
        Self {
            suffix: "Protocol".to_string(),
            base_token: None,
            mutable_marker: "Mutable".to_string(),
        }
    }
}

impl NameTemplate {
    pub fn derive(&self, interface: &str) -> Result<DerivedNames, GenerateError> {
        let stem = interface
            .strip_suffix(self.suffix.as_str())
            .ok_or_else(|| GenerateError::MissingSuffix {
                name: interface.to_string(),
                suffix: self.suffix.clone(),
            })?;
        if stem.is_empty() {
            return Err(GenerateError::EmptyTypeName {
                name: interface.to_string(),
                suffix: self.suffix.clone(),
            });
        }

        let mutable = match &self.base_token {
            None => format!("{}{}", self.mutable_marker, stem),
            Some(token) => {
                if token.is_empty() || !stem.contains(token.as_str()) {
                    return Err(GenerateError::MissingBaseToken {
                        name: stem.to_string(),
                        token: token.clone(),
                    });
                }
                stem.replacen(token.as_str(), &format!("{}{}", self.mutable_marker, token), 1)
            }
        };

        // Neither type may share a name with the other or with the interface.
        if stem == interface || mutable == stem {
            return Err(GenerateError::NameCollision {
                name: stem.to_string(),
            });
        }
        if mutable == interface {
            return Err(GenerateError::NameCollision { name: mutable });
        }

        Ok(DerivedNames {
            immutable: stem.to_string(),
            mutable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_template() {
        let names = NameTemplate::default().derive("FooProtocol").unwrap();
        assert_eq!(names.immutable, "Foo");
        assert_eq!(names.mutable, "MutableFoo");
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let template = NameTemplate::default();
        let first = template.derive("SettingsProtocol").unwrap();
        let second = template.derive("SettingsProtocol").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_suffix_must_be_trailing() {
        let err = NameTemplate::default().derive("ProtocolHandler").unwrap_err();
        assert_eq!(
            err,
            GenerateError::MissingSuffix {
                name: "ProtocolHandler".to_string(),
                suffix: "Protocol".to_string(),
            }
        );
    }

    #[test]
    fn test_bare_suffix_is_rejected() {
        let err = NameTemplate::default().derive("Protocol").unwrap_err();
        assert!(matches!(err, GenerateError::EmptyTypeName { .. }));
    }

    #[test]
    fn test_base_token_replaces_first_occurrence() {
        let template = NameTemplate {
            base_token: Some("Object".to_string()),
            ..NameTemplate::default()
        };

        let names = template.derive("BlobObjectObjectProtocol").unwrap();
        assert_eq!(names.immutable, "BlobObjectObject");
        assert_eq!(names.mutable, "BlobMutableObjectObject");
    }

    #[test]
    fn test_missing_base_token() {
        let template = NameTemplate {
            base_token: Some("NS".to_string()),
            ..NameTemplate::default()
        };

        let err = template.derive("SettingsProtocol").unwrap_err();
        assert_eq!(
            err,
            GenerateError::MissingBaseToken {
                name: "Settings".to_string(),
                token: "NS".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_suffix_collides_with_interface() {
        let template = NameTemplate {
            suffix: String::new(),
            ..NameTemplate::default()
        };

        let err = template.derive("FooProtocol").unwrap_err();
        assert_eq!(
            err,
            GenerateError::NameCollision {
                name: "FooProtocol".to_string(),
            }
        );
    }

    #[test]
    fn test_mutable_name_collides_with_interface() {
        let template = NameTemplate {
            suffix: "Foo".to_string(),
            mutable_marker: "Foo".to_string(),
            ..NameTemplate::default()
        };

        let err = template.derive("FooFoo").unwrap_err();
        assert_eq!(err, GenerateError::NameCollision { name: "FooFoo".to_string() });
    }

    #[test]
    fn test_empty_marker_collides() {
        let template = NameTemplate {
            mutable_marker: String::new(),
            ..NameTemplate::default()
        };

        let err = template.derive("FooProtocol").unwrap_err();
        assert_eq!(err, GenerateError::NameCollision { name: "Foo".to_string() });
    }
}
