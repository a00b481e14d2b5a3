//! Builds the description of each generated type.

use crate::types::{
    Argument, Conformance, CopyBody, CopyKind, CopyOperation, CopyReturn, DerivedNames, Field,
    Initializer, Parameter, Property, SynthesizedType, Variant,
};

/// Describe one variant of the expansion of `interface`.
///
/// Both variants get the same shape. Only field mutability and the type name
/// differ; every copy operation produces the mutable variant.
pub fn synthesize(
    variant: Variant,
    names: &DerivedNames,
    interface: &str,
    root_marker: &str,
    properties: &[Property],
) -> SynthesizedType {
    let name = match variant {
        Variant::Immutable => names.immutable.clone(),
        Variant::Mutable => names.mutable.clone(),
    };

    let fields = properties
        .iter()
        .map(|p| Field {
            name: p.name.clone(),
            ty: p.ty.clone(),
            mutable: variant == Variant::Mutable,
        })
        .collect();

    let initializer = Initializer {
        parameters: properties
            .iter()
            .map(|p| Parameter {
                name: p.name.clone(),
                ty: p.ty.clone(),
            })
            .collect(),
    };

    SynthesizedType {
        variant,
        name,
        conformances: vec![
            Conformance::Interface(interface.to_string()),
            Conformance::RootMarker(root_marker.to_string()),
            Conformance::MutableCopying,
        ],
        fields,
        initializer,
        copy_operations: copy_operations(&names.mutable, properties),
    }
}

fn copy_operations(mutable: &str, properties: &[Property]) -> Vec<CopyOperation> {
    let arguments = properties
        .iter()
        .map(|p| Argument {
            label: p.name.clone(),
            field: p.name.clone(),
        })
        .collect();

    vec![
        CopyOperation {
            kind: CopyKind::TypedZone,
            returns: CopyReturn::Concrete(mutable.to_string()),
            body: CopyBody::Construct {
                target: mutable.to_string(),
                arguments,
            },
        },
        CopyOperation {
            kind: CopyKind::ErasedZone,
            returns: CopyReturn::Erased,
            body: CopyBody::Delegate {
                operation: CopyKind::TypedZone,
                forward_zone: true,
            },
        },
        CopyOperation {
            kind: CopyKind::ZoneFree,
            returns: CopyReturn::Concrete(mutable.to_string()),
            body: CopyBody::Delegate {
                operation: CopyKind::TypedZone,
                forward_zone: false,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names() -> DerivedNames {
        DerivedNames {
            immutable: "Foo".to_string(),
            mutable: "MutableFoo".to_string(),
        }
    }

    fn properties() -> Vec<Property> {
        vec![
            Property::new("bar", "i64"),
            Property::new("baz", "String"),
            Property::new("qux", "bool"),
        ]
    }

    #[test]
    fn test_fields_follow_variant_mutability() {
        let immutable = synthesize(Variant::Immutable, &names(), "FooProtocol", "Object", &properties());
        let mutable = synthesize(Variant::Mutable, &names(), "FooProtocol", "Object", &properties());

        assert_eq!(immutable.name, "Foo");
        assert_eq!(mutable.name, "MutableFoo");
        assert!(immutable.fields.iter().all(|f| !f.mutable));
        assert!(mutable.fields.iter().all(|f| f.mutable));

        let shape = |ty: &SynthesizedType| -> Vec<(String, String)> {
            ty.fields.iter().map(|f| (f.name.clone(), f.ty.clone())).collect()
        };
        assert_eq!(shape(&immutable), shape(&mutable));
        assert_eq!(
            shape(&immutable),
            vec![
                ("bar".to_string(), "i64".to_string()),
                ("baz".to_string(), "String".to_string()),
                ("qux".to_string(), "bool".to_string()),
            ]
        );
    }

    #[test]
    fn test_initializer_matches_properties() {
        let ty = synthesize(Variant::Immutable, &names(), "FooProtocol", "Object", &properties());
        let params: Vec<_> = ty.initializer.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(params, vec!["bar", "baz", "qux"]);
    }

    #[test]
    fn test_copies_target_mutable_variant() {
        for variant in [Variant::Immutable, Variant::Mutable] {
            let ty = synthesize(variant, &names(), "FooProtocol", "Object", &properties());
            assert_eq!(ty.copy_operations.len(), 3);

            let typed = ty.copy_operation(CopyKind::TypedZone).unwrap();
            assert_eq!(typed.returns, CopyReturn::Concrete("MutableFoo".to_string()));
            let CopyBody::Construct { target, arguments } = &typed.body else {
                panic!("typed copy must construct");
            };
            assert_eq!(target, "MutableFoo");
            let labels: Vec<_> = arguments.iter().map(|a| a.label.as_str()).collect();
            assert_eq!(labels, vec!["bar", "baz", "qux"]);

            let erased = ty.copy_operation(CopyKind::ErasedZone).unwrap();
            assert_eq!(erased.returns, CopyReturn::Erased);
            assert_eq!(
                erased.body,
                CopyBody::Delegate {
                    operation: CopyKind::TypedZone,
                    forward_zone: true,
                }
            );

            let free = ty.copy_operation(CopyKind::ZoneFree).unwrap();
            assert_eq!(
                free.body,
                CopyBody::Delegate {
                    operation: CopyKind::TypedZone,
                    forward_zone: false,
                }
            );
        }
    }

    #[test]
    fn test_conformances() {
        let ty = synthesize(Variant::Mutable, &names(), "FooProtocol", "Object", &[]);
        assert_eq!(
            ty.conformances,
            vec![
                Conformance::Interface("FooProtocol".to_string()),
                Conformance::RootMarker("Object".to_string()),
                Conformance::MutableCopying,
            ]
        );
    }

    #[test]
    fn test_zero_properties() {
        let ty = synthesize(Variant::Immutable, &names(), "FooProtocol", "Object", &[]);
        assert!(ty.fields.is_empty());
        assert!(ty.initializer.parameters.is_empty());

        let typed = ty.copy_operation(CopyKind::TypedZone).unwrap();
        assert!(matches!(
            &typed.body,
            CopyBody::Construct { arguments, .. } if arguments.is_empty()
        ));
    }
}
