//! Declaration interchange format and synthesized type descriptions.
//!
//! Everything here is a plain value description. Host pipelines build a
//! [`Declaration`] (the proc macro does so from a `syn::Item`, other hosts can
//! deserialize one from JSON) and get an [`Expansion`] back.

use serde::{Deserialize, Serialize};

/// Kind tag of a declaration handed to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Interface,
    Struct,
    Enum,
    Function,
    Other,
}

/// A declaration as seen by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: String,
    /// Attribute names, one entry per attribute.
    #[serde(default)]
    pub attributes: Vec<String>,
    /// Inherited type names, in declaration order.
    #[serde(default)]
    pub inherits: Vec<String>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Declaration {
    /// Create an interface declaration with no attributes, supertypes or members.
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            kind: DeclKind::Interface,
            name: name.into(),
            attributes: Vec::new(),
            inherits: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn with_inherit(mut self, name: impl Into<String>) -> Self {
        self.inherits.push(name.into());
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Shorthand for a single-binding property member.
    pub fn with_property(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.with_member(Member::property(name, ty))
    }

    /// Parse a declaration from its JSON interchange form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A member of an interface declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    Property(PropertySignature),
    /// Anything the generator does not synthesize storage for.
    Other { description: String },
}

impl Member {
    pub fn property(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Member::Property(PropertySignature {
            bindings: vec![Binding {
                pattern: Pattern::Ident(name.into()),
                ty: Some(ty.into()),
            }],
        })
    }

    pub fn other(description: impl Into<String>) -> Self {
        Member::Other {
            description: description.into(),
        }
    }
}

/// A property signature, possibly declaring several bindings at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySignature {
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub pattern: Pattern,
    /// Type annotation as source text, if one was written.
    #[serde(default)]
    pub ty: Option<String>,
}

/// Binding pattern of a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Ident(String),
    Tuple(Vec<Pattern>),
    Wildcard,
}

impl Pattern {
    pub fn describe(&self) -> String {
        match self {
            Pattern::Ident(name) => name.clone(),
            Pattern::Tuple(elements) => {
                let parts: Vec<_> = elements.iter().map(Pattern::describe).collect();
                format!("({})", parts.join(", "))
            }
            Pattern::Wildcard => "_".to_string(),
        }
    }
}

/// A stored property retained by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub ty: String,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Names of the two synthesized types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedNames {
    pub immutable: String,
    pub mutable: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Immutable,
    Mutable,
}

/// A trait the synthesized type implements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Conformance {
    /// The interface the type was generated from.
    Interface(String),
    /// The root marker every interop object implements.
    RootMarker(String),
    /// The zone copy capability, erased and concrete.
    MutableCopying,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub mutable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
}

/// The memberwise initializer. Its body assigns every parameter to the field
/// of the same name, in parameter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initializer {
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyKind {
    /// `copy_with_zone`, returning the mutable type.
    TypedZone,
    /// `copy_with_zone_erased`, returning an erased object.
    ErasedZone,
    /// `copy`, without a zone.
    ZoneFree,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum CopyReturn {
    Concrete(String),
    Erased,
}

/// A labeled argument: `label: self.field`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub label: String,
    pub field: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CopyBody {
    /// Build `target` from the current field values.
    Construct {
        target: String,
        arguments: Vec<Argument>,
    },
    /// Call another copy operation of the same type.
    Delegate { operation: CopyKind, forward_zone: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyOperation {
    pub kind: CopyKind,
    pub returns: CopyReturn,
    pub body: CopyBody,
}

/// One of the two generated types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesizedType {
    pub variant: Variant,
    pub name: String,
    pub conformances: Vec<Conformance>,
    pub fields: Vec<Field>,
    pub initializer: Initializer,
    pub copy_operations: Vec<CopyOperation>,
}

impl SynthesizedType {
    pub fn copy_operation(&self, kind: CopyKind) -> Option<&CopyOperation> {
        self.copy_operations.iter().find(|op| op.kind == kind)
    }
}

/// Result of expanding one interface declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expansion {
    pub interface: String,
    pub immutable: SynthesizedType,
    pub mutable: SynthesizedType,
}

impl Expansion {
    /// Both synthesized types, immutable first.
    pub fn types(&self) -> [&SynthesizedType; 2] {
        [&self.immutable, &self.mutable]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
