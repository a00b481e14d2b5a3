//! Generator configuration.

use crate::names::NameTemplate;

/// Settings shared by every expansion.
///
/// The defaults match the `zonecopy` runtime crate: interfaces are marked with
/// `#[foreign]`, inherit `Object`, and are named `<Name>Protocol`.
#[derive(Debug, Clone)]
pub struct Options {
    /// Attribute names accepted as the foreign interop marker (exact match).
    pub foreign_markers: Vec<String>,

    /// Name of the root marker trait every interface must inherit.
    pub root_marker: String,

    pub names: NameTemplate,

    /// Path to the runtime crate used by the emitted code.
    pub runtime: syn::Path,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            foreign_markers: vec!["foreign".to_string()],
            root_marker: "Object".to_string(),
            names: NameTemplate::default(),
            runtime: syn::parse_quote!(::zonecopy),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept another attribute name as the foreign marker.
    pub fn add_foreign_marker(&mut self, marker: impl Into<String>) -> &mut Self {
        self.foreign_markers.push(marker.into());
        self
    }

    /// Replace the accepted foreign markers.
    pub fn set_foreign_markers(&mut self, markers: &[impl AsRef<str>]) -> &mut Self {
        self.foreign_markers = markers.iter().map(|m| m.as_ref().to_string()).collect();
        self
    }

    pub fn set_root_marker(&mut self, root: impl Into<String>) -> &mut Self {
        self.root_marker = root.into();
        self
    }

    pub fn set_names(&mut self, names: NameTemplate) -> &mut Self {
        self.names = names;
        self
    }

    /// Point emitted code at a different path for the runtime crate, e.g. when
    /// it is re-exported from another crate.
    pub fn set_runtime(&mut self, runtime: syn::Path) -> &mut Self {
        self.runtime = runtime;
        self
    }

    pub(crate) fn primary_foreign_marker(&self) -> &str {
        self.foreign_markers
            .first()
            .map(String::as_str)
            .unwrap_or("foreign")
    }
}
