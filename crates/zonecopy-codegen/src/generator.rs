//! Ahead-of-time generation for build scripts and tooling.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use walkdir::WalkDir;

use crate::emit::{EmitContext, emit};
use crate::error::Error;
use crate::lower::{attribute_names, lower_trait};
use crate::options::Options;
use crate::types::{Declaration, Expansion};
use crate::generate;

#[derive(Debug, Clone)]
struct Entry {
    declaration: Declaration,
    vis: syn::Visibility,
}

/// Collects interface declarations and writes the generated types as Rust
/// source, ready for `include!`.
#[derive(Debug)]
pub struct CodeGenerator {
    /// Declarations by interface name
    entries: BTreeMap<String, Entry>,

    options: Options,

    /// Custom header comment
    header: Option<String>,

    /// Attribute names that select a trait when scanning sources (default: ["copyable"])
    pub(crate) triggers: Vec<String>,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            options: Options::default(),
            header: None,
            triggers: vec!["copyable".to_string()],
        }
    }
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `options` for every declaration expanded by this generator.
    pub fn with_options(&mut self, options: Options) -> &mut Self {
        self.options = options;
        self
    }

    /// Set a custom header comment for the generated file.
    pub fn set_header(&mut self, header: impl Into<String>) -> &mut Self {
        self.header = Some(header.into());
        self
    }

    /// Add an attribute name that selects traits when scanning sources.
    ///
    /// Traits expanded ahead of time should not also carry `#[copyable]`, so
    /// a build script usually selects on the foreign marker instead:
    ///
    /// ```rust,ignore
    /// generator.set_triggers(&["foreign"]);
    /// ```
    pub fn add_trigger(&mut self, trigger: impl Into<String>) -> &mut Self {
        self.triggers.push(trigger.into());
        self
    }

    /// Set the trigger attribute names, replacing the defaults.
    pub fn set_triggers(&mut self, triggers: &[impl AsRef<str>]) -> &mut Self {
        self.triggers = triggers.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Add a declaration directly. Generated types are `pub`.
    ///
    /// # Example
    ///
    /// ```
    /// use zonecopy_codegen::{CodeGenerator, Declaration};
    ///
    /// let mut generator = CodeGenerator::new();
    /// generator.add_declaration(
    ///     Declaration::interface("PointProtocol")
    ///         .with_attribute("foreign")
    ///         .with_inherit("Object")
    ///         .with_property("x", "f64")
    ///         .with_property("y", "f64"),
    /// );
    /// let code = generator.generate().unwrap();
    /// assert!(code.contains("struct MutablePoint"));
    /// ```
    pub fn add_declaration(&mut self, declaration: Declaration) -> &mut Self {
        self.insert(declaration, syn::parse_quote!(pub));
        self
    }

    /// Add a declaration from its JSON interchange form.
    pub fn add_declaration_json(&mut self, json: &str) -> Result<&mut Self, Error> {
        let declaration = Declaration::from_json(json)?;
        Ok(self.add_declaration(declaration))
    }

    /// Parse a single Rust source file and collect the traits carrying a trigger attribute.
    pub fn add_source_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, Error> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        self.parse_source(&source, path)?;
        Ok(self)
    }

    /// Parse Rust source from a string.
    pub fn add_source_str(&mut self, source: &str) -> Result<&mut Self, Error> {
        self.parse_source(source, Path::new("<string>"))?;
        Ok(self)
    }

    /// Recursively scan a directory for `.rs` files.
    pub fn add_source_dir(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, Error> {
        for entry in WalkDir::new(path) {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map(|e| e == "rs").unwrap_or(false) {
                self.add_source_file(path)?;
            }
        }
        Ok(self)
    }

    fn parse_source(&mut self, source: &str, path: &Path) -> Result<(), Error> {
        let file = syn::parse_file(source).map_err(|source| Error::Parse {
            path: PathBuf::from(path),
            source,
        })?;
        log::debug!("scanning {}", path.display());

        for item in &file.items {
            let syn::Item::Trait(item) = item else {
                continue;
            };
            let attributes = attribute_names(&item.attrs);
            if !attributes.iter().any(|a| self.triggers.contains(a)) {
                log::trace!("skipping trait `{}` without trigger", item.ident);
                continue;
            }
            let lowered = lower_trait(item);
            self.insert(lowered.declaration, lowered.vis);
        }
        Ok(())
    }

    fn insert(&mut self, declaration: Declaration, vis: syn::Visibility) {
        self.entries
            .insert(declaration.name.clone(), Entry { declaration, vis });
    }

    /// Expand every collected declaration.
    pub fn expansions(&self) -> Result<Vec<Expansion>, Error> {
        self.entries
            .values()
            .map(|entry| self.expand(&entry.declaration))
            .collect()
    }

    fn expand(&self, declaration: &Declaration) -> Result<Expansion, Error> {
        log::debug!("expanding `{}`", declaration.name);
        generate(declaration, &self.options).map_err(|source| Error::Generate {
            interface: declaration.name.clone(),
            source,
        })
    }

    /// Generate the Rust code as a string.
    pub fn generate(&self) -> Result<String, Error> {
        let mut output = String::new();

        if let Some(header) = &self.header {
            for line in header.lines() {
                output.push_str("// ");
                output.push_str(line);
                output.push('\n');
            }
        } else {
            output.push_str("// Auto-generated by zonecopy-codegen\n");
            output.push_str("// DO NOT EDIT MANUALLY\n");
        }
        output.push('\n');

        for entry in self.entries.values() {
            let tokens = self.emit_entry(entry)?;
            output.push_str(&tokens.to_string());
            output.push_str("\n\n");
        }

        Ok(output.trim_end().to_string() + "\n")
    }

    fn emit_entry(&self, entry: &Entry) -> Result<TokenStream, Error> {
        let expansion = self.expand(&entry.declaration)?;
        let ctx = EmitContext::new(&self.options, entry.vis.clone());
        emit(&expansion, &ctx).map_err(|source| Error::Generate {
            interface: entry.declaration.name.clone(),
            source,
        })
    }

    /// Write the generated code to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let code = self.generate()?;
        fs::write(path, code)?;
        Ok(())
    }

    /// Write the generated code to a writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let code = self.generate()?;
        writer.write_all(code.as_bytes()).map_err(Error::from)
    }

    /// Number of collected declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
