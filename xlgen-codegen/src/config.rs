//! Generator configuration.

use crate::naming::ReservedNames;

/// Derives every emitted struct and union enum carries.
pub const BASE_DERIVES: &[&str] = &["Debug", "Clone", "PartialEq", "Eq"];

/// Options controlling code generation.
///
/// Built with consuming setters:
///
/// ```
/// use xlgen_codegen::GeneratorConfig;
///
/// let config = GeneratorConfig::new()
///     .source_name("libxl_types.idl")
///     .derive("Hash")
///     .rename_type("Ordering", "Order");
/// assert_eq!(config.derives, ["Hash"]);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Source recorded in the provenance header. Defaults to the schema name.
    pub source_name: Option<String>,
    /// Extra derive paths added to structs, enums and union enums.
    pub derives: Vec<String>,
    /// Type name substitutions.
    pub reserved: ReservedNames,
    /// Whether enums get `label`, `from_label` and `values` helpers.
    pub enum_helpers: bool,
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source_name: None,
            derives: Vec::new(),
            reserved: ReservedNames::new(),
            enum_helpers: true,
        }
    }

    /// Sets the source recorded in the provenance header.
    #[must_use]
    pub fn source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Adds an extra derive. Base derives and `Default` are ignored.
    #[must_use]
    pub fn derive(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        if !BASE_DERIVES.contains(&path.as_str())
            && path != "Default"
            && !self.derives.contains(&path)
        {
            self.derives.push(path);
        }
        self
    }

    /// Emits type `from` under the name `to`.
    #[must_use]
    pub fn rename_type(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.reserved = self.reserved.with(from, to);
        self
    }

    /// Replaces the whole substitution table.
    #[must_use]
    pub fn reserved_names(mut self, reserved: ReservedNames) -> Self {
        self.reserved = reserved;
        self
    }

    /// Enables or disables the enum label helpers.
    #[must_use]
    pub fn enum_helpers(mut self, enabled: bool) -> Self {
        self.enum_helpers = enabled;
        self
    }

    /// Returns the derive list for a type, with `Default` when applicable.
    #[must_use]
    pub fn derive_list(&self, base: &[&str], with_default: bool) -> String {
        let mut derives: Vec<&str> = base.to_vec();
        if with_default {
            derives.push("Default");
        }
        for extra in &self.derives {
            if !derives.contains(&extra.as_str()) {
                derives.push(extra);
            }
        }
        derives.join(", ")
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
