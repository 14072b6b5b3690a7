//! Enum code generation.
//!
//! Enums become integer newtypes with one associated constant per label.
//! Any value the native side stores stays representable, including values
//! the schema does not declare.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::naming::{MemberSet, NameTable, Namer, const_ident};
use crate::rust::push_doc;
use xlgen_schema::ir::IrEnum;

/// Derives every enum newtype carries.
const ENUM_DERIVES: &[&str] = &[
    "Debug",
    "Clone",
    "Copy",
    "PartialEq",
    "Eq",
    "Hash",
    "PartialOrd",
    "Ord",
];

/// Generator for enum definitions.
pub struct EnumGenerator<'a> {
    namer: Namer<'a>,
    config: &'a GeneratorConfig,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(namer: Namer<'a>, config: &'a GeneratorConfig) -> Self {
        Self { namer, config }
    }

    /// Generates an enum definition with its constants and conversions.
    ///
    /// # Errors
    /// Returns `CodegenError::NameCollision` if the type name is taken, or
    /// `CodegenError::FieldCollision` if two labels map to one constant.
    pub fn generate(
        &self,
        enum_def: &IrEnum,
        names: &mut NameTable,
    ) -> Result<String, CodegenError> {
        let rust_name = self.namer.type_name(&enum_def.name);
        names.register(&rust_name, format!("enum {}", enum_def.name))?;

        let storage = enum_def.storage.rust_type();
        let mut consts = MemberSet::new(&rust_name);
        let mut labels = Vec::with_capacity(enum_def.values.len());
        for value in &enum_def.values {
            let ident = const_ident(&value.name);
            consts.insert(&ident)?;
            labels.push(ident);
        }

        let mut output = String::new();
        match &enum_def.description {
            Some(doc) => push_doc(&mut output, "", doc),
            None => output.push_str(&format!("/// `{}` enumeration.\n", enum_def.name)),
        }
        output.push_str(&format!(
            "#[derive({})]\n",
            self.config.derive_list(ENUM_DERIVES, false)
        ));
        output.push_str("#[repr(transparent)]\n");
        output.push_str(&format!("pub struct {}(pub {});\n\n", rust_name, storage));

        output.push_str(&format!("impl {} {{\n", rust_name));
        for (value, ident) in enum_def.values.iter().zip(&labels) {
            match &value.description {
                Some(doc) => push_doc(&mut output, "    ", doc),
                None => output.push_str(&format!("    /// `{}`.\n", value.name)),
            }
            output.push_str(&format!(
                "    pub const {}: Self = Self({});\n",
                ident, value.value
            ));
        }
        if self.config.enum_helpers {
            if !labels.is_empty() {
                output.push('\n');
            }
            output.push_str(&self.generate_helpers(&rust_name, enum_def, &labels));
        }
        output.push_str("}\n\n");

        // Default
        let default = enum_def
            .default
            .as_ref()
            .and_then(|d| enum_def.values.iter().position(|v| &v.name == d))
            .map_or_else(|| "Self(0)".to_string(), |idx| format!("Self::{}", labels[idx]));
        output.push_str(&format!("impl Default for {} {{\n", rust_name));
        output.push_str("    fn default() -> Self {\n");
        output.push_str(&format!("        {}\n", default));
        output.push_str("    }\n");
        output.push_str("}\n\n");

        // Conversions
        output.push_str(&format!("impl From<{}> for {} {{\n", storage, rust_name));
        output.push_str(&format!("    fn from(value: {}) -> Self {{\n", storage));
        output.push_str("        Self(value)\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl From<{}> for {} {{\n", rust_name, storage));
        output.push_str(&format!("    fn from(value: {}) -> Self {{\n", rust_name));
        output.push_str("        value.0\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        tracing::debug!(
            "Generated enum {} with {} values",
            rust_name,
            enum_def.values.len()
        );
        Ok(output)
    }

    /// Generates `label`, `from_label` and `values`.
    fn generate_helpers(&self, rust_name: &str, enum_def: &IrEnum, labels: &[String]) -> String {
        let mut output = String::new();

        output.push_str("    /// Returns the schema label of a declared value.\n");
        output.push_str("    #[must_use]\n");
        output.push_str("    pub const fn label(self) -> Option<&'static str> {\n");
        if enum_def.values.is_empty() {
            output.push_str("        let _ = self;\n");
            output.push_str("        None\n");
        } else {
            output.push_str("        match self.0 {\n");
            for value in &enum_def.values {
                output.push_str(&format!(
                    "            {} => Some({:?}),\n",
                    value.value, value.name
                ));
            }
            output.push_str("            _ => None,\n");
            output.push_str("        }\n");
        }
        output.push_str("    }\n\n");

        output.push_str("    /// Parses a schema label.\n");
        output.push_str("    #[must_use]\n");
        output.push_str("    pub fn from_label(label: &str) -> Option<Self> {\n");
        if enum_def.values.is_empty() {
            output.push_str("        let _ = label;\n");
            output.push_str("        None\n");
        } else {
            output.push_str("        match label {\n");
            for (value, ident) in enum_def.values.iter().zip(labels) {
                output.push_str(&format!(
                    "            {:?} => Some(Self::{}),\n",
                    value.name, ident
                ));
            }
            output.push_str("            _ => None,\n");
            output.push_str("        }\n");
        }
        output.push_str("    }\n\n");

        output.push_str("    /// Returns the declared values in schema order.\n");
        output.push_str("    #[must_use]\n");
        output.push_str("    pub fn values() -> &'static [Self] {\n");
        let list = labels
            .iter()
            .map(|ident| format!("{}::{}", rust_name, ident))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!(
            "        const VALUES: &[{}] = &[{}];\n",
            rust_name, list
        ));
        output.push_str("        VALUES\n");
        output.push_str("    }\n");

        output
    }
}
