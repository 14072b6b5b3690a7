//! Keyed union code generation.
//!
//! A keyed union on field `f` of `Parent` produces:
//! - a closed enum `ParentFUnion` with one tuple variant per mapped label
//! - a marker trait `ParentFUnionVariant` carrying the selecting `TAG`
//! - one payload struct `ParentFUnionLabel` per mapped label
//!
//! Labels without a mapping produce nothing. The payload structs themselves
//! are emitted by [`StructGenerator`](crate::rust::StructGenerator), which
//! also owns the recursion into nested unions.

use crate::config::{BASE_DERIVES, GeneratorConfig};
use crate::error::CodegenError;
use crate::naming::{NameTable, Namer, const_ident};
use xlgen_schema::ir::IrUnion;

/// Emitted names of one keyed union.
#[derive(Debug, Clone)]
pub struct UnionNames {
    /// Closed union enum.
    pub union_name: String,
    /// Marker trait.
    pub marker: String,
    /// Discriminant enum type.
    pub enum_type: String,
    /// Names of each payload-bearing label, in mapping order.
    pub variants: Vec<VariantNames>,
}

/// Emitted names of one payload-bearing label.
#[derive(Debug, Clone)]
pub struct VariantNames {
    /// Schema label.
    pub label: String,
    /// Tuple variant of the union enum.
    pub variant: String,
    /// Payload struct.
    pub struct_name: String,
    /// Associated constant of the discriminant enum.
    pub tag_const: String,
}

impl UnionNames {
    /// Derives the names of the union on `field` of the emitted type `parent`.
    #[must_use]
    pub fn new(namer: &Namer<'_>, parent: &str, field: &str, union: &IrUnion) -> Self {
        let union_name = namer.nested_name(&namer.nested_name(parent, field), "union");
        let variants = union
            .variants
            .iter()
            .map(|v| {
                let variant = namer.variant_name(&v.label);
                VariantNames {
                    label: v.label.clone(),
                    struct_name: format!("{}{}", union_name, variant),
                    variant,
                    tag_const: const_ident(&v.label),
                }
            })
            .collect();

        Self {
            marker: format!("{}Variant", union_name),
            enum_type: namer.type_name(&union.enum_name),
            union_name,
            variants,
        }
    }

    /// Registers every emitted name of the union located at `path`.
    ///
    /// # Errors
    /// Returns `CodegenError::NameCollision` if any name is taken.
    pub fn register(&self, names: &mut NameTable, path: &str) -> Result<(), CodegenError> {
        names.register(&self.union_name, format!("keyed union {}", path))?;
        names.register(&self.marker, format!("marker of keyed union {}", path))?;
        for v in &self.variants {
            names.register(
                &v.struct_name,
                format!("variant '{}' of keyed union {}", v.label, path),
            )?;
        }
        Ok(())
    }
}

/// Generator for the union enum, marker trait and payload impls.
pub struct UnionGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> UnionGenerator<'a> {
    /// Creates a new union generator.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates the closed union enum and its `tag` method.
    #[must_use]
    pub fn generate_enum(&self, names: &UnionNames, owner: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "/// Payload of `{}`, selected by its [`{}`] value.\n",
            owner, names.enum_type
        ));
        output.push_str(&format!(
            "#[derive({})]\n",
            self.config.derive_list(BASE_DERIVES, false)
        ));
        output.push_str(&format!("pub enum {} {{\n", names.union_name));
        for v in &names.variants {
            output.push_str(&format!(
                "    /// Payload for [`{}::{}`].\n",
                names.enum_type, v.tag_const
            ));
            output.push_str(&format!("    {}({}),\n", v.variant, v.struct_name));
        }
        output.push_str("}\n\n");

        output.push_str(&format!("impl {} {{\n", names.union_name));
        output.push_str("    /// Returns the discriminant value selecting this payload.\n");
        output.push_str("    #[must_use]\n");
        output.push_str(&format!(
            "    pub const fn tag(&self) -> {} {{\n",
            names.enum_type
        ));
        if names.variants.is_empty() {
            output.push_str("        match *self {}\n");
        } else {
            output.push_str("        match self {\n");
            for v in &names.variants {
                output.push_str(&format!(
                    "            Self::{}(_) => {}::{},\n",
                    v.variant, names.enum_type, v.tag_const
                ));
            }
            output.push_str("        }\n");
        }
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }

    /// Generates the marker trait implemented by every payload struct.
    #[must_use]
    pub fn generate_marker(&self, names: &UnionNames) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "/// Implemented by every payload of [`{}`].\n",
            names.union_name
        ));
        output.push_str(&format!(
            "pub trait {}: Into<{}> {{\n",
            names.marker, names.union_name
        ));
        output.push_str("    /// Discriminant value selecting the implementor.\n");
        output.push_str(&format!("    const TAG: {};\n", names.enum_type));
        output.push_str("}\n\n");

        output
    }

    /// Generates the marker impl and `From` conversion of one payload struct.
    #[must_use]
    pub fn generate_variant_impls(&self, names: &UnionNames, variant: &VariantNames) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "impl {} for {} {{\n",
            names.marker, variant.struct_name
        ));
        output.push_str(&format!(
            "    const TAG: {} = {}::{};\n",
            names.enum_type, names.enum_type, variant.tag_const
        ));
        output.push_str("}\n\n");

        output.push_str(&format!(
            "impl From<{}> for {} {{\n",
            variant.struct_name, names.union_name
        ));
        output.push_str(&format!(
            "    fn from(variant: {}) -> Self {{\n",
            variant.struct_name
        ));
        output.push_str(&format!("        Self::{}(variant)\n", variant.variant));
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }
}
