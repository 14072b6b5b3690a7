//! Struct code generation.
//!
//! Structs keep their schema field order. Anonymous nested structs and
//! keyed unions produce additional named types, emitted right after the
//! struct that owns them, depth first.

use crate::config::{BASE_DERIVES, GeneratorConfig};
use crate::error::CodegenError;
use crate::naming::{MemberSet, NameTable, Namer, field_ident};
use crate::rust::push_doc;
use crate::rust::unions::{UnionGenerator, UnionNames};
use xlgen_schema::ir::{IrField, IrFieldType, IrStruct, IrType, IrUnion, SchemaIr};

/// Type emitted after its owner.
enum Nested<'f> {
    Anonymous {
        name: String,
        path: String,
        doc: String,
        fields: &'f [IrField],
    },
    Union {
        names: UnionNames,
        owner: String,
        path: String,
        union: &'f IrUnion,
    },
}

/// Generator for struct definitions.
pub struct StructGenerator<'a> {
    ir: &'a SchemaIr,
    namer: Namer<'a>,
    config: &'a GeneratorConfig,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, namer: Namer<'a>, config: &'a GeneratorConfig) -> Self {
        Self { ir, namer, config }
    }

    /// Generates a struct and every type nested in it.
    ///
    /// # Errors
    /// Returns `CodegenError::NameCollision` or `CodegenError::FieldCollision`
    /// if an emitted name is not unique.
    pub fn generate(
        &self,
        struct_def: &IrStruct,
        names: &mut NameTable,
    ) -> Result<String, CodegenError> {
        let rust_name = self.namer.type_name(&struct_def.name);
        names.register(&rust_name, format!("struct {}", struct_def.name))?;

        let doc = struct_def
            .description
            .clone()
            .unwrap_or_else(|| format!("`{}` structure.", struct_def.name));

        let mut output = String::new();
        self.emit_struct(
            &rust_name,
            &struct_def.name,
            &doc,
            &struct_def.fields,
            names,
            &mut output,
        )?;

        tracing::debug!(
            "Generated struct {} with {} fields",
            rust_name,
            struct_def.fields.len()
        );
        Ok(output)
    }

    /// Returns the Rust spelling of a type reference.
    #[must_use]
    pub fn type_ref(&self, ty: &IrType) -> String {
        match ty {
            IrType::Primitive(prim) => prim.rust_type(),
            IrType::Alias(name) | IrType::Enum(name) | IrType::Struct(name) => {
                self.namer.type_name(name)
            }
        }
    }

    /// Emits one struct followed by its nested types.
    fn emit_struct(
        &self,
        rust_name: &str,
        path: &str,
        doc: &str,
        fields: &[IrField],
        names: &mut NameTable,
        output: &mut String,
    ) -> Result<(), CodegenError> {
        let mut members = MemberSet::new(rust_name);
        let mut body = String::new();
        let mut nested = Vec::new();
        let mut union_members = Vec::new();

        for field in fields {
            let ident = field_ident(&field.name);
            members.insert(&ident)?;
            if let Some(doc) = &field.description {
                push_doc(&mut body, "    ", doc);
            }

            match &field.ty {
                IrFieldType::Value(ty) => {
                    body.push_str(&format!("    pub {}: {},\n", ident, self.type_ref(ty)));
                }
                IrFieldType::List { element, count } => {
                    if let Some(count) = count {
                        if field.description.is_some() {
                            body.push_str("    ///\n");
                        }
                        body.push_str(&format!(
                            "    /// Natively counted by `{}`.\n",
                            count
                        ));
                    }
                    body.push_str(&format!(
                        "    pub {}: Vec<{}>,\n",
                        ident,
                        self.type_ref(element)
                    ));
                }
                IrFieldType::Anonymous(inner) => {
                    let nested_name = self.namer.nested_name(rust_name, &field.name);
                    let nested_path = format!("{}.{}", path, field.name);
                    names.register(&nested_name, format!("anonymous struct {}", nested_path))?;
                    body.push_str(&format!("    pub {}: {},\n", ident, nested_name));
                    nested.push(Nested::Anonymous {
                        name: nested_name,
                        doc: field
                            .description
                            .clone()
                            .unwrap_or_else(|| format!("Anonymous `{}` structure.", nested_path)),
                        path: nested_path,
                        fields: inner,
                    });
                }
                IrFieldType::KeyedUnion(union) => {
                    let union_path = format!("{}.{}", path, field.name);
                    let union_names = UnionNames::new(&self.namer, rust_name, &field.name, union);
                    union_names.register(names, &union_path)?;

                    let bare = ident.strip_prefix("r#").unwrap_or(&ident);
                    let payload = format!("{}_union", bare);
                    members.insert(&payload)?;

                    body.push_str(&format!(
                        "    pub {}: {},\n",
                        ident, union_names.enum_type
                    ));
                    body.push_str(&format!("    /// Payload selected by `{}`.\n", bare));
                    body.push_str(&format!(
                        "    pub {}: Option<{}>,\n",
                        payload, union_names.union_name
                    ));

                    union_members.push((ident.clone(), payload));
                    nested.push(Nested::Union {
                        names: union_names,
                        owner: format!("{}::{}", rust_name, bare),
                        path: union_path,
                        union,
                    });
                }
            }
        }

        push_doc(output, "", doc);
        output.push_str(&format!(
            "#[derive({})]\n",
            self.config
                .derive_list(BASE_DERIVES, self.ir.fields_implement_default(fields))
        ));
        output.push_str(&format!("pub struct {} {{\n", rust_name));
        output.push_str(&body);
        output.push_str("}\n\n");

        if !union_members.is_empty() {
            output.push_str(&format!("impl {} {{\n", rust_name));
            for (i, (discriminant, payload)) in union_members.iter().enumerate() {
                if i > 0 {
                    output.push('\n');
                }
                output.push_str(&format!(
                    "    /// Returns true if `{}` is absent or selected by `{}`.\n",
                    payload,
                    discriminant.strip_prefix("r#").unwrap_or(discriminant)
                ));
                output.push_str("    #[must_use]\n");
                output.push_str(&format!("    pub fn {}_matches(&self) -> bool {{\n", payload));
                output.push_str(&format!("        match &self.{} {{\n", payload));
                output.push_str(&format!(
                    "            Some(payload) => payload.tag() == self.{},\n",
                    discriminant
                ));
                output.push_str("            None => true,\n");
                output.push_str("        }\n");
                output.push_str("    }\n");
            }
            output.push_str("}\n\n");
        }

        for item in nested {
            match item {
                Nested::Anonymous {
                    name,
                    path,
                    doc,
                    fields,
                } => {
                    self.emit_struct(&name, &path, &doc, fields, names, output)?;
                }
                Nested::Union {
                    names: union_names,
                    owner,
                    path,
                    union,
                } => {
                    self.emit_union(&union_names, &owner, &path, union, names, output)?;
                }
            }
        }

        Ok(())
    }

    /// Emits a union enum, its marker trait and its payload structs.
    fn emit_union(
        &self,
        union_names: &UnionNames,
        owner: &str,
        path: &str,
        union: &IrUnion,
        names: &mut NameTable,
        output: &mut String,
    ) -> Result<(), CodegenError> {
        let generator = UnionGenerator::new(self.config);
        output.push_str(&generator.generate_enum(union_names, owner));
        output.push_str(&generator.generate_marker(union_names));

        for (variant, variant_names) in union.variants.iter().zip(&union_names.variants) {
            let mut doc = format!(
                "`{}` payload of [`{}`].",
                variant.label, union_names.union_name
            );
            if let Some(source) = &variant.source {
                doc.push_str(&format!("\n\nFields of `{}`.", source));
            }
            self.emit_struct(
                &variant_names.struct_name,
                &format!("{}.{}", path, variant.label),
                &doc,
                &variant.fields,
                names,
                output,
            )?;
            output.push_str(&generator.generate_variant_impls(union_names, variant_names));
        }

        tracing::debug!(
            "Generated keyed union {} with {} variants",
            union_names.union_name,
            union_names.variants.len()
        );
        Ok(())
    }
}
