//! Intermediate representation for code generation.
//!
//! This module provides a resolved representation of the schema that is
//! easier to use for code generation: every type reference is classified,
//! enum storage widths are decided and named variant payloads are expanded
//! into their fields. Declaration order is preserved everywhere.

use crate::error::SchemaError;
use crate::types::{
    EnumDef, EnumValue, FieldDef, FieldKind, KeyedUnionDef, PrimitiveType, Schema, TypeDef,
    VariantPayload,
};
use crate::validation::validate_schema;
use std::collections::HashMap;

/// Intermediate representation of a schema for code generation.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// Schema name.
    pub name: String,
    /// Namespace prefix carried by type names.
    pub namespace: Option<String>,
    /// Resolved items in declaration order.
    pub items: Vec<IrItem>,
    /// Item lookup by schema name.
    index: HashMap<String, usize>,
}

impl SchemaIr {
    /// Validates a parsed schema and resolves it.
    ///
    /// # Errors
    /// Returns `SchemaError` if the schema fails validation.
    pub fn from_schema(schema: &Schema) -> Result<Self, SchemaError> {
        validate_schema(schema)?;

        let mut ir = Self {
            name: schema.name.clone(),
            namespace: schema.namespace.clone(),
            items: Vec::with_capacity(schema.types.len()),
            index: HashMap::new(),
        };

        for type_def in &schema.types {
            let item = match type_def {
                TypeDef::Builtin(b) => IrItem::Alias(IrAlias {
                    name: b.name.clone(),
                    primitive: b.primitive,
                    description: b.description.clone(),
                }),
                TypeDef::Enum(e) => IrItem::Enum(IrEnum::from_enum_def(e)),
                TypeDef::Struct(s) => IrItem::Struct(IrStruct {
                    name: s.name.clone(),
                    fields: resolve_fields(schema, &s.fields)?,
                    description: s.description.clone(),
                }),
            };
            ir.index.insert(item.name().to_string(), ir.items.len());
            ir.items.push(item);
        }

        tracing::debug!("Resolved {} items of schema '{}'", ir.items.len(), ir.name);
        Ok(ir)
    }

    /// Gets a resolved item by schema name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IrItem> {
        self.index.get(name).map(|&idx| &self.items[idx])
    }

    /// Gets a resolved enum by schema name.
    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<&IrEnum> {
        match self.get(name) {
            Some(IrItem::Enum(e)) => Some(e),
            _ => None,
        }
    }

    /// Gets a resolved struct by schema name.
    #[must_use]
    pub fn get_struct(&self, name: &str) -> Option<&IrStruct> {
        match self.get(name) {
            Some(IrItem::Struct(s)) => Some(s),
            _ => None,
        }
    }

    /// Iterates over structs in declaration order.
    pub fn structs(&self) -> impl Iterator<Item = &IrStruct> {
        self.items.iter().filter_map(|item| match item {
            IrItem::Struct(s) => Some(s),
            _ => None,
        })
    }

    /// Returns true if the Rust rendering of `ty` implements `Default`.
    #[must_use]
    pub fn implements_default(&self, ty: &IrType) -> bool {
        match ty {
            IrType::Primitive(p) => p.implements_default(),
            IrType::Alias(name) => match self.get(name) {
                Some(IrItem::Alias(alias)) => alias.primitive.implements_default(),
                _ => true,
            },
            IrType::Enum(_) => true,
            IrType::Struct(name) => self
                .get_struct(name)
                .is_none_or(|s| self.fields_implement_default(&s.fields)),
        }
    }

    /// Returns true if every field renders to a type implementing `Default`.
    #[must_use]
    pub fn fields_implement_default(&self, fields: &[IrField]) -> bool {
        fields.iter().all(|field| match &field.ty {
            IrFieldType::Value(ty) => self.implements_default(ty),
            IrFieldType::List { .. } | IrFieldType::KeyedUnion(_) => true,
            IrFieldType::Anonymous(nested) => self.fields_implement_default(nested),
        })
    }
}

/// Resolved top-level item.
#[derive(Debug, Clone)]
pub enum IrItem {
    /// Builtin alias of a primitive.
    Alias(IrAlias),
    /// Enum with its storage decided.
    Enum(IrEnum),
    /// Struct with resolved fields.
    Struct(IrStruct),
}

impl IrItem {
    /// Returns the schema name of the item.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Alias(a) => &a.name,
            Self::Enum(e) => &e.name,
            Self::Struct(s) => &s.name,
        }
    }
}

/// Resolved builtin alias.
#[derive(Debug, Clone)]
pub struct IrAlias {
    /// Schema name.
    pub name: String,
    /// Aliased primitive.
    pub primitive: PrimitiveType,
    /// Description.
    pub description: Option<String>,
}

/// Resolved enum.
#[derive(Debug, Clone)]
pub struct IrEnum {
    /// Schema name.
    pub name: String,
    /// Integer storage holding every value.
    pub storage: PrimitiveType,
    /// Labels and values in declaration order.
    pub values: Vec<EnumValue>,
    /// Default label.
    pub default: Option<String>,
    /// Description.
    pub description: Option<String>,
}

impl IrEnum {
    /// Resolves a validated enum definition, deciding its storage width.
    #[must_use]
    pub fn from_enum_def(enum_def: &EnumDef) -> Self {
        let storage = enum_def.resolved_storage().unwrap_or(PrimitiveType::Int64);

        Self {
            name: enum_def.name.clone(),
            storage,
            values: enum_def.values.clone(),
            default: enum_def.default.clone(),
            description: enum_def.description.clone(),
        }
    }
}

/// Resolved struct.
#[derive(Debug, Clone)]
pub struct IrStruct {
    /// Schema name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<IrField>,
    /// Description.
    pub description: Option<String>,
}

/// Resolved field.
#[derive(Debug, Clone)]
pub struct IrField {
    /// Schema name. For keyed unions this is the discriminant field.
    pub name: String,
    /// Resolved shape.
    pub ty: IrFieldType,
    /// Description.
    pub description: Option<String>,
}

/// Resolved field shape.
#[derive(Debug, Clone)]
pub enum IrFieldType {
    /// Single value.
    Value(IrType),
    /// Ordered list of values.
    List {
        /// Element type.
        element: IrType,
        /// Native member holding the element count.
        count: Option<String>,
    },
    /// Inline struct without a top-level name.
    Anonymous(Vec<IrField>),
    /// Discriminant plus selected payload.
    KeyedUnion(IrUnion),
}

/// Classified type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrType {
    /// IDL primitive used directly.
    Primitive(PrimitiveType),
    /// Builtin alias, by schema name.
    Alias(String),
    /// Enum, by schema name.
    Enum(String),
    /// Struct, by schema name.
    Struct(String),
}

/// Resolved keyed union.
#[derive(Debug, Clone)]
pub struct IrUnion {
    /// Schema name of the discriminant enum.
    pub enum_name: String,
    /// Payload-bearing labels in declaration order.
    pub variants: Vec<IrVariant>,
}

impl IrUnion {
    /// Looks up the variant mapped to `label`.
    #[must_use]
    pub fn get_variant(&self, label: &str) -> Option<&IrVariant> {
        self.variants.iter().find(|v| v.label == label)
    }
}

/// Resolved payload-bearing label.
#[derive(Debug, Clone)]
pub struct IrVariant {
    /// Discriminant label.
    pub label: String,
    /// Payload fields.
    pub fields: Vec<IrField>,
    /// Named struct the fields were copied from.
    pub source: Option<String>,
}

/// Classifies a type reference.
fn resolve_type(schema: &Schema, name: &str, context: &str) -> Result<IrType, SchemaError> {
    if let Some(prim) = PrimitiveType::from_idl_name(name, None) {
        return Ok(IrType::Primitive(prim));
    }
    match schema.get_type(name) {
        Some(TypeDef::Builtin(_)) => Ok(IrType::Alias(name.to_string())),
        Some(TypeDef::Enum(_)) => Ok(IrType::Enum(name.to_string())),
        Some(TypeDef::Struct(_)) => Ok(IrType::Struct(name.to_string())),
        None => Err(SchemaError::type_not_found(name, context)),
    }
}

fn resolve_fields(schema: &Schema, fields: &[FieldDef]) -> Result<Vec<IrField>, SchemaError> {
    fields
        .iter()
        .map(|field| {
            let ty = match &field.kind {
                FieldKind::Named(type_name) => {
                    IrFieldType::Value(resolve_type(schema, type_name, &field.name)?)
                }
                FieldKind::List { element, count } => IrFieldType::List {
                    element: resolve_type(schema, element, &field.name)?,
                    count: count.clone(),
                },
                FieldKind::Struct(nested) => {
                    IrFieldType::Anonymous(resolve_fields(schema, nested)?)
                }
                FieldKind::KeyedUnion(union) => {
                    IrFieldType::KeyedUnion(resolve_union(schema, union, &field.name)?)
                }
            };
            Ok(IrField {
                name: field.name.clone(),
                ty,
                description: field.description.clone(),
            })
        })
        .collect()
}

fn resolve_union(
    schema: &Schema,
    union: &KeyedUnionDef,
    context: &str,
) -> Result<IrUnion, SchemaError> {
    let enum_def = schema
        .get_enum(&union.enum_type)
        .ok_or_else(|| SchemaError::type_not_found(&union.enum_type, context))?;

    let mut variants = Vec::with_capacity(union.variants.len());
    for variant in &union.variants {
        if enum_def.get_value(&variant.tag).is_none() {
            return Err(SchemaError::UnknownLabel {
                context: context.to_string(),
                label: variant.tag.clone(),
                enum_name: enum_def.name.clone(),
            });
        }

        let (fields, source) = match &variant.payload {
            VariantPayload::Inline(fields) => (resolve_fields(schema, fields)?, None),
            VariantPayload::Named(struct_name) => {
                let struct_def = schema
                    .get_struct(struct_name)
                    .ok_or_else(|| SchemaError::type_not_found(struct_name, context))?;
                (
                    resolve_fields(schema, &struct_def.fields)?,
                    Some(struct_name.clone()),
                )
            }
        };

        variants.push(IrVariant {
            label: variant.tag.clone(),
            fields,
            source,
        });
    }

    Ok(IrUnion {
        enum_name: union.enum_type.clone(),
        variants,
    })
}
