//! Schema validation utilities.
//!
//! This module provides validation functions for IDL schemas to ensure
//! correctness and consistency before any code is generated.

use crate::error::SchemaError;
use crate::types::{
    EnumDef, FieldDef, FieldKind, KeyedUnionDef, PrimitiveType, Schema, TypeDef, VariantPayload,
};
use std::collections::{HashMap, HashSet};

/// Validates a parsed schema for correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    validate_types(schema)?;
    validate_containment(schema)?;
    Ok(())
}

/// Validates all type definitions in the schema.
fn validate_types(schema: &Schema) -> Result<(), SchemaError> {
    for type_def in &schema.types {
        match type_def {
            TypeDef::Enum(enum_def) => validate_enum(enum_def)?,
            TypeDef::Struct(struct_def) => {
                validate_fields(schema, &struct_def.name, &struct_def.fields)?;
            }
            TypeDef::Builtin(_) => {}
        }
    }
    Ok(())
}

/// Validates an enum type definition.
fn validate_enum(enum_def: &EnumDef) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();
    let mut seen_values: HashMap<i128, &str> = HashMap::new();

    if enum_def.values.is_empty() {
        tracing::warn!("Enum '{}' declares no values", enum_def.name);
    }

    for value in &enum_def.values {
        if !seen_names.insert(value.name.as_str()) {
            return Err(SchemaError::DuplicateLabel {
                enum_name: enum_def.name.clone(),
                label: value.name.clone(),
            });
        }

        if let Some(first) = seen_values.insert(value.value, &value.name) {
            return Err(SchemaError::DuplicateValue {
                enum_name: enum_def.name.clone(),
                value: value.value,
                first: first.to_string(),
                second: value.name.clone(),
            });
        }
    }

    if let Some(default) = &enum_def.default {
        if enum_def.get_value(default).is_none() {
            return Err(SchemaError::UnknownDefault {
                enum_name: enum_def.name.clone(),
                label: default.clone(),
            });
        }
    }

    validate_storage(enum_def)?;

    Ok(())
}

/// Checks that the declared or inferred storage width holds every value.
fn validate_storage(enum_def: &EnumDef) -> Result<(), SchemaError> {
    if enum_def.resolved_storage().is_some() {
        return Ok(());
    }
    // Report against the widest candidate when no width was declared.
    let storage = enum_def.storage.unwrap_or(PrimitiveType::Int64);
    match enum_def.values.iter().find(|v| !storage.holds(v.value)) {
        Some(value) => Err(SchemaError::StorageTooNarrow {
            enum_name: enum_def.name.clone(),
            storage: storage.idl_name().to_string(),
            value: value.value,
        }),
        None => Ok(()),
    }
}

/// Validates the fields of a struct, anonymous struct or variant payload.
fn validate_fields(schema: &Schema, owner: &str, fields: &[FieldDef]) -> Result<(), SchemaError> {
    for field in fields {
        let context = format!("{}.{}", owner, field.name);
        match &field.kind {
            FieldKind::Named(type_name) => {
                if !schema.resolves(type_name) {
                    return Err(SchemaError::type_not_found(type_name, context));
                }
            }
            FieldKind::List { element, .. } => {
                if !schema.resolves(element) {
                    return Err(SchemaError::type_not_found(element, context));
                }
            }
            FieldKind::Struct(nested) => validate_fields(schema, &context, nested)?,
            FieldKind::KeyedUnion(union) => validate_keyed_union(schema, &context, union)?,
        }
    }
    Ok(())
}

/// Validates a keyed union against its discriminant enum.
fn validate_keyed_union(
    schema: &Schema,
    context: &str,
    union: &KeyedUnionDef,
) -> Result<(), SchemaError> {
    let enum_def = match schema.get_type(&union.enum_type) {
        Some(TypeDef::Enum(e)) => e,
        Some(_) => {
            return Err(SchemaError::DiscriminantNotEnum {
                context: context.to_string(),
                type_name: union.enum_type.clone(),
            });
        }
        None if PrimitiveType::from_idl_name(&union.enum_type, None).is_some() => {
            return Err(SchemaError::DiscriminantNotEnum {
                context: context.to_string(),
                type_name: union.enum_type.clone(),
            });
        }
        None => return Err(SchemaError::type_not_found(&union.enum_type, context)),
    };

    let mut seen = HashSet::new();
    for variant in &union.variants {
        let value = enum_def
            .get_value(&variant.tag)
            .ok_or_else(|| SchemaError::UnknownLabel {
                context: context.to_string(),
                label: variant.tag.clone(),
                enum_name: enum_def.name.clone(),
            })?;

        if !seen.insert(variant.tag.as_str()) {
            return Err(SchemaError::DuplicateVariant {
                context: context.to_string(),
                label: variant.tag.clone(),
            });
        }

        if value.is_sentinel() {
            return Err(SchemaError::SentinelVariant {
                context: context.to_string(),
                label: variant.tag.clone(),
                value: value.value,
            });
        }

        match &variant.payload {
            VariantPayload::Named(struct_name) => match schema.get_type(struct_name) {
                Some(TypeDef::Struct(_)) => {}
                Some(_) => {
                    return Err(SchemaError::PayloadNotStruct {
                        context: context.to_string(),
                        label: variant.tag.clone(),
                        type_name: struct_name.clone(),
                    });
                }
                None => return Err(SchemaError::type_not_found(struct_name, context)),
            },
            VariantPayload::Inline(fields) => {
                validate_fields(schema, &format!("{}.{}", context, variant.tag), fields)?;
            }
        }
    }

    Ok(())
}

/// Visit state for the containment walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Rejects structs that contain themselves by value.
///
/// Lists own their elements on the heap and break the cycle; plain fields,
/// anonymous structs and union payloads do not.
fn validate_containment(schema: &Schema) -> Result<(), SchemaError> {
    let mut state: HashMap<&str, Visit> = HashMap::new();
    let mut stack: Vec<&str> = Vec::new();

    for type_def in &schema.types {
        if let TypeDef::Struct(struct_def) = type_def {
            visit_struct(schema, &struct_def.name, &mut state, &mut stack)?;
        }
    }

    Ok(())
}

fn visit_struct<'a>(
    schema: &'a Schema,
    name: &'a str,
    state: &mut HashMap<&'a str, Visit>,
    stack: &mut Vec<&'a str>,
) -> Result<(), SchemaError> {
    match state.get(name) {
        Some(Visit::Done) => return Ok(()),
        Some(Visit::InProgress) => {
            let start = stack.iter().position(|&n| n == name).unwrap_or(0);
            let mut path: Vec<&str> = stack[start..].to_vec();
            path.push(name);
            return Err(SchemaError::CircularReference {
                path: path.join(" -> "),
            });
        }
        None => {}
    }

    let Some(struct_def) = schema.get_struct(name) else {
        return Ok(());
    };

    state.insert(name, Visit::InProgress);
    stack.push(name);

    let mut refs = Vec::new();
    inline_refs(schema, &struct_def.fields, &mut refs);
    for target in refs {
        visit_struct(schema, target, state, stack)?;
    }

    stack.pop();
    state.insert(name, Visit::Done);
    Ok(())
}

/// Collects the named structs held by value in `fields`.
fn inline_refs<'a>(schema: &'a Schema, fields: &'a [FieldDef], out: &mut Vec<&'a str>) {
    for field in fields {
        match &field.kind {
            FieldKind::Named(type_name) => {
                if schema.get_struct(type_name).is_some() {
                    out.push(type_name);
                }
            }
            FieldKind::List { .. } => {}
            FieldKind::Struct(nested) => inline_refs(schema, nested, out),
            FieldKind::KeyedUnion(union) => {
                for variant in &union.variants {
                    match &variant.payload {
                        VariantPayload::Named(struct_name) => out.push(struct_name),
                        VariantPayload::Inline(payload) => inline_refs(schema, payload, out),
                    }
                }
            }
        }
    }
}
