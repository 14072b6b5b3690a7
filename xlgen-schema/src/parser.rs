//! IDL XML schema reader.
//!
//! This module parses the XML carrier of the IDL into the internal schema
//! representation. Types may be referenced before they are declared;
//! resolution happens in [`crate::validation`] and [`crate::ir`].

use crate::error::ParseError;
use crate::types::{
    BuiltinDef, EnumDef, EnumValue, FieldDef, FieldKind, KeyedUnionDef, PrimitiveType, Schema,
    StructDef, TypeDef, VariantDef, VariantPayload,
};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parses an IDL schema from an XML string.
///
/// # Arguments
/// * `xml` - XML schema content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or contains invalid schema elements.
pub fn parse_schema(xml: &str) -> Result<Schema, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut schema: Option<Schema> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = tag_name(e)?;
                match name.as_str() {
                    "idl" => open_idl(&mut schema, e)?,
                    "builtin" => {
                        let builtin = parse_builtin(e)?;
                        skip_to_end(&mut reader)?;
                        add_type(&mut schema, TypeDef::Builtin(builtin))?;
                    }
                    "enum" => {
                        let enum_def = parse_enum(&mut reader, e)?;
                        add_type(&mut schema, TypeDef::Enum(enum_def))?;
                    }
                    "struct" => {
                        let struct_def = parse_struct(&mut reader, e)?;
                        add_type(&mut schema, TypeDef::Struct(struct_def))?;
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = tag_name(e)?;
                match name.as_str() {
                    "idl" => open_idl(&mut schema, e)?,
                    "builtin" => {
                        let builtin = parse_builtin(e)?;
                        add_type(&mut schema, TypeDef::Builtin(builtin))?;
                    }
                    "enum" => {
                        let enum_def = enum_header(e)?;
                        add_type(&mut schema, TypeDef::Enum(enum_def))?;
                    }
                    "struct" => {
                        let struct_def = struct_header(e)?;
                        add_type(&mut schema, TypeDef::Struct(struct_def))?;
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let schema = schema.ok_or_else(|| ParseError::structure("No idl element found"))?;
    tracing::debug!(
        "Parsed schema '{}' with {} types",
        schema.name,
        schema.types.len()
    );
    Ok(schema)
}

/// Starts the schema at the `<idl>` root, which may appear only once.
fn open_idl(schema: &mut Option<Schema>, e: &BytesStart<'_>) -> Result<(), ParseError> {
    if let Some(existing) = schema {
        return Err(ParseError::structure(format!(
            "second idl element after '{}'",
            existing.name
        )));
    }
    *schema = Some(parse_idl(e)?);
    Ok(())
}

/// Adds a top-level type, rejecting duplicates and definitions outside `<idl>`.
fn add_type(schema: &mut Option<Schema>, type_def: TypeDef) -> Result<(), ParseError> {
    let schema = schema.as_mut().ok_or_else(|| {
        ParseError::structure(format!(
            "{} '{}' declared outside of the idl element",
            type_def.kind_name(),
            type_def.name()
        ))
    })?;
    let shadows_primitive = PrimitiveType::from_idl_name(type_def.name(), Some(1)).is_some();
    if shadows_primitive || schema.has_type(type_def.name()) {
        return Err(ParseError::duplicate("type", type_def.name()));
    }
    schema.add_type(type_def);
    Ok(())
}

/// Returns the qualified element name.
fn tag_name(e: &BytesStart<'_>) -> Result<String, ParseError> {
    let name_bytes = e.name().as_ref().to_vec();
    Ok(std::str::from_utf8(&name_bytes)?.to_string())
}

/// Collects the element's attributes as owned key/value pairs.
fn attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>, ParseError> {
    let mut attrs = Vec::new();
    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;
        attrs.push((key.to_string(), value.to_string()));
    }
    Ok(attrs)
}

/// Returns a required attribute or a missing-attribute error.
fn required(value: Option<String>, element: &str, attribute: &str) -> Result<String, ParseError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ParseError::missing_attr(element, attribute))
}

/// Parses the idl root element attributes.
fn parse_idl(e: &BytesStart<'_>) -> Result<Schema, ParseError> {
    let mut name = None;
    let mut namespace = None;
    let mut description = None;

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "name" => name = Some(value),
            "namespace" => namespace = Some(value).filter(|v| !v.is_empty()),
            "doc" => description = Some(value),
            _ => {}
        }
    }

    let mut schema = Schema::new(required(name, "idl", "name")?);
    schema.namespace = namespace;
    schema.description = description;
    Ok(schema)
}

/// Parses a builtin alias.
fn parse_builtin(e: &BytesStart<'_>) -> Result<BuiltinDef, ParseError> {
    let mut name = None;
    let mut primitive = None;
    let mut length: Option<usize> = None;
    let mut description = None;

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "name" => name = Some(value),
            "primitive" => primitive = Some(value),
            "length" => {
                length = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::invalid_attr("builtin", "length", &value))?,
                )
            }
            "doc" => description = Some(value),
            _ => {}
        }
    }

    let name = required(name, "builtin", "name")?;
    let primitive = required(primitive, "builtin", "primitive")?;
    let primitive_type = PrimitiveType::from_idl_name(&primitive, length)
        .ok_or(ParseError::UnsupportedPrimitive {
            name: name.clone(),
            primitive,
        })?;

    let mut builtin = BuiltinDef::new(name, primitive_type);
    builtin.description = description;
    Ok(builtin)
}

/// Parses the enum element attributes.
fn enum_header(e: &BytesStart<'_>) -> Result<EnumDef, ParseError> {
    let mut name = None;
    let mut default = None;
    let mut storage = None;
    let mut description = None;

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "name" => name = Some(value),
            "default" => default = Some(value),
            "storage" => {
                storage = Some(
                    PrimitiveType::from_idl_name(&value, None)
                        .filter(PrimitiveType::is_integer)
                        .ok_or_else(|| ParseError::invalid_attr("enum", "storage", &value))?,
                )
            }
            "doc" => description = Some(value),
            _ => {}
        }
    }

    let mut enum_def = EnumDef::new(required(name, "enum", "name")?);
    enum_def.default = default;
    enum_def.storage = storage;
    enum_def.description = description;
    Ok(enum_def)
}

/// Parses an enum type definition.
fn parse_enum(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<EnumDef, ParseError> {
    let mut enum_def = enum_header(e)?;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if tag_name(e)? == "value" {
                    let value = parse_enum_value(reader, e, &enum_def.name)?;
                    enum_def.add_value(value);
                } else {
                    skip_to_end(reader)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                if tag_name(e)? == "value" {
                    let (label, literal, description) = enum_value_attrs(e)?;
                    let mut value = enum_value(&enum_def.name, label, literal)?;
                    value.description = description;
                    enum_def.add_value(value);
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(unexpected_eof("enum", &enum_def.name)),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(enum_def)
}

/// Reads the `name`, `value` and `doc` attributes of an enum value.
fn enum_value_attrs(
    e: &BytesStart<'_>,
) -> Result<(String, Option<String>, Option<String>), ParseError> {
    let mut name = None;
    let mut literal = None;
    let mut description = None;

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "name" => name = Some(value),
            "value" => literal = Some(value),
            "doc" => description = Some(value),
            _ => {}
        }
    }

    Ok((required(name, "value", "name")?, literal, description))
}

/// Parses an enum value whose integer is the element text.
fn parse_enum_value(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    enum_name: &str,
) -> Result<EnumValue, ParseError> {
    let (label, mut literal, description) = enum_value_attrs(e)?;

    // Read the value content
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref t)) => {
                let text = std::str::from_utf8(t.as_ref())?.trim();
                if !text.is_empty() {
                    literal = Some(text.to_string());
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(unexpected_eof("value", &label)),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let mut value = enum_value(enum_name, label, literal)?;
    value.description = description;
    Ok(value)
}

/// Builds an enum value from its label and integer literal.
fn enum_value(
    enum_name: &str,
    label: String,
    literal: Option<String>,
) -> Result<EnumValue, ParseError> {
    let literal = literal.ok_or_else(|| ParseError::missing_attr("value", "value"))?;
    match parse_integer(&literal) {
        Some(parsed) => Ok(EnumValue::new(label, parsed)),
        None => Err(ParseError::InvalidEnumValue {
            enum_name: enum_name.to_string(),
            label,
            value: literal,
        }),
    }
}

/// Parses a decimal or `0x` hexadecimal integer, optionally negative.
///
/// Accepted values span `i64::MIN..=u64::MAX`, the union of every storage width.
fn parse_integer(literal: &str) -> Option<i128> {
    let literal = literal.trim();
    let (negative, digits) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i128::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<i128>().ok()?,
    };
    let value = if negative { -magnitude } else { magnitude };
    let range = i128::from(i64::MIN)..=i128::from(u64::MAX);
    range.contains(&value).then_some(value)
}

/// Parses the struct element attributes.
fn struct_header(e: &BytesStart<'_>) -> Result<StructDef, ParseError> {
    let mut name = None;
    let mut description = None;

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "name" => name = Some(value),
            "doc" => description = Some(value),
            _ => {}
        }
    }

    let mut struct_def = StructDef::new(required(name, "struct", "name")?);
    struct_def.description = description;
    Ok(struct_def)
}

/// Parses a top-level struct definition.
fn parse_struct(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<StructDef, ParseError> {
    let mut struct_def = struct_header(e)?;
    struct_def.fields = parse_fields(reader, &struct_def.name)?;
    Ok(struct_def)
}

/// Parses field elements up to the end tag of the enclosing element.
fn parse_fields(reader: &mut Reader<&[u8]>, owner: &str) -> Result<Vec<FieldDef>, ParseError> {
    let mut fields = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match tag_name(e)?.as_str() {
                "field" => {
                    fields.push(parse_field(e)?);
                    skip_to_end(reader)?;
                }
                "list" => {
                    fields.push(parse_list(e)?);
                    skip_to_end(reader)?;
                }
                "struct" => {
                    let header = struct_header(e)?;
                    let nested = parse_fields(reader, &header.name)?;
                    let mut field = FieldDef::new(header.name, FieldKind::Struct(nested));
                    field.description = header.description;
                    fields.push(field);
                }
                "keyed_union" => fields.push(parse_keyed_union(reader, e, true)?),
                _ => skip_to_end(reader)?,
            },
            Ok(Event::Empty(ref e)) => match tag_name(e)?.as_str() {
                "field" => fields.push(parse_field(e)?),
                "list" => fields.push(parse_list(e)?),
                "struct" => {
                    let header = struct_header(e)?;
                    let mut field = FieldDef::new(header.name, FieldKind::Struct(Vec::new()));
                    field.description = header.description;
                    fields.push(field);
                }
                "keyed_union" => fields.push(parse_keyed_union(reader, e, false)?),
                _ => {}
            },
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(unexpected_eof("struct", owner)),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(fields)
}

/// Parses a scalar field.
fn parse_field(e: &BytesStart<'_>) -> Result<FieldDef, ParseError> {
    let mut name = None;
    let mut type_name = None;
    let mut description = None;

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "name" => name = Some(value),
            "type" => type_name = Some(value),
            "doc" => description = Some(value),
            _ => {}
        }
    }

    let mut field = FieldDef::new(
        required(name, "field", "name")?,
        FieldKind::Named(required(type_name, "field", "type")?),
    );
    field.description = description;
    Ok(field)
}

/// Parses a list field.
fn parse_list(e: &BytesStart<'_>) -> Result<FieldDef, ParseError> {
    let mut name = None;
    let mut element = None;
    let mut count = None;
    let mut description = None;

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "name" => name = Some(value),
            "type" => element = Some(value),
            "count" => count = Some(value).filter(|v| !v.is_empty()),
            "doc" => description = Some(value),
            _ => {}
        }
    }

    let mut field = FieldDef::new(
        required(name, "list", "name")?,
        FieldKind::List {
            element: required(element, "list", "type")?,
            count,
        },
    );
    field.description = description;
    Ok(field)
}

/// Parses a keyed union. `has_body` is false for a self-closing element.
fn parse_keyed_union(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    has_body: bool,
) -> Result<FieldDef, ParseError> {
    let mut field_name = None;
    let mut enum_type = None;
    let mut description = None;

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "field" => field_name = Some(value),
            "enum" => enum_type = Some(value),
            "doc" => description = Some(value),
            _ => {}
        }
    }

    let field_name = required(field_name, "keyed_union", "field")?;
    let mut union = KeyedUnionDef::new(required(enum_type, "keyed_union", "enum")?);

    if has_body {
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    if tag_name(e)? == "variant" {
                        let (tag, named) = variant_attrs(e)?;
                        let payload = match named {
                            Some(struct_name) => {
                                skip_to_end(reader)?;
                                VariantPayload::Named(struct_name)
                            }
                            None => VariantPayload::Inline(parse_fields(reader, &tag)?),
                        };
                        union.variants.push(VariantDef { tag, payload });
                    } else {
                        skip_to_end(reader)?;
                    }
                }
                Ok(Event::Empty(ref e)) => {
                    if tag_name(e)? == "variant" {
                        let (tag, named) = variant_attrs(e)?;
                        let payload = match named {
                            Some(struct_name) => VariantPayload::Named(struct_name),
                            None => VariantPayload::Inline(Vec::new()),
                        };
                        union.variants.push(VariantDef { tag, payload });
                    }
                }
                Ok(Event::End(_)) => break,
                Ok(Event::Eof) => return Err(unexpected_eof("keyed_union", &field_name)),
                Err(e) => return Err(ParseError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }
    }

    let mut field = FieldDef::new(field_name, FieldKind::KeyedUnion(union));
    field.description = description;
    Ok(field)
}

/// Reads the `tag` and optional `struct` attributes of a variant.
fn variant_attrs(e: &BytesStart<'_>) -> Result<(String, Option<String>), ParseError> {
    let mut tag = None;
    let mut named = None;

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "tag" => tag = Some(value),
            "struct" => named = Some(value).filter(|v| !v.is_empty()),
            _ => {}
        }
    }

    Ok((required(tag, "variant", "tag")?, named))
}

fn unexpected_eof(element: &str, name: &str) -> ParseError {
    ParseError::structure(format!(
        "unexpected end of document inside {} '{}'",
        element, name
    ))
}

/// Skips to the end of the current element.
fn skip_to_end(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => return Err(ParseError::structure("unexpected end of document")),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
