//! # xlgen Schema
//!
//! IDL schema model, XML reader and validation.
//!
//! This crate provides:
//! - The in-memory model of a native library's data layout (builtins, enums,
//!   structs, lists, anonymous structs and keyed unions)
//! - A reader for the XML carrier of the IDL
//! - Schema validation (duplicate values, dangling references, cycles)
//! - A resolved intermediate representation for code generation

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::SchemaIr;
pub use parser::parse_schema;
pub use types::{
    BuiltinDef, EnumDef, EnumValue, FieldDef, FieldKind, KeyedUnionDef, PrimitiveType, Schema,
    StructDef, TypeDef, VariantDef, VariantPayload,
};
pub use validation::validate_schema;
