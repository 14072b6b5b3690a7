//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use xlgen::prelude::*;
//! ```

// Schema types
pub use xlgen_schema::error::{ParseError, SchemaError};
pub use xlgen_schema::ir::SchemaIr;
pub use xlgen_schema::types::{PrimitiveType, Schema, TypeDef};
pub use xlgen_schema::{parse_schema, validate_schema};

// Generation
pub use xlgen_codegen::naming::ReservedNames;
pub use xlgen_codegen::{
    CodegenError, Generator, GeneratorConfig, generate_from_file, generate_from_str,
    is_up_to_date, write_if_changed,
};
