//! # xlgen
//!
//! Typed Rust declarations from libxl-style IDL schemas.
//!
//! A schema describes the data layout of a native library: primitive
//! aliases, enums with exact integer values, structs, lists, anonymous
//! nested structs and keyed unions. xlgen turns it into one self-contained
//! Rust source file that a marshalling layer can build on.
//!
//! ## Features
//!
//! - **Exact enums** - Integer newtypes whose constants carry the schema values
//! - **Closed keyed unions** - A union enum, a marker trait and one payload struct per label
//! - **Stable output** - Schema order everywhere, byte-identical reruns
//! - **Fatal ambiguity** - Name collisions and containment cycles stop generation
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use xlgen::prelude::*;
//!
//! // build.rs
//! let code = generate_from_file(Path::new("libxl_types.xml"), &GeneratorConfig::new())?;
//! write_if_changed(&out_dir.join("types.rs"), &code)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - IDL model, XML reader, validation and resolved IR
//! - [`codegen`] - Naming and Rust code generation
//! - [`cli`] - The `xlgen` command line

pub mod cli;
pub mod prelude;

/// IDL model, XML reader and validation.
pub mod schema {
    pub use xlgen_schema::*;
}

/// Rust code generation from IDL schemas.
pub mod codegen {
    pub use xlgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use xlgen_codegen::{
    CodegenError, Generator, GeneratorConfig, ReservedNames, generate_from_file,
    generate_from_str, is_up_to_date, write_if_changed,
};
pub use xlgen_schema::{ParseError, SchemaError, SchemaIr, parse_schema, validate_schema};
