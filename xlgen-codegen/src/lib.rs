//! # xlgen Codegen
//!
//! Rust type generation from xlgen IDL schemas.
//!
//! This crate provides:
//! - Identifier conversion with reserved-name substitution and collision checks
//! - Alias, enum and struct generation
//! - Keyed unions as closed enums with a marker trait and payload structs
//! - Build script integration
//!
//! ```
//! use xlgen_codegen::{GeneratorConfig, generate_from_str};
//!
//! let xml = r#"<idl name="demo">
//!     <enum name="mode"><value name="off">0</value><value name="on">1</value></enum>
//! </idl>"#;
//! let code = generate_from_str(xml, &GeneratorConfig::new()).expect("generation");
//! assert!(code.contains("pub const ON: Self = Self(1);"));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod naming;
pub mod rust;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::Generator;
pub use naming::ReservedNames;

use std::path::Path;

/// Generates Rust code from an IDL XML schema string.
///
/// # Arguments
/// * `xml` - IDL XML schema content
/// * `config` - Generation options
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or generation fails.
pub fn generate_from_str(xml: &str, config: &GeneratorConfig) -> Result<String, CodegenError> {
    let schema = xlgen_schema::parse_schema(xml)?;
    let ir = xlgen_schema::SchemaIr::from_schema(&schema)?;
    Generator::new(&ir, config).generate()
}

/// Generates Rust code from an IDL XML schema file.
///
/// # Arguments
/// * `path` - Path to the IDL XML schema file
/// * `config` - Generation options
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation or generation fails.
pub fn generate_from_file(path: &Path, config: &GeneratorConfig) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_str(&xml, config)
}

/// Returns true if the file at `path` already holds exactly `contents`.
///
/// # Errors
/// Returns `CodegenError::Io` if the file exists but cannot be read.
pub fn is_up_to_date(path: &Path, contents: &str) -> Result<bool, CodegenError> {
    match std::fs::read(path) {
        Ok(existing) => Ok(existing == contents.as_bytes()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Writes `contents` to `path` unless the file already holds them.
///
/// Leaving an unchanged file untouched keeps its modification time, so
/// build scripts do not trigger needless rebuilds.
///
/// # Returns
/// `true` if the file was written.
///
/// # Errors
/// Returns `CodegenError::Io` if reading or writing fails.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<bool, CodegenError> {
    if is_up_to_date(path, contents)? {
        tracing::debug!("{} is up to date", path.display());
        return Ok(false);
    }
    std::fs::write(path, contents)?;
    tracing::info!("Wrote {}", path.display());
    Ok(true)
}
