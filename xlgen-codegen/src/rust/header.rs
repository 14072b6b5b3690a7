//! Provenance header of generated files.

use crate::error::CodegenError;

/// Marker line opening every generated file.
pub const GENERATED_MARKER: &str = "// Code generated by xlgen. DO NOT EDIT.";

/// Generates the provenance header for output produced from `source`.
///
/// # Errors
/// Returns `CodegenError::Generation` if `source` is empty or spans lines.
pub fn generate_header(source: &str) -> Result<String, CodegenError> {
    if source.trim().is_empty() || source.contains(['\n', '\r']) {
        return Err(CodegenError::generation(format!(
            "source name {:?} must be a single non-empty line",
            source
        )));
    }

    let mut output = String::new();
    output.push_str(GENERATED_MARKER);
    output.push('\n');
    output.push_str(&format!("// source: {}\n", source));
    output.push_str("// @generated\n\n");
    Ok(output)
}
