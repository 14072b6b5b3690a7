//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] xlgen_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] xlgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },

    /// Two schema entities produce the same emitted type name.
    #[error("emitted type name '{name}' produced by both {first} and {second}")]
    NameCollision {
        /// Emitted name.
        name: String,
        /// Origin registered first.
        first: String,
        /// Origin registered second.
        second: String,
    },

    /// Two members of one emitted type share a name.
    #[error("member '{field}' emitted more than once in '{type_name}'")]
    FieldCollision {
        /// Emitted type name.
        type_name: String,
        /// Repeated member name.
        field: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}
