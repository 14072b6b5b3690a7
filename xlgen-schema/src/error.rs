//! Error types for schema parsing and validation.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on element '{element}'")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Enum value that is not an integer literal.
    #[error("invalid integer '{value}' for value '{label}' of enum '{enum_name}'")]
    InvalidEnumValue {
        /// Enum name.
        enum_name: String,
        /// Value label.
        label: String,
        /// Offending literal.
        value: String,
    },

    /// Builtin whose primitive has no target-language mapping.
    #[error("builtin '{name}' uses unsupported primitive '{primitive}'")]
    UnsupportedPrimitive {
        /// Builtin name.
        name: String,
        /// Primitive as written in the schema.
        primitive: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (type, label, etc.).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Invalid schema structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Reference to a type that is not declared.
    #[error("type '{name}' referenced by '{context}' not found")]
    TypeNotFound {
        /// Referenced type name.
        name: String,
        /// Where the reference appears (`struct.field`).
        context: String,
    },

    /// Two labels of one enum share a name.
    #[error("duplicate label '{label}' in enum '{enum_name}'")]
    DuplicateLabel {
        /// Enum name.
        enum_name: String,
        /// Repeated label.
        label: String,
    },

    /// Two labels of one enum share a value.
    #[error("labels '{first}' and '{second}' of enum '{enum_name}' share value {value}")]
    DuplicateValue {
        /// Enum name.
        enum_name: String,
        /// Shared value.
        value: i128,
        /// Label declared first.
        first: String,
        /// Label declared second.
        second: String,
    },

    /// Default label not present in the enum.
    #[error("default '{label}' of enum '{enum_name}' is not one of its labels")]
    UnknownDefault {
        /// Enum name.
        enum_name: String,
        /// Declared default label.
        label: String,
    },

    /// Declared storage width cannot hold a value.
    #[error("value {value} of enum '{enum_name}' does not fit in {storage}")]
    StorageTooNarrow {
        /// Enum name.
        enum_name: String,
        /// Declared storage primitive.
        storage: String,
        /// Offending value.
        value: i128,
    },

    /// Keyed union discriminated by something other than an enum.
    #[error("keyed union '{context}' is discriminated by '{type_name}', which is not an enum")]
    DiscriminantNotEnum {
        /// Union location (`struct.field`).
        context: String,
        /// Referenced type.
        type_name: String,
    },

    /// Variant mapped to a label the discriminant enum does not declare.
    #[error("keyed union '{context}' maps label '{label}' absent from enum '{enum_name}'")]
    UnknownLabel {
        /// Union location (`struct.field`).
        context: String,
        /// Mapped label.
        label: String,
        /// Discriminant enum.
        enum_name: String,
    },

    /// Label mapped to more than one payload.
    #[error("keyed union '{context}' maps label '{label}' more than once")]
    DuplicateVariant {
        /// Union location (`struct.field`).
        context: String,
        /// Repeated label.
        label: String,
    },

    /// Payload mapped onto a negative (reserved sentinel) value.
    #[error("keyed union '{context}' maps a payload onto sentinel label '{label}' ({value})")]
    SentinelVariant {
        /// Union location (`struct.field`).
        context: String,
        /// Sentinel label.
        label: String,
        /// Sentinel value.
        value: i128,
    },

    /// Variant payload naming something other than a struct.
    #[error(
        "variant '{label}' of keyed union '{context}' names '{type_name}', which is not a struct"
    )]
    PayloadNotStruct {
        /// Union location (`struct.field`).
        context: String,
        /// Variant label.
        label: String,
        /// Referenced type.
        type_name: String,
    },

    /// Circular type reference.
    #[error("circular type reference detected: {path}")]
    CircularReference {
        /// Path of the circular reference.
        path: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a type-not-found error.
    pub fn type_not_found(name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::TypeNotFound {
            name: name.into(),
            context: context.into(),
        }
    }
}
