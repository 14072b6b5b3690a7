//! Schema type definitions.
//!
//! This module contains the data structures representing IDL schema elements
//! including builtins, enums, structs, lists, anonymous structs and keyed
//! unions.

use std::collections::HashMap;

/// Complete IDL schema definition.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Schema name, reported in the provenance header of generated code.
    pub name: String,
    /// Namespace prefix carried by every type name (e.g. `libxl_`).
    pub namespace: Option<String>,
    /// Schema description.
    pub description: Option<String>,
    /// Type definitions in declaration order.
    pub types: Vec<TypeDef>,
    /// Type lookup map (built during parsing).
    type_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            namespace: None,
            description: None,
            types: Vec::new(),
            type_map: HashMap::new(),
        }
    }

    /// Adds a type definition to the schema.
    pub fn add_type(&mut self, type_def: TypeDef) {
        let name = type_def.name().to_string();
        let index = self.types.len();
        self.types.push(type_def);
        self.type_map.insert(name, index);
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Looks up an enum by name.
    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<&EnumDef> {
        match self.get_type(name) {
            Some(TypeDef::Enum(e)) => Some(e),
            _ => None,
        }
    }

    /// Looks up a struct by name.
    #[must_use]
    pub fn get_struct(&self, name: &str) -> Option<&StructDef> {
        match self.get_type(name) {
            Some(TypeDef::Struct(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns true if `name` is a primitive or a declared type.
    #[must_use]
    pub fn resolves(&self, name: &str) -> bool {
        self.has_type(name) || PrimitiveType::from_idl_name(name, None).is_some()
    }

    /// Builds the type lookup map from the types vector.
    pub fn build_type_map(&mut self) {
        self.type_map.clear();
        for (idx, type_def) in self.types.iter().enumerate() {
            self.type_map.insert(type_def.name().to_string(), idx);
        }
    }
}

/// Type definition variants.
#[derive(Debug, Clone)]
pub enum TypeDef {
    /// Named alias of a primitive.
    Builtin(BuiltinDef),
    /// Enum type definition.
    Enum(EnumDef),
    /// Struct type definition.
    Struct(StructDef),
}

impl TypeDef {
    /// Returns the name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(b) => &b.name,
            Self::Enum(e) => &e.name,
            Self::Struct(s) => &s.name,
        }
    }

    /// Returns the kind of definition, for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Builtin(_) => "builtin",
            Self::Enum(_) => "enum",
            Self::Struct(_) => "struct",
        }
    }

    /// Returns true if this is a builtin alias.
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }

    /// Returns true if this is an enum type.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns true if this is a struct type.
    #[must_use]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }
}

/// Builtin type definition: a named alias of a primitive.
#[derive(Debug, Clone)]
pub struct BuiltinDef {
    /// Type name.
    pub name: String,
    /// Underlying primitive type.
    pub primitive: PrimitiveType,
    /// Description.
    pub description: Option<String>,
}

impl BuiltinDef {
    /// Creates a new builtin definition.
    #[must_use]
    pub fn new(name: String, primitive: PrimitiveType) -> Self {
        Self {
            name,
            primitive,
            description: None,
        }
    }
}

/// IDL primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// Plain boolean.
    Bool,
    /// Tri-state boolean: unset, false or true.
    Defbool,
    /// Owned string.
    String,
    /// Ordered list of strings.
    StringList,
    /// Ordered list of key/value string pairs.
    KeyValueList,
    /// Opaque fixed-size byte blob.
    Blob(usize),
    /// Variable-length bit-set.
    Bitmap,
}

impl PrimitiveType {
    /// Returns the Rust type for this primitive.
    #[must_use]
    pub fn rust_type(&self) -> String {
        match self {
            Self::Int8 => "i8".to_string(),
            Self::Int16 => "i16".to_string(),
            Self::Int32 => "i32".to_string(),
            Self::Int64 => "i64".to_string(),
            Self::Uint8 => "u8".to_string(),
            Self::Uint16 => "u16".to_string(),
            Self::Uint32 => "u32".to_string(),
            Self::Uint64 => "u64".to_string(),
            Self::Bool => "bool".to_string(),
            Self::Defbool => "Option<bool>".to_string(),
            Self::String => "String".to_string(),
            Self::StringList => "Vec<String>".to_string(),
            Self::KeyValueList => "Vec<(String, String)>".to_string(),
            Self::Blob(len) => format!("[u8; {}]", len),
            Self::Bitmap => "Vec<u8>".to_string(),
        }
    }

    /// Returns the IDL name.
    #[must_use]
    pub const fn idl_name(&self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Bool => "bool",
            Self::Defbool => "defbool",
            Self::String => "string",
            Self::StringList => "string_list",
            Self::KeyValueList => "key_value_list",
            Self::Blob(_) => "blob",
            Self::Bitmap => "bitmap",
        }
    }

    /// Parses a primitive type from its IDL name.
    ///
    /// `blob` needs a length; every other primitive ignores it.
    #[must_use]
    pub fn from_idl_name(name: &str, length: Option<usize>) -> Option<Self> {
        match name {
            "int8" => Some(Self::Int8),
            "int16" => Some(Self::Int16),
            "int32" => Some(Self::Int32),
            "int64" => Some(Self::Int64),
            "uint8" => Some(Self::Uint8),
            "uint16" => Some(Self::Uint16),
            "uint32" => Some(Self::Uint32),
            "uint64" => Some(Self::Uint64),
            "bool" => Some(Self::Bool),
            "defbool" => Some(Self::Defbool),
            "string" => Some(Self::String),
            "string_list" => Some(Self::StringList),
            "key_value_list" => Some(Self::KeyValueList),
            "blob" => length.filter(|&len| len > 0).map(Self::Blob),
            "bitmap" => Some(Self::Bitmap),
            _ => None,
        }
    }

    /// Returns true if this is a fixed-width integer type.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.integer_range().is_some()
    }

    /// Returns the inclusive value range of an integer type.
    #[must_use]
    pub const fn integer_range(&self) -> Option<(i128, i128)> {
        match self {
            Self::Int8 => Some((i8::MIN as i128, i8::MAX as i128)),
            Self::Int16 => Some((i16::MIN as i128, i16::MAX as i128)),
            Self::Int32 => Some((i32::MIN as i128, i32::MAX as i128)),
            Self::Int64 => Some((i64::MIN as i128, i64::MAX as i128)),
            Self::Uint8 => Some((0, u8::MAX as i128)),
            Self::Uint16 => Some((0, u16::MAX as i128)),
            Self::Uint32 => Some((0, u32::MAX as i128)),
            Self::Uint64 => Some((0, u64::MAX as i128)),
            _ => None,
        }
    }

    /// Returns true if an integer type can hold `value`.
    #[must_use]
    pub fn holds(&self, value: i128) -> bool {
        self.integer_range()
            .is_some_and(|(min, max)| (min..=max).contains(&value))
    }

    /// Returns true if the Rust type implements `Default`.
    ///
    /// Arrays only implement it up to 32 elements.
    #[must_use]
    pub const fn implements_default(&self) -> bool {
        match self {
            Self::Blob(len) => *len <= 32,
            _ => true,
        }
    }
}

/// Enum type definition.
#[derive(Debug, Clone)]
pub struct EnumDef {
    /// Type name.
    pub name: String,
    /// Labels in declaration order.
    pub values: Vec<EnumValue>,
    /// Label used as the default value.
    pub default: Option<String>,
    /// Explicit storage width.
    pub storage: Option<PrimitiveType>,
    /// Description.
    pub description: Option<String>,
}

impl EnumDef {
    /// Creates a new enum type definition.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            values: Vec::new(),
            default: None,
            storage: None,
            description: None,
        }
    }

    /// Adds a value to the enum.
    pub fn add_value(&mut self, value: EnumValue) {
        self.values.push(value);
    }

    /// Looks up a value by label.
    #[must_use]
    pub fn get_value(&self, label: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == label)
    }

    /// Returns the storage holding every value: the explicit width if
    /// declared, otherwise `int32` (C `int`) widened to `int64` or `uint64`.
    ///
    /// Returns `None` when no candidate width holds every value.
    #[must_use]
    pub fn resolved_storage(&self) -> Option<PrimitiveType> {
        let candidates = match self.storage {
            Some(explicit) => vec![explicit],
            None => vec![PrimitiveType::Int32, PrimitiveType::Int64, PrimitiveType::Uint64],
        };
        candidates
            .into_iter()
            .find(|storage| self.values.iter().all(|v| storage.holds(v.value)))
    }
}

/// Enum label and its integer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Label.
    pub name: String,
    /// Integer value exactly as declared.
    pub value: i128,
    /// Description.
    pub description: Option<String>,
}

impl EnumValue {
    /// Creates a new enum value.
    #[must_use]
    pub fn new(name: String, value: i128) -> Self {
        Self {
            name,
            value,
            description: None,
        }
    }

    /// Returns true for negative sentinel values such as `invalid = -1`.
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        self.value < 0
    }
}

/// Struct type definition.
#[derive(Debug, Clone)]
pub struct StructDef {
    /// Type name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
    /// Description.
    pub description: Option<String>,
}

impl StructDef {
    /// Creates a new struct type definition.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            fields: Vec::new(),
            description: None,
        }
    }

    /// Adds a field to the struct.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }
}

/// Field within a struct, an anonymous struct or a variant payload.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name. For keyed unions this is the discriminant field.
    pub name: String,
    /// Shape of the field.
    pub kind: FieldKind,
    /// Description.
    pub description: Option<String>,
}

impl FieldDef {
    /// Creates a new field.
    #[must_use]
    pub fn new(name: String, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            description: None,
        }
    }

    /// Creates a field referencing a named type.
    #[must_use]
    pub fn named(name: &str, type_name: &str) -> Self {
        Self::new(name.to_string(), FieldKind::Named(type_name.to_string()))
    }
}

/// Shape of a field.
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Reference to a primitive or a declared type.
    Named(String),
    /// Zero or more elements of a named type.
    List {
        /// Element type name.
        element: String,
        /// Native member holding the element count.
        count: Option<String>,
    },
    /// Struct embedded inline without its own top-level name.
    Struct(Vec<FieldDef>),
    /// Discriminant plus payload selected by it.
    KeyedUnion(KeyedUnionDef),
}

/// Keyed union definition.
#[derive(Debug, Clone)]
pub struct KeyedUnionDef {
    /// Enum type of the discriminant.
    pub enum_type: String,
    /// Payload-bearing labels in declaration order.
    pub variants: Vec<VariantDef>,
}

impl KeyedUnionDef {
    /// Creates a keyed union with no variants.
    #[must_use]
    pub fn new(enum_type: String) -> Self {
        Self {
            enum_type,
            variants: Vec::new(),
        }
    }

    /// Looks up the variant mapped to `label`.
    #[must_use]
    pub fn get_variant(&self, label: &str) -> Option<&VariantDef> {
        self.variants.iter().find(|v| v.tag == label)
    }
}

/// Payload mapped to one discriminant label.
#[derive(Debug, Clone)]
pub struct VariantDef {
    /// Discriminant label.
    pub tag: String,
    /// Payload shape.
    pub payload: VariantPayload,
}

/// Payload shape of a variant.
#[derive(Debug, Clone)]
pub enum VariantPayload {
    /// Fields declared inline.
    Inline(Vec<FieldDef>),
    /// Fields of a named struct.
    Named(String),
}
