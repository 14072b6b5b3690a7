//! Identifier conversion and uniqueness tracking.
//!
//! Schema identifiers are C-style (`libxl_device_nic`, `native_paravirt`).
//! They become PascalCase type names, snake_case field names and
//! SCREAMING_SNAKE_CASE constant names. Every emitted type name is
//! registered in a [`NameTable`] so that two schema entities can never
//! silently produce the same Rust item.

use crate::error::CodegenError;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Rust keywords, strict and reserved, as of edition 2024.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate"];

/// Converts an identifier to PascalCase.
///
/// Words are separated by `_` or `-`; the first character of each word is
/// uppercased and the rest is kept as written.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Converts an identifier to snake_case.
///
/// Word boundaries are `_`, `-` and lower-to-upper transitions; runs of
/// capitals (`UUID`) stay one word.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 && !result.ends_with('_') {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_lower)
            {
                result.push('_');
            }
        }
        result.push(c.to_ascii_lowercase());
    }

    result
}

/// Converts an identifier to SCREAMING_SNAKE_CASE.
#[must_use]
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_ascii_uppercase()
}

/// Removes a namespace prefix, keeping the name intact if nothing would be left.
#[must_use]
pub fn strip_namespace<'a>(name: &'a str, namespace: Option<&str>) -> &'a str {
    namespace
        .and_then(|ns| name.strip_prefix(ns))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(name)
}

/// Returns true if `s` is a Rust keyword.
#[must_use]
pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

/// Converts a schema field name into a Rust field identifier.
///
/// Keywords become raw identifiers (`type` -> `r#type`), except the few
/// that cannot be raw, which get a trailing underscore.
#[must_use]
pub fn field_ident(raw: &str) -> String {
    let snake = to_snake_case(raw);
    let snake = if snake.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", snake)
    } else {
        snake
    };

    if NON_RAW_KEYWORDS.contains(&snake.as_str()) {
        format!("{}_", snake)
    } else if is_keyword(&snake) {
        format!("r#{}", snake)
    } else {
        snake
    }
}

/// Converts a schema identifier into a type or variant identifier.
#[must_use]
pub fn type_ident(raw: &str) -> String {
    let pascal = to_pascal_case(raw);
    if pascal.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", pascal)
    } else {
        pascal
    }
}

/// Converts a schema label into an associated constant name.
#[must_use]
pub fn const_ident(raw: &str) -> String {
    let screaming = to_screaming_snake_case(raw);
    if screaming.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", screaming)
    } else {
        screaming
    }
}

/// Escapes a PascalCase identifier that is a keyword (`Self`).
fn escape_type_keyword(ident: &str) -> String {
    if is_keyword(ident) {
        format!("{}_", ident)
    } else {
        ident.to_string()
    }
}

/// Substitution table for type names that would shadow prelude or std items.
///
/// The standard table covers every prelude name the generated code refers
/// to. It is immutable once handed to a [`Namer`]; it is extended through
/// [`ReservedNames::with`] before generation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedNames {
    substitutions: BTreeMap<String, String>,
}

impl ReservedNames {
    /// Creates the standard table.
    #[must_use]
    pub fn new() -> Self {
        Self::empty()
            .with("Self", "SelfRef")
            .with("String", "Text")
            .with("Vec", "Vector")
            .with("Option", "Choice")
            .with("Result", "Outcome")
            .with("Box", "Boxed")
            .with("Default", "Defaults")
            .with("From", "Source")
            .with("Into", "IntoTarget")
            .with("Some", "SomeValue")
            .with("None", "NoneValue")
            .with("Ok", "OkValue")
            .with("Err", "ErrValue")
    }

    /// Creates a table with no substitutions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            substitutions: BTreeMap::new(),
        }
    }

    /// Adds or replaces a substitution of emitted type name `from` by `to`.
    #[must_use]
    pub fn with(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.substitutions.insert(from.into(), to.into());
        self
    }

    /// Returns the substitute for `name`, or `name` itself.
    #[must_use]
    pub fn substitute<'a>(&'a self, name: &'a str) -> &'a str {
        self.substitutions.get(name).map_or(name, String::as_str)
    }

    /// Returns the number of substitutions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.substitutions.len()
    }

    /// Returns true if the table holds no substitutions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }
}

impl Default for ReservedNames {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps schema type names to emitted Rust type names.
#[derive(Debug, Clone, Copy)]
pub struct Namer<'a> {
    reserved: &'a ReservedNames,
    namespace: Option<&'a str>,
}

impl<'a> Namer<'a> {
    /// Creates a namer stripping `namespace` and applying `reserved`.
    #[must_use]
    pub fn new(reserved: &'a ReservedNames, namespace: Option<&'a str>) -> Self {
        Self {
            reserved,
            namespace,
        }
    }

    /// Returns the emitted name of a schema type.
    #[must_use]
    pub fn type_name(&self, raw: &str) -> String {
        let ident = type_ident(strip_namespace(raw, self.namespace));
        escape_type_keyword(self.reserved.substitute(&ident))
    }

    /// Returns the emitted name of a union variant for a discriminant label.
    #[must_use]
    pub fn variant_name(&self, label: &str) -> String {
        let ident = type_ident(label);
        escape_type_keyword(self.reserved.substitute(&ident))
    }

    /// Returns the emitted name of a type derived from `parent` and `suffix`.
    #[must_use]
    pub fn nested_name(&self, parent: &str, suffix: &str) -> String {
        format!("{}{}", parent, to_pascal_case(suffix))
    }
}

/// Registry of emitted type names and the schema entity each came from.
#[derive(Debug, Default)]
pub struct NameTable {
    origins: HashMap<String, String>,
}

impl NameTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` as produced by `origin`.
    ///
    /// # Errors
    /// Returns `CodegenError::NameCollision` if `name` is already taken.
    pub fn register(
        &mut self,
        name: &str,
        origin: impl Into<String>,
    ) -> Result<(), CodegenError> {
        let origin = origin.into();
        if let Some(first) = self.origins.get(name) {
            return Err(CodegenError::NameCollision {
                name: name.to_string(),
                first: first.clone(),
                second: origin,
            });
        }
        self.origins.insert(name.to_string(), origin);
        Ok(())
    }

    /// Returns the origin registered for `name`.
    #[must_use]
    pub fn origin(&self, name: &str) -> Option<&str> {
        self.origins.get(name).map(String::as_str)
    }

    /// Returns the number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

/// Member names of one emitted type.
#[derive(Debug)]
pub struct MemberSet {
    type_name: String,
    seen: HashSet<String>,
}

impl MemberSet {
    /// Creates an empty member set for `type_name`.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            seen: HashSet::new(),
        }
    }

    /// Records a member name.
    ///
    /// # Errors
    /// Returns `CodegenError::FieldCollision` if the member already exists.
    pub fn insert(&mut self, member: &str) -> Result<(), CodegenError> {
        let bare = member.strip_prefix("r#").unwrap_or(member);
        if !self.seen.insert(bare.to_string()) {
            return Err(CodegenError::FieldCollision {
                type_name: self.type_name.clone(),
                field: bare.to_string(),
            });
        }
        Ok(())
    }
}
