//! Builtin alias code generation.

use crate::error::CodegenError;
use crate::naming::{NameTable, Namer};
use crate::rust::push_doc;
use xlgen_schema::ir::IrAlias;

/// Generator for builtin type aliases.
pub struct AliasGenerator<'a> {
    namer: Namer<'a>,
}

impl<'a> AliasGenerator<'a> {
    /// Creates a new alias generator.
    #[must_use]
    pub fn new(namer: Namer<'a>) -> Self {
        Self { namer }
    }

    /// Generates one `pub type` alias.
    ///
    /// # Errors
    /// Returns `CodegenError::NameCollision` if the alias name is taken.
    pub fn generate(
        &self,
        alias: &IrAlias,
        names: &mut NameTable,
    ) -> Result<String, CodegenError> {
        let rust_name = self.namer.type_name(&alias.name);
        names.register(&rust_name, format!("builtin {}", alias.name))?;

        let mut output = String::new();
        match &alias.description {
            Some(doc) => push_doc(&mut output, "", doc),
            None => output.push_str(&format!("/// `{}` builtin.\n", alias.primitive.idl_name())),
        }
        output.push_str(&format!(
            "pub type {} = {};\n\n",
            rust_name,
            alias.primitive.rust_type()
        ));

        tracing::debug!("Generated alias {}", rust_name);
        Ok(output)
    }
}
