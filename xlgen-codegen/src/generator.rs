//! Main code generator.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::naming::{NameTable, Namer};
use crate::rust::{AliasGenerator, EnumGenerator, StructGenerator, generate_header};
use xlgen_schema::SchemaIr;
use xlgen_schema::ir::IrItem;

/// Generator producing one Rust source file from a resolved schema.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the complete source text.
    ///
    /// Nothing is returned unless every declaration was generated.
    ///
    /// # Errors
    /// Returns `CodegenError` if two entities produce the same emitted name
    /// or the provenance source is not a single line.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let source = self.config.source_name.as_deref().unwrap_or(&self.ir.name);
        tracing::info!(
            "Generating {} declarations from '{}'",
            self.ir.items.len(),
            source
        );

        let namer = Namer::new(&self.config.reserved, self.ir.namespace.as_deref());
        let aliases = AliasGenerator::new(namer);
        let enums = EnumGenerator::new(namer, self.config);
        let structs = StructGenerator::new(self.ir, namer, self.config);
        let mut names = NameTable::new();

        let mut output = generate_header(source)?;
        for item in &self.ir.items {
            let code = match item {
                IrItem::Alias(alias) => aliases.generate(alias, &mut names)?,
                IrItem::Enum(enum_def) => enums.generate(enum_def, &mut names)?,
                IrItem::Struct(struct_def) => structs.generate(struct_def, &mut names)?,
            };
            output.push_str(&code);
        }

        // Exactly one trailing newline.
        let trimmed = output.trim_end().len();
        output.truncate(trimmed);
        output.push('\n');

        tracing::info!(
            "Generated {} types ({} bytes) from '{}'",
            names.len(),
            output.len(),
            source
        );
        Ok(output)
    }
}
