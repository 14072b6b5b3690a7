//! Rust code generation modules.

pub mod aliases;
pub mod enums;
pub mod header;
pub mod structs;
pub mod unions;

pub use aliases::AliasGenerator;
pub use enums::EnumGenerator;
pub use header::generate_header;
pub use structs::StructGenerator;
pub use unions::{UnionGenerator, UnionNames};

/// Appends `text` as `///` doc lines at the given indentation.
pub(crate) fn push_doc(output: &mut String, indent: &str, text: &str) {
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            output.push_str(&format!("{}///\n", indent));
        } else {
            output.push_str(&format!("{}/// {}\n", indent, line));
        }
    }
}
