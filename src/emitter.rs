// src/emitter.rs

/// One generated constant: the identifier is only the programmatic handle;
/// the value stays the exact name the flag service uses so callers can look
/// flags up by their true names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDecl {
    pub identifier: String,
    pub value: String,
    pub doc: String,
}

/// The structured artifact handed to an emitter: a package, a container
/// type, and the ordered constants it holds.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub package: String,
    pub container: String,
    pub constants: Vec<ConstantDecl>,
}

/// Renders a [`SourceFile`] into concrete source text. Kept behind a trait
/// so the target syntax is swappable without touching the pipeline.
pub trait Emit {
    fn file_extension(&self) -> &'static str;
    fn emit(&self, file: &SourceFile) -> String;
}

/// Emits a Rust module: one unit struct whose inherent impl carries a
/// `pub const NAME: &str = "value";` per flag, each under its doc lines.
pub struct RustEmitter;

impl Emit for RustEmitter {
    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn emit(&self, file: &SourceFile) -> String {
        let mut out = String::new();

        if file.package.is_empty() {
            out.push_str(&format!("//! Flag constants for `{}`.\n", file.container));
        } else {
            out.push_str(&format!(
                "//! Flag constants for `{}` (package `{}`).\n",
                file.container, file.package
            ));
        }
        out.push_str("//!\n");
        out.push_str("//! This file is generated by flagconst. Do not edit.\n");
        out.push_str("#![allow(unused)]\n");
        out.push('\n');

        out.push_str(&format!("pub struct {};\n", file.container));
        out.push('\n');
        out.push_str(&format!("impl {} {{\n", file.container));

        for (i, constant) in file.constants.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for line in constant.doc.lines() {
                out.push_str(&format!("    /// {}\n", line));
            }
            out.push_str(&format!(
                "    pub const {}: &'static str = {:?};\n",
                constant.identifier, constant.value
            ));
        }

        out.push_str("}\n");
        out
    }
}
