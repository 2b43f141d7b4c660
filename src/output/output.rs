//! The scope printer.
//!
//! Buffers two streams while the checker runs: the global section (one
//! line per function signature, in insertion order) and the nested scope
//! section (one line per declared symbol, indented two spaces per nesting
//! level). `Display` stitches the two together between the global scope
//! markers.

use std::fmt::Display;
use std::fmt::Write as _;

use crate::ast::types::BuiltinType;

/// Records scope structure and declarations as the checker traverses.
#[derive(Debug, Default)]
pub struct ScopePrinter {
    globals_buffer: String,
    buffer: String,
    indent_level: usize,
}

impl ScopePrinter {
    pub fn new() -> Self {
        ScopePrinter::default()
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    pub fn begin_scope(&mut self) {
        self.indent_level += 1;
        let _ = writeln!(self.buffer, "{}---begin scope---", self.indent());
    }

    pub fn end_scope(&mut self) {
        let _ = writeln!(self.buffer, "{}---end scope---", self.indent());
        self.indent_level -= 1;
    }

    /// Emits a declared variable or parameter into the current scope.
    pub fn emit_var(&mut self, id: &str, ty: BuiltinType, offset: i32) {
        let _ = writeln!(self.buffer, "{}{} {} {}", self.indent(), id, ty, offset);
    }

    /// Emits a function signature into the global section.
    pub fn emit_func(&mut self, id: &str, return_type: BuiltinType, param_types: &[BuiltinType]) {
        let params = param_types
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let _ = writeln!(
            self.globals_buffer,
            "{} ({}) -> {}",
            id, params, return_type
        );
    }
}

impl Display for ScopePrinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "---begin global scope---")?;
        write!(f, "{}", self.globals_buffer)?;
        write!(f, "{}", self.buffer)?;
        writeln!(f, "---end global scope---")
    }
}
