//! Top-level declaration nodes.
//!
//! A program is an ordered list of function declarations; functions are not
//! nestable. The parser hands the checker a single `Program` value and the
//! checker never mutates it.

use super::statements::Stmt;
use super::types::BuiltinType;

/// A formal parameter of a function.
#[derive(Debug, Clone)]
pub struct Formal {
    pub line: u32,
    pub name: String,
    pub ty: BuiltinType,
}

impl Formal {
    pub fn new(line: u32, name: impl Into<String>, ty: BuiltinType) -> Self {
        Formal {
            line,
            name: name.into(),
            ty,
        }
    }
}

/// A function declaration.
#[derive(Debug, Clone)]
pub struct FuncDecl {
    pub line: u32,
    pub name: String,
    pub return_type: BuiltinType,
    /// Formal parameters in source order.
    pub formals: Vec<Formal>,
    /// The body statement list.
    pub body: Vec<Stmt>,
}

/// A whole program: function declarations in source order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub functions: Vec<FuncDecl>,
}

impl Program {
    pub fn new(functions: Vec<FuncDecl>) -> Self {
        Program { functions }
    }
}
