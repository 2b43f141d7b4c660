//! Statement node definitions.
//!
//! Like expressions, statements are a closed enum over which the checker
//! matches exhaustively. Compound statements (`Block`, `If`, `While`) own
//! their children; the checker opens a fresh scope when it enters each of
//! them.

use super::expressions::{Call, Expr};
use super::types::BuiltinType;

/// A statement node.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// A statement list; the body of a function or a nested `{ ... }` block
    Block { line: u32, body: Vec<Stmt> },
    /// Function call in statement position
    Call(Call),
    /// Break out of the innermost while
    Break { line: u32 },
    /// Continue the innermost while
    Continue { line: u32 },
    /// Return from the enclosing function, with an optional value
    Return { line: u32, value: Option<Expr> },
    /// Conditional with an optional else branch
    If {
        line: u32,
        condition: Expr,
        then_body: Box<Stmt>,
        else_body: Option<Box<Stmt>>,
    },
    /// While loop
    While {
        line: u32,
        condition: Expr,
        body: Box<Stmt>,
    },
    /// Variable declaration with an optional initializer
    VarDecl {
        line: u32,
        name: String,
        ty: BuiltinType,
        init: Option<Expr>,
    },
    /// Assignment to a previously declared variable
    Assign {
        line: u32,
        name: String,
        value: Expr,
    },
}

impl Stmt {
    /// Returns the source line the statement was constructed from.
    pub fn line(&self) -> u32 {
        match self {
            Stmt::Block { line, .. }
            | Stmt::Break { line }
            | Stmt::Continue { line }
            | Stmt::Return { line, .. }
            | Stmt::If { line, .. }
            | Stmt::While { line, .. }
            | Stmt::VarDecl { line, .. }
            | Stmt::Assign { line, .. } => *line,
            Stmt::Call(call) => call.line,
        }
    }
}
