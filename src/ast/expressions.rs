//! Expression node definitions.
//!
//! Expressions form a closed set of variants, so they are modelled as a
//! single enum and the checker dispatches with an exhaustive `match`
//! instead of a visitor. Every variant carries the 1-based source line it
//! was constructed from; the line is the sole provenance used in
//! diagnostics and is never mutated.

use super::statements::Stmt;
use super::types::BuiltinType;

/// Arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
}

/// Relational operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOpKind {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

/// A function call.
///
/// Calls are the one node usable both as an expression and as a statement,
/// so the node is a standalone struct wrapped by `Expr::Call` and
/// `Stmt::Call` rather than a variant of either enum alone.
#[derive(Debug, Clone)]
pub struct Call {
    pub line: u32,
    /// Name of the called function.
    pub callee: String,
    /// Arguments in source order.
    pub args: Vec<Expr>,
}

impl Call {
    pub fn new(line: u32, callee: impl Into<String>, args: Vec<Expr>) -> Self {
        Call {
            line,
            callee: callee.into(),
            args,
        }
    }

    /// Wraps the call as a statement, for use in statement position.
    pub fn into_stmt(self) -> Stmt {
        Stmt::Call(self)
    }
}

/// An expression node.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Integer literal
    Num { line: u32, value: i32 },
    /// Byte literal; the value range is validated by the checker, not here
    NumB { line: u32, value: i32 },
    /// String literal
    Str { line: u32, value: String },
    /// Boolean literal
    Bool { line: u32, value: bool },
    /// Identifier reference
    Id { line: u32, name: String },
    /// Binary arithmetic operation
    BinOp {
        line: u32,
        op: BinOpKind,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Binary relational operation
    RelOp {
        line: u32,
        op: RelOpKind,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Unary logical NOT
    Not { line: u32, operand: Box<Expr> },
    /// Binary logical AND
    And {
        line: u32,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Binary logical OR
    Or {
        line: u32,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Explicit type cast
    Cast {
        line: u32,
        expr: Box<Expr>,
        target: BuiltinType,
    },
    /// Function call in expression position
    Call(Call),
}

impl Expr {
    /// Returns the source line the expression was constructed from.
    pub fn line(&self) -> u32 {
        match self {
            Expr::Num { line, .. }
            | Expr::NumB { line, .. }
            | Expr::Str { line, .. }
            | Expr::Bool { line, .. }
            | Expr::Id { line, .. }
            | Expr::BinOp { line, .. }
            | Expr::RelOp { line, .. }
            | Expr::Not { line, .. }
            | Expr::And { line, .. }
            | Expr::Or { line, .. }
            | Expr::Cast { line, .. } => *line,
            Expr::Call(call) => call.line,
        }
    }
}
