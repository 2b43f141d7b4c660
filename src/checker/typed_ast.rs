//! Typed Abstract Syntax Tree definitions.
//!
//! This module contains the annotated variants of the AST nodes produced
//! by the checker. The typed tree mirrors the untyped one but includes:
//!
//! - A resolved type on every expression node
//! - The assigned stack offset on every declared symbol and every
//!   identifier reference
//! - Validated call sites carrying the callee's return type
//!
//! A hypothetical code generator consumes this tree; nothing in the
//! analyzer mutates it after it is built.

use crate::ast::expressions::{BinOpKind, RelOpKind};
use crate::ast::types::BuiltinType;

/// A type-checked expression.
#[derive(Debug, Clone)]
pub enum TypedExpr {
    Num {
        line: u32,
        value: i32,
    },
    NumB {
        line: u32,
        value: i32,
    },
    Str {
        line: u32,
        value: String,
    },
    Bool {
        line: u32,
        value: bool,
    },
    /// A resolved identifier reference with its declared type and frame
    /// offset.
    Id {
        line: u32,
        name: String,
        ty: BuiltinType,
        offset: i32,
    },
    BinOp {
        line: u32,
        op: BinOpKind,
        left: Box<TypedExpr>,
        right: Box<TypedExpr>,
        /// Byte when both operands are byte, otherwise int.
        ty: BuiltinType,
    },
    RelOp {
        line: u32,
        op: RelOpKind,
        left: Box<TypedExpr>,
        right: Box<TypedExpr>,
    },
    Not {
        line: u32,
        operand: Box<TypedExpr>,
    },
    And {
        line: u32,
        left: Box<TypedExpr>,
        right: Box<TypedExpr>,
    },
    Or {
        line: u32,
        left: Box<TypedExpr>,
        right: Box<TypedExpr>,
    },
    Cast {
        line: u32,
        expr: Box<TypedExpr>,
        target: BuiltinType,
    },
    Call(TypedCall),
}

impl TypedExpr {
    /// The resolved type of the expression.
    pub fn get_type(&self) -> BuiltinType {
        match self {
            TypedExpr::Num { .. } => BuiltinType::Int,
            TypedExpr::NumB { .. } => BuiltinType::Byte,
            TypedExpr::Str { .. } => BuiltinType::String,
            TypedExpr::Bool { .. } => BuiltinType::Bool,
            TypedExpr::Id { ty, .. } => *ty,
            TypedExpr::BinOp { ty, .. } => *ty,
            TypedExpr::RelOp { .. } => BuiltinType::Bool,
            TypedExpr::Not { .. } => BuiltinType::Bool,
            TypedExpr::And { .. } => BuiltinType::Bool,
            TypedExpr::Or { .. } => BuiltinType::Bool,
            TypedExpr::Cast { target, .. } => *target,
            TypedExpr::Call(call) => call.return_type,
        }
    }
}

/// A validated function call, in expression or statement position.
#[derive(Debug, Clone)]
pub struct TypedCall {
    pub line: u32,
    pub callee: String,
    pub return_type: BuiltinType,
    pub args: Vec<TypedExpr>,
}

/// A type-checked statement.
#[derive(Debug, Clone)]
pub enum TypedStmt {
    Block {
        line: u32,
        body: Vec<TypedStmt>,
    },
    Call(TypedCall),
    Break {
        line: u32,
    },
    Continue {
        line: u32,
    },
    Return {
        line: u32,
        value: Option<TypedExpr>,
    },
    If {
        line: u32,
        condition: TypedExpr,
        then_body: Box<TypedStmt>,
        else_body: Option<Box<TypedStmt>>,
    },
    While {
        line: u32,
        condition: TypedExpr,
        body: Box<TypedStmt>,
    },
    VarDecl {
        line: u32,
        name: String,
        ty: BuiltinType,
        offset: i32,
        init: Option<TypedExpr>,
    },
    Assign {
        line: u32,
        name: String,
        offset: i32,
        value: TypedExpr,
    },
}

/// A formal parameter with its assigned frame offset.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedFormal {
    pub name: String,
    pub ty: BuiltinType,
    pub offset: i32,
}

/// A type-checked function declaration.
#[derive(Debug, Clone)]
pub struct TypedFuncDecl {
    pub line: u32,
    pub name: String,
    pub return_type: BuiltinType,
    pub params: Vec<TypedFormal>,
    pub body: Vec<TypedStmt>,
}

/// The fully annotated program.
#[derive(Debug, Clone)]
pub struct TypedProgram {
    pub functions: Vec<TypedFuncDecl>,
}
