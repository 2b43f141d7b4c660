use std::fmt::Display;

use thiserror::Error as ThisError;

use crate::ast::types::BuiltinType;

/// A single diagnostic with its source line.
///
/// Analysis stops at the first violation, so an `Error` value is always the
/// complete output of a failed run. `Display` renders the one line the
/// driver prints: `line <n>: <message>`, except for the missing-main
/// diagnostic which has no line prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    /// Builds the missing-main diagnostic, the one error with no source line.
    pub fn main_missing() -> Self {
        Error {
            internal_error: ErrorImpl::MainMissing,
            line: 0,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::LexicalError => "LexicalError",
            ErrorImpl::SyntaxError => "SyntaxError",
            ErrorImpl::UndefinedVariable { .. } => "UndefinedVariable",
            ErrorImpl::DefinedAsFunction { .. } => "DefinedAsFunction",
            ErrorImpl::DefinedAsVariable { .. } => "DefinedAsVariable",
            ErrorImpl::AlreadyDefined { .. } => "AlreadyDefined",
            ErrorImpl::UndefinedFunction { .. } => "UndefinedFunction",
            ErrorImpl::TypeMismatch => "TypeMismatch",
            ErrorImpl::PrototypeMismatch { .. } => "PrototypeMismatch",
            ErrorImpl::UnexpectedBreak => "UnexpectedBreak",
            ErrorImpl::UnexpectedContinue => "UnexpectedContinue",
            ErrorImpl::MainMissing => "MainMissing",
            ErrorImpl::ByteOutOfRange { .. } => "ByteOutOfRange",
        }
    }

    pub fn get_inner(&self) -> &ErrorImpl {
        &self.internal_error
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.internal_error {
            // The missing-main diagnostic refers to the whole program
            ErrorImpl::MainMissing => write!(f, "{}", self.internal_error),
            _ => write!(f, "line {}: {}", self.line, self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

/// The diagnostic taxonomy with its fixed message templates.
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("lexical error")]
    LexicalError,
    #[error("syntax error")]
    SyntaxError,
    #[error("variable {id} is not defined")]
    UndefinedVariable { id: String },
    #[error("symbol {id} is a function")]
    DefinedAsFunction { id: String },
    #[error("symbol {id} is a variable")]
    DefinedAsVariable { id: String },
    #[error("symbol {id} is already defined")]
    AlreadyDefined { id: String },
    #[error("function {id} is not defined")]
    UndefinedFunction { id: String },
    #[error("type mismatch")]
    TypeMismatch,
    #[error("prototype mismatch, function {} expects parameters ({})", .id, join_types(.expected))]
    PrototypeMismatch {
        id: String,
        expected: Vec<BuiltinType>,
    },
    #[error("unexpected break statement")]
    UnexpectedBreak,
    #[error("unexpected continue statement")]
    UnexpectedContinue,
    #[error("Program has no 'void main()' function")]
    MainMissing,
    #[error("byte value {value} out of range")]
    ByteOutOfRange { value: i32 },
}

fn join_types(types: &[BuiltinType]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
