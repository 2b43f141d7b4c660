//! Unit tests for error handling.
//!
//! This module contains tests for the diagnostic variants and the exact
//! one-line output the driver prints for each of them.

use crate::ast::types::BuiltinType;
use crate::errors::errors::{Error, ErrorImpl};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UndefinedVariable {
            id: "x".to_string(),
        },
        10,
    );

    assert_eq!(error.get_error_name(), "UndefinedVariable");
    assert_eq!(error.get_line(), 10);
}

#[test]
fn test_undefined_variable_message() {
    let error = Error::new(
        ErrorImpl::UndefinedVariable {
            id: "foo".to_string(),
        },
        3,
    );

    assert_eq!(error.to_string(), "line 3: variable foo is not defined");
}

#[test]
fn test_defined_as_function_message() {
    let error = Error::new(
        ErrorImpl::DefinedAsFunction {
            id: "print".to_string(),
        },
        7,
    );

    assert_eq!(error.to_string(), "line 7: symbol print is a function");
}

#[test]
fn test_defined_as_variable_message() {
    let error = Error::new(
        ErrorImpl::DefinedAsVariable {
            id: "x".to_string(),
        },
        4,
    );

    assert_eq!(error.to_string(), "line 4: symbol x is a variable");
}

#[test]
fn test_already_defined_message() {
    let error = Error::new(
        ErrorImpl::AlreadyDefined {
            id: "x".to_string(),
        },
        5,
    );

    assert_eq!(error.to_string(), "line 5: symbol x is already defined");
}

#[test]
fn test_undefined_function_message() {
    let error = Error::new(
        ErrorImpl::UndefinedFunction {
            id: "bar".to_string(),
        },
        12,
    );

    assert_eq!(error.to_string(), "line 12: function bar is not defined");
}

#[test]
fn test_type_mismatch_message() {
    let error = Error::new(ErrorImpl::TypeMismatch, 8);

    assert_eq!(error.to_string(), "line 8: type mismatch");
}

#[test]
fn test_prototype_mismatch_message() {
    let error = Error::new(
        ErrorImpl::PrototypeMismatch {
            id: "foo".to_string(),
            expected: vec![BuiltinType::Int, BuiltinType::Int],
        },
        6,
    );

    assert_eq!(
        error.to_string(),
        "line 6: prototype mismatch, function foo expects parameters (int,int)"
    );
}

#[test]
fn test_prototype_mismatch_no_parameters() {
    let error = Error::new(
        ErrorImpl::PrototypeMismatch {
            id: "f".to_string(),
            expected: vec![],
        },
        2,
    );

    assert_eq!(
        error.to_string(),
        "line 2: prototype mismatch, function f expects parameters ()"
    );
}

#[test]
fn test_unexpected_break_message() {
    let error = Error::new(ErrorImpl::UnexpectedBreak, 9);

    assert_eq!(error.to_string(), "line 9: unexpected break statement");
}

#[test]
fn test_unexpected_continue_message() {
    let error = Error::new(ErrorImpl::UnexpectedContinue, 9);

    assert_eq!(error.to_string(), "line 9: unexpected continue statement");
}

#[test]
fn test_main_missing_has_no_line_prefix() {
    let error = Error::main_missing();

    assert_eq!(error.to_string(), "Program has no 'void main()' function");
}

#[test]
fn test_byte_out_of_range_message() {
    let error = Error::new(ErrorImpl::ByteOutOfRange { value: 256 }, 1);

    assert_eq!(error.to_string(), "line 1: byte value 256 out of range");
}

#[test]
fn test_lexical_error_message() {
    let error = Error::new(ErrorImpl::LexicalError, 2);

    assert_eq!(error.to_string(), "line 2: lexical error");
}

#[test]
fn test_syntax_error_message() {
    let error = Error::new(ErrorImpl::SyntaxError, 2);

    assert_eq!(error.to_string(), "line 2: syntax error");
}
