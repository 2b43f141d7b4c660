//! Semantic analysis module.
//!
//! This module performs the single semantic pass over the AST. It
//! transforms the untyped tree into a typed, offset-annotated tree while:
//!
//! - Resolving identifier and function references through the scope stack
//! - Verifying type correctness of expressions and statements
//! - Checking call sites against recorded function signatures
//! - Assigning stack-frame offsets to every parameter and local
//! - Enforcing control-flow legality (break/continue placement, return
//!   types, the mandatory `void main()`)
//!
//! The first violation found anywhere aborts the whole analysis; there is
//! no error recovery and no partial result.

pub mod checker;
pub mod typed_ast;
