#![allow(clippy::module_inception)]

//! Semantic analysis for a small statically-typed imperative language.
//!
//! The crate consumes an already-built AST (the lexer and parser live
//! upstream) and either produces a fully annotated tree for a code
//! generator, or the single first violation found. See [`analyze`] for the
//! entry point.

pub mod ast;
pub mod checker;
pub mod errors;
pub mod output;
pub mod symbols;

pub use checker::checker::{analyze, Analysis};
pub use errors::errors::Error;
