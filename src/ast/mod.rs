/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Top-level declaration nodes (programs, functions, formals)
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
/// - types: The built-in type set and compatibility rules
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
