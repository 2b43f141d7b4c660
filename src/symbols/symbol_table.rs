//! The scope stack.
//!
//! Scopes are pushed on entering any block (function body, statement list,
//! if branch, while body, call argument list) and popped in strict LIFO
//! order on leaving it. Lookup walks from the innermost scope outward, which
//! is what implements shadowing.

use crate::ast::types::BuiltinType;

use super::scope::{Scope, Symbol};

/// A stack of scopes plus the running frame-offset counters.
///
/// The counters live on the table rather than on individual scopes so a
/// nested scope keeps allocating within the enclosing function's frame;
/// ending a scope restores them to the values captured when that scope was
/// pushed, so sibling scopes never collide.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
    current_positive_offset: i32,
    current_negative_offset: i32,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            scopes: Vec::new(),
            current_positive_offset: 0,
            current_negative_offset: -1,
        }
    }

    /// Pushes a new scope seeded with the current counters.
    pub fn begin_scope(&mut self) {
        self.scopes.push(Scope::new(
            self.current_positive_offset,
            self.current_negative_offset,
        ));
    }

    /// Pops the top scope and restores the counters to the values they had
    /// when that scope was pushed.
    pub fn end_scope(&mut self) {
        if let Some(scope) = self.scopes.pop() {
            self.current_positive_offset = scope.initial_positive_offset();
            self.current_negative_offset = scope.initial_negative_offset();
        }
    }

    /// Registers a parameter in the top scope and returns its offset.
    ///
    /// With no open scope this is a no-op; a well-formed traversal always
    /// opens the function scope before registering formals.
    pub fn add_param(&mut self, name: &str, ty: BuiltinType) -> i32 {
        match self.scopes.last_mut() {
            Some(scope) => {
                let offset = scope.add_param(name, ty);
                self.current_negative_offset -= 1;
                offset
            }
            None => self.current_negative_offset,
        }
    }

    /// Registers a local variable in the top scope and returns its offset.
    pub fn add_variable(&mut self, name: &str, ty: BuiltinType) -> i32 {
        match self.scopes.last_mut() {
            Some(scope) => {
                let offset = scope.add_variable(name, ty);
                self.current_positive_offset += 1;
                offset
            }
            None => self.current_positive_offset,
        }
    }

    /// Resolves a name against the whole scope stack, innermost first.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.find(name))
    }

    /// Resolves a name against the top scope only, for redeclaration
    /// checks; a hit in an outer scope is legal shadowing.
    pub fn lookup_current(&self, name: &str) -> Option<&Symbol> {
        self.scopes.last().and_then(|scope| scope.find(name))
    }

    /// Number of currently open scopes.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
