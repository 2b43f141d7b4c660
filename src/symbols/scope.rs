//! A single lexical scope.
//!
//! Each scope records its symbols in insertion order together with two
//! independent offset counters: parameters are allocated descending
//! offsets, locals ascending ones. The counters' initial values are kept
//! alongside the current ones so the enclosing scope can be restored
//! exactly when this scope ends.

use crate::ast::types::BuiltinType;

/// A named slot in a stack frame.
///
/// Symbols are created when a variable or parameter is registered and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub ty: BuiltinType,
    pub offset: i32,
}

impl Symbol {
    pub fn new(name: impl Into<String>, ty: BuiltinType, offset: i32) -> Self {
        Symbol {
            name: name.into(),
            ty,
            offset,
        }
    }
}

/// One lexical block's symbols and offset-allocation state.
#[derive(Debug)]
pub struct Scope {
    symbols: Vec<Symbol>,
    current_negative_offset: i32,
    current_positive_offset: i32,
    initial_positive_offset: i32,
    initial_negative_offset: i32,
}

impl Scope {
    /// Creates a scope seeded with the enclosing frame's counters, so a
    /// nested scope continues the enclosing function's layout rather than
    /// restarting it.
    pub fn new(initial_positive_offset: i32, initial_negative_offset: i32) -> Self {
        Scope {
            symbols: Vec::new(),
            current_negative_offset: initial_negative_offset,
            current_positive_offset: initial_positive_offset,
            initial_positive_offset,
            initial_negative_offset,
        }
    }

    /// Registers a parameter at the next descending offset and returns the
    /// offset it was assigned.
    ///
    /// No duplicate check happens here; redeclaration detection is the
    /// checker's job against the full visible scope stack.
    pub fn add_param(&mut self, name: &str, ty: BuiltinType) -> i32 {
        let offset = self.current_negative_offset;
        self.symbols.push(Symbol::new(name, ty, offset));
        self.current_negative_offset -= 1;
        offset
    }

    /// Registers a local variable at the next ascending offset and returns
    /// the offset it was assigned.
    pub fn add_variable(&mut self, name: &str, ty: BuiltinType) -> i32 {
        let offset = self.current_positive_offset;
        self.symbols.push(Symbol::new(name, ty, offset));
        self.current_positive_offset += 1;
        offset
    }

    /// Looks up a symbol declared in this scope specifically.
    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|symbol| symbol.name == name)
    }

    /// The positive counter value captured when this scope was created.
    pub fn initial_positive_offset(&self) -> i32 {
        self.initial_positive_offset
    }

    /// The negative counter value captured when this scope was created.
    pub fn initial_negative_offset(&self) -> i32 {
        self.initial_negative_offset
    }
}
