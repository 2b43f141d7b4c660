//! The global function table.
//!
//! Functions live in a single flat map independent of the scope stack:
//! the language has no nested functions, no shadowing of function names and
//! no overloading, so one name maps to exactly one signature. The table is
//! populated in a first pass over the program (making forward references
//! and mutual recursion resolve) and never mutated while bodies are
//! checked.

use std::collections::HashMap;

use crate::ast::types::BuiltinType;
use crate::errors::errors::{Error, ErrorImpl};

/// One function's signature.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionEntry {
    pub name: String,
    pub return_type: BuiltinType,
    /// Parameter types in declaration order.
    pub params: Vec<BuiltinType>,
}

/// Flat name-to-signature map.
#[derive(Debug, Default)]
pub struct FunctionTable {
    functions: HashMap<String, FunctionEntry>,
}

impl FunctionTable {
    pub fn new() -> Self {
        FunctionTable {
            functions: HashMap::new(),
        }
    }

    /// Records a signature. Returns false if the name is already taken;
    /// the language has no overloading, so a second signature for the same
    /// name is a redefinition.
    pub fn insert(
        &mut self,
        name: &str,
        return_type: BuiltinType,
        params: Vec<BuiltinType>,
    ) -> bool {
        if self.functions.contains_key(name) {
            return false;
        }
        self.functions.insert(
            name.to_string(),
            FunctionEntry {
                name: name.to_string(),
                return_type,
                params,
            },
        );
        true
    }

    pub fn lookup(&self, name: &str) -> Option<&FunctionEntry> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Checks a call's actual argument types positionally against the
    /// stored signature and returns the function's return type.
    ///
    /// Byte arguments widen to int formals like any assignment; every other
    /// arity or positional mismatch is reported as one prototype-mismatch
    /// diagnostic naming the expected parameter list.
    pub fn validate_call(
        &self,
        name: &str,
        actual: &[BuiltinType],
        line: u32,
    ) -> Result<BuiltinType, Error> {
        let Some(function) = self.lookup(name) else {
            return Err(Error::new(
                ErrorImpl::UndefinedFunction {
                    id: name.to_string(),
                },
                line,
            ));
        };

        let matches = actual.len() == function.params.len()
            && actual
                .iter()
                .zip(function.params.iter())
                .all(|(arg, param)| arg.is_assignable_to(*param));

        if !matches {
            return Err(Error::new(
                ErrorImpl::PrototypeMismatch {
                    id: name.to_string(),
                    expected: function.params.clone(),
                },
                line,
            ));
        }

        Ok(function.return_type)
    }
}
