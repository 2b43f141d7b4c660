//! The built-in type set of the language.
//!
//! The language has exactly five types and no way to define more, so the
//! whole type system is a single `Copy` enum plus a handful of
//! compatibility predicates used by the checker:
//!
//! - `is_numeric` - int and byte, the operand set of arithmetic and
//!   relational operators
//! - `is_assignable_to` - exact match, except byte widens implicitly to int
//! - `is_castable_to` - explicit casts between int, byte and bool

use std::fmt::Display;

/// The closed set of built-in types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinType {
    Void,
    Bool,
    Byte,
    Int,
    String,
}

impl BuiltinType {
    /// Returns whether the type is a numeric type (int or byte).
    pub fn is_numeric(self) -> bool {
        matches!(self, BuiltinType::Int | BuiltinType::Byte)
    }

    /// Returns whether a value of this type may be assigned to a slot of
    /// type `target` without an explicit cast.
    ///
    /// Bytes widen to int implicitly; every other combination requires an
    /// exact match.
    pub fn is_assignable_to(self, target: BuiltinType) -> bool {
        self == target || (self == BuiltinType::Byte && target == BuiltinType::Int)
    }

    /// Returns whether an explicit cast from this type to `target` is legal.
    ///
    /// Casts are only defined within the convertible set {int, byte, bool};
    /// string and void never take part in a cast.
    pub fn is_castable_to(self, target: BuiltinType) -> bool {
        self.is_convertible() && target.is_convertible()
    }

    fn is_convertible(self) -> bool {
        matches!(
            self,
            BuiltinType::Int | BuiltinType::Byte | BuiltinType::Bool
        )
    }
}

impl Display for BuiltinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BuiltinType::Void => "void",
            BuiltinType::Bool => "bool",
            BuiltinType::Byte => "byte",
            BuiltinType::Int => "int",
            BuiltinType::String => "string",
        };
        write!(f, "{}", name)
    }
}
