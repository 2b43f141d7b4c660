//! Human-readable scope trace output.
//!
//! On a successful run the analyzer can render the scopes it walked and
//! the symbols and functions it registered, as a debugging aid for the
//! code generator's frame layout.

pub mod output;
