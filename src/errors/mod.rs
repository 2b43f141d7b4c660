//! Error types and error handling for the analyzer.
//!
//! This module defines the diagnostics the analyzer can produce. It
//! includes:
//!
//! - An error structure pairing each diagnostic with its source line
//! - One variant per static-semantics violation, with the fixed message
//!   templates the driver prints verbatim
//! - Variants for lexical and syntax errors so the upstream stages can
//!   report through the same channel

pub mod errors;

#[cfg(test)]
mod tests;
