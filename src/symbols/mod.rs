//! Symbol and function tables.
//!
//! This module holds the two lookup structures the checker drives during
//! its traversal:
//!
//! - A scope stack implementing shadowing-aware name resolution and
//!   stack-discipline offset allocation (parameters grow downward from -1,
//!   locals grow upward from 0)
//! - A flat function table mapping each function name to its single
//!   signature, since functions are neither nestable nor shadowable
//!
//! Both structures are owned by the checker for the duration of one
//! analysis run and are never shared.

pub mod function_table;
pub mod scope;
pub mod symbol_table;

#[cfg(test)]
mod tests;
