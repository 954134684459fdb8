//! First-order term data structures
//!
//! This module provides the fundamental types for representing terms:
//! variables, constants, compounds, and substitutions.

pub mod substitution;
pub mod term;

// Re-export commonly used types
pub use substitution::Substitution;
pub use term::{Compound, Constant, Term, Variable};
