//! Termunify: first-order term unification
//!
//! This library computes most general unifiers (MGUs) for first-order
//! terms built from variables, constants, and functor/arity compounds.
//! It also provides one-way matching and substitution application.
//!
//! Terms are immutable once built; unification and substitution always
//! produce new terms. Recursion depth is bounded by term nesting depth,
//! so pathologically deep terms can exhaust the call stack.

pub mod term;
pub mod unification;

// Re-export commonly used types from term
pub use term::{Compound, Constant, Substitution, Term, Variable};

pub use unification::{
    match_term, rename_variables, unify, variables_in_term, UnificationError, UnificationResult,
};
