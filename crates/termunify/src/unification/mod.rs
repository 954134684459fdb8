//! Unification and one-way matching for first-order terms

mod matching;
mod mgu;


pub use matching::match_term;
pub use mgu::{unify, UnificationError, UnificationResult};

// Re-export commonly used functions
pub use mgu::{rename_variables, variables_in_term};
