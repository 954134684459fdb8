//! Variable substitutions

use super::term::{Term, Variable};
use std::collections::HashMap;
use std::fmt;

/// A substitution mapping variable names to terms
///
/// Bindings may chain (X -> Y, Y -> a); application resolves chains to a
/// fixed point. The occurs check in the unifier keeps bindings acyclic,
/// so resolution always terminates on substitutions it produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    map: HashMap<String, Term>,
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            map: HashMap::new(),
        }
    }

    /// Add a variable -> term binding
    pub fn insert(&mut self, var: Variable, term: Term) {
        self.map.insert(var.name, term);
    }

    /// Add a binding by variable name
    pub fn insert_name(&mut self, name: impl Into<String>, term: Term) {
        self.map.insert(name.into(), term);
    }

    /// Get the term a variable name is bound to, if any
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.map.get(name)
    }

    /// Check if a variable name is bound
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over (variable name, bound term) pairs, in no fixed order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.map.iter().map(|(name, term)| (name.as_str(), term))
    }

    /// Fully resolve a variable name under this substitution.
    ///
    /// Follows binding chains until an unbound variable or a non-variable
    /// term is reached, then substitutes any remaining inner variables.
    /// Unbound names resolve to themselves.
    pub fn resolve(&self, name: &str) -> Term {
        match self.map.get(name) {
            Some(term) => term.apply_substitution(self),
            None => Term::var(name),
        }
    }

    /// Compose two substitutions: applying the result is equivalent to
    /// applying `self`, then `other`
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut result = Substitution::new();

        // Resolve each binding under self before applying other, so
        // chains inside self do not leak into the composed result
        for (name, term) in &self.map {
            let resolved = term.apply_substitution(self).apply_substitution(other);
            // A binding that resolves back to its own variable (e.g.
            // composing {X -> Y} with {Y -> X}) carries no information
            // and would make application recurse on itself
            if matches!(&resolved, Term::Variable(v) if v.name == *name) {
                continue;
            }
            result.insert_name(name.clone(), resolved);
        }

        // Add bindings from other that aren't in self
        for (name, term) in &other.map {
            if !self.map.contains_key(name) {
                result.insert_name(name.clone(), term.clone());
            }
        }

        result
    }
}

impl Term {
    /// Apply a substitution to this term, producing a new term.
    ///
    /// Every bound variable is replaced by its fully resolved value
    /// (binding chains are followed to a fixed point), unbound variables
    /// are copied unchanged, and compounds are rebuilt with substituted
    /// children. Total: this never fails, and applying the same
    /// substitution twice yields the same term as applying it once.
    pub fn apply_substitution(&self, subst: &Substitution) -> Term {
        match self {
            Term::Variable(v) => match subst.get(&v.name) {
                Some(bound) => bound.apply_substitution(subst),
                None => self.clone(),
            },
            Term::Constant(_) => self.clone(),
            Term::Compound(c) => Term::compound(
                c.functor(),
                c.args().map(|arg| arg.apply_substitution(subst)).collect(),
            ),
        }
    }
}

impl fmt::Display for Substitution {
    /// Prints `{X -> a, Y -> f(b)}` with names sorted for reproducible output
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        write!(f, "{{")?;
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} -> {}", name, self.map[*name])?;
        }
        write!(f, "}}")
    }
}
