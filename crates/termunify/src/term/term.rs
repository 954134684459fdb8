//! Terms: variables, constants, and functor/arity compounds

use serde::{Deserialize, Serialize};
use std::fmt;

/// A logic variable, identified by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

/// An atomic constant symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
}

impl Constant {
    pub fn new(name: impl Into<String>) -> Self {
        Constant { name: name.into() }
    }
}

/// A functor applied to an ordered list of argument terms
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Compound {
    functor: String,
    args: Vec<Term>,
}

impl Compound {
    pub fn new(functor: impl Into<String>, args: Vec<Term>) -> Self {
        Compound {
            functor: functor.into(),
            args,
        }
    }

    /// The functor name (e.g. `f` in `f(X,Y)`)
    pub fn functor(&self) -> &str {
        &self.functor
    }

    /// Number of argument terms
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Access the `index`-th argument term.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.arity()`. An out-of-range index is caller
    /// misuse, never a unification outcome.
    pub fn arg(&self, index: usize) -> &Term {
        &self.args[index]
    }

    /// Iterate over the argument terms in order
    pub fn args(&self) -> impl Iterator<Item = &Term> {
        self.args.iter()
    }
}

/// A first-order term
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
    Compound(Compound),
}

impl Term {
    /// Build a variable term
    pub fn var(name: impl Into<String>) -> Term {
        Term::Variable(Variable::new(name))
    }

    /// Build a constant term
    pub fn constant(name: impl Into<String>) -> Term {
        Term::Constant(Constant::new(name))
    }

    /// Build a compound term from a functor and its arguments
    pub fn compound(functor: impl Into<String>, args: Vec<Term>) -> Term {
        Term::Compound(Compound::new(functor, args))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Term::Constant(_))
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Term::Compound(_))
    }

    /// Get all variables in this term, in left-to-right order of first use
    pub fn variables(&self) -> Vec<Variable> {
        match self {
            Term::Variable(v) => vec![v.clone()],
            Term::Constant(_) => vec![],
            Term::Compound(c) => c.args().flat_map(|arg| arg.variables()).collect(),
        }
    }

    /// Collect all variables in this term into a set
    pub fn collect_variables(&self, vars: &mut std::collections::HashSet<Variable>) {
        match self {
            Term::Variable(v) => {
                vars.insert(v.clone());
            }
            Term::Constant(_) => {}
            Term::Compound(c) => {
                for arg in c.args() {
                    arg.collect_variables(vars);
                }
            }
        }
    }

    /// True when the term contains no variables
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Constant(_) => true,
            Term::Compound(c) => c.args().all(|arg| arg.is_ground()),
        }
    }
}

// Display implementations for pretty printing

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.functor)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Constant(c) => write!(f, "{}", c),
            Term::Compound(c) => write!(f, "{}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_is_exclusive() {
        let terms = [
            Term::var("X"),
            Term::constant("a"),
            Term::compound("f", vec![Term::var("X")]),
        ];
        for t in &terms {
            let flags = [t.is_variable(), t.is_constant(), t.is_compound()];
            assert_eq!(flags.iter().filter(|&&b| b).count(), 1);
        }
    }

    #[test]
    fn test_clone_is_deep() {
        let t = Term::compound("f", vec![Term::var("X"), Term::constant("a")]);
        let copy = t.clone();
        assert_eq!(t, copy);
        // Dropping the original must leave the copy intact
        drop(t);
        assert_eq!(copy.to_string(), "f(X,a)");
    }

    #[test]
    fn test_compound_accessors() {
        let c = Compound::new("pair", vec![Term::constant("a"), Term::var("Y")]);
        assert_eq!(c.functor(), "pair");
        assert_eq!(c.arity(), 2);
        assert_eq!(c.arg(0), &Term::constant("a"));
        assert_eq!(c.arg(1), &Term::var("Y"));
    }

    #[test]
    #[should_panic]
    fn test_arg_out_of_range_panics() {
        let c = Compound::new("f", vec![Term::constant("a")]);
        let _ = c.arg(1);
    }

    #[test]
    fn test_variables() {
        let t = Term::compound(
            "f",
            vec![
                Term::var("X"),
                Term::compound("g", vec![Term::constant("a"), Term::var("Y")]),
            ],
        );
        let names: Vec<String> = t.variables().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["X", "Y"]);
        assert!(!t.is_ground());
        assert!(Term::constant("a").is_ground());
    }

    #[test]
    fn test_display() {
        let t = Term::compound(
            "cons",
            vec![
                Term::constant("1"),
                Term::compound("cons", vec![Term::constant("2"), Term::constant("nil")]),
            ],
        );
        assert_eq!(t.to_string(), "cons(1,cons(2,nil))");
    }
}
