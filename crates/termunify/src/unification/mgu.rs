//! Most General Unifier (MGU) computation

use crate::term::{Substitution, Term, Variable};
use std::collections::HashSet;
use std::fmt;

/// Result of a unification attempt
pub type UnificationResult = Result<Substitution, UnificationError>;

/// Ways two terms can fail to unify
///
/// These are expected outcomes, not faults: a failed unification reports
/// why and carries no partial bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnificationError {
    /// Occurs check failed - variable occurs in term
    OccursCheck(Variable, Term),
    /// Functor names don't match
    FunctorClash(String, String),
    /// Arities don't match
    ArityMismatch(usize, usize),
    /// Constant symbols don't match
    ConstantClash(String, String),
    /// Term shapes don't match (e.g. constant vs. compound)
    StructureMismatch(Term, Term),
}

impl fmt::Display for UnificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnificationError::OccursCheck(v, t) => {
                write!(f, "occurs check: {} occurs in {}", v, t)
            }
            UnificationError::FunctorClash(f1, f2) => {
                write!(f, "functor clash: {} vs {}", f1, f2)
            }
            UnificationError::ArityMismatch(a1, a2) => {
                write!(f, "arity mismatch: {} vs {}", a1, a2)
            }
            UnificationError::ConstantClash(c1, c2) => {
                write!(f, "constant clash: {} vs {}", c1, c2)
            }
            UnificationError::StructureMismatch(t1, t2) => {
                write!(f, "structure mismatch: {} vs {}", t1, t2)
            }
        }
    }
}

impl std::error::Error for UnificationError {}

/// Unify two terms, returning a most general unifier (MGU) if one exists.
///
/// On failure the working substitution is discarded; callers never see
/// partial bindings. Repeated calls with identical inputs produce
/// identical substitutions.
pub fn unify(term1: &Term, term2: &Term) -> UnificationResult {
    let mut subst = Substitution::new();
    unify_with_subst(term1, term2, &mut subst)?;
    Ok(subst)
}

/// Unify two terms against an existing working substitution
fn unify_with_subst(
    term1: &Term,
    term2: &Term,
    subst: &mut Substitution,
) -> Result<(), UnificationError> {
    // Resolve both sides first so every comparison sees the current
    // most-resolved shape. Bindings made while unifying argument i are
    // then visible when unifying argument i+1.
    let t1 = term1.apply_substitution(subst);
    let t2 = term2.apply_substitution(subst);

    match (&t1, &t2) {
        // Same term - nothing to do
        _ if t1 == t2 => Ok(()),

        // Two distinct unbound variables: bind the lexicographically
        // smaller name to the other, so the result is independent of
        // argument order
        (Term::Variable(v1), Term::Variable(v2)) => {
            let (bound, target) = if v1.name < v2.name { (v1, v2) } else { (v2, v1) };
            subst.insert(bound.clone(), Term::Variable(target.clone()));
            Ok(())
        }

        // Unbound variable vs. non-variable
        (Term::Variable(v), t) | (t, Term::Variable(v)) => {
            if occurs(&v.name, t, subst) {
                Err(UnificationError::OccursCheck(v.clone(), t.clone()))
            } else {
                // t is already fully resolved
                subst.insert(v.clone(), t.clone());
                Ok(())
            }
        }

        // Constant clash (equal constants were handled above)
        (Term::Constant(c1), Term::Constant(c2)) => Err(UnificationError::ConstantClash(
            c1.name.clone(),
            c2.name.clone(),
        )),

        // Compound terms
        (Term::Compound(c1), Term::Compound(c2)) => {
            if c1.functor() != c2.functor() {
                return Err(UnificationError::FunctorClash(
                    c1.functor().to_string(),
                    c2.functor().to_string(),
                ));
            }
            if c1.arity() != c2.arity() {
                return Err(UnificationError::ArityMismatch(c1.arity(), c2.arity()));
            }

            // Unify arguments pairwise, left to right
            for (arg1, arg2) in c1.args().zip(c2.args()) {
                unify_with_subst(arg1, arg2, subst)?;
            }
            Ok(())
        }

        // Constant vs. compound
        (Term::Constant(_), Term::Compound(_)) | (Term::Compound(_), Term::Constant(_)) => {
            Err(UnificationError::StructureMismatch(t1.clone(), t2.clone()))
        }
    }
}

/// Check if a variable name occurs in a term (occurs check).
///
/// Resolves through the working substitution, so a variable occurring
/// only via a chain of bindings is still detected.
fn occurs(var_name: &str, term: &Term, subst: &Substitution) -> bool {
    match term {
        Term::Variable(v) => {
            if v.name == var_name {
                return true;
            }
            match subst.get(&v.name) {
                Some(bound) => occurs(var_name, bound, subst),
                None => false,
            }
        }
        Term::Constant(_) => false,
        Term::Compound(c) => c.args().any(|arg| occurs(var_name, arg, subst)),
    }
}

/// Rename every variable in a term by appending a suffix, to keep the
/// variable sets of two terms apart before unifying
pub fn rename_variables(term: &Term, suffix: &str) -> Term {
    match term {
        Term::Variable(v) => Term::var(format!("{}_{}", v.name, suffix)),
        Term::Constant(_) => term.clone(),
        Term::Compound(c) => Term::compound(
            c.functor(),
            c.args().map(|arg| rename_variables(arg, suffix)).collect(),
        ),
    }
}

/// Get all variables in a term
pub fn variables_in_term(term: &Term) -> HashSet<Variable> {
    let mut vars = HashSet::new();
    term.collect_variables(&mut vars);
    vars
}
