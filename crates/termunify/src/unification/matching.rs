//! One-way matching

use super::mgu::UnificationError;
use crate::term::{Substitution, Term};

/// One-way match: find a substitution σ such that pattern·σ = term.
/// Only variables in the pattern can be substituted; variables in the
/// target are treated as opaque symbols.
pub fn match_term(pattern: &Term, term: &Term) -> Result<Substitution, UnificationError> {
    let mut subst = Substitution::new();
    match_with_subst(pattern, term, &mut subst)?;
    Ok(subst)
}

fn match_with_subst(
    pattern: &Term,
    term: &Term,
    subst: &mut Substitution,
) -> Result<(), UnificationError> {
    match (pattern, term) {
        // Variable in pattern matches anything, but consistently
        (Term::Variable(v), t) => {
            if let Some(bound) = subst.get(&v.name) {
                if bound == t {
                    Ok(())
                } else {
                    Err(UnificationError::StructureMismatch(
                        bound.clone(),
                        t.clone(),
                    ))
                }
            } else {
                subst.insert(v.clone(), t.clone());
                Ok(())
            }
        }
        // Constants must match exactly
        (Term::Constant(c1), Term::Constant(c2)) => {
            if c1.name == c2.name {
                Ok(())
            } else {
                Err(UnificationError::ConstantClash(
                    c1.name.clone(),
                    c2.name.clone(),
                ))
            }
        }
        // Compounds must have the same functor and arity
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

            for (arg1, arg2) in c1.args().zip(c2.args()) {
                match_with_subst(arg1, arg2, subst)?;
            }
            Ok(())
        }
        // All other combinations fail, including constant or compound
        // patterns against a target variable
        (p, t) => Err(UnificationError::StructureMismatch(p.clone(), t.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_variable() {
        let x = Term::var("X");
        let a = Term::constant("a");

        let subst = match_term(&x, &a).unwrap();
        assert_eq!(x.apply_substitution(&subst), a);
    }

    #[test]
    fn test_match_compound() {
        let pattern = Term::compound("f", vec![Term::var("X"), Term::var("Y")]);
        let term = Term::compound("f", vec![Term::constant("a"), Term::constant("b")]);

        let subst = match_term(&pattern, &term).unwrap();
        assert_eq!(pattern.apply_substitution(&subst), term);
    }

    #[test]
    fn test_no_match_variable_in_term() {
        let a = Term::constant("a");
        let x = Term::var("X");

        // A constant pattern cannot match a target variable
        assert!(match_term(&a, &x).is_err());
    }

    #[test]
    fn test_no_match_inconsistent_variable() {
        // mult(inv(X),X) must not match mult(inv(Y),mult(Y,Z)):
        // X cannot be both Y and mult(Y,Z)
        let pattern = Term::compound(
            "mult",
            vec![
                Term::compound("inv", vec![Term::var("X")]),
                Term::var("X"),
            ],
        );
        let term = Term::compound(
            "mult",
            vec![
                Term::compound("inv", vec![Term::var("Y")]),
                Term::compound("mult", vec![Term::var("Y"), Term::var("Z")]),
            ],
        );

        assert!(match_term(&pattern, &term).is_err());
    }

    #[test]
    fn test_match_is_not_symmetric() {
        let x = Term::var("X");
        let c = Term::constant("c");

        assert!(match_term(&x, &c).is_ok());
        assert!(match_term(&c, &x).is_err());
    }
}
