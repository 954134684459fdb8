//! Runs a fixed list of unification scenarios and prints the outcomes.
//!
//! ```text
//! Test 1 (var-const): X  ~  a => success {X -> a}
//! ...
//! Summary: 11/11 outcomes matched expectations.
//! ```

use termunify::{unify, Term};

struct Scenario {
    name: &'static str,
    t1: Term,
    t2: Term,
    expect_success: bool,
}

fn scenarios() -> Vec<Scenario> {
    let case = |name, t1, t2, expect_success| Scenario {
        name,
        t1,
        t2,
        expect_success,
    };

    vec![
        case("var-const", Term::var("X"), Term::constant("a"), true),
        case("const-var", Term::constant("b"), Term::var("X"), true),
        case(
            "const mismatch",
            Term::constant("a"),
            Term::constant("b"),
            false,
        ),
        case(
            "compound match",
            Term::compound("f", vec![Term::var("X"), Term::constant("b")]),
            Term::compound("f", vec![Term::constant("a"), Term::constant("b")]),
            true,
        ),
        case(
            "functor mismatch",
            Term::compound("f", vec![Term::var("X")]),
            Term::compound("g", vec![Term::var("X")]),
            false,
        ),
        case(
            "arity mismatch",
            Term::compound("f", vec![Term::var("X")]),
            Term::compound("f", vec![Term::var("X"), Term::var("Y")]),
            false,
        ),
        case(
            "occurs check",
            Term::var("X"),
            Term::compound("f", vec![Term::var("X")]),
            false,
        ),
        case(
            "deep cons",
            Term::compound("cons", vec![Term::var("H"), Term::var("T")]),
            Term::compound(
                "cons",
                vec![
                    Term::constant("1"),
                    Term::compound("cons", vec![Term::constant("2"), Term::constant("nil")]),
                ],
            ),
            true,
        ),
        case(
            "var-compound",
            Term::var("X"),
            Term::compound("g", vec![Term::constant("a"), Term::var("Y")]),
            true,
        ),
        case("two vars", Term::var("X"), Term::var("Y"), true),
        case(
            "pair mismatch",
            Term::compound("pair", vec![Term::constant("a"), Term::constant("b")]),
            Term::compound("pair", vec![Term::constant("a"), Term::constant("c")]),
            false,
        ),
    ]
}

fn main() {
    let scenarios = scenarios();
    let total = scenarios.len();
    let mut passed = 0;

    for (i, scenario) in scenarios.iter().enumerate() {
        let result = unify(&scenario.t1, &scenario.t2);
        print!(
            "Test {} ({}): {}  ~  {} => ",
            i + 1,
            scenario.name,
            scenario.t1,
            scenario.t2
        );
        match &result {
            Ok(subst) => println!("success {}", subst),
            Err(reason) => println!("failure ({})", reason),
        }
        if result.is_ok() == scenario.expect_success {
            passed += 1;
        }
    }

    println!("Summary: {}/{} outcomes matched expectations.", passed, total);
}
