use super::Automaton;
use crate::error::CompileError;


macro_rules! assert_matches {
    ($automaton:expr, $($input:expr => $expected:expr),* $(,)?) => {
        $(assert_eq!($automaton.matches($input), $expected, "input: {:?}", $input);)*
    };
}

#[test]
fn suffix_language() {
    // Accepts exactly the strings whose second-to-last letter is `a`.
    let automaton = Automaton::new("(a|b)*a(a|b)").unwrap();
    assert_matches!(
        automaton,
        "bbaabbaabb" => false,
        "bbaabbaaab" => true,
        "a" => false,
        "" => false,
        "aa" => true,
        "ab" => true,
        "ba" => false,
        "bab" => true,
        "aab" => true,
        "abb" => false,
    );
}

#[test]
fn leading_and_trailing_closures() {
    let automaton = Automaton::new("a*(a|b)a(a|b)*").unwrap();
    assert_matches!(
        automaton,
        "aab" => true,
        "ba" => true,
        "aa" => true,
        "b" => false,
        "" => false,
    );
}

#[test]
fn alternation_of_concatenations() {
    let automaton = Automaton::new("ab|c(d*|a)").unwrap();
    assert_matches!(
        automaton,
        "ab" => true,
        "cddd" => true,
        "ca" => true,
        "c" => true,
        "cb" => false,
        "abc" => false,
        "d" => false,
    );
}

#[test]
fn epsilon_alternatives() {
    let automaton = Automaton::new("(a|ε)b").unwrap();
    assert_matches!(
        automaton,
        "b" => true,
        "ab" => true,
        "aab" => false,
        "a" => false,
    );

    assert!(Automaton::new("ε").unwrap().matches(""));
    assert!(!Automaton::new("ε").unwrap().matches("a"));
}

#[test]
fn raw_and_minimized_tables_agree() {
    for expr in ["(a|b)*a(a|b)", "a*(a|b)a(a|b)*", "ab|c(d*|a)", "(a|b|ε)*(a|b*)"] {
        let automaton = Automaton::new(expr).unwrap();
        for input in ["", "a", "b", "ab", "ba", "cddd", "bbaabbaabb", "abcd", "aabb"] {
            assert_eq!(
                automaton.dfa().accepts(input),
                automaton.minimized().accepts(input),
                "expression: {:?}, input: {:?}",
                expr,
                input
            );
        }
    }
}

#[test]
fn building_twice_is_deterministic() {
    let first = Automaton::new("(a|b)*a(a|b)").unwrap();
    let second = Automaton::new("(a|b)*a(a|b)").unwrap();

    assert_eq!(first.nfa().edges(), second.nfa().edges());
    assert_eq!(first.dfa().table(), second.dfa().table());
    assert_eq!(first.minimized().table(), second.minimized().table());
    assert_eq!(first.classes(), second.classes());
}

#[test]
fn classes_relate_raw_and_minimized_acceptance() {
    let automaton = Automaton::new("ab|c(d*|a)").unwrap();
    for row in automaton.dfa().table() {
        let state = row[0];
        assert_eq!(
            automaton.dfa().is_accepting(state),
            automaton.minimized().is_accepting(automaton.classes()[state])
        );
    }
}

#[test]
fn compile_errors_propagate() {
    assert_eq!(Automaton::new("").err(), Some(CompileError::EmptyExpression));
    assert_eq!(
        Automaton::new("a(b").err(),
        Some(CompileError::UnbalancedParentheses)
    );
    assert_eq!(
        Automaton::new("a+b").err(),
        Some(CompileError::UnknownSymbol { ch: '+', pos: 1 })
    );
    assert_eq!(
        Automaton::new("|a").err(),
        Some(CompileError::MalformedExpression)
    );
}

#[test]
fn exposes_every_stage_for_rendering() {
    let automaton = Automaton::new("(a|b)*a(a|b)").unwrap();

    assert!(!automaton.nfa().edges().is_empty());
    assert_eq!(automaton.alphabet(), ['a', 'b']);
    assert!(automaton.dfa().edges().count() > 0);
    assert!(automaton.minimized().to_dot().starts_with("digraph dfa {"));
    assert!(automaton.nfa().to_dot().starts_with("digraph nfa {"));
}
