use super::model::{Dfa, DEAD_STATE, START_STATE};
use crate::fsm::{nfa::Nfa, StateId};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Converts the NFA into a DFA via subset construction.
///
/// Every DFA state corresponds to one set of NFA states, identified by its
/// canonical sorted form, so equal sets always receive equal ids. The empty
/// set is pre-seeded as the dead state 0 and never explored; the epsilon
/// closure of the NFA start state becomes state 1. Discovery order assigns
/// the remaining ids, which makes the table deterministic for a given NFA.
pub(crate) fn subset_construction(nfa: &Nfa) -> Dfa {
    let mut ids: IndexMap<Vec<StateId>, StateId> = IndexMap::new();
    ids.insert(Vec::new(), DEAD_STATE);

    let start: Vec<StateId> = nfa.eps_closure(nfa.start()).iter().copied().collect();
    ids.insert(start.clone(), START_STATE);

    let mut discovered = vec![start];
    let mut table: Vec<Vec<StateId>> = Vec::new();
    let mut accepting = BTreeSet::new();

    let mut work = 0;
    while work < discovered.len() {
        let current = discovered[work].clone();
        let id = work + 1;
        work += 1;

        if current.contains(&nfa.end()) {
            accepting.insert(id);
        }

        let mut row = Vec::with_capacity(nfa.alphabet().len() + 1);
        row.push(id);

        for &symbol in nfa.alphabet() {
            let mut next = BTreeSet::new();
            for &state in &current {
                for target in nfa.moves(state, symbol) {
                    next.extend(nfa.eps_closure(target).iter().copied());
                }
            }

            let next: Vec<StateId> = next.into_iter().collect();
            let next_id = match ids.get(&next) {
                Some(&known) => known,
                None => {
                    let fresh = ids.len();
                    ids.insert(next.clone(), fresh);
                    discovered.push(next);
                    fresh
                }
            };
            row.push(next_id);
        }

        table.push(row);
    }

    Dfa::new(table, START_STATE, accepting, nfa.alphabet().to_vec())
}

#[cfg(test)]
mod tests {
    use super::subset_construction;
    use crate::{fsm::{dfa::Dfa, nfa::Compiler}, regex::Parser};

    fn dfa(input: &str) -> Dfa {
        let nfa = Compiler::new()
            .compile(&Parser::new(input).parse().unwrap())
            .unwrap();
        subset_construction(&nfa)
    }

    #[test]
    fn single_literal() {
        let dfa = dfa("a");
        assert_eq!(dfa.table(), [vec![1, 2], vec![2, 0]]);
        assert_eq!(dfa.start(), 1);
        assert!(dfa.is_accepting(2));
        assert!(!dfa.is_accepting(1));
    }

    #[test]
    fn alternation() {
        let dfa = dfa("a|b");
        assert_eq!(dfa.table(), [vec![1, 2, 3], vec![2, 0, 0], vec![3, 0, 0]]);
        assert_eq!(
            dfa.accepting().iter().copied().collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[test]
    fn state_ids_are_dense_and_in_row_order() {
        let dfa = dfa("(a|b)*a(a|b)");
        for (index, row) in dfa.table().iter().enumerate() {
            assert_eq!(row[0], index + 1);
            assert_eq!(row.len(), dfa.alphabet().len() + 1);
        }
    }

    #[test]
    fn dead_state_has_no_row_and_never_accepts() {
        let dfa = dfa("ab|c(d*|a)");
        assert!(dfa.table().iter().all(|row| row[0] != 0));
        assert!(!dfa.is_accepting(0));
        assert!(dfa.edges().all(|(from, _, to)| from != 0 && to != 0));
    }

    #[test]
    fn targets_stay_within_the_table() {
        let dfa = dfa("a*(a|b)a(a|b)*");
        let states = dfa.table().len();
        for row in dfa.table() {
            assert!(row[1..].iter().all(|&target| target <= states));
        }
    }
}
