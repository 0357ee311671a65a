use super::model::{Dfa, DEAD_STATE, START_STATE};
use crate::fsm::StateId;
use std::collections::{BTreeSet, HashMap};

/// Merges behaviorally indistinguishable DFA states by iterative partition
/// refinement (Moore's algorithm).
///
/// Returns the minimized automaton together with the mapping from raw state
/// id to its class, for callers that relate the two tables (rendering, the
/// class of the dead state stays 0).
pub(crate) fn minimize(dfa: &Dfa) -> (Dfa, Vec<StateId>) {
    let table = dfa.table();
    let states = table.len();

    // Initial partition: dead state 0, accepting states 2, the rest 1.
    let mut previous = vec![DEAD_STATE; states + 1];
    for row in table {
        previous[row[0]] = if dfa.is_accepting(row[0]) { 2 } else { 1 };
    }

    // Refine until a fixed point: each row's signature is the current class
    // of every state it mentions (its own first); distinct signatures get
    // fresh class numbers in row order.
    loop {
        let mut current = vec![DEAD_STATE; states + 1];
        let mut signatures: HashMap<Vec<StateId>, StateId> = HashMap::new();

        for row in table {
            let signature: Vec<StateId> = row.iter().map(|&state| previous[state]).collect();
            let fresh = signatures.len() + 1;
            current[row[0]] = *signatures.entry(signature).or_insert(fresh);
        }

        if current == previous {
            break;
        }
        previous = current;
    }

    let mut classes = previous;

    // Make the start state's class 1 by an explicit swap instead of trusting
    // the enumeration order to put it there.
    let start_class = classes[dfa.start()];
    if start_class != START_STATE {
        for class in classes.iter_mut() {
            if *class == START_STATE {
                *class = start_class;
            } else if *class == start_class {
                *class = START_STATE;
            }
        }
    }

    let mut minimized: Vec<Vec<StateId>> = Vec::new();
    let mut accepting = BTreeSet::new();
    let mut merged = BTreeSet::new();

    for row in table {
        let class = classes[row[0]];
        if !merged.insert(class) {
            continue;
        }

        minimized.push(row.iter().map(|&state| classes[state]).collect());
        if dfa.is_accepting(row[0]) {
            accepting.insert(class);
        }
    }
    minimized.sort_by_key(|row| row[0]);

    (
        Dfa::new(minimized, START_STATE, accepting, dfa.alphabet().to_vec()),
        classes,
    )
}
