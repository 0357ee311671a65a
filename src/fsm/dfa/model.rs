use crate::fsm::StateId;
use std::collections::BTreeSet;

/// The reserved id of the dead state: the empty set of NFA states. It has no
/// row in the table, no outgoing transitions and is never accepting.
pub(crate) const DEAD_STATE: StateId = 0;

/// The id of the start state, in both the raw and the minimized table.
pub(crate) const START_STATE: StateId = 1;

/// Deterministic finite automaton as a state-transition table.
///
/// Row `i` describes state `i + 1` as `[state, next_1, .., next_k]` with one
/// target column per alphabet letter, in alphabet order. Both the subset
/// construction output and the minimized automaton use this shape. The value
/// is immutable once built; matching only reads it.
pub struct Dfa {
    table: Vec<Vec<StateId>>,
    start: StateId,
    accepting: BTreeSet<StateId>,
    alphabet: Vec<char>,
}

impl Dfa {
    pub(crate) fn new(
        table: Vec<Vec<StateId>>,
        start: StateId,
        accepting: BTreeSet<StateId>,
        alphabet: Vec<char>,
    ) -> Self {
        Self {
            table,
            start,
            accepting,
            alphabet,
        }
    }

    /// The state-transition table rows, in state-id order.
    pub fn table(&self) -> &[Vec<StateId>] {
        &self.table
    }

    /// The start state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Ids of the accepting states.
    pub fn accepting(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    /// Alphabet letters, in table column order.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Whether `state` is accepting.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    /// Row of the transition table describing `state`.
    pub(crate) fn row(&self, state: StateId) -> &[StateId] {
        let row = &self.table[state - 1];
        debug_assert_eq!(row[0], state);
        row
    }

    /// Iterator over all `(from, letter, to)` transitions, skipping those
    /// into the dead state so it is never drawn as a reachable node.
    pub fn edges(&self) -> impl Iterator<Item = (StateId, char, StateId)> + '_ {
        self.table.iter().flat_map(move |row| {
            self.alphabet
                .iter()
                .enumerate()
                .filter_map(move |(column, &letter)| {
                    let to = row[column + 1];
                    (to != DEAD_STATE).then_some((row[0], letter, to))
                })
        })
    }
}
