use super::model::{Dfa, DEAD_STATE};
use crate::fsm::StateId;

/// Table-walking simulator. Holds a read-only borrow of the automaton, so
/// any number of simulators can run against one table at the same time.
pub(crate) struct Simulator<'a> {
    dfa: &'a Dfa,
    state: StateId,
}

impl<'a> Simulator<'a> {
    pub(crate) fn new(dfa: &'a Dfa) -> Self {
        Self {
            dfa,
            state: dfa.start(),
        }
    }

    /// Consumes one character. Returns `false` when the walk is stuck: the
    /// character is not in the alphabet, or the transition leads into the
    /// dead state.
    pub(crate) fn feed(&mut self, input: char) -> bool {
        let Some(column) = self
            .dfa
            .alphabet()
            .iter()
            .position(|&letter| letter == input)
        else {
            return false;
        };

        match self.dfa.row(self.state)[column + 1] {
            DEAD_STATE => false,
            next => {
                self.state = next;
                true
            }
        }
    }

    pub(crate) fn is_accepting(&self) -> bool {
        self.dfa.is_accepting(self.state)
    }
}

impl Dfa {
    /// Whether the automaton accepts `input`. The empty string is accepted
    /// iff the start state is accepting; a stuck walk rejects immediately.
    pub fn accepts(&self, input: &str) -> bool {
        let mut simulator = Simulator::new(self);

        for ch in input.chars() {
            if !simulator.feed(ch) {
                return false;
            }
        }

        simulator.is_accepting()
    }
}
