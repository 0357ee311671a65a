pub use self::{
    dfa::Dfa,
    nfa::{Edge, Input, Nfa},
};

/// Identifier of an automaton state. Identity is purely positional; there is
/// no separate state object.
pub type StateId = usize;

pub(crate) mod dfa;
pub(crate) mod nfa;
