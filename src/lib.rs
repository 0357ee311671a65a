//! Compiles a regular expression over a letter alphabet into a minimal
//! deterministic finite automaton and decides string membership with it.

pub use automaton::Automaton;
pub use error::CompileError;
pub use fsm::{Dfa, Edge, Input, Nfa, StateId};

mod automaton;
mod error;
mod fsm;
mod regex;
