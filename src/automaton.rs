use crate::{
    error::CompileError,
    fsm::{
        dfa::{minimize, subset_construction, Dfa},
        nfa::{Compiler, Nfa},
        StateId,
    },
    regex::Parser,
};

/// Compiled automaton for one regular expression.
///
/// [`Automaton::new`] runs the whole pipeline once — normalization, postfix
/// translation, Thompson construction, subset construction, minimization —
/// and the resulting value is immutable. Match queries only read the tables,
/// so one automaton can serve any number of concurrent matches.
pub struct Automaton {
    nfa: Nfa,
    dfa: Dfa,
    minimized: Dfa,
    classes: Vec<StateId>,
}

impl Automaton {
    /// Builds the automaton for `pattern`: letters, `ε`, `|`, `*` and
    /// parentheses for grouping.
    ///
    /// # Fails
    ///
    /// With a [`CompileError`] when the expression is empty, contains a
    /// character outside the letter/operator set, or is not well formed. No
    /// partial automaton is ever returned.
    pub fn new(pattern: &str) -> Result<Self, CompileError> {
        let postfix = Parser::new(pattern).parse()?;
        let nfa = Compiler::new().compile(&postfix)?;
        let dfa = subset_construction(&nfa);
        let (minimized, classes) = minimize(&dfa);

        Ok(Self {
            nfa,
            dfa,
            minimized,
            classes,
        })
    }

    /// Whether `input` is in the language of the expression, decided on the
    /// minimized transition table. Never fails; unknown characters simply
    /// reject.
    pub fn matches(&self, input: &str) -> bool {
        self.minimized.accepts(input)
    }

    /// The Thompson NFA: edge list, start/accept state ids and alphabet.
    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    /// The raw subset-construction DFA.
    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    /// The minimized DFA.
    pub fn minimized(&self) -> &Dfa {
        &self.minimized
    }

    /// Mapping from raw DFA state id to its minimized class; entry 0 is the
    /// dead state and always maps to 0.
    pub fn classes(&self) -> &[StateId] {
        &self.classes
    }

    /// Alphabet letters in first-seen order, shared by every stage.
    pub fn alphabet(&self) -> &[char] {
        self.nfa.alphabet()
    }
}

#[cfg(test)]
mod tests;
