use super::model::{Edge, Input, Nfa};
use crate::{error::CompileError, fsm::StateId, regex::Symbol};

/// Sub-automaton under construction, identified by its entry and accept
/// state.
#[derive(Debug, Clone, Copy)]
struct Fragment {
    start: StateId,
    end: StateId,
}

/// Postfix symbol sequence to NFA compiler (Thompson construction).
pub(crate) struct Compiler {
    edges: Vec<Edge>,
    /// Stack of finished sub-automata, combined by the operator rules.
    fragments: Vec<Fragment>,
    alphabet: Vec<char>,
    /// Fresh state counter. Every symbol reserves the pair
    /// `(index, index + 1)` whether the rule uses both or not, which keeps
    /// state numbers monotonic and collision-free.
    index: StateId,
}

impl Compiler {
    pub(crate) fn new() -> Self {
        Self {
            edges: Vec::new(),
            fragments: Vec::new(),
            alphabet: Vec::new(),
            index: 0,
        }
    }

    /// Compiles a postfix symbol sequence into an [`Nfa`].
    ///
    /// # Fails
    ///
    /// With [`CompileError::MalformedExpression`] when an operator finds too
    /// few operands on the fragment stack, or more than one fragment remains
    /// at the end. Both are symptoms of an ill-formed input expression.
    pub(crate) fn compile(mut self, postfix: &[Symbol]) -> Result<Nfa, CompileError> {
        for &symbol in postfix {
            match symbol {
                Symbol::Literal(ch) => {
                    self.edge(self.index, Input::Literal(ch), self.index + 1);
                    if !self.alphabet.contains(&ch) {
                        self.alphabet.push(ch);
                    }
                }
                Symbol::Epsilon => self.edge(self.index, Input::Eps, self.index + 1),
                Symbol::Concat => {
                    let (first, second) = self.pop_pair()?;
                    self.edge(first.end, Input::Eps, second.start);
                    self.edge(self.index, Input::Eps, first.start);
                    self.edge(second.end, Input::Eps, self.index + 1);
                }
                Symbol::Alternate => {
                    let (first, second) = self.pop_pair()?;
                    self.edge(self.index, Input::Eps, first.start);
                    self.edge(self.index, Input::Eps, second.start);
                    self.edge(first.end, Input::Eps, self.index + 1);
                    self.edge(second.end, Input::Eps, self.index + 1);
                }
                Symbol::Star => {
                    let inner = self.pop()?;
                    self.edge(inner.end, Input::Eps, inner.start);
                    self.edge(self.index, Input::Eps, inner.start);
                    self.edge(inner.end, Input::Eps, self.index + 1);
                    self.edge(self.index, Input::Eps, self.index + 1);
                }

                Symbol::LeftParen | Symbol::RightParen => {
                    unreachable!("parentheses never reach the postfix sequence")
                }
            }

            self.fragments.push(Fragment {
                start: self.index,
                end: self.index + 1,
            });
            self.index += 2;
        }

        match (self.fragments.pop(), self.fragments.is_empty()) {
            (Some(Fragment { start, end }), true) => {
                Ok(Nfa::new(start, end, self.edges, self.alphabet))
            }
            _ => Err(CompileError::MalformedExpression),
        }
    }

    fn edge(&mut self, from: StateId, input: Input, to: StateId) {
        self.edges.push(Edge { from, input, to });
    }

    fn pop(&mut self) -> Result<Fragment, CompileError> {
        self.fragments.pop().ok_or(CompileError::MalformedExpression)
    }

    /// Pops the two operands of a binary operator; the second-pushed fragment
    /// comes off first.
    fn pop_pair(&mut self) -> Result<(Fragment, Fragment), CompileError> {
        let second = self.pop()?;
        let first = self.pop()?;
        Ok((first, second))
    }
}
