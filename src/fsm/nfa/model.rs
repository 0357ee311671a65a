use crate::fsm::StateId;
use std::collections::BTreeSet;

/// Edge label: a single alphabet letter or the epsilon (no-input) marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Regular input consuming one character.
    Literal(char),
    /// Epsilon input, meaning the transition can be made without input.
    Eps,
}

/// Directed labeled edge of the NFA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: StateId,
    pub input: Input,
    pub to: StateId,
}

/// Non-deterministic finite automaton produced by Thompson construction.
///
/// States are the dense range `[0, size)` with a single entry state `start`
/// and a single accept state `end`. The adjacency matrix and the per-state
/// epsilon closures are derived once at construction time; the whole value is
/// read-only afterwards, so it can be shared between concurrent readers.
pub struct Nfa {
    start: StateId,
    end: StateId,
    size: usize,
    /// Edge list, stable-sorted by source state for deterministic iteration.
    edges: Vec<Edge>,
    /// Distinct non-epsilon labels in first-seen order. The order fixes the
    /// column layout of the DFA transition table.
    alphabet: Vec<char>,
    /// `matrix[from][to]` holds the label between the ordered pair, if any.
    /// Construction never produces two labels for the same pair.
    matrix: Vec<Vec<Option<Input>>>,
    /// Epsilon closure of every state, the state itself included.
    closures: Vec<BTreeSet<StateId>>,
}

impl Nfa {
    pub(crate) fn new(start: StateId, end: StateId, mut edges: Vec<Edge>, alphabet: Vec<char>) -> Self {
        edges.sort_by_key(|edge| edge.from);

        // The accept state always carries the highest number handed out by
        // the construction.
        let size = end + 1;

        let mut matrix = vec![vec![None; size]; size];
        for edge in &edges {
            matrix[edge.from][edge.to] = Some(edge.input);
        }

        let closures = (0..size).map(|state| Self::close(&matrix, state)).collect();

        Self {
            start,
            end,
            size,
            edges,
            alphabet,
            matrix,
            closures,
        }
    }

    /// Epsilon closure of a single state: worklist traversal over epsilon
    /// edges only. Every state is expanded at most once, so epsilon cycles
    /// terminate and the walk is bounded by the state count.
    fn close(matrix: &[Vec<Option<Input>>], state: StateId) -> BTreeSet<StateId> {
        let mut closure = BTreeSet::from([state]);
        let mut pending = vec![state];

        while let Some(current) = pending.pop() {
            for (next, label) in matrix[current].iter().enumerate() {
                if matches!(label, Some(Input::Eps)) && closure.insert(next) {
                    pending.push(next);
                }
            }
        }

        closure
    }

    /// The entry state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// The single accept state.
    pub fn end(&self) -> StateId {
        self.end
    }

    /// Number of states.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All edges, sorted by source state.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Alphabet letters in first-seen order.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Set of states reachable from `state` via epsilon edges alone,
    /// including `state` itself.
    pub fn eps_closure(&self, state: StateId) -> &BTreeSet<StateId> {
        &self.closures[state]
    }

    /// States directly reachable from `from` by consuming `symbol`.
    pub(crate) fn moves(&self, from: StateId, symbol: char) -> impl Iterator<Item = StateId> + '_ {
        self.matrix[from]
            .iter()
            .enumerate()
            .filter_map(move |(to, label)| (*label == Some(Input::Literal(symbol))).then_some(to))
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Literal(ch) => write!(f, "{}", ch),
            Input::Eps => write!(f, "ε"),
        }
    }
}
