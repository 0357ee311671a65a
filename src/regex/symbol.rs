/// Single symbol of a regular expression.
///
/// Tokenization produces literals, the epsilon marker and the written
/// operators; the normalizer additionally inserts `Concat` where two adjacent
/// symbols are implicitly concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Symbol {
    /// A single alphabet letter.
    Literal(char),
    /// The explicit epsilon marker (`ε`).
    Epsilon,
    /// Concatenation, made explicit by the normalizer.
    Concat,
    /// Alternation (`|`).
    Alternate,
    /// Kleene closure (`*`).
    Star,
    LeftParen,
    RightParen,
}

impl Symbol {
    /// Operator priority used by the shunting translation: alternation binds
    /// weakest, closure strongest.
    pub(crate) fn priority(self) -> u8 {
        match self {
            Symbol::Alternate => 0,
            Symbol::Concat => 1,
            Symbol::Star => 2,

            _ => unreachable!("priority is only defined for operators (`{:?}`)", self),
        }
    }

    /// Whether the symbol can end an implicitly concatenated unit.
    pub(crate) fn ends_unit(self) -> bool {
        matches!(
            self,
            Symbol::Literal(_) | Symbol::Epsilon | Symbol::RightParen | Symbol::Star
        )
    }

    /// Whether the symbol can begin an implicitly concatenated unit.
    pub(crate) fn starts_unit(self) -> bool {
        matches!(self, Symbol::Literal(_) | Symbol::Epsilon | Symbol::LeftParen)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Literal(ch) => write!(f, "{}", ch),
            Symbol::Epsilon => write!(f, "ε"),
            Symbol::Concat => write!(f, "·"),
            Symbol::Alternate => write!(f, "|"),
            Symbol::Star => write!(f, "*"),
            Symbol::LeftParen => write!(f, "("),
            Symbol::RightParen => write!(f, ")"),
        }
    }
}
