use thiserror::Error;

/// Reason a regular expression failed to compile.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    /// The expression contains no symbols at all.
    #[error("empty expression")]
    EmptyExpression,

    /// A character outside the letter and operator set.
    #[error("unknown symbol `{ch}` at position {pos}")]
    UnknownSymbol { ch: char, pos: usize },

    /// A parenthesis without a matching counterpart.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    /// The expression is syntactically broken in some other way, for example
    /// an alternation with a missing operand.
    #[error("malformed expression")]
    MalformedExpression,
}
