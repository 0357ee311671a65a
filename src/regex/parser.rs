use super::symbol::Symbol;
use crate::error::CompileError;

/// Expression front end: validates the input, makes implicit concatenation
/// explicit and translates the infix expression to postfix form.
pub(crate) struct Parser<'a> {
    /// Raw infix expression being parsed.
    input: &'a str,
}

impl<'a> Parser<'a> {
    /// Creates a new parser from the `input` expression.
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Parses the input into a postfix symbol sequence, ready for Thompson
    /// construction. The output never contains parentheses.
    pub(crate) fn parse(&self) -> Result<Vec<Symbol>, CompileError> {
        let symbols = self.tokenize()?;
        Self::to_postfix(Self::normalize(symbols))
    }

    /// Maps every input character onto a [`Symbol`]. Only letters, the
    /// epsilon marker and the written operators are accepted.
    fn tokenize(&self) -> Result<Vec<Symbol>, CompileError> {
        if self.input.is_empty() {
            return Err(CompileError::EmptyExpression);
        }

        self.input
            .chars()
            .enumerate()
            .map(|(pos, ch)| match ch {
                'ε' => Ok(Symbol::Epsilon),
                '|' => Ok(Symbol::Alternate),
                '*' => Ok(Symbol::Star),
                '(' => Ok(Symbol::LeftParen),
                ')' => Ok(Symbol::RightParen),

                ch if ch.is_alphabetic() => Ok(Symbol::Literal(ch)),
                ch => Err(CompileError::UnknownSymbol { ch, pos }),
            })
            .collect()
    }

    /// Inserts the explicit concatenation operator wherever two adjacent
    /// symbols are implicitly concatenated (`ab`, `a(`, `)a`, `)(`, `*(`,
    /// `*a` and the epsilon variants thereof).
    fn normalize(symbols: Vec<Symbol>) -> Vec<Symbol> {
        let mut normalized: Vec<Symbol> = Vec::with_capacity(symbols.len() * 2);

        for symbol in symbols {
            if let Some(&previous) = normalized.last() {
                if previous.ends_unit() && symbol.starts_unit() {
                    normalized.push(Symbol::Concat);
                }
            }
            normalized.push(symbol);
        }

        normalized
    }

    /// Operator-precedence (shunting) translation from infix to postfix,
    /// left-associative. Parenthesis mismatches surface here as an under- or
    /// overfull symbol stack.
    fn to_postfix(symbols: Vec<Symbol>) -> Result<Vec<Symbol>, CompileError> {
        let mut stack: Vec<Symbol> = Vec::new();
        let mut postfix = Vec::with_capacity(symbols.len());

        for symbol in symbols {
            match symbol {
                Symbol::Literal(_) | Symbol::Epsilon => postfix.push(symbol),
                Symbol::LeftParen => stack.push(symbol),
                Symbol::RightParen => loop {
                    match stack.pop() {
                        Some(Symbol::LeftParen) => break,
                        Some(operator) => postfix.push(operator),
                        None => return Err(CompileError::UnbalancedParentheses),
                    }
                },
                operator => {
                    while let Some(&top) = stack.last() {
                        if top == Symbol::LeftParen || operator.priority() > top.priority() {
                            break;
                        }
                        postfix.push(top);
                        stack.pop();
                    }
                    stack.push(operator);
                }
            }
        }

        while let Some(operator) = stack.pop() {
            if operator == Symbol::LeftParen {
                return Err(CompileError::UnbalancedParentheses);
            }
            postfix.push(operator);
        }

        Ok(postfix)
    }
}

#[cfg(test)]
mod tests {
    use super::Parser;
    use crate::error::CompileError;

    fn postfix(input: &str) -> String {
        Parser::new(input)
            .parse()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn inserts_implicit_concatenation() {
        assert_eq!(postfix("ab"), "ab·");
        assert_eq!(postfix("a(b)"), "ab·");
        assert_eq!(postfix("(a)(b)"), "ab·");
        assert_eq!(postfix("a*b"), "a*b·");
        assert_eq!(postfix("a*(b)"), "a*b·");
        assert_eq!(postfix("(a)b"), "ab·");
        assert_eq!(postfix("εa"), "εa·");
    }

    #[test]
    fn respects_operator_priorities() {
        assert_eq!(postfix("a|b"), "ab|");
        assert_eq!(postfix("ab|c"), "ab·c|");
        assert_eq!(postfix("a|bc"), "abc·|");
        assert_eq!(postfix("ab*"), "ab*·");
        assert_eq!(postfix("(ab)*"), "ab·*");
    }

    #[test]
    fn translates_grouped_expressions() {
        assert_eq!(postfix("(a|b)*a(a|b)"), "ab|*a·ab|·");
        assert_eq!(postfix("ab|c(d*|a)"), "ab·cd*a|·|");
        assert_eq!(postfix("a*(a|b)a(a|b)*"), "a*ab|·a·ab|*·");
    }

    #[test]
    fn rejects_empty_expressions() {
        assert_eq!(
            Parser::new("").parse(),
            Err(CompileError::EmptyExpression)
        );
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert_eq!(
            Parser::new("a2b").parse(),
            Err(CompileError::UnknownSymbol { ch: '2', pos: 1 })
        );
        assert_eq!(
            Parser::new("a.b").parse(),
            Err(CompileError::UnknownSymbol { ch: '.', pos: 1 })
        );
    }

    #[test]
    fn rejects_unbalanced_parentheses() {
        assert_eq!(
            Parser::new("(a").parse(),
            Err(CompileError::UnbalancedParentheses)
        );
        assert_eq!(
            Parser::new("a)b").parse(),
            Err(CompileError::UnbalancedParentheses)
        );
        assert_eq!(
            Parser::new("((a|b)").parse(),
            Err(CompileError::UnbalancedParentheses)
        );
    }
}
