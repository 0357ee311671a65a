use super::model::Dfa;

impl std::fmt::Display for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dot())
    }
}

impl Dfa {
    /// Renders the transition table in the graphviz dot format, in the same
    /// shape as [`Nfa::to_dot`](crate::Nfa::to_dot). Transitions into the
    /// dead state are omitted, so state 0 never appears in the drawing.
    pub fn to_dot(&self) -> String {
        format!(
            "digraph dfa {{\n\
                \trankdir = LR;\n\
            \n\
                \tnode [shape = doublecircle]; {};\n\
                \tnode [shape = circle];\n\
                \t{} [color = red];\n\
            \n\
            {}\n\
            }}",
            self.accepting()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<String>>()
                .join(" "),
            self.start(),
            self.edges()
                .map(|(from, letter, to)| format!(
                    "\t{} -> {} [label = \"{}\"];",
                    from, to, letter
                ))
                .collect::<Vec<String>>()
                .join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        fsm::{dfa::subset_construction, nfa::Compiler},
        regex::Parser,
    };

    #[test]
    fn to_dot_skips_the_dead_state() {
        let nfa = Compiler::new()
            .compile(&Parser::new("a|b").parse().unwrap())
            .unwrap();
        let dot = subset_construction(&nfa).to_dot();

        assert!(dot.starts_with("digraph dfa {"));
        assert!(dot.contains("node [shape = doublecircle]; 2 3;"));
        assert!(dot.contains("1 [color = red];"));
        assert!(dot.contains("1 -> 2 [label = \"a\"];"));
        assert!(!dot.contains("-> 0"));
    }
}
