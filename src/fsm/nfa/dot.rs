use super::model::Nfa;

impl std::fmt::Display for Nfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dot())
    }
}

impl Nfa {
    /// Renders the NFA in the [graphviz](https://graphviz.org/docs/layouts/dot/)
    /// dot language format: accept state double-circled, start state red,
    /// laid out left to right.
    pub fn to_dot(&self) -> String {
        format!(
            "digraph nfa {{\n\
                \trankdir = LR;\n\
            \n\
                \tnode [shape = doublecircle]; {};\n\
                \tnode [shape = circle];\n\
                \t{} [color = red];\n\
            \n\
            {}\n\
            }}",
            self.end(),
            self.start(),
            self.edges()
                .iter()
                .map(|edge| format!(
                    "\t{} -> {} [label = \"{}\"];",
                    edge.from, edge.to, edge.input
                ))
                .collect::<Vec<String>>()
                .join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{fsm::nfa::Compiler, regex::Parser};

    #[test]
    fn to_dot() {
        let nfa = Compiler::new()
            .compile(&Parser::new("a|b").parse().unwrap())
            .unwrap();
        let dot = nfa.to_dot();

        assert!(dot.starts_with("digraph nfa {"));
        assert!(dot.contains("node [shape = doublecircle]; 5;"));
        assert!(dot.contains("4 [color = red];"));
        assert!(dot.contains("0 -> 1 [label = \"a\"];"));
        assert!(dot.contains("4 -> 0 [label = \"ε\"];"));
    }
}
