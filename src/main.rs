use regex2dfa::Automaton;

const USAGE: &str = "usage: regex2dfa [--dot] <pattern> [<string>..]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let mut pattern = args.next().ok_or(USAGE)?;
    let dot = pattern == "--dot";
    if dot {
        pattern = args.next().ok_or(USAGE)?;
    }

    let automaton = Automaton::new(&pattern)?;

    if dot {
        println!("{}", automaton.nfa());
        println!("{}", automaton.dfa());
        println!("{}", automaton.minimized());
    }

    for input in args {
        println!("{}", automaton.matches(&input));
    }

    Ok(())
}
