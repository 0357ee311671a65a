pub use model::{Edge, Input, Nfa};

pub(crate) use compiler::Compiler;

mod compiler;
mod dot;
mod model;
