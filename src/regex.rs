pub(crate) use parser::Parser;
pub(crate) use symbol::Symbol;

mod parser;
mod symbol;
