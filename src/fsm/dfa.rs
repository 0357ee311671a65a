pub use model::Dfa;

pub(crate) use builder::subset_construction;
pub(crate) use minimize::minimize;

mod builder;
mod dot;
mod minimize;
mod model;
mod sim;
