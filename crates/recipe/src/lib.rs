pub mod parse;
pub mod query;
pub mod seed;

mod comment;
mod root;

pub use comment::*;
pub use query::Query;
pub use root::*;
