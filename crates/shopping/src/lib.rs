mod layout;
mod pdf;

pub use layout::*;
pub use pdf::*;
