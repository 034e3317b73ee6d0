mod detail;
mod list;

use std::ops::Deref;

pub use detail::*;
pub use list::*;

#[derive(Clone)]
pub struct Query(pub cookbook_shared::State);

impl Deref for Query {
    type Target = cookbook_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Build a `%value%` LIKE pattern, escaping the LIKE wildcards with `\`.
pub(crate) fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');

    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }

    pattern.push('%');
    pattern
}
