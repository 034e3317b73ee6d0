//! Parsing of the free-text ingredient and tag fields of the recipe form.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIngredient {
    pub amount: String,
    pub name: String,
}

/// Split a comma-separated ingredient list into `(amount, name)` pairs.
///
/// Tokens split on their *last* space, not the first: the name is the last word and the amount
/// is everything before it, so `"1 cup flour"` becomes `("1 cup", "flour")` where a first-space
/// split would give `("1", "cup flour")`. A token without a space has an empty amount.
///
/// Known limitation: multi-word names mis-split, `"2 olive oil"` becomes `("2 olive", "oil")`.
pub fn parse_ingredients(input: &str) -> Vec<ParsedIngredient> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.rsplit_once(char::is_whitespace) {
            Some((amount, name)) => ParsedIngredient {
                amount: amount.trim().to_owned(),
                name: name.to_owned(),
            },
            None => ParsedIngredient {
                amount: String::new(),
                name: token.to_owned(),
            },
        })
        .collect()
}

/// Split a comma-separated tag list, dropping blanks and repeated names.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for tag in input.split(',').map(str::trim) {
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            continue;
        }

        tags.push(tag.to_owned());
    }

    tags
}
