/// Splits a comma separated string into trimmed, non-empty tokens
///
/// # Arguments
/// - `value` - Raw user input, e.g. `"Alice, Bob,,Carol "`
///
/// # Returns
/// - `Vec<String>` - Tokens in input order, e.g. `["Alice", "Bob", "Carol"]`
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a comma separated string of shopping items into normalized tokens
///
/// Items are trimmed and lower-cased so that `"Milk"` and `" milk"` are the same item.
pub fn split_items(value: &str) -> Vec<String> {
    split_csv(value)
        .into_iter()
        .map(|item| item.to_lowercase())
        .collect()
}
