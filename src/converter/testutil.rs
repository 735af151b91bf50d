use std::collections::HashMap;

/// Transliterator backed by a fixed token → rendering table.
/// Unknown tokens render as themselves.
pub(crate) fn table_transliterator(
    pairs: &[(&str, &str)],
) -> impl Fn(&str) -> Vec<String> {
    let table: HashMap<String, String> = pairs
        .iter()
        .map(|&(token, rendering)| (token.to_string(), rendering.to_string()))
        .collect();
    move |token: &str| match table.get(token) {
        Some(rendering) => vec![rendering.clone()],
        None => vec![token.to_string()],
    }
}
