const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "for", "from", "in", "into", "is", "it", "of", "on",
    "or", "the", "to", "with",
];

/// Split text into lowercase alphanumeric terms.
/// - Any non-alphanumeric character is a separator.
/// - Empty fragments are dropped; stopwords are kept (see `is_stopword`).
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

pub fn is_stopword(term: &str) -> bool {
    STOPWORDS.binary_search(&term).is_ok()
}
