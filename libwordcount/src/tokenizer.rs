/// Characters trimmed from both edges of every token. Interior occurrences are kept, so
/// `don't` stays as it is while `end.` becomes `end`.
pub const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']'];

pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(PUNCTUATION)
}

/// `tokenize` lowercases `text`, splits it on whitespace and strips edge punctuation from each
/// token. Tokens left empty by stripping are dropped.
///
/// Hyphens, underscores and digits are ordinary word characters here.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(strip_punctuation)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_owned())
        .collect()
}
