//! Whitespace tokenization shared by every scorer.

/// Split `text` on runs of Unicode whitespace and lowercase each token.
///
/// Lowercasing is locale-independent simple case folding
/// ([`str::to_lowercase`]). Empty or whitespace-only text yields no tokens.
///
/// # Examples
///
/// ```
/// use simscore::analysis::tokenize;
///
/// let tokens: Vec<String> = tokenize("Hello  WORLD\tagain").collect();
/// assert_eq!(tokens, vec!["hello", "world", "again"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}
