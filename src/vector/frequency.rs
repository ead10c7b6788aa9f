//! Token frequency vectors.

use ahash::AHashMap;

use crate::analysis::tokenizer::tokenize;
use crate::vector::{CountVector, count_keys};

/// Mapping from lowercased whitespace token to its occurrence count.
///
/// # Examples
///
/// ```
/// use simscore::vector::{CountVector, FrequencyVector};
///
/// let vector = FrequencyVector::from_text("To be or NOT to be");
/// assert_eq!(vector.get("to"), 2);
/// assert_eq!(vector.get("not"), 1);
/// assert_eq!(vector.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrequencyVector {
    counts: AHashMap<String, usize>,
}

impl FrequencyVector {
    /// Count the whitespace tokens of `text`. Empty text gives an empty vector.
    pub fn from_text(text: &str) -> Self {
        FrequencyVector {
            counts: count_keys(tokenize(text)),
        }
    }

    /// Iterate over `(token, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }
}

impl CountVector for FrequencyVector {
    fn counts(&self) -> &AHashMap<String, usize> {
        &self.counts
    }
}
