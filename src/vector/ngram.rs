//! Character n-gram vectors.

use ahash::AHashMap;

use crate::error::{Result, SimScoreError};
use crate::vector::{CountVector, count_keys};

/// Mapping from a window of `n` consecutive code points to its count.
///
/// The text is used as given: no case folding and no tokenization, so
/// windows may span whitespace. A text of `L` code points yields at most
/// `L - n + 1` windows, and none when `L < n`.
///
/// # Examples
///
/// ```
/// use simscore::vector::{CountVector, NgramVector};
///
/// let vector = NgramVector::from_text("banana", 2).unwrap();
/// assert_eq!(vector.get("an"), 2);
/// assert_eq!(vector.get("na"), 2);
/// assert_eq!(vector.get("ba"), 1);
///
/// assert!(NgramVector::from_text("banana", 0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NgramVector {
    n: usize,
    counts: AHashMap<String, usize>,
}

impl NgramVector {
    /// Extract the n-grams of `text`.
    ///
    /// # Errors
    ///
    /// A window size of zero is a configuration error.
    pub fn from_text(text: &str, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(SimScoreError::config("ngram size must be at least 1"));
        }

        let chars: Vec<char> = text.chars().collect();
        let counts = count_keys(chars.windows(n).map(|window| window.iter().collect()));

        Ok(NgramVector { n, counts })
    }

    /// The window size.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Iterate over `(ngram, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .map(|(ngram, count)| (ngram.as_str(), *count))
    }
}

impl CountVector for NgramVector {
    fn counts(&self) -> &AHashMap<String, usize> {
        &self.counts
    }
}
