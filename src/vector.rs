//! Sparse count vectors built from text.
//!
//! Both vector kinds map a string key to the number of times it occurs in
//! one text: [`FrequencyVector`] counts lowercased whitespace tokens and
//! [`NgramVector`] counts fixed-size windows of code points. They are built
//! per comparison, owned by the caller, and dropped afterwards.

use ahash::AHashMap;

pub mod frequency;
pub mod ngram;

pub use frequency::FrequencyVector;
pub use ngram::NgramVector;

/// Read access shared by the count vectors.
pub trait CountVector {
    /// The underlying key -> count table.
    fn counts(&self) -> &AHashMap<String, usize>;

    /// Occurrences of `key`, zero if absent.
    fn get(&self, key: &str) -> usize {
        self.counts().get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    fn len(&self) -> usize {
        self.counts().len()
    }

    /// Whether no key was extracted.
    fn is_empty(&self) -> bool {
        self.counts().is_empty()
    }

    /// Sum of all counts.
    fn total(&self) -> usize {
        self.counts().values().sum()
    }

    /// Euclidean norm of the counts.
    fn magnitude(&self) -> f64 {
        let squares: usize = self.counts().values().map(|count| count * count).sum();
        (squares as f64).sqrt()
    }

    /// Exact-key dot product with another vector.
    fn dot(&self, other: &Self) -> usize
    where
        Self: Sized,
    {
        let (small, large) = if self.len() <= other.len() {
            (self.counts(), other.counts())
        } else {
            (other.counts(), self.counts())
        };
        small
            .iter()
            .map(|(key, count)| count * large.get(key).copied().unwrap_or(0))
            .sum()
    }
}

/// Increment the count of every key produced by `keys`.
pub(crate) fn count_keys<I>(keys: I) -> AHashMap<String, usize>
where
    I: IntoIterator<Item = String>,
{
    let mut counts = AHashMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}
