//! Ranking candidate texts against a target.
//!
//! Every candidate is scored with a [`HybridScorer`] and fed to a bounded
//! [`TopMatchesCollector`], so only the best `n` candidates are ever kept.
//! Results are sorted by descending score. Equal scores are ordered by the
//! candidate's position in the input, earliest first, which makes the
//! output deterministic.
//!
//! # Examples
//!
//! ```
//! use simscore::{SimilarityOptions, top_n_matches};
//!
//! let candidates = ["hello world", "hello", "world", "hola mundo", "hallo welt"];
//! let matches = top_n_matches("hello world", &candidates, 3, &SimilarityOptions::default()).unwrap();
//!
//! assert_eq!(matches.len(), 3);
//! assert_eq!(matches[0].text, "hello world");
//! assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::similarity::{HybridScorer, SimilarityOptions};

pub mod collector;

pub use collector::{ScoredCandidate, TopMatchesCollector};

/// A ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The candidate text as given by the caller.
    pub text: String,
    /// Hybrid score against the target.
    pub score: f64,
    /// Position of the candidate in the input.
    pub index: usize,
}

impl Match {
    fn from_candidate<S: AsRef<str>>(candidate: ScoredCandidate, candidates: &[S]) -> Self {
        Match {
            text: candidates[candidate.index].as_ref().to_string(),
            score: candidate.score,
            index: candidate.index,
        }
    }
}

fn into_matches<S: AsRef<str>>(collector: TopMatchesCollector, candidates: &[S]) -> Vec<Match> {
    collector
        .into_ranked()
        .into_iter()
        .map(|candidate| Match::from_candidate(candidate, candidates))
        .collect()
}

impl HybridScorer {
    fn score_candidate(&self, prepared_target: &str, candidate: &str) -> Result<f64> {
        let candidate = self.prepare(candidate)?;
        Ok(self.breakdown_prepared(prepared_target, &candidate)?.total)
    }

    /// The `n` best candidates for `target`, best first.
    ///
    /// Returns `min(n, candidates.len())` matches. The target is
    /// preprocessed once for the whole pass.
    pub fn top_n<S: AsRef<str>>(
        &self,
        target: &str,
        candidates: &[S],
        n: usize,
    ) -> Result<Vec<Match>> {
        if n == 0 || candidates.is_empty() {
            return Ok(Vec::new());
        }

        let target = self.prepare(target)?;
        let mut collector = TopMatchesCollector::new(n);
        for (index, candidate) in candidates.iter().enumerate() {
            let score = self.score_candidate(&target, candidate.as_ref())?;
            collector.collect(index, score);
        }

        debug!(
            candidates = collector.total_seen(),
            kept = collector.len(),
            "ranked candidates"
        );

        Ok(into_matches(collector, candidates))
    }

    /// Same result as [`top_n`](Self::top_n), with candidates scored on the
    /// rayon thread pool.
    ///
    /// Scores are merged in input order afterwards, so ties resolve exactly
    /// as in the sequential version.
    pub fn par_top_n<S: AsRef<str> + Sync>(
        &self,
        target: &str,
        candidates: &[S],
        n: usize,
    ) -> Result<Vec<Match>> {
        if n == 0 || candidates.is_empty() {
            return Ok(Vec::new());
        }

        let target = self.prepare(target)?;
        let scores = candidates
            .par_iter()
            .map(|candidate| self.score_candidate(&target, candidate.as_ref()))
            .collect::<Result<Vec<f64>>>()?;

        let mut collector = TopMatchesCollector::new(n);
        for (index, score) in scores.into_iter().enumerate() {
            collector.collect(index, score);
        }

        debug!(
            candidates = collector.total_seen(),
            kept = collector.len(),
            "ranked candidates in parallel"
        );

        Ok(into_matches(collector, candidates))
    }

    /// The single best candidate, or `None` when there are no candidates.
    ///
    /// A later candidate only replaces the current best with a strictly
    /// greater score, so ties keep the earliest candidate.
    pub fn best_match<S: AsRef<str>>(&self, target: &str, candidates: &[S]) -> Result<Option<Match>> {
        let target = self.prepare(target)?;

        let mut best: Option<ScoredCandidate> = None;
        for (index, candidate) in candidates.iter().enumerate() {
            let score = self.score_candidate(&target, candidate.as_ref())?;
            match best {
                Some(current) if score <= current.score => {}
                _ => best = Some(ScoredCandidate { index, score }),
            }
        }

        Ok(best.map(|candidate| Match::from_candidate(candidate, candidates)))
    }
}

/// The `n` candidates most similar to `target` under `options`, best first.
///
/// # Errors
///
/// Invalid options or a preprocessing failure.
pub fn top_n_matches<S: AsRef<str>>(
    target: &str,
    candidates: &[S],
    n: usize,
    options: &SimilarityOptions,
) -> Result<Vec<Match>> {
    HybridScorer::new(options.clone())?.top_n(target, candidates, n)
}

/// Parallel version of [`top_n_matches`] with identical results.
pub fn par_top_n_matches<S: AsRef<str> + Sync>(
    target: &str,
    candidates: &[S],
    n: usize,
    options: &SimilarityOptions,
) -> Result<Vec<Match>> {
    HybridScorer::new(options.clone())?.par_top_n(target, candidates, n)
}

/// The candidate most similar to `target` under `options`.
///
/// ```
/// use simscore::{SimilarityOptions, best_match};
///
/// let best = best_match("night", &["nacht", "knight", "day"], &SimilarityOptions::default())
///     .unwrap()
///     .unwrap();
/// assert_eq!(best.text, "knight");
/// assert_eq!(best.index, 1);
/// ```
pub fn best_match<S: AsRef<str>>(
    target: &str,
    candidates: &[S],
    options: &SimilarityOptions,
) -> Result<Option<Match>> {
    HybridScorer::new(options.clone())?.best_match(target, candidates)
}
