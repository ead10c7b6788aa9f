//! Levenshtein edit distance between tokens.
//!
//! Distances are counted in Unicode code points, so a multi-byte character
//! is a single edit unit. Both functions are quadratic in the token lengths
//! and are meant for word-sized inputs, not whole documents.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions or
/// substitutions required to turn `s1` into `s2`. An empty input returns the
/// length of the other string without building the matrix.
///
/// # Examples
///
/// ```
/// use simscore::util::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // (len1 + 1) x (len2 + 1) matrix, row i / column j hold the distance
    // between the first i chars of s1 and the first j chars of s2.
    let mut matrix = vec![vec![0usize; len2 + 1]; len1 + 1];
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    matrix[len1][len2]
}

/// Levenshtein distance with an upper bound.
///
/// Returns `Some(distance)` exactly when `levenshtein_distance(s1, s2) <=
/// threshold`, and `None` otherwise. Only two rows are kept, and the scan
/// stops as soon as every cell of a row exceeds the threshold, which makes
/// it the cheap way to answer "are these tokens near-duplicates?".
///
/// ```
/// use simscore::util::levenshtein::levenshtein_distance_threshold;
///
/// assert_eq!(levenshtein_distance_threshold("hello", "hallo", 2), Some(1));
/// assert_eq!(levenshtein_distance_threshold("hello", "world", 2), None);
/// ```
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1.abs_diff(len2) > threshold {
        return None;
    }
    if len1 == 0 || len2 == 0 {
        // The length check above already bounds the remaining length.
        return Some(len1.max(len2));
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0usize; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);

            curr_row[j] = min(
                min(prev_row[j] + 1, curr_row[j - 1] + 1),
                prev_row[j - 1] + cost,
            );
            min_in_row = min(min_in_row, curr_row[j]);
        }

        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("hello", "hello"), 0);
        assert_eq!(levenshtein_distance("book", "back"), 2);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2);
    }

    #[test]
    fn test_levenshtein_is_symmetric() {
        let pairs = [
            ("kitten", "sitting"),
            ("hello", "hallo"),
            ("flaw", "lawn"),
            ("", "abc"),
            ("monde", "mundo"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                levenshtein_distance(a, b),
                levenshtein_distance(b, a),
                "distance({a}, {b}) should be symmetric"
            );
        }
    }

    #[test]
    fn test_levenshtein_counts_code_points() {
        // "é" is two bytes but a single edit.
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert_eq!(levenshtein_distance("", "日本語"), 3);
        assert_eq!(levenshtein_distance("日本語", "日本"), 1);
    }

    #[test]
    fn test_levenshtein_distance_threshold() {
        assert_eq!(
            levenshtein_distance_threshold("kitten", "sitting", 3),
            Some(3)
        );
        assert_eq!(levenshtein_distance_threshold("kitten", "sitting", 2), None);
        assert_eq!(
            levenshtein_distance_threshold("search", "search", 0),
            Some(0)
        );
        assert_eq!(levenshtein_distance_threshold("a", "abc", 1), None);
        assert_eq!(levenshtein_distance_threshold("a", "ab", 1), Some(1));
        assert_eq!(levenshtein_distance_threshold("", "ab", 2), Some(2));
        assert_eq!(levenshtein_distance_threshold("", "abc", 2), None);
    }

    #[test]
    fn test_threshold_agrees_with_full_matrix() {
        let words = ["hello", "hallo", "world", "welt", "hola", "mundo", "cat", "bat", ""];
        for a in words {
            for b in words {
                let full = levenshtein_distance(a, b);
                for threshold in 0..4 {
                    let expected = (full <= threshold).then_some(full);
                    assert_eq!(
                        levenshtein_distance_threshold(a, b, threshold),
                        expected,
                        "threshold {threshold} for ({a}, {b})"
                    );
                }
            }
        }
    }
}
