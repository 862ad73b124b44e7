use std::cmp::Ordering;

use crate::core::vectors::ProfileVector;

/// Cosine similarity between two sparse rank profiles, in [0, 1].
///
/// Merge-walks the two key-ordered profiles, so the cost is proportional
/// to the profiles' own entries rather than the full artist universe.
/// A zero-norm profile has no direction; its similarity to anything is
/// defined as 0.0 rather than NaN.
pub fn cosine_similarity(a: &ProfileVector, b: &ProfileVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut iter_a = a.iter().peekable();
    let mut iter_b = b.iter().peekable();

    while let (Some(&(key_a, rank_a)), Some(&(key_b, rank_b))) = (iter_a.peek(), iter_b.peek()) {
        match key_a.cmp(key_b) {
            Ordering::Less => {
                iter_a.next();
            }
            Ordering::Greater => {
                iter_b.next();
            }
            Ordering::Equal => {
                dot += rank_a as f64 * rank_b as f64;
                iter_a.next();
                iter_b.next();
            }
        }
    }

    if dot == 0.0 {
        return 0.0;
    }

    // Ranks are positive integers, so a non-empty profile has norm > 0.
    // The clamp guards against float drift pushing the ratio above 1.
    (dot / (a.norm() * b.norm())).clamp(0.0, 1.0)
}

/// Artist keys present in both profiles, in ascending key order
pub fn shared_artists(a: &ProfileVector, b: &ProfileVector) -> Vec<String> {
    let mut shared = Vec::new();
    let mut iter_a = a.iter().peekable();
    let mut iter_b = b.iter().peekable();

    while let (Some(&(key_a, _)), Some(&(key_b, _))) = (iter_a.peek(), iter_b.peek()) {
        match key_a.cmp(key_b) {
            Ordering::Less => {
                iter_a.next();
            }
            Ordering::Greater => {
                iter_b.next();
            }
            Ordering::Equal => {
                shared.push(key_a.to_string());
                iter_a.next();
                iter_b.next();
            }
        }
    }

    shared
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_profiles() {
        let a = ProfileVector::from_entries(&[("radiohead", 1), ("bjork", 2), ("can", 3)]);
        let sim = cosine_similarity(&a, &a);
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_profiles() {
        let a = ProfileVector::from_entries(&[("radiohead", 1), ("bjork", 2)]);
        let b = ProfileVector::from_entries(&[("can", 1), ("neu", 2)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // a = (1, 2, 0), b = (0, 2, 1) over keys (x, y, z)
        // dot = 4, |a| = sqrt(5), |b| = sqrt(5) -> 4/5
        let a = ProfileVector::from_entries(&[("x", 1), ("y", 2)]);
        let b = ProfileVector::from_entries(&[("y", 2), ("z", 1)]);
        let sim = cosine_similarity(&a, &b);
        assert!((sim - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_empty_profile_is_zero_not_nan() {
        let empty = ProfileVector::default();
        let full = ProfileVector::from_entries(&[("radiohead", 1)]);

        assert_eq!(cosine_similarity(&empty, &full), 0.0);
        assert_eq!(cosine_similarity(&full, &empty), 0.0);
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let a = ProfileVector::from_entries(&[("x", 3), ("y", 1)]);
        let b = ProfileVector::from_entries(&[("x", 1), ("z", 4)]);
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn test_shared_artists_sorted_intersection() {
        let a = ProfileVector::from_entries(&[("can", 1), ("abba", 2), ("neu", 3)]);
        let b = ProfileVector::from_entries(&[("neu", 1), ("can", 2), ("faust", 3)]);
        assert_eq!(shared_artists(&a, &b), vec!["can", "neu"]);
    }

    #[test]
    fn test_shared_artists_empty() {
        let a = ProfileVector::from_entries(&[("can", 1)]);
        let b = ProfileVector::default();
        assert!(shared_artists(&a, &b).is_empty());
    }
}
