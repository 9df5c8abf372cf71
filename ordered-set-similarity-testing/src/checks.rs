use ordered_set_similarity::{
    compound_ordered_set_similarity, displacement_similarity, jaccard_similarity,
    ordered_set_similarity, positional_overlap_similarity, SimilarityMetric,
};
use strum::IntoEnumIterator;

/// Checks every invariant the metrics promise for a single pair of lists.
/// If any of them does not hold, this function panics.
pub fn assert_consistent_scores(reference: &[u32], candidate: &[u32]) {
    verify_bounds_and_symmetry(reference, candidate);
    verify_one_pass_matches_compound(reference, candidate);
    verify_positional_overlap_factors(reference, candidate);
}

fn verify_bounds_and_symmetry(reference: &[u32], candidate: &[u32]) {
    for metric in SimilarityMetric::iter() {
        let forward = metric.score(reference, candidate);
        let backward = metric.score(candidate, reference);

        assert!(
            (0.0..=1.0).contains(&forward),
            "{} out of bounds for {:?} vs {:?}: {}",
            metric,
            reference,
            candidate,
            forward
        );
        assert_eq!(
            forward, backward,
            "{} is not symmetric for {:?} vs {:?}",
            metric, reference, candidate
        );
    }
}

fn verify_one_pass_matches_compound(reference: &[u32], candidate: &[u32]) {
    assert_eq!(
        ordered_set_similarity(reference, candidate),
        compound_ordered_set_similarity(reference, candidate),
        "One pass and compound similarity differ for {:?} vs {:?}",
        reference,
        candidate
    );
}

fn verify_positional_overlap_factors(reference: &[u32], candidate: &[u32]) {
    let expected =
        jaccard_similarity(reference, candidate) * displacement_similarity(reference, candidate);
    assert_eq!(
        positional_overlap_similarity(reference, candidate),
        expected,
        "Positional overlap is not jaccard * displacement for {:?} vs {:?}",
        reference,
        candidate
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pairs_are_consistent() {
        assert_consistent_scores(&[1, 2, 3, 4, 5], &[1, 3, 2, 4, 5]);
        assert_consistent_scores(&[], &[]);
        assert_consistent_scores(&[4, 7], &[]);
        assert_consistent_scores(&[4, 7, 3, 8, 9, 2], &[4, 3, 7, 2, 9]);
    }
}
