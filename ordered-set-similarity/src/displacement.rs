use std::hash::Hash;

use crate::index::PositionIndex;

/// Calculate the similarity between two slices from how far their shared elements moved.
/// Every shared element is penalised by the absolute difference of its positions, and the
/// total is normalised by the largest penalty the slice lengths allow.
///
/// Slices with at most one element between them, or without any shared element, have no
/// displacement to penalise and score 1.0. Missing overlap is left to the Jaccard component.
pub fn displacement_similarity<T>(x: &[T], y: &[T]) -> f64
where
    T: Eq + Hash,
{
    let max_len = x.len().max(y.len());
    if max_len <= 1 {
        return 1.0;
    }

    let x_index = PositionIndex::new(x);
    let y_index = PositionIndex::new(y);

    indexed_displacement(&x_index, &y_index).unwrap_or(1.0)
}

/// Displacement similarity from prebuilt indices.
/// Returns `None` when there is nothing to penalise, so callers can decide what that means.
pub(crate) fn indexed_displacement<T>(
    x_index: &PositionIndex<'_, T>,
    y_index: &PositionIndex<'_, T>,
) -> Option<f64>
where
    T: Eq + Hash,
{
    let max_len = x_index.source_len().max(y_index.source_len());
    if max_len <= 1 {
        return None;
    }

    let mut total_penalty = 0.0;
    let mut common = 0;
    for (_, x_position, y_position) in x_index.common(y_index) {
        total_penalty += x_position.abs_diff(y_position) as f64;
        common += 1;
    }

    if common == 0 {
        return None;
    }

    let max_penalty = (max_len * common) as f64;
    Some(1.0 - total_penalty / max_penalty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_symmetric(x: &[i32], y: &[i32], expected: f64) {
        assert_eq!(displacement_similarity(x, y), expected);
        assert_eq!(displacement_similarity(x, y), displacement_similarity(y, x));
    }

    #[test]
    fn equal() {
        assert_symmetric(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5], 1.0);
    }

    #[test]
    fn same_size_unequal() {
        assert_symmetric(&[1, 3, 2, 4, 5], &[1, 2, 3, 4, 5], 0.92);
    }

    #[test]
    fn reversed_order() {
        assert_symmetric(&[5, 4, 3, 2, 1], &[1, 2, 3, 4, 5], 0.52);
    }

    #[test]
    fn different_sizes_equal() {
        assert_symmetric(&[1, 2, 3], &[1, 2, 3, 4, 5], 1.0);
    }

    #[test]
    fn different_sizes_different_elements_highly_unequal() {
        assert_symmetric(&[4, 7, 3, 8, 9, 2], &[3, 9, 2], 0.5555555555555556);
    }

    #[test]
    fn different_sizes_different_elements_unequal() {
        assert_symmetric(&[4, 7, 3, 8, 9, 2], &[4, 3, 7, 2, 9], 0.8666666666666667);
    }

    #[test]
    fn different_sizes_different_elements_equal() {
        assert_symmetric(&[4, 7, 3, 8, 9, 2], &[5, 7, 1, 8], 1.0);
    }

    #[test]
    fn different_elements_equal() {
        assert_symmetric(&[4, 7, 3, 8, 9, 2], &[4, 7, 3, 5, 9, 2], 1.0);
    }

    #[test]
    fn minimum_difference() {
        assert_symmetric(&[4, 7, 3, 9, 2], &[4, 7, 3, 9, 5, 2], 0.9666666666666667);
    }

    #[test]
    fn maximum_difference() {
        assert_symmetric(
            &[1, 2, 3, 4, 5],
            &[14, 13, 12, 11, 10, 9, 8, 7, 6, 1],
            0.09999999999999998,
        );
    }

    #[test]
    fn single_elements() {
        assert_symmetric(&[5], &[1], 1.0);
        assert_symmetric(&[1], &[1], 1.0);
    }

    #[test]
    fn empty() {
        assert_symmetric(&[], &[1], 1.0);
        assert_symmetric(&[], &[], 1.0);
    }

    #[test]
    fn disjoint() {
        assert_symmetric(&[1, 2, 3], &[4, 5, 6], 1.0);
    }

    #[test]
    fn indexed_reports_nothing_to_penalise() {
        let x = vec![1, 2];
        let y = vec![3];
        assert_eq!(
            indexed_displacement(&PositionIndex::new(&x), &PositionIndex::new(&y)),
            None
        );
    }
}
