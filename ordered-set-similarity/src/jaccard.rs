use std::{collections::HashSet, hash::Hash};

/// Calculate the Jaccard similarity between two slices, treating each as a set.
/// This is the size of the intersection divided by the size of the union, so the
/// order of the elements is ignored entirely.
///
/// Two empty slices are considered identical and score 1.0.
pub fn jaccard_similarity<T>(x: &[T], y: &[T]) -> f64
where
    T: Eq + Hash,
{
    if x.is_empty() && y.is_empty() {
        return 1.0;
    }

    let x: HashSet<&T> = x.iter().collect();
    let y: HashSet<&T> = y.iter().collect();

    let intersection = x.intersection(&y).count();
    let union = x.union(&y).count();

    ratio(intersection, union)
}

/// `intersection / union`, as the one-pass composites compute it from index maps.
pub(crate) fn ratio(intersection: usize, union: usize) -> f64 {
    intersection as f64 / union as f64
}
