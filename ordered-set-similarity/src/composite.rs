//! Composite similarities built from the Jaccard, Kendall and displacement components.
//!
//! [`compound_ordered_set_similarity`] is the definition of the combined metric: it calls
//! each component on its own and multiplies the results.
//! [`ordered_set_similarity`] returns exactly the same value, but builds the index maps
//! once, stops as soon as the slices are known to be disjoint and counts discordant
//! pairs in O(n log n).
//! [`positional_overlap_similarity`] is a cheaper metric that leaves out the Kendall
//! factor. It is not the same metric and will score reordered slices higher.

use std::hash::Hash;

use crate::{
    displacement::{displacement_similarity, indexed_displacement},
    index::PositionIndex,
    jaccard::{jaccard_similarity, ratio},
    kendall::{count_pairs_fast, kendall_similarity, shared_ranks},
};

/// Calculate the ordered set similarity by computing each component separately and
/// multiplying them: `jaccard * kendall * displacement`.
pub fn compound_ordered_set_similarity<T>(x: &[T], y: &[T]) -> f64
where
    T: Eq + Hash,
{
    let jaccard = jaccard_similarity(x, y);
    let kendall = kendall_similarity(x, y);
    let displacement = displacement_similarity(x, y);
    jaccard * kendall * displacement
}

/// Calculate the ordered set similarity, `jaccard * kendall * displacement`, in a single pass
/// over shared index maps.
///
/// Always equal to [`compound_ordered_set_similarity`]. Two empty slices score 1.0 and
/// slices without a shared element score 0.0.
pub fn ordered_set_similarity<T>(x: &[T], y: &[T]) -> f64
where
    T: Eq + Hash,
{
    if x.is_empty() && y.is_empty() {
        return 1.0;
    }

    let x_index = PositionIndex::new(x);
    let y_index = PositionIndex::new(y);

    let common = x_index.intersection_size(&y_index);
    if common == 0 {
        log::trace!("ordered set similarity: no shared elements");
        return 0.0;
    }

    let jaccard = ratio(common, x_index.union_size(&y_index));

    let kendall = if common < 2 {
        1.0
    } else {
        count_pairs_fast(&shared_ranks(x, &x_index, &y_index)).similarity(common)
    };

    let displacement = indexed_displacement(&x_index, &y_index).unwrap_or(1.0);

    jaccard * kendall * displacement
}

/// Calculate `jaccard * displacement` in a single pass over shared index maps.
///
/// This leaves out the Kendall factor, so it only looks at how far shared elements moved
/// and not at whether pairs swapped. Two empty slices score 1.0 and slices without a
/// shared element score 0.0 without computing the displacement.
pub fn positional_overlap_similarity<T>(x: &[T], y: &[T]) -> f64
where
    T: Eq + Hash,
{
    if x.is_empty() && y.is_empty() {
        return 1.0;
    }

    let x_index = PositionIndex::new(x);
    let y_index = PositionIndex::new(y);

    let common = x_index.intersection_size(&y_index);
    if common == 0 {
        return 0.0;
    }

    let jaccard = ratio(common, x_index.union_size(&y_index));
    let displacement = indexed_displacement(&x_index, &y_index).unwrap_or(1.0);

    jaccard * displacement
}
