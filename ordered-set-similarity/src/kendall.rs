use std::hash::Hash;

use itertools::Itertools;

use crate::index::PositionIndex;

/// Number of concordant and discordant pairs among the elements two slices share.
/// For `k` shared elements the two counts always add up to `k * (k - 1) / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairCounts {
    pub concordant: usize,
    pub discordant: usize,
}

impl PairCounts {
    pub fn total(&self) -> usize {
        self.concordant + self.discordant
    }

    /// Map the counts onto [0, 1]: all concordant is 1.0, all discordant is 0.0.
    /// `common` is the number of shared elements. Below 2 there is no pair to disagree
    /// on, so the result is 1.0, as in [`kendall_similarity`].
    pub fn similarity(&self, common: usize) -> f64 {
        if common < 2 {
            return 1.0;
        }
        let balance = self.concordant as i64 - self.discordant as i64;
        0.5 * (1.0 + balance as f64 / (0.5 * common as f64 * (common - 1) as f64))
    }
}

/// Positions in `y` of the elements `x` shares with it, in the order they appear in `x`.
/// Each distinct element is taken once, at its last position in either slice.
pub(crate) fn shared_ranks<T>(
    x: &[T],
    x_index: &PositionIndex<'_, T>,
    y_index: &PositionIndex<'_, T>,
) -> Vec<usize>
where
    T: Eq + Hash,
{
    x.iter()
        .enumerate()
        .filter(|(i, item)| x_index.is_last_occurrence(item, *i))
        .filter_map(|(_, item)| y_index.position(item))
        .collect()
}

/// Classify every pair of `ranks` by comparing each pair directly. This is O(n^2).
pub fn count_pairs(ranks: &[usize]) -> PairCounts {
    let mut counts = PairCounts::default();

    for (a, b) in ranks.iter().tuple_combinations() {
        if a < b {
            counts.concordant += 1;
        } else {
            counts.discordant += 1;
        }
    }

    counts
}

/// Same result as [`count_pairs`], but counts the discordant pairs as the inversions
/// found while merge sorting a copy of `ranks`. This is O(n log n).
pub fn count_pairs_fast(ranks: &[usize]) -> PairCounts {
    let n = ranks.len();
    let total = n * n.saturating_sub(1) / 2;

    let mut sorted = ranks.to_vec();
    let mut buffer = Vec::with_capacity(n);
    let discordant = count_inversions(&mut sorted, &mut buffer);

    PairCounts {
        concordant: total - discordant,
        discordant,
    }
}

fn count_inversions(ranks: &mut [usize], buffer: &mut Vec<usize>) -> usize {
    let len = ranks.len();
    if len < 2 {
        return 0;
    }

    let mid = len / 2;
    let mut inversions =
        count_inversions(&mut ranks[..mid], buffer) + count_inversions(&mut ranks[mid..], buffer);

    buffer.clear();
    let (mut i, mut j) = (0, mid);
    while i < mid && j < len {
        if ranks[i] <= ranks[j] {
            buffer.push(ranks[i]);
            i += 1;
        } else {
            // Everything left in the lower half is greater than ranks[j].
            buffer.push(ranks[j]);
            inversions += mid - i;
            j += 1;
        }
    }
    buffer.extend_from_slice(&ranks[i..mid]);
    buffer.extend_from_slice(&ranks[j..]);
    ranks.copy_from_slice(&buffer[..]);

    inversions
}

/// Calculate how well the relative order of the shared elements agrees between two slices.
/// Pairs involving an element that is missing from the other slice are ignored.
///
/// If either slice has fewer than two elements, or they share fewer than two elements,
/// there is no pair to compare and the similarity is 1.0.
pub fn kendall_similarity<T>(x: &[T], y: &[T]) -> f64
where
    T: Eq + Hash,
{
    if x.len() < 2 || y.len() < 2 {
        return 1.0;
    }

    let x_index = PositionIndex::new(x);
    let y_index = PositionIndex::new(y);

    let common = x_index.intersection_size(&y_index);
    if common < 2 {
        return 1.0;
    }

    let counts = count_pairs(&shared_ranks(x, &x_index, &y_index));
    log::trace!(
        "kendall: {} shared, {} concordant, {} discordant",
        common,
        counts.concordant,
        counts.discordant
    );
    counts.similarity(common)
}

/// Calculate the Kendall tau distance between two slices.
/// The Kendall tau distance counts the number of pairwise disagreements between two rankings.
/// Only elements present in both slices are ranked, so slices of different lengths or with
/// different members can be compared.
pub fn kendall_tau_distance<T>(x: &[T], y: &[T]) -> usize
where
    T: Eq + Hash,
{
    let x_index = PositionIndex::new(x);
    let y_index = PositionIndex::new(y);

    count_pairs_fast(&shared_ranks(x, &x_index, &y_index)).discordant
}

/// Calculate the normalised Kendall tau distance between two slices.
/// The normalised Kendall tau distance is the Kendall tau distance divided by the maximum possible distance.
/// Returns 0.0 when the slices share fewer than two elements.
pub fn normalised_kendall_tau_distance<T>(x: &[T], y: &[T]) -> f64
where
    T: Eq + Hash,
{
    let x_index = PositionIndex::new(x);
    let y_index = PositionIndex::new(y);

    let n = x_index.intersection_size(&y_index);
    if n < 2 {
        return 0.0;
    }

    let kt = count_pairs_fast(&shared_ranks(x, &x_index, &y_index)).discordant as f64;
    let n = n as f64;
    kt / (n * (n - 1.0) / 2.0)
}
