use std::{collections::HashMap, hash::Hash};

/// Maps every element of a slice to the index of its last occurrence.
/// Repeated elements collapse into a single entry, so the index behaves like
/// an ordered set built from the slice.
#[derive(Debug, Clone)]
pub struct PositionIndex<'a, T> {
    positions: HashMap<&'a T, usize>,
    source_len: usize,
}

impl<'a, T> PositionIndex<'a, T>
where
    T: Eq + Hash,
{
    pub fn new(items: &'a [T]) -> Self {
        let mut positions = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            positions.insert(item, index);
        }

        Self {
            positions,
            source_len: items.len(),
        }
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Length of the slice this index was built from, duplicates included.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn position(&self, item: &T) -> Option<usize> {
        self.positions.get(item).copied()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Returns true if `index` is where `item` was last seen.
    /// Used to visit each distinct element of the source slice exactly once.
    pub fn is_last_occurrence(&self, item: &T, index: usize) -> bool {
        self.position(item) == Some(index)
    }

    /// Iterates over the elements present in both indices, yielding the element
    /// together with its position in `self` and in `other`.
    /// The iteration order is unspecified.
    pub fn common<'b>(
        &'b self,
        other: &'b PositionIndex<'a, T>,
    ) -> impl Iterator<Item = (&'a T, usize, usize)> + 'b {
        self.positions.iter().filter_map(move |(item, &own)| {
            other.position(item).map(|theirs| (*item, own, theirs))
        })
    }

    /// Number of distinct elements present in both indices.
    pub fn intersection_size(&self, other: &PositionIndex<'_, T>) -> usize {
        // Probe with the smaller map.
        if self.len() <= other.len() {
            self.positions.keys().filter(|item| other.contains(item)).count()
        } else {
            other.intersection_size(self)
        }
    }

    /// Number of distinct elements present in either index.
    pub fn union_size(&self, other: &PositionIndex<'_, T>) -> usize {
        self.len() + other.len() - self.intersection_size(other)
    }
}
