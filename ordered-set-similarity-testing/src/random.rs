use std::{cell::RefCell, collections::HashSet, rc::Rc};

use rand::{Rng, RngCore, SeedableRng};

pub trait RandomProvider {
    /// Returns a random u64.
    fn random_u64(&self) -> u64;

    /// Returns a random value in `0..bound`. `bound` must not be zero.
    fn random_below(&self, bound: u64) -> u64 {
        self.random_u64() % bound
    }

    /// Generate a list of distinct values in `0..max_value`, with a length in `0..max_len`.
    /// Values that were already drawn are skipped, so the list can end up shorter than
    /// the drawn length. Values keep the order they were first drawn in.
    /// With `max_len` or `max_value` zero the list is empty.
    fn random_list(&self, max_len: usize, max_value: u32) -> Vec<u32> {
        let len = if max_len == 0 || max_value == 0 {
            0
        } else {
            self.random_below(max_len as u64) as usize
        };

        let mut seen = HashSet::with_capacity(len);
        let mut list = Vec::with_capacity(len);
        for _ in 0..len {
            let value = self.random_below(max_value as u64) as u32;
            if seen.insert(value) {
                list.push(value);
            }
        }
        list
    }
}

#[derive(Debug)]
pub struct TrueRandomProvider;

impl TrueRandomProvider {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for TrueRandomProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomProvider for TrueRandomProvider {
    fn random_u64(&self) -> u64 {
        rand::random()
    }
}

#[derive(Clone)]
pub struct DeterministicRandomProvider {
    rand: Rc<RefCell<rand_chacha::ChaCha8Rng>>,
}

impl DeterministicRandomProvider {
    pub fn new(seed: u64) -> Self {
        DeterministicRandomProvider {
            rand: Rc::new(RefCell::new(rand_chacha::ChaCha8Rng::seed_from_u64(seed))),
        }
    }
}

impl RandomProvider for DeterministicRandomProvider {
    fn random_u64(&self) -> u64 {
        self.rand.borrow_mut().next_u64()
    }

    fn random_below(&self, bound: u64) -> u64 {
        self.rand.borrow_mut().gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_lists() {
        let a = DeterministicRandomProvider::new(7);
        let b = DeterministicRandomProvider::new(7);
        for _ in 0..20 {
            assert_eq!(a.random_list(50, 100), b.random_list(50, 100));
        }
    }

    #[test]
    fn lists_are_distinct_and_bounded() {
        let random = DeterministicRandomProvider::new(3);
        for _ in 0..200 {
            let list = random.random_list(50, 20);
            assert!(list.len() < 50);
            assert!(list.len() <= 20);
            assert!(list.iter().all(|value| *value < 20));
            let distinct: HashSet<_> = list.iter().collect();
            assert_eq!(distinct.len(), list.len());
        }
    }

    #[test]
    fn zero_max_len_gives_empty_lists() {
        let random = DeterministicRandomProvider::new(1);
        assert!(random.random_list(0, 100).is_empty());
    }

    #[test]
    fn zero_max_value_gives_empty_lists() {
        let random = DeterministicRandomProvider::new(1);
        for _ in 0..20 {
            assert!(random.random_list(50, 0).is_empty());
        }
    }
}
