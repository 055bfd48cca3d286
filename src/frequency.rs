use core::hash::BuildHasherDefault;
use core::hash::Hash;
use std::collections::HashMap;

use rapidhash::RapidHasher;

/// Empirical draw counts, keyed by item.
///
/// Remembers the order in which items were first seen so that reports stay
/// stable across runs with the same seed.
#[derive(Clone, Debug)]
pub struct Frequencies<T> {
    index: HashMap<T, usize, BuildHasherDefault<RapidHasher>>,
    counts: Vec<(T, usize)>,
    total: usize,
}

impl<T> Default for Frequencies<T> {
    fn default() -> Self {
        Self {
            index: HashMap::default(),
            counts: Vec::new(),
            total: 0,
        }
    }
}

impl<T> Frequencies<T>
where
    T: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, item: T) {
        self.total += 1;
        match self.index.get(&item) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(item.clone(), self.counts.len());
                self.counts.push((item, 1));
            }
        }
    }

    pub fn count(&self, item: &T) -> usize {
        self.index
            .get(item)
            .map_or(0, |&slot| self.counts[slot].1)
    }

    /// Share of all recorded draws that produced `item`; 0 when nothing was recorded.
    pub fn frequency(&self, item: &T) -> f64 {
        match self.total {
            0 => 0.0,
            total => self.count(item) as f64 / total as f64,
        }
    }

    /// Number of recorded draws.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct items seen.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(item, count, frequency)` rows, most frequent first.
    pub fn sorted(&self) -> Vec<(&T, usize, f64)> {
        let mut rows = self
            .counts
            .iter()
            .map(|(item, count)| (item, *count, *count as f64 / self.total as f64))
            .collect::<Vec<_>>();
        // Stable, so ties keep first-seen order.
        rows.sort_by(|left, right| right.1.cmp(&left.1));
        rows
    }
}

impl<T> Extend<T> for Frequencies<T>
where
    T: Clone + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.record(item));
    }
}

impl<T> FromIterator<T> for Frequencies<T>
where
    T: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut frequencies = Self::new();
        frequencies.extend(iter);
        frequencies
    }
}
