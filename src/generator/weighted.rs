use rand::Rng;
use rand::distr::Distribution;

use super::Generator;
use crate::Error;

/// Draws items with probability proportional to their weight.
///
/// Weights are folded into a prefix-sum table at construction, so each draw
/// is one uniform `f64` and a binary search over the table. The sampler is
/// immutable once built and owns no randomness: every draw takes the RNG
/// from the caller, so one instance can be shared across threads as long
/// as each thread brings its own generator.
#[derive(Clone, Debug)]
pub struct WeightedSampler<T> {
    items: Vec<T>,
    cumulative_weights: Vec<f64>,
    total_weight: f64,
}

impl<T> WeightedSampler<T> {
    /// Builds a sampler from `(item, weight)` pairs, summing weights in
    /// iteration order.
    ///
    /// Fails on the first weight that is not finite and strictly positive.
    pub fn new<I>(choices: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let choices = choices.into_iter();
        let (capacity, _) = choices.size_hint();
        let mut items = Vec::with_capacity(capacity);
        let mut cumulative_weights = Vec::with_capacity(capacity);

        let mut total_weight = 0.0;
        for (index, (item, weight)) in choices.enumerate() {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(Error::InvalidWeight { index, weight });
            }
            items.push(item);
            total_weight += weight;
            cumulative_weights.push(total_weight);
        }

        if items.is_empty() {
            return Err(Error::EmptyInput);
        }

        if total_weight <= 0.0 {
            return Err(Error::NonPositiveTotal(total_weight));
        }

        if !total_weight.is_finite() {
            return Err(Error::NonFiniteTotal(total_weight));
        }

        Ok(Self {
            items,
            cumulative_weights,
            total_weight,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: construction rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn cumulative_weights(&self) -> &[f64] {
        &self.cumulative_weights
    }

    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Weight of the item at `index`, recovered from the prefix sums.
    ///
    /// Weights are summed in input order, so a weight too small to change the
    /// running total (e.g. `1.0` after `1e16`) is absorbed: it reads back as
    /// `0.0` here and its item is never drawn.
    pub fn weight(&self, index: usize) -> Option<f64> {
        let upper = *self.cumulative_weights.get(index)?;
        let lower = match index {
            0 => 0.0,
            _ => self.cumulative_weights[index - 1],
        };
        Some(upper - lower)
    }

    /// Selection probability of the item at `index`.
    pub fn probability(&self, index: usize) -> Option<f64> {
        self.weight(index).map(|weight| weight / self.total_weight)
    }

    /// `(item, probability)` pairs in input order. Absorbed weights report
    /// `0.0`, see [`WeightedSampler::weight`].
    pub fn probabilities(&self) -> impl Iterator<Item = (&T, f64)> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| Some((item, self.probability(index)?)))
    }

    /// First index whose cumulative weight is strictly greater than `target`.
    ///
    /// Negative targets map to 0; targets at or past `total_weight` map to
    /// `len()`, which callers must clamp.
    #[inline]
    pub(crate) fn locate(&self, target: f64) -> usize {
        self.cumulative_weights
            .partition_point(|&bound| bound <= target)
    }

    /// Draws one index with probability `weight[i] / total_weight`.
    #[inline]
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.index_for(rng.random::<f64>() * self.total_weight)
    }

    /// Bucket owning `target`, clamped to the last item.
    ///
    /// `u * total` can round up to `total` for `u` just below 1.
    #[inline]
    pub(crate) fn index_for(&self, target: f64) -> usize {
        self.locate(target).min(self.items.len() - 1)
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.items[self.sample_index(rng)]
    }

    /// Draws `k` independent items, in draw order.
    pub fn sample_multiple<R: Rng + ?Sized>(&self, rng: &mut R, k: usize) -> Vec<&T> {
        (0..k).map(|_| self.sample(rng)).collect()
    }
}

impl<T> Generator for WeightedSampler<T>
where
    T: Clone,
{
    type Item = T;

    #[inline]
    fn next<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Item {
        self.sample(rng).clone()
    }
}

impl<T> Distribution<T> for WeightedSampler<T>
where
    T: Clone,
{
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.items[self.sample_index(rng)].clone()
    }
}
