//! Weighted random selection over a fixed set of items.
//!
//! [`WeightedSampler`] is the core primitive. [`Experiment`] bundles a list of
//! weighted choices with a draw count and an optional seed, and tallies the
//! draws into [`Frequencies`].

pub mod generator;

mod error;
mod frequency;

use core::hash::Hash;

use bon::Builder;
use rand::Rng;
use rand::SeedableRng as _;
use rand::rngs::StdRng;

pub use error::Error;
pub use frequency::Frequencies;
pub use generator::Generator;
pub use generator::WeightedSampler;

pub mod preset;

#[derive(Builder, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Experiment<T> {
    pub choices: Vec<Choice<T>>,

    /// Defaults to one draw per choice.
    #[cfg_attr(feature = "serde", serde(alias = "samplecount", default))]
    pub sample_count: Option<usize>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Choice<T> {
    #[cfg_attr(feature = "serde", serde(alias = "name"))]
    pub item: T,
    pub weight: f64,
}

impl<T> Choice<T> {
    pub fn new(item: T, weight: f64) -> Self {
        Self { item, weight }
    }
}

impl<T> From<(T, f64)> for Choice<T> {
    fn from((item, weight): (T, f64)) -> Self {
        Self { item, weight }
    }
}

impl<T> Experiment<T> {
    pub fn sample_count(&self) -> usize {
        self.sample_count.unwrap_or(self.choices.len())
    }

    /// Sum of the configured weights, without validating them.
    pub fn total_weight(&self) -> f64 {
        self.choices.iter().map(|choice| choice.weight).sum()
    }
}

impl<T> Experiment<T>
where
    T: Clone,
{
    pub fn sampler(&self) -> Result<WeightedSampler<T>, Error> {
        WeightedSampler::new(
            self.choices
                .iter()
                .map(|choice| (choice.item.clone(), choice.weight)),
        )
    }
}

impl<T> Experiment<T>
where
    T: Clone + Eq + Hash,
{
    /// Draws `sample_count()` items from `rng` and tallies them.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Frequencies<T>, Error> {
        let sampler = self.sampler()?;
        Ok((0..self.sample_count())
            .map(|_| sampler.next(rng))
            .collect())
    }

    /// Like [`Experiment::run_with_rng`], seeded from `seed` when set and
    /// from the thread-local generator otherwise.
    pub fn run(&self) -> Result<Frequencies<T>, Error> {
        match self.seed {
            Some(seed) => self.run_with_rng(&mut StdRng::seed_from_u64(seed)),
            None => self.run_with_rng(&mut rand::rng()),
        }
    }
}
