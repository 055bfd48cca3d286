use rand::Rng;

mod weighted;

pub use weighted::WeightedSampler;

pub trait Generator {
    type Item;
    fn next<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Item;
}
