/// Errors raised while building a [`WeightedSampler`](crate::WeightedSampler).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// No choices were supplied.
    EmptyInput,
    /// Weight at `index` is non-positive, NaN, or infinite.
    InvalidWeight { index: usize, weight: f64 },
    /// Accumulated weight is not positive.
    NonPositiveTotal(f64),
    /// Accumulated weight overflowed.
    NonFiniteTotal(f64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "choices must not be empty"),
            Self::InvalidWeight { index, weight } => {
                write!(f, "weight must be finite and > 0 (got {weight} at index {index})")
            }
            Self::NonPositiveTotal(total) => write!(f, "total weight must be > 0 (got {total})"),
            Self::NonFiniteTotal(total) => write!(f, "total weight must be finite (got {total})"),
        }
    }
}

impl std::error::Error for Error {}
