use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations reported by the generators.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid range: max ({max}) is less than min ({min})")]
    InvertedRange { min: i32, max: i32 },
    #[error("seed array must contain at least one word")]
    EmptySeeds,
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}
