mod approx;
pub mod binomial;
pub mod combat;
mod distribution;
pub mod math;
pub mod prelude;
pub mod stats;

pub use approx::Approx;
pub use distribution::ProbabilityDistribution;
use thiserror::Error;

pub type Result<T> = ::core::result::Result<T, Error>;

/// Faces on the die every stage is rolled with.
pub const DIE_FACES: u32 = 6;
pub const MIN_THRESHOLD: u8 = 2;
pub const MAX_THRESHOLD: u8 = 6;

const APPROX_SAMPLE_SIZE: u32 = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    #[error("probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
    #[error("{successes} successes requested out of {trials} trials")]
    SuccessesOutOfRange { trials: u32, successes: u32 },
    #[error("threshold {0}+ is outside 2+..=6+")]
    InvalidThreshold(u8),
    #[error("single trial has no possible results")]
    ZeroPossibleResults,
    #[error("defender toughness is zero")]
    DivideByZero,
    #[error("distribution is empty")]
    EmptyDistribution,
    #[error("distribution holds less than half of the probability mass")]
    InsufficientMass,
    #[error("overflow in binomial coefficient")]
    Overflow,
}
