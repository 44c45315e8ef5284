//! Deterministic random number generation
//!
//! Reference implementations of the xorshift128 and xorshift128+ generators,
//! plus the linear congruential generator used to expand single-word seeds.
//! CRITICAL: every sequence must be reproducible bit-for-bit from its seed.

mod lcg;
mod xorshift128;
mod xorshift128plus;

pub use lcg::Lcg;
pub use xorshift128::XorShift128;
pub use xorshift128plus::XorShift128Plus;

use thiserror::Error;

/// Errors that can occur when seeding a generator
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("Seed must be non-zero")]
    ZeroSeed,

    #[error("Seed state must contain at least one non-zero word")]
    ZeroState,
}
