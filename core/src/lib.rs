//! XorShift Oracle - Reference Generators
//!
//! Deterministic pseudo-random number generators used as reference oracles:
//! given a fixed seed, each produces an exact sequence of integers that
//! other implementations of the same algorithm must match bit-for-bit.
//!
//! # Architecture
//!
//! - **rng**: the generators (xorshift128, xorshift128+, and the LCG used
//!   for seed expansion)
//!
//! # Critical Invariants
//!
//! 1. All register arithmetic wraps modulo 2^32 / 2^64 (never traps)
//! 2. Same seed produces the same sequence, bit for bit
//! 3. Each generator owns its registers; there is no global state

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{Lcg, SeedError, XorShift128, XorShift128Plus};
