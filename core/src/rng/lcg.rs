//! Linear congruential generator
//!
//! 32-bit multiplicative LCG with the Delphi/TurboPascal parameters
//! (a = 134775813, c = 1, m = 2^32). Statistically weak on its own; its
//! job here is to expand a single 32-bit seed word into a full 128-bit
//! xorshift128 state.

use crate::rng::SeedError;

/// LCG multiplier (a); increment is 1, modulus is 2^32
const MULTIPLIER: u32 = 134_775_813;

/// 32-bit linear congruential generator
///
/// # Example
/// ```
/// use xorshift_oracle_core::Lcg;
///
/// let mut lcg = Lcg::new(12345).unwrap();
/// assert_eq!(lcg.next_u32(), 1655067934);
/// ```
#[derive(Debug, Clone)]
pub struct Lcg {
    /// Internal state (32-bit)
    state: u32,
}

impl Lcg {
    /// Create a new LCG with the given seed
    ///
    /// # Arguments
    /// * `seed` - Initial state; must be non-zero
    ///
    /// # Errors
    /// Returns [`SeedError::ZeroSeed`] if `seed` is zero.
    pub fn new(seed: u32) -> Result<Self, SeedError> {
        if seed == 0 {
            return Err(SeedError::ZeroSeed);
        }
        Ok(Self { state: seed })
    }

    /// Advance the state and return it as a raw u32
    ///
    /// All arithmetic wraps modulo 2^32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(1);
        self.state
    }

    /// Advance the state and return it scaled to [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use xorshift_oracle_core::Lcg;
    ///
    /// let mut lcg = Lcg::new(1).unwrap();
    /// let value = lcg.next_f64();
    /// assert!(value >= 0.0 && value < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        // Convert to [0.0, 1.0) by dividing by 2^32
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_rejected() {
        assert_eq!(Lcg::new(0).unwrap_err(), SeedError::ZeroSeed);
    }

    #[test]
    fn test_known_sequence_from_seed_one() {
        let mut lcg = Lcg::new(1).unwrap();
        assert_eq!(lcg.next_u32(), 134775814);
        assert_eq!(lcg.next_u32(), 3698175007);
        assert_eq!(lcg.next_u32(), 870078620);
        assert_eq!(lcg.next_u32(), 1172187917);
    }

    #[test]
    fn test_next_f64_in_unit_interval() {
        let mut lcg = Lcg::new(99999).unwrap();
        for _ in 0..1000 {
            let val = lcg.next_f64();
            assert!(
                (0.0..1.0).contains(&val),
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }
}
