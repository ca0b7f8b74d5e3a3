//! A small, fully deterministic generator.
//!
//! Same seed, same stream, on every platform: datasets and initial weights can
//! be reproduced exactly from a single `u64`.

use rand::{Error, RngCore, SeedableRng};

/// Seed used in place of zero, which is a fixed point of xorshift.
const ZERO_SEED_REPLACEMENT: u64 = 0x9E37_79B9_7F4A_7C15;
const OUTPUT_MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;

/// 64-bit xorshift with a multiplicative output stage.
///
/// Implements [`RngCore`], so it works anywhere a `rand::Rng` is expected,
/// including model initialisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShiftRng {
    state: u64,
}

impl XorShiftRng {
    /// A zero seed is replaced by a fixed non-zero constant.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        XorShiftRng { state }
    }

    fn advance(&mut self) -> u32 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        (self.state.wrapping_mul(OUTPUT_MULTIPLIER) >> 32) as u32
    }

    /// A float in `[0, 1)` built from the top 24 bits of the next output.
    pub fn random_f32(&mut self) -> f32 {
        (self.advance() >> 8) as f32 / 16_777_216.0
    }

    /// A float in `[a, b)`.
    pub fn uniform(&mut self, a: f32, b: f32) -> f32 {
        a + (b - a) * self.random_f32()
    }
}

impl RngCore for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    // Low half first.
    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.advance());
        let high = u64::from(self.advance());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.advance().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShiftRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    /// Uses `state` directly as the internal state.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
