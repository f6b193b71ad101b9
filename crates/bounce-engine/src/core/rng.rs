//! Seedable pseudo-random number generator (xorshift64).
//! Every consumer owns its own instance; there is no global random state.

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        // Top 53 bits fill the mantissa exactly.
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform float in [lower, upper). Returns `lower` when the range is empty.
    pub fn range(&mut self, lower: f64, upper: f64) -> f64 {
        lower + self.next_f64() * (upper - lower)
    }

    /// Magnitude uniform in [min, max) with a random sign.
    pub fn signed(&mut self, min: f64, max: f64) -> f64 {
        let magnitude = self.range(min, max);
        if self.next_u64() & 1 == 0 { magnitude } else { -magnitude }
    }
}
