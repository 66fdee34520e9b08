// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};

/// Per-ray random-number state. Each in-flight ray (or worker) owns its
/// own instance; sampling mutates it, so it is never shared.
pub struct Sampler {
    state: u64,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Derive an independent stream for another worker or pixel.
    pub fn fork(base_seed: u64, stream: u64) -> Self {
        Self::new(base_seed.wrapping_mul(0x9E3779B97F4A7C15).wrapping_add(stream))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    pub fn next_1d(&mut self) -> Float {
        (self.next_u32() as Float) / (u32::MAX as Float)
    }

    pub fn next_2d(&mut self) -> Vector2f {
        Vector2f::new(self.next_1d(), self.next_1d())
    }
}

#[cfg(test)]
mod tests {
    use super::Sampler;

    #[test]
    fn test_sampler_range_and_determinism() {
        let mut a = Sampler::new(42);
        let mut b = Sampler::new(42);
        for _ in 0..100 {
            let u = a.next_1d();
            assert!(u >= 0.0 && u <= 1.0);
            assert_eq!(u, b.next_1d());
        }
    }

    #[test]
    fn test_fork_streams_differ() {
        let mut a = Sampler::fork(7, 0);
        let mut b = Sampler::fork(7, 1);
        assert_ne!(a.next_u32(), b.next_u32());
    }
}
