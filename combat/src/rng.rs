use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Every random decision the engine makes goes through this trait so that
/// tests can script outcomes.
pub trait CombatRng {
    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `[0, max)`. Returns 0 when `max` is 0.
    fn gen_range(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        ((self.next_f64() * max as f64) as usize).min(max - 1)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_range(i + 1);
            slice.swap(i, j);
        }
    }
}

#[derive(Clone, Debug)]
pub struct SeededRng(pub StdRng);

impl SeededRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_rng(&mut rand::rng()))
    }
}

impl CombatRng for SeededRng {
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }

    fn gen_range(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        self.0.random_range(0..max)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rng_is_deterministic() {
        let mut a = SeededRng::seed_from_u64(7);
        let mut b = SeededRng::seed_from_u64(7);
        for _ in 0..32 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn gen_range_stays_in_bounds() {
        let mut rng = SeededRng::seed_from_u64(1);
        assert_eq!(rng.gen_range(0), 0);
        for _ in 0..256 {
            assert!(rng.gen_range(3) < 3);
        }
    }
}
