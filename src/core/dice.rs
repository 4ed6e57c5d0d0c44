use crate::domain::ports::{DiceRoller, NamePicker};
use crate::utils::error::{Result, WorldGenError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Six-sided dice backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct Dice<R: Rng> {
    rng: R,
}

impl<R: Rng> Dice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Dice<ChaCha8Rng> {
    /// Reproducible dice for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> DiceRoller for Dice<R> {
    fn roll(&mut self, count: i32) -> Result<i32> {
        if count < 1 {
            return Err(WorldGenError::invalid_argument(
                "dice count",
                count,
                "at least one die must be rolled",
            ));
        }
        Ok((0..count).map(|_| self.rng.gen_range(1..=6i32)).sum())
    }
}

impl<R: Rng> NamePicker for Dice<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
