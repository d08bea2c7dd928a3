use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable random source owned by a game session.
///
/// The seed is kept so a game can be reproduced from the log line that
/// announced it.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_random(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }
}
