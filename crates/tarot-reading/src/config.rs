//! Configuration for a reading session.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tarot_deck::REVERSAL_CHANCE;
use tarot_deck::draw::clamp_probability;

/// Configuration for a reading session.
#[derive(Debug, Clone)]
pub struct ReadingConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Probability that each drawn card is reversed (0-1).
    pub reversal_chance: f64,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reversal_chance: REVERSAL_CHANCE,
        }
    }
}

impl ReadingConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the reversal chance (clamped to 0-1).
    pub fn with_reversal_chance(mut self, chance: f64) -> Self {
        self.reversal_chance = clamp_probability(chance);
        self
    }

    /// Build the random generator this configuration describes.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn default_config() {
        let cfg = ReadingConfig::default();
        assert!(cfg.seed.is_none());
        assert_eq!(cfg.reversal_chance, 0.2);
    }

    #[test]
    fn builder_methods() {
        let cfg = ReadingConfig::default()
            .with_seed(123)
            .with_reversal_chance(0.5);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.reversal_chance, 0.5);
    }

    #[test]
    fn reversal_chance_clamped() {
        let cfg = ReadingConfig::default().with_reversal_chance(-3.0);
        assert_eq!(cfg.reversal_chance, 0.0);
        let cfg = ReadingConfig::default().with_reversal_chance(4.0);
        assert_eq!(cfg.reversal_chance, 1.0);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = ReadingConfig::default().with_seed(9);
        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }
}
