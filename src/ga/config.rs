//! Engine configuration.
//!
//! [`TournamentConfig`] holds all parameters that control the evolutionary loop.

use super::types::BOARD_SIZE;
use crate::QueensError;

/// Configuration for [`TournamentGa`](super::TournamentGa).
///
/// # Defaults
///
/// The defaults are the reference parameter set for the eight queens run.
///
/// ```
/// use queens_ga::ga::TournamentConfig;
///
/// let config = TournamentConfig::default();
/// assert_eq!(config.population_size, 500);
/// assert_eq!(config.survivors, 150);
/// assert_eq!(config.tournament_size, 120);
/// assert_eq!(config.max_generations, 30);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queens_ga::ga::TournamentConfig;
///
/// let config = TournamentConfig::default()
///     .with_population_size(200)
///     .with_survivors(40)
///     .with_tournament_size(20)
///     .with_mutation_probability(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentConfig {
    /// Number of placements in every generation.
    pub population_size: usize,

    /// Number of placements carried over unchanged into the next generation.
    ///
    /// Must be less than `population_size`.
    pub survivors: usize,

    /// Randomness of survivor retention (0 = fully random, 1 = pure fitness).
    pub survival_constant: f64,

    /// Number of distinct split points used by crossover (1..=7).
    pub splits: usize,

    /// Probability that a pair of parents is crossed over instead of copied.
    pub crossover_probability: f64,

    /// Probability that a child has one queen moved.
    pub mutation_probability: f64,

    /// Number of competitors in each parent tournament.
    ///
    /// Higher values give stronger selection pressure.
    pub tournament_size: usize,

    /// Randomness of the tournament ranking (0 = fully random, 1 = pure fitness).
    pub tournament_constant: f64,

    /// Generation cap used by [`TournamentGa::run`](super::TournamentGa::run).
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from operating system entropy.
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            survivors: 150,
            survival_constant: 0.5,
            splits: 6,
            crossover_probability: 1.0,
            mutation_probability: 0.001,
            tournament_size: 120,
            tournament_constant: 0.3,
            max_generations: 30,
            seed: None,
        }
    }
}

impl TournamentConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_survivors(mut self, n: usize) -> Self {
        self.survivors = n;
        self
    }

    /// Sets the survival constant, clamped to `[0, 1]`.
    pub fn with_survival_constant(mut self, c: f64) -> Self {
        self.survival_constant = c.clamp(0.0, 1.0);
        self
    }

    pub fn with_splits(mut self, n: usize) -> Self {
        self.splits = n;
        self
    }

    /// Sets the crossover probability, clamped to `[0, 1]`.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation probability, clamped to `[0, 1]`.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the tournament constant, clamped to `[0, 1]`.
    pub fn with_tournament_constant(mut self, c: f64) -> Self {
        self.tournament_constant = c.clamp(0.0, 1.0);
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of children bred per generation.
    #[must_use]
    pub fn children_per_generation(&self) -> usize {
        self.population_size.saturating_sub(self.survivors)
    }

    /// Validates the configuration.
    ///
    /// Rejects every parameter combination the engine cannot run with, so a
    /// bad configuration fails at construction rather than mid-run.
    pub fn validate(&self) -> Result<(), QueensError> {
        if self.population_size == 0 {
            return Err(QueensError::EmptyPopulation);
        }
        if self.survivors >= self.population_size {
            return Err(QueensError::TooManySurvivors {
                survivors: self.survivors,
                population_size: self.population_size,
            });
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(QueensError::InvalidTournamentSize {
                tournament_size: self.tournament_size,
                population_size: self.population_size,
            });
        }
        if self.splits == 0 || self.splits >= BOARD_SIZE {
            return Err(QueensError::InvalidSplitCount {
                splits: self.splits,
                max: BOARD_SIZE - 1,
            });
        }
        for (name, value) in [
            ("survival_constant", self.survival_constant),
            ("crossover_probability", self.crossover_probability),
            ("mutation_probability", self.mutation_probability),
            ("tournament_constant", self.tournament_constant),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(QueensError::OutOfUnitRange { name, value });
            }
        }
        if self.max_generations == 0 {
            return Err(QueensError::ZeroGenerations);
        }
        Ok(())
    }
}
