//! Generational loop execution.
//!
//! [`TournamentGa`] owns the population and advances it one generation at a
//! time: survivor retention → tournament selection → crossover → mutation →
//! replacement.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use super::config::TournamentConfig;
use super::selection::{rank_by_survival, tournament};
use super::types::Placement;
use crate::QueensError;

/// Result of [`TournamentGa::run`].
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Index of the last generation reported (the first generation is 1).
    pub generations: usize,

    /// Whether the last generation contains a placement without conflicts.
    pub optimal: bool,

    /// Best placement of the last generation.
    pub best: Placement,

    /// Best fitness of each reported generation.
    pub fitness_history: Vec<f64>,
}

/// Tournament-selection genetic algorithm for the eight queens problem.
///
/// The population is kept sorted by [`Placement::by_conflicts`] between
/// generations, so the best placement is always at the front.
///
/// # Usage
///
/// ```
/// use queens_ga::ga::{TournamentConfig, TournamentGa};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let config = TournamentConfig::default()
///     .with_population_size(100)
///     .with_survivors(30)
///     .with_tournament_size(20);
/// let mut ga = TournamentGa::new(config, StdRng::seed_from_u64(42)).unwrap();
///
/// while !ga.is_optimal() && ga.generation() < 10 {
///     ga.advance();
/// }
/// println!("{ga}");
/// ```
#[derive(Debug, Clone)]
pub struct TournamentGa<R = StdRng> {
    config: TournamentConfig,
    population: Vec<Placement>,
    generation: usize,
    rng: R,
}

impl TournamentGa<StdRng> {
    /// Creates an engine seeded from `config.seed`, or from operating system
    /// entropy when no seed is set.
    pub fn from_config(config: TournamentConfig) -> Result<Self, QueensError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(config, rng)
    }
}

impl<R: Rng> TournamentGa<R> {
    /// Validates `config` and generates a random initial population.
    pub fn new(config: TournamentConfig, mut rng: R) -> Result<Self, QueensError> {
        config.validate()?;

        let mut population: Vec<Placement> = (0..config.population_size)
            .map(|_| Placement::random(&mut rng))
            .collect();
        population.sort_by(Placement::by_conflicts);

        debug!(
            population_size = config.population_size,
            best_conflicts = population[0].conflict_count(),
            "generated initial population"
        );

        Ok(Self {
            config,
            population,
            generation: 0,
            rng,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// The current population, fewest conflicts first.
    #[must_use]
    pub fn population(&self) -> &[Placement] {
        &self.population
    }

    /// Number of completed [`advance`](Self::advance) calls.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The placement with the fewest conflicts.
    #[must_use]
    pub fn best(&self) -> &Placement {
        &self.population[0]
    }

    /// Returns `true` if the population contains a placement with fitness 1.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.best().fitness() == 1.0
    }

    /// `Solution: (v0, ..., v7) (fitness: F)` for the best placement.
    #[must_use]
    pub fn describe_best(&self) -> String {
        let best = self.best();
        format!("Solution: {best} (fitness: {:?})", best.fitness())
    }

    /// One line per placement, best first: rows, fitness and 1-based rank.
    #[must_use]
    pub fn describe_population(&self) -> String {
        self.population
            .iter()
            .enumerate()
            .map(|(i, placement)| format!("{placement} {:.5} {}", placement.fitness(), i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Ranks the population with the survival constant and keeps the first
    /// `survivors` placements.
    pub fn select_survivors(&mut self) -> Vec<Placement> {
        rank_by_survival(
            &self.population,
            self.config.survival_constant,
            &mut self.rng,
        )
        .into_iter()
        .take(self.config.survivors)
        .map(|rated| rated.placement.clone())
        .collect()
    }

    /// Picks one parent by tournament.
    ///
    /// Every call ranks the whole population afresh with the tournament
    /// constant, so successive parents are independent draws.
    pub fn select_parent(&mut self) -> Placement {
        let ranked = rank_by_survival(
            &self.population,
            self.config.tournament_constant,
            &mut self.rng,
        );
        tournament(&ranked, self.config.tournament_size, &mut self.rng).clone()
    }

    /// Breeds exactly `population_size - survivors` children from the
    /// current population.
    ///
    /// Children come in pairs; the second child of the last pair is dropped
    /// when the target count is odd.
    pub fn breed_children(&mut self) -> Vec<Placement> {
        let target = self.config.children_per_generation();
        let mut children = Vec::with_capacity(target);

        while children.len() < target {
            let parent1 = self.select_parent();
            let parent2 = self.select_parent();
            let (mut child1, mut child2) = parent1.crossover(
                self.config.crossover_probability,
                self.config.splits,
                &parent2,
                &mut self.rng,
            );
            child1.mutate(self.config.mutation_probability, &mut self.rng);
            child2.mutate(self.config.mutation_probability, &mut self.rng);

            children.push(child1);
            if children.len() < target {
                children.push(child2);
            }
        }
        children
    }

    /// Replaces the population with the survivors followed by children bred
    /// from the pre-replacement population.
    pub fn advance(&mut self) {
        let survivors = self.select_survivors();
        let children = self.breed_children();

        let mut next = survivors;
        next.extend(children);
        debug_assert_eq!(next.len(), self.config.population_size);
        next.sort_by(Placement::by_conflicts);

        self.population = next;
        self.generation += 1;

        debug!(
            generation = self.generation,
            best_conflicts = self.best().conflict_count(),
            best_fitness = self.best().fitness(),
            "advanced generation"
        );
    }

    /// Runs the generational loop until an optimal placement appears or the
    /// generation cap is reached.
    ///
    /// Generations are numbered from 1. `on_generation` sees every generation
    /// including the last one; the population is advanced only while the
    /// current generation is below `max_generations` and not optimal.
    #[instrument(level = "info", skip_all, fields(max_generations = self.config.max_generations))]
    pub fn run<F>(&mut self, mut on_generation: F) -> RunSummary
    where
        F: FnMut(usize, &Self),
    {
        let mut generation = 1;
        let mut fitness_history = Vec::with_capacity(self.config.max_generations);

        while generation < self.config.max_generations && !self.is_optimal() {
            on_generation(generation, &*self);
            fitness_history.push(self.best().fitness());
            self.advance();
            generation += 1;
        }
        on_generation(generation, &*self);
        fitness_history.push(self.best().fitness());

        let optimal = self.is_optimal();
        if optimal {
            info!(generation, best = %self.best(), "found optimal placement");
        } else {
            info!(
                generation,
                best_fitness = self.best().fitness(),
                "generation cap reached"
            );
        }

        RunSummary {
            generations: generation,
            optimal,
            best: self.best().clone(),
            fitness_history,
        }
    }
}

impl<R: Rng> fmt::Display for TournamentGa<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe_best())
    }
}

// ============================================================================
// Tests
// ============================================================================
