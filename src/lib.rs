//! Genetic algorithm for the eight queens problem.
//!
//! Searches for a placement of eight non-attacking queens on an 8×8 board.
//! Each candidate holds one queen per column, so only rows and diagonals can
//! conflict. The engine combines:
//!
//! - **Randomized survivor retention**: candidates are ranked by a blend of
//!   normalized fitness and noise, and the top slice survives unchanged.
//! - **Tournament selection**: each parent is the best-ranked member of a
//!   random subset, ranked with its own, independent noise level.
//! - **Multi-point crossover** at distinct random split points, followed by
//!   single-position reset mutation.
//!
//! # Example
//!
//! ```
//! use queens_ga::ga::{TournamentConfig, TournamentGa};
//!
//! let config = TournamentConfig::default()
//!     .with_population_size(100)
//!     .with_survivors(30)
//!     .with_tournament_size(24)
//!     .with_max_generations(10)
//!     .with_seed(7);
//! let mut ga = TournamentGa::from_config(config).unwrap();
//! let summary = ga.run(|generation, ga| println!("Generation: {generation}\n{ga}"));
//! assert!(summary.generations <= 10);
//! assert_eq!(ga.population().len(), 100);
//! ```
//!
//! All randomness flows from one generator owned by the engine, so a fixed
//! seed reproduces a run exactly.

pub mod error;
pub mod ga;

pub use error::QueensError;
