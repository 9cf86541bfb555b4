//! Tournament genetic algorithm for eight queens.
//!
//! # Key Types
//!
//! - [`Placement`]: one candidate, one queen per column
//! - [`TournamentConfig`]: population, selection and operator parameters
//! - [`TournamentGa`]: owns the population and runs the generational loop
//! - [`RunSummary`]: outcome of [`TournamentGa::run`]
//!
//! # Submodules
//!
//! - [`operators`]: multi-point crossover and reset mutation on row vectors
//! - [`selection`]: survival ranking and tournament selection
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Russell & Norvig (2010), *Artificial Intelligence: A Modern Approach*, §4.1.4

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::TournamentConfig;
pub use runner::{RunSummary, TournamentGa};
pub use selection::Rated;
pub use types::{Placement, BOARD_SIZE, MAX_CONFLICTS};
