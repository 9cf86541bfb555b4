//! Error types.
//!
//! Every error here is a configuration or input contract violation that is
//! detected up front, before any evolution takes place.

/// Errors reported by [`TournamentConfig::validate`](crate::ga::TournamentConfig::validate)
/// and the checked [`Placement`](crate::ga::Placement) constructor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueensError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("survivors ({survivors}) must be less than population_size ({population_size})")]
    TooManySurvivors {
        survivors: usize,
        population_size: usize,
    },

    #[error("tournament_size ({tournament_size}) must be in 1..={population_size}")]
    InvalidTournamentSize {
        tournament_size: usize,
        population_size: usize,
    },

    #[error("splits ({splits}) must be in 1..={max}")]
    InvalidSplitCount { splits: usize, max: usize },

    #[error("{name} must be a finite value in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("row {row} in column {col} is outside 1..={max}")]
    RowOutOfRange { col: usize, row: u8, max: u8 },
}
