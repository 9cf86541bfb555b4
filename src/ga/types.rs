//! Candidate representation for the eight queens search.
//!
//! A [`Placement`] puts exactly one queen in every column, so two queens can
//! only attack each other along a row or a diagonal.

use std::cmp::Ordering;
use std::fmt;

use rand::Rng;

use super::operators::{multi_point_crossover, random_split_points, reset_mutation};
use crate::QueensError;

/// Number of columns, rows and queens.
pub const BOARD_SIZE: usize = 8;

/// Number of attacking pairs when every queen attacks every other one.
///
/// The first queen pairs with seven others, the second with six, and so on:
/// `BOARD_SIZE * (BOARD_SIZE - 1) / 2`.
pub const MAX_CONFLICTS: u32 = (BOARD_SIZE * (BOARD_SIZE - 1) / 2) as u32;

const MAX_ROW: u8 = BOARD_SIZE as u8;

/// One candidate solution: the row of the queen in each column.
///
/// `rows[col] = row` with `row` in `1..=8`.
///
/// # Examples
///
/// ```
/// use queens_ga::ga::Placement;
///
/// let solved = Placement::from_rows([1, 5, 8, 6, 3, 7, 2, 4]).unwrap();
/// assert_eq!(solved.conflict_count(), 0);
/// assert_eq!(solved.fitness(), 1.0);
/// assert_eq!(solved.to_string(), "(1, 5, 8, 6, 3, 7, 2, 4)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "[u8; 8]", into = "[u8; 8]")
)]
pub struct Placement {
    rows: [u8; BOARD_SIZE],
}

impl Placement {
    /// Creates a placement with every queen in a uniformly random row.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            rows: std::array::from_fn(|_| rng.random_range(1..=MAX_ROW)),
        }
    }

    /// Creates a placement from explicit rows, checking they are in `1..=8`.
    pub fn from_rows(rows: [u8; BOARD_SIZE]) -> Result<Self, QueensError> {
        if let Some((col, &row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| !(1..=MAX_ROW).contains(*row))
        {
            return Err(QueensError::RowOutOfRange {
                col,
                row,
                max: MAX_ROW,
            });
        }
        Ok(Self { rows })
    }

    /// Rows built by the operators are in range by construction.
    fn from_vec(rows: Vec<u8>) -> Self {
        let mut fixed = [0u8; BOARD_SIZE];
        fixed.copy_from_slice(&rows);
        Self { rows: fixed }
    }

    /// Returns the row of the queen in the given column.
    ///
    /// # Panics
    /// Panics if `col >= BOARD_SIZE`.
    #[must_use]
    pub fn row(&self, col: usize) -> u8 {
        self.rows[col]
    }

    #[must_use]
    pub fn rows(&self) -> &[u8; BOARD_SIZE] {
        &self.rows
    }

    /// Counts attacking pairs of queens.
    ///
    /// For each column `i` and each column `j > i`, the pair attacks if the
    /// queen in `j` is in the same row, `j - i` rows above, or `j - i` rows
    /// below. The three checks are evaluated independently; for in-range
    /// rows at most one of them can hold.
    ///
    /// Result is in `0..=MAX_CONFLICTS`.
    #[must_use]
    pub fn conflict_count(&self) -> u32 {
        let mut pairs = 0;
        for i in 0..BOARD_SIZE {
            let ri = i32::from(self.rows[i]);
            for j in (i + 1)..BOARD_SIZE {
                let rj = i32::from(self.rows[j]);
                let dist = (j - i) as i32;
                if rj == ri {
                    pairs += 1;
                }
                if rj == ri + dist {
                    pairs += 1;
                }
                if rj == ri - dist {
                    pairs += 1;
                }
            }
        }
        pairs
    }

    /// Fitness in `[0, 1]`: `1 - conflicts / MAX_CONFLICTS`.
    ///
    /// `1.0` means no attacking pairs.
    #[must_use]
    pub fn fitness(&self) -> f64 {
        1.0 - f64::from(self.conflict_count()) / f64::from(MAX_CONFLICTS)
    }

    #[must_use]
    pub fn is_solution(&self) -> bool {
        self.conflict_count() == 0
    }

    /// May derive two children by multi-point crossover with `other`.
    ///
    /// With probability `probability`, `splits` distinct split points are
    /// drawn and the parents' segments alternate between them. Otherwise the
    /// children are fresh copies of `self` and `other`.
    ///
    /// # Panics
    /// Panics if crossover happens and `splits >= BOARD_SIZE`.
    pub fn crossover<R: Rng + ?Sized>(
        &self,
        probability: f64,
        splits: usize,
        other: &Placement,
        rng: &mut R,
    ) -> (Placement, Placement) {
        if rng.random::<f64>() < probability {
            let points = random_split_points(BOARD_SIZE, splits, rng);
            let (a, b) = multi_point_crossover(&self.rows, &other.rows, &points);
            (Self::from_vec(a), Self::from_vec(b))
        } else {
            (self.clone(), other.clone())
        }
    }

    /// With probability `probability`, moves the queen of one random column
    /// to a random row (possibly the row it already occupies).
    pub fn mutate<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) {
        if rng.random::<f64>() < probability {
            reset_mutation(&mut self.rows, MAX_ROW, rng);
        }
    }

    /// Survival rating against the best fitness in the population.
    ///
    /// `constant * fitness / highest_fitness + (1 - constant) * U[0, 1)`.
    /// A constant of `1` ranks purely by fitness, `0` purely at random.
    /// Returns `0` when `highest_fitness` is zero, without drawing.
    pub fn survival_rating<R: Rng + ?Sized>(
        &self,
        constant: f64,
        highest_fitness: f64,
        rng: &mut R,
    ) -> f64 {
        if highest_fitness == 0.0 {
            return 0.0;
        }
        constant * self.fitness() / highest_fitness + (1.0 - constant) * rng.random::<f64>()
    }

    /// Orders placements by conflict count, fewest first.
    #[must_use]
    pub fn by_conflicts(a: &Placement, b: &Placement) -> Ordering {
        a.conflict_count().cmp(&b.conflict_count())
    }
}

impl TryFrom<[u8; BOARD_SIZE]> for Placement {
    type Error = QueensError;

    fn try_from(rows: [u8; BOARD_SIZE]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Placement> for [u8; BOARD_SIZE] {
    fn from(placement: Placement) -> Self {
        placement.rows
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{row}")?;
        }
        f.write_str(")")
    }
}
