//! Row-vector genetic operators.
//!
//! Crossover and mutation on `&[u8]` row vectors where index = column and
//! value = row (1-based). Placement rows are not permutations, so these
//! operators may freely repeat values.
//!
//! # Crossover
//!
//! - [`random_split_points`]: distinct interior cut points, sorted
//! - [`multi_point_crossover`]: alternating segment splice at given points
//!
//! # Mutation
//!
//! - [`reset_mutation`]: reassign one random position to a random row

use rand::seq::index;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Draws `count` distinct split points uniformly from `1..len`, sorted ascending.
///
/// `0` and `len` are never drawn since a cut there leaves a parent intact.
///
/// # Panics
/// Panics if `count >= len`. Callers validate the split count up front.
pub fn random_split_points<R: Rng + ?Sized>(len: usize, count: usize, rng: &mut R) -> Vec<usize> {
    assert!(
        count < len,
        "cannot draw {count} distinct split points from 1..{len}"
    );

    let mut points: Vec<usize> = index::sample(rng, len - 1, count)
        .into_iter()
        .map(|i| i + 1)
        .collect();
    points.sort_unstable();
    points
}

/// Multi-point crossover at the given sorted split points.
///
/// Segment `j` (the values between split `j - 1` and split `j`) of the first
/// child comes from `parent1` when `j` is even and from `parent2` when `j` is
/// odd. The second child always takes the other parent's segment.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn multi_point_crossover<T: Copy>(
    parent1: &[T],
    parent2: &[T],
    split_points: &[usize],
) -> (Vec<T>, Vec<T>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");

    let mut child1 = Vec::with_capacity(parent1.len());
    let mut child2 = Vec::with_capacity(parent2.len());
    let mut splits = split_points.iter().peekable();
    let mut segment = 0usize;

    for (i, (&a, &b)) in parent1.iter().zip(parent2).enumerate() {
        while splits.next_if(|&&p| p == i).is_some() {
            segment += 1;
        }
        if segment % 2 == 0 {
            child1.push(a);
            child2.push(b);
        } else {
            child1.push(b);
            child2.push(a);
        }
    }

    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Reset mutation: assigns a uniformly random row in `1..=max_row` to one
/// uniformly random position.
///
/// The new value may equal the old one.
///
/// # Complexity
/// O(1)
pub fn reset_mutation<R: Rng + ?Sized>(rows: &mut [u8], max_row: u8, rng: &mut R) {
    if rows.is_empty() {
        return;
    }
    let col = rng.random_range(0..rows.len());
    rows[col] = rng.random_range(1..=max_row);
}

// ============================================================================
// Tests
// ============================================================================
