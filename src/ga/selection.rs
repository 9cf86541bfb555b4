//! Survival ranking and tournament selection.
//!
//! Both survivor retention and parent selection rank the population with
//! [`rank_by_survival`], each with its own randomness constant. The rating is
//! a fresh value per ranking pass and never stored on the placement.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use std::cmp::Ordering;

use rand::seq::index;
use rand::Rng;

use super::types::Placement;

/// A placement paired with the survival rating of one ranking pass.
#[derive(Debug, Clone, Copy)]
pub struct Rated<'a> {
    pub rating: f64,
    pub placement: &'a Placement,
}

impl Rated<'_> {
    /// Orders by rating, highest first.
    #[must_use]
    pub fn by_rating_desc(a: &Rated<'_>, b: &Rated<'_>) -> Ordering {
        b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
    }
}

/// Rates every placement and returns them ordered by rating, highest first.
///
/// `population` must already be sorted by [`Placement::by_conflicts`]; its
/// first element supplies the highest fitness used for normalization. The
/// sort is stable, so equal ratings keep the conflict order.
///
/// # Complexity
/// O(n log n)
pub fn rank_by_survival<'a, R: Rng + ?Sized>(
    population: &'a [Placement],
    constant: f64,
    rng: &mut R,
) -> Vec<Rated<'a>> {
    let Some(best) = population.first() else {
        return Vec::new();
    };
    let highest_fitness = best.fitness();

    let mut ranked: Vec<Rated<'a>> = population
        .iter()
        .map(|placement| Rated {
            rating: placement.survival_rating(constant, highest_fitness, rng),
            placement,
        })
        .collect();
    ranked.sort_by(Rated::by_rating_desc);
    ranked
}

/// Tournament over a ranked population.
///
/// Keeps a uniformly random subset of `size` competitors and returns the one
/// ranked highest. Sampling the survivors of the subset directly is
/// equivalent to removing random competitors one at a time until `size`
/// remain.
///
/// # Complexity
/// O(size)
///
/// # Panics
/// Panics if `size` is zero or exceeds `ranked.len()`.
pub fn tournament<'a, R: Rng + ?Sized>(
    ranked: &[Rated<'a>],
    size: usize,
    rng: &mut R,
) -> &'a Placement {
    assert!(
        size > 0 && size <= ranked.len(),
        "tournament size {size} out of range for {} competitors",
        ranked.len()
    );

    let winner = index::sample(rng, ranked.len(), size)
        .into_iter()
        .min()
        .unwrap_or(0);
    ranked[winner].placement
}
