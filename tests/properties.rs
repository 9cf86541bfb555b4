//! Property tests for placements and the generational loop.

use proptest::prelude::*;
use queens_ga::ga::{Placement, TournamentConfig, TournamentGa, BOARD_SIZE, MAX_CONFLICTS};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rows() -> impl Strategy<Value = [u8; BOARD_SIZE]> {
    prop::array::uniform8(1u8..=8)
}

/// Counts attacking pairs with each pair contributing at most once.
fn exclusive_conflicts(rows: &[u8; BOARD_SIZE]) -> u32 {
    let mut pairs = 0;
    for i in 0..BOARD_SIZE {
        for j in (i + 1)..BOARD_SIZE {
            let dr = (i32::from(rows[j]) - i32::from(rows[i])).abs();
            if dr == 0 || dr == (j - i) as i32 {
                pairs += 1;
            }
        }
    }
    pairs
}

proptest! {
    #[test]
    fn conflict_count_in_range(rows in rows()) {
        let p = Placement::from_rows(rows).unwrap();
        prop_assert!(p.conflict_count() <= MAX_CONFLICTS);
    }

    #[test]
    fn attack_checks_are_mutually_exclusive(rows in rows()) {
        let p = Placement::from_rows(rows).unwrap();
        prop_assert_eq!(p.conflict_count(), exclusive_conflicts(&rows));
    }

    #[test]
    fn fitness_matches_conflicts(rows in rows()) {
        let p = Placement::from_rows(rows).unwrap();
        let fitness = p.fitness();
        prop_assert!((0.0..=1.0).contains(&fitness));
        prop_assert_eq!(fitness == 1.0, p.conflict_count() == 0);
        prop_assert_eq!(fitness == 0.0, p.conflict_count() == MAX_CONFLICTS);
    }

    #[test]
    fn constant_rows_are_worst(row in 1u8..=8) {
        let p = Placement::from_rows([row; BOARD_SIZE]).unwrap();
        prop_assert_eq!(p.conflict_count(), MAX_CONFLICTS);
    }

    #[test]
    fn crossover_without_probability_copies(a in rows(), b in rows(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pa = Placement::from_rows(a).unwrap();
        let pb = Placement::from_rows(b).unwrap();
        let (c1, c2) = pa.crossover(0.0, 6, &pb, &mut rng);
        prop_assert_eq!(c1, pa);
        prop_assert_eq!(c2, pb);
    }

    #[test]
    fn crossover_takes_values_from_parents(
        a in rows(),
        b in rows(),
        splits in 1usize..BOARD_SIZE,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pa = Placement::from_rows(a).unwrap();
        let pb = Placement::from_rows(b).unwrap();
        let (c1, c2) = pa.crossover(1.0, splits, &pb, &mut rng);
        for col in 0..BOARD_SIZE {
            let pair = (c1.row(col), c2.row(col));
            prop_assert!(pair == (a[col], b[col]) || pair == (b[col], a[col]));
        }
    }

    #[test]
    fn mutation_keeps_rows_in_range(a in rows(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut p = Placement::from_rows(a).unwrap();
        for _ in 0..20 {
            p.mutate(1.0, &mut rng);
        }
        prop_assert!(p.rows().iter().all(|&r| (1..=8).contains(&r)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn advance_preserves_population_size(
        population in 2usize..40,
        survivor_share in 0.0f64..1.0,
        tournament_share in 0.0f64..1.0,
        seed in any::<u64>(),
    ) {
        let survivors = ((population as f64 * survivor_share) as usize).min(population - 1);
        let tournament = ((population as f64 * tournament_share) as usize).clamp(1, population);
        let config = TournamentConfig::default()
            .with_population_size(population)
            .with_survivors(survivors)
            .with_tournament_size(tournament)
            .with_seed(seed);
        let mut ga = TournamentGa::from_config(config).unwrap();

        prop_assert_eq!(ga.select_survivors().len(), survivors);
        for _ in 0..5 {
            ga.advance();
            prop_assert_eq!(ga.population().len(), population);
        }
    }
}

#[test]
fn seeded_run_is_reproducible() {
    let config = TournamentConfig::default()
        .with_population_size(120)
        .with_survivors(36)
        .with_tournament_size(30)
        .with_max_generations(10);

    let mut a = TournamentGa::new(config.clone(), StdRng::seed_from_u64(2014)).unwrap();
    let mut b = TournamentGa::new(config, StdRng::seed_from_u64(2014)).unwrap();

    let mut log_a = Vec::new();
    let mut log_b = Vec::new();
    let sa = a.run(|gen, ga| log_a.push(format!("{gen}: {ga}")));
    let sb = b.run(|gen, ga| log_b.push(format!("{gen}: {ga}")));

    assert_eq!(log_a, log_b);
    assert_eq!(sa.generations, sb.generations);
    assert_eq!(a.describe_population(), b.describe_population());
}
