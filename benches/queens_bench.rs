//! Criterion benchmarks for the eight queens engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use queens_ga::ga::{Placement, TournamentConfig, TournamentGa};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_conflict_count(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let placements: Vec<Placement> = (0..1000).map(|_| Placement::random(&mut rng)).collect();

    c.bench_function("conflict_count_1000", |b| {
        b.iter(|| {
            placements
                .iter()
                .map(|p| black_box(p).conflict_count())
                .sum::<u32>()
        })
    });
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    group.sample_size(10);

    for (pop, survivors, tournament) in [(100usize, 30usize, 24usize), (500, 150, 120)] {
        let config = TournamentConfig::default()
            .with_population_size(pop)
            .with_survivors(survivors)
            .with_tournament_size(tournament)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("p{pop}_s{survivors}_t{tournament}")),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut ga = TournamentGa::from_config(config.clone()).unwrap();
                    ga.advance();
                    black_box(ga.best().conflict_count())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_conflict_count, bench_advance);
criterion_main!(benches);
