//! Runs the eight queens search with the reference parameters, printing the
//! best placement of every generation.

use queens_ga::ga::{TournamentConfig, TournamentGa};
use queens_ga::QueensError;

fn main() -> Result<(), QueensError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut ga = TournamentGa::from_config(TournamentConfig::default())?;

    println!();
    let max_generations = ga.config().max_generations;
    let summary = ga.run(|generation, ga| {
        println!("Generation: {generation}");
        println!("{ga}");
        let is_last = generation == max_generations || ga.is_optimal();
        if !is_last {
            println!();
        }
    });

    if summary.optimal {
        println!();
        println!("OPTIMAL SOLUTION FOUND");
    }
    Ok(())
}
