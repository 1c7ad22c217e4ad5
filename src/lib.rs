pub mod analytic;
pub mod config;
pub mod report;
pub mod scenario;
pub mod simulate;

pub use analytic::{exact_odds, Odds};
pub use config::Config;
pub use scenario::{FixedScorer, Outcome, Scenario, Shooter};
pub use simulate::{play_game, simulate, sweep, Convergence, Tally};

use anyhow::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// terminal logging, info by default and debug when verbose.
pub fn log(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

pub struct ScenarioResult {
    pub scenario: Scenario,
    pub exact: Odds,
    pub rows: Vec<Convergence>,
}

/// exact odds and a simulation sweep for every configured scenario.
///
/// one generator is seeded here and shared by every game of the run, so a seed
/// reproduces the whole output.
pub fn run(config: &Config, seed: u64) -> Result<Vec<ScenarioResult>> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(config.scenarios.len());
    for scenario in &config.scenarios {
        let exact = exact_odds(scenario)?;
        log::debug!("{}: exact {:?}", scenario.name, exact);
        let rows = sweep(scenario, &exact, &config.sample_sizes, &mut rng);
        results.push(ScenarioResult {
            scenario: scenario.clone(),
            exact,
            rows,
        });
    }
    Ok(results)
}
