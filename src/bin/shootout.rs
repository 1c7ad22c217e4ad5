use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::prelude::*;

use lib::{report, run, Config};

/// shots versus a sure thing: exact binomial odds next to a monte carlo estimate
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opt {
    /// scenario file, built in scenarios are used if it doesn't exist
    #[arg(long, default_value = "shootout.toml")]
    config: PathBuf,
    /// seed for the run's random number generator
    #[arg(long)]
    seed: Option<u64>,
    /// simulated game counts, overrides the config file
    #[arg(long, num_args = 1..)]
    samples: Option<Vec<usize>>,
    /// write the effective config to --config and exit
    #[arg(long)]
    write_config: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let opts = Opt::parse();
    lib::log(opts.verbose)?;

    let mut config = Config::load_or_default(&opts.config)?;
    config.apply_overrides(opts.seed, opts.samples);
    config.validate()?;

    if opts.write_config {
        config.save(&opts.config)?;
        log::info!("wrote config to {}", opts.config.display());
        return Ok(());
    }

    let seed = config.seed.unwrap_or_else(|| thread_rng().gen());
    log::info!(
        "seed {} ({} scenarios, sample sizes {})",
        seed,
        config.scenarios.len(),
        report::sample_sizes(&config.sample_sizes)
    );

    for result in run(&config, seed)? {
        println!(
            "{}",
            report::render(&result.scenario, &result.exact, &result.rows)
        );
    }
    Ok(())
}
