use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::scenario::{FixedScorer, Scenario, Shooter};

pub const DEFAULT_SAMPLE_SIZES: &[usize] = &[100, 10_000, 100_000];

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// fixed seed for the run, a fresh one is drawn when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_sample_sizes")]
    pub sample_sizes: Vec<usize>,
    pub scenarios: Vec<Scenario>,
}

fn default_sample_sizes() -> Vec<usize> {
    DEFAULT_SAMPLE_SIZES.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            sample_sizes: default_sample_sizes(),
            scenarios: vec![
                Scenario::new(
                    "free throws",
                    Shooter::new(2, 0.75, 1),
                    FixedScorer::new(1),
                ),
                Scenario::new(
                    "three pointers",
                    Shooter::new(3, 0.35, 3),
                    FixedScorer::new(3),
                ),
            ],
        }
    }
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).context("parsing config")?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut buf = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut buf))
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&buf).with_context(|| format!("in {}", path.display()))
    }

    /// a missing file means defaults, a broken one is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("{} not found, using built in scenarios", path.display());
            return Ok(Config::default());
        }
        log::info!("loading scenarios from {}", path.display());
        Self::load(path)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let string = toml::to_string(self).context("serializing config")?;
        let mut file = BufWriter::new(
            File::options()
                .write(true)
                .truncate(true)
                .create(true)
                .open(path)
                .with_context(|| format!("opening {}", path.display()))?,
        );
        file.write_all(string.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// command line values win over whatever the file said.
    pub fn apply_overrides(&mut self, seed: Option<u64>, samples: Option<Vec<usize>>) {
        if let Some(seed) = seed {
            self.seed = Some(seed);
        }
        if let Some(samples) = samples {
            self.sample_sizes = samples;
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.scenarios.is_empty(), "no scenarios configured");
        ensure!(
            self.sample_sizes.iter().all(|&n| n > 0),
            "sample sizes must be nonzero, got {:?}",
            self.sample_sizes
        );
        for scenario in &self.scenarios {
            scenario.validate()?;
        }
        Ok(())
    }
}
