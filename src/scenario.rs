use std::fmt;

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// takes a fixed number of independent shots, each worth `points_per_make` when it goes in.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Shooter {
    pub shots: u64,
    pub make_probability: f64,
    pub points_per_make: u64,
}

impl Shooter {
    pub fn new(shots: u64, make_probability: f64, points_per_make: u64) -> Self {
        Shooter {
            shots,
            make_probability,
            points_per_make,
        }
    }

    /// `None` when the total doesn't fit in a u64
    pub fn max_points(&self) -> Option<u64> {
        self.shots.checked_mul(self.points_per_make)
    }

    pub fn expected_points(&self) -> f64 {
        self.shots as f64 * self.make_probability * self.points_per_make as f64
    }
}

/// always walks away with exactly `points`.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FixedScorer {
    pub points: u64,
}

impl FixedScorer {
    pub fn new(points: u64) -> Self {
        FixedScorer { points }
    }
}

/// result of a single game, from the shooter's side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Scenario {
    pub name: String,
    pub shooter: Shooter,
    pub fixed: FixedScorer,
}

impl Scenario {
    pub fn new<S: Into<String>>(name: S, shooter: Shooter, fixed: FixedScorer) -> Self {
        Scenario {
            name: name.into(),
            shooter,
            fixed,
        }
    }

    pub fn judge(&self, shooter_points: u64) -> Outcome {
        use std::cmp::Ordering;
        match shooter_points.cmp(&self.fixed.points) {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Loss,
            Ordering::Equal => Outcome::Tie,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.name.trim().is_empty(), "scenario name is empty");
        let p = self.shooter.make_probability;
        ensure!(
            p.is_finite() && (0.0..=1.0).contains(&p),
            "scenario {:?}: make probability {} is outside [0, 1]",
            self.name,
            p
        );
        ensure!(
            self.shooter.max_points().is_some(),
            "scenario {:?}: {} shots at {} points each overflows",
            self.name,
            self.shooter.shots,
            self.shooter.points_per_make
        );
        Ok(())
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} shots at {:.1}% for {} pts each (expected {:.2}) vs a guaranteed {} pts",
            self.name,
            self.shooter.shots,
            self.shooter.make_probability * 100.0,
            self.shooter.points_per_make,
            self.shooter.expected_points(),
            self.fixed.points
        )
    }
}
