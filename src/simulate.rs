use rand::prelude::*;

use crate::analytic::Odds;
use crate::scenario::{Outcome, Scenario, Shooter};

/// plays out every shot and returns the points scored.
///
/// saturates at u64::MAX, which a validated scenario never reaches.
pub fn play_game<R: Rng + ?Sized>(shooter: &Shooter, rng: &mut R) -> u64 {
    let mut makes = 0u64;
    for _ in 0..shooter.shots {
        let sample = rng.gen::<f64>();
        if sample < shooter.make_probability {
            makes += 1;
        }
    }
    makes.saturating_mul(shooter.points_per_make)
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.wins + self.losses + self.ties
    }

    pub fn odds(&self) -> Odds {
        let games = self.games();
        if games == 0 {
            return Odds::default();
        }
        let n = games as f64;
        Odds::new(
            self.wins as f64 / n,
            self.losses as f64 / n,
            self.ties as f64 / n,
        )
    }
}

pub fn simulate<R: Rng + ?Sized>(scenario: &Scenario, games: usize, rng: &mut R) -> Tally {
    let mut tally = Tally::default();
    for _ in 0..games {
        let points = play_game(&scenario.shooter, rng);
        tally.record(scenario.judge(points));
    }
    tally
}

/// one sample size worth of simulated games, compared against the exact odds
#[derive(Copy, Clone, Debug)]
pub struct Convergence {
    pub games: usize,
    pub tally: Tally,
    pub error: f64,
}

/// runs each sample size in turn, all drawing from the same generator.
pub fn sweep<R: Rng + ?Sized>(
    scenario: &Scenario,
    exact: &Odds,
    sample_sizes: &[usize],
    rng: &mut R,
) -> Vec<Convergence> {
    sample_sizes
        .iter()
        .map(|&games| {
            let tally = simulate(scenario, games, rng);
            let error = tally.odds().max_deviation(exact);
            log::debug!(
                "{}: {} games, {:?}, max deviation {:.5}",
                scenario.name,
                games,
                tally,
                error
            );
            Convergence {
                games,
                tally,
                error,
            }
        })
        .collect()
}
