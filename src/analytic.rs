use anyhow::{Context, Result};
use statrs::distribution::{Binomial, Discrete, DiscreteCDF};

use crate::scenario::{Outcome, Scenario};

/// win/loss/tie probabilities from the shooter's side, as fractions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Odds {
    pub win: f64,
    pub loss: f64,
    pub tie: f64,
}

impl Odds {
    pub fn new(win: f64, loss: f64, tie: f64) -> Self {
        Odds { win, loss, tie }
    }

    pub fn total(&self) -> f64 {
        self.win + self.loss + self.tie
    }

    /// largest absolute difference over the three outcomes
    pub fn max_deviation(&self, other: &Odds) -> f64 {
        (self.win - other.win)
            .abs()
            .max((self.loss - other.loss).abs())
            .max((self.tie - other.tie).abs())
    }
}

/// closed form odds for a scenario.
///
/// the shooter's makes are Binomial(shots, p) and every make is worth the same,
/// so each outcome is a tail or a point mass of that distribution.
pub fn exact_odds(scenario: &Scenario) -> Result<Odds> {
    scenario.validate()?;
    let shooter = &scenario.shooter;
    let fixed = scenario.fixed.points;
    let ppm = shooter.points_per_make;

    if ppm == 0 || shooter.shots == 0 {
        // shooter can't score, nothing random left
        return Ok(match scenario.judge(0) {
            Outcome::Win => Odds::new(1.0, 0.0, 0.0),
            Outcome::Loss => Odds::new(0.0, 1.0, 0.0),
            Outcome::Tie => Odds::new(0.0, 0.0, 1.0),
        });
    }

    let n = shooter.shots;
    let makes = Binomial::new(shooter.make_probability, n)
        .with_context(|| format!("building binomial for scenario {:?}", scenario.name))?;

    // fewest makes that at least tie
    let needed = fixed / ppm + (fixed % ppm != 0) as u64;
    let loss = if needed == 0 {
        0.0
    } else if needed > n {
        1.0
    } else {
        makes.cdf(needed - 1)
    };

    let tie = if fixed % ppm == 0 && fixed / ppm <= n {
        makes.pmf(fixed / ppm)
    } else {
        0.0
    };

    let floor = fixed / ppm;
    let win = if floor >= n {
        0.0
    } else {
        1.0 - makes.cdf(floor)
    };

    Ok(Odds::new(
        win.clamp(0.0, 1.0),
        loss.clamp(0.0, 1.0),
        tie.clamp(0.0, 1.0),
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scenario::{FixedScorer, Shooter};

    const EPS: f64 = 1e-9;

    fn assert_odds(got: Odds, win: f64, loss: f64, tie: f64) {
        assert!((got.win - win).abs() < EPS, "win {} != {}", got.win, win);
        assert!((got.loss - loss).abs() < EPS, "loss {} != {}", got.loss, loss);
        assert!((got.tie - tie).abs() < EPS, "tie {} != {}", got.tie, tie);
    }

    #[test]
    fn test_free_throws() {
        let scenario = Scenario::new("ft", Shooter::new(2, 0.75, 1), FixedScorer::new(1));
        let odds = exact_odds(&scenario).unwrap();
        assert_odds(odds, 0.5625, 0.0625, 0.375);
    }

    #[test]
    fn test_threes() {
        // 3 * 0.35^2 * 0.65 + 0.35^3 for a win, 3 * 0.35 * 0.65^2 to tie
        let scenario = Scenario::new("threes", Shooter::new(3, 0.35, 3), FixedScorer::new(3));
        let odds = exact_odds(&scenario).unwrap();
        assert_odds(odds, 0.28175, 0.274625, 0.443625);
    }

    #[test]
    fn test_no_tie_possible() {
        // 3 pointers against 2 fixed points, one make is enough
        let scenario = Scenario::new("no tie", Shooter::new(3, 0.35, 3), FixedScorer::new(2));
        let odds = exact_odds(&scenario).unwrap();
        assert_odds(odds, 1.0 - 0.65f64.powi(3), 0.65f64.powi(3), 0.0);
    }

    #[test]
    fn test_out_of_reach() {
        let scenario = Scenario::new("hopeless", Shooter::new(2, 0.9, 2), FixedScorer::new(5));
        let odds = exact_odds(&scenario).unwrap();
        assert_odds(odds, 0.0, 1.0, 0.0);
    }

    #[test]
    fn test_zero_fixed() {
        let scenario = Scenario::new("free", Shooter::new(4, 0.5, 1), FixedScorer::new(0));
        let odds = exact_odds(&scenario).unwrap();
        assert_odds(odds, 1.0 - 0.0625, 0.0, 0.0625);
    }

    #[test]
    fn test_degenerate_shooter() {
        let no_shots = Scenario::new("none", Shooter::new(0, 0.5, 2), FixedScorer::new(1));
        assert_odds(exact_odds(&no_shots).unwrap(), 0.0, 1.0, 0.0);

        let worthless = Scenario::new("zero", Shooter::new(5, 0.5, 0), FixedScorer::new(0));
        assert_odds(exact_odds(&worthless).unwrap(), 0.0, 0.0, 1.0);
    }

    #[test]
    fn test_certain_probabilities() {
        let always = Scenario::new("always", Shooter::new(3, 1.0, 1), FixedScorer::new(2));
        assert_odds(exact_odds(&always).unwrap(), 1.0, 0.0, 0.0);

        let never = Scenario::new("never", Shooter::new(3, 0.0, 1), FixedScorer::new(2));
        assert_odds(exact_odds(&never).unwrap(), 0.0, 1.0, 0.0);
    }

    #[test]
    fn test_sums_to_one() {
        for shots in 1..12u64 {
            for fixed in 0..15u64 {
                for &ppm in &[1u64, 2, 3] {
                    let scenario = Scenario::new(
                        "sum",
                        Shooter::new(shots, 0.43, ppm),
                        FixedScorer::new(fixed),
                    );
                    let odds = exact_odds(&scenario).unwrap();
                    assert!((odds.total() - 1.0).abs() < 1e-9, "{:?}", odds);
                }
            }
        }
    }

    #[test]
    fn test_huge_fixed_points() {
        let scenario = Scenario::new(
            "unreachable",
            Shooter::new(3, 0.5, 2),
            FixedScorer::new(u64::MAX),
        );
        assert_odds(exact_odds(&scenario).unwrap(), 0.0, 1.0, 0.0);

        let one_shot = Scenario::new(
            "one shot",
            Shooter::new(1, 0.25, u64::MAX),
            FixedScorer::new(u64::MAX),
        );
        assert_odds(exact_odds(&one_shot).unwrap(), 0.0, 0.75, 0.25);
    }

    #[test]
    fn test_rejects_point_overflow() {
        let scenario = Scenario::new(
            "overflow",
            Shooter::new(4, 0.5, u64::MAX / 2),
            FixedScorer::new(1),
        );
        assert!(exact_odds(&scenario).is_err());
    }

    #[test]
    fn test_rejects_bad_probability() {
        let scenario = Scenario::new("bad", Shooter::new(3, -0.1, 1), FixedScorer::new(1));
        assert!(exact_odds(&scenario).is_err());
    }

    #[test]
    fn test_max_deviation() {
        let a = Odds::new(0.5, 0.3, 0.2);
        let b = Odds::new(0.45, 0.32, 0.23);
        assert!((a.max_deviation(&b) - 0.05).abs() < 1e-12);
    }
}
