use std::fmt::Write;

use itertools::Itertools;

use crate::analytic::Odds;
use crate::scenario::Scenario;
use crate::simulate::Convergence;

/// which side the exact odds favor
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Shooter,
    Fixed,
    Even,
}

impl Verdict {
    pub fn from_odds(odds: &Odds) -> Self {
        const EVEN: f64 = 1e-12;
        if (odds.win - odds.loss).abs() < EVEN {
            Verdict::Even
        } else if odds.win > odds.loss {
            Verdict::Shooter
        } else {
            Verdict::Fixed
        }
    }
}

pub fn percentages(odds: &Odds) -> String {
    format!(
        "win {:6.2}%   tie {:6.2}%   loss {:6.2}%",
        odds.win * 100.0,
        odds.tie * 100.0,
        odds.loss * 100.0
    )
}

pub fn sample_sizes(sizes: &[usize]) -> String {
    sizes.iter().join(", ")
}

/// full block of output for one scenario.
pub fn render(scenario: &Scenario, exact: &Odds, rows: &[Convergence]) -> String {
    let mut out = String::new();
    let width = rows
        .iter()
        .map(|row| row.games.to_string().len())
        .max()
        .unwrap_or(0);

    writeln!(out, "{}", scenario).unwrap();
    writeln!(out, "  exact (binomial cdf)   {}", percentages(exact)).unwrap();
    for row in rows {
        writeln!(
            out,
            "  simulated {:>w$} games  {}   off by {:5.2}%",
            row.games,
            percentages(&row.tally.odds()),
            row.error * 100.0,
            w = width
        )
        .unwrap();
    }
    let verdict = match Verdict::from_odds(exact) {
        Verdict::Shooter => "take the shots",
        Verdict::Fixed => "take the guaranteed points",
        Verdict::Even => "a coin flip either way",
    };
    writeln!(out, "  verdict: {}", verdict).unwrap();
    out
}
