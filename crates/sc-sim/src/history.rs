//! Scenario comparison history.
//!
//! One point per simulated day, holding every scenario's cumulative total
//! at the first tick of that day.  Day 0 is recorded on the first tick.

use sc_policy::ScenarioId;

use crate::EmissionLedger;

const SECS_PER_DAY: f64 = 86_400.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComparisonPoint {
    /// Whole simulated days since the start date.
    pub day:    u64,
    /// Cumulative kg CO₂ indexed by `ScenarioId::index`.
    pub totals: [f64; 3],
}

impl ComparisonPoint {
    #[inline]
    pub fn total(&self, scenario: ScenarioId) -> f64 {
        self.totals[scenario.index()]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComparisonHistory {
    points: Vec<ComparisonPoint>,
}

impl ComparisonHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point if `elapsed_secs` falls on a day not yet recorded.
    /// Returns `true` if a point was appended.
    pub fn record(&mut self, elapsed_secs: f64, ledger: &EmissionLedger) -> bool {
        let day = (elapsed_secs.max(0.0) / SECS_PER_DAY).floor() as u64;
        if self.points.last().is_some_and(|p| p.day >= day) {
            return false;
        }
        let mut totals = [0.0; 3];
        for (id, t) in ledger.iter() {
            totals[id.index()] = t.total();
        }
        self.points.push(ComparisonPoint { day, totals });
        true
    }

    pub fn points(&self) -> &[ComparisonPoint] {
        &self.points
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }
}
