//! Cumulative CO₂ per scenario and bucket.

use sc_core::EmissionBucket;
use sc_policy::ScenarioId;

/// kg CO₂ per bucket.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EmissionTotals {
    pub truck: f64,
    pub rail:  f64,
    pub air:   f64,
}

impl EmissionTotals {
    #[inline]
    pub fn get(&self, bucket: EmissionBucket) -> f64 {
        match bucket {
            EmissionBucket::Truck => self.truck,
            EmissionBucket::Rail  => self.rail,
            EmissionBucket::Air   => self.air,
        }
    }

    #[inline]
    pub fn add(&mut self, bucket: EmissionBucket, kg: f64) {
        match bucket {
            EmissionBucket::Truck => self.truck += kg,
            EmissionBucket::Rail  => self.rail += kg,
            EmissionBucket::Air   => self.air += kg,
        }
    }

    pub fn total(&self) -> f64 {
        self.truck + self.rail + self.air
    }

    pub fn is_finite(&self) -> bool {
        self.truck.is_finite() && self.rail.is_finite() && self.air.is_finite()
    }
}

/// One [`EmissionTotals`] per scenario.  Only the scenario active at dispatch
/// time is ever credited.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmissionLedger {
    totals: [EmissionTotals; 3],
}

impl EmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, scenario: ScenarioId, bucket: EmissionBucket, kg: f64) {
        self.totals[scenario.index()].add(bucket, kg);
    }

    #[inline]
    pub fn totals(&self, scenario: ScenarioId) -> EmissionTotals {
        self.totals[scenario.index()]
    }

    /// `(scenario, totals)` for every scenario, in `ScenarioId::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (ScenarioId, EmissionTotals)> + '_ {
        ScenarioId::ALL.into_iter().map(|id| (id, self.totals[id.index()]))
    }

    pub fn is_finite(&self) -> bool {
        self.totals.iter().all(EmissionTotals::is_finite)
    }

    pub fn reset(&mut self) {
        self.totals = Default::default();
    }
}
