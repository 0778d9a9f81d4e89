//! Run configuration.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use sc_core::SimClock;
use sc_fleet::{DepartureTrigger, DEFAULT_HOLD_SECS};
use sc_policy::ScenarioId;

use crate::{SimError, SimResult};

/// Wall-clock length of one scheduling step at 60 frames per second.
pub const DEFAULT_FRAME_SECS: f64 = 1.0 / 60.0;

/// Top-level simulation configuration.
///
/// Every field has a default, so a JSON file only needs the fields it
/// changes:
///
/// ```json
/// { "start": "2024-08-01T00:00:00", "speed": 600.0, "scenario": "green_rail" }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Simulated date at elapsed time zero.  Default: 2024-01-01 00:00.
    pub start: NaiveDateTime,

    /// Wall-clock seconds covered by one call to `frame`.  Default: 1/60.
    pub frame_secs: f64,

    /// Initial speed multiplier (simulated seconds per wall-clock second).
    pub speed: f64,

    /// Scenario active when the run starts.
    pub scenario: ScenarioId,

    /// Seed for the decorative departure trigger.  Inventory arithmetic is
    /// deterministic regardless.
    pub seed: u64,

    /// Simulated seconds a vehicle rests at its destination.  Measured on
    /// the simulated clock like every other timer, so a hold meant to last
    /// `w` wall-clock seconds needs `w * speed` here.
    pub hold_secs: f64,

    /// What starts a vehicle.
    pub trigger: DepartureTrigger,

    /// Publish a snapshot to observers every N ticks.  0 disables.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start:                   default_start(),
            frame_secs:              DEFAULT_FRAME_SECS,
            speed:                   1.0,
            scenario:                ScenarioId::Baseline,
            seed:                    42,
            hold_secs:               DEFAULT_HOLD_SECS,
            trigger:                 DepartureTrigger::Dispatch,
            snapshot_interval_ticks: 60,
        }
    }
}

fn default_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

impl SimConfig {
    /// Parse a JSON document.  Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load_json(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values no run can start from.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.frame_secs.is_finite() && self.frame_secs > 0.0) {
            return Err(SimError::Config(format!(
                "frame_secs must be positive, got {}",
                self.frame_secs
            )));
        }
        if !(self.hold_secs.is_finite() && self.hold_secs >= 0.0) {
            return Err(SimError::Config(format!(
                "hold_secs must be non-negative, got {}",
                self.hold_secs
            )));
        }
        self.make_clock().map(|_| ())
    }

    /// A stopped clock at `start` running at `speed`.
    pub fn make_clock(&self) -> SimResult<SimClock> {
        let mut clock = SimClock::new(self.start);
        clock.set_speed(self.speed)?;
        Ok(clock)
    }
}
