//! The three comparison scenarios.

use std::fmt;
use std::str::FromStr;

use sc_core::{NodeId, RouteId, TransportMode};
use sc_network::preset;
use sc_network::Network;

use crate::{Adjust, NodeField, OverrideTable, PolicyError, PolicyResult};

// ── ScenarioId ────────────────────────────────────────────────────────────────

/// Closed set of scenario identifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScenarioId {
    /// Current operations, no overrides.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "baseline"))]
    Baseline,
    /// One road corridor re-booked as rail freight.
    #[cfg_attr(feature = "serde", serde(rename = "green_rail"))]
    GreenRail,
    /// One raw-material supplier cancelled, the factory compensates.
    #[cfg_attr(feature = "serde", serde(rename = "local_source"))]
    LocalSourcing,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 3] =
        [ScenarioId::Baseline, ScenarioId::GreenRail, ScenarioId::LocalSourcing];

    /// Dense index into per-scenario arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioId::Baseline      => "baseline",
            ScenarioId::GreenRail     => "green_rail",
            ScenarioId::LocalSourcing => "local_source",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ScenarioId::Baseline      => "Baseline (current operations)",
            ScenarioId::GreenRail     => "Green rail (shift road freight to rail)",
            ScenarioId::LocalSourcing => "Local sourcing (cancel one supplier, produce more locally)",
        }
    }
}

impl FromStr for ScenarioId {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "baseline"     => Ok(ScenarioId::Baseline),
            "green_rail"   => Ok(ScenarioId::GreenRail),
            "local_source" => Ok(ScenarioId::LocalSourcing),
            other          => Err(PolicyError::UnknownScenario(other.to_owned())),
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PolicyTargets ─────────────────────────────────────────────────────────────

/// Which network elements the standard scenarios act on, by key.
#[derive(Clone, Debug, PartialEq)]
pub struct PolicyTargets {
    /// Road route re-booked as rail under green rail.
    pub rail_route:         String,
    /// Emission factor applied to `rail_route` under green rail.
    pub rail_factor:        f64,
    /// Raw-material node whose production is zeroed under local sourcing.
    pub cancelled_supplier: String,
    /// Manufacturing node that compensates under local sourcing.
    pub local_producer:     String,
    /// Production multiplier on `local_producer`.
    pub production_boost:   f64,
}

impl Default for PolicyTargets {
    /// Targets inside [`sc_network::european_network`].
    fn default() -> Self {
        Self {
            rail_route:         preset::ROM_FACTORY.to_owned(),
            rail_factor:        0.022,
            cancelled_supplier: preset::SWE_FOREST.to_owned(),
            local_producer:     preset::FACTORY.to_owned(),
            production_boost:   1.5,
        }
    }
}

// ── Scenario & catalog ────────────────────────────────────────────────────────

/// A named override table.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub id:        ScenarioId,
    pub overrides: OverrideTable,
}

impl Scenario {
    pub fn baseline() -> Self {
        Self { id: ScenarioId::Baseline, overrides: OverrideTable::new() }
    }
}

/// One [`Scenario`] per [`ScenarioId`], resolved against a network.
#[derive(Clone, Debug)]
pub struct ScenarioCatalog {
    scenarios: [Scenario; 3],
}

impl ScenarioCatalog {
    /// Baseline, green rail and local sourcing for `network`.
    ///
    /// # Errors
    ///
    /// [`PolicyError::UnknownTarget`] if a key in `targets` is not part of
    /// `network`; [`PolicyError::InvalidFactor`] for a negative or
    /// non-finite factor.
    pub fn standard(network: &Network, targets: &PolicyTargets) -> PolicyResult<Self> {
        let green = ScenarioId::GreenRail.as_str();
        let local = ScenarioId::LocalSourcing.as_str();

        check_factor(green, "rail emission factor", targets.rail_factor)?;
        check_factor(local, "production boost", targets.production_boost)?;

        let route = route_id(network, green, &targets.rail_route)?;
        let mut green_rail = OverrideTable::new();
        green_rail
            .set_route_mode(route, TransportMode::Rail)
            .set_route_emission_factor(route, Adjust::Set(targets.rail_factor));

        let supplier = node_id(network, local, &targets.cancelled_supplier)?;
        let producer = node_id(network, local, &targets.local_producer)?;
        let mut local_sourcing = OverrideTable::new();
        local_sourcing
            .set_node(supplier, NodeField::Production, Adjust::Zero)
            .set_node(producer, NodeField::Production, Adjust::Scale(targets.production_boost));

        Ok(Self {
            scenarios: [
                Scenario::baseline(),
                Scenario { id: ScenarioId::GreenRail, overrides: green_rail },
                Scenario { id: ScenarioId::LocalSourcing, overrides: local_sourcing },
            ],
        })
    }

    /// All three scenarios with empty tables.  For networks the standard
    /// targets do not apply to; install tables with
    /// [`with_overrides`](Self::with_overrides).
    pub fn identity() -> Self {
        Self {
            scenarios: ScenarioId::ALL.map(|id| Scenario { id, overrides: OverrideTable::new() }),
        }
    }

    /// Replace the table of one scenario.
    ///
    /// # Errors
    ///
    /// [`PolicyError::InvalidFactor`] if any operand is negative or
    /// non-finite.
    pub fn with_overrides(mut self, id: ScenarioId, overrides: OverrideTable) -> PolicyResult<Self> {
        for value in overrides.operands() {
            check_factor(id.as_str(), "override operand", value)?;
        }
        self.scenarios[id.index()].overrides = overrides;
        Ok(self)
    }

    #[inline]
    pub fn get(&self, id: ScenarioId) -> &Scenario {
        &self.scenarios[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> + '_ {
        self.scenarios.iter()
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_factor(scenario: &'static str, what: &'static str, value: f64) -> PolicyResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PolicyError::InvalidFactor { scenario, what, value })
    }
}

fn node_id(network: &Network, scenario: &'static str, key: &str) -> PolicyResult<NodeId> {
    network.node_id(key).ok_or_else(|| PolicyError::UnknownTarget {
        scenario,
        kind: "node",
        key:  key.to_owned(),
    })
}

fn route_id(network: &Network, scenario: &'static str, key: &str) -> PolicyResult<RouteId> {
    network.route_id(key).ok_or_else(|| PolicyError::UnknownTarget {
        scenario,
        kind: "route",
        key:  key.to_owned(),
    })
}
