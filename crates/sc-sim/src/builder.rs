//! Fluent builder for constructing a [`Simulation`].

use tracing::info;

use sc_network::Network;
use sc_policy::{PolicyTargets, ScenarioCatalog};

use crate::{SimConfig, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                               |
/// |----------------|-------------------------------------------------------|
/// | `.targets(t)`  | `PolicyTargets::default()` (keys of the preset network) |
/// | `.catalog(c)`  | `ScenarioCatalog::standard(&network, &targets)`       |
///
/// # Example
///
/// ```rust
/// use sc_network::european_network;
/// use sc_sim::{NoopObserver, SimBuilder, SimConfig};
///
/// let mut sim = SimBuilder::new(SimConfig::default(), european_network().unwrap())
///     .build()
///     .unwrap();
/// sim.play();
/// sim.run_frames(60, &mut NoopObserver).unwrap();
/// assert_eq!(sim.ticks(), 60);
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    network: Network,
    targets: Option<PolicyTargets>,
    catalog: Option<ScenarioCatalog>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, network: Network) -> Self {
        Self { config, network, targets: None, catalog: None }
    }

    /// Network keys the standard scenarios act on.  Ignored if a catalog is
    /// supplied.
    pub fn targets(mut self, targets: PolicyTargets) -> Self {
        self.targets = Some(targets);
        self
    }

    /// Use a prepared scenario catalog instead of the standard one.
    pub fn catalog(mut self, catalog: ScenarioCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Validate the configuration, resolve the scenarios and return a
    /// stopped simulation at its initial state.
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;
        let clock = self.config.make_clock()?;

        let catalog = match self.catalog {
            Some(c) => c,
            None => ScenarioCatalog::standard(&self.network, &self.targets.unwrap_or_default())?,
        };

        info!(
            nodes = self.network.node_count(),
            routes = self.network.route_count(),
            start = %self.config.start,
            scenario = %self.config.scenario,
            "simulation built"
        );
        Ok(Simulation::from_parts(self.config, self.network, catalog, clock))
    }
}
