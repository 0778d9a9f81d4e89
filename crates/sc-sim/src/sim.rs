//! The `Simulation` struct and its tick pipeline.

use tracing::{debug, error, info};

use sc_core::{seasonality, NodeId, SimClock};
use sc_fleet::AnimationDriver;
use sc_network::{Network, Route};
use sc_policy::{ScenarioCatalog, ScenarioId};

use crate::{
    ComparisonHistory, Dispatcher, EmissionLedger, EmissionTotals, Inventory, NodeInspection,
    NodeSnapshot, NoopObserver, SimConfig, SimError, SimObserver, SimResult, Snapshot,
    VehicleSnapshot,
};

/// The simulation engine.
///
/// Holds every piece of mutable state; nothing is global, so several
/// instances can run side by side.  The outside world reads through
/// [`snapshot`](Self::snapshot) and [`inspect`](Self::inspect) and mutates
/// only through the controls and the tick pipeline.
///
/// One processed tick runs, in order:
///
/// 1. Reset the per-tick inbound/outbound counters.
/// 2. Production and sales at the current date's seasonality.
/// 3. Deliver arrivals due by now.
/// 4. Dispatch, booking emissions under the active scenario.
/// 5. Advance vehicle animation.
/// 6. Record the comparison history.
/// 7. Check for corrupt values, then publish a snapshot.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    config:     SimConfig,
    network:    Network,
    catalog:    ScenarioCatalog,
    clock:      SimClock,
    inventory:  Inventory,
    dispatcher: Dispatcher,
    ledger:     EmissionLedger,
    history:    ComparisonHistory,
    fleet:      AnimationDriver,
    scenario:   ScenarioId,
    tick:       u64,
}

impl Simulation {
    pub(crate) fn from_parts(config: SimConfig, network: Network, catalog: ScenarioCatalog, clock: SimClock) -> Self {
        let inventory = Inventory::new(&network);
        let fleet = AnimationDriver::new(&network, config.trigger, config.hold_secs, config.seed);
        Self {
            scenario: config.scenario,
            config,
            catalog,
            clock,
            inventory,
            dispatcher: Dispatcher::new(),
            ledger: EmissionLedger::new(),
            history: ComparisonHistory::new(),
            fleet,
            network,
            tick: 0,
        }
    }

    // ── Controls ──────────────────────────────────────────────────────────

    /// Start advancing time.  Returns `false` if already playing.
    pub fn play(&mut self) -> bool {
        let started = self.clock.play();
        if started {
            info!(elapsed_secs = self.clock.elapsed_secs(), "simulation playing");
        }
        started
    }

    /// Stop advancing time.  In-flight shipments and vehicles keep their
    /// remaining time.
    pub fn pause(&mut self) {
        if self.clock.is_playing() {
            info!(elapsed_secs = self.clock.elapsed_secs(), "simulation paused");
        }
        self.clock.pause();
    }

    /// Pause and restore the initial state.  See [`reset_with`](Self::reset_with).
    pub fn reset(&mut self) {
        self.reset_with(&mut NoopObserver);
    }

    /// Pause, zero elapsed time, restore initial stocks, zero every
    /// scenario's emissions, clear the history and drop every pending
    /// arrival and animation timer.
    ///
    /// The speed multiplier and the active scenario are user settings and
    /// survive.
    pub fn reset_with<O: SimObserver>(&mut self, observer: &mut O) {
        self.clock.reset();
        self.inventory.reset(&self.network);
        self.dispatcher.reset();
        self.ledger.reset();
        self.history.reset();
        self.fleet.reset();
        self.tick = 0;
        info!("simulation reset");
        observer.on_reset();
    }

    /// # Errors
    ///
    /// [`SimError::Core`] for a zero, negative or non-finite multiplier; the
    /// previous multiplier is kept.
    pub fn set_speed(&mut self, multiplier: f64) -> SimResult<()> {
        self.clock.set_speed(multiplier)?;
        info!(speed = multiplier, "speed changed");
        Ok(())
    }

    /// Switch the active scenario.  Totals already booked under any
    /// scenario are untouched.
    pub fn set_scenario(&mut self, scenario: ScenarioId) {
        if scenario != self.scenario {
            info!(from = %self.scenario, to = %scenario, "scenario changed");
        }
        self.scenario = scenario;
    }

    /// # Errors
    ///
    /// [`SimError::Policy`] for a name outside the scenario set; the active
    /// scenario is kept.
    pub fn set_scenario_by_name(&mut self, name: &str) -> SimResult<()> {
        let scenario = name.parse::<ScenarioId>()?;
        self.set_scenario(scenario);
        Ok(())
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Run one scheduling step covering `config.frame_secs` of wall time.
    ///
    /// Returns `Ok(false)` without touching any state while stopped.
    ///
    /// # Errors
    ///
    /// [`SimError::CorruptState`] if the tick produced a non-finite stock or
    /// emission total.  The clock is paused and no snapshot is published.
    pub fn frame<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        let dt_secs = self.clock.advance(self.config.frame_secs);
        if dt_secs <= 0.0 {
            return Ok(false);
        }
        self.process_tick(dt_secs, observer)?;
        Ok(true)
    }

    /// Run `n` frames, stopping at the first error.  Returns the number of
    /// ticks processed.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<u64> {
        let mut processed = 0;
        for _ in 0..n {
            if self.frame(observer)? {
                processed += 1;
            }
        }
        observer.on_run_end(&self.snapshot());
        Ok(processed)
    }

    fn process_tick<O: SimObserver>(&mut self, dt_secs: f64, observer: &mut O) -> SimResult<()> {
        let tick = self.tick;
        let now = self.clock.elapsed_secs();
        observer.on_tick_start(tick, now);

        // ── Rates ─────────────────────────────────────────────────────────
        let overrides = &self.catalog.get(self.scenario).overrides;
        let seasonal = seasonality::multiplier(&self.clock.current_date());
        self.inventory.begin_tick();
        self.inventory.apply_rates(&self.network, overrides, seasonal, dt_secs / 3_600.0);

        // ── Arrivals, then departures ─────────────────────────────────────
        for arrival in self.dispatcher.deliver_due(now, &mut self.inventory) {
            observer.on_arrival(&arrival);
        }
        let departed = self.dispatcher.dispatch(
            now,
            &self.network,
            &mut self.inventory,
            overrides,
            self.scenario,
            &mut self.ledger,
        );
        for shipment in &departed {
            self.fleet.notify_dispatch(shipment.route, now);
            observer.on_departure(shipment);
        }

        // ── Animation & history ───────────────────────────────────────────
        self.fleet.advance(now, dt_secs, &self.network);
        if self.history.record(now, &self.ledger) {
            debug!(day = self.history.points().len() - 1, "comparison point recorded");
        }

        self.tick += 1;
        self.check_state(tick)?;

        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && tick.is_multiple_of(interval) {
            observer.on_snapshot(&self.snapshot());
        }
        Ok(())
    }

    fn check_state(&mut self, tick: u64) -> SimResult<()> {
        let what = if let Some(node) = self.inventory.first_non_finite() {
            format!("stock of {} is {}", self.network.node(node).key, self.inventory.stock(node))
        } else if !self.ledger.is_finite() {
            "emission total is not finite".to_owned()
        } else {
            return Ok(());
        };
        self.clock.pause();
        error!(tick, %what, "tick aborted, simulation paused");
        Err(SimError::CorruptState { tick, what })
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    pub fn scenario(&self) -> ScenarioId {
        self.scenario
    }

    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    /// Ticks processed since the last reset.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn fleet(&self) -> &AnimationDriver {
        &self.fleet
    }

    pub fn in_flight(&self) -> usize {
        self.dispatcher.in_flight()
    }

    /// Cumulative totals booked under `scenario`.
    pub fn emissions(&self, scenario: ScenarioId) -> EmissionTotals {
        self.ledger.totals(scenario)
    }

    pub fn ledger(&self) -> &EmissionLedger {
        &self.ledger
    }

    pub fn history(&self) -> &ComparisonHistory {
        &self.history
    }

    /// The current read-only view.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick:         self.tick,
            elapsed_secs: self.clock.elapsed_secs(),
            date:         self.clock.current_date(),
            playing:      self.clock.is_playing(),
            speed:        self.clock.speed(),
            scenario:     self.scenario,
            emissions:    self.ledger.totals(self.scenario),
            nodes:        self.network.nodes().iter().map(|n| self.node_snapshot(n.id)).collect(),
            vehicles:     self
                .network
                .routes()
                .iter()
                .map(|r| {
                    let v = self.fleet.vehicle(r.id);
                    VehicleSnapshot {
                        route:    r.id,
                        key:      r.key.clone(),
                        position: self.fleet.position(r.id, &self.network),
                        waypoint: v.waypoint,
                        phase:    v.phase,
                    }
                })
                .collect(),
            in_flight:    self.dispatcher.in_flight(),
        }
    }

    /// Static description and live state of the node called `key`.
    ///
    /// # Errors
    ///
    /// [`SimError::UnknownNode`] if no node has that key.
    pub fn inspect(&self, key: &str) -> SimResult<NodeInspection> {
        let node = self
            .network
            .node_by_key(key)
            .ok_or_else(|| SimError::UnknownNode(key.to_owned()))?;
        Ok(NodeInspection {
            key:           node.key.clone(),
            name:          node.name.clone(),
            product:       node.product.clone(),
            category:      node.category,
            pos:           node.pos,
            initial_stock: node.initial_stock,
            state:         self.node_snapshot(node.id),
            outgoing:      self.route_keys(|r| r.from == node.id),
            incoming:      self.route_keys(|r| r.to == node.id),
            inbound_in_flight: self
                .dispatcher
                .iter_in_flight()
                .filter(|s| s.to == node.id)
                .map(|s| s.size)
                .sum(),
        })
    }

    fn route_keys(&self, pred: impl Fn(&Route) -> bool) -> Vec<String> {
        self.network
            .routes()
            .iter()
            .filter(|r| pred(r))
            .map(|r| r.key.clone())
            .collect()
    }

    fn node_snapshot(&self, id: NodeId) -> NodeSnapshot {
        let s = self.inventory.get(id);
        NodeSnapshot {
            node:            id,
            key:             self.network.node(id).key.clone(),
            stock:           s.stock,
            capacity:        s.capacity,
            inbound:         s.inbound,
            outbound:        s.outbound,
            production_rate: s.production_rate,
            sales_rate:      s.sales_rate,
        }
    }
}
