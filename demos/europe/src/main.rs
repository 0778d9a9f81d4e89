//! europe — headless run of the European furniture supply network.
//!
//! Runs one simulated week under each scenario in turn (baseline, green
//! rail, local sourcing) without resetting in between, so the three
//! cumulative totals can be compared side by side at the end.
//!
//! ```text
//! europe [NETWORK_JSON] [CONFIG_JSON]
//! ```
//!
//! Without arguments the built-in network and default config are used.
//! Output lands in `output/europe`.  Set `RUST_LOG=debug` to see every
//! shipment.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sc_network::{european_network, load_network_json, Network};
use sc_output::{CsvWriter, OutputWriter, SnapshotOutputObserver};
use sc_policy::{PolicyTargets, ScenarioCatalog, ScenarioId};
use sc_sim::{Arrival, Shipment, SimBuilder, SimConfig, SimObserver, Snapshot};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:    &str = "output/europe";
const SPEED:         f64  = 3_600.0; // 1 wall-clock second = 1 simulated hour
const DAYS_PER_PHASE: f64 = 7.0;
const SNAPSHOT_EVERY: u64 = 60;      // one simulated hour at 60 fps

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:      SnapshotOutputObserver<W>,
    departures: usize,
    arrivals:   usize,
    snapshots:  usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SnapshotOutputObserver<W>) -> Self {
        Self { inner, departures: 0, arrivals: 0, snapshots: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_departure(&mut self, shipment: &Shipment) {
        self.departures += 1;
        self.inner.on_departure(shipment);
    }

    fn on_arrival(&mut self, arrival: &Arrival) {
        self.arrivals += 1;
        self.inner.on_arrival(arrival);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        self.snapshots += 1;
        self.inner.on_snapshot(snapshot);
    }

    fn on_run_end(&mut self, snapshot: &Snapshot) {
        self.inner.on_run_end(snapshot);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);

    // 1. Network.
    let network: Network = match args.next() {
        Some(path) => load_network_json(Path::new(&path))
            .with_context(|| format!("loading network from {path}"))?,
        None => european_network()?,
    };
    println!("Network: {} nodes, {} routes", network.node_count(), network.route_count());

    // 2. Config.
    let config = match args.next() {
        Some(path) => SimConfig::load_json(Path::new(&path))
            .with_context(|| format!("loading config from {path}"))?,
        None => SimConfig {
            speed: SPEED,
            snapshot_interval_ticks: SNAPSHOT_EVERY,
            ..Default::default()
        },
    };

    // 3. Scenarios.  A custom network may not have the preset's keys.
    let catalog = match ScenarioCatalog::standard(&network, &PolicyTargets::default()) {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "standard scenarios unavailable, running every scenario as baseline");
            ScenarioCatalog::identity()
        }
    };

    let frame_sim_secs = config.frame_secs * config.speed;
    let frames_per_phase = (DAYS_PER_PHASE * 86_400.0 / frame_sim_secs).ceil() as u64;
    println!(
        "Speed ×{}  |  {} frames ({} simulated days) per scenario",
        config.speed, frames_per_phase, DAYS_PER_PHASE
    );
    println!();

    let mut sim = SimBuilder::new(config, network).catalog(catalog).build()?;

    // 4. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SnapshotOutputObserver::new(writer, sim.network()));

    // 5. Run each scenario for one phase.
    let t0 = Instant::now();
    sim.play();
    for scenario in ScenarioId::ALL {
        sim.set_scenario(scenario);
        let ticks = sim.run_frames(frames_per_phase, &mut obs)?;
        info!(scenario = %scenario, ticks, date = %sim.clock().current_date(), "phase complete");
    }
    sim.pause();
    obs.inner.finish();
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Run complete in {:.3} s, simulated to {}", elapsed.as_secs_f64(), sim.clock().current_date());
    println!("  node_snapshots.csv : {} snapshots", obs.snapshots);
    println!("  shipments.csv      : {} departures, {} arrivals", obs.departures, obs.arrivals);
    println!("  in flight at end   : {}", sim.in_flight());
    println!();

    println!("{:<16} {:>14} {:>14} {:>14} {:>14}", "Scenario", "Truck kg", "Rail kg", "Air kg", "Total kg");
    println!("{}", "-".repeat(76));
    for (id, t) in sim.ledger().iter() {
        println!(
            "{:<16} {:>14.0} {:>14.0} {:>14.0} {:>14.0}",
            id.label(),
            t.truck,
            t.rail,
            t.air,
            t.total()
        );
    }
    println!();

    println!("{:<14} {:>10} {:>10} {:>8}", "Node", "Stock", "Capacity", "Fill");
    println!("{}", "-".repeat(45));
    for node in &sim.snapshot().nodes {
        let fill = if node.capacity > 0.0 { node.stock / node.capacity } else { 0.0 };
        println!(
            "{:<14} {:>10.0} {:>10.0} {:>7.1}%",
            node.key,
            node.stock,
            node.capacity,
            fill * 100.0
        );
    }

    Ok(())
}
