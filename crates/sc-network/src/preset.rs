//! The built-in European furniture supply network.
//!
//! Ten facilities and nine routes: four raw-material suppliers feed one
//! flat-pack factory in western Poland, which ships to a distribution centre
//! in Dortmund, which serves four retail stores (one of them by air).
//!
//! Road geometry is a coarse hand-resolved corridor per route; the rail
//! corridor follows the overland China–Europe line; the air lane is direct.

use sc_core::{GeoPoint, TransportMode};

use crate::{Network, NetworkBuilder, NetworkResult, NodeCategory, NodeSpec, RouteSpec};

// ── Node keys ─────────────────────────────────────────────────────────────────

pub const SWE_FOREST:  &str = "SWE_FOREST";
pub const ROM_FOREST:  &str = "ROM_FOREST";
pub const DE_RESIN:    &str = "DE_RESIN";
pub const CN_FITTINGS: &str = "CN_FITTINGS";
pub const FACTORY:     &str = "FACTORY";
pub const DC:          &str = "DC";
pub const STORE_UK:    &str = "STORE_UK";
pub const STORE_US:    &str = "STORE_US";
pub const STORE_FR:    &str = "STORE_FR";
pub const STORE_IT:    &str = "STORE_IT";

// ── Route keys ────────────────────────────────────────────────────────────────

pub const CN_FACTORY:  &str = "cn_factory";
pub const SWE_FACTORY: &str = "swe_factory";
pub const ROM_FACTORY: &str = "rom_factory";
pub const DE_FACTORY:  &str = "de_factory";
pub const FACTORY_DC:  &str = "factory_dc";
pub const DC_UK:       &str = "dc_uk";
pub const DC_FR:       &str = "dc_fr";
pub const DC_IT:       &str = "dc_it";
pub const DC_US:       &str = "dc_us";

/// Truck payload (units), speed (km/h) and factor (kg CO₂ / unit·km).
const TRUCK: (f64, f64, f64) = (600.0, 80.0, 0.057);

fn p(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon)
}

fn truck(key: &str, from: &str, to: &str, mode: TransportMode, days: f64, path: Vec<GeoPoint>) -> RouteSpec {
    let (capacity, speed, factor) = TRUCK;
    RouteSpec::new(key, from, to, mode)
        .path(path)
        .vehicle(capacity, speed)
        .emission_factor(factor)
        .frequency_days(days)
}

/// Build the reference network.
pub fn european_network() -> NetworkResult<Network> {
    let mut b = NetworkBuilder::new();

    // Raw-material suppliers.
    b.add_node(NodeSpec::new(SWE_FOREST, p(57.75, 14.50), NodeCategory::RawMaterial)
        .name("Småland Forests, Sweden").product("Pine timber").stock(5_000.0, 10_000.0));
    b.add_node(NodeSpec::new(ROM_FOREST, p(45.65, 25.60), NodeCategory::RawMaterial)
        .name("Brasov, Romania").product("Pine timber").stock(4_000.0, 8_000.0));
    b.add_node(NodeSpec::new(DE_RESIN, p(49.48, 8.44), NodeCategory::RawMaterial)
        .name("Ludwigshafen, Germany").product("Glue and resin").stock(2_500.0, 5_000.0));
    b.add_node(NodeSpec::new(CN_FITTINGS, p(22.54, 114.05), NodeCategory::RawMaterial)
        .name("Shenzhen, China").product("Metal fittings").stock(6_000.0, 12_000.0));

    // Manufacturing and distribution.
    b.add_node(NodeSpec::new(FACTORY, p(52.24, 15.91), NodeCategory::manufacturing())
        .name("Zbąszynek, Poland").product("Bookshelf assembly").stock(2_000.0, 15_000.0));
    b.add_node(NodeSpec::new(DC, p(51.51, 7.46), NodeCategory::Distribution)
        .name("Dortmund, Germany").product("Distribution hub").stock(5_000.0, 20_000.0));

    // Retail.
    for (key, name, pos) in [
        (STORE_UK, "Wembley, UK",      p(51.55, -0.27)),
        (STORE_US, "Brooklyn, USA",    p(40.67, -74.01)),
        (STORE_FR, "Paris Nord, France", p(48.98, 2.49)),
        (STORE_IT, "Milan, Italy",     p(45.54, 9.20)),
    ] {
        b.add_node(NodeSpec::new(key, pos, NodeCategory::retail())
            .name(name).product("Retail store").stock(500.0, 3_000.0));
    }

    // Inbound to the factory.
    b.add_route(RouteSpec::new(CN_FACTORY, CN_FITTINGS, FACTORY, TransportMode::Rail)
        .path(vec![
            p(22.54, 114.05), // Shenzhen
            p(34.34, 108.93), // Xi'an
            p(43.82, 87.61),  // Ürümqi
            p(43.22, 76.85),  // Almaty
            p(55.76, 37.62),  // Moscow
            p(53.90, 27.56),  // Minsk
            p(52.24, 15.91),  // Zbąszynek
        ])
        .vehicle(26_650.0, 45.0)
        .emission_factor(0.022)
        .frequency_days(7.0));
    b.add_route(truck(SWE_FACTORY, SWE_FOREST, FACTORY, TransportMode::Multimodal, 2.0, vec![
        p(57.75, 14.50), p(55.37, 13.16), p(53.91, 14.25), p(52.24, 15.91),
    ]));
    b.add_route(truck(ROM_FACTORY, ROM_FOREST, FACTORY, TransportMode::Road, 3.0, vec![
        p(45.65, 25.60), p(47.50, 19.04), p(51.11, 17.03), p(52.24, 15.91),
    ]));
    b.add_route(truck(DE_FACTORY, DE_RESIN, FACTORY, TransportMode::Road, 4.0, vec![
        p(49.48, 8.44), p(50.98, 11.03), p(52.52, 13.40), p(52.24, 15.91),
    ]));

    // Factory to hub, hub to stores.
    b.add_route(truck(FACTORY_DC, FACTORY, DC, TransportMode::Road, 1.0, vec![
        p(52.24, 15.91), p(52.52, 13.40), p(52.37, 9.73), p(51.51, 7.46),
    ]));
    b.add_route(truck(DC_UK, DC, STORE_UK, TransportMode::Road, 2.0, vec![
        p(51.51, 7.46), p(50.95, 1.86), p(51.55, -0.27),
    ]));
    b.add_route(truck(DC_FR, DC, STORE_FR, TransportMode::Road, 2.0, vec![
        p(51.51, 7.46), p(50.85, 4.35), p(48.98, 2.49),
    ]));
    b.add_route(truck(DC_IT, DC, STORE_IT, TransportMode::Road, 3.0, vec![
        p(51.51, 7.46), p(47.56, 7.59), p(45.54, 9.20),
    ]));
    b.add_route(RouteSpec::new(DC_US, DC, STORE_US, TransportMode::Air)
        .path(vec![p(51.51, 7.46), p(40.67, -74.01)])
        .vehicle(2_550.0, 900.0)
        .emission_factor(0.5)
        .frequency_days(7.0));

    b.build()
}
