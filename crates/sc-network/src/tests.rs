//! Unit tests for sc-network.
//!
//! All tests use hand-crafted networks or inline JSON; nothing touches disk
//! except the explicit file-loader test.

#[cfg(test)]
mod helpers {
    use sc_core::{GeoPoint, TransportMode};
    use crate::{NetworkBuilder, NodeCategory, NodeSpec, RouteSpec};

    /// Supplier → factory with a single road route.
    pub fn pair() -> NetworkBuilder {
        let mut b = NetworkBuilder::new();
        b.add_node(NodeSpec::new("MILL", GeoPoint::new(57.75, 14.50), NodeCategory::RawMaterial)
            .stock(5_000.0, 10_000.0));
        b.add_node(NodeSpec::new("FACTORY", GeoPoint::new(52.24, 15.91), NodeCategory::manufacturing())
            .stock(2_000.0, 15_000.0));
        b.add_route(road("mill_factory", "MILL", "FACTORY"));
        b
    }

    pub fn road(key: &str, from: &str, to: &str) -> RouteSpec {
        RouteSpec::new(key, from, to, TransportMode::Road)
            .vehicle(600.0, 80.0)
            .emission_factor(0.057)
            .frequency_days(2.0)
    }
}

// ── Builder & validation ──────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use sc_core::{GeoPoint, NodeId, RouteId};

    use super::helpers::{pair, road};
    use crate::{NetworkBuilder, NetworkError, NodeCategory, NodeSpec};

    #[test]
    fn ids_follow_insertion_order() {
        let net = pair().build().unwrap();
        assert_eq!(net.node_id("MILL"), Some(NodeId(0)));
        assert_eq!(net.node_id("FACTORY"), Some(NodeId(1)));
        let route = net.route(RouteId(0));
        assert_eq!(route.from, NodeId(0));
        assert_eq!(route.to, NodeId(1));
    }

    #[test]
    fn missing_path_falls_back_to_endpoints() {
        let net = pair().build().unwrap();
        let route = net.route_by_key("mill_factory").unwrap();
        assert!(route.path_fallback);
        assert_eq!(route.path, vec![net.node(route.from).pos, net.node(route.to).pos]);
        assert!((route.path_length_km - route.distance_km).abs() < 1e-9);
    }

    #[test]
    fn single_point_path_also_falls_back() {
        let mut b = pair();
        b.add_route(road("short", "FACTORY", "MILL").path(vec![GeoPoint::new(52.24, 15.91)]));
        let net = b.build().unwrap();
        let route = net.route_by_key("short").unwrap();
        assert!(route.path_fallback);
        assert_eq!(route.path.len(), 2);
    }

    #[test]
    fn explicit_path_kept() {
        let mut b = pair();
        b.add_route(road("detour", "FACTORY", "MILL").path(vec![
            GeoPoint::new(52.24, 15.91),
            GeoPoint::new(54.0, 18.0),
            GeoPoint::new(57.75, 14.50),
        ]));
        let net = b.build().unwrap();
        let route = net.route_by_key("detour").unwrap();
        assert!(!route.path_fallback);
        assert_eq!(route.leg_count(), 2);
        assert!(route.path_length_km > route.distance_km);
    }

    #[test]
    fn travel_secs_uses_direct_distance() {
        let net = pair().build().unwrap();
        let route = net.route_by_key("mill_factory").unwrap();
        let expected = route.distance_km / 80.0 * 3_600.0;
        assert!((route.travel_secs() - expected).abs() < 1e-6);
    }

    #[test]
    fn unknown_node_rejected() {
        let mut b = pair();
        b.add_route(road("bad", "MILL", "NOWHERE"));
        match b.build() {
            Err(NetworkError::UnknownNode { route, node }) => {
                assert_eq!(route, "bad");
                assert_eq!(node, "NOWHERE");
            }
            other => panic!("expected UnknownNode, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_keys_rejected() {
        let mut b = pair();
        b.add_node(NodeSpec::new("MILL", GeoPoint::new(0.0, 0.0), NodeCategory::RawMaterial));
        assert!(matches!(b.build(), Err(NetworkError::DuplicateNode(k)) if k == "MILL"));

        let mut b = pair();
        b.add_route(road("mill_factory", "MILL", "FACTORY"));
        assert!(matches!(b.build(), Err(NetworkError::DuplicateRoute(_))));
    }

    #[test]
    fn self_loop_rejected() {
        let mut b = pair();
        b.add_route(road("loop", "MILL", "MILL"));
        assert!(matches!(b.build(), Err(NetworkError::SelfLoop(_))));
    }

    #[test]
    fn negative_values_rejected() {
        let mut b = NetworkBuilder::new();
        b.add_node(NodeSpec::new("X", GeoPoint::new(0.0, 0.0), NodeCategory::RawMaterial)
            .stock(0.0, -1.0));
        assert!(matches!(
            b.build(),
            Err(NetworkError::InvalidValue { what: "capacity", .. })
        ));

        let mut b = NetworkBuilder::new();
        b.add_node(NodeSpec::new(
            "X",
            GeoPoint::new(0.0, 0.0),
            NodeCategory::Manufacturing { base_production_rate: -5.0 },
        ));
        assert!(matches!(
            b.build(),
            Err(NetworkError::InvalidValue { what: "production rate", .. })
        ));

        let mut b = pair();
        b.add_route(road("slow", "FACTORY", "MILL").vehicle(600.0, 0.0));
        assert!(matches!(
            b.build(),
            Err(NetworkError::InvalidValue { what: "speed", .. })
        ));
    }

    #[test]
    fn stock_above_capacity_rejected() {
        let mut b = NetworkBuilder::new();
        b.add_node(NodeSpec::new("X", GeoPoint::new(0.0, 0.0), NodeCategory::Distribution)
            .stock(11.0, 10.0));
        assert!(matches!(b.build(), Err(NetworkError::StockAboveCapacity { .. })));
    }

    #[test]
    fn bad_coordinates_rejected() {
        let mut b = NetworkBuilder::new();
        b.add_node(NodeSpec::new("X", GeoPoint::new(95.0, 0.0), NodeCategory::Distribution));
        assert!(matches!(b.build(), Err(NetworkError::InvalidCoordinates(_))));
    }
}

// ── Categories ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod category {
    use crate::{NodeCategory, DEFAULT_PRODUCTION_RATE, DEFAULT_SALES_RATE};

    #[test]
    fn rates_only_on_matching_category() {
        assert_eq!(NodeCategory::manufacturing().base_production_rate(), DEFAULT_PRODUCTION_RATE);
        assert_eq!(NodeCategory::manufacturing().base_sales_rate(), 0.0);
        assert_eq!(NodeCategory::retail().base_sales_rate(), DEFAULT_SALES_RATE);
        assert_eq!(NodeCategory::RawMaterial.base_production_rate(), 0.0);
        assert_eq!(NodeCategory::Distribution.base_sales_rate(), 0.0);
    }

    #[test]
    fn display() {
        assert_eq!(NodeCategory::RawMaterial.to_string(), "raw_materials");
        assert_eq!(NodeCategory::retail().to_string(), "retail");
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use sc_core::TransportMode;

    use crate::{load_network_reader, NetworkError, NodeCategory};

    const NETWORK_JSON: &str = r#"{
        "nodes": [
            { "key": "CN", "coords": [22.54, 114.05], "type": "raw_materials",
              "capacity": 12000, "initial_stock": 6000 },
            { "key": "FACTORY", "name": "Plant", "coords": [52.24, 15.91],
              "type": "manufacturing", "capacity": 15000, "initial_stock": 2000,
              "production_rate": 75 },
            { "key": "SHOP", "coords": [51.55, -0.27], "type": "retail",
              "capacity": 3000, "initial_stock": 500 }
        ],
        "routes": [
            { "key": "cn_factory", "from": "CN", "to": "FACTORY", "mode": "rail",
              "path": [[22.54, 114.05], [55.76, 37.62], [52.24, 15.91]],
              "capacity": 26650, "speed": 45, "emission": 0.022, "frequency": 7 },
            { "key": "factory_shop", "from": "FACTORY", "to": "SHOP", "mode": "truck",
              "capacity": 600, "speed": 80, "emission": 0.057, "frequency": 1 }
        ]
    }"#;

    #[test]
    fn parses_nodes_and_routes() {
        let net = load_network_reader(Cursor::new(NETWORK_JSON)).unwrap();
        assert_eq!(net.node_count(), 3);
        assert_eq!(net.route_count(), 2);

        let factory = net.node_by_key("FACTORY").unwrap();
        assert_eq!(factory.name, "Plant");
        assert_eq!(
            factory.category,
            NodeCategory::Manufacturing { base_production_rate: 75.0 }
        );
        assert_eq!(net.node_by_key("CN").unwrap().name, "CN");

        let shop = net.node_by_key("SHOP").unwrap();
        assert_eq!(shop.category, NodeCategory::retail());

        let rail = net.route_by_key("cn_factory").unwrap();
        assert_eq!(rail.mode, TransportMode::Rail);
        assert_eq!(rail.path.len(), 3);
        assert!(!rail.path_fallback);

        let road = net.route_by_key("factory_shop").unwrap();
        assert_eq!(road.mode, TransportMode::Road);
        assert!(road.path_fallback);
    }

    #[test]
    fn unknown_category_is_parse_error() {
        let json = r#"{ "nodes": [ { "key": "X", "coords": [0, 0], "type": "port",
                        "capacity": 1, "initial_stock": 0 } ] }"#;
        assert!(matches!(load_network_reader(Cursor::new(json)), Err(NetworkError::Parse(_))));
    }

    #[test]
    fn unknown_mode_is_parse_error() {
        let json = NETWORK_JSON.replace("\"truck\"", "\"barge\"");
        assert!(matches!(load_network_reader(Cursor::new(json)), Err(NetworkError::Parse(_))));
    }

    #[test]
    fn malformed_json_is_json_error() {
        assert!(matches!(
            load_network_reader(Cursor::new("{ nodes: ")),
            Err(NetworkError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::path::Path::new("/definitely/not/here/network.json");
        assert!(matches!(crate::load_network_json(path), Err(NetworkError::Io(_))));
    }
}

// ── Preset ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod preset {
    use sc_core::TransportMode;

    use crate::preset::{self, european_network};
    use crate::NodeCategory;

    #[test]
    fn builds_ten_nodes_nine_routes() {
        let net = european_network().unwrap();
        assert_eq!(net.node_count(), 10);
        assert_eq!(net.route_count(), 9);
        assert!(net.routes().iter().all(|r| !r.path_fallback));
    }

    #[test]
    fn one_manufacturer_four_stores() {
        let net = european_network().unwrap();
        let count = |pred: fn(&NodeCategory) -> bool| {
            net.nodes().iter().filter(|n| pred(&n.category)).count()
        };
        assert_eq!(count(|c| matches!(c, NodeCategory::Manufacturing { .. })), 1);
        assert_eq!(count(|c| matches!(c, NodeCategory::Retail { .. })), 4);
        assert_eq!(count(|c| matches!(c, NodeCategory::RawMaterial)), 4);
    }

    #[test]
    fn hub_has_four_outbound_routes() {
        let net = european_network().unwrap();
        let dc = net.node_id(preset::DC).unwrap();
        assert_eq!(net.routes_from(dc).count(), 4);
    }

    #[test]
    fn modes_match_corridors() {
        let net = european_network().unwrap();
        let mode = |k| net.route_by_key(k).unwrap().mode;
        assert_eq!(mode(preset::CN_FACTORY), TransportMode::Rail);
        assert_eq!(mode(preset::SWE_FACTORY), TransportMode::Multimodal);
        assert_eq!(mode(preset::ROM_FACTORY), TransportMode::Road);
        assert_eq!(mode(preset::DC_US), TransportMode::Air);
    }
}
