//! Unit tests for sc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, RouteId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(RouteId::default(), RouteId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(RouteId(3).to_string(), "RouteId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::geo::path_length_km;
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(52.24, 15.91);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let factory = GeoPoint::new(52.24, 15.91);
        let hub = GeoPoint::new(51.51, 7.46);
        let ab = factory.distance_km(hub);
        let ba = hub.distance_km(factory);
        assert!((ab - ba).abs() < 1e-9);
        assert!((ab - 585.0).abs() < 10.0, "got {ab}");
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let half = std::f64::consts::PI * crate::geo::EARTH_RADIUS_KM;
        assert!((a.distance_km(b) - half).abs() < 1e-6);
    }

    #[test]
    fn path_length_sums_legs() {
        let path = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(2.0, 0.0),
        ];
        let direct = path[0].distance_km(path[2]);
        assert!((path_length_km(&path) - direct).abs() < 1e-6);
        assert_eq!(path_length_km(&path[..1]), 0.0);
    }

    #[test]
    fn validity() {
        assert!(GeoPoint::new(45.0, 9.2).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }
}

#[cfg(test)]
mod time {
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::{CoreError, SimClock};

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap()
    }

    #[test]
    fn stopped_clock_does_not_advance() {
        let mut clock = SimClock::new(start());
        assert_eq!(clock.advance(1.0), 0.0);
        assert_eq!(clock.elapsed_secs(), 0.0);
    }

    #[test]
    fn advance_scales_by_speed() {
        let mut clock = SimClock::new(start());
        assert!(clock.play());
        clock.set_speed(60.0).unwrap();
        let dt = clock.advance(0.5);
        assert_eq!(dt, 30.0);
        assert_eq!(clock.elapsed_secs(), 30.0);
    }

    #[test]
    fn play_twice_is_noop() {
        let mut clock = SimClock::new(start());
        assert!(clock.play());
        assert!(!clock.play());
        assert!(clock.is_playing());
    }

    #[test]
    fn pause_then_play_keeps_elapsed() {
        let mut clock = SimClock::new(start());
        clock.play();
        clock.advance(10.0);
        clock.pause();
        let before = clock.elapsed_secs();
        clock.play();
        assert_eq!(clock.elapsed_secs(), before);
    }

    #[test]
    fn reset_pauses_and_zeroes_but_keeps_speed() {
        let mut clock = SimClock::new(start());
        clock.play();
        clock.set_speed(5.0).unwrap();
        clock.advance(10.0);
        clock.reset();
        assert!(!clock.is_playing());
        assert_eq!(clock.elapsed_secs(), 0.0);
        assert_eq!(clock.speed(), 5.0);
    }

    #[test]
    fn invalid_speed_rejected_and_previous_kept() {
        let mut clock = SimClock::new(start());
        clock.set_speed(2.0).unwrap();
        assert_eq!(clock.set_speed(0.0), Err(CoreError::InvalidSpeed(0.0)));
        assert!(clock.set_speed(-1.0).is_err());
        assert!(clock.set_speed(f64::NAN).is_err());
        assert_eq!(clock.speed(), 2.0);
    }

    #[test]
    fn current_date_tracks_elapsed() {
        let mut clock = SimClock::new(start());
        clock.play();
        clock.set_speed(86_400.0).unwrap();
        clock.advance(1.5); // one and a half days
        let expected = start() + chrono::Duration::hours(36);
        assert_eq!(clock.current_date(), expected);
    }

    #[test]
    fn current_date_saturates_past_calendar_end() {
        let mut clock = SimClock::new(start());
        clock.play();
        clock.set_speed(1e15).unwrap();
        clock.advance(1.0);
        assert_eq!(clock.current_date(), NaiveDateTime::MAX);
        clock.advance(1e6);
        assert_eq!(clock.current_date(), NaiveDateTime::MAX);
    }

    #[test]
    fn hms_does_not_wrap_days() {
        let mut clock = SimClock::new(start());
        clock.play();
        clock.advance(25.0 * 3_600.0 + 61.0);
        assert_eq!(clock.elapsed_hms(), (25, 1, 1));
    }
}

#[cfg(test)]
mod seasonality {
    use chrono::NaiveDate;

    use crate::seasonality::multiplier;

    fn month(m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, 15).unwrap()
    }

    #[test]
    fn calendar_rule() {
        let expected = [1.3, 1.0, 1.0, 1.0, 1.0, 0.8, 0.8, 1.8, 1.8, 1.0, 1.0, 1.0];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(multiplier(&month(i as u32 + 1)), *want, "month {}", i + 1);
        }
    }

    #[test]
    fn works_on_datetimes() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        assert_eq!(multiplier(&dt), 1.3);
    }
}

#[cfg(test)]
mod transport {
    use crate::{EmissionBucket, TransportMode};

    #[test]
    fn buckets() {
        assert_eq!(TransportMode::Road.emission_bucket(), EmissionBucket::Truck);
        assert_eq!(TransportMode::Multimodal.emission_bucket(), EmissionBucket::Truck);
        assert_eq!(TransportMode::Rail.emission_bucket(), EmissionBucket::Rail);
        assert_eq!(TransportMode::Air.emission_bucket(), EmissionBucket::Air);
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("truck".parse::<TransportMode>().unwrap(), TransportMode::Road);
        assert_eq!(" Rail ".parse::<TransportMode>().unwrap(), TransportMode::Rail);
        assert!("boat".parse::<TransportMode>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(TransportMode::Multimodal.to_string(), "multimodal");
        assert_eq!(EmissionBucket::Air.to_string(), "air");
    }
}

#[cfg(test)]
mod deferred {
    use crate::DeferredQueue;

    #[test]
    fn pops_in_time_order() {
        let mut q = DeferredQueue::new();
        q.push(30.0, "c");
        q.push(10.0, "a");
        q.push(20.0, "b");
        let mut out = vec![];
        while let Some(due) = q.pop_due(100.0) {
            out.push(due.payload);
        }
        assert_eq!(out, ["a", "b", "c"]);
    }

    #[test]
    fn ties_pop_in_push_order() {
        let mut q = DeferredQueue::new();
        q.push(5.0, 1);
        q.push(5.0, 2);
        q.push(5.0, 3);
        let out: Vec<_> = std::iter::from_fn(|| q.pop_due(5.0).map(|d| d.payload)).collect();
        assert_eq!(out, [1, 2, 3]);
    }

    #[test]
    fn not_due_stays_queued() {
        let mut q = DeferredQueue::new();
        q.push(10.0, ());
        assert!(q.pop_due(9.999).is_none());
        assert_eq!(q.len(), 1);
        let due = q.pop_due(10.0).unwrap();
        assert_eq!(due.fire_at, 10.0);
        assert!(q.is_empty());
    }

    #[test]
    fn invalidate_drops_pending_and_retires_handles() {
        let mut q = DeferredQueue::new();
        let old = q.push(1.0, "stale");
        q.invalidate();
        assert!(q.is_empty());
        assert!(!q.is_current(old));
        let fresh = q.push(1.0, "fresh");
        assert!(q.is_current(fresh));
        assert_eq!(q.pop_due(2.0).unwrap().payload, "fresh");
    }

    #[test]
    fn next_fire_at_is_earliest() {
        let mut q = DeferredQueue::new();
        assert_eq!(q.next_fire_at(), None);
        q.push(7.0, ());
        q.push(3.0, ());
        assert_eq!(q.next_fire_at(), Some(3.0));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.gen_bool(0.5), r2.gen_bool(0.5));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(!rng.gen_bool(f64::NAN));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(7.0));
    }
}
