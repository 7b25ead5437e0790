// Host-side tests for coordinates, geolocation fallback and status texts.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod location {
        include!("../src/core/location.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod status {
        include!("../src/core/status.rs");
    }
}

use crate::core::config::*;
use crate::core::location::*;
use crate::core::status::*;

#[test]
fn coordinates_render_with_six_decimals() {
    let (lat, lng) = format_coordinates(Coordinate::new(-34.6037, -58.3816));
    assert_eq!(lat, "Latitud: -34.603700");
    assert_eq!(lng, "Longitud: -58.381600");

    let (lat, lng) = format_coordinates(Coordinate::new(0.0, 1.23456789));
    assert_eq!(lat, "Latitud: 0.000000");
    assert_eq!(lng, "Longitud: 1.234568");
}

#[test]
fn six_decimals_for_any_magnitude() {
    for v in [-179.999_999_9, -1e-9, 12.5, 89.1234565, 100.0] {
        let (lat, _) = format_coordinates(Coordinate::new(v, 0.0));
        let digits = lat.rsplit('.').next().unwrap();
        assert_eq!(digits.len(), 6, "{lat}");
    }
}

#[test]
fn successful_fix_is_real() {
    let here = Coordinate::new(51.5, -0.12);
    let fix = LocationFix::resolve(&Ok(here), DEFAULT_COORDINATE);
    assert_eq!(fix.coordinate, here);
    assert_eq!(fix.source, LocationSource::Real);
    assert!(fix.is_real());
}

#[test]
fn failed_fix_falls_back_to_initial_map_view() {
    let config = AppConfig::default();
    for err in [
        LocateError::Unsupported,
        LocateError::Denied("nope".into()),
        LocateError::Platform {
            code: 3,
            message: "timeout".into(),
        },
    ] {
        let fix = LocationFix::resolve(&Err(err), config.default_coordinate);
        assert_eq!(fix.coordinate, Coordinate::new(-34.6037, -58.3816));
        assert_eq!(fix.source, LocationSource::Simulated);
    }
}

#[test]
fn position_error_codes_map_to_variants() {
    assert_eq!(
        LocateError::from_code(1, "denied".into()),
        LocateError::Denied("denied".into())
    );
    assert!(matches!(
        LocateError::from_code(2, "unavailable".into()),
        LocateError::Platform { code: 2, .. }
    ));
}

#[test]
fn source_labels() {
    assert_eq!(LocationSource::Real.label(), "Ubicación actual");
    assert_eq!(LocationSource::Simulated.label(), "Ubicación simulada");
}

#[test]
fn default_config_matches_page_behaviour() {
    let config = AppConfig::default();
    assert_eq!(config.default_coordinate, DEFAULT_COORDINATE);
    assert_eq!(config.initial_zoom, 11);
    assert_eq!(config.follow_zoom, 13);
    assert_eq!(config.address_delay_ms, 1500);
    assert_eq!(config.movement.period_ms, 3000);
    assert!((config.movement.step_deg - 0.005).abs() < 1e-12);
    assert_eq!(
        config.geolocation,
        GeolocationOptions {
            enable_high_accuracy: true,
            timeout_ms: 10_000,
            maximum_age_ms: 60_000,
        }
    );
    assert_eq!(config.pet_api_url, "https://dog.ceo/api/breeds/image/random");
}

#[test]
fn gps_status_activity() {
    assert!(GpsStatus::Found.active());
    assert!(GpsStatus::Simulating.active());
    assert!(!GpsStatus::Searching.active());
    assert!(!GpsStatus::Failed.active());
    assert!(!GpsStatus::SimulationStopped.active());
    assert_eq!(GpsStatus::Failed.text(), "Error en GPS");
}

#[test]
fn status_kinds_point_at_distinct_elements() {
    assert_eq!(StatusKind::Gps.dot_id(), "gps-dot");
    assert_eq!(StatusKind::Gps.text_id(), "gps-status");
    assert_eq!(StatusKind::Audio.dot_id(), "audio-dot");
    assert_eq!(StatusKind::Audio.text_id(), "audio-status");
}
