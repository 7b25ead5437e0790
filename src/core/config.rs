use super::location::{Coordinate, GeolocationOptions, DEFAULT_COORDINATE};

/// Endpoint returning `{ "status": "success", "message": "<image url>" }`.
pub const PET_API_URL: &str = "https://dog.ceo/api/breeds/image/random";

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap";
pub const TILE_MAX_ZOOM: u8 = 19;

/// Runtime settings for the whole page.
///
/// Everything has a fixed default; the struct exists so components receive
/// their settings explicitly rather than reaching for globals.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Initial map view and geolocation fallback.
    pub default_coordinate: Coordinate,
    pub initial_zoom: u8,
    /// Zoom applied whenever a new location is shown.
    pub follow_zoom: u8,
    pub geolocation: GeolocationOptions,
    pub movement: MovementSettings,
    pub address_delay_ms: i32,
    pub pet_api_url: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_coordinate: DEFAULT_COORDINATE,
            initial_zoom: 11,
            follow_zoom: 13,
            geolocation: GeolocationOptions::default(),
            movement: MovementSettings::default(),
            address_delay_ms: 1500,
            pet_api_url: PET_API_URL,
        }
    }
}

/// Random-walk parameters for the movement simulator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementSettings {
    pub period_ms: u32,
    /// Full width of the uniform perturbation; each axis moves by
    /// `(u - 0.5) * step_deg` per tick.
    pub step_deg: f64,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            period_ms: 3000,
            step_deg: 0.005,
        }
    }
}
