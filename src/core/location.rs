use thiserror::Error;

/// A latitude/longitude pair in degrees. No range validation is performed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Buenos Aires city centre; also the map's initial view.
pub const DEFAULT_COORDINATE: Coordinate = Coordinate::new(-34.6037, -58.3816);

/// Where a coordinate came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationSource {
    Real,
    Simulated,
}

impl LocationSource {
    pub fn label(self) -> &'static str {
        match self {
            LocationSource::Real => "Ubicación actual",
            LocationSource::Simulated => "Ubicación simulada",
        }
    }
}

/// Options passed to the platform geolocation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeolocationOptions {
    pub enable_high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms: 10_000,
            maximum_age_ms: 60_000,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("geolocation is not supported by this browser")]
    Unsupported,
    #[error("permission denied: {0}")]
    Denied(String),
    #[error("geolocation failed (code {code}): {message}")]
    Platform { code: u16, message: String },
}

impl LocateError {
    /// Map a `GeolocationPositionError` code/message pair.
    pub fn from_code(code: u16, message: String) -> Self {
        // PERMISSION_DENIED = 1
        if code == 1 {
            LocateError::Denied(message)
        } else {
            LocateError::Platform { code, message }
        }
    }
}

/// Outcome of a location request after the fallback rule is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocationFix {
    pub coordinate: Coordinate,
    pub source: LocationSource,
}

impl LocationFix {
    /// Real coordinates on success; the fallback coordinate on any failure.
    pub fn resolve(result: &Result<Coordinate, LocateError>, fallback: Coordinate) -> Self {
        match result {
            Ok(coordinate) => Self {
                coordinate: *coordinate,
                source: LocationSource::Real,
            },
            Err(_) => Self {
                coordinate: fallback,
                source: LocationSource::Simulated,
            },
        }
    }

    pub fn is_real(&self) -> bool {
        self.source == LocationSource::Real
    }
}

/// Readout lines for the coordinates panel, always with six decimals.
pub fn format_coordinates(c: Coordinate) -> (String, String) {
    (
        format!("Latitud: {:.6}", c.lat),
        format!("Longitud: {:.6}", c.lng),
    )
}
