use super::location::Coordinate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub const CITIES: [&str; 5] = ["Buenos Aires", "Córdoba", "Rosario", "Mendoza", "La Plata"];
pub const DISTRICTS: [&str; 5] = ["Centro", "Palermo", "Recoleta", "San Telmo", "Belgrano"];
pub const COUNTRY: &str = "Argentina";

/// Turns a coordinate into a human-readable address line.
pub trait ReverseGeocoder {
    fn describe(&mut self, at: Coordinate) -> String;
}

/// Stand-in geocoder: ignores the coordinate and draws a random
/// district and city.
pub struct SimulatedGeocoder {
    rng: StdRng,
}

impl SimulatedGeocoder {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl ReverseGeocoder for SimulatedGeocoder {
    fn describe(&mut self, _at: Coordinate) -> String {
        let city = CITIES.choose(&mut self.rng).copied().unwrap_or(CITIES[0]);
        let district = DISTRICTS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(DISTRICTS[0]);
        format!("{}, {}, {}", district, city, COUNTRY)
    }
}

/// Ticket for one in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(pub u64);

/// Generation counter: only the most recently issued ticket is current.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    generation: u64,
}

impl RequestTracker {
    pub fn begin(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}
