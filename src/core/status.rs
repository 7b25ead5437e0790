// Status lines shown in the side panel and the element ids they live in.

/// A subsystem with a status line and an "active" indicator dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Gps,
    Audio,
}

impl StatusKind {
    pub fn dot_id(self) -> &'static str {
        match self {
            StatusKind::Gps => "gps-dot",
            StatusKind::Audio => "audio-dot",
        }
    }

    pub fn text_id(self) -> &'static str {
        match self {
            StatusKind::Gps => "gps-status",
            StatusKind::Audio => "audio-status",
        }
    }
}

/// GPS line states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GpsStatus {
    Searching,
    Found,
    Failed,
    Simulating,
    SimulationStopped,
}

impl GpsStatus {
    pub fn text(self) -> &'static str {
        match self {
            GpsStatus::Searching => "Buscando ubicación...",
            GpsStatus::Found => "Ubicación encontrada",
            GpsStatus::Failed => "Error en GPS",
            GpsStatus::Simulating => "Simulando movimiento",
            GpsStatus::SimulationStopped => "Simulación detenida",
        }
    }

    pub fn active(self) -> bool {
        matches!(self, GpsStatus::Found | GpsStatus::Simulating)
    }
}

/// Audio line states. The dot stays lit in all of them; only the
/// playing indicator distinguishes an audible tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioStatus {
    Playing,
    Idle,
    Paused,
}

impl AudioStatus {
    pub fn text(self) -> &'static str {
        match self {
            AudioStatus::Playing => "Reproduciendo",
            AudioStatus::Idle => "Audio disponible",
            AudioStatus::Paused => "Audio pausado",
        }
    }

    pub fn active(self) -> bool {
        true
    }

    pub fn indicator_on(self) -> bool {
        self == AudioStatus::Playing
    }
}

pub const ADDRESS_PENDING_TEXT: &str = "Obteniendo dirección...";
pub const SIMULATE_START_LABEL: &str = "Simular Movimiento";
pub const SIMULATE_STOP_LABEL: &str = "Detener Simulación";
