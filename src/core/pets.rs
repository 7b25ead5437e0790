use super::address::{RequestTracker, Ticket};
use serde::Deserialize;
use thiserror::Error;

/// Body returned by the random image endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PetApiResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl PetApiResponse {
    pub fn from_json(body: &str) -> Result<Self, PetError> {
        serde_json::from_str(body).map_err(|e| PetError::Decode(e.to_string()))
    }

    /// The image URL when the API reported success with a non-empty message.
    pub fn image_url(&self) -> Result<&str, PetError> {
        match self.message.as_deref() {
            Some(url) if self.status == "success" && !url.trim().is_empty() => Ok(url),
            _ => Err(PetError::Rejected(self.status.clone())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PetError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("API rejected the request (status {0:?})")]
    Rejected(String),
    #[error("image failed to load: {0}")]
    ImageLoad(String),
}

/// What the pet panel should display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PetView {
    Loading,
    Showing { url: String },
    Placeholder,
}

impl PetView {
    pub fn status_text(&self) -> &'static str {
        match self {
            PetView::Loading => "Cargando nueva foto...",
            PetView::Showing { .. } => "Nueva mascota cargada",
            PetView::Placeholder => "Error al cargar imagen",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PetView::Loading)
    }

    /// `None` leaves the current visibility untouched (while loading).
    pub fn image_visible(&self) -> Option<bool> {
        match self {
            PetView::Loading => None,
            PetView::Showing { .. } => Some(true),
            PetView::Placeholder => Some(false),
        }
    }

    pub fn placeholder_visible(&self) -> Option<bool> {
        self.image_visible().map(|shown| !shown)
    }
}

/// Tracks fetch generations so an older response never overwrites a newer one.
#[derive(Debug, Default)]
pub struct PetFetcher {
    requests: RequestTracker,
}

impl PetFetcher {
    pub fn begin(&mut self) -> (Ticket, PetView) {
        (self.requests.begin(), PetView::Loading)
    }

    /// View for a finished request, or `None` if a newer one was started.
    pub fn finish(&self, ticket: Ticket, outcome: Result<String, PetError>) -> Option<PetView> {
        if !self.requests.is_current(ticket) {
            return None;
        }
        Some(match outcome {
            Ok(url) => PetView::Showing { url },
            Err(_) => PetView::Placeholder,
        })
    }
}
