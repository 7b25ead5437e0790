use crate::app::SharedApp;
use crate::constants::SIMULATE_BUTTON_ID;
use crate::core::{
    Coordinate, GpsStatus, LocationFix, LocationSource, MovementState, SoundType,
    SIMULATE_START_LABEL, SIMULATE_STOP_LABEL,
};
use crate::{dom, geolocation, pet_image, status, timers};
use std::rc::Rc;

/// Show a new position: map, readouts, location tone and address lookup.
pub fn update_location(app: &SharedApp, at: Coordinate, source: LocationSource) {
    let (ticket, delay_ms) = {
        let mut a = app.borrow_mut();
        if let Some(map) = &a.map {
            map.follow(at, a.config.follow_zoom);
        }
        status::show_location_source(&a.document, source);
        status::show_coordinates(&a.document, at);
        a.play_sound(SoundType::for_coordinate(at));
        status::show_address_pending(&a.document);
        (a.addresses.begin(), a.config.address_delay_ms)
    };

    let weak = Rc::downgrade(app);
    timers::set_timeout(delay_ms, move || {
        let Some(app) = weak.upgrade() else {
            return;
        };
        let mut a = app.borrow_mut();
        if !a.addresses.is_current(ticket) {
            log::debug!("[address] dropping lookup {:?}", ticket);
            return;
        }
        let address = a.geocoder.describe(at);
        status::show_address(&a.document, &address);
    });
}

/// Ask the browser for a position; fall back to the default view on failure.
pub async fn locate(app: SharedApp) {
    let (document, options, fallback) = {
        let a = app.borrow();
        (
            a.document.clone(),
            a.config.geolocation,
            a.config.default_coordinate,
        )
    };
    status::report_gps(&document, GpsStatus::Searching);

    let result = geolocation::current_position(&options).await;
    if let Err(e) = &result {
        log::warn!("[gps] {}; using default location", e);
    }
    let fix = LocationFix::resolve(&result, fallback);
    status::report_gps(
        &document,
        if fix.is_real() {
            GpsStatus::Found
        } else {
            GpsStatus::Failed
        },
    );
    update_location(&app, fix.coordinate, fix.source);
}

/// Start or stop the simulated walk.
pub fn toggle_movement(app: &SharedApp) {
    let weak = Rc::downgrade(app);
    let mut a = app.borrow_mut();
    let state = a.movement.toggle(move |at| {
        if let Some(app) = weak.upgrade() {
            update_location(&app, at, LocationSource::Simulated);
        }
    });
    let (gps, label) = match state {
        MovementState::Running => (GpsStatus::Simulating, SIMULATE_STOP_LABEL),
        MovementState::Idle => (GpsStatus::SimulationStopped, SIMULATE_START_LABEL),
    };
    status::report_gps(&a.document, gps);
    dom::set_text(&a.document, SIMULATE_BUTTON_ID, label);
    log::info!("[move] {:?}", state);
}

/// Fetch and show a new pet picture; only the latest request may render.
pub async fn fetch_pet(app: SharedApp) {
    let (ticket, view, document, api_url) = {
        let mut a = app.borrow_mut();
        let (ticket, view) = a.pets.begin();
        (ticket, view, a.document.clone(), a.config.pet_api_url)
    };
    status::show_pet(&document, &view);

    let outcome = pet_image::load_pet(api_url).await;
    if let Err(e) = &outcome {
        log::error!("[pets] {}", e);
    }
    let view = app.borrow().pets.finish(ticket, outcome);
    match view {
        Some(view) => status::show_pet(&document, &view),
        None => log::debug!("[pets] discarding stale response {:?}", ticket),
    }
}
