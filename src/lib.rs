#![cfg(target_arch = "wasm32")]
use crate::app::App;
use crate::constants::MAP_CONTAINER_ID;
use crate::core::AppConfig;
use crate::map::MapView;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod geolocation;
mod map;
mod pet_image;
mod pipeline;
mod status;
mod timers;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rastreador-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = AppConfig::default();

    // The page still works without tiles; only the map panel stays empty.
    let map = match MapView::new(
        MAP_CONTAINER_ID,
        config.default_coordinate,
        config.initial_zoom,
    ) {
        Ok(m) => Some(m),
        Err(e) => {
            log::error!("[map] init failed: {:?}", e);
            None
        }
    };

    let app = App::new_shared(document.clone(), config, map);
    if let Err(e) = app.borrow_mut().tones.backend_mut().context() {
        log::warn!("[audio] context unavailable until first tone: {}", e);
    }

    events::wire_audio_unlock(&document, &app);
    events::wire_controls(&document, &app);

    spawn_local(pipeline::locate(app.clone()));
    spawn_local(pipeline::fetch_pet(app.clone()));

    log::info!("rastreador-web ready");
    Ok(())
}
