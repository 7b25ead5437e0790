use crate::app::SharedApp;
use crate::constants::*;
use crate::dom;
use crate::pipeline;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Hook up the control buttons.
pub fn wire_controls(document: &web::Document, app: &SharedApp) {
    let locate_app = app.clone();
    dom::add_click_listener(document, LOCATE_BUTTON_ID, move || {
        spawn_local(pipeline::locate(locate_app.clone()));
    });

    let move_app = app.clone();
    dom::add_click_listener(document, SIMULATE_BUTTON_ID, move || {
        pipeline::toggle_movement(&move_app);
    });

    let random_app = app.clone();
    dom::add_click_listener(document, RANDOM_SOUND_BUTTON_ID, move || {
        random_app.borrow_mut().play_random_sound();
    });

    let stop_app = app.clone();
    dom::add_click_listener(document, STOP_SOUND_BUTTON_ID, move || {
        stop_app.borrow_mut().stop_all_sounds();
    });

    let pet_app = app.clone();
    dom::add_click_listener(document, PET_BUTTON_ID, move || {
        spawn_local(pipeline::fetch_pet(pet_app.clone()));
    });
}

/// Browsers keep a fresh `AudioContext` suspended until a user gesture.
pub fn wire_audio_unlock(document: &web::Document, app: &SharedApp) {
    for event in ["click", "touchstart"] {
        let weak = Rc::downgrade(app);
        dom::add_document_once_listener(document, event, move || {
            if let Some(app) = weak.upgrade() {
                app.borrow_mut().wake_audio();
            }
        });
    }
}
