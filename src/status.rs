use crate::constants::*;
use crate::core::{
    format_coordinates, AudioStatus, Coordinate, GpsStatus, LocationSource, PetView, SoundType,
    StatusKind, ADDRESS_PENDING_TEXT,
};
use crate::dom;
use web_sys as web;

/// Write a status line and light or dim its dot.
pub fn report(document: &web::Document, kind: StatusKind, text: &str, active: bool) {
    dom::set_text(document, kind.text_id(), text);
    dom::set_class(document, kind.dot_id(), CLASS_ACTIVE, active);
}

#[inline]
pub fn report_gps(document: &web::Document, status: GpsStatus) {
    report(document, StatusKind::Gps, status.text(), status.active());
}

/// Audio status line plus the playing indicator.
pub fn report_audio(document: &web::Document, status: AudioStatus) {
    report(document, StatusKind::Audio, status.text(), status.active());
    dom::set_class(document, AUDIO_INDICATOR_ID, CLASS_PLAYING, status.indicator_on());
    if status == AudioStatus::Paused {
        dom::set_text(document, CURRENT_SOUND_ID, AudioStatus::Paused.text());
    }
}

#[inline]
pub fn show_sound(document: &web::Document, sound: SoundType) {
    dom::set_text(document, CURRENT_SOUND_ID, &sound.caption());
}

#[inline]
pub fn show_location_source(document: &web::Document, source: LocationSource) {
    dom::set_text(document, LOCATION_INFO_ID, source.label());
}

pub fn show_coordinates(document: &web::Document, at: Coordinate) {
    if let Some(el) = document.get_element_by_id(COORDINATES_ID) {
        let (lat, lng) = format_coordinates(at);
        el.set_inner_html(&format!("{}<br>{}", lat, lng));
    }
}

pub fn show_address_pending(document: &web::Document) {
    dom::set_text(document, ADDRESS_ID, ADDRESS_PENDING_TEXT);
    dom::set_class(document, ADDRESS_ID, CLASS_LOADING, true);
}

pub fn show_address(document: &web::Document, address: &str) {
    dom::set_text(document, ADDRESS_ID, address);
    dom::set_class(document, ADDRESS_ID, CLASS_LOADING, false);
}

/// Render the pet card. The image source is only swapped once preloaded.
pub fn show_pet(document: &web::Document, view: &PetView) {
    dom::set_text(document, PET_STATUS_ID, view.status_text());
    dom::set_class(document, PET_STATUS_ID, CLASS_LOADING, view.is_loading());

    if let PetView::Showing { url } = view {
        if let Some(el) = document.get_element_by_id(PET_IMAGE_ID) {
            _ = el.set_attribute("src", url);
            _ = el.class_list().add_1(CLASS_FADE_IN);
        }
    }
    if let Some(shown) = view.image_visible() {
        dom::set_display(
            document,
            PET_IMAGE_ID,
            if shown { DISPLAY_IMAGE } else { DISPLAY_HIDDEN },
        );
    }
    if let Some(shown) = view.placeholder_visible() {
        dom::set_display(
            document,
            PET_PLACEHOLDER_ID,
            if shown { DISPLAY_PLACEHOLDER } else { DISPLAY_HIDDEN },
        );
    }
}
