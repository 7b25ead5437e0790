//! Thin bindings over the global Leaflet (`L`) namespace.
//!
//! Only the handful of calls the page needs are bound: create the map, add an
//! OpenStreetMap tile layer, place one marker and move view and marker
//! together.

use crate::constants::{MARKER_ICON_HTML, MARKER_ICON_SIZE_PX};
use crate::core::{Coordinate, TILE_ATTRIBUTION, TILE_MAX_ZOOM, TILE_URL};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    type LeafletMap;
    type TileLayer;
    type Marker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container_id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn leaflet_marker(at: &JsValue, options: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Marker, at: &JsValue) -> Marker;
}

fn lat_lng(at: Coordinate) -> JsValue {
    js_sys::Array::of2(&at.lat.into(), &at.lng.into()).into()
}

fn js_object(entries: &[(&str, JsValue)]) -> JsValue {
    let obj = js_sys::Object::new();
    for (key, value) in entries {
        _ = js_sys::Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj.into()
}

/// The page's map with its single position marker.
pub struct MapView {
    map: LeafletMap,
    marker: Marker,
}

impl MapView {
    pub fn new(container_id: &str, center: Coordinate, zoom: u8) -> anyhow::Result<Self> {
        let js = |e: JsValue| anyhow::anyhow!("{:?}", e);

        let map = leaflet_map(
            container_id,
            &js_object(&[
                ("zoomControl", JsValue::TRUE),
                ("attributionControl", JsValue::TRUE),
            ]),
        )
        .map_err(js)?;
        map.set_view(&lat_lng(center), zoom as f64);

        tile_layer(
            TILE_URL,
            &js_object(&[
                ("attribution", JsValue::from_str(TILE_ATTRIBUTION)),
                ("maxZoom", JsValue::from(TILE_MAX_ZOOM)),
            ]),
        )
        .map_err(js)?
        .add_to(&map);

        let size: js_sys::Array = MARKER_ICON_SIZE_PX.iter().map(|&px| JsValue::from(px)).collect();
        let icon = div_icon(&js_object(&[
            ("html", JsValue::from_str(MARKER_ICON_HTML)),
            ("iconSize", size.into()),
            ("className", JsValue::from_str("")),
        ]))
        .map_err(js)?;
        let marker = leaflet_marker(&lat_lng(center), &js_object(&[("icon", icon)])).map_err(js)?;
        marker.add_to(&map);

        log::info!("[map] ready at ({:.4},{:.4}) zoom={}", center.lat, center.lng, zoom);
        Ok(Self { map, marker })
    }

    /// Recenter the view and move the marker to `at`.
    pub fn follow(&self, at: Coordinate, zoom: u8) {
        let pos = lat_lng(at);
        self.map.set_view(&pos, zoom as f64);
        self.marker.set_lat_lng(&pos);
    }
}
