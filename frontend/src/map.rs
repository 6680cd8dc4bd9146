use seed::{prelude::*, *};
use serde::Deserialize;
use serde_wasm_bindgen::to_value;
use shared::Coordinate;
use wasm_bindgen::{
    JsCast,
    prelude::{JsValue, wasm_bindgen},
};

use crate::config::{MAP_CENTER, MAP_ZOOM, TILE_ATTRIBUTION, TILE_URL};

#[wasm_bindgen(module = "/leaflet_map.js")]
extern "C" {
    #[wasm_bindgen(js_name = initMap)]
    fn init_map_js(center_lat: f64, center_lng: f64, zoom: u8, tile_url: &str, attribution: &str);
    #[wasm_bindgen(js_name = setClickMarker)]
    fn set_click_marker_js(position: JsValue);
    #[wasm_bindgen(js_name = updatePrediction)]
    fn update_prediction_js(points: JsValue, draw_line: bool);
}

/// Window event the Leaflet glue fires for every map click.
pub const MAP_CLICK_EVENT: &str = "map-click";

#[derive(Debug, Deserialize)]
pub struct MapClickPayload {
    pub lat: f64,
    pub lng: f64,
}

impl MapClickPayload {
    pub fn from_event(event: web_sys::Event) -> Option<Self> {
        let event = event.dyn_into::<web_sys::CustomEvent>().ok()?;
        serde_wasm_bindgen::from_value(event.detail()).ok()
    }
}

/// Click marker state; the latest click replaces the previous one.
#[derive(Debug, Default)]
pub struct MapView {
    position: Option<Coordinate>,
}

impl MapView {
    pub fn position(&self) -> Option<Coordinate> {
        self.position
    }

    pub fn click(&mut self, lat: f64, lng: f64) -> Coordinate {
        let position = Coordinate::new(lat, lng);
        self.position = Some(position);
        position
    }
}

pub fn init_map() {
    let [lat, lng] = MAP_CENTER;
    init_map_js(lat, lng, MAP_ZOOM, TILE_URL, TILE_ATTRIBUTION);
}

pub fn show_click_marker(position: Coordinate) {
    if let Ok(value) = to_value(&position) {
        set_click_marker_js(value);
    }
}

pub fn show_prediction(markers: &[Coordinate], draw_line: bool) {
    if let Ok(value) = to_value(markers) {
        update_prediction_js(value, draw_line);
    }
}
