use seed::{prelude::*, *};
use shared::Coordinate;
use wasm_bindgen::prelude::wasm_bindgen;

mod api;
pub mod config;
pub mod controller;
pub mod map;

use controller::{Controller, Settled, Ticket};
use map::{MAP_CLICK_EVENT, MapClickPayload, MapView};

#[derive(Default)]
pub struct Model {
    map: MapView,
    controller: Controller,
}

pub enum Msg {
    MapClicked { lat: f64, lng: f64 },
    ToggleMode,
    TimeChanged(String),
    PredictionFetched {
        ticket: Ticket,
        result: Result<Vec<Coordinate>, String>,
    },
}

pub fn init(_: Url, orders: &mut impl Orders<Msg>) -> Model {
    orders.stream(streams::window_event(Ev::from(MAP_CLICK_EVENT), |event| {
        let payload = MapClickPayload::from_event(event)?;
        web_sys::console::debug_1(
            &format!(
                "[frontend] map click lat={:.5} lng={:.5}",
                payload.lat, payload.lng
            )
            .into(),
        );
        Some(Msg::MapClicked {
            lat: payload.lat,
            lng: payload.lng,
        })
    }));

    Model::default()
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::MapClicked { lat, lng } => {
            let position = model.map.click(lat, lng);
            map::show_click_marker(position);

            let (ticket, payload) = model.controller.send_coordinates(lat, lng);
            orders.perform_cmd(api::send_prediction_request(ticket, payload));
        }
        Msg::ToggleMode => model.controller.toggle_mode(),
        Msg::TimeChanged(value) => model.controller.set_time(value),
        Msg::PredictionFetched { ticket, result } => {
            match model.controller.settle(ticket, result) {
                Settled::Replaced => {
                    let markers = model.controller.markers();
                    web_sys::console::debug_1(
                        &format!(
                            "[frontend] prediction #{} applied with {} points",
                            ticket.get(),
                            markers.len()
                        )
                        .into(),
                    );
                    map::show_prediction(markers, model.controller.polyline().is_some());
                }
                Settled::Stale { latest } => {
                    web_sys::console::debug_1(
                        &format!(
                            "[frontend] dropping prediction #{}, #{} already shown",
                            ticket.get(),
                            latest.get()
                        )
                        .into(),
                    );
                }
                Settled::Failed(err) => {
                    web_sys::console::error_1(
                        &format!("[frontend] prediction #{} failed: {err}", ticket.get()).into(),
                    );
                }
            }
        }
    }
}

pub fn view(model: &Model) -> Node<Msg> {
    let mode = model.controller.mode();

    div![
        C!["mode-panel"],
        button![
            C!["mode-toggle"],
            mode.label(),
            attrs! { At::Title => mode.as_str() },
            ev(Ev::Click, |_| Msg::ToggleMode),
        ],
        input![
            C!["time-input"],
            attrs! {
                At::Type => "datetime-local",
                At::Value => model.controller.time(),
            },
            input_ev(Ev::Input, Msg::TimeChanged),
        ],
    ]
}

#[wasm_bindgen(start)]
pub fn start() {
    map::init_map();
    App::start("app", init, update, view);
}
