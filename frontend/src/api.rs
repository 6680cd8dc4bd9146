use seed::{prelude::*, *};
use shared::{Coordinate, PredictRequest, PredictResponse};

use crate::{Msg, config::api_root, controller::Ticket};

pub async fn send_prediction_request(ticket: Ticket, payload: PredictRequest) -> Msg {
    web_sys::console::debug_1(
        &format!(
            "[frontend] sending prediction #{} lat={:.5} lng={:.5} direction={} time={:?}",
            ticket.get(),
            payload.latitude,
            payload.longitude,
            payload.direction.as_str(),
            payload.time
        )
        .into(),
    );

    Msg::PredictionFetched {
        ticket,
        result: fetch_prediction(&payload).await,
    }
}

async fn fetch_prediction(payload: &PredictRequest) -> Result<Vec<Coordinate>, String> {
    let request = Request::new(api_root())
        .method(Method::Post)
        .json(payload)
        .map_err(|err| format!("{err:?}"))?;
    let raw = request.fetch().await.map_err(|err| format!("{err:?}"))?;
    let resp = raw.check_status().map_err(|err| format!("{err:?}"))?;
    let body = resp.text().await.map_err(|err| format!("{err:?}"))?;

    PredictResponse::from_json_str(&body)
        .map(|response| response.points)
        .map_err(|err| err.to_string())
}
