use shared::{Coordinate, Direction, PredictRequest, format_time};

/// Sequence number attached to an outbound prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// What happened to the UI state when a request settled.
#[derive(Debug, PartialEq)]
pub enum Settled<E> {
    /// The marker list was replaced with the response points.
    Replaced,
    /// A newer request already landed; the response was dropped.
    Stale { latest: Ticket },
    /// The request failed; nothing changed.
    Failed(E),
}

/// UI state behind the prediction overlay: mode, time and the last result.
#[derive(Debug, Default)]
pub struct Controller {
    mode: Direction,
    time: String,
    markers: Vec<Coordinate>,
    issued: u64,
    applied: u64,
}

impl Controller {
    pub fn mode(&self) -> Direction {
        self.mode
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn markers(&self) -> &[Coordinate] {
        &self.markers
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn set_time(&mut self, value: String) {
        self.time = value;
    }

    /// Builds the request body for a clicked point and reserves its ticket.
    pub fn send_coordinates(&mut self, lat: f64, lng: f64) -> (Ticket, PredictRequest) {
        self.issued += 1;
        let request = PredictRequest {
            latitude: lat,
            longitude: lng,
            direction: self.mode,
            time: format_time(&self.time),
        };
        (Ticket(self.issued), request)
    }

    pub fn settle<E>(&mut self, ticket: Ticket, result: Result<Vec<Coordinate>, E>) -> Settled<E> {
        match result {
            Err(err) => Settled::Failed(err),
            Ok(_) if ticket.0 <= self.applied => Settled::Stale {
                latest: Ticket(self.applied),
            },
            Ok(points) => {
                self.applied = ticket.0;
                self.markers = points;
                Settled::Replaced
            }
        }
    }

    /// Points to join with a line; a single marker gets none.
    pub fn polyline(&self) -> Option<&[Coordinate]> {
        (self.markers.len() > 1).then_some(self.markers.as_slice())
    }
}
