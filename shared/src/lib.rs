use serde::{Deserialize, Serialize};

mod response;
mod time;

pub use response::{DecodeError, PredictResponse};
pub use time::format_time;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn as_pair(self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Which way along the trajectory the prediction service should look.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Future,
    Past,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::Future => Direction::Past,
            Direction::Past => Direction::Future,
        }
    }

    /// Text shown on the mode button.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Future => "미래",
            Direction::Past => "과거",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Future => "future",
            Direction::Past => "past",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl PredictRequest {
    pub fn origin(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}
