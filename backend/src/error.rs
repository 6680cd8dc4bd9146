use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("invalid time {value:?}, expected YYYY-MM-DDTHH:MM:SS: {source}")]
    InvalidTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("trajectory needs at least one point")]
    NoPoints,
    #[error("step length must be a positive number of km, got {0}")]
    InvalidStep(f64),
}
