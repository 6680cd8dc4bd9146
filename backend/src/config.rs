use std::net::SocketAddr;

use clap::Parser;

use crate::{error::PredictError, predict::TrajectoryConfig};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Local stand-in for the trajectory prediction service"
)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "PREDICT_LISTEN", default_value = "0.0.0.0:8000")]
    pub listen: SocketAddr,

    /// Number of points returned for each click
    #[arg(long, env = "PREDICT_POINTS", default_value_t = 8)]
    pub points: usize,

    /// Great-circle distance between consecutive points
    #[arg(long, env = "PREDICT_STEP_KM", default_value_t = 0.5)]
    pub step_km: f64,
}

impl Args {
    pub fn trajectory(&self) -> Result<TrajectoryConfig, PredictError> {
        TrajectoryConfig::new(self.points, self.step_km)
    }
}
