use chrono::{NaiveDateTime, Timelike};
use shared::{Coordinate, Direction, PredictRequest};

use crate::error::PredictError;

const EARTH_RADIUS_KM: f64 = 6_371.0;
const DEFAULT_HEADING_DEG: f64 = 45.0;
const MINUTES_PER_DAY: f64 = 1_440.0;

/// Wire format of the optional `time` field.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryConfig {
    points: usize,
    step_km: f64,
}

impl TrajectoryConfig {
    pub fn new(points: usize, step_km: f64) -> Result<Self, PredictError> {
        if points == 0 {
            return Err(PredictError::NoPoints);
        }
        if !(step_km.is_finite() && step_km > 0.0) {
            return Err(PredictError::InvalidStep(step_km));
        }
        Ok(Self { points, step_km })
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn step_km(&self) -> f64 {
        self.step_km
    }
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            points: 8,
            step_km: 0.5,
        }
    }
}

/// Synthetic trajectory through the clicked point.
///
/// The walk follows a great circle from the origin. The heading comes from
/// the request time (a full day maps onto a full turn) and is reversed for
/// [`Direction::Past`]. The origin itself is not part of the output.
pub fn predict_trajectory(
    req: &PredictRequest,
    config: &TrajectoryConfig,
) -> Result<Vec<Coordinate>, PredictError> {
    let heading = heading_deg(req.time.as_deref())?;
    let bearing = match req.direction {
        Direction::Future => heading,
        Direction::Past => (heading + 180.0) % 360.0,
    };
    let origin = req.origin();

    Ok((1..=config.points)
        .map(|step| destination(origin, bearing, config.step_km * step as f64))
        .collect())
}

pub fn heading_deg(time: Option<&str>) -> Result<f64, PredictError> {
    let Some(raw) = time else {
        return Ok(DEFAULT_HEADING_DEG);
    };
    let parsed = NaiveDateTime::parse_from_str(raw, TIME_FORMAT).map_err(|source| {
        PredictError::InvalidTime {
            value: raw.to_string(),
            source,
        }
    })?;
    let minutes = f64::from(parsed.hour() * 60 + parsed.minute());
    Ok(minutes / MINUTES_PER_DAY * 360.0)
}

/// Point reached after `distance_km` on the initial bearing `bearing_deg`.
pub fn destination(origin: Coordinate, bearing_deg: f64, distance_km: f64) -> Coordinate {
    let lat1 = origin.latitude.to_radians();
    let lon1 = origin.longitude.to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    Coordinate {
        latitude: lat2.to_degrees(),
        longitude: normalize_lon(lon2.to_degrees()),
    }
}

pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

fn normalize_lon(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEOUL: Coordinate = Coordinate {
        latitude: 37.5665,
        longitude: 126.9780,
    };

    fn request(direction: Direction, time: Option<&str>) -> PredictRequest {
        PredictRequest {
            latitude: SEOUL.latitude,
            longitude: SEOUL.longitude,
            direction,
            time: time.map(str::to_string),
        }
    }

    #[test]
    fn test_heading_defaults_without_time() {
        assert_eq!(heading_deg(None).unwrap(), DEFAULT_HEADING_DEG);
    }

    #[test]
    fn test_heading_follows_time_of_day() {
        assert_eq!(heading_deg(Some("2024-01-01T00:00:00")).unwrap(), 0.0);
        assert_eq!(heading_deg(Some("2024-01-01T06:00:00")).unwrap(), 90.0);
        assert_eq!(heading_deg(Some("2024-01-01T18:00:00")).unwrap(), 270.0);
    }

    #[test]
    fn test_heading_rejects_malformed_time() {
        let err = heading_deg(Some("2024-01-01T10:23")).unwrap_err();
        assert!(matches!(err, PredictError::InvalidTime { .. }));
    }

    #[test]
    fn test_north_heading_increases_latitude() {
        let req = request(Direction::Future, Some("2024-01-01T00:00:00"));
        let path = predict_trajectory(&req, &TrajectoryConfig::default()).unwrap();
        assert_eq!(path.len(), 8);
        assert!(path.windows(2).all(|w| w[1].latitude > w[0].latitude));
        assert!((path[0].longitude - SEOUL.longitude).abs() < 1e-9);
    }

    #[test]
    fn test_past_walks_the_other_way() {
        let config = TrajectoryConfig::default();
        let future = predict_trajectory(&request(Direction::Future, None), &config).unwrap();
        let past = predict_trajectory(&request(Direction::Past, None), &config).unwrap();

        assert!(future[0].latitude > SEOUL.latitude);
        assert!(past[0].latitude < SEOUL.latitude);
        let span = haversine_km(future[0], past[0]);
        assert!((span - 2.0 * config.step_km()).abs() < 1e-6);
    }

    #[test]
    fn test_config_validation() {
        assert!(matches!(
            TrajectoryConfig::new(0, 0.5),
            Err(PredictError::NoPoints)
        ));
        assert!(matches!(
            TrajectoryConfig::new(3, 0.0),
            Err(PredictError::InvalidStep(_))
        ));
        assert!(TrajectoryConfig::new(3, f64::NAN).is_err());
        assert_eq!(TrajectoryConfig::new(3, 1.0).unwrap().points(), 3);
    }

    #[test]
    fn test_longitude_wraps_at_antimeridian() {
        let origin = Coordinate::new(0.0, 179.999);
        let east = destination(origin, 90.0, 10.0);
        assert!(east.longitude < -179.0);
        assert!((haversine_km(origin, east) - 10.0).abs() < 1e-6);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn valid_request() -> impl Strategy<Value = PredictRequest> {
            (-80.0..=80.0, -180.0..=180.0, any::<bool>(), 0u32..24, 0u32..60).prop_map(
                |(latitude, longitude, past, hour, minute)| PredictRequest {
                    latitude,
                    longitude,
                    direction: if past {
                        Direction::Past
                    } else {
                        Direction::Future
                    },
                    time: Some(format!("2024-05-17T{hour:02}:{minute:02}:00")),
                },
            )
        }

        proptest! {
            #[test]
            fn prop_consecutive_points_are_one_step_apart(
                req in valid_request(),
                points in 1usize..20,
                step_km in 0.05f64..5.0
            ) {
                let config = TrajectoryConfig::new(points, step_km).unwrap();
                let path = predict_trajectory(&req, &config).unwrap();
                prop_assert_eq!(path.len(), points);
                prop_assert!((haversine_km(req.origin(), path[0]) - step_km).abs() < 1e-6);
                for pair in path.windows(2) {
                    prop_assert!((haversine_km(pair[0], pair[1]) - step_km).abs() < 1e-6);
                }
            }

            #[test]
            fn prop_directions_mirror_distance(req in valid_request()) {
                let config = TrajectoryConfig::default();
                let future = predict_trajectory(
                    &PredictRequest { direction: Direction::Future, ..req.clone() },
                    &config,
                ).unwrap();
                let past = predict_trajectory(
                    &PredictRequest { direction: Direction::Past, ..req.clone() },
                    &config,
                ).unwrap();
                for (f, p) in future.iter().zip(&past) {
                    let df = haversine_km(req.origin(), *f);
                    let dp = haversine_km(req.origin(), *p);
                    prop_assert!((df - dp).abs() < 1e-6);
                }
            }

            #[test]
            fn prop_longitude_stays_in_range(req in valid_request()) {
                let config = TrajectoryConfig::new(10, 50.0).unwrap();
                for point in predict_trajectory(&req, &config).unwrap() {
                    prop_assert!((-180.0..=180.0).contains(&point.longitude));
                }
            }
        }
    }
}
