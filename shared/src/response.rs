use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::Error as _,
    ser::SerializeMap,
};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::Coordinate;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response body is neither an object nor an array")]
    NotAnObject,
    #[error("entry {key:?} is not a {{latitude, longitude}} object")]
    MalformedPoint { key: String },
}

/// Points returned by the prediction service.
///
/// On the wire this is an object whose values are the points. Values are read
/// in the order a browser enumerates the keys: array-index keys ascending,
/// then the remaining keys as they appear in the body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictResponse {
    pub points: Vec<Coordinate>,
}

impl PredictResponse {
    pub fn from_json_str(body: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let entries: Vec<(String, &Value)> = match value {
            Value::Object(map) => enumeration_order(map),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| (idx.to_string(), item))
                .collect(),
            _ => return Err(DecodeError::NotAnObject),
        };

        let points = entries
            .into_iter()
            .map(|(key, item)| decode_point(key, item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { points })
    }
}

impl From<Vec<Coordinate>> for PredictResponse {
    fn from(points: Vec<Coordinate>) -> Self {
        Self { points }
    }
}

impl Serialize for PredictResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.points.len()))?;
        for (idx, point) in self.points.iter().enumerate() {
            map.serialize_entry(&idx.to_string(), point)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PredictResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(D::Error::custom)
    }
}

fn enumeration_order(map: &Map<String, Value>) -> Vec<(String, &Value)> {
    let mut indexed = Vec::new();
    let mut named = Vec::new();
    for (key, value) in map {
        match array_index(key) {
            Some(idx) => indexed.push((idx, key.clone(), value)),
            None => named.push((key.clone(), value)),
        }
    }
    indexed.sort_by_key(|(idx, _, _)| *idx);

    indexed
        .into_iter()
        .map(|(_, key, value)| (key, value))
        .chain(named)
        .collect()
}

/// Canonical array index: decimal without leading zeros, below 2^32 - 1.
fn array_index(key: &str) -> Option<u32> {
    let canonical = key == "0"
        || (key.starts_with(|c: char| matches!(c, '1'..='9'))
            && key.bytes().all(|b| b.is_ascii_digit()));
    if !canonical {
        return None;
    }
    key.parse::<u32>().ok().filter(|idx| *idx != u32::MAX)
}

fn decode_point(key: String, item: &Value) -> Result<Coordinate, DecodeError> {
    let field = |name: &str| item.get(name).and_then(Value::as_f64);
    match (field("latitude"), field("longitude")) {
        (Some(latitude), Some(longitude)) => Ok(Coordinate {
            latitude,
            longitude,
        }),
        _ => Err(DecodeError::MalformedPoint { key }),
    }
}
