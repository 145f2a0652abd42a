/// NOAA Tides & Currents Station API Client
///
/// Decodes the CO-OPS metadata API station listing, restricted at the URL
/// level to stations capable of harmonic tide predictions.
///
/// API Documentation: https://api.tidesandcurrents.noaa.gov/mdapi/prod/
/// Response shape:
///   { "stations": [ { "id": "...", "name": "...", "lat": 21.9, "lng": -159.3, ... } ] }
///
/// `lat`/`lng` may be null or absent entirely for a handful of stations;
/// those entries are dropped during normalization since the client cannot
/// plot a station without coordinates.

use crate::model::{ErrorKind, StationRecord};
use serde::Deserialize;

pub const STATIONS_API_URL: &str =
    "https://api.tidesandcurrents.noaa.gov/mdapi/prod/webapi/stations.json?type=tidepredictions";

// ---------------------------------------------------------------------------
// Serde structures for the stations.json response
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct StationsResponse {
    stations: Vec<RawTideStation>,
}

/// Upstream station entry as decoded, before coordinate filtering.
#[derive(Debug, Deserialize)]
pub struct RawTideStation {
    pub id: String,
    pub name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

// ---------------------------------------------------------------------------
// Decoding and normalization
// ---------------------------------------------------------------------------

/// Decodes the raw API response body into station entries.
///
/// # Errors
/// `ErrorKind::DataCorrupted` — the body is not valid JSON or does not
/// match the expected envelope (missing `stations`, missing `id`/`name`,
/// wrong types).
pub fn decode_stations(body: &[u8]) -> Result<Vec<RawTideStation>, ErrorKind> {
    let response: StationsResponse = serde_json::from_slice(body)
        .map_err(|e| ErrorKind::DataCorrupted(format!("JSON deserialization failed: {}", e)))?;
    Ok(response.stations)
}

/// Filters raw entries down to plottable records, preserving input order.
///
/// Entries missing either coordinate are dropped silently; partial results
/// are expected and normal, never an error.
pub fn normalize(raw: Vec<RawTideStation>) -> Vec<StationRecord> {
    raw.into_iter()
        .filter_map(|station| {
            let (Some(latitude), Some(longitude)) = (station.lat, station.lng) else {
                return None;
            };
            Some(StationRecord {
                station_id: station.id,
                name: station.name,
                latitude,
                longitude,
            })
        })
        .collect()
}
