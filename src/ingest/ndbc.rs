/// NDBC Station Table Parser
///
/// Parses the National Data Buoy Center station listing.
/// Format: pipe-delimited text with a leading block of `#` comment lines.
/// Source: https://www.ndbc.noaa.gov/data/stations/station_table.txt
///
/// Each data row describes one observation platform:
///   STATION_ID | OWNER | TTYPE | HULL | NAME | PAYLOAD | LOCATION | TIMEZONE | FORECAST | NOTE
///
/// Key fields (0-based):
/// - 0: station id
/// - 2: station type (e.g. "3-meter discus buoy", "Fixed C-MAN Station")
/// - 4: station name
/// - 6: location as free text, e.g. "44.794 N 87.313 W (44&#176;47'37\" N ...)"
///
/// Only rows whose type mentions "buoy" are kept; fixed platforms, C-MAN
/// stations and the like are for a different client feature and are dropped
/// here. Malformed rows are skipped, never fatal — the table routinely
/// carries stations with blank or partial location fields.

use crate::model::{ErrorKind, StationRecord};

pub const STATION_TABLE_URL: &str = "https://www.ndbc.noaa.gov/data/stations/station_table.txt";

/// Parses the full station table text into buoy records, in row order.
///
/// Skips the leading contiguous run of `#` comment lines (the header
/// block); any later line starting with `#` is treated as data. Rows with
/// fewer than 8 pipe-delimited fields, a non-buoy type, or a location
/// field that does not parse are silently skipped.
///
/// # Errors
/// `ErrorKind::ParsingFailed` — the table yielded zero buoy records. An
/// empty result always reports as an error, never as an empty list.
pub fn parse_station_table(text: &str) -> Result<Vec<StationRecord>, ErrorKind> {
    let mut records = Vec::new();
    let mut in_header = true;

    for line in text.lines() {
        if in_header {
            if line.starts_with('#') {
                continue;
            }
            in_header = false;
        }

        if line.trim().is_empty() {
            continue;
        }

        // Split on '|' preserving empty fields; the table uses empty
        // columns for stations with no payload or note.
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() < 8 {
            continue;
        }

        if !fields[2].to_lowercase().contains("buoy") {
            continue;
        }

        let Some((latitude, longitude)) = parse_location(fields[6]) else {
            continue;
        };

        records.push(StationRecord {
            station_id: fields[0].to_string(),
            name: fields[4].to_string(),
            latitude,
            longitude,
        });
    }

    if records.is_empty() {
        return Err(ErrorKind::ParsingFailed);
    }

    Ok(records)
}

/// Parses an NDBC location field into signed (latitude, longitude).
///
/// Expected shape: `<lat> <N|S> <lon> <E|W> [degrees-minutes-seconds echo]`.
/// "S" negates the latitude magnitude, "W" negates the longitude magnitude;
/// any other hemisphere letter leaves the value positive. Returns `None`
/// when the field has fewer than 4 tokens or a magnitude is not numeric.
fn parse_location(location: &str) -> Option<(f64, f64)> {
    let tokens: Vec<&str> = location.split_whitespace().collect();
    if tokens.len() < 4 {
        return None;
    }

    let lat_magnitude: f64 = tokens[0].parse().ok()?;
    let lon_magnitude: f64 = tokens[2].parse().ok()?;

    let latitude = if tokens[1] == "S" { -lat_magnitude } else { lat_magnitude };
    let longitude = if tokens[3] == "W" { -lon_magnitude } else { lon_magnitude };

    Some((latitude, longitude))
}
