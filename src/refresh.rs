/// The two generation flows: NDBC buoys and tide-prediction stations.
///
/// Each flow is a straight fetch → decode → normalize → write pipeline
/// that stops at the first failed step. Failures are returned to the
/// runner, which logs them; one flow never aborts the other.
///
/// The network step is split from the body-processing step so the
/// pipeline below the fetch can be exercised offline in tests.

use crate::fetch;
use crate::ingest::{ndbc, tides};
use crate::model::{DataSource, ErrorKind, RefreshError};
use crate::output;
use reqwest::blocking::Client;
use std::fmt;
use std::path::{Path, PathBuf};

pub const BUOY_OUTPUT_FILE: &str = "all_noaa_buoys.json";
pub const TIDE_OUTPUT_FILE: &str = "all_noaa_tide_stations.json";

/// What a completed flow reports back to the runner.
pub struct RefreshSummary {
    pub source: DataSource,
    /// Entries received from upstream (buoy table rows are not counted
    /// individually, so for buoys this equals `written`).
    pub received: usize,
    /// Records persisted to the output file.
    pub written: usize,
    pub path: PathBuf,
}

impl fmt::Display for RefreshSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.received == self.written {
            write!(
                f,
                "{}: wrote {} records to {}",
                self.source,
                self.written,
                self.path.display()
            )
        } else {
            write!(
                f,
                "{}: received {} stations, wrote {} plottable records to {}",
                self.source,
                self.received,
                self.written,
                self.path.display()
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Buoy generation flow
// ---------------------------------------------------------------------------

/// Fetches the NDBC station table and writes `all_noaa_buoys.json` into
/// `out_dir`.
pub fn generate_buoys(client: &Client, out_dir: &Path) -> Result<RefreshSummary, RefreshError> {
    let body = fetch::fetch_bytes(client, ndbc::STATION_TABLE_URL, DataSource::NdbcBuoys)?;
    buoys_from_body(&body, out_dir)
}

/// Body-processing half of the buoy flow: UTF-8 decode → parse → write.
pub fn buoys_from_body(body: &[u8], out_dir: &Path) -> Result<RefreshSummary, RefreshError> {
    const SOURCE: DataSource = DataSource::NdbcBuoys;

    let text = std::str::from_utf8(body).map_err(|e| {
        RefreshError::new(SOURCE, ErrorKind::DataCorrupted(format!("body is not UTF-8: {}", e)))
    })?;

    let records =
        ndbc::parse_station_table(text).map_err(|kind| RefreshError::new(SOURCE, kind))?;

    let path = out_dir.join(BUOY_OUTPUT_FILE);
    output::write_records(&records, &path).map_err(|kind| RefreshError::new(SOURCE, kind))?;

    Ok(RefreshSummary {
        source: SOURCE,
        received: records.len(),
        written: records.len(),
        path,
    })
}

// ---------------------------------------------------------------------------
// Tide station generation flow
// ---------------------------------------------------------------------------

/// Fetches the tide-prediction station listing and writes
/// `all_noaa_tide_stations.json` into `out_dir`.
pub fn generate_tide_stations(
    client: &Client,
    out_dir: &Path,
) -> Result<RefreshSummary, RefreshError> {
    let body = fetch::fetch_bytes(
        client,
        tides::STATIONS_API_URL,
        DataSource::TidePredictionStations,
    )?;
    tide_stations_from_body(&body, out_dir)
}

/// Body-processing half of the tide flow: JSON decode → filter → write.
pub fn tide_stations_from_body(
    body: &[u8],
    out_dir: &Path,
) -> Result<RefreshSummary, RefreshError> {
    const SOURCE: DataSource = DataSource::TidePredictionStations;

    let raw = tides::decode_stations(body).map_err(|kind| RefreshError::new(SOURCE, kind))?;
    let received = raw.len();

    let records = tides::normalize(raw);

    let path = out_dir.join(TIDE_OUTPUT_FILE);
    output::write_records(&records, &path).map_err(|kind| RefreshError::new(SOURCE, kind))?;

    Ok(RefreshSummary {
        source: SOURCE,
        received,
        written: records.len(),
        path,
    })
}
