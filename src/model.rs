/// Shared data types for the station refresh pipeline.
///
/// Both output files carry the same record shape, so a single
/// `StationRecord` serves the buoy table and the tide-station API.
/// Errors from either flow share one taxonomy, tagged with the
/// `DataSource` that raised them so diagnostics stay distinct.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A normalized observation station, ready for serialization.
///
/// Serializes with the exact field names and order the client application
/// expects: `stationId`, `name`, `latitude`, `longitude`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub station_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Which generation flow an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    NdbcBuoys,
    TidePredictionStations,
}

impl DataSource {
    pub fn label(&self) -> &'static str {
        match self {
            DataSource::NdbcBuoys => "NDBC buoys",
            DataSource::TidePredictionStations => "tide prediction stations",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What went wrong, independent of which flow it happened in.
#[derive(Debug)]
pub enum ErrorKind {
    /// The request URL failed to parse. Only reachable if a URL constant
    /// is edited into something malformed.
    BadUrl(String),
    /// Transport-level failure: DNS, connection, TLS, timeout.
    Network(reqwest::Error),
    /// The server answered with a status other than 200.
    BadResponse(u16),
    /// The response body could not be decoded as the expected text/JSON.
    DataCorrupted(String),
    /// The station table parser produced zero records.
    ParsingFailed,
    /// Persisting the output file failed.
    FileWrite(std::io::Error),
}

/// An error raised by one of the two generation flows.
///
/// `source` identifies the flow; `kind` carries the failure itself.
#[derive(Debug)]
pub struct RefreshError {
    pub source: DataSource,
    pub kind: ErrorKind,
}

impl RefreshError {
    pub fn new(source: DataSource, kind: ErrorKind) -> Self {
        Self { source, kind }
    }
}

impl fmt::Display for RefreshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::BadUrl(url) => {
                write!(f, "[{}] malformed request URL: {}", self.source, url)
            }
            ErrorKind::Network(e) => {
                write!(f, "[{}] network request failed: {}", self.source, e)
            }
            ErrorKind::BadResponse(status) => {
                write!(f, "[{}] unexpected HTTP status {} (wanted 200)", self.source, status)
            }
            ErrorKind::DataCorrupted(msg) => {
                write!(f, "[{}] response body could not be decoded: {}", self.source, msg)
            }
            ErrorKind::ParsingFailed => {
                write!(f, "[{}] station table parsed to zero records", self.source)
            }
            ErrorKind::FileWrite(e) => {
                write!(f, "[{}] failed to write output file: {}", self.source, e)
            }
        }
    }
}

impl std::error::Error for RefreshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Network(e) => Some(e),
            ErrorKind::FileWrite(e) => Some(e),
            _ => None,
        }
    }
}
