/// stationgen: one-shot refresh of NOAA station reference data.
///
/// Downloads the NDBC buoy station table and the Tides & Currents
/// tide-prediction station listing, normalizes both into one clean record
/// shape, and writes two pretty-printed JSON files for the client app.
///
/// # Module structure
///
/// ```text
/// stationgen
/// ├── model    — StationRecord + the shared flow-tagged error taxonomy
/// ├── fetch    — blocking HTTP GET with identifying User-Agent
/// ├── output   — output directory resolution + pretty-JSON file writer
/// ├── refresh  — the buoy and tide generation flows and their summaries
/// └── ingest
///     ├── ndbc     — NDBC station table URL + pipe-delimited parser
///     ├── tides    — Tides & Currents API URL, decode structs, normalizer
///     └── fixtures (test only) — representative upstream payloads
/// ```

/// Public modules
pub mod fetch;
pub mod ingest;
pub mod model;
pub mod output;
pub mod refresh;
