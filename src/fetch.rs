/// Blocking HTTP retrieval shared by both generation flows.
///
/// NOAA asks automated clients to identify themselves, so every request
/// carries a fixed descriptive User-Agent. The fetcher returns raw body
/// bytes; callers own further decoding (UTF-8 text or JSON).

use crate::model::{DataSource, ErrorKind, RefreshError};
use reqwest::blocking::Client;
use reqwest::Url;

/// Identifying header value sent with every request.
pub const USER_AGENT: &str = "stationgen/0.1 (NOAA station list refresh; github.com/stationgen)";

/// Performs a blocking GET against `url` and returns the response body.
///
/// # Errors
/// - `BadUrl` — `url` does not parse; checked before any network I/O.
/// - `Network` — the request could not be completed at the transport level.
/// - `BadResponse` — the server answered with a status other than 200;
///   the observed status is carried in the error.
pub fn fetch_bytes(
    client: &Client,
    url: &str,
    source: DataSource,
) -> Result<Vec<u8>, RefreshError> {
    // Validate the URL up front so a bad constant never reaches the network.
    let parsed = Url::parse(url)
        .map_err(|_| RefreshError::new(source, ErrorKind::BadUrl(url.to_string())))?;

    let response = client
        .get(parsed)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(|e| RefreshError::new(source, ErrorKind::Network(e)))?;

    let status = response.status();
    if status.as_u16() != 200 {
        return Err(RefreshError::new(source, ErrorKind::BadResponse(status.as_u16())));
    }

    let body = response
        .bytes()
        .map_err(|e| RefreshError::new(source, ErrorKind::Network(e)))?;

    Ok(body.to_vec())
}
