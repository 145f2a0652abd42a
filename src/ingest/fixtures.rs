/// Test fixtures: representative payloads from the NDBC station table and
/// the Tides & Currents station API.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the parsers. They reflect the real formats returned
/// by:
///   https://www.ndbc.noaa.gov/data/stations/station_table.txt
///   https://api.tidesandcurrents.noaa.gov/mdapi/prod/webapi/stations.json?type=tidepredictions
///
/// NDBC table shape:
///   leading '#' comment block, then pipe-delimited rows:
///   STATION_ID | OWNER | TTYPE | HULL | NAME | PAYLOAD | LOCATION | TIMEZONE | FORECAST | NOTE
///   The LOCATION field is free text: decimal degrees + hemisphere letters,
///   followed by a degrees-minutes-seconds echo in parentheses.
///
/// Tides & Currents shape:
///   { "stations": [ { "id", "name", "lat", "lng", ...extra fields... } ] }
///   `lat`/`lng` are occasionally null or absent; extra fields (state,
///   timezone corrections, self links) are always present and must be
///   ignored by the decoder.

/// Excerpt of the real station table: two comment lines, three buoys
/// (Great Lakes discus buoys + one Pacific foam buoy), one C-MAN
/// station and one fixed platform that the buoy filter must drop.
#[cfg(test)]
pub(crate) fn fixture_station_table() -> &'static str {
    "\
# STATION_ID | OWNER | TTYPE | HULL | NAME | PAYLOAD | LOCATION | TIMEZONE | FORECAST | NOTE
#
45002 | NDBC | 3-meter discus buoy | 3D14 | NORTH MICHIGAN | AMPS | 45.344 N 86.411 W (45&#176;20'38\" N 86&#176;24'41\" W) | C |  |
45007 | NDBC | 3-meter discus buoy | 3D50 | SOUTHEAST LAKE MICHIGAN | AMPS | 42.674 N 87.026 W (42&#176;40'28\" N 87&#176;1'34\" W) | C |  |
SGNW3 | NDBC | C-MAN Station |  | Sheboygan, WI |  | 43.750 N 87.690 W (43&#176;45'1\" N 87&#176;41'24\" W) | C |  |
51101 | NDBC | 2.1-meter foam ionic buoy | IO201 | NORTHWEST HAWAII TWO | AMPS | 24.359 N 162.081 W (24&#176;21'31\" N 162&#176;4'52\" W) | H |  |
42040P | Shell | Fixed Oil Platform |  | Main Pass 140B |  | 29.212 N 88.207 W (29&#176;12'43\" N 88&#176;12'25\" W) | C |  |
"
}

/// Three tide-prediction stations, all with coordinates, carrying the
/// extra metadata fields the real API includes alongside id/name/lat/lng.
#[cfg(test)]
pub(crate) fn fixture_tide_stations_json() -> &'static str {
    r#"{
      "count": 3,
      "stations": [
        {
          "id": "9414290",
          "name": "San Francisco",
          "state": "CA",
          "lat": 37.8063,
          "lng": -122.4659,
          "affiliations": "Major",
          "tidal": true,
          "timezonecorr": -8,
          "self": "https://api.tidesandcurrents.noaa.gov/mdapi/prod/webapi/stations/9414290.json"
        },
        {
          "id": "8454000",
          "name": "Providence",
          "state": "RI",
          "lat": 41.8071,
          "lng": -71.4012,
          "affiliations": "",
          "tidal": true,
          "timezonecorr": -5,
          "self": "https://api.tidesandcurrents.noaa.gov/mdapi/prod/webapi/stations/8454000.json"
        },
        {
          "id": "1612340",
          "name": "Honolulu",
          "state": "HI",
          "lat": 21.3067,
          "lng": -157.867,
          "affiliations": "Major",
          "tidal": true,
          "timezonecorr": -10,
          "self": "https://api.tidesandcurrents.noaa.gov/mdapi/prod/webapi/stations/1612340.json"
        }
      ]
    }"#
}

/// Five stations where two are unplottable: "Nawiliwili Small Boat Harbor"
/// has `lat: null`, "Hilo Pier" omits `lng` entirely. Normalization must
/// keep the other three in order.
#[cfg(test)]
pub(crate) fn fixture_tide_stations_sparse_json() -> &'static str {
    r#"{
      "count": 5,
      "stations": [
        { "id": "1611400", "name": "Nawiliwili", "state": "HI", "lat": 21.9544, "lng": -159.3561, "tidal": true },
        { "id": "1611401", "name": "Nawiliwili Small Boat Harbor", "state": "HI", "lat": null, "lng": -159.3547, "tidal": true },
        { "id": "1617433", "name": "Kawaihae", "state": "HI", "lat": 20.0366, "lng": -155.8294, "tidal": true },
        { "id": "1617434", "name": "Hilo Pier", "state": "HI", "lat": 19.7303, "tidal": true },
        { "id": "1619910", "name": "Sand Island, Midway Islands", "state": "", "lat": 28.2117, "lng": -177.36, "tidal": true }
      ]
    }"#
}
