/// Upstream data source clients, one module per NOAA endpoint.

pub mod ndbc;
pub mod tides;

#[cfg(test)]
pub(crate) mod fixtures;
