use thiserror::Error;

/// Current conditions for a city, already formatted the way the provider
/// reported the numbers (so `11.0` stays `11.0`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub condition: String,
    pub temperature_c: String,
    pub icon_url: String,
    pub humidity: String,
    pub wind_kph: String,
    pub wind_dir: String,
    pub precip_mm: String,
    pub local_time: String,
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Please provide a city!")]
    EmptyCity,
    /// Transport failure, timeout or a non-success status.
    #[error("weather request failed: {0}")]
    Request(String),
    /// The provider answered but the body was not what we expected.
    #[error("malformed weather response: {0}")]
    Malformed(String),
}
