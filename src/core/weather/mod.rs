pub mod weather_models;
pub mod weather_service;

pub use weather_models::{WeatherError, WeatherReport};
pub use weather_service::{WeatherProvider, WeatherService};
