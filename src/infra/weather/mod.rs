pub mod weatherapi_client;

pub use weatherapi_client::WeatherApiClient;
