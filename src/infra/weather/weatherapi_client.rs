use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Number;
use std::time::Duration;

use crate::core::weather::{WeatherError, WeatherProvider, WeatherReport};

/// weatherapi.com "current conditions" client.
pub struct WeatherApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherApiClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WeatherError::Request(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }
}

// Numbers are kept as `serde_json::Number` so they print the way the API sent them.
#[derive(Debug, Deserialize)]
struct ApiCurrentResponse {
    location: ApiLocation,
    current: ApiCurrent,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: Number,
    condition: ApiCondition,
    humidity: Number,
    wind_kph: Number,
    wind_dir: String,
    precip_mm: Number,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
    icon: String,
}

impl From<ApiCurrentResponse> for WeatherReport {
    fn from(api: ApiCurrentResponse) -> Self {
        WeatherReport {
            condition: api.current.condition.text,
            temperature_c: api.current.temp_c.to_string(),
            icon_url: api.current.condition.icon,
            humidity: api.current.humidity.to_string(),
            wind_kph: api.current.wind_kph.to_string(),
            wind_dir: api.current.wind_dir,
            precip_mm: api.current.precip_mm.to_string(),
            local_time: api.location.localtime,
        }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let url = format!("{}/v1/current.json", self.base_url);
        tracing::debug!(city, "Requesting current weather");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await
            .map_err(|e| WeatherError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| WeatherError::Request(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Request(e.to_string()))?;
        let parsed: ApiCurrentResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Malformed(e.to_string()))?;

        Ok(parsed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::replies::Reply;
    use crate::core::weather::weather_service::WEATHER_FAILURE;
    use crate::core::weather::WeatherService;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server_uri: &str) -> WeatherApiClient {
        WeatherApiClient::new("test-key", server_uri, Duration::from_secs(2)).unwrap()
    }

    fn london_body() -> serde_json::Value {
        serde_json::json!({
            "location": { "name": "London", "localtime": "2024-03-01 14:05" },
            "current": {
                "temp_c": 11.0,
                "condition": {
                    "text": "Partly cloudy",
                    "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png",
                    "code": 1003
                },
                "humidity": 82,
                "wind_kph": 13.7,
                "wind_dir": "WSW",
                "precip_mm": 0.0
            }
        })
    }

    #[tokio::test]
    async fn test_current_weather() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/current.json"))
            .and(query_param("key", "test-key"))
            .and(query_param("q", "London"))
            .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
            .expect(1)
            .mount(&server)
            .await;

        let report = client_for(&server.uri()).current("London").await.unwrap();

        assert_eq!(report.condition, "Partly cloudy");
        assert_eq!(report.temperature_c, "11.0");
        assert_eq!(report.humidity, "82");
        assert_eq!(report.wind_kph, "13.7");
        assert_eq!(report.wind_dir, "WSW");
        assert_eq!(report.precip_mm, "0.0");
        assert_eq!(report.local_time, "2024-03-01 14:05");
    }

    #[tokio::test]
    async fn test_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": { "code": 1006, "message": "No matching location found." }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server.uri()).current("Atlantis").await.unwrap_err();
        assert!(matches!(err, WeatherError::Request(_)));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"current\": {}}"))
            .mount(&server)
            .await;

        let err = client_for(&server.uri()).current("London").await.unwrap_err();
        assert!(matches!(err, WeatherError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_yields_one_generic_reply() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let service = WeatherService::new(client_for(&uri));
        assert_eq!(
            service.weather_reply("London").await,
            Reply::text(WEATHER_FAILURE)
        );
    }

    #[tokio::test]
    async fn test_timeout_yields_generic_reply() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(london_body())
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client =
            WeatherApiClient::new("test-key", server.uri(), Duration::from_millis(200)).unwrap();
        let service = WeatherService::new(client);
        assert_eq!(
            service.weather_reply("London").await,
            Reply::text(WEATHER_FAILURE)
        );
    }
}
