use super::weather_models::{WeatherError, WeatherReport};
use crate::core::replies::{EmbedReply, Reply};
use async_trait::async_trait;

pub const WEATHER_COLOR: u32 = 0x00FF00;
pub const WEATHER_FAILURE: &str = "Could not retrieve weather information. Please try again later.";

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches the current conditions for `city`. One attempt, no retries.
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}

pub struct WeatherService<P: WeatherProvider> {
    provider: P,
}

impl<P: WeatherProvider> WeatherService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Looks up `city` and always produces exactly one reply.
    ///
    /// Provider failures of any kind collapse into the same generic message;
    /// the details only go to the log.
    pub async fn weather_reply(&self, city: &str) -> Reply {
        let city = city.trim();
        if city.is_empty() {
            return Reply::text(WeatherError::EmptyCity.to_string());
        }

        match self.provider.current(city).await {
            Ok(report) => build_weather_embed(city, &report).into(),
            Err(e) => {
                tracing::warn!(city, error = %e, "Weather lookup failed");
                Reply::text(WEATHER_FAILURE)
            }
        }
    }
}

pub fn build_weather_embed(city: &str, report: &WeatherReport) -> EmbedReply {
    EmbedReply::new(
        format!("Weather in {}", city),
        format!("Current condition: {}", report.condition),
        WEATHER_COLOR,
    )
    .thumbnail(absolute_icon_url(&report.icon_url))
    .field("Temperature", format!("{}°C", report.temperature_c))
    .field("Humidity", format!("{}%", report.humidity))
    .field(
        "Wind Speed",
        format!("{} kph, direction: {}", report.wind_kph, report.wind_dir),
    )
    .field("Precipitation", format!("{} mm", report.precip_mm))
    .field("Local Time", report.local_time.clone())
}

// weatherapi.com hands out protocol-relative icon URLs ("//cdn.weatherapi.com/...").
fn absolute_icon_url(icon: &str) -> String {
    if icon.starts_with("http://") || icon.starts_with("https://") {
        icon.to_string()
    } else {
        format!("https:{}", icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockWeather {
        result: fn() -> Result<WeatherReport, WeatherError>,
        calls: AtomicUsize,
    }

    impl MockWeather {
        fn new(result: fn() -> Result<WeatherReport, WeatherError>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl WeatherProvider for MockWeather {
        async fn current(&self, _city: &str) -> Result<WeatherReport, WeatherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }
    }

    fn london() -> Result<WeatherReport, WeatherError> {
        Ok(WeatherReport {
            condition: "Partly cloudy".to_string(),
            temperature_c: "11.0".to_string(),
            icon_url: "//cdn.weatherapi.com/weather/64x64/day/116.png".to_string(),
            humidity: "82".to_string(),
            wind_kph: "13.0".to_string(),
            wind_dir: "WSW".to_string(),
            precip_mm: "0.1".to_string(),
            local_time: "2024-03-01 14:05".to_string(),
        })
    }

    #[tokio::test]
    async fn test_weather_embed() {
        let service = WeatherService::new(MockWeather::new(london));
        let reply = service.weather_reply("London").await;

        let Reply::Embed(embed) = reply else {
            panic!("expected an embed, got {:?}", reply);
        };
        assert_eq!(embed.title, "Weather in London");
        assert_eq!(embed.description, "Current condition: Partly cloudy");
        assert_eq!(embed.color, 0x00FF00);
        assert_eq!(
            embed.thumbnail.as_deref(),
            Some("https://cdn.weatherapi.com/weather/64x64/day/116.png")
        );
        let names: Vec<&str> = embed.fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Temperature",
                "Humidity",
                "Wind Speed",
                "Precipitation",
                "Local Time"
            ]
        );
        assert_eq!(embed.fields[0].1, "11.0°C");
        assert_eq!(embed.fields[1].1, "82%");
        assert_eq!(embed.fields[2].1, "13.0 kph, direction: WSW");
        assert_eq!(embed.fields[3].1, "0.1 mm");
        assert_eq!(embed.fields[4].1, "2024-03-01 14:05");
    }

    #[tokio::test]
    async fn test_failures_collapse_to_generic_message() {
        let failures: [fn() -> Result<WeatherReport, WeatherError>; 2] = [
            || Err(WeatherError::Request("connection refused".to_string())),
            || Err(WeatherError::Malformed("missing field `current`".to_string())),
        ];

        for failure in failures {
            let service = WeatherService::new(MockWeather::new(failure));
            assert_eq!(
                service.weather_reply("London").await,
                Reply::text(WEATHER_FAILURE)
            );
        }
    }

    #[tokio::test]
    async fn test_empty_city_skips_provider() {
        let service = WeatherService::new(MockWeather::new(london));
        let reply = service.weather_reply("   ").await;

        assert_eq!(reply, Reply::text("Please provide a city!"));
        assert_eq!(service.provider.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_absolute_icon_url() {
        assert_eq!(absolute_icon_url("//cdn/x.png"), "https://cdn/x.png");
        assert_eq!(absolute_icon_url("https://cdn/x.png"), "https://cdn/x.png");
    }
}
