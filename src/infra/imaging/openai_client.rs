use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::imaging::{GeneratedImage, ImageError, ImageProvider};

/// Client for OpenAI's `/v1/images/generations` endpoint.
pub struct OpenAiImageClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageGenerationRequest<'a> {
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

impl OpenAiImageClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ImageError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ImageError::Request(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
            model,
        })
    }
}

#[async_trait]
impl ImageProvider for OpenAiImageClient {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageError> {
        let url = format!("{}/v1/images/generations", self.base_url);
        let payload = ImageGenerationRequest {
            prompt,
            model: self.model.as_deref(),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| ImageError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ImageError::Request(format!(
                "OpenAI API error: {} - {}",
                status, text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ImageError::Request(e.to_string()))?;
        let parsed: ImageGenerationResponse =
            serde_json::from_str(&body).map_err(|e| ImageError::Malformed(e.to_string()))?;

        let url = parsed
            .data
            .into_iter()
            .next()
            .and_then(|image| image.url)
            .ok_or_else(|| ImageError::Malformed("no image url in response".to_string()))?;

        Ok(GeneratedImage { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::imaging::image_service::IMAGE_FAILURE;
    use crate::core::imaging::ImageService;
    use crate::core::replies::Reply;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server_uri: &str, model: Option<&str>) -> OpenAiImageClient {
        OpenAiImageClient::new(
            "test-key",
            server_uri,
            model.map(str::to_string),
            Duration::from_secs(2),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_json(serde_json::json!({ "prompt": "cat" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "created": 1700000000,
                "data": [
                    { "url": "https://images.example/first.png" },
                    { "url": "https://images.example/second.png" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let image = client_for(&server.uri(), None).generate("cat").await.unwrap();
        assert_eq!(image.url, "https://images.example/first.png");
    }

    #[tokio::test]
    async fn test_model_is_sent_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(
                serde_json::json!({ "prompt": "cat", "model": "dall-e-3" }),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "url": "https://images.example/cat.png" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let image = client_for(&server.uri(), Some("dall-e-3"))
            .generate("cat")
            .await
            .unwrap();
        assert_eq!(image.url, "https://images.example/cat.png");
    }

    #[tokio::test]
    async fn test_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = client_for(&server.uri(), None).generate("cat").await.unwrap_err();
        assert!(matches!(err, ImageError::Request(_)));
    }

    #[tokio::test]
    async fn test_empty_data_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server.uri(), None).generate("cat").await.unwrap_err();
        assert!(matches!(err, ImageError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_yields_one_generic_reply() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let service = ImageService::new(client_for(&uri, None));
        assert_eq!(service.image_reply("cat").await, Reply::text(IMAGE_FAILURE));
    }

    #[tokio::test]
    async fn test_timeout_yields_one_generic_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({
                        "data": [{ "url": "https://images.example/cat.png" }]
                    }))
                    .set_delay(Duration::from_secs(5)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client =
            OpenAiImageClient::new("test-key", server.uri(), None, Duration::from_millis(200))
                .unwrap();
        let service = ImageService::new(client);
        assert_eq!(service.image_reply("cat").await, Reply::text(IMAGE_FAILURE));
    }
}
