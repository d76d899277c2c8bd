use super::image_models::{GeneratedImage, ImageError};
use crate::core::replies::{EmbedReply, Reply};
use async_trait::async_trait;

pub const IMAGE_COLOR: u32 = 0xA6569B;
pub const IMAGE_FAILURE: &str = "Could not retrieve openai information. Please try again later.";

#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generates an image for `prompt`. One attempt, no retries.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageError>;
}

pub struct ImageService<P: ImageProvider> {
    provider: P,
}

impl<P: ImageProvider> ImageService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn image_reply(&self, prompt: &str) -> Reply {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Reply::text(ImageError::EmptyPrompt.to_string());
        }

        match self.provider.generate(prompt).await {
            Ok(image) => EmbedReply::new("AI generated image", prompt, IMAGE_COLOR)
                .image(image.url)
                .into(),
            Err(e) => {
                tracing::warn!(prompt, error = %e, "Image generation failed");
                Reply::text(IMAGE_FAILURE)
            }
        }
    }
}
