pub mod image_client;

use crate::config::GeminiConfig;
use crate::error::{MoodGenError, Result};
use crate::models::{GeneratedImage, GenerationRequest};
use async_trait::async_trait;
use futures::future::join_all;
use std::time::Duration;

pub use image_client::ImageClient;

pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Seam between the studio and the image provider.
///
/// `generate_slot` must never fail: every outcome, including transport
/// errors, is folded into the returned record. The provided `generate_batch`
/// fans the slots out concurrently and resolves only once all of them have
/// settled, index-aligned with the placeholders; it is fallible in the
/// signature so callers guard the aggregate path even though this
/// implementation cannot error.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_slot(&self, request: &GenerationRequest, slot: usize) -> GeneratedImage;

    async fn generate_batch(&self, request: &GenerationRequest) -> Result<Vec<GeneratedImage>> {
        let slots = (0..request.count).map(|slot| self.generate_slot(request, slot));
        Ok(join_all(slots).await)
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    image_client: ImageClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                MoodGenError::ConfigError(
                    "Gemini API key is required (set GEMINI_API_KEY or API_KEY)".into(),
                )
            })?;

        // No request timeout unless configured: a hung call holds its slot.
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| MoodGenError::ClientError(e.to_string()))?;

        let model = config
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string());

        Ok(Self {
            image_client: ImageClient::new(http, api_key, model),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate_slot(&self, request: &GenerationRequest, slot: usize) -> GeneratedImage {
        self.image_client.generate(request, slot).await
    }
}
