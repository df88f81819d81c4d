use crate::catalog;
use crate::error::{MoodGenError, Result};
use crate::models::{GeneratedImage, GenerationRequest};
use serde::Deserialize;
use serde_json::json;

use super::GEMINI_ENDPOINT;

/// Thin wrapper around the Gemini `generateContent` endpoint, one call per
/// image slot.
#[derive(Clone)]
pub struct ImageClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

// -- Wire types --

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentPart {
    inline_data: Option<InlineData>,
    #[allow(dead_code)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: Option<String>,
    data: String,
}

impl ImageClient {
    pub fn new(http: reqwest::Client, api_key: String, model: String) -> Self {
        Self {
            http,
            api_key,
            model,
        }
    }

    /// Generates the image for one slot of a round. Never fails: transport,
    /// API and parse errors all collapse into a failed record so the rest of
    /// the batch is unaffected.
    pub async fn generate(&self, request: &GenerationRequest, slot: usize) -> GeneratedImage {
        match self.try_generate(request).await {
            Ok(url) => GeneratedImage::completed(slot, url, &request.prompt, &request.ratio_id),
            Err(e) => {
                log::error!("Image slot {} failed: {}", slot, e);
                GeneratedImage::failed(slot, &request.prompt, &request.ratio_id)
            }
        }
    }

    async fn try_generate(&self, request: &GenerationRequest) -> Result<String> {
        let api_ratio = catalog::api_ratio(&request.ratio_id);
        let prompt = Self::compose_prompt(request);
        let body = Self::build_request_body(&prompt, api_ratio);

        let url = format!("{}/{}:generateContent", GEMINI_ENDPOINT, self.model);

        log::debug!(
            "Requesting image: model={} ratio={} prompt={} chars",
            self.model,
            api_ratio,
            prompt.len()
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| MoodGenError::RequestError(format!("Gemini request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let truncated: String = error_body.chars().take(200).collect();
            return Err(MoodGenError::ResponseError(format!(
                "Gemini API error {}: {}",
                status, truncated
            )));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            MoodGenError::SerializationError(format!("Failed to parse Gemini response: {}", e))
        })?;

        Self::extract_image_url(&parsed).ok_or_else(|| {
            MoodGenError::ResponseError("No image data found in response".to_string())
        })
    }

    /// Single natural-language instruction embedding the subject, style label
    /// and flavor text, language hint and the requested format.
    pub fn compose_prompt(request: &GenerationRequest) -> String {
        format!(
            "Create a {style} image.\n\
             Subject/Emotion: \"{prompt}\".\n\
             Language Context: The user input is in {language}.\n\
             Composition Requirement: The user wants an aspect ratio/format of {ratio_label}. \
             Please compose the subject within the frame to suit this format perfectly.\n\
             Style description: {style_description}\n\
             Details: High quality, highly detailed, atmospheric.",
            style = request.style,
            prompt = request.prompt,
            language = catalog::language_label(&request.language),
            ratio_label = catalog::ratio_label(&request.ratio_id),
            style_description = catalog::style_description(&request.style),
        )
    }

    pub fn build_request_body(prompt: &str, api_ratio: &str) -> serde_json::Value {
        json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "responseModalities": ["IMAGE"],
                "imageConfig": {
                    "aspectRatio": api_ratio
                }
            }
        })
    }

    /// Scans the response parts for the first inline image payload and turns
    /// it into a displayable data URI. Missing MIME types default to PNG.
    pub fn extract_image_url(response: &GenerateContentResponse) -> Option<String> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.parts.iter().find_map(|p| p.inline_data.as_ref()))
            .map(|inline| {
                let mime = inline.mime_type.as_deref().unwrap_or("image/png");
                format!("data:{};base64,{}", mime, inline.data)
            })
    }
}
