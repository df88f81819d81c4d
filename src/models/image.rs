use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Fixed per-slot failure message surfaced on error cards.
pub const GENERATION_FAILED: &str = "Failed to generate";

/// One slot of a generation round.
///
/// A record is always in exactly one of three states: a pending placeholder
/// (`is_loading`), a failure (`error` set, empty `url`) or a loaded image
/// (`url` holds a data URI). Records are replaced wholesale when a round
/// resolves, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: String,
    pub url: String,
    pub prompt: String,
    #[serde(default)]
    pub is_loading: bool,
    pub error: Option<String>,
    pub ratio: Option<String>,
}

impl GeneratedImage {
    /// Placeholder shown while the slot's request is in flight.
    pub fn pending(slot: usize, prompt: &str, ratio_id: &str) -> Self {
        Self {
            id: format!("pending-{}", slot),
            url: String::new(),
            prompt: prompt.to_string(),
            is_loading: true,
            error: None,
            ratio: Some(ratio_id.to_string()),
        }
    }

    pub fn completed(slot: usize, url: String, prompt: &str, ratio_id: &str) -> Self {
        Self {
            id: format!("img-{}-{}", Utc::now().timestamp_millis(), slot),
            url,
            prompt: prompt.to_string(),
            is_loading: false,
            error: None,
            ratio: Some(ratio_id.to_string()),
        }
    }

    pub fn failed(slot: usize, prompt: &str, ratio_id: &str) -> Self {
        Self {
            id: format!("err-{}-{}", Utc::now().timestamp_millis(), slot),
            url: String::new(),
            prompt: prompt.to_string(),
            is_loading: false,
            error: Some(GENERATION_FAILED.to_string()),
            ratio: Some(ratio_id.to_string()),
        }
    }

    pub fn is_failed(&self) -> bool {
        !self.is_loading && self.error.is_some()
    }

    pub fn is_ready(&self) -> bool {
        !self.is_loading && self.error.is_none() && !self.url.is_empty()
    }

    /// True once the slot's request has settled, either way.
    pub fn is_resolved(&self) -> bool {
        !self.is_loading
    }
}

/// Submit payload for one generation round. The form constrains `count`
/// to 1..=4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub style: String,
    pub language: String,
    pub count: usize,
    pub ratio_id: String,
}

impl GenerationRequest {
    pub fn new(
        prompt: impl Into<String>,
        style: impl Into<String>,
        language: impl Into<String>,
        count: usize,
        ratio_id: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            style: style.into(),
            language: language.into(),
            count,
            ratio_id: ratio_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_record_shape() {
        let record = GeneratedImage::pending(2, "sunset melancholy", "1:1");
        assert_eq!(record.id, "pending-2");
        assert!(record.is_loading);
        assert!(record.url.is_empty());
        assert!(record.error.is_none());
        assert_eq!(record.ratio.as_deref(), Some("1:1"));
        assert!(!record.is_resolved());
    }

    #[test]
    fn test_record_states_are_exclusive() {
        let ok = GeneratedImage::completed(0, "data:image/png;base64,AAAA".into(), "calm", "9:16");
        assert!(ok.is_ready() && !ok.is_failed() && ok.is_resolved());
        assert!(ok.id.starts_with("img-"));

        let err = GeneratedImage::failed(1, "calm", "9:16");
        assert!(err.is_failed() && !err.is_ready() && err.is_resolved());
        assert!(err.id.starts_with("err-"));
        assert_eq!(err.error.as_deref(), Some(GENERATION_FAILED));
        assert!(err.url.is_empty());
    }
}
