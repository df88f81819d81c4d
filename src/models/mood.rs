use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::image::GeneratedImage;

/// A saved generation round: prompt, style and a snapshot of the batch.
///
/// The image list is an owned copy taken at save time, so later rounds never
/// alter a saved mood. Immutable once created; lives only for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedMood {
    pub id: Uuid,
    pub prompt: String,
    pub timestamp: DateTime<Utc>,
    pub images: Vec<GeneratedImage>,
    pub style: String,
}

impl SavedMood {
    pub fn snapshot(prompt: &str, style: &str, images: &[GeneratedImage]) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: prompt.to_string(),
            timestamp: Utc::now(),
            images: images.to_vec(),
            style: style.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_detached_from_the_batch() {
        let mut batch = vec![GeneratedImage::completed(
            0,
            "data:image/png;base64,AAAA".into(),
            "quiet dawn",
            "16:9",
        )];
        let mood = SavedMood::snapshot("quiet dawn", "Realistico", &batch);

        batch.clear();
        assert_eq!(mood.images.len(), 1);
        assert_eq!(mood.prompt, "quiet dawn");
        assert_eq!(mood.style, "Realistico");
    }
}
