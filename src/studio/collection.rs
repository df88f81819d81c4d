use crate::models::{GeneratedImage, SavedMood};

/// Result of a save attempt, surfaced to the user as a toast-level notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
    NothingToSave,
}

/// In-memory saved-moods list, ordered most-recent-first.
///
/// The duplicate guard is deliberately approximate: prompt text plus the id
/// of the first image, not a content hash.
#[derive(Debug, Default)]
pub struct MoodCollection {
    moods: Vec<SavedMood>,
}

impl MoodCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moods(&self) -> &[SavedMood] {
        &self.moods
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }

    pub fn contains(&self, prompt: &str, first_image_id: &str) -> bool {
        self.moods.iter().any(|mood| {
            mood.prompt == prompt
                && mood.images.first().map(|img| img.id.as_str()) == Some(first_image_id)
        })
    }

    pub fn save(&mut self, prompt: &str, style: &str, images: &[GeneratedImage]) -> SaveOutcome {
        let first_id = match images.first() {
            Some(img) => img.id.as_str(),
            None => return SaveOutcome::NothingToSave,
        };

        if self.contains(prompt, first_id) {
            return SaveOutcome::AlreadySaved;
        }

        self.moods.insert(0, SavedMood::snapshot(prompt, style, images));
        SaveOutcome::Saved
    }
}
