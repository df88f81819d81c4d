use crate::catalog::{self, ASPECT_RATIOS, STYLES};
use crate::models::GenerationRequest;

pub const MIN_IMAGE_COUNT: usize = 1;
pub const MAX_IMAGE_COUNT: usize = 4;

/// Controlled state behind the generator form: prompt text, style chip,
/// language, image count and format selection.
#[derive(Debug, Clone)]
pub struct MoodForm {
    prompt: String,
    style: String,
    language: String,
    count: usize,
    ratio_id: String,
}

impl Default for MoodForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            style: STYLES[0].to_string(),
            language: "it".to_string(),
            count: MAX_IMAGE_COUNT,
            // 16:9 (Cinema)
            ratio_id: ASPECT_RATIOS[4].id.to_string(),
        }
    }
}

impl MoodForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn ratio_id(&self) -> &str {
        &self.ratio_id
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_style(&mut self, style: impl Into<String>) {
        self.style = style.into();
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Quantity selector only offers 1 through 4; anything else is clamped.
    pub fn set_count(&mut self, count: usize) {
        self.count = count.clamp(MIN_IMAGE_COUNT, MAX_IMAGE_COUNT);
    }

    pub fn set_ratio(&mut self, ratio_id: impl Into<String>) {
        self.ratio_id = ratio_id.into();
    }

    /// The "random style" shuffle button.
    pub fn shuffle_style(&mut self) {
        let mut rng = rand::thread_rng();
        self.style = catalog::random_style(&mut rng).to_string();
    }

    /// Prompt input placeholder, localized like the source UI.
    pub fn placeholder_text(&self) -> &'static str {
        if self.language == "it" {
            "Scrivi un'emozione o un tema..."
        } else {
            "Describe an emotion or theme..."
        }
    }

    pub fn can_submit(&self, loading: bool) -> bool {
        !self.prompt.trim().is_empty() && !loading
    }

    /// Produces the round's request, or `None` when the prompt is blank or a
    /// round is already in flight (the submit button is disabled then).
    pub fn submit(&self, loading: bool) -> Option<GenerationRequest> {
        if !self.can_submit(loading) {
            return None;
        }

        Some(GenerationRequest::new(
            self.prompt.clone(),
            self.style.clone(),
            self.language.clone(),
            self.count,
            self.ratio_id.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = MoodForm::new();
        assert_eq!(form.style(), "Cinematografico");
        assert_eq!(form.language(), "it");
        assert_eq!(form.count(), 4);
        assert_eq!(form.ratio_id(), "16:9");
    }

    #[test]
    fn test_count_is_clamped() {
        let mut form = MoodForm::new();
        form.set_count(0);
        assert_eq!(form.count(), 1);
        form.set_count(9);
        assert_eq!(form.count(), 4);
        form.set_count(3);
        assert_eq!(form.count(), 3);
    }

    #[test]
    fn test_submit_requires_prompt_and_idle() {
        let mut form = MoodForm::new();
        assert!(form.submit(false).is_none());

        form.set_prompt("   ");
        assert!(form.submit(false).is_none());

        form.set_prompt("sunset melancholy");
        assert!(form.submit(true).is_none());

        let request = form.submit(false).expect("submit");
        assert_eq!(request.prompt, "sunset melancholy");
        assert_eq!(request.count, 4);
        assert_eq!(request.ratio_id, "16:9");
    }

    #[test]
    fn test_placeholder_follows_language() {
        let mut form = MoodForm::new();
        assert!(form.placeholder_text().starts_with("Scrivi"));
        form.set_language("en");
        assert!(form.placeholder_text().starts_with("Describe"));
    }

    #[test]
    fn test_shuffle_stays_in_catalog() {
        let mut form = MoodForm::new();
        for _ in 0..16 {
            form.shuffle_style();
            assert!(STYLES.contains(&form.style()));
        }
    }
}
