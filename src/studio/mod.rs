pub mod collection;
pub mod form;
pub mod gallery;

use crate::error::Result;
use crate::gemini::ImageGenerator;
use crate::models::{GeneratedImage, GenerationRequest};

pub use collection::{MoodCollection, SaveOutcome};
pub use form::MoodForm;
pub use gallery::{CardState, Gallery};

/// Outcome of a generation round, surfaced as a toast-level notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudioEvent {
    /// All slots settled; the batch (successes and per-slot errors) is live.
    BatchCompleted,
    /// The aggregate call itself failed; the batch was cleared.
    BatchFailed,
    /// Blank prompt, nothing was submitted.
    Ignored,
}

/// Top-level application state: the current batch, the loading flag, the last
/// submitted prompt/style and the saved collection. All mutation goes through
/// the transitions below (submit, resolve, save, reset).
pub struct MoodStudio<G: ImageGenerator> {
    generator: G,
    images: Vec<GeneratedImage>,
    loading: bool,
    last_prompt: String,
    last_style: String,
    collection: MoodCollection,
}

impl<G: ImageGenerator> MoodStudio<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            images: Vec::new(),
            loading: false,
            last_prompt: String::new(),
            last_style: String::new(),
            collection: MoodCollection::new(),
        }
    }

    pub fn images(&self) -> &[GeneratedImage] {
        &self.images
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_prompt(&self) -> &str {
        &self.last_prompt
    }

    pub fn last_style(&self) -> &str {
        &self.last_style
    }

    pub fn collection(&self) -> &MoodCollection {
        &self.collection
    }

    /// Submit transition: validates the prompt, records it, and installs
    /// `count` placeholder records so skeleton cards render immediately.
    /// Returns false (and changes nothing) on a blank prompt.
    pub fn begin_round(&mut self, request: &GenerationRequest) -> bool {
        if request.prompt.trim().is_empty() {
            return false;
        }

        self.loading = true;
        self.last_prompt = request.prompt.clone();
        self.last_style = request.style.clone();
        self.images = (0..request.count)
            .map(|slot| GeneratedImage::pending(slot, &request.prompt, &request.ratio_id))
            .collect();

        log::info!(
            "Generation round started: {} image(s), format {}",
            request.count,
            request.ratio_id
        );
        true
    }

    /// Resolve transition: replaces the placeholders with the settled batch,
    /// or clears everything when the aggregate call itself errored.
    pub fn complete_round(&mut self, outcome: Result<Vec<GeneratedImage>>) -> StudioEvent {
        self.loading = false;
        match outcome {
            Ok(results) => {
                self.images = results;
                StudioEvent::BatchCompleted
            }
            Err(e) => {
                log::error!("Generation round failed: {}", e);
                self.images.clear();
                StudioEvent::BatchFailed
            }
        }
    }

    /// Runs a full round: placeholders, concurrent fan-out, resolution.
    pub async fn generate(&mut self, request: GenerationRequest) -> StudioEvent {
        if !self.begin_round(&request) {
            return StudioEvent::Ignored;
        }

        let outcome = self.generator.generate_batch(&request).await;
        self.complete_round(outcome)
    }

    /// Saves the current batch into the collection. No-op while a round is in
    /// flight or when there is nothing to save; duplicates are rejected.
    pub fn save_mood(&mut self) -> SaveOutcome {
        if self.loading || self.images.is_empty() {
            return SaveOutcome::NothingToSave;
        }

        self.collection
            .save(&self.last_prompt, &self.last_style, &self.images)
    }

    /// The "back" action: drops the current prompt and batch.
    pub fn reset(&mut self) {
        self.last_prompt.clear();
        self.images.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoodGenError;
    use async_trait::async_trait;

    /// Scripted stand-in for the Gemini client: chosen slots fail, the rest
    /// succeed with a recognizable data URI.
    struct ScriptedGenerator {
        fail_slots: Vec<usize>,
    }

    #[async_trait]
    impl ImageGenerator for ScriptedGenerator {
        async fn generate_slot(
            &self,
            request: &GenerationRequest,
            slot: usize,
        ) -> GeneratedImage {
            if self.fail_slots.contains(&slot) {
                GeneratedImage::failed(slot, &request.prompt, &request.ratio_id)
            } else {
                GeneratedImage::completed(
                    slot,
                    format!("data:image/png;base64,SLOT{}", slot),
                    &request.prompt,
                    &request.ratio_id,
                )
            }
        }
    }

    /// A generator whose aggregate call errors out entirely.
    struct BrokenGenerator;

    #[async_trait]
    impl ImageGenerator for BrokenGenerator {
        async fn generate_slot(
            &self,
            request: &GenerationRequest,
            slot: usize,
        ) -> GeneratedImage {
            GeneratedImage::failed(slot, &request.prompt, &request.ratio_id)
        }

        async fn generate_batch(
            &self,
            _request: &GenerationRequest,
        ) -> Result<Vec<GeneratedImage>> {
            Err(MoodGenError::ClientError("network down".into()))
        }
    }

    fn studio() -> MoodStudio<ScriptedGenerator> {
        MoodStudio::new(ScriptedGenerator { fail_slots: vec![] })
    }

    fn request(count: usize, ratio_id: &str) -> GenerationRequest {
        GenerationRequest::new("sunset melancholy", "Cinematografico", "it", count, ratio_id)
    }

    #[tokio::test]
    async fn test_every_count_yields_that_many_tagged_records() {
        for count in 1..=4 {
            let mut studio = studio();
            let event = studio.generate(request(count, "4:5")).await;

            assert_eq!(event, StudioEvent::BatchCompleted);
            assert_eq!(studio.images().len(), count);
            for image in studio.images() {
                assert_eq!(image.ratio.as_deref(), Some("4:5"));
                assert!(image.is_resolved());
            }
        }
    }

    #[tokio::test]
    async fn test_batch_results_stay_index_aligned() {
        let mut studio = studio();
        studio.generate(request(3, "16:9")).await;

        for (i, image) in studio.images().iter().enumerate() {
            assert!(image.id.ends_with(&format!("-{}", i)));
        }
    }

    #[tokio::test]
    async fn test_slot_failure_does_not_poison_the_batch() {
        let mut studio = MoodStudio::new(ScriptedGenerator {
            fail_slots: vec![1],
        });
        let event = studio.generate(request(3, "1:1")).await;

        assert_eq!(event, StudioEvent::BatchCompleted);
        let images = studio.images();
        assert!(images[0].is_ready());
        assert!(images[1].is_failed());
        assert!(images[1].url.is_empty());
        assert!(images[2].is_ready());
    }

    #[tokio::test]
    async fn test_placeholders_appear_before_resolution() {
        let mut studio = studio();
        assert!(studio.begin_round(&request(2, "1:1")));

        assert!(studio.is_loading());
        assert_eq!(studio.images().len(), 2);
        for (i, image) in studio.images().iter().enumerate() {
            assert_eq!(image.id, format!("pending-{}", i));
            assert!(image.is_loading);
            assert_eq!(image.ratio.as_deref(), Some("1:1"));
        }
    }

    #[tokio::test]
    async fn test_italian_scenario_resolves_url_xor_error() {
        let mut studio = MoodStudio::new(ScriptedGenerator {
            fail_slots: vec![0],
        });
        let event = studio.generate(request(2, "1:1")).await;

        assert_eq!(event, StudioEvent::BatchCompleted);
        assert_eq!(studio.images().len(), 2);
        for image in studio.images() {
            assert_eq!(image.ratio.as_deref(), Some("1:1"));
            assert!(image.url.is_empty() != image.error.is_none());
        }
    }

    #[tokio::test]
    async fn test_blank_prompt_is_ignored() {
        let mut studio = studio();
        let event = studio
            .generate(GenerationRequest::new("   ", "Cartoon", "en", 2, "1:1"))
            .await;

        assert_eq!(event, StudioEvent::Ignored);
        assert!(studio.images().is_empty());
        assert!(!studio.is_loading());
    }

    #[tokio::test]
    async fn test_aggregate_failure_clears_the_batch() {
        let mut studio = MoodStudio::new(BrokenGenerator);
        let event = studio.generate(request(3, "9:16")).await;

        assert_eq!(event, StudioEvent::BatchFailed);
        assert!(studio.images().is_empty());
        assert!(!studio.is_loading());
    }

    #[tokio::test]
    async fn test_save_guards_and_duplicate_rejection() {
        let mut studio = studio();

        // Nothing generated yet.
        assert_eq!(studio.save_mood(), SaveOutcome::NothingToSave);

        // In flight.
        studio.begin_round(&request(2, "1:1"));
        assert_eq!(studio.save_mood(), SaveOutcome::NothingToSave);

        let outcome = studio.generator.generate_batch(&request(2, "1:1")).await;
        studio.complete_round(outcome);

        assert_eq!(studio.save_mood(), SaveOutcome::Saved);
        assert_eq!(studio.save_mood(), SaveOutcome::AlreadySaved);
        assert_eq!(studio.collection().len(), 1);
    }

    #[tokio::test]
    async fn test_saved_mood_is_a_snapshot() {
        let mut studio = studio();
        studio.generate(request(2, "16:9")).await;
        studio.save_mood();

        let saved_first_id = studio.collection().moods()[0].images[0].id.clone();

        // A new round replaces the live batch; the saved one must not move.
        studio.generate(request(1, "1:1")).await;
        assert_eq!(studio.collection().moods()[0].images[0].id, saved_first_id);
        assert_eq!(studio.collection().moods()[0].images.len(), 2);
    }

    #[tokio::test]
    async fn test_reset_clears_prompt_and_batch() {
        let mut studio = studio();
        studio.generate(request(2, "16:9")).await;
        studio.save_mood();

        studio.reset();
        assert!(studio.images().is_empty());
        assert!(studio.last_prompt().is_empty());
        // The collection survives a reset.
        assert_eq!(studio.collection().len(), 1);
    }
}
