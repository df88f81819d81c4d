pub mod catalog;
pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod studio;

pub use config::{Config, DownloadConfig, GeminiConfig};
pub use error::{MoodGenError, Result};
pub use gemini::{GeminiClient, ImageClient, ImageGenerator};
pub use models::{GeneratedImage, GenerationRequest, SavedMood, GENERATION_FAILED};
pub use studio::{
    CardState, Gallery, MoodCollection, MoodForm, MoodStudio, SaveOutcome, StudioEvent,
};
