use crate::error::{MoodGenError, Result};
use crate::models::GeneratedImage;
use base64::engine::general_purpose;
use base64::Engine as _;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// The three render states of an image card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState<'a> {
    Loading,
    Failed(&'a str),
    Ready(&'a str),
}

impl<'a> CardState<'a> {
    pub fn of(image: &'a GeneratedImage) -> Self {
        if image.is_loading {
            CardState::Loading
        } else if let Some(error) = image.error.as_deref() {
            CardState::Failed(error)
        } else {
            CardState::Ready(&image.url)
        }
    }
}

/// Frame proportions for a card before its image arrives. Banner formats keep
/// their own display proportions even though the API serves them as 16:9.
pub fn frame_aspect(ratio_id: &str) -> (u32, u32) {
    match ratio_id {
        "1:1" => (1, 1),
        "4:5" => (4, 5),
        "9:16" | "cover-9:16" => (9, 16),
        "1.91:1" => (191, 100),
        "1584x396" => (4, 1),
        "1128x191" => (59, 10),
        _ => (16, 9),
    }
}

/// Desktop card width in logical pixels, by the batch's format.
pub fn item_width(ratio_id: &str) -> u32 {
    match ratio_id {
        "9:16" | "4:5" | "cover-9:16" => 360,
        "1:1" => 500,
        _ => 600,
    }
}

/// Snap-scroll cursor over a batch, driven by the directional controls. A new
/// batch always starts at the first card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    cursor: usize,
    len: usize,
}

impl Gallery {
    pub fn for_batch(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn scroll_right(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
        }
    }

    pub fn scroll_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}

/// Filename scheme for downloaded images.
pub fn download_filename(image: &GeneratedImage) -> String {
    let ratio = image.ratio.as_deref().unwrap_or("image");
    format!(
        "models-generator-{}-{}.png",
        ratio,
        Utc::now().timestamp_millis()
    )
}

/// Saves a loaded image's data URI to disk, the crate's rendition of the
/// browser download action.
pub fn download(image: &GeneratedImage, directory: impl AsRef<Path>) -> Result<PathBuf> {
    if !image.is_ready() {
        return Err(MoodGenError::RequestError(
            "Only loaded images can be downloaded".into(),
        ));
    }

    let payload = image
        .url
        .split_once("base64,")
        .map(|(_, payload)| payload)
        .ok_or_else(|| {
            MoodGenError::ResponseError("Image url is not a base64 data URI".into())
        })?;

    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| MoodGenError::SerializationError(format!("Failed to decode image: {}", e)))?;

    let path = directory.as_ref().join(download_filename(image));
    fs::write(&path, bytes)?;

    log::info!("Saved image to {}", path.display());
    Ok(path)
}
