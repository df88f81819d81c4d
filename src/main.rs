use moodgen::catalog::{ASPECT_RATIOS, STYLES};
use moodgen::studio::{gallery, CardState, MoodForm, MoodStudio, SaveOutcome, StudioEvent};
use moodgen::{Config, GeminiClient};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    moodgen::logger::init_with_config(
        moodgen::logger::LoggerConfig::development().with_prefix("moodgen"),
    )?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    match env::var("GEMINI_API_KEY").or_else(|_| env::var("API_KEY")) {
        Ok(key) => {
            log::info!("✅ Gemini API key found in environment");
            log::debug!("Key starts with: {}...", &key[..4.min(key.len())]);
        }
        Err(_) => {
            log::error!("❌ No GEMINI_API_KEY or API_KEY in environment");
        }
    }

    let config = Config::from_env();

    log::info!("🔄 Creating Gemini client...");
    let client = match GeminiClient::new(config.gemini) {
        Ok(client) => {
            log::info!("✅ Gemini client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize Gemini client: {}", e);
            return Err(e.into());
        }
    };

    log::info!("🎨 Available styles:");
    for style in STYLES {
        log::info!("  {}", style);
    }
    log::info!("🖼️  Available formats:");
    for ratio in ASPECT_RATIOS {
        log::info!("  {} -> API {}", ratio.label, ratio.api_value);
    }

    let mut studio = MoodStudio::new(client);

    let mut form = MoodForm::new();
    let prompt = env::args()
        .nth(1)
        .unwrap_or_else(|| "calma dopo la tempesta".to_string());
    form.set_prompt(prompt);
    form.set_count(2);
    if env::args().any(|arg| arg == "--random-style") {
        form.shuffle_style();
    }

    log::info!(
        "🧪 Generating: prompt='{}' style='{}' count={} format={}",
        form.prompt(),
        form.style(),
        form.count(),
        form.ratio_id()
    );

    let request = match form.submit(studio.is_loading()) {
        Some(request) => request,
        None => {
            log::error!("❌ Nothing to submit (blank prompt)");
            return Ok(());
        }
    };

    match studio.generate(request).await {
        StudioEvent::BatchCompleted => log::info!("✅ Generation round completed"),
        StudioEvent::BatchFailed => {
            log::error!("❌ Failed to generate images. Please try again.");
            return Ok(());
        }
        StudioEvent::Ignored => return Ok(()),
    }

    let download_dir = config.download.directory.unwrap_or_else(|| ".".to_string());

    for image in studio.images() {
        match CardState::of(image) {
            CardState::Ready(_) => match gallery::download(image, &download_dir) {
                Ok(path) => log::info!("💾 Image saved to: {}", path.display()),
                Err(e) => log::error!("❌ Failed to save image: {}", e),
            },
            CardState::Failed(error) => log::warn!("⚠️  Slot failed: {}", error),
            CardState::Loading => {}
        }
    }

    match studio.save_mood() {
        SaveOutcome::Saved => log::info!("✅ Mood saved to your collection!"),
        SaveOutcome::AlreadySaved => log::info!("ℹ️  This mood is already in your collection."),
        SaveOutcome::NothingToSave => log::warn!("⚠️  Nothing to save"),
    }

    // Saving the same round again trips the duplicate guard.
    if studio.save_mood() == SaveOutcome::AlreadySaved {
        log::info!("🛡️  Duplicate save rejected as expected");
    }

    log::info!("🎉 Done! {} mood(s) in the collection", studio.collection().len());

    Ok(())
}
