//! Static catalogs: visual styles, prompt languages and aspect-ratio formats.
//!
//! These tables drive both the form choices and the prompt construction; the
//! aspect-ratio table additionally maps UI-facing format ids (including banner
//! sizes that are not true ratios) onto the small set of ratio tokens the
//! generation endpoint accepts.

use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    pub id: &'static str,
    pub label: &'static str,
    pub api_value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub label: &'static str,
}

pub const STYLES: [&str; 14] = [
    "Cinematografico",
    "Realistico",
    "Cartoon",
    "Macro Photography",
    "High Contrast",
    "Soft Focus",
    "Mood Dark Ambient",
    "Pastel Dream Core",
    "Mistic Aura Photography",
    "Esoteric Fantasy Style",
    "Golden Light Spiritual Style",
    "Zen Minimal Photography",
    "Boho Chic",
    "Oriental Style",
];

pub const LANGUAGES: [Language; 6] = [
    Language { code: "it", label: "Italiano" },
    Language { code: "en", label: "English" },
    Language { code: "es", label: "Español" },
    Language { code: "fr", label: "Français" },
    Language { code: "de", label: "Deutsch" },
    Language { code: "ja", label: "Japanese" },
];

pub const ASPECT_RATIOS: [AspectRatio; 8] = [
    AspectRatio { id: "1:1", label: "1:1 (Quadrato)", api_value: "1:1" },
    AspectRatio { id: "4:5", label: "4:5 (Social Portrait)", api_value: "3:4" },
    AspectRatio { id: "1.91:1", label: "1.91:1 (Landscape)", api_value: "16:9" },
    AspectRatio { id: "9:16", label: "9:16 (Story)", api_value: "9:16" },
    AspectRatio { id: "16:9", label: "16:9 (Cinema)", api_value: "16:9" },
    AspectRatio { id: "cover-9:16", label: "Per Cover 9:16", api_value: "9:16" },
    AspectRatio { id: "1584x396", label: "1584x396 px (Banner)", api_value: "16:9" },
    AspectRatio { id: "1128x191", label: "1128x191 px (Header)", api_value: "16:9" },
];

/// Fallback token for format ids the endpoint does not know about.
pub const DEFAULT_API_RATIO: &str = "16:9";

/// Maps a user-selected format id to the closest ratio token the API accepts.
pub fn api_ratio(ratio_id: &str) -> &'static str {
    ASPECT_RATIOS
        .iter()
        .find(|r| r.id == ratio_id)
        .map(|r| r.api_value)
        .unwrap_or(DEFAULT_API_RATIO)
}

/// Display label for a format id; unknown ids fall back to the id itself.
pub fn ratio_label<'a>(ratio_id: &'a str) -> &'a str {
    ASPECT_RATIOS
        .iter()
        .find(|r| r.id == ratio_id)
        .map(|r| r.label)
        .unwrap_or(ratio_id)
}

/// Display label for a language code; unknown codes fall back to the code.
pub fn language_label<'a>(code: &'a str) -> &'a str {
    LANGUAGES
        .iter()
        .find(|l| l.code == code)
        .map(|l| l.label)
        .unwrap_or(code)
}

/// Flavor text folded into the prompt for the styles that carry one; the rest
/// get a generic templated sentence.
pub fn style_description(style: &str) -> String {
    match style {
        "Mood Dark Ambient" => {
            "Low key lighting, shadowy, mysterious, moody atmosphere, deep blacks.".to_string()
        }
        "Pastel Dream Core" => {
            "Soft pastel colors, dreamy, surreal, ethereal, nostalgic aesthetic.".to_string()
        }
        "Mistic Aura Photography" => {
            "Glowing auras, magical atmosphere, spiritual energy, soft radiance.".to_string()
        }
        "Golden Light Spiritual Style" => {
            "Bathed in golden hour light, divine rays, peaceful, transcendent.".to_string()
        }
        "Zen Minimal Photography" => {
            "Simple composition, negative space, balanced, peaceful, nature-inspired.".to_string()
        }
        "Esoteric Fantasy Style" => {
            "Mystical symbols, magical realism, ancient vibes, other-worldly.".to_string()
        }
        _ => format!("A masterfully executed {} visual.", style),
    }
}

/// Uniform pick for the form's "random style" shuffle.
pub fn random_style<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    STYLES.choose(rng).copied().unwrap_or(STYLES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_mapping_table() {
        assert_eq!(api_ratio("1:1"), "1:1");
        assert_eq!(api_ratio("4:5"), "3:4");
        assert_eq!(api_ratio("1.91:1"), "16:9");
        assert_eq!(api_ratio("9:16"), "9:16");
        assert_eq!(api_ratio("16:9"), "16:9");
        assert_eq!(api_ratio("cover-9:16"), "9:16");
        assert_eq!(api_ratio("1584x396"), "16:9");
        assert_eq!(api_ratio("1128x191"), "16:9");
    }

    #[test]
    fn test_unknown_ratio_defaults_to_widescreen() {
        assert_eq!(api_ratio("3:2"), "16:9");
        assert_eq!(api_ratio(""), "16:9");
    }

    #[test]
    fn test_ratio_label_fallback() {
        assert_eq!(ratio_label("1:1"), "1:1 (Quadrato)");
        assert_eq!(ratio_label("weird"), "weird");
    }

    #[test]
    fn test_language_label() {
        assert_eq!(language_label("it"), "Italiano");
        assert_eq!(language_label("xx"), "xx");
    }

    #[test]
    fn test_style_description_flavored_and_default() {
        assert!(style_description("Zen Minimal Photography").contains("negative space"));
        assert_eq!(
            style_description("Cartoon"),
            "A masterfully executed Cartoon visual."
        );
    }

    #[test]
    fn test_random_style_is_from_catalog() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let style = random_style(&mut rng);
            assert!(STYLES.contains(&style));
        }
    }
}
