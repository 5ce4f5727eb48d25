//! Core data models shared across the resolver, templates and backends.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;

// =============================================================================
// Aspect Ratio
// =============================================================================

/// Supported output aspect ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectRatio {
    /// 1:1
    #[default]
    Square,
    /// 2:3
    Portrait2x3,
    /// 3:2
    Landscape3x2,
    /// 3:4
    Portrait3x4,
    /// 4:3
    Landscape4x3,
    /// 4:5
    Portrait4x5,
    /// 5:4
    Landscape5x4,
    /// 9:16
    Portrait9x16,
    /// 16:9
    Widescreen16x9,
    /// 21:9
    Ultrawide21x9,
}

impl AspectRatio {
    /// All supported ratios, in the order they are listed to users.
    pub const ALL: &'static [Self] = &[
        Self::Square,
        Self::Portrait2x3,
        Self::Landscape3x2,
        Self::Portrait3x4,
        Self::Landscape4x3,
        Self::Portrait4x5,
        Self::Landscape5x4,
        Self::Portrait9x16,
        Self::Widescreen16x9,
        Self::Ultrawide21x9,
    ];

    /// Wire representation, e.g. `"16:9"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Portrait2x3 => "2:3",
            Self::Landscape3x2 => "3:2",
            Self::Portrait3x4 => "3:4",
            Self::Landscape4x3 => "4:3",
            Self::Portrait4x5 => "4:5",
            Self::Landscape5x4 => "5:4",
            Self::Portrait9x16 => "9:16",
            Self::Widescreen16x9 => "16:9",
            Self::Ultrawide21x9 => "21:9",
        }
    }

    /// Comma-separated list of valid values for error messages.
    #[must_use]
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|ratio| ratio.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|ratio| ratio.as_str() == s)
            .ok_or_else(|| Error::InvalidAspect {
                value: s.to_string(),
                valid: Self::valid_values(),
            })
    }
}

// =============================================================================
// Image Size
// =============================================================================

/// Supported output resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageSize {
    /// 1K
    #[default]
    OneK,
    /// 2K
    TwoK,
    /// 4K
    FourK,
}

impl ImageSize {
    /// All supported sizes.
    pub const ALL: &'static [Self] = &[Self::OneK, Self::TwoK, Self::FourK];

    /// Wire representation, e.g. `"2K"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneK => "1K",
            Self::TwoK => "2K",
            Self::FourK => "4K",
        }
    }

    /// Comma-separated list of valid values for error messages.
    #[must_use]
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|size| size.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| Error::InvalidSize {
                value: s.to_string(),
                valid: Self::valid_values(),
            })
    }
}

// =============================================================================
// Backend
// =============================================================================

/// Image generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    #[default]
    Gemini,
    OpenRouter,
}

impl Backend {
    /// Both backends.
    pub const ALL: &'static [Self] = &[Self::Gemini, Self::OpenRouter];

    /// Value used in the config file's `api` field.
    #[must_use]
    pub const fn config_name(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenRouter => "openrouter",
        }
    }

    /// Environment variable holding this backend's API key.
    #[must_use]
    pub const fn key_env_var(self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI_API_KEY",
            Self::OpenRouter => "OPENROUTER_API_KEY",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Gemini => "Gemini",
            Self::OpenRouter => "OpenRouter",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// =============================================================================
// Requests and Results
// =============================================================================

/// Everything a backend needs to produce one image.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub input_images: Vec<PathBuf>,
    pub aspect: AspectRatio,
    pub size: ImageSize,
}

/// Raw image bytes returned by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub data: Vec<u8>,
    pub mime_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_aspect_ratio_parses_to_itself() {
        for ratio in AspectRatio::ALL {
            assert_eq!(ratio.as_str().parse::<AspectRatio>().unwrap(), *ratio);
        }
        assert_eq!(AspectRatio::ALL.len(), 10);
    }

    #[test]
    fn invalid_aspect_ratios_are_rejected() {
        for bad in ["1:2", "16:10", "4:4", "invalid", ""] {
            let err = bad.parse::<AspectRatio>().unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains(&format!("invalid aspect ratio: {bad}")), "{msg}");
            assert!(msg.contains("1:1, 2:3, 3:2, 3:4, 4:3, 4:5, 5:4, 9:16, 16:9, 21:9"));
        }
    }

    #[test]
    fn every_size_parses_to_itself() {
        for size in ImageSize::ALL {
            assert_eq!(size.as_str().parse::<ImageSize>().unwrap(), *size);
        }
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        for bad in ["1k", "3K", "8K", "HD", ""] {
            let err = bad.parse::<ImageSize>().unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("invalid size: {bad} (valid: 1K, 2K, 4K)")
            );
        }
    }

    #[test]
    fn backend_names() {
        assert_eq!(Backend::Gemini.key_env_var(), "GEMINI_API_KEY");
        assert_eq!(Backend::OpenRouter.config_name(), "openrouter");
    }
}
