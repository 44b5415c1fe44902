//! Content types and their template-based generators.
//!
//! Generation is a stub: each type produces a deterministic, human-readable
//! payload embedding the prompt. Media types synthesize an output filename
//! from the supplied timestamp. A real model integration would slot in
//! behind [`generate`] without changing its signature.

use chrono::{DateTime, Utc};

use crate::error::CoreError;

/// The set of content types this service can generate.
///
/// Adding a type means adding a variant here and an arm in [`generate`];
/// both are compile-time checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Image,
    Video,
    Audio,
    Translate,
    Summarize,
}

impl ContentType {
    /// String form, as accepted on the wire and stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Translate => "translate",
            Self::Summarize => "summarize",
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            "translate" => Ok(Self::Translate),
            "summarize" => Ok(Self::Summarize),
            other => Err(CoreError::UnsupportedType {
                requested: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Generate a payload for `content_type` from `prompt`.
///
/// `now` feeds the synthesized output filename for media types; the same
/// inputs always produce the same payload.
pub fn generate(content_type: ContentType, prompt: &str, now: DateTime<Utc>) -> String {
    let stamp = now.format("%Y%m%d_%H%M%S");
    match content_type {
        ContentType::Text => format!(
            "Generated text based on prompt: \"{prompt}\"\n\n\
             This draft was produced by the text generator and is ready for review."
        ),
        ContentType::Image => format!(
            "Image generated for prompt: \"{prompt}\"\n\n\
             URL: /generated/images/image_{stamp}.jpg\n\
             Resolution: 1024x1024\n\
             Format: JPEG"
        ),
        ContentType::Video => format!(
            "Video generated for prompt: \"{prompt}\"\n\n\
             URL: /generated/videos/video_{stamp}.mp4\n\
             Duration: 30 seconds\n\
             Resolution: 1920x1080\n\
             Format: MP4"
        ),
        ContentType::Audio => format!(
            "Audio generated for prompt: \"{prompt}\"\n\n\
             URL: /generated/audio/audio_{stamp}.mp3\n\
             Duration: 2 minutes\n\
             Bitrate: 320 kbps\n\
             Format: MP3"
        ),
        ContentType::Translate => format!(
            "Translation of: \"{prompt}\"\n\n\
             Source language: auto-detected\n\
             Target language: English\n\n\
             [TRANSLATION] {prompt}"
        ),
        ContentType::Summarize => format!(
            "Summary of the source text: \"{prompt}\"\n\n\
             Key points:\n\
             - Main topic and idea\n\
             - Important facts and figures\n\
             - Conclusions"
        ),
    }
}

/// Default project title applied when a request omits one.
pub fn default_title(now: DateTime<Utc>) -> String {
    format!("AI Project {}", now.format("%Y-%m-%d %H:%M"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
