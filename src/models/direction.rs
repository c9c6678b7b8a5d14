// Translation directions and their hosted model identifiers

use crate::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed source/target language pair served by this deployment.
///
/// Direction codes are exact and case-sensitive; anything outside the two
/// recognized codes is rejected before any model work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// English to Arabic
    #[serde(rename = "e2a")]
    EnglishToArabic,
    /// Arabic to English
    #[serde(rename = "a2e")]
    ArabicToEnglish,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::EnglishToArabic, Direction::ArabicToEnglish];

    /// Wire code used in requests and responses.
    pub fn code(&self) -> &'static str {
        match self {
            Direction::EnglishToArabic => "e2a",
            Direction::ArabicToEnglish => "a2e",
        }
    }

    /// Hosted model identifier backing this direction.
    pub fn model_id(&self) -> &'static str {
        match self {
            Direction::EnglishToArabic => "Helsinki-NLP/opus-mt-en-ar",
            Direction::ArabicToEnglish => "Helsinki-NLP/opus-mt-ar-en",
        }
    }

    /// Slot index into the per-direction model cache.
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::EnglishToArabic => 0,
            Direction::ArabicToEnglish => 1,
        }
    }
}

impl FromStr for Direction {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "e2a" => Ok(Direction::EnglishToArabic),
            "a2e" => Ok(Direction::ArabicToEnglish),
            _ => Err(ServiceError::InvalidDirection),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
