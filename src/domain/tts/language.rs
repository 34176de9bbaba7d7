use super::error::SettingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language tags accepted by the SpeechKit `lang` parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ru-RU")]
    Russian,
    #[default]
    #[serde(rename = "en-US")]
    English,
    #[serde(rename = "tr-TR")]
    Turkish,
    #[serde(rename = "uk-UK")]
    Ukrainian,
}

impl Language {
    /// Every language the provider can synthesize, in wire order
    pub const ALL: &'static [Language] = &[
        Language::Russian,
        Language::English,
        Language::Turkish,
        Language::Ukrainian,
    ];

    /// Get the tag as sent to the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Russian => "ru-RU",
            Language::English => "en-US",
            Language::Turkish => "tr-TR",
            Language::Ukrainian => "uk-UK",
        }
    }
}

impl FromStr for Language {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.as_str() == s)
            .ok_or_else(|| SettingError::unsupported("language", s))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
