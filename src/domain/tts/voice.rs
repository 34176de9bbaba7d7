use super::error::SettingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Audio encoding requested through the `format` parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    #[default]
    Mp3,
    Wav,
    Opus,
}

impl Codec {
    pub const ALL: &'static [Codec] = &[Codec::Mp3, Codec::Wav, Codec::Opus];

    pub fn as_str(&self) -> &'static str {
        match self {
            Codec::Mp3 => "mp3",
            Codec::Wav => "wav",
            Codec::Opus => "opus",
        }
    }

    /// Content type to serve the audio with
    pub fn mime_type(&self) -> &'static str {
        match self {
            Codec::Mp3 => "audio/mpeg",
            Codec::Wav => "audio/wav",
            // SpeechKit wraps opus frames in an ogg container
            Codec::Opus => "audio/ogg",
        }
    }
}

impl FromStr for Codec {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Codec::ALL
            .iter()
            .copied()
            .find(|codec| codec.as_str() == s)
            .ok_or_else(|| SettingError::unsupported("codec", s))
    }
}

impl std::fmt::Display for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synthetic speakers, sent as the `speaker` parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Jane,
    Oksana,
    Alyss,
    Omazh,
    #[default]
    Zahar,
    Ermil,
}

impl Voice {
    pub const ALL: &'static [Voice] = &[
        Voice::Jane,
        Voice::Oksana,
        Voice::Alyss,
        Voice::Omazh,
        Voice::Zahar,
        Voice::Ermil,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Jane => "jane",
            Voice::Oksana => "oksana",
            Voice::Alyss => "alyss",
            Voice::Omazh => "omazh",
            Voice::Zahar => "zahar",
            Voice::Ermil => "ermil",
        }
    }
}

impl FromStr for Voice {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Voice::ALL
            .iter()
            .copied()
            .find(|voice| voice.as_str() == s)
            .ok_or_else(|| SettingError::unsupported("voice", s))
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Good,
    Evil,
    #[default]
    Neutral,
}

impl Emotion {
    pub const ALL: &'static [Emotion] = &[Emotion::Good, Emotion::Evil, Emotion::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Good => "good",
            Emotion::Evil => "evil",
            Emotion::Neutral => "neutral",
        }
    }
}

impl FromStr for Emotion {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .iter()
            .copied()
            .find(|emotion| emotion.as_str() == s)
            .ok_or_else(|| SettingError::unsupported("emotion", s))
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 3.0;

/// Speech rate multiplier, always within [`MIN_SPEED`, `MAX_SPEED`]
///
/// Renders with the shortest decimal form, so the default travels as `1`
/// and a configured `1.5` as `1.5`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Speed(f64);

impl Speed {
    pub fn new(value: f64) -> Result<Self, SettingError> {
        // NaN fails both comparisons and is rejected here too
        if (MIN_SPEED..=MAX_SPEED).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SettingError::SpeedOutOfRange(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(1.0)
    }
}

impl TryFrom<f64> for Speed {
    type Error = SettingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Speed::new(value)
    }
}

impl From<Speed> for f64 {
    fn from(speed: Speed) -> Self {
        speed.0
    }
}

impl FromStr for Speed {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|_| SettingError::unsupported("speed", s))?;
        Speed::new(value)
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
