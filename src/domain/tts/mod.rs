pub mod dto;
pub mod error;
pub mod language;
pub mod service;
pub mod voice;

pub use dto::{SynthesisOptions, SynthesizedAudio};
pub use error::{SettingError, SynthesisError, TtsServiceError};
pub use language::Language;
pub use service::{TtsService, TtsServiceApi, TtsSynthesisResult};
pub use voice::{Codec, Emotion, Speed, Voice};
