use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Well-known property keys.
///
/// The string names are a wire contract with the recognition engine and
/// must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyId {
    /// BCP-47 recognition language (engine default: en-US)
    RecoLanguage,
    /// Recognition mode, see [`RecognitionMode`]
    RecoMode,
    TranslationFromLanguage,
    /// Comma-joined BCP-47 target languages
    TranslationToLanguages,
    TranslationVoice,
}

impl PropertyId {
    pub fn name(&self) -> &'static str {
        match self {
            PropertyId::RecoLanguage => "SPEECH-RecoLanguage",
            PropertyId::RecoMode => "SPEECH-RecoMode",
            PropertyId::TranslationFromLanguage => "TRANSLATION-FromLanguage",
            PropertyId::TranslationToLanguages => "TRANSLATION-ToLanguages",
            PropertyId::TranslationVoice => "TRANSLATION-Voice",
        }
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values of the [`PropertyId::RecoMode`] property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecognitionMode {
    Interactive,
    /// Required for translation
    Conversation,
    Dictation,
}

impl RecognitionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecognitionMode::Interactive => "Interactive",
            RecognitionMode::Conversation => "Conversation",
            RecognitionMode::Dictation => "Dictation",
        }
    }
}

impl fmt::Display for RecognitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecognitionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Interactive" => Ok(RecognitionMode::Interactive),
            "Conversation" => Ok(RecognitionMode::Conversation),
            "Dictation" => Ok(RecognitionMode::Dictation),
            other => Err(format!("unknown recognition mode: {}", other)),
        }
    }
}
