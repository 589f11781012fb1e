use crate::error::{Result, SpeechError};
use crate::properties::{NamedProperties, PropertyId, RecognitionMode};

/// Joins target languages in [`PropertyId::TranslationToLanguages`].
///
/// BCP-47 tags never contain it.
pub const TARGET_LANGUAGE_SEPARATOR: char = ',';

/// Validated translation parameters, ready to be written to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationParameters {
    source_language: String,
    to_languages: String,
    voice: String,
}

impl TranslationParameters {
    /// Validate and serialize the parameters.
    ///
    /// Checks run in order: source language, list emptiness, first target,
    /// then each later target as it is appended. `voice` is not validated.
    pub fn new<S: AsRef<str>>(source_language: &str, target_languages: &[S], voice: &str) -> Result<Self> {
        if source_language.is_empty() {
            return Err(SpeechError::invalid_argument("source language is empty"));
        }

        let (first, rest) = target_languages
            .split_first()
            .ok_or_else(|| SpeechError::invalid_argument("target language list is empty"))?;
        if first.as_ref().is_empty() {
            return Err(SpeechError::invalid_argument("first target language is empty"));
        }

        let mut to_languages = first.as_ref().to_string();
        for (offset, language) in rest.iter().enumerate() {
            let language = language.as_ref();
            if language.is_empty() {
                return Err(SpeechError::invalid_argument(format!(
                    "target language at index {} is empty",
                    offset + 1
                )));
            }
            to_languages.push(TARGET_LANGUAGE_SEPARATOR);
            to_languages.push_str(language);
        }

        // Unreachable after the checks above
        if to_languages.is_empty() {
            return Err(SpeechError::invalid_argument("serialized target languages are empty"));
        }

        Ok(Self {
            source_language: source_language.to_string(),
            to_languages,
            voice: voice.to_string(),
        })
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    /// Comma-joined target languages, in input order
    pub fn to_languages(&self) -> &str {
        &self.to_languages
    }

    pub fn target_languages(&self) -> impl Iterator<Item = &str> {
        self.to_languages.split(TARGET_LANGUAGE_SEPARATOR)
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    /// Write the parameters; recognition mode is forced to conversation last.
    pub fn apply(&self, properties: &dyn NamedProperties) -> Result<()> {
        properties.set_by_id(PropertyId::TranslationFromLanguage, &self.source_language)?;
        properties.set_by_id(PropertyId::TranslationToLanguages, &self.to_languages)?;
        properties.set_by_id(PropertyId::TranslationVoice, &self.voice)?;
        properties.set_by_id(PropertyId::RecoMode, RecognitionMode::Conversation.as_str())
    }
}

/// Validate translation parameters and write them to `properties`.
///
/// Nothing is written unless every check passes.
pub fn set_translation_parameters<S: AsRef<str>>(
    properties: &dyn NamedProperties,
    source_language: &str,
    target_languages: &[S],
    voice: &str,
) -> Result<()> {
    TranslationParameters::new(source_language, target_languages, voice)?.apply(properties)
}
