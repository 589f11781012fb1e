// Tests for translation parameter validation and serialization
//
// A recording property store captures every write in order, so the tests
// can check both what is written and that nothing is written on failure.

use speech_factory::factory::TARGET_LANGUAGE_SEPARATOR;
use speech_factory::{
    set_translation_parameters, NamedProperties, RecognitionMode, SpeechError, TranslationParameters,
};
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingProperties {
    writes: Mutex<Vec<(String, String)>>,
}

impl RecordingProperties {
    fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }
}

impl NamedProperties for RecordingProperties {
    fn get_string_value(&self, name: &str) -> speech_factory::Result<Option<String>> {
        Ok(self
            .writes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone()))
    }

    fn set_string_value(&self, name: &str, value: &str) -> speech_factory::Result<()> {
        self.writes.lock().unwrap().push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn entries(&self) -> speech_factory::Result<BTreeMap<String, String>> {
        Ok(self.writes().into_iter().collect())
    }
}

fn write(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}

#[test]
fn test_valid_parameters_write_four_properties_in_order() {
    let properties = RecordingProperties::default();

    set_translation_parameters(&properties, "en-US", &["fr-FR", "de-DE"], "fr-FR-Voice").unwrap();

    assert_eq!(
        properties.writes(),
        vec![
            write("TRANSLATION-FromLanguage", "en-US"),
            write("TRANSLATION-ToLanguages", "fr-FR,de-DE"),
            write("TRANSLATION-Voice", "fr-FR-Voice"),
            write("SPEECH-RecoMode", "Conversation"),
        ]
    );
}

#[test]
fn test_single_target_has_no_separator() {
    let parameters = TranslationParameters::new("en-US", &["pt-BR"], "voice").unwrap();

    assert_eq!(parameters.to_languages(), "pt-BR");
}

#[test]
fn test_empty_voice_is_accepted() {
    let properties = RecordingProperties::default();

    set_translation_parameters(&properties, "en-US", &["fr-FR"], "").unwrap();

    assert_eq!(
        properties.get_string_value("TRANSLATION-Voice").unwrap().as_deref(),
        Some("")
    );
}

#[test]
fn test_target_languages_round_trip_through_separator() {
    let targets = vec!["zh-Hans", "en-GB", "sr-Latn-RS", "fr-FR", "en-GB"];

    let parameters = TranslationParameters::new("de-DE", &targets, "").unwrap();

    let split: Vec<&str> = parameters.to_languages().split(TARGET_LANGUAGE_SEPARATOR).collect();
    assert_eq!(split, targets, "Order and duplicates must be preserved");
    assert_eq!(parameters.target_languages().collect::<Vec<_>>(), targets);
    assert!(!parameters.to_languages().contains(' '));
}

#[test]
fn test_accepts_owned_strings() {
    let targets = vec!["it-IT".to_string(), "es-MX".to_string()];

    let parameters = TranslationParameters::new("en-US", &targets, "it-IT-Voice").unwrap();

    assert_eq!(parameters.source_language(), "en-US");
    assert_eq!(parameters.to_languages(), "it-IT,es-MX");
    assert_eq!(parameters.voice(), "it-IT-Voice");
}

#[test]
fn test_invalid_inputs_fail_without_writes() {
    let empty: &[&str] = &[];
    let cases: Vec<(&str, Vec<&str>)> = vec![
        ("", vec!["fr-FR"]),
        ("en-US", empty.to_vec()),
        ("en-US", vec![""]),
        ("en-US", vec!["fr-FR", ""]),
        ("en-US", vec!["fr-FR", "de-DE", ""]),
        ("en-US", vec!["", "de-DE"]),
        ("", Vec::new()),
    ];

    for (source, targets) in cases {
        let properties = RecordingProperties::default();

        let result = set_translation_parameters(&properties, source, &targets, "voice");

        assert!(
            matches!(result, Err(SpeechError::InvalidArgument(_))),
            "Expected InvalidArgument for source={:?} targets={:?}",
            source,
            targets
        );
        assert!(
            properties.writes().is_empty(),
            "No writes expected for source={:?} targets={:?}",
            source,
            targets
        );
    }
}

#[test]
fn test_checks_run_in_order() {
    // Empty source is reported even when the target list is also invalid
    let err = TranslationParameters::new("", &[""], "").unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: source language is empty");

    let no_targets: [&str; 0] = [];
    let err = TranslationParameters::new("en-US", &no_targets, "").unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: target language list is empty");

    let err = TranslationParameters::new("en-US", &["", ""], "").unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: first target language is empty");

    let err = TranslationParameters::new("en-US", &["fr-FR", "de-DE", "", ""], "").unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: target language at index 2 is empty");
}

#[test]
fn test_apply_overwrites_previous_values() {
    let properties = RecordingProperties::default();
    properties.set_string_value("SPEECH-RecoMode", "Interactive").unwrap();

    TranslationParameters::new("en-US", &["fr-FR"], "")
        .unwrap()
        .apply(&properties)
        .unwrap();

    assert_eq!(
        properties.get_string_value("SPEECH-RecoMode").unwrap().as_deref(),
        Some("Conversation")
    );
}

#[test]
fn test_recognition_mode_names() {
    for (mode, name) in [
        (RecognitionMode::Interactive, "Interactive"),
        (RecognitionMode::Conversation, "Conversation"),
        (RecognitionMode::Dictation, "Dictation"),
    ] {
        assert_eq!(mode.as_str(), name);
        assert_eq!(mode.to_string(), name);
        assert_eq!(name.parse::<RecognitionMode>().unwrap(), mode);
        assert_eq!(serde_json::to_string(&mode).unwrap(), format!("\"{}\"", name));
        assert_eq!(serde_json::from_str::<RecognitionMode>(&format!("\"{}\"", name)).unwrap(), mode);
    }

    let err = "conversation".parse::<RecognitionMode>().unwrap_err();
    assert_eq!(err, "unknown recognition mode: conversation");
}
