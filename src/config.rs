use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub recognition: RecognitionConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    /// Factory-wide named properties; session properties fall back to these
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "speech-factory".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RecognitionConfig {
    /// Recognition language used when none is given on the command line
    pub language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TranslationConfig {
    pub source_language: Option<String>,
    #[serde(default)]
    pub target_languages: Vec<String>,
    #[serde(default)]
    pub voice: String,
}

impl Config {
    /// Load `path` (any format the `config` crate detects from the extension),
    /// overridden by `SPEECH_FACTORY__<SECTION>__<KEY>` environment variables.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("SPEECH_FACTORY").separator("__"))
            .build()
            .with_context(|| format!("Failed to load config from {}", path))?;

        settings
            .try_deserialize()
            .context("Failed to parse config")
    }
}
