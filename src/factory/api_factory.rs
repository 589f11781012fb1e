use super::translation::TranslationParameters;
use crate::audio::{AudioInputStream, AudioSource};
use crate::config::Config;
use crate::error::{Result, SpeechError};
use crate::object::{
    query_service, require_interface, ClassName, ObjectRegistry, ServiceHandle, ServiceId, Site,
};
use crate::properties::{NamedProperties, PropertyBag, PropertyId};
use crate::recognizer::{Recognizer, RecognizerKind};
use crate::session::{AudioStreamSessionInit, Session};
use std::path::Path;
use std::sync::{Arc, Weak};
use tracing::{debug, info};

/// A session and recognizer created for one call, not yet attached.
struct Wiring {
    session: Arc<dyn Session>,
    session_site: Arc<dyn Site>,
    recognizer: Arc<dyn Recognizer>,
}

/// Creates recognizers and wires them to new sessions.
///
/// The factory keeps no per-call state. It is the site of every session it
/// creates and serves two things to them: the registry and the
/// factory-wide property bag sessions fall back to.
pub struct SpeechApiFactory {
    registry: Arc<ObjectRegistry>,
    properties: Arc<PropertyBag>,
    this: Weak<SpeechApiFactory>,
}

impl SpeechApiFactory {
    /// Create a factory over `registry`
    pub fn new(registry: ObjectRegistry) -> Arc<Self> {
        Self::with_properties(registry, PropertyBag::new())
    }

    /// Create a factory whose sessions fall back to `properties`
    pub fn with_properties(registry: ObjectRegistry, properties: PropertyBag) -> Arc<Self> {
        Arc::new_cyclic(|this| SpeechApiFactory {
            registry: Arc::new(registry),
            properties: Arc::new(properties),
            this: this.clone(),
        })
    }

    /// Create a factory with the built-in classes and the configured
    /// factory-wide properties
    pub fn from_config(config: &Config) -> Arc<Self> {
        let properties = PropertyBag::seeded(config.properties.clone());
        Self::with_properties(ObjectRegistry::with_defaults(), properties)
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    pub fn create_speech_recognizer(&self, language: Option<&str>) -> Result<Arc<dyn Recognizer>> {
        self.create_recognizer_internal(RecognizerKind::Speech, AudioSource::Microphone, language)
    }

    pub fn create_speech_recognizer_with_file_input(
        &self,
        file: impl AsRef<Path>,
        language: Option<&str>,
    ) -> Result<Arc<dyn Recognizer>> {
        let source = AudioSource::file(file.as_ref());
        self.create_recognizer_internal(RecognizerKind::Speech, source, language)
    }

    pub fn create_speech_recognizer_with_stream(
        &self,
        stream: Arc<dyn AudioInputStream>,
    ) -> Result<Arc<dyn Recognizer>> {
        self.create_recognizer_internal(RecognizerKind::Speech, AudioSource::Stream(stream), None)
    }

    pub fn create_intent_recognizer(&self, language: Option<&str>) -> Result<Arc<dyn Recognizer>> {
        self.create_recognizer_internal(RecognizerKind::Intent, AudioSource::Microphone, language)
    }

    pub fn create_intent_recognizer_with_file_input(
        &self,
        file: impl AsRef<Path>,
        language: Option<&str>,
    ) -> Result<Arc<dyn Recognizer>> {
        let source = AudioSource::file(file.as_ref());
        self.create_recognizer_internal(RecognizerKind::Intent, source, language)
    }

    pub fn create_translation_recognizer<S: AsRef<str>>(
        &self,
        source_language: &str,
        target_languages: &[S],
        voice: &str,
    ) -> Result<Arc<dyn Recognizer>> {
        let parameters = TranslationParameters::new(source_language, target_languages, voice)?;
        self.create_translation_recognizer_internal(AudioSource::Microphone, &parameters)
    }

    pub fn create_translation_recognizer_with_file_input<S: AsRef<str>>(
        &self,
        file: impl AsRef<Path>,
        source_language: &str,
        target_languages: &[S],
        voice: &str,
    ) -> Result<Arc<dyn Recognizer>> {
        let parameters = TranslationParameters::new(source_language, target_languages, voice)?;
        self.create_translation_recognizer_internal(AudioSource::file(file.as_ref()), &parameters)
    }

    pub fn create_translation_recognizer_with_stream<S: AsRef<str>>(
        &self,
        stream: Arc<dyn AudioInputStream>,
        source_language: &str,
        target_languages: &[S],
        voice: &str,
    ) -> Result<Arc<dyn Recognizer>> {
        let parameters = TranslationParameters::new(source_language, target_languages, voice)?;
        self.create_translation_recognizer_internal(AudioSource::Stream(stream), &parameters)
    }

    fn create_recognizer_internal(
        &self,
        kind: RecognizerKind,
        source: AudioSource,
        language: Option<&str>,
    ) -> Result<Arc<dyn Recognizer>> {
        let wiring = self.create_wiring(kind, source)?;

        // Unset language leaves the engine default (en-US)
        if let Some(language) = language {
            let properties = query_service::<dyn NamedProperties>(&*wiring.session_site)?;
            properties.set_by_id(PropertyId::RecoLanguage, language)?;
            debug!("Set recognition language: {}", language);
        }

        Self::attach(wiring)
    }

    fn create_translation_recognizer_internal(
        &self,
        source: AudioSource,
        parameters: &TranslationParameters,
    ) -> Result<Arc<dyn Recognizer>> {
        let wiring = self.create_wiring(RecognizerKind::Translation, source)?;

        let properties = query_service::<dyn NamedProperties>(&*wiring.session_site)?;
        parameters.apply(&*properties)?;
        debug!(
            "Set translation parameters: {} -> {} (voice: {:?})",
            parameters.source_language(),
            parameters.to_languages(),
            parameters.voice()
        );

        Self::attach(wiring)
    }

    /// Create the session, initialize its audio and create the recognizer
    fn create_wiring(&self, kind: RecognizerKind, source: AudioSource) -> Result<Wiring> {
        let factory_site = self.site_from_this()?;

        let session_object = self
            .registry
            .create(ClassName::AudioStreamSession, Some(factory_site))?;
        let session = require_interface::<dyn Session>(&session_object)?;

        let session_init = require_interface::<dyn AudioStreamSessionInit>(&session_object)?;
        match source {
            AudioSource::Microphone => session_init.init_from_microphone()?,
            AudioSource::File(path) => session_init.init_from_file(&path)?,
            AudioSource::Stream(stream) => session_init.init_from_stream(stream)?,
        }

        let session_site = require_interface::<dyn Site>(&session_object)?;
        let recognizer = self
            .registry
            .create_as::<dyn Recognizer>(kind.class_name(), Some(Arc::clone(&session_site)))?
            .ok_or(SpeechError::UnexpectedCreationFailure("Recognizer"))?;

        Ok(Wiring {
            session,
            session_site,
            recognizer,
        })
    }

    fn attach(wiring: Wiring) -> Result<Arc<dyn Recognizer>> {
        let Wiring {
            session,
            recognizer,
            ..
        } = wiring;

        session.add_recognizer(Arc::clone(&recognizer))?;
        info!(
            "Created {} recognizer {} on session {}",
            recognizer.kind(),
            recognizer.id(),
            session.id()
        );

        Ok(recognizer)
    }

    fn site_from_this(&self) -> Result<Arc<dyn Site>> {
        let this = self.this.upgrade().ok_or(SpeechError::SiteExpired)?;
        Ok(this)
    }
}

impl Site for SpeechApiFactory {
    fn query_service(&self, service: ServiceId) -> Option<ServiceHandle> {
        match service {
            ServiceId::NamedProperties => Some(ServiceHandle::NamedProperties(self.properties.clone())),
            ServiceId::ObjectRegistry => Some(ServiceHandle::ObjectRegistry(Arc::clone(&self.registry))),
            ServiceId::Session => None,
        }
    }
}
