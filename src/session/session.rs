use super::stats::SessionSummary;
use crate::audio::{AudioInputStream, AudioSource};
use crate::error::{Result, SpeechError};
use crate::object::{query_service, Component, ServiceHandle, ServiceId, Site};
use crate::properties::{NamedProperties, PropertyBag};
use crate::recognizer::Recognizer;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::{Arc, Mutex, Weak};
use tracing::{debug, info};
use uuid::Uuid;

/// A session binding one audio source to its recognizers
pub trait Session: Send + Sync {
    fn id(&self) -> Uuid;

    fn created_at(&self) -> DateTime<Utc>;

    /// The audio source, once initialized
    fn audio_source(&self) -> Result<Option<AudioSource>>;

    /// Session-scoped named properties
    fn properties(&self) -> Arc<dyn NamedProperties>;

    /// Register a recognizer with the session
    ///
    /// The audio source must already be initialized. The session only holds
    /// the recognizer weakly: the recognizer owns the session through its
    /// site, so a recognizer nobody else holds is dropped right away.
    fn add_recognizer(&self, recognizer: Arc<dyn Recognizer>) -> Result<()>;

    /// Recognizers that are still alive
    fn recognizers(&self) -> Result<Vec<Arc<dyn Recognizer>>>;

    fn summary(&self) -> Result<SessionSummary> {
        Ok(SessionSummary {
            session_id: self.id(),
            created_at: self.created_at(),
            audio_source: self.audio_source()?.map(|source| source.to_string()),
            recognizers: self.recognizers()?.iter().map(|r| r.summary()).collect(),
            properties: self.properties().entries()?,
        })
    }
}

/// One-shot audio initialization of a session
pub trait AudioStreamSessionInit: Send + Sync {
    fn init_from_microphone(&self) -> Result<()>;

    fn init_from_file(&self, path: &Path) -> Result<()>;

    fn init_from_stream(&self, stream: Arc<dyn AudioInputStream>) -> Result<()>;
}

/// Default session implementation
///
/// Holds its creator's site weakly. Recognizers keep the session alive
/// through their own site reference; the session only tracks them weakly.
pub struct AudioStreamSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    site: Option<Weak<dyn Site>>,
    properties: Arc<PropertyBag>,
    audio_source: Mutex<Option<AudioSource>>,
    recognizers: Mutex<Vec<Weak<dyn Recognizer>>>,
    this: Weak<AudioStreamSession>,
}

impl AudioStreamSession {
    /// Registry constructor
    ///
    /// When a site is given, its named properties become the fallback for
    /// the session's own property bag.
    pub fn create(site: Option<Arc<dyn Site>>) -> Result<Arc<dyn Component>> {
        let properties = match &site {
            Some(site) => match query_service::<dyn NamedProperties>(&**site) {
                Ok(parent) => PropertyBag::with_parent(parent),
                Err(_) => PropertyBag::new(),
            },
            None => PropertyBag::new(),
        };

        let session = Arc::new_cyclic(|this| AudioStreamSession {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            site: site.as_ref().map(Arc::downgrade),
            properties: Arc::new(properties),
            audio_source: Mutex::new(None),
            recognizers: Mutex::new(Vec::new()),
            this: this.clone(),
        });

        info!("Created audio stream session: {}", session.id);

        Ok(session)
    }

    fn init_source(&self, source: AudioSource) -> Result<()> {
        let mut current = self.audio_source.lock()?;
        if let Some(existing) = current.as_ref() {
            return Err(SpeechError::AlreadyInitialized(existing.to_string()));
        }

        info!("Session {} audio source: {}", self.id, source);
        *current = Some(source);
        Ok(())
    }
}

impl Session for AudioStreamSession {
    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn audio_source(&self) -> Result<Option<AudioSource>> {
        Ok(self.audio_source.lock()?.clone())
    }

    fn properties(&self) -> Arc<dyn NamedProperties> {
        self.properties.clone()
    }

    fn add_recognizer(&self, recognizer: Arc<dyn Recognizer>) -> Result<()> {
        if self.audio_source.lock()?.is_none() {
            return Err(SpeechError::NotInitialized);
        }

        let mut recognizers = self.recognizers.lock()?;
        recognizers.retain(|r| r.strong_count() > 0);
        recognizers.push(Arc::downgrade(&recognizer));

        info!(
            "Session {} attached {:?} recognizer {} ({} attached)",
            self.id,
            recognizer.kind(),
            recognizer.id(),
            recognizers.len()
        );

        Ok(())
    }

    fn recognizers(&self) -> Result<Vec<Arc<dyn Recognizer>>> {
        let recognizers = self.recognizers.lock()?;
        Ok(recognizers.iter().filter_map(Weak::upgrade).collect())
    }
}

impl AudioStreamSessionInit for AudioStreamSession {
    fn init_from_microphone(&self) -> Result<()> {
        self.init_source(AudioSource::Microphone)
    }

    fn init_from_file(&self, path: &Path) -> Result<()> {
        self.init_source(AudioSource::file(path))
    }

    fn init_from_stream(&self, stream: Arc<dyn AudioInputStream>) -> Result<()> {
        self.init_source(AudioSource::Stream(stream))
    }
}

impl Site for AudioStreamSession {
    fn query_service(&self, service: ServiceId) -> Option<ServiceHandle> {
        match service {
            ServiceId::NamedProperties => Some(ServiceHandle::NamedProperties(self.properties.clone())),
            ServiceId::Session => {
                let this: Arc<dyn Session> = self.this.upgrade()?;
                Some(ServiceHandle::Session(this))
            }
            other => {
                debug!("Session {} forwarding {} query to its site", self.id, other);
                self.site.as_ref()?.upgrade()?.query_service(other)
            }
        }
    }
}

impl Component for AudioStreamSession {
    fn as_session(self: Arc<Self>) -> Option<Arc<dyn Session>> {
        Some(self)
    }

    fn as_audio_init(self: Arc<Self>) -> Option<Arc<dyn AudioStreamSessionInit>> {
        Some(self)
    }

    fn as_site(self: Arc<Self>) -> Option<Arc<dyn Site>> {
        Some(self)
    }
}
