use crate::error::{Result, SpeechError};
use crate::object::{query_service, ClassName, Component, Site};
use crate::properties::NamedProperties;
use crate::session::{RecognizerSummary, Session};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Recognizer variant, fixed when the recognizer is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognizerKind {
    Speech,
    Intent,
    Translation,
}

impl RecognizerKind {
    pub const ALL: [RecognizerKind; 3] = [
        RecognizerKind::Speech,
        RecognizerKind::Intent,
        RecognizerKind::Translation,
    ];

    /// Registry class that builds this kind
    pub fn class_name(&self) -> ClassName {
        match self {
            RecognizerKind::Speech => ClassName::SpeechRecognizer,
            RecognizerKind::Intent => ClassName::IntentRecognizer,
            RecognizerKind::Translation => ClassName::TranslationRecognizer,
        }
    }
}

impl fmt::Display for RecognizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecognizerKind::Speech => "speech",
            RecognizerKind::Intent => "intent",
            RecognizerKind::Translation => "translation",
        };
        f.write_str(name)
    }
}

/// A recognizer bound to one session
pub trait Recognizer: Send + Sync {
    fn id(&self) -> Uuid;

    fn kind(&self) -> RecognizerKind;

    /// Site of the session this recognizer is bound to
    fn site(&self) -> Arc<dyn Site>;

    fn is_enabled(&self) -> bool;

    fn enable(&self);

    fn disable(&self);

    /// Named properties of the owning session
    fn properties(&self) -> Result<Arc<dyn NamedProperties>> {
        query_service::<dyn NamedProperties>(&*self.site())
    }

    /// The owning session
    fn session(&self) -> Result<Arc<dyn Session>> {
        query_service::<dyn Session>(&*self.site())
    }

    fn summary(&self) -> RecognizerSummary {
        RecognizerSummary {
            id: self.id(),
            kind: self.kind(),
            enabled: self.is_enabled(),
        }
    }
}

/// Default recognizer implementation, shared by all kinds
pub struct BaseRecognizer {
    id: Uuid,
    kind: RecognizerKind,
    site: Arc<dyn Site>,
    enabled: AtomicBool,
}

impl BaseRecognizer {
    /// Registry constructor
    ///
    /// A recognizer cannot exist without the session site it is bound to.
    pub fn create(kind: RecognizerKind, site: Option<Arc<dyn Site>>) -> Result<Arc<dyn Component>> {
        let site = site.ok_or_else(|| {
            SpeechError::creation_failure(kind.class_name(), "recognizer requires a session site")
        })?;

        let recognizer = BaseRecognizer {
            id: Uuid::new_v4(),
            kind,
            site,
            enabled: AtomicBool::new(true),
        };

        info!("Created {} recognizer: {}", kind, recognizer.id);

        Ok(Arc::new(recognizer))
    }
}

impl Recognizer for BaseRecognizer {
    fn id(&self) -> Uuid {
        self.id
    }

    fn kind(&self) -> RecognizerKind {
        self.kind
    }

    fn site(&self) -> Arc<dyn Site> {
        Arc::clone(&self.site)
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn enable(&self) {
        debug!("Enabling recognizer {}", self.id);
        self.enabled.store(true, Ordering::SeqCst);
    }

    fn disable(&self) {
        debug!("Disabling recognizer {}", self.id);
        self.enabled.store(false, Ordering::SeqCst);
    }
}

impl Component for BaseRecognizer {
    fn as_recognizer(self: Arc<Self>) -> Option<Arc<dyn Recognizer>> {
        Some(self)
    }
}
