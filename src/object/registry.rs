use super::interface::{query_interface, Component, Interface};
use super::site::Site;
use crate::error::{Result, SpeechError};
use crate::recognizer::{BaseRecognizer, RecognizerKind};
use crate::session::AudioStreamSession;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Classes the registry knows how to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassName {
    AudioStreamSession,
    SpeechRecognizer,
    IntentRecognizer,
    TranslationRecognizer,
}

impl ClassName {
    pub const ALL: [ClassName; 4] = [
        ClassName::AudioStreamSession,
        ClassName::SpeechRecognizer,
        ClassName::IntentRecognizer,
        ClassName::TranslationRecognizer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassName::AudioStreamSession => "AudioStreamSession",
            ClassName::SpeechRecognizer => "SpeechRecognizer",
            ClassName::IntentRecognizer => "IntentRecognizer",
            ClassName::TranslationRecognizer => "TranslationRecognizer",
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassName {
    type Err = SpeechError;

    fn from_str(s: &str) -> Result<Self> {
        ClassName::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| SpeechError::creation_failure(s, "unknown class name"))
    }
}

/// Builds a component, optionally seeded with the site of its creator.
pub type Constructor =
    Arc<dyn Fn(Option<Arc<dyn Site>>) -> Result<Arc<dyn Component>> + Send + Sync>;

/// Maps class tags to constructors.
///
/// Registration happens up front through `&mut self`; once shared behind an
/// `Arc` the registry is read-only and safe for concurrent lookups.
#[derive(Clone, Default)]
pub struct ObjectRegistry {
    constructors: HashMap<ClassName, Constructor>,
}

impl ObjectRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in session and recognizer classes
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ClassName::AudioStreamSession, AudioStreamSession::create);
        for kind in RecognizerKind::ALL {
            registry.register(kind.class_name(), move |site| BaseRecognizer::create(kind, site));
        }
        registry
    }

    /// Register (or replace) the constructor for `class`
    pub fn register<F>(&mut self, class: ClassName, constructor: F) -> &mut Self
    where
        F: Fn(Option<Arc<dyn Site>>) -> Result<Arc<dyn Component>> + Send + Sync + 'static,
    {
        if self.constructors.insert(class, Arc::new(constructor)).is_some() {
            debug!("Replaced constructor for {}", class);
        }
        self
    }

    pub fn is_registered(&self, class: ClassName) -> bool {
        self.constructors.contains_key(&class)
    }

    /// Construct an instance of `class`
    ///
    /// Fails with `CreationFailure` if the class has no constructor or the
    /// constructor itself fails.
    pub fn create(&self, class: ClassName, site: Option<Arc<dyn Site>>) -> Result<Arc<dyn Component>> {
        let constructor = self
            .constructors
            .get(&class)
            .ok_or_else(|| SpeechError::creation_failure(class, "class is not registered"))?;

        debug!("Creating {} (with site: {})", class, site.is_some());

        constructor(site).map_err(|err| match err {
            err @ SpeechError::CreationFailure { .. } => err,
            other => SpeechError::creation_failure(class, other.to_string()),
        })
    }

    /// Construct an instance from a class name string
    pub fn create_by_name(&self, name: &str, site: Option<Arc<dyn Site>>) -> Result<Arc<dyn Component>> {
        let class = name.parse::<ClassName>()?;
        self.create(class, site)
    }

    /// Construct `class` and cast it to `I`
    ///
    /// Returns `Ok(None)` when the object was built but does not implement `I`.
    pub fn create_as<I: Interface + ?Sized>(
        &self,
        class: ClassName,
        site: Option<Arc<dyn Site>>,
    ) -> Result<Option<Arc<I>>> {
        let object = self.create(class, site)?;
        Ok(query_interface::<I>(&object))
    }
}

impl fmt::Debug for ObjectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut classes: Vec<_> = self.constructors.keys().map(ClassName::as_str).collect();
        classes.sort_unstable();
        f.debug_struct("ObjectRegistry").field("classes", &classes).finish()
    }
}
