use super::site::Site;
use crate::error::{Result, SpeechError};
use crate::recognizer::Recognizer;
use crate::session::{AudioStreamSessionInit, Session};
use std::sync::Arc;

/// An object constructed by the registry.
///
/// Each `as_*` method is a capability cast. Implementations return
/// `Some(self)` for the interfaces they support and keep the default `None`
/// for everything else.
pub trait Component: Send + Sync {
    fn as_session(self: Arc<Self>) -> Option<Arc<dyn Session>> {
        None
    }

    fn as_audio_init(self: Arc<Self>) -> Option<Arc<dyn AudioStreamSessionInit>> {
        None
    }

    fn as_site(self: Arc<Self>) -> Option<Arc<dyn Site>> {
        None
    }

    fn as_recognizer(self: Arc<Self>) -> Option<Arc<dyn Recognizer>> {
        None
    }
}

/// An interface a [`Component`] can be cast to.
pub trait Interface: Send + Sync + 'static {
    /// Name used in error messages.
    const NAME: &'static str;

    fn cast(object: Arc<dyn Component>) -> Option<Arc<Self>>;
}

impl Interface for dyn Session {
    const NAME: &'static str = "Session";

    fn cast(object: Arc<dyn Component>) -> Option<Arc<Self>> {
        object.as_session()
    }
}

impl Interface for dyn AudioStreamSessionInit {
    const NAME: &'static str = "AudioStreamSessionInit";

    fn cast(object: Arc<dyn Component>) -> Option<Arc<Self>> {
        object.as_audio_init()
    }
}

impl Interface for dyn Site {
    const NAME: &'static str = "Site";

    fn cast(object: Arc<dyn Component>) -> Option<Arc<Self>> {
        object.as_site()
    }
}

impl Interface for dyn Recognizer {
    const NAME: &'static str = "Recognizer";

    fn cast(object: Arc<dyn Component>) -> Option<Arc<Self>> {
        object.as_recognizer()
    }
}

/// Cast `object` to `I`, returning `None` if it does not implement it.
pub fn query_interface<I: Interface + ?Sized>(object: &Arc<dyn Component>) -> Option<Arc<I>> {
    I::cast(Arc::clone(object))
}

/// Cast `object` to an interface the caller cannot work without.
pub fn require_interface<I: Interface + ?Sized>(object: &Arc<dyn Component>) -> Result<Arc<I>> {
    query_interface::<I>(object).ok_or(SpeechError::UnexpectedCreationFailure(I::NAME))
}
