use crate::object::ServiceId;
use std::sync::PoisonError;
use thiserror::Error;

/// Errors raised while creating and wiring sessions and recognizers.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Caller-supplied data failed validation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The registry produced an object that lacks a required interface.
    #[error("unexpected creation failure: object does not implement {0}")]
    UnexpectedCreationFailure(&'static str),

    /// The class is not registered or its constructor failed.
    #[error("failed to create {class}: {reason}")]
    CreationFailure { class: String, reason: String },

    /// The site cannot supply the requested service.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(ServiceId),

    /// The session audio source was already set.
    #[error("audio source already initialized: {0}")]
    AlreadyInitialized(String),

    /// A recognizer was attached before the session audio source was set.
    #[error("session audio source is not initialized")]
    NotInitialized,

    /// A weakly held site has been dropped.
    #[error("site is no longer alive")]
    SiteExpired,

    #[error("lock is poisoned")]
    Poisoned,
}

impl SpeechError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        SpeechError::InvalidArgument(message.into())
    }

    pub(crate) fn creation_failure(class: impl ToString, reason: impl Into<String>) -> Self {
        SpeechError::CreationFailure {
            class: class.to_string(),
            reason: reason.into(),
        }
    }
}

impl<T> From<PoisonError<T>> for SpeechError {
    fn from(_: PoisonError<T>) -> Self {
        SpeechError::Poisoned
    }
}

pub type Result<T, E = SpeechError> = std::result::Result<T, E>;
