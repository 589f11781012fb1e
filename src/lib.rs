pub mod audio;
pub mod config;
pub mod error;
pub mod factory;
pub mod object;
pub mod properties;
pub mod recognizer;
pub mod session;

pub use audio::{AudioInputStream, AudioSource, AudioStreamFormat, PushAudioInputStream};
pub use config::Config;
pub use error::{Result, SpeechError};
pub use factory::{set_translation_parameters, SpeechApiFactory, TranslationParameters};
pub use object::{
    query_interface, query_service, ClassName, Component, ObjectRegistry, ServiceId, Site,
};
pub use properties::{NamedProperties, PropertyBag, PropertyId, RecognitionMode};
pub use recognizer::{BaseRecognizer, Recognizer, RecognizerKind};
pub use session::{AudioStreamSession, AudioStreamSessionInit, Session, SessionSummary};
