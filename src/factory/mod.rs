//! Recognizer creation and wiring
//!
//! Every `create_*` operation on [`SpeechApiFactory`] runs the same sequence:
//! create session → initialize audio → create recognizer → write named
//! properties → attach recognizer → return it.

mod api_factory;
mod translation;

pub use api_factory::SpeechApiFactory;
pub use translation::{set_translation_parameters, TranslationParameters, TARGET_LANGUAGE_SEPARATOR};
