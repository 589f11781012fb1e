//! Recognizers handed back to callers

mod recognizer;

pub use recognizer::{BaseRecognizer, Recognizer, RecognizerKind};
