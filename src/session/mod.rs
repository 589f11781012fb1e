//! Audio stream sessions
//!
//! A session binds one audio source to the recognizers attached to it:
//! - the audio source is set exactly once (microphone, file or stream)
//! - recognizers are tracked weakly; callers own them
//! - session-scoped named properties live here and fall back to the
//!   creator's properties on lookup
//! - the session is the site its recognizers query for services

mod session;
mod stats;

pub use session::{AudioStreamSession, AudioStreamSessionInit, Session};
pub use stats::{RecognizerSummary, SessionSummary};
