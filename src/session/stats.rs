use crate::recognizer::RecognizerKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Snapshot of a session and what is attached to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: Uuid,

    /// When the session was created
    pub created_at: DateTime<Utc>,

    /// Display form of the audio source, if initialized
    pub audio_source: Option<String>,

    /// Recognizers still alive
    pub recognizers: Vec<RecognizerSummary>,

    /// Named properties visible from the session
    pub properties: BTreeMap<String, String>,
}

/// A single recognizer attached to a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerSummary {
    pub id: Uuid,
    pub kind: RecognizerKind,
    pub enabled: bool,
}
