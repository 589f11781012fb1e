use super::stream::AudioInputStream;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Audio source a session is initialized from
#[derive(Clone)]
pub enum AudioSource {
    /// Default capture device
    Microphone,
    /// Audio file on disk
    File(PathBuf),
    /// Caller-supplied input stream
    Stream(Arc<dyn AudioInputStream>),
}

impl AudioSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        AudioSource::File(path.into())
    }

    pub fn is_microphone(&self) -> bool {
        matches!(self, AudioSource::Microphone)
    }
}

impl fmt::Debug for AudioSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioSource::Microphone => f.write_str("Microphone"),
            AudioSource::File(path) => f.debug_tuple("File").field(path).finish(),
            AudioSource::Stream(stream) => f.debug_tuple("Stream").field(&stream.format()).finish(),
        }
    }
}

impl fmt::Display for AudioSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioSource::Microphone => f.write_str("microphone"),
            AudioSource::File(path) => write!(f, "file:{}", path.display()),
            AudioSource::Stream(stream) => {
                let format = stream.format();
                write!(
                    f,
                    "stream:{}Hz/{}bit/{}ch",
                    format.sample_rate, format.bits_per_sample, format.channels
                )
            }
        }
    }
}
