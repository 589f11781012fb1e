use crate::error::{Result, SpeechError};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;

/// PCM format of an audio input stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStreamFormat {
    /// Sample rate in Hz
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// Number of channels
    pub channels: u16,
}

impl Default for AudioStreamFormat {
    fn default() -> Self {
        Self {
            sample_rate: 16000, // 16kHz, what the recognizers expect
            bits_per_sample: 16,
            channels: 1, // Mono
        }
    }
}

/// Audio input stream a session can be initialized from
///
/// The session pulls bytes from it; reading and decoding happen in the
/// engine behind the session.
pub trait AudioInputStream: Send + Sync {
    fn format(&self) -> AudioStreamFormat;

    /// Read up to `buffer.len()` bytes, returning how many were copied.
    ///
    /// Returns 0 when no data is currently available.
    fn read(&self, buffer: &mut [u8]) -> Result<usize>;
}

#[derive(Debug, Default)]
struct PushState {
    buffer: VecDeque<u8>,
    closed: bool,
}

/// In-memory stream the caller pushes audio into
#[derive(Debug, Default)]
pub struct PushAudioInputStream {
    format: AudioStreamFormat,
    state: Mutex<PushState>,
}

impl PushAudioInputStream {
    pub fn new(format: AudioStreamFormat) -> Self {
        Self {
            format,
            state: Mutex::default(),
        }
    }

    /// Append audio bytes
    pub fn write(&self, data: &[u8]) -> Result<()> {
        let mut state = self.state.lock()?;
        if state.closed {
            return Err(SpeechError::invalid_argument("write to a closed audio stream"));
        }
        state.buffer.extend(data);
        Ok(())
    }

    /// Mark the end of the audio; later writes fail
    pub fn close(&self) -> Result<()> {
        self.state.lock()?.closed = true;
        Ok(())
    }

    pub fn is_closed(&self) -> Result<bool> {
        Ok(self.state.lock()?.closed)
    }

    /// Number of buffered bytes not yet read
    pub fn available(&self) -> Result<usize> {
        Ok(self.state.lock()?.buffer.len())
    }
}

impl AudioInputStream for PushAudioInputStream {
    fn format(&self) -> AudioStreamFormat {
        self.format
    }

    fn read(&self, buffer: &mut [u8]) -> Result<usize> {
        let mut state = self.state.lock()?;
        let count = buffer.len().min(state.buffer.len());
        for (slot, byte) in buffer.iter_mut().zip(state.buffer.drain(..count)) {
            *slot = byte;
        }
        Ok(count)
    }
}
