pub mod source;
pub mod stream;

pub use source::AudioSource;
pub use stream::{AudioInputStream, AudioStreamFormat, PushAudioInputStream};
