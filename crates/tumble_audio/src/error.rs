//! Audio error types

use thiserror::Error;

/// Audio errors
#[derive(Debug, Error)]
pub enum AudioError {
    /// Failed to initialize audio device
    #[error("Failed to initialize audio device: {0}")]
    DeviceInit(String),

    /// Audio file not found
    #[error("Audio file not found: {0}")]
    FileNotFound(String),

    /// Clip could not be decoded
    #[error("Failed to decode audio: {0}")]
    Decode(String),

    /// Sink creation or playback failed
    #[error("Playback failed: {0}")]
    Playback(String),
}

/// Result type for audio operations
pub type Result<T> = std::result::Result<T, AudioError>;
