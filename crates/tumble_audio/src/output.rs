//! Rodio output device and in-memory clips

use crate::error::{AudioError, Result};
use crate::sound::PlayableSound;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// The audio output device
pub struct AudioOutput {
    /// Output stream (must be kept alive)
    _stream: OutputStream,
    /// Stream handle for creating sinks
    stream_handle: OutputStreamHandle,
}

impl AudioOutput {
    /// Open the default output device
    pub fn try_default() -> Result<Self> {
        let (stream, stream_handle) =
            OutputStream::try_default().map_err(|e| AudioError::DeviceInit(e.to_string()))?;

        log::info!("Audio output opened");

        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }

    /// Load a clip from disk for playback on this device
    pub fn load_clip(&self, path: impl AsRef<Path>) -> Result<ClipSound> {
        let bytes = load_clip_bytes(path.as_ref())?;
        log::info!("Loaded clip {} ({} bytes)", path.as_ref().display(), bytes.len());
        Ok(ClipSound::new(self.stream_handle.clone(), bytes))
    }
}

/// Read a clip file and check that it decodes
pub fn load_clip_bytes(path: &Path) -> Result<Arc<[u8]>> {
    let bytes: Arc<[u8]> = std::fs::read(path)
        .map_err(|_| AudioError::FileNotFound(path.display().to_string()))?
        .into();
    validate(&bytes)?;
    Ok(bytes)
}

fn validate(bytes: &Arc<[u8]>) -> Result<()> {
    Decoder::new(Cursor::new(bytes.clone()))
        .map(|_| ())
        .map_err(|e| AudioError::Decode(e.to_string()))
}

/// A decoded-on-demand clip held in memory.
///
/// Restarting builds a fresh paused sink at time zero; the previous one is
/// stopped, so overlapping triggers cut each other off.
pub struct ClipSound {
    stream_handle: OutputStreamHandle,
    bytes: Arc<[u8]>,
    sink: Option<Sink>,
    volume: f32,
}

impl ClipSound {
    fn new(stream_handle: OutputStreamHandle, bytes: Arc<[u8]>) -> Self {
        Self {
            stream_handle,
            bytes,
            sink: None,
            volume: 1.0,
        }
    }
}

impl PlayableSound for ClipSound {
    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(ref sink) = self.sink {
            sink.set_volume(self.volume);
        }
    }

    fn seek_to_start(&mut self) -> Result<()> {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }

        let source = Decoder::new(Cursor::new(self.bytes.clone()))
            .map_err(|e| AudioError::Decode(e.to_string()))?;
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| AudioError::Playback(e.to_string()))?;

        sink.pause();
        sink.set_volume(self.volume);
        sink.append(source);
        self.sink = Some(sink);
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.sink.is_none() {
            self.seek_to_start()?;
        }
        match self.sink {
            Some(ref sink) => {
                sink.play();
                Ok(())
            }
            None => Err(AudioError::Playback("no sink".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_clip_is_file_not_found() {
        let path = std::env::temp_dir().join("tumble-audio-missing-clip.mp3");
        let result = load_clip_bytes(&path);
        assert!(matches!(result, Err(AudioError::FileNotFound(_))));
    }

    #[test]
    fn test_garbage_clip_fails_to_decode() {
        let path = std::env::temp_dir().join(format!("tumble-audio-garbage-{}.wav", std::process::id()));
        std::fs::write(&path, b"definitely not audio").unwrap();

        let result = load_clip_bytes(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(AudioError::Decode(_))));
    }
}
