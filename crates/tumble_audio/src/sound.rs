//! Playable sound abstraction

use crate::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// A single audio resource that can be restarted and played
pub trait PlayableSound: Send {
    /// Set playback volume (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32);

    /// Rewind to time zero, cutting off any playback in progress
    fn seek_to_start(&mut self) -> Result<()>;

    /// Start playback from the current position
    fn play(&mut self) -> Result<()>;
}

/// A sound shared between every collision handler that triggers it
pub type SharedSound = Arc<Mutex<dyn PlayableSound>>;

/// Wrap a sound for sharing
pub fn share<S: PlayableSound + 'static>(sound: S) -> SharedSound {
    Arc::new(Mutex::new(sound))
}

/// Sound that accepts every call and plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSound {
    volume: f32,
}

impl SilentSound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last volume that was set
    pub fn volume(&self) -> f32 {
        self.volume
    }
}

impl PlayableSound for SilentSound {
    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn seek_to_start(&mut self) -> Result<()> {
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        log::trace!("Silent sound played at volume {:.2}", self.volume);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_sound_accepts_everything() {
        let mut sound = SilentSound::new();
        sound.set_volume(1.7);
        assert_eq!(sound.volume(), 1.0);
        assert!(sound.seek_to_start().is_ok());
        assert!(sound.play().is_ok());
    }

    #[test]
    fn test_shared_sound_is_one_resource() {
        let shared = share(SilentSound::new());
        let other = shared.clone();

        shared.lock().set_volume(0.25);
        assert!(other.lock().play().is_ok());
        assert_eq!(Arc::strong_count(&shared), 2);
    }
}
