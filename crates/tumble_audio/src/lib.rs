//! Tumble Audio - impact sound playback
//!
//! The simulation only ever asks a sound to set its volume, rewind and play.
//! [`ClipSound`] does that with rodio; [`SilentSound`] stands in when no
//! device or clip is available.
//!
//! # Example
//!
//! ```ignore
//! use tumble_audio::prelude::*;
//!
//! let output = AudioOutput::try_default()?;
//! let hit = share(output.load_clip("sounds/hit.mp3")?);
//!
//! let mut sound = hit.lock();
//! sound.set_volume(0.4);
//! sound.seek_to_start()?;
//! sound.play()?;
//! ```

pub mod error;
pub mod output;
pub mod sound;

pub mod prelude {
    pub use crate::error::{AudioError, Result};
    pub use crate::output::{load_clip_bytes, AudioOutput, ClipSound};
    pub use crate::sound::{share, PlayableSound, SharedSound, SilentSound};
}

pub use prelude::*;
