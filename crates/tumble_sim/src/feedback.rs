//! Collision feedback: impact sounds gated by impact speed

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tumble_audio::SharedSound;
use tumble_physics::{CollisionEvent, CollisionHandler};

/// Result of evaluating one impact
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImpactOutcome {
    /// The sound was restarted at this volume
    Triggered { volume: f32 },
    /// Impact too soft
    Ignored,
}

/// Lifecycle of a feedback handler while it is registered on a body.
/// Every evaluation ends back in `Registered`; removing the handler from
/// the world drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeedbackState {
    Registered,
    Evaluating,
    Triggered,
    Ignored,
}

/// Per-body collision handler that restarts the shared impact sound at a
/// random volume when an impact is strictly faster than the threshold
pub struct ImpactFeedback {
    sound: SharedSound,
    threshold: f32,
    rng: StdRng,
    state: FeedbackState,
}

impl ImpactFeedback {
    pub fn new(sound: SharedSound, threshold: f32, seed: u64) -> Self {
        Self {
            sound,
            threshold,
            rng: StdRng::seed_from_u64(seed),
            state: FeedbackState::Registered,
        }
    }

    /// Speed an impact must exceed to be heard
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Evaluate one impact, playing the sound if it is loud enough
    pub fn evaluate(&mut self, impact_velocity: f32) -> ImpactOutcome {
        self.state = FeedbackState::Evaluating;

        let outcome = if impact_velocity.abs() > self.threshold {
            let volume = self.rng.random::<f32>();
            self.trigger(volume);
            self.state = FeedbackState::Triggered;
            ImpactOutcome::Triggered { volume }
        } else {
            self.state = FeedbackState::Ignored;
            ImpactOutcome::Ignored
        };

        log::trace!("Impact feedback {:?}", self.state);
        self.state = FeedbackState::Registered;
        outcome
    }

    /// Playback failures are logged and absorbed
    fn trigger(&self, volume: f32) {
        let mut sound = self.sound.lock();
        sound.set_volume(volume);
        if let Err(e) = sound.seek_to_start() {
            log::warn!("Impact sound could not be rewound: {}", e);
            return;
        }
        if let Err(e) = sound.play() {
            log::warn!("Impact sound failed to play: {}", e);
        }
    }
}

impl CollisionHandler for ImpactFeedback {
    fn on_collision(&mut self, event: &CollisionEvent) {
        self.evaluate(event.impact_velocity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use tumble_audio::{share, AudioError, PlayableSound};

    #[derive(Default)]
    struct Counts {
        volumes: Vec<f32>,
        seeks: usize,
        plays: usize,
    }

    struct CountingSound(Arc<Mutex<Counts>>);

    impl PlayableSound for CountingSound {
        fn set_volume(&mut self, volume: f32) {
            self.0.lock().volumes.push(volume);
        }

        fn seek_to_start(&mut self) -> tumble_audio::Result<()> {
            self.0.lock().seeks += 1;
            Ok(())
        }

        fn play(&mut self) -> tumble_audio::Result<()> {
            self.0.lock().plays += 1;
            Ok(())
        }
    }

    struct BrokenSound;

    impl PlayableSound for BrokenSound {
        fn set_volume(&mut self, _volume: f32) {}

        fn seek_to_start(&mut self) -> tumble_audio::Result<()> {
            Err(AudioError::Playback("unplugged".to_string()))
        }

        fn play(&mut self) -> tumble_audio::Result<()> {
            Err(AudioError::Playback("unplugged".to_string()))
        }
    }

    fn counting() -> (ImpactFeedback, Arc<Mutex<Counts>>) {
        let counts = Arc::new(Mutex::new(Counts::default()));
        let sound = share(CountingSound(counts.clone()));
        (ImpactFeedback::new(sound, 1.5, 7), counts)
    }

    #[test]
    fn test_threshold_is_strict() {
        let (mut feedback, counts) = counting();
        assert_eq!(feedback.evaluate(1.5), ImpactOutcome::Ignored);
        assert_eq!(counts.lock().plays, 0);

        match feedback.evaluate(1.6) {
            ImpactOutcome::Triggered { volume } => assert!((0.0..1.0).contains(&volume)),
            ImpactOutcome::Ignored => panic!("1.6 should trigger"),
        }

        let counts = counts.lock();
        assert_eq!(counts.seeks, 1);
        assert_eq!(counts.plays, 1);
        assert_eq!(counts.volumes.len(), 1);
    }

    #[test]
    fn test_magnitude_is_compared() {
        let (mut feedback, _) = counting();
        assert!(matches!(feedback.evaluate(-3.0), ImpactOutcome::Triggered { .. }));
        assert_eq!(feedback.evaluate(f32::NAN), ImpactOutcome::Ignored);
    }

    #[test]
    fn test_repeated_impacts_restart_sound() {
        let (mut feedback, counts) = counting();
        for _ in 0..5 {
            feedback.evaluate(4.0);
        }
        let counts = counts.lock();
        assert_eq!(counts.seeks, 5);
        assert_eq!(counts.plays, 5);
        assert!(counts.volumes.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_same_seed_same_volumes() {
        let (mut a, _) = counting();
        let (mut b, _) = counting();
        for v in [2.0, 3.0, 10.0] {
            assert_eq!(a.evaluate(v), b.evaluate(v));
        }
    }

    #[test]
    fn test_playback_failure_is_absorbed() {
        let mut feedback = ImpactFeedback::new(share(BrokenSound), 1.5, 1);
        assert!(matches!(feedback.evaluate(9.0), ImpactOutcome::Triggered { .. }));
        assert_eq!(feedback.state, FeedbackState::Registered);
    }

    #[test]
    fn test_state_returns_to_registered() {
        let (mut feedback, counts) = counting();
        assert_eq!(feedback.state, FeedbackState::Registered);

        assert!(matches!(feedback.evaluate(2.0), ImpactOutcome::Triggered { .. }));
        assert_eq!(feedback.state, FeedbackState::Registered);

        assert_eq!(feedback.evaluate(0.5), ImpactOutcome::Ignored);
        assert_eq!(feedback.state, FeedbackState::Registered);

        assert!(matches!(feedback.evaluate(3.0), ImpactOutcome::Triggered { .. }));
        assert_eq!(feedback.state, FeedbackState::Registered);
        assert_eq!(counts.lock().plays, 2);
    }
}
