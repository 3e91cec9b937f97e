//! Frame stepping: advance physics, sync proxies, present

use crate::registry::ObjectRegistry;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tumble_physics::PhysicsWorld;
use tumble_scene::{Presenter, SceneGraph};

/// Source of elapsed time for the stepper
pub trait FrameClock {
    /// Seconds since the clock started
    fn elapsed_seconds(&mut self) -> f64;
}

/// Wall clock
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for MonotonicClock {
    fn elapsed_seconds(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Clock advanced by hand. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::SeqCst))
    }

    pub fn set(&self, seconds: f64) {
        self.bits.store(seconds.to_bits(), Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: f64) {
        self.set(self.now() + seconds);
    }
}

impl FrameClock for ManualClock {
    fn elapsed_seconds(&mut self) -> f64 {
        self.now()
    }
}

/// What one frame did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Frame number, starting at 1
    pub frame: u64,
    /// Clock time of this frame
    pub elapsed: f64,
    /// Time since the previous frame (zero on the first)
    pub delta: f64,
    /// Internal physics steps run
    pub substeps: u32,
    /// Collision events dispatched
    pub collisions: usize,
    /// Proxies updated
    pub synced: usize,
}

/// Drives one frame: step the world by the measured delta, copy body poses
/// onto proxies, hand the scene to the presenter.
///
/// Deltas are handed to the world as measured; the world owns clamping.
pub struct FrameStepper {
    clock: Box<dyn FrameClock>,
    timestep: f32,
    max_substeps: u32,
    previous: Option<f64>,
    frame: u64,
}

impl FrameStepper {
    pub fn new(clock: Box<dyn FrameClock>, timestep: f32, max_substeps: u32) -> Self {
        Self {
            clock,
            timestep,
            max_substeps,
            previous: None,
            frame: 0,
        }
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn tick(
        &mut self,
        world: &mut PhysicsWorld,
        registry: &ObjectRegistry,
        scene: &mut SceneGraph,
        presenter: &mut dyn Presenter,
    ) -> FrameReport {
        let elapsed = self.clock.elapsed_seconds();
        let delta = self.previous.map_or(0.0, |previous| elapsed - previous);
        self.previous = Some(elapsed);

        let step = world.step(self.timestep, delta as f32, self.max_substeps);
        let sync = registry.sync_all(world, scene);

        self.frame += 1;
        presenter.present(self.frame, scene);

        FrameReport {
            frame: self.frame,
            elapsed,
            delta,
            substeps: step.substeps,
            collisions: step.collisions,
            synced: sync.synced,
        }
    }
}
