//! Tumble - rigid bodies falling onto a floor, mirrored onto visual proxies
//!
//! Each frame the [`FrameStepper`] advances the physics world by the
//! measured frame delta, the [`ObjectRegistry`] copies every body pose onto
//! its proxy, and the scene goes to a presenter. Bodies carry an
//! [`ImpactFeedback`] handler that restarts the impact sound when a
//! collision is fast enough.
//!
//! ```text
//! FrameStepper ─► PhysicsWorld::step ─► ImpactFeedback ─► sound
//!       │
//!       └─► ObjectRegistry::sync_all ─► SceneGraph ─► Presenter
//! ```
//!
//! # Example
//!
//! ```ignore
//! use tumble_sim::prelude::*;
//!
//! let mut sim = Simulation::new(SimulationConfig::default(), share(SilentSound::new()))?;
//! sim.populate_default_scene()?;
//! sim.apply(DebugAction::AddSphere)?;
//! loop {
//!     sim.frame(&mut presenter);
//! }
//! ```

pub mod config;
pub mod debug;
pub mod error;
pub mod factory;
pub mod feedback;
pub mod frame_loop;
pub mod log_presenter;
pub mod registry;
pub mod session;
pub mod shape;
pub mod stepper;

pub mod prelude {
    pub use crate::config::{AudioConfig, ConfigError, FrameConfig, SimulationConfig, SpawnConfig};
    pub use crate::debug::{ControlMessage, DebugAction, ParseCommandError};
    pub use crate::error::{Result, SimError};
    pub use crate::factory::RigidBodyFactory;
    pub use crate::feedback::{ImpactFeedback, ImpactOutcome};
    pub use crate::frame_loop::FrameLoop;
    pub use crate::log_presenter::LogPresenter;
    pub use crate::registry::{ObjectRegistry, PairedObject, ResetReport, SyncReport};
    pub use crate::session::Simulation;
    pub use crate::shape::{ShapeDescriptor, ShapeKind};
    pub use crate::stepper::{FrameClock, FrameReport, FrameStepper, ManualClock, MonotonicClock};

    pub use tumble_audio::{share, PlayableSound, SharedSound, SilentSound};
    pub use tumble_physics::{CollisionEvent, PhysicsConfig, PhysicsWorld};
    pub use tumble_scene::{Presenter, SceneGraph};
}

pub use prelude::*;
