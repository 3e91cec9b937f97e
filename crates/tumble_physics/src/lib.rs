//! Tumble Physics - rigid-body world on Rapier 3D
//!
//! Owns every simulated body, advances them with a fixed-timestep
//! accumulator, and reports newly started contacts to handlers
//! registered per body.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 PhysicsWorld                 │
//! │  ┌─────────────┐ ┌────────────┐ ┌──────────┐ │
//! │  │ RigidBodySet│ │ ColliderSet│ │ Handlers │ │
//! │  └─────────────┘ └────────────┘ └──────────┘ │
//! │  ┌────────────────────────────────────────┐  │
//! │  │  PhysicsPipeline + ContactMaterialHooks│  │
//! │  └────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────┘
//!                        │ CollisionEvent
//!                        ▼
//!              CollisionHandler (per body)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use tumble_physics::prelude::*;
//!
//! let mut world = PhysicsWorld::new(PhysicsConfig::default());
//! world.create_floor(None)?;
//!
//! let ball = world.create_body(
//!     RigidBodyDesc::dynamic().with_position(0.0, 3.0, 0.0),
//!     ColliderDesc::new(ColliderShape::sphere(0.5)),
//! )?;
//! world.add_collision_handler(ball, Box::new(|e: &CollisionEvent| {
//!     println!("hit at {}", e.impact_velocity);
//! }))?;
//!
//! world.step(1.0 / 60.0, frame_delta, 3);
//! ```

pub mod body;
pub mod collider;
pub mod config;
pub mod error;
pub mod events;
mod hooks;
pub mod material;
pub mod world;

pub mod prelude {
    //! Common imports for physics functionality
    pub use crate::body::{BodyHandle, BodyState, BodyTransform, RigidBodyDesc, RigidBodyType};
    pub use crate::collider::{ColliderDesc, ColliderHandle, ColliderShape};
    pub use crate::config::PhysicsConfig;
    pub use crate::error::{PhysicsError, Result};
    pub use crate::events::{CollisionEvent, CollisionHandler, HandlerToken};
    pub use crate::material::{ContactMaterialTable, ContactProperties, MaterialId, SurfaceMaterial};
    pub use crate::world::{PhysicsWorld, StepReport};
}

pub use prelude::*;
