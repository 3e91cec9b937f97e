//! Physics configuration

use serde::{Deserialize, Serialize};

/// Physics world configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity vector (default: -0.92 in Y)
    pub gravity: [f32; 3],

    /// Fixed timestep of one internal step
    pub timestep: f32,

    /// Maximum number of internal steps per frame
    pub max_substeps: u32,

    /// Friction of the default contact material
    pub default_friction: f32,

    /// Restitution (bounciness) of the default contact material
    pub default_restitution: f32,

    /// Solver iterations for velocity
    pub velocity_iterations: usize,

    /// Enable sleeping for inactive bodies
    pub sleeping_enabled: bool,

    /// Linear velocity threshold for sleeping
    pub sleep_linear_threshold: f32,

    /// Angular velocity threshold for sleeping
    pub sleep_angular_threshold: f32,

    /// Seconds a body must stay below the thresholds before it sleeps
    pub time_until_sleep: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -0.92, 0.0],
            timestep: 1.0 / 60.0,
            max_substeps: 3,
            default_friction: 0.1,
            default_restitution: 0.7,
            velocity_iterations: 4,
            sleeping_enabled: true,
            sleep_linear_threshold: 0.1,
            sleep_angular_threshold: 0.1,
            time_until_sleep: 1.0,
        }
    }
}

impl PhysicsConfig {
    /// Set gravity
    pub fn with_gravity(mut self, x: f32, y: f32, z: f32) -> Self {
        self.gravity = [x, y, z];
        self
    }

    /// Set timestep
    pub fn with_timestep(mut self, timestep: f32) -> Self {
        self.timestep = timestep;
        self
    }

    /// Set the substep cap
    pub fn with_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps;
        self
    }

    /// Check the values the world cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(crate::PhysicsError::InvalidConfig(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }
        if self.max_substeps == 0 {
            return Err(crate::PhysicsError::InvalidConfig(
                "max_substeps must be at least 1".to_string(),
            ));
        }
        if self.velocity_iterations == 0 {
            return Err(crate::PhysicsError::InvalidConfig(
                "velocity_iterations must be at least 1".to_string(),
            ));
        }
        if self.gravity.iter().any(|g| !g.is_finite()) {
            return Err(crate::PhysicsError::InvalidConfig(format!(
                "gravity must be finite, got {:?}",
                self.gravity
            )));
        }
        Ok(())
    }
}
