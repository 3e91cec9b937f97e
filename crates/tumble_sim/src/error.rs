//! Simulation error types

use crate::config::ConfigError;
use thiserror::Error;
use tumble_physics::PhysicsError;

/// Simulation errors
#[derive(Debug, Error)]
pub enum SimError {
    /// Shape parameters rejected at construction
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Physics world failure
    #[error(transparent)]
    Physics(#[from] PhysicsError),

    /// Configuration failure
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimError>;
