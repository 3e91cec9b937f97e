//! Proxy transforms

use serde::{Deserialize, Serialize};

/// World-space position, orientation and scale of a visual proxy
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World position
    pub position: [f32; 3],
    /// Orientation quaternion (x, y, z, w)
    pub rotation: [f32; 4],
    /// Scale factors
    pub scale: [f32; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, no rotation, unit scale
    pub const IDENTITY: Transform = Transform {
        position: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0, 1.0],
        scale: [1.0, 1.0, 1.0],
    };

    /// Create a new transform at a position
    pub fn from_position(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
            ..Self::IDENTITY
        }
    }

    /// Set scale
    pub fn with_scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = [x, y, z];
        self
    }

    /// Set the orientation to a rotation of `angle` radians about +X
    pub fn with_rotation_x(mut self, angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        self.rotation = [s, 0.0, 0.0, c];
        self
    }

    /// Copy a body pose, keeping the scale
    pub fn set_pose(&mut self, position: [f32; 3], rotation: [f32; 4]) {
        self.position = position;
        self.rotation = rotation;
    }

    /// Exact comparison against a body pose
    pub fn matches_pose(&self, position: [f32; 3], rotation: [f32; 4]) -> bool {
        self.position == position && self.rotation == rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_about_x() {
        let t = Transform::IDENTITY.with_rotation_x(-std::f32::consts::FRAC_PI_2);
        let half = std::f32::consts::FRAC_1_SQRT_2;
        assert!((t.rotation[0] + half).abs() < 1e-6);
        assert!((t.rotation[3] - half).abs() < 1e-6);
        assert_eq!(t.rotation[1], 0.0);
        assert_eq!(t.rotation[2], 0.0);
    }

    #[test]
    fn test_set_pose_keeps_scale() {
        let mut t = Transform::from_position(1.0, 2.0, 3.0).with_scale(1.0, 1.5, 2.0);
        t.set_pose([4.0, 5.0, 6.0], [0.0, 1.0, 0.0, 0.0]);
        assert!(t.matches_pose([4.0, 5.0, 6.0], [0.0, 1.0, 0.0, 0.0]));
        assert_eq!(t.scale, [1.0, 1.5, 2.0]);
    }
}
