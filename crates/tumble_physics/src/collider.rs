//! Collider shapes and descriptions

use crate::material::MaterialId;
use rapier3d::prelude as rapier;
use serde::{Deserialize, Serialize};

/// Handle to a collider in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColliderHandle(pub(crate) rapier::ColliderHandle);

impl ColliderHandle {
    /// Get the raw Rapier handle
    pub fn raw(&self) -> rapier::ColliderHandle {
        self.0
    }
}

/// Collision shape type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    /// Sphere with radius
    Sphere { radius: f32 },
    /// Box with half-extents
    Box { half_extents: [f32; 3] },
    /// Infinite plane; everything below it along `normal` is solid
    HalfSpace { normal: [f32; 3] },
}

impl ColliderShape {
    /// Create a sphere shape
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    /// Create a box shape from half-extents
    pub fn cuboid(hx: f32, hy: f32, hz: f32) -> Self {
        Self::Box {
            half_extents: [hx, hy, hz],
        }
    }

    /// Create a box shape from full size
    pub fn from_size(width: f32, height: f32, depth: f32) -> Self {
        Self::Box {
            half_extents: [width * 0.5, height * 0.5, depth * 0.5],
        }
    }

    /// Ground plane facing +Y
    pub fn ground() -> Self {
        Self::HalfSpace {
            normal: [0.0, 1.0, 0.0],
        }
    }

    /// Reject degenerate shapes
    pub fn validate(&self) -> crate::Result<()> {
        let ok = match self {
            Self::Sphere { radius } => radius.is_finite() && *radius > 0.0,
            Self::Box { half_extents } => half_extents.iter().all(|h| h.is_finite() && *h > 0.0),
            Self::HalfSpace { normal } => {
                let len2 = normal.iter().map(|n| n * n).sum::<f32>();
                len2.is_finite() && len2 > f32::EPSILON
            }
        };
        if ok {
            Ok(())
        } else {
            Err(crate::PhysicsError::ShapeCreationFailed(format!("{:?}", self)))
        }
    }

    /// Build a Rapier shared shape
    pub(crate) fn to_rapier(&self) -> rapier::SharedShape {
        match self {
            Self::Sphere { radius } => rapier::SharedShape::ball(*radius),
            Self::Box { half_extents } => {
                rapier::SharedShape::cuboid(half_extents[0], half_extents[1], half_extents[2])
            }
            Self::HalfSpace { normal } => {
                let n = rapier::Vector::new(normal[0], normal[1], normal[2]);
                rapier::SharedShape::halfspace(rapier::UnitVector::new_normalize(n))
            }
        }
    }
}

/// Description for creating a collider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColliderDesc {
    /// Collision shape
    pub shape: ColliderShape,
    /// Surface material (None = world default contact material)
    pub material: Option<MaterialId>,
}

impl ColliderDesc {
    /// Create a new collider description with a shape
    pub fn new(shape: ColliderShape) -> Self {
        Self {
            shape,
            material: None,
        }
    }

    /// Set material
    pub fn with_material(mut self, material: Option<MaterialId>) -> Self {
        self.material = material;
        self
    }

    /// Build a Rapier collider builder. `mass` is the total mass for
    /// dynamic parents, `None` for static ones.
    pub(crate) fn to_rapier_builder(
        &self,
        mass: Option<f32>,
        friction: f32,
        restitution: f32,
        user_data: u128,
    ) -> rapier::ColliderBuilder {
        let mut builder = rapier::ColliderBuilder::new(self.shape.to_rapier())
            .friction(friction)
            .restitution(restitution)
            .active_hooks(rapier::ActiveHooks::MODIFY_SOLVER_CONTACTS)
            .active_events(rapier::ActiveEvents::COLLISION_EVENTS)
            .user_data(user_data);

        if let Some(mass) = mass {
            builder = builder.mass(mass);
        }

        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_size_halves_dimensions() {
        assert_eq!(
            ColliderShape::from_size(1.0, 1.5, 2.0),
            ColliderShape::cuboid(0.5, 0.75, 1.0)
        );
    }

    #[test]
    fn test_validate_rejects_degenerate_shapes() {
        assert!(ColliderShape::sphere(0.0).validate().is_err());
        assert!(ColliderShape::sphere(-1.0).validate().is_err());
        assert!(ColliderShape::cuboid(0.5, f32::NAN, 0.5).validate().is_err());
        assert!(ColliderShape::HalfSpace { normal: [0.0; 3] }.validate().is_err());
        assert!(ColliderShape::sphere(0.5).validate().is_ok());
        assert!(ColliderShape::ground().validate().is_ok());
    }
}
