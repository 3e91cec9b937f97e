//! Shape descriptors for spawned bodies

use crate::error::{Result, SimError};
use tumble_physics::{ColliderShape, MaterialId};
use tumble_scene::{Geometry, Transform};

/// Geometric kind and dimensions of a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// Box with full dimensions
    Box { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32 },
}

impl ShapeKind {
    /// Physics collider for this shape
    pub fn collider_shape(&self) -> ColliderShape {
        match *self {
            Self::Box {
                width,
                height,
                depth,
            } => ColliderShape::from_size(width, height, depth),
            Self::Sphere { radius } => ColliderShape::sphere(radius),
        }
    }

    /// Proxy geometry and the scale applied to it
    pub fn geometry(&self) -> (Geometry, [f32; 3]) {
        match *self {
            Self::Box {
                width,
                height,
                depth,
            } => (Geometry::Cube, [width, height, depth]),
            Self::Sphere { radius } => (Geometry::sphere(radius), [1.0, 1.0, 1.0]),
        }
    }

    fn validate(&self) -> Result<()> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let ok = match *self {
            Self::Box {
                width,
                height,
                depth,
            } => positive(width) && positive(height) && positive(depth),
            Self::Sphere { radius } => positive(radius),
        };
        if ok {
            Ok(())
        } else {
            Err(SimError::InvalidShape(format!("dimensions must be positive: {:?}", self)))
        }
    }
}

/// Parameters for one spawned object
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    /// Final world position
    pub position: [f32; 3],
    /// Total mass; zero makes the body static
    pub mass: f32,
    pub material: Option<MaterialId>,
}

impl ShapeDescriptor {
    /// Sphere of unit mass
    pub fn sphere(radius: f32, position: [f32; 3]) -> Result<Self> {
        Self::new(ShapeKind::Sphere { radius }, position)
    }

    /// Box of unit mass, from full dimensions
    pub fn cuboid(width: f32, height: f32, depth: f32, position: [f32; 3]) -> Result<Self> {
        Self::new(
            ShapeKind::Box {
                width,
                height,
                depth,
            },
            position,
        )
    }

    fn new(kind: ShapeKind, position: [f32; 3]) -> Result<Self> {
        let desc = Self {
            kind,
            position,
            mass: 1.0,
            material: None,
        };
        desc.validate()?;
        Ok(desc)
    }

    /// Set mass
    pub fn with_mass(mut self, mass: f32) -> Result<Self> {
        self.mass = mass;
        self.validate()?;
        Ok(self)
    }

    /// Set the surface material
    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = Some(material);
        self
    }

    /// Make the body static
    pub fn into_static(mut self) -> Self {
        self.mass = 0.0;
        self
    }

    /// Reject non-positive or non-finite dimensions, non-finite positions
    /// and negative mass
    pub fn validate(&self) -> Result<()> {
        self.kind.validate()?;
        if self.position.iter().any(|p| !p.is_finite()) {
            return Err(SimError::InvalidShape(format!(
                "position must be finite: {:?}",
                self.position
            )));
        }
        if !(self.mass.is_finite() && self.mass >= 0.0) {
            return Err(SimError::InvalidShape(format!(
                "mass must be non-negative: {}",
                self.mass
            )));
        }
        Ok(())
    }

    /// Proxy transform at the final position
    pub fn proxy_transform(&self) -> Transform {
        let (_, [sx, sy, sz]) = self.kind.geometry();
        let [x, y, z] = self.position;
        Transform::from_position(x, y, z).with_scale(sx, sy, sz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate_dimensions() {
        assert!(ShapeDescriptor::sphere(0.0, [0.0; 3]).is_err());
        assert!(ShapeDescriptor::sphere(-0.5, [0.0; 3]).is_err());
        assert!(ShapeDescriptor::sphere(f32::NAN, [0.0; 3]).is_err());
        assert!(ShapeDescriptor::cuboid(1.0, 0.0, 1.0, [0.0; 3]).is_err());
        assert!(ShapeDescriptor::cuboid(1.0, 1.0, 1.0, [f32::INFINITY, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_mass() {
        let desc = ShapeDescriptor::sphere(0.5, [0.0; 3]).unwrap();
        assert_eq!(desc.mass, 1.0);
        assert!(desc.clone().with_mass(-1.0).is_err());
        assert_eq!(desc.into_static().mass, 0.0);
    }

    #[test]
    fn test_box_proxy_is_scaled_unit_cube() {
        let desc = ShapeDescriptor::cuboid(1.0, 1.5, 2.0, [0.0, 3.0, 0.0]).unwrap();
        assert_eq!(desc.kind.geometry(), (Geometry::Cube, [1.0, 1.5, 2.0]));

        let t = desc.proxy_transform();
        assert_eq!(t.position, [0.0, 3.0, 0.0]);
        assert_eq!(t.scale, [1.0, 1.5, 2.0]);
        assert_eq!(desc.kind.collider_shape(), ColliderShape::cuboid(0.5, 0.75, 1.0));
    }
}
