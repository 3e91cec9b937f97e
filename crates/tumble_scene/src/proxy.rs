//! Visual proxies: the renderable counterpart of a body

use crate::transform::Transform;
use serde::{Deserialize, Serialize};

/// Renderable geometry of a proxy
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Shared 1x1x1 box, sized through the transform scale
    Cube,
    /// UV sphere
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    /// Flat plane in its local XY plane
    Plane { width: f32, height: f32 },
}

impl Geometry {
    /// Sphere with the default 20x20 tessellation
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere {
            radius,
            width_segments: 20,
            height_segments: 20,
        }
    }

    /// Plane geometry
    pub fn plane(width: f32, height: f32) -> Self {
        Self::Plane { width, height }
    }
}

/// Surface appearance parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLook {
    /// Base color (RGB)
    pub color: [f32; 3],
    /// Metallic factor
    pub metalness: f32,
    /// Roughness factor
    pub roughness: f32,
    /// Strength of the environment reflection
    pub env_map_intensity: f32,
}

impl Default for SurfaceLook {
    fn default() -> Self {
        Self::standard()
    }
}

impl SurfaceLook {
    /// Look shared by every spawned body
    pub fn standard() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            metalness: 0.3,
            roughness: 0.4,
            env_map_intensity: 0.5,
        }
    }

    /// Grey floor (#777777)
    pub fn floor() -> Self {
        Self {
            color: Self::rgb_hex(0x777777),
            ..Self::standard()
        }
    }

    /// Convert a 0xRRGGBB color
    pub fn rgb_hex(hex: u32) -> [f32; 3] {
        [
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
        ]
    }
}

/// A renderable object mirrored from a physics body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualProxy {
    pub transform: Transform,
    pub geometry: Geometry,
    pub material: SurfaceLook,
    /// Whether this proxy casts shadows
    pub cast_shadow: bool,
    /// Whether this proxy receives shadows
    pub receive_shadow: bool,
}

impl VisualProxy {
    /// Create a proxy with the standard look, casting no shadows
    pub fn new(geometry: Geometry, transform: Transform) -> Self {
        Self {
            transform,
            geometry,
            material: SurfaceLook::standard(),
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    /// Set the surface look
    pub fn with_material(mut self, material: SurfaceLook) -> Self {
        self.material = material;
        self
    }

    /// Enable shadow casting
    pub fn casting_shadows(mut self) -> Self {
        self.cast_shadow = true;
        self
    }

    /// Enable shadow receiving
    pub fn receiving_shadows(mut self) -> Self {
        self.receive_shadow = true;
        self
    }

    /// The 10x10 grey floor plane, laid flat
    pub fn floor() -> Self {
        Self::new(
            Geometry::plane(10.0, 10.0),
            Transform::IDENTITY.with_rotation_x(-std::f32::consts::FRAC_PI_2),
        )
        .with_material(SurfaceLook::floor())
        .receiving_shadows()
    }
}
