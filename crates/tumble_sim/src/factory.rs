//! Rigid body factory: creates paired body/proxy objects

use crate::error::Result;
use crate::registry::PairedObject;
use crate::shape::ShapeDescriptor;
use tumble_physics::{ColliderDesc, CollisionHandler, PhysicsWorld, RigidBodyDesc};
use tumble_scene::{SceneGraph, VisualProxy};

/// Creates a physics body and its visual proxy from a [`ShapeDescriptor`].
///
/// Bodies are first inserted at `(0, spawn_height, 0)` and then moved to
/// their final position, so the proxy and body agree once `create` returns.
#[derive(Debug, Clone, Copy)]
pub struct RigidBodyFactory {
    spawn_height: f32,
}

impl Default for RigidBodyFactory {
    fn default() -> Self {
        Self::new(3.0)
    }
}

impl RigidBodyFactory {
    pub fn new(spawn_height: f32) -> Self {
        Self { spawn_height }
    }

    /// Temporary position every body is created at
    pub fn spawn_position(&self) -> [f32; 3] {
        [0.0, self.spawn_height, 0.0]
    }

    /// Create a body and its proxy, registering `handler` for the body's collisions
    pub fn create(
        &self,
        desc: &ShapeDescriptor,
        world: &mut PhysicsWorld,
        scene: &mut SceneGraph,
        handler: Option<Box<dyn CollisionHandler>>,
    ) -> Result<PairedObject> {
        desc.validate()?;

        let [sx, sy, sz] = self.spawn_position();
        let body = world.create_body(
            RigidBodyDesc::dynamic()
                .with_mass(desc.mass)
                .with_position(sx, sy, sz),
            ColliderDesc::new(desc.kind.collider_shape()).with_material(desc.material),
        )?;

        let [x, y, z] = desc.position;
        if let Err(e) = world.set_body_position(body, x, y, z) {
            world.remove_body(body);
            return Err(e.into());
        }

        let (geometry, _) = desc.kind.geometry();
        let proxy = scene.add(VisualProxy::new(geometry, desc.proxy_transform()).casting_shadows());

        let collision_handler = match handler {
            Some(handler) => Some(world.add_collision_handler(body, handler)?),
            None => None,
        };

        log::debug!("Spawned {:?} at {:?}", desc.kind, desc.position);

        Ok(PairedObject {
            body,
            proxy,
            kind: desc.kind,
            collision_handler,
        })
    }
}
