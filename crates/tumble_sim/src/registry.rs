//! Registry of paired body/proxy objects

use crate::shape::ShapeKind;
use tumble_physics::{BodyHandle, HandlerToken, PhysicsWorld};
use tumble_scene::{ProxyId, SceneGraph};

/// A physics body and the proxy that mirrors it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairedObject {
    pub body: BodyHandle,
    pub proxy: ProxyId,
    pub kind: ShapeKind,
    /// Collision handler registered on the body, if any
    pub collision_handler: Option<HandlerToken>,
}

/// Result of copying body poses onto proxies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub synced: usize,
    /// Objects whose body or proxy no longer exists
    pub missing: usize,
}

/// Result of tearing every object down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetReport {
    /// Objects that were in the registry
    pub objects: usize,
    pub bodies_removed: usize,
    pub proxies_removed: usize,
    pub handlers_removed: usize,
}

/// Every object spawned since the last reset, in creation order
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    objects: Vec<PairedObject>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: PairedObject) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PairedObject> {
        self.objects.iter()
    }

    /// Copy each body's position and orientation onto its proxy
    pub fn sync_all(&self, world: &PhysicsWorld, scene: &mut SceneGraph) -> SyncReport {
        let mut report = SyncReport::default();
        for object in &self.objects {
            match (world.body_transform(object.body), scene.get_mut(object.proxy)) {
                (Ok(pose), Some(proxy)) => {
                    proxy.transform.set_pose(pose.position, pose.rotation);
                    report.synced += 1;
                }
                _ => report.missing += 1,
            }
        }
        if report.missing > 0 {
            log::trace!("{} objects missing during sync", report.missing);
        }
        report
    }

    /// Unregister each object's handler, remove its body and its proxy,
    /// then forget every object. Parts that are already gone are skipped.
    pub fn reset_all(&mut self, world: &mut PhysicsWorld, scene: &mut SceneGraph) -> ResetReport {
        let mut report = ResetReport {
            objects: self.objects.len(),
            ..Default::default()
        };

        for object in self.objects.drain(..) {
            if let Some(token) = object.collision_handler {
                if world.remove_collision_handler(token) {
                    report.handlers_removed += 1;
                }
            }
            if world.remove_body(object.body) {
                report.bodies_removed += 1;
            }
            if scene.remove(object.proxy).is_some() {
                report.proxies_removed += 1;
            } else {
                log::debug!("Proxy {:?} already removed", object.proxy);
            }
        }

        log::info!(
            "Reset {} objects ({} bodies, {} proxies, {} handlers removed)",
            report.objects,
            report.bodies_removed,
            report.proxies_removed,
            report.handlers_removed
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::RigidBodyFactory;
    use crate::shape::ShapeDescriptor;
    use tumble_physics::{CollisionEvent, PhysicsConfig};

    fn populated() -> (PhysicsWorld, SceneGraph, ObjectRegistry) {
        let mut world = PhysicsWorld::new(PhysicsConfig::default());
        let mut scene = SceneGraph::new();
        let mut registry = ObjectRegistry::new();
        let factory = RigidBodyFactory::default();

        for x in 0..3 {
            let desc = ShapeDescriptor::sphere(0.5, [x as f32 * 2.0, 3.0, 0.0]).unwrap();
            let object = factory
                .create(
                    &desc,
                    &mut world,
                    &mut scene,
                    Some(Box::new(|_: &CollisionEvent| {})),
                )
                .unwrap();
            registry.add(object);
        }
        (world, scene, registry)
    }

    #[test]
    fn test_sync_copies_poses() {
        let (mut world, mut scene, registry) = populated();
        for _ in 0..30 {
            world.step(1.0 / 60.0, 1.0 / 60.0, 3);
        }

        let report = registry.sync_all(&world, &mut scene);
        assert_eq!(report, SyncReport { synced: 3, missing: 0 });
        for object in registry.iter() {
            let pose = world.body_transform(object.body).unwrap();
            let proxy = scene.get(object.proxy).unwrap();
            assert!(proxy.transform.matches_pose(pose.position, pose.rotation));
            assert!(pose.position[1] < 3.0);
        }
    }

    #[test]
    fn test_reset_tears_everything_down() {
        let (mut world, mut scene, mut registry) = populated();

        let report = registry.reset_all(&mut world, &mut scene);
        assert_eq!(report.objects, 3);
        assert_eq!(report.bodies_removed, 3);
        assert_eq!(report.proxies_removed, 3);
        assert_eq!(report.handlers_removed, 3);

        assert!(registry.is_empty());
        assert_eq!(world.body_count(), 0);
        assert_eq!(world.total_handler_count(), 0);
        assert!(scene.is_empty());

        assert_eq!(registry.reset_all(&mut world, &mut scene).objects, 0);
    }

    #[test]
    fn test_reset_skips_parts_already_gone() {
        let (mut world, mut scene, mut registry) = populated();
        let first = *registry.iter().next().unwrap();
        world.remove_body(first.body);
        scene.remove(first.proxy);

        let report = registry.reset_all(&mut world, &mut scene);
        assert_eq!(report.objects, 3);
        assert_eq!(report.bodies_removed, 2);
        assert_eq!(report.proxies_removed, 2);
        assert_eq!(report.handlers_removed, 2);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_sync_counts_missing() {
        let (mut world, mut scene, registry) = populated();
        let first = *registry.iter().next().unwrap();
        world.remove_body(first.body);

        assert_eq!(
            registry.sync_all(&world, &mut scene),
            SyncReport { synced: 2, missing: 1 }
        );
    }
}
