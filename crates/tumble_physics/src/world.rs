//! Physics world - main simulation container

use crate::body::{quat_to_array, BodyHandle, BodyState, BodyTransform, RigidBodyDesc, RigidBodyType};
use crate::collider::{ColliderDesc, ColliderHandle, ColliderShape};
use crate::config::PhysicsConfig;
use crate::error::{PhysicsError, Result};
use crate::events::{ChannelEventCollector, CollisionEvent, CollisionHandler, HandlerTable, HandlerToken};
use crate::hooks::{encode_material, ContactMaterialHooks};
use crate::material::{ContactMaterialTable, ContactProperties, MaterialId};
use rapier3d::prelude as rapier;
use std::collections::HashMap;
use std::num::NonZeroUsize;

/// Outcome of one call to [`PhysicsWorld::step`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    /// Internal fixed steps performed
    pub substeps: u32,
    /// Collision events dispatched during this call
    pub collisions: usize,
    /// Accumulated time discarded because the substep cap was reached
    pub dropped_time: f32,
}

/// Velocities of a body captured before an internal step
#[derive(Debug, Clone, Copy)]
struct PreStepVelocity {
    linvel: rapier::Vector<f32>,
    angvel: rapier::Vector<f32>,
    com: rapier::Point<f32>,
}

impl PreStepVelocity {
    fn at_point(&self, point: &rapier::Point<f32>) -> rapier::Vector<f32> {
        self.linvel + self.angvel.cross(&(point - self.com))
    }
}

/// The main physics world containing all simulation state
pub struct PhysicsWorld {
    /// Configuration
    config: PhysicsConfig,

    /// Rapier physics pipeline
    pipeline: rapier::PhysicsPipeline,

    /// Gravity
    gravity: rapier::Vector<f32>,

    /// Integration parameters
    integration_params: rapier::IntegrationParameters,

    /// Island manager
    islands: rapier::IslandManager,

    /// Broad phase
    broad_phase: rapier::DefaultBroadPhase,

    /// Narrow phase
    narrow_phase: rapier::NarrowPhase,

    /// Impulse joint set
    impulse_joints: rapier::ImpulseJointSet,

    /// Multibody joint set
    multibody_joints: rapier::MultibodyJointSet,

    /// CCD solver
    ccd_solver: rapier::CCDSolver,

    /// Rigid body set
    bodies: rapier::RigidBodySet,

    /// Collider set
    colliders: rapier::ColliderSet,

    /// Contact properties per material pair
    materials: ContactMaterialTable,

    /// Per-body collision handlers
    handlers: HandlerTable,

    /// Events dispatched by the last call to `step`
    last_events: Vec<CollisionEvent>,

    /// The static ground body, if one was created
    floor: Option<BodyHandle>,

    /// Accumulated time for fixed timestep
    accumulated_time: f32,
}

impl PhysicsWorld {
    /// Create a new physics world
    pub fn new(config: PhysicsConfig) -> Self {
        let gravity = rapier::Vector::new(config.gravity[0], config.gravity[1], config.gravity[2]);

        let mut integration_params = rapier::IntegrationParameters::default();
        integration_params.dt = config.timestep;
        integration_params.num_solver_iterations =
            NonZeroUsize::new(config.velocity_iterations).unwrap_or(NonZeroUsize::MIN);

        let materials = ContactMaterialTable::new(ContactProperties::new(
            config.default_friction,
            config.default_restitution,
        ));

        log::info!(
            "Physics world created: gravity {:?}, timestep {:.4}, substeps {}",
            config.gravity,
            config.timestep,
            config.max_substeps
        );

        Self {
            config,
            pipeline: rapier::PhysicsPipeline::new(),
            gravity,
            integration_params,
            islands: rapier::IslandManager::new(),
            broad_phase: rapier::DefaultBroadPhase::new(),
            narrow_phase: rapier::NarrowPhase::new(),
            impulse_joints: rapier::ImpulseJointSet::new(),
            multibody_joints: rapier::MultibodyJointSet::new(),
            ccd_solver: rapier::CCDSolver::new(),
            bodies: rapier::RigidBodySet::new(),
            colliders: rapier::ColliderSet::new(),
            materials,
            handlers: HandlerTable::default(),
            last_events: Vec::new(),
            floor: None,
            accumulated_time: 0.0,
        }
    }

    /// Create a world after validating the configuration
    pub fn try_new(config: PhysicsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Get the physics configuration
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Get gravity
    pub fn gravity(&self) -> [f32; 3] {
        [self.gravity.x, self.gravity.y, self.gravity.z]
    }

    // ==================== Materials ====================

    /// Register a surface material
    pub fn register_material(&mut self, name: impl Into<String>) -> MaterialId {
        self.materials.register(name)
    }

    /// Set the contact properties used between two materials
    pub fn add_contact_material(&mut self, a: MaterialId, b: MaterialId, props: ContactProperties) {
        self.materials.insert_pair(a, b, props);
    }

    /// Replace the properties used for unknown pairs
    pub fn set_default_contact_material(&mut self, props: ContactProperties) {
        self.materials.set_default(props);
    }

    /// Resolve the contact properties between two materials
    pub fn contact_properties(&self, a: Option<MaterialId>, b: Option<MaterialId>) -> ContactProperties {
        self.materials.resolve(a, b)
    }

    /// Material table
    pub fn materials(&self) -> &ContactMaterialTable {
        &self.materials
    }

    // ==================== Rigid Bodies ====================

    /// Create the static ground plane (normal +Y through the origin)
    pub fn create_floor(&mut self, material: Option<MaterialId>) -> Result<BodyHandle> {
        let handle = self.create_body(
            RigidBodyDesc::fixed(),
            ColliderDesc::new(ColliderShape::ground()).with_material(material),
        )?;
        self.floor = Some(handle);
        Ok(handle)
    }

    /// The ground body created by [`create_floor`](Self::create_floor)
    pub fn floor(&self) -> Option<BodyHandle> {
        self.floor
    }

    /// Create a rigid body with a single collider
    pub fn create_body(&mut self, desc: RigidBodyDesc, collider: ColliderDesc) -> Result<BodyHandle> {
        collider.shape.validate()?;
        if !(desc.mass.is_finite() && desc.mass >= 0.0) {
            return Err(PhysicsError::ShapeCreationFailed(format!(
                "mass must be finite and non-negative, got {}",
                desc.mass
            )));
        }
        if desc.position.iter().any(|p| !p.is_finite()) {
            return Err(PhysicsError::ShapeCreationFailed(format!(
                "position must be finite, got {:?}",
                desc.position
            )));
        }

        let dynamic = desc.body_type == RigidBodyType::Dynamic && desc.mass > 0.0;
        let desc = RigidBodyDesc {
            body_type: if dynamic {
                RigidBodyType::Dynamic
            } else {
                RigidBodyType::Static
            },
            can_sleep: desc.can_sleep && self.config.sleeping_enabled,
            ..desc
        };
        let builder = desc.to_rapier_builder();

        let handle = self.bodies.insert(builder);
        if let Some(body) = self.bodies.get_mut(handle) {
            let activation = body.activation_mut();
            activation.normalized_linear_threshold = self.config.sleep_linear_threshold;
            activation.angular_threshold = self.config.sleep_angular_threshold;
            activation.time_until_sleep = self.config.time_until_sleep;
        }

        let props = self.materials.resolve(collider.material, collider.material);
        let collider_builder = collider.to_rapier_builder(
            dynamic.then_some(desc.mass),
            props.friction,
            props.restitution,
            encode_material(collider.material),
        );
        self.colliders
            .insert_with_parent(collider_builder, handle, &mut self.bodies);

        log::debug!(
            "Created {} body {:?} at {:?}",
            if dynamic { "dynamic" } else { "static" },
            handle,
            desc.position
        );

        Ok(BodyHandle(handle))
    }

    /// Remove a rigid body with its colliders and collision handlers.
    /// Returns false if the body was already gone.
    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        let dropped_handlers = self.handlers.remove_body(handle);

        let removed = self
            .bodies
            .remove(
                handle.0,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true, // Remove attached colliders
            )
            .is_some();

        if self.floor == Some(handle) {
            self.floor = None;
        }

        if removed {
            log::debug!("Removed body {:?} ({} handlers dropped)", handle, dropped_handlers);
        } else {
            log::debug!("Body {:?} already removed", handle);
        }
        removed
    }

    /// The collider attached to a body
    pub fn body_collider(&self, handle: BodyHandle) -> Option<ColliderHandle> {
        self.bodies
            .get(handle.0)
            .and_then(|b| b.colliders().first().copied())
            .map(ColliderHandle)
    }

    /// Check if a body is still in the world
    pub fn contains_body(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(handle.0)
    }

    /// Get rigid body position
    pub fn body_position(&self, handle: BodyHandle) -> Result<[f32; 3]> {
        self.bodies
            .get(handle.0)
            .map(|b| {
                let pos = b.translation();
                [pos.x, pos.y, pos.z]
            })
            .ok_or(PhysicsError::BodyNotFound(handle))
    }

    /// Set rigid body position, waking it up
    pub fn set_body_position(&mut self, handle: BodyHandle, x: f32, y: f32, z: f32) -> Result<()> {
        self.bodies
            .get_mut(handle.0)
            .map(|b| b.set_translation(rapier::Vector::new(x, y, z), true))
            .ok_or(PhysicsError::BodyNotFound(handle))
    }

    /// Get rigid body rotation (quaternion)
    pub fn body_rotation(&self, handle: BodyHandle) -> Result<[f32; 4]> {
        self.bodies
            .get(handle.0)
            .map(|b| quat_to_array(b.rotation()))
            .ok_or(PhysicsError::BodyNotFound(handle))
    }

    /// Get position and rotation together
    pub fn body_transform(&self, handle: BodyHandle) -> Result<BodyTransform> {
        self.bodies
            .get(handle.0)
            .map(|b| {
                let pos = b.translation();
                BodyTransform {
                    position: [pos.x, pos.y, pos.z],
                    rotation: quat_to_array(b.rotation()),
                }
            })
            .ok_or(PhysicsError::BodyNotFound(handle))
    }

    /// Get the full observable state of a body
    pub fn body_state(&self, handle: BodyHandle) -> Result<BodyState> {
        self.bodies
            .get(handle.0)
            .map(|b| {
                let pos = b.translation();
                let vel = b.linvel();
                let fixed = b.is_fixed();
                BodyState {
                    position: [pos.x, pos.y, pos.z],
                    rotation: quat_to_array(b.rotation()),
                    linear_velocity: [vel.x, vel.y, vel.z],
                    mass: if fixed { 0.0 } else { b.mass() },
                    sleeping: b.is_sleeping(),
                    body_type: if fixed {
                        RigidBodyType::Static
                    } else {
                        RigidBodyType::Dynamic
                    },
                }
            })
            .ok_or(PhysicsError::BodyNotFound(handle))
    }

    /// Check if a body is sleeping
    pub fn is_body_sleeping(&self, handle: BodyHandle) -> Result<bool> {
        self.bodies
            .get(handle.0)
            .map(|b| b.is_sleeping())
            .ok_or(PhysicsError::BodyNotFound(handle))
    }

    // ==================== Collision handlers ====================

    /// Register a handler for collisions involving `body`
    pub fn add_collision_handler(
        &mut self,
        body: BodyHandle,
        handler: Box<dyn CollisionHandler>,
    ) -> Result<HandlerToken> {
        if !self.bodies.contains(body.0) {
            return Err(PhysicsError::BodyNotFound(body));
        }
        Ok(self.handlers.insert(body, handler))
    }

    /// Unregister a handler. Returns false if it was already gone.
    pub fn remove_collision_handler(&mut self, token: HandlerToken) -> bool {
        self.handlers.remove(token)
    }

    /// Number of handlers registered on a body
    pub fn handler_count(&self, body: BodyHandle) -> usize {
        self.handlers.count(body)
    }

    /// Number of handlers registered on all bodies
    pub fn total_handler_count(&self) -> usize {
        self.handlers.total()
    }

    // ==================== Simulation ====================

    /// Advance the simulation by `elapsed_delta` seconds of wall time,
    /// in internal steps of `fixed_timestep`, at most `max_substeps` of them.
    ///
    /// Non-finite deltas count as zero, negative deltas can only drain the
    /// accumulator down to zero, and time beyond the substep cap is dropped.
    pub fn step(&mut self, fixed_timestep: f32, elapsed_delta: f32, max_substeps: u32) -> StepReport {
        self.last_events.clear();

        if !(fixed_timestep.is_finite() && fixed_timestep > 0.0) {
            log::warn!("Ignoring step with non-positive timestep {}", fixed_timestep);
            return StepReport::default();
        }

        let delta = if elapsed_delta.is_finite() {
            elapsed_delta
        } else {
            log::warn!("Non-finite frame delta {} treated as zero", elapsed_delta);
            0.0
        };

        self.accumulated_time = (self.accumulated_time + delta).max(0.0);
        self.integration_params.dt = fixed_timestep;

        let mut substeps = 0;
        while self.accumulated_time >= fixed_timestep && substeps < max_substeps {
            self.step_internal();
            self.accumulated_time -= fixed_timestep;
            substeps += 1;
        }

        let mut dropped_time = 0.0;
        if self.accumulated_time >= fixed_timestep {
            let kept = self.accumulated_time % fixed_timestep;
            dropped_time = self.accumulated_time - kept;
            log::trace!("Substep cap reached, dropping {:.4}s of simulation time", dropped_time);
            self.accumulated_time = kept;
        }

        StepReport {
            substeps,
            collisions: self.last_events.len(),
            dropped_time,
        }
    }

    /// Time waiting in the accumulator for the next internal step
    pub fn accumulated_time(&self) -> f32 {
        self.accumulated_time
    }

    /// Internal fixed timestep
    fn step_internal(&mut self) {
        let velocities = self.snapshot_velocities();

        let (collision_send, collision_recv) = crossbeam_channel::unbounded();
        let event_handler = ChannelEventCollector {
            collision_events: collision_send,
        };
        let hooks = ContactMaterialHooks {
            table: &self.materials,
        };

        self.pipeline.step(
            &self.gravity,
            &self.integration_params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &hooks,
            &event_handler,
        );

        while let Ok(event) = collision_recv.try_recv() {
            let rapier::CollisionEvent::Started(h1, h2, flags) = event else {
                continue;
            };
            if flags.contains(rapier::CollisionEventFlags::SENSOR) {
                continue;
            }
            let Some(event) = self.resolve_contact(h1, h2, &velocities) else {
                continue;
            };

            log::debug!(
                "Impact {:?} <-> {:?}: {:.3}",
                event.body_a,
                event.body_b,
                event.impact_velocity
            );
            self.handlers.dispatch(&event);
            self.last_events.push(event);
        }
    }

    fn snapshot_velocities(&self) -> HashMap<rapier::RigidBodyHandle, PreStepVelocity> {
        self.bodies
            .iter()
            .filter(|(_, b)| b.is_dynamic())
            .map(|(h, b)| {
                (
                    h,
                    PreStepVelocity {
                        linvel: *b.linvel(),
                        angvel: *b.angvel(),
                        com: *b.center_of_mass(),
                    },
                )
            })
            .collect()
    }

    /// Build a collision event for a newly touching collider pair
    fn resolve_contact(
        &self,
        h1: rapier::ColliderHandle,
        h2: rapier::ColliderHandle,
        velocities: &HashMap<rapier::RigidBodyHandle, PreStepVelocity>,
    ) -> Option<CollisionEvent> {
        let body_a = self.colliders.get(h1)?.parent()?;
        let body_b = self.colliders.get(h2)?.parent()?;

        let (point, normal) = match self.contact_geometry(h1, h2) {
            Some(geometry) => geometry,
            None => {
                let a = self.bodies.get(body_a)?.center_of_mass();
                let b = self.bodies.get(body_b)?.center_of_mass();
                let normal = (b - a)
                    .try_normalize(f32::EPSILON)
                    .unwrap_or_else(|| rapier::Vector::y());
                (rapier::Point::from((a.coords + b.coords) * 0.5), normal)
            }
        };

        let velocity = |body: rapier::RigidBodyHandle| {
            velocities
                .get(&body)
                .map_or_else(rapier::Vector::zeros, |v| v.at_point(&point))
        };
        let relative = velocity(body_a) - velocity(body_b);

        Some(CollisionEvent {
            body_a: BodyHandle(body_a),
            body_b: BodyHandle(body_b),
            contact_point: [point.x, point.y, point.z],
            normal: [normal.x, normal.y, normal.z],
            impact_velocity: relative.dot(&normal),
        })
    }

    /// World-space contact point and normal (from `h1` towards `h2`)
    fn contact_geometry(
        &self,
        h1: rapier::ColliderHandle,
        h2: rapier::ColliderHandle,
    ) -> Option<(rapier::Point<f32>, rapier::Vector<f32>)> {
        let pair = self.narrow_phase.contact_pair(h1, h2)?;
        let sign = if pair.collider1 == h1 { 1.0 } else { -1.0 };

        for manifold in &pair.manifolds {
            if let Some(contact) = manifold.data.solver_contacts.first() {
                return Some((contact.point, manifold.data.normal * sign));
            }
        }

        let first = self.colliders.get(pair.collider1)?;
        pair.manifolds.iter().find_map(|manifold| {
            manifold
                .points
                .first()
                .map(|p| (first.position() * p.local_p1, manifold.data.normal * sign))
        })
    }

    // ==================== Events ====================

    /// Collision events dispatched by the last step
    pub fn last_step_events(&self) -> &[CollisionEvent] {
        &self.last_events
    }

    // ==================== Debug ====================

    /// Get number of rigid bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Get number of colliders
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// Get number of active (awake) bodies
    pub fn active_body_count(&self) -> usize {
        self.islands.active_dynamic_bodies().len()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::sync::{Arc, Mutex};

    const DT: f32 = 1.0 / 60.0;

    fn sphere_at(world: &mut PhysicsWorld, y: f32) -> BodyHandle {
        world
            .create_body(
                RigidBodyDesc::dynamic().with_position(0.0, y, 0.0),
                ColliderDesc::new(ColliderShape::sphere(0.5)),
            )
            .unwrap()
    }

    #[test]
    fn test_create_world() {
        let world = PhysicsWorld::new(PhysicsConfig::default());
        assert_eq!(world.body_count(), 0);
        assert_eq!(world.collider_count(), 0);
        assert_eq!(world.gravity(), [0.0, -0.92, 0.0]);
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        assert!(PhysicsWorld::try_new(PhysicsConfig::default().with_timestep(-1.0)).is_err());
    }

    #[test]
    fn test_create_body_and_collider() {
        let mut world = PhysicsWorld::default();
        let body = sphere_at(&mut world, 10.0);

        assert_eq!(world.body_count(), 1);
        assert_eq!(world.collider_count(), 1);
        let state = world.body_state(body).unwrap();
        assert_eq!(state.body_type, RigidBodyType::Dynamic);
        assert_relative_eq!(state.mass, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_mass_is_static() {
        let mut world = PhysicsWorld::default();
        let body = world
            .create_body(
                RigidBodyDesc::dynamic().with_mass(0.0).with_position(0.0, 5.0, 0.0),
                ColliderDesc::new(ColliderShape::cuboid(0.5, 0.5, 0.5)),
            )
            .unwrap();

        for _ in 0..30 {
            world.step(DT, DT, 3);
        }
        assert_eq!(world.body_position(body).unwrap(), [0.0, 5.0, 0.0]);
        assert_eq!(world.body_rotation(body).unwrap(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(world.body_state(body).unwrap().mass, 0.0);
    }

    #[test]
    fn test_rejects_invalid_bodies() {
        let mut world = PhysicsWorld::default();
        assert!(world
            .create_body(RigidBodyDesc::dynamic(), ColliderDesc::new(ColliderShape::sphere(0.0)))
            .is_err());
        assert!(world
            .create_body(
                RigidBodyDesc::dynamic().with_mass(-1.0),
                ColliderDesc::new(ColliderShape::sphere(1.0))
            )
            .is_err());
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn test_gravity_fall() {
        let mut world = PhysicsWorld::default();
        let body = sphere_at(&mut world, 10.0);

        let initial_y = world.body_position(body).unwrap()[1];
        for _ in 0..60 {
            world.step(DT, DT, 3);
        }

        let final_y = world.body_position(body).unwrap()[1];
        assert!(final_y < initial_y, "Body should fall due to gravity");
    }

    #[test]
    fn test_floor_never_moves() {
        let mut world = PhysicsWorld::new(PhysicsConfig::default().with_gravity(0.0, -9.81, 0.0));
        let floor = world.create_floor(None).unwrap();
        let before = world.body_transform(floor).unwrap();

        for i in 0..5 {
            sphere_at(&mut world, 1.0 + i as f32);
        }
        for _ in 0..300 {
            world.step(DT, DT, 3);
        }

        assert_eq!(world.body_transform(floor).unwrap(), before);
        assert_eq!(world.floor(), Some(floor));
    }

    #[test]
    fn test_first_step_with_zero_delta() {
        let mut world = PhysicsWorld::default();
        let body = sphere_at(&mut world, 3.0);

        let report = world.step(DT, 0.0, 3);
        assert_eq!(report.substeps, 0);
        assert_eq!(world.body_position(body).unwrap(), [0.0, 3.0, 0.0]);
    }

    #[test]
    fn test_substep_cap_drops_backlog() {
        let mut world = PhysicsWorld::default();
        sphere_at(&mut world, 3.0);

        let report = world.step(DT, 10.0, 3);
        assert_eq!(report.substeps, 3);
        assert!(report.dropped_time > 9.0);
        assert!(world.accumulated_time() < DT);
    }

    #[test]
    fn test_pathological_deltas_do_not_panic() {
        let mut world = PhysicsWorld::default();
        let body = sphere_at(&mut world, 3.0);

        assert_eq!(world.step(DT, f32::NAN, 3).substeps, 0);
        assert_eq!(world.step(DT, f32::INFINITY, 3).substeps, 0);
        assert_eq!(world.step(DT, -5.0, 3).substeps, 0);
        assert_eq!(world.accumulated_time(), 0.0);
        assert_eq!(world.step(0.0, DT, 3), StepReport::default());
        assert!(world.body_position(body).unwrap()[1].is_finite());
    }

    #[test]
    fn test_collision_reports_impact_velocity() {
        let mut world = PhysicsWorld::default();
        let floor = world.create_floor(None).unwrap();
        let ball = world
            .create_body(
                RigidBodyDesc::dynamic()
                    .with_position(0.0, 2.0, 0.0)
                    .with_linear_velocity(0.0, -5.0, 0.0),
                ColliderDesc::new(ColliderShape::sphere(0.5)),
            )
            .unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        world
            .add_collision_handler(
                ball,
                Box::new(move |event: &CollisionEvent| sink.lock().unwrap().push(*event)),
            )
            .unwrap();

        let mut reported = 0;
        for _ in 0..60 {
            let report = world.step(DT, DT, 3);
            assert_eq!(world.last_step_events().len(), report.collisions);
            reported += report.collisions;
        }

        let seen = seen.lock().unwrap();
        assert!(!seen.is_empty(), "ball should hit the floor");
        assert_eq!(reported, seen.len());
        let first = seen[0];
        assert!(first.involves(ball));
        assert_eq!(first.other(ball), Some(floor));
        assert!(first.impact_velocity > 4.0, "impact was {}", first.impact_velocity);
    }

    #[test]
    fn test_remove_body_is_idempotent() {
        let mut world = PhysicsWorld::default();
        let body = sphere_at(&mut world, 3.0);
        let token = world
            .add_collision_handler(body, Box::new(|_: &CollisionEvent| {}))
            .unwrap();

        assert!(world.body_collider(body).is_some());
        assert!(world.remove_body(body));
        assert!(!world.remove_body(body));
        assert!(world.body_collider(body).is_none());
        assert!(!world.remove_collision_handler(token));
        assert_eq!(world.body_count(), 0);
        assert_eq!(world.collider_count(), 0);
        assert!(matches!(world.body_position(body), Err(PhysicsError::BodyNotFound(_))));
        assert!(world
            .add_collision_handler(body, Box::new(|_: &CollisionEvent| {}))
            .is_err());
    }

    #[test]
    fn test_resting_body_falls_asleep() {
        let config = PhysicsConfig {
            default_restitution: 0.0,
            ..PhysicsConfig::default().with_gravity(0.0, -9.81, 0.0)
        };
        let mut world = PhysicsWorld::new(config);
        world.create_floor(None).unwrap();
        let body = sphere_at(&mut world, 1.0);

        for _ in 0..1200 {
            world.step(DT, DT, 3);
        }

        assert!(world.is_body_sleeping(body).unwrap());
        assert_eq!(world.active_body_count(), 0);
    }

    #[test]
    fn test_contact_material_pairs() {
        let mut world = PhysicsWorld::default();
        let ice = world.register_material("ice");
        let steel = world.register_material("steel");
        world.add_contact_material(ice, steel, ContactProperties::new(0.01, 0.2));

        assert_eq!(world.contact_properties(Some(steel), Some(ice)).friction, 0.01);
        assert_eq!(world.contact_properties(Some(ice), Some(ice)), ContactProperties::new(0.1, 0.7));

        world.set_default_contact_material(ContactProperties::new(0.5, 0.0));
        assert_eq!(world.contact_properties(None, None).friction, 0.5);
    }
}
