//! Simulation session: the world, its proxies and everything that drives them

use crate::config::SimulationConfig;
use crate::debug::DebugAction;
use crate::error::Result;
use crate::factory::RigidBodyFactory;
use crate::feedback::ImpactFeedback;
use crate::registry::{ObjectRegistry, PairedObject, ResetReport};
use crate::shape::ShapeDescriptor;
use crate::stepper::{FrameClock, FrameReport, FrameStepper, MonotonicClock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tumble_audio::SharedSound;
use tumble_physics::{BodyHandle, PhysicsWorld};
use tumble_scene::{Presenter, ProxyId, SceneGraph, VisualProxy};

/// A running simulation.
///
/// Everything is mutated from the thread that calls [`frame`](Self::frame);
/// the only shared piece is the impact sound.
pub struct Simulation {
    config: SimulationConfig,
    world: PhysicsWorld,
    scene: SceneGraph,
    registry: ObjectRegistry,
    factory: RigidBodyFactory,
    stepper: FrameStepper,
    rng: StdRng,
    sound: SharedSound,
    floor: Option<(BodyHandle, ProxyId)>,
}

impl Simulation {
    /// Create a session timed by the wall clock
    pub fn new(config: SimulationConfig, sound: SharedSound) -> Result<Self> {
        Self::with_clock(config, sound, Box::new(MonotonicClock::new()))
    }

    /// Create a session timed by `clock`
    pub fn with_clock(
        config: SimulationConfig,
        sound: SharedSound,
        clock: Box<dyn FrameClock>,
    ) -> Result<Self> {
        config.validate()?;
        let world = PhysicsWorld::try_new(config.physics.clone())?;
        let stepper = FrameStepper::new(clock, config.physics.timestep, config.physics.max_substeps);
        let rng = match config.spawn.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            factory: RigidBodyFactory::new(config.spawn.spawn_height),
            config,
            world,
            scene: SceneGraph::new(),
            registry: ObjectRegistry::new(),
            stepper,
            rng,
            sound,
            floor: None,
        })
    }

    /// Floor plus the start-up sphere and box
    pub fn populate_default_scene(&mut self) -> Result<()> {
        self.ensure_floor()?;
        self.spawn(ShapeDescriptor::sphere(0.5, [10.0, 3.0, 0.0])?)?;
        self.spawn(ShapeDescriptor::cuboid(1.0, 1.5, 2.0, [0.0, 3.0, 0.0])?)?;
        Ok(())
    }

    /// Create the static floor and its proxy, once
    pub fn ensure_floor(&mut self) -> Result<BodyHandle> {
        if let Some((body, _)) = self.floor {
            return Ok(body);
        }
        let body = self.world.create_floor(None)?;
        let proxy = self.scene.add(VisualProxy::floor());
        self.floor = Some((body, proxy));
        Ok(body)
    }

    /// Spawn an object with an impact-sound handler on its body
    pub fn spawn(&mut self, desc: ShapeDescriptor) -> Result<PairedObject> {
        let feedback = ImpactFeedback::new(
            self.sound.clone(),
            self.config.audio.impact_threshold,
            self.rng.random(),
        );
        let object = self.factory.create(
            &desc,
            &mut self.world,
            &mut self.scene,
            Some(Box::new(feedback)),
        )?;
        self.registry.add(object);
        Ok(object)
    }

    /// Sphere with a random radius at a random x
    pub fn add_sphere(&mut self) -> Result<PairedObject> {
        let spawn = &self.config.spawn;
        let radius = self.rng.random_range(spawn.sphere_radius[0]..spawn.sphere_radius[1]);
        let x = self.rng.random_range(spawn.sphere_x[0]..spawn.sphere_x[1]);
        let desc = ShapeDescriptor::sphere(radius, [x, spawn.sphere_y, 0.0])?;
        self.spawn(desc)
    }

    /// Box at a random spot on x and z
    pub fn add_box(&mut self) -> Result<PairedObject> {
        let spawn = &self.config.spawn;
        let x = (self.rng.random::<f32>() - 0.5) * spawn.box_extent;
        let z = (self.rng.random::<f32>() - 0.5) * spawn.box_extent;
        let [width, height, depth] = spawn.box_size;
        let desc = ShapeDescriptor::cuboid(width, height, depth, [x, spawn.box_y, z])?;
        self.spawn(desc)
    }

    /// Remove every spawned object; the floor stays
    pub fn reset(&mut self) -> ResetReport {
        self.registry.reset_all(&mut self.world, &mut self.scene)
    }

    pub fn apply(&mut self, action: DebugAction) -> Result<()> {
        log::debug!("Debug action {:?}", action);
        match action {
            DebugAction::AddSphere => self.add_sphere().map(|_| ()),
            DebugAction::AddBox => self.add_box().map(|_| ()),
            DebugAction::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Run one frame
    pub fn frame(&mut self, presenter: &mut dyn Presenter) -> FrameReport {
        self.stepper
            .tick(&mut self.world, &self.registry, &mut self.scene, presenter)
    }

    /// Forward a surface resize to the presenter
    pub fn resize(&mut self, presenter: &mut dyn Presenter, width: u32, height: u32) {
        log::debug!("Resize to {}x{}", width, height);
        presenter.resize(width, height);
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    /// Floor body and proxy, once created
    pub fn floor(&self) -> Option<(BodyHandle, ProxyId)> {
        self.floor
    }

    pub fn frame_count(&self) -> u64 {
        self.stepper.frame_count()
    }
}
