use log::trace;
use rapier2d::prelude::*;

// Typical object size in world units (pixels); scales the solver's length tolerances.
const LENGTH_UNIT: Real = 100.0;

/// The rapier2d world: body and collider sets, pipeline and solver state.
///
/// Everything physical (broad/narrow phase, solving, integration) is done by
/// rapier; this type only keeps the pieces together and exposes what the
/// sandbox needs.
pub struct PhysicsSpace {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
    elapsed: f64, // Total simulated time, seconds
    steps: u64,
}

impl PhysicsSpace {
    /// Creates an empty space with the given gravity vector.
    pub fn new(gravity: Vector<Real>) -> Self {
        Self {
            gravity,
            integration_parameters: IntegrationParameters {
                length_unit: LENGTH_UNIT,
                ..IntegrationParameters::default()
            },
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            elapsed: 0.0,
            steps: 0,
        }
    }

    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vector<Real>) {
        self.gravity = gravity;
    }

    /// Adds a body and a collider attached to it.
    pub fn insert_body(
        &mut self,
        body: RigidBody,
        collider: Collider,
    ) -> (RigidBodyHandle, ColliderHandle) {
        let body_handle = self.rigid_body_set.insert(body);
        let collider_handle =
            self.collider_set
                .insert_with_parent(collider, body_handle, &mut self.rigid_body_set);
        (body_handle, collider_handle)
    }

    /// Adds a collider with no parent body. Rapier treats it as fixed in place.
    pub fn insert_static_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.collider_set.insert(collider)
    }

    /// Advances the simulation by exactly `dt` seconds. Non-positive steps are ignored.
    pub fn step(&mut self, dt: Real) {
        if dt <= 0.0 {
            trace!("Ignoring non-positive step of {dt}");
            return;
        }
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            &(),
            &(),
        );
        self.steps += 1;
        self.elapsed += f64::from(dt);
        trace!("Step {} done, t = {:.3}s", self.steps, self.elapsed);
    }

    pub fn body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    pub fn body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    pub fn collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    pub fn collider_mut(&mut self, handle: ColliderHandle) -> Option<&mut Collider> {
        self.collider_set.get_mut(handle)
    }

    pub fn bodies(&self) -> &RigidBodySet {
        &self.rigid_body_set
    }

    pub fn colliders(&self) -> &ColliderSet {
        &self.collider_set
    }

    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    pub fn collider_count(&self) -> usize {
        self.collider_set.len()
    }

    /// Simulated time so far, in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn step_count(&self) -> u64 {
        self.steps
    }
}

impl Default for PhysicsSpace {
    fn default() -> Self {
        Self::new(Vector::zeros())
    }
}
