use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rapier2d::prelude::*;

use crate::common::{Material, SandboxResult};
use crate::config::Settings;
use crate::objects::{CircleDesc, CircleHandle};
use crate::shapes::LineSegment;
use crate::space::PhysicsSpace;

/// Headless half of the engine: settings, the physics space and a random source.
///
/// Handlers registered with [`crate::Engine::run`] receive a `&mut Sandbox`,
/// so everything here is usable from inside the event loop as well as from tests.
pub struct Sandbox {
    settings: Settings,
    space: PhysicsSpace,
    rng: StdRng,
}

impl Sandbox {
    /// Creates the physics space with the configured gravity, seeded from OS entropy.
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Same as [`Sandbox::new`] but with a reproducible random source.
    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: Settings, rng: StdRng) -> Self {
        let space = PhysicsSpace::new(settings.gravity_vector());
        info!(
            "Sandbox ready: {}x{} window, gravity {:?}, dt {}",
            settings.window_width, settings.window_height, settings.gravity, settings.dt
        );
        Self { settings, space, rng }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn space(&self) -> &PhysicsSpace {
        &self.space
    }

    pub fn space_mut(&mut self) -> &mut PhysicsSpace {
        &mut self.space
    }

    /// Creates a circle and registers its body and shape with the space.
    ///
    /// Missing position, radius and color are drawn at random from the
    /// configured ranges and color table. Missing material values come from the
    /// settings. A dynamic circle without a velocity gets one drawn per axis from
    /// the velocity range; static and kinematic circles keep the engine's zero.
    pub fn add_circle(&mut self, desc: CircleDesc) -> SandboxResult<CircleHandle> {
        let kind = desc.kind();

        let radius = match desc.radius {
            Some(r) => r,
            None => self.settings.radius_range.sample(&mut self.rng)?,
        };
        let material = Material::from_settings(&self.settings).with_overrides(
            desc.density,
            desc.friction,
            desc.elasticity,
        );
        let color = match &desc.color {
            Some(spec) => spec.resolve(&self.settings.colors)?,
            None => self.settings.colors.choose(&mut self.rng)?,
        };

        let x = match desc.x {
            Some(x) => x,
            None => self.settings.x_range.sample(&mut self.rng)?,
        };
        let y = match desc.y {
            Some(y) => y,
            None => self.settings.y_range.sample(&mut self.rng)?,
        };

        let velocity = match desc.velocity {
            Some(v) => Some(v),
            None if kind.is_dynamic() => {
                let range = self.settings.velocity_range;
                Some(vector![range.sample(&mut self.rng)?, range.sample(&mut self.rng)?])
            }
            None => None, // Engine default (rest)
        };

        let mut body = RigidBodyBuilder::new(kind.into()).translation(vector![x, y]);
        if let Some(v) = velocity {
            body = body.linvel(v);
        }
        let collider = ColliderBuilder::ball(radius)
            .density(material.density)
            .friction(material.friction)
            .restitution(material.elasticity)
            .friction_combine_rule(CoefficientCombineRule::Multiply)
            .restitution_combine_rule(CoefficientCombineRule::Multiply)
            .user_data(color.to_user_data())
            .build();

        let (body, shape) = self.space.insert_body(body.build(), collider);
        debug!("Added {kind:?} circle r={radius} at ({x}, {y}), velocity {velocity:?}");
        Ok(CircleHandle { body, shape })
    }

    /// Adds a static wall along `a`-`b` with the configured thickness and material.
    pub fn make_wall(&mut self, a: Point<Real>, b: Point<Real>) -> ColliderHandle {
        let segment = LineSegment::new(a, b);
        let collider = ColliderBuilder::capsule_from_endpoints(a, b, self.settings.wall_thickness)
            .friction(self.settings.friction)
            .restitution(self.settings.elasticity)
            .friction_combine_rule(CoefficientCombineRule::Multiply)
            .restitution_combine_rule(CoefficientCombineRule::Multiply)
            .build();
        let handle = self.space.insert_static_collider(collider);
        debug!(
            "Added wall from ({}, {}) to ({}, {}), length {}",
            a.x,
            a.y,
            b.x,
            b.y,
            segment.length()
        );
        handle
    }

    /// Adds a wall along the bottom edge of the window.
    pub fn make_bottom_wall(&mut self) -> ColliderHandle {
        let edge = LineSegment::bottom_edge(self.window_width());
        self.make_wall(edge.a, edge.b)
    }

    /// Adds walls along all four window edges: bottom, top, left, right.
    pub fn make_4_walls(&mut self) -> [ColliderHandle; 4] {
        LineSegment::window_edges(self.window_width(), self.window_height())
            .map(|edge| self.make_wall(edge.a, edge.b))
    }

    /// The stepping callback used when no custom update is registered.
    pub fn default_update(&mut self, dt: Real) {
        self.space.step(dt);
    }

    pub fn window_width(&self) -> Real {
        self.settings.window_width as Real
    }

    pub fn window_height(&self) -> Real {
        self.settings.window_height as Real
    }
}
