use rapier2d::prelude::{ColliderHandle, Real, RigidBodyHandle, RigidBodyType, Vector};

use crate::common::ColorSpec;

/// How a body moves: integrated by the engine, fixed in place, or driven by its velocity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyKind {
    #[default]
    Dynamic,
    Static,
    Kinematic,
}

impl BodyKind {
    /// Resolves the pair of flags. `is_static` wins when both are set.
    pub fn from_flags(is_static: bool, is_kinematic: bool) -> Self {
        if is_static {
            BodyKind::Static
        } else if is_kinematic {
            BodyKind::Kinematic
        } else {
            BodyKind::Dynamic
        }
    }

    pub fn is_dynamic(self) -> bool {
        self == BodyKind::Dynamic
    }
}

impl From<BodyKind> for RigidBodyType {
    fn from(kind: BodyKind) -> Self {
        match kind {
            BodyKind::Dynamic => RigidBodyType::Dynamic,
            BodyKind::Static => RigidBodyType::Fixed,
            BodyKind::Kinematic => RigidBodyType::KinematicVelocityBased,
        }
    }
}

/// Parameters for one circle. Anything left `None` is filled in from the
/// sandbox settings or drawn at random when the circle is created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleDesc {
    pub x: Option<Real>,
    pub y: Option<Real>,
    pub radius: Option<Real>,
    pub density: Option<Real>,
    pub friction: Option<Real>,
    pub elasticity: Option<Real>,
    pub color: Option<ColorSpec>,
    pub is_static: bool,
    pub is_kinematic: bool,
    pub velocity: Option<Vector<Real>>,
}

impl CircleDesc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn x(mut self, x: Real) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: Real) -> Self {
        self.y = Some(y);
        self
    }

    pub fn radius(mut self, radius: Real) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn density(mut self, density: Real) -> Self {
        self.density = Some(density);
        self
    }

    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = Some(friction);
        self
    }

    pub fn elasticity(mut self, elasticity: Real) -> Self {
        self.elasticity = Some(elasticity);
        self
    }

    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn fixed(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn kinematic(mut self) -> Self {
        self.is_kinematic = true;
        self
    }

    pub fn velocity(mut self, vx: Real, vy: Real) -> Self {
        self.velocity = Some(Vector::new(vx, vy));
        self
    }

    pub fn kind(&self) -> BodyKind {
        BodyKind::from_flags(self.is_static, self.is_kinematic)
    }
}

/// Handles to the body and shape created for one circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CircleHandle {
    pub body: RigidBodyHandle,
    pub shape: ColliderHandle,
}
