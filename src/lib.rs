//! A small 2D physics sandbox: a ggez window around a rapier2d space, with
//! helpers to spawn randomized circles and boundary walls.
//!
//! ```no_run
//! use physics_sandbox::{CircleDesc, Engine, Handlers, SettingsOverrides};
//!
//! let mut engine = Engine::new(SettingsOverrides::new().gravity(0.0, -900.0))?;
//! engine.make_4_walls();
//! for _ in 0..20 {
//!     engine.add_circle(CircleDesc::new())?;
//! }
//! engine.run(Handlers::new())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod common;
pub mod config;
pub mod engine;
pub mod objects;
pub mod render;
pub mod shapes;
pub mod space;
pub mod world;

// Re-export key types for easier use
pub use common::{ColorSpec, ColorTable, Material, RandomRange, Rgba, SandboxError, SandboxResult};
pub use config::{Settings, SettingsOverrides};
pub use engine::{Engine, EngineState, Handlers, KeyPress, MouseDrag, MousePress, UpdateMode};
pub use objects::{BodyKind, CircleDesc, CircleHandle};
pub use shapes::LineSegment;
pub use space::PhysicsSpace;
pub use world::Sandbox;
