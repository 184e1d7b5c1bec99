pub mod physics_space;

pub use physics_space::PhysicsSpace;
