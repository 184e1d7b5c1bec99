pub mod color;
pub mod error;
pub mod material;
pub mod range;

pub use color::{ColorSpec, ColorTable, Rgba};
pub use error::{SandboxError, SandboxResult};
pub use material::Material;
pub use range::RandomRange;
