pub mod circle_body;

pub use circle_body::{BodyKind, CircleDesc, CircleHandle};
