pub mod debug_draw;

pub use debug_draw::{collect_draw_commands, debug_draw, to_physics, to_screen, DrawCommand, DrawOptions};
