//! Debug drawing of a physics space onto a ggez canvas.
//!
//! Drawing is split in two: [`collect_draw_commands`] reads the space and
//! produces plain [`DrawCommand`]s in physics coordinates (y up), and
//! [`debug_draw`] flips them into screen coordinates and submits one mesh.

use ggez::glam::Vec2 as GVec2;
use ggez::graphics::{Canvas, DrawMode, DrawParam, Mesh, MeshBuilder};
use ggez::{Context, GameResult};
use log::trace;
use rapier2d::prelude::*;

use crate::common::Rgba;
use crate::space::PhysicsSpace;

const CIRCLE_TOLERANCE: f32 = 0.1;
const OUTLINE_WIDTH: f32 = 1.0;

/// Colors used for shapes that carry no color of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOptions {
    pub dynamic_color: Rgba,
    pub static_color: Rgba,
    pub kinematic_color: Rgba,
    pub sleeping_color: Rgba,
    pub outline_color: Rgba,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            dynamic_color: Rgba::opaque(52, 152, 219),
            static_color: Rgba::opaque(149, 165, 166),
            kinematic_color: Rgba::opaque(39, 174, 96),
            sleeping_color: Rgba::opaque(114, 148, 168),
            outline_color: Rgba::opaque(44, 62, 80),
        }
    }
}

/// One primitive to draw, in physics coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Point<Real>,
        radius: Real,
        angle: Real,
        fill: Rgba,
        outline: Rgba,
    },
    /// A segment swept by a disc of `radius`.
    Segment {
        a: Point<Real>,
        b: Point<Real>,
        radius: Real,
        fill: Rgba,
    },
}

/// Reads every collider in the space and turns it into draw commands.
/// Shapes other than balls and capsules are skipped.
pub fn collect_draw_commands(space: &PhysicsSpace, options: &DrawOptions) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(space.collider_count());

    for (handle, collider) in space.colliders().iter() {
        let fill = Rgba::from_user_data(collider.user_data)
            .unwrap_or_else(|| category_color(space, collider, options));
        let pose = collider.position();

        if let Some(ball) = collider.shape().as_ball() {
            commands.push(DrawCommand::Circle {
                center: Point::from(pose.translation.vector),
                radius: ball.radius,
                angle: pose.rotation.angle(),
                fill,
                outline: options.outline_color,
            });
        } else if let Some(capsule) = collider.shape().as_capsule() {
            commands.push(DrawCommand::Segment {
                a: pose * capsule.segment.a,
                b: pose * capsule.segment.b,
                radius: capsule.radius,
                fill,
            });
        } else {
            trace!("No debug drawing for collider {handle:?}");
        }
    }

    commands
}

fn category_color(space: &PhysicsSpace, collider: &Collider, options: &DrawOptions) -> Rgba {
    match collider.parent().and_then(|h| space.body(h)) {
        None => options.static_color,
        Some(body) if body.is_fixed() => options.static_color,
        Some(body) if body.is_kinematic() => options.kinematic_color,
        Some(body) if body.is_sleeping() => options.sleeping_color,
        Some(_) => options.dynamic_color,
    }
}

/// Physics (origin bottom-left, y up) to screen (origin top-left, y down).
pub fn to_screen(p: Point<Real>, screen_height: f32) -> GVec2 {
    GVec2::new(p.x, screen_height - p.y)
}

/// Screen to physics; the inverse of [`to_screen`].
pub fn to_physics(x: f32, y: f32, screen_height: f32) -> Point<Real> {
    point![x, screen_height - y]
}

/// Draws the commands onto the canvas as a single mesh.
pub fn debug_draw(
    ctx: &mut Context,
    canvas: &mut Canvas,
    commands: &[DrawCommand],
    screen_height: f32,
) -> GameResult {
    if commands.is_empty() {
        return Ok(());
    }

    let mut mb = MeshBuilder::new();
    for command in commands {
        match *command {
            DrawCommand::Circle { center, radius, angle, fill, outline } => {
                let c = to_screen(center, screen_height);
                mb.circle(DrawMode::fill(), c, radius, CIRCLE_TOLERANCE, fill.into())?;
                mb.circle(DrawMode::stroke(OUTLINE_WIDTH), c, radius, CIRCLE_TOLERANCE, outline.into())?;
                // Screen y is flipped, so the angle turns the other way
                let tip = c + GVec2::new(angle.cos(), -angle.sin()) * radius;
                if radius > 0.0 {
                    mb.line(&[c, tip], OUTLINE_WIDTH, outline.into())?;
                }
            }
            DrawCommand::Segment { a, b, radius, fill } => {
                let (sa, sb) = (to_screen(a, screen_height), to_screen(b, screen_height));
                if sa != sb {
                    mb.line(&[sa, sb], radius * 2.0, fill.into())?;
                }
                mb.circle(DrawMode::fill(), sa, radius, CIRCLE_TOLERANCE, fill.into())?;
                mb.circle(DrawMode::fill(), sb, radius, CIRCLE_TOLERANCE, fill.into())?;
            }
        }
    }

    let mesh = Mesh::from_data(ctx, mb.build());
    canvas.draw(&mesh, DrawParam::new());
    Ok(())
}
