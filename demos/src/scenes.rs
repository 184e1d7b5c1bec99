use ggez::input::keyboard::KeyCode;
use ggez::input::mouse::MouseButton;
use log::info;
use physics_sandbox::{CircleDesc, Engine, Handlers, SandboxResult, SettingsOverrides};
use rapier2d::prelude::vector;

use crate::Scene;

pub fn default_overrides(scene: Scene) -> SettingsOverrides {
    match scene {
        Scene::Bounce => SettingsOverrides::new(),
        Scene::Rain => SettingsOverrides::new()
            .gravity(0.0, -900.0)
            .x_range(100, 700)
            .y_range(450, 580)
            .velocity_range(-50, 50),
        Scene::Pegs => SettingsOverrides::new()
            .gravity(0.0, -600.0)
            .radius_range(6, 10)
            .elasticity(0.6)
            .dt(1.0 / 60.0),
    }
}

/// Twenty random circles in a closed box. Click to add one under the cursor,
/// space adds one at random, C adds a red one in the middle.
pub fn bounce(engine: &mut Engine) -> SandboxResult<Handlers> {
    engine.make_4_walls();
    for _ in 0..20 {
        engine.add_circle(CircleDesc::new())?;
    }

    Ok(Handlers::new()
        .on_mouse_press(|sandbox, press| {
            sandbox.add_circle(CircleDesc::new().position(press.position.x, press.position.y))?;
            Ok(())
        })
        .on_key_press(|sandbox, key| {
            match key.keycode {
                Some(KeyCode::Space) => {
                    sandbox.add_circle(CircleDesc::new())?;
                }
                Some(KeyCode::C) => {
                    let (w, h) = (sandbox.window_width(), sandbox.window_height());
                    sandbox.add_circle(CircleDesc::new().position(w / 2.0, h / 2.0).color("red"))?;
                }
                _ => (),
            }
            Ok(())
        }))
}

/// A floor and a steady drizzle of circles. Dragging with the left button pours
/// small white drops; the right button pours static ones.
pub fn rain(engine: &mut Engine) -> SandboxResult<Handlers> {
    engine.make_bottom_wall();

    let mut since_spawn = 0.0;
    Ok(Handlers::new()
        .on_mouse_drag(|sandbox, drag| {
            let mut desc = CircleDesc::new()
                .position(drag.position.x, drag.position.y)
                .radius(5.0)
                .color("white");
            if drag.buttons.contains(&MouseButton::Right) {
                desc = desc.fixed();
            }
            sandbox.add_circle(desc)?;
            Ok(())
        })
        .update(move |sandbox, dt| {
            since_spawn += dt;
            if since_spawn >= 0.5 {
                since_spawn = 0.0;
                sandbox.add_circle(CircleDesc::new())?;
            }
            sandbox.default_update(dt);
            Ok(())
        }))
}

/// Rows of static pegs, a kinematic sweeper along the bottom and walls all round.
/// Click to drop a ball.
pub fn pegs(engine: &mut Engine) -> SandboxResult<Handlers> {
    engine.make_4_walls();
    let (w, h) = (engine.settings().window_width as f32, engine.settings().window_height as f32);

    let rows = 6;
    let cols = 10;
    for row in 0..rows {
        let y = h * 0.25 + row as f32 * 45.0;
        let offset = if row % 2 == 0 { 0.0 } else { w / cols as f32 / 2.0 };
        for col in 0..cols {
            let x = offset + (col as f32 + 0.5) * w / cols as f32;
            engine.add_circle(CircleDesc::new().position(x, y).radius(6.0).color("blue").fixed())?;
        }
    }
    let sweeper = engine.add_circle(
        CircleDesc::new()
            .position(w / 2.0, 60.0)
            .radius(30.0)
            .color("green")
            .kinematic()
            .velocity(120.0, 0.0),
    )?;
    info!("Placed {} pegs", rows * cols);

    Ok(Handlers::new()
        .on_mouse_press(|sandbox, press| {
            sandbox.add_circle(
                CircleDesc::new()
                    .position(press.position.x, press.position.y)
                    .velocity(0.0, 0.0),
            )?;
            Ok(())
        })
        .update(move |sandbox, dt| {
            // Turn the sweeper around at the walls
            if let Some(body) = sandbox.space_mut().body_mut(sweeper.body) {
                let x = body.translation().x;
                let vx = body.linvel().x;
                if (x < 60.0 && vx < 0.0) || (x > w - 60.0 && vx > 0.0) {
                    body.set_linvel(vector![-vx, 0.0], true);
                }
            }
            sandbox.default_update(dt);
            Ok(())
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use physics_sandbox::Settings;

    #[test]
    fn test_rain_spawns_near_top() {
        let settings = Settings::resolve(default_overrides(Scene::Rain));
        assert_eq!(settings.gravity, [0.0, -900.0]);
        assert!(settings.y_range.lo > settings.window_height as i32 / 2);
    }

    #[test]
    fn test_pegs_uses_sixty_hertz_timestep() {
        let settings = Settings::resolve(default_overrides(Scene::Pegs));
        assert_eq!(settings.dt, 1.0 / 60.0);
    }
}
