use ggez::event::EventHandler;
use ggez::graphics::{Canvas, Color};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::input::mouse::MouseButton;
use ggez::{Context, GameError, GameResult};
use log::{trace, warn};
use rapier2d::prelude::vector;

use super::handlers::{Handlers, KeyPress, MouseDrag, MousePress};
use crate::common::SandboxResult;
use crate::render::{self, DrawOptions};
use crate::world::Sandbox;

const DRAG_BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// What runs on each fixed tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// The program's own update callback.
    Custom,
    /// [`Sandbox::default_update`].
    Default,
}

/// The state handed to the ggez event loop: the sandbox plus the program's handlers.
pub struct EngineState {
    sandbox: Sandbox,
    handlers: Handlers,
    draw_options: DrawOptions,
    accumulator: f32, // Wall-clock seconds not yet consumed by ticks
}

impl EngineState {
    pub fn new(sandbox: Sandbox, handlers: Handlers) -> Self {
        let dt = sandbox.settings().dt;
        if dt <= 0.0 {
            warn!("Timestep {dt} is not positive; the update will never run");
        }
        Self {
            sandbox,
            handlers,
            draw_options: DrawOptions::default(),
            accumulator: 0.0,
        }
    }

    pub fn sandbox(&self) -> &Sandbox {
        &self.sandbox
    }

    pub fn update_mode(&self) -> UpdateMode {
        if self.handlers.has_update() {
            UpdateMode::Custom
        } else {
            UpdateMode::Default
        }
    }

    /// Feeds `elapsed` wall-clock seconds in and runs one tick per whole `dt`
    /// available. The remainder carries over to the next call. Returns the
    /// number of ticks run.
    pub fn advance(&mut self, elapsed: f32) -> SandboxResult<u32> {
        let dt = self.sandbox.settings().dt;
        if dt <= 0.0 {
            return Ok(0);
        }
        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= dt {
            self.tick()?;
            self.accumulator -= dt;
            ticks += 1;
        }
        if ticks > 0 {
            trace!("Ran {ticks} ticks, {:.4}s carried over", self.accumulator);
        }
        Ok(ticks)
    }

    /// Runs one fixed tick of exactly `dt`.
    pub fn tick(&mut self) -> SandboxResult<()> {
        let dt = self.sandbox.settings().dt;
        match self.handlers.update.as_mut() {
            Some(update) => update(&mut self.sandbox, dt),
            None => {
                self.sandbox.default_update(dt);
                Ok(())
            }
        }
    }

    pub fn mouse_press(&mut self, press: &MousePress) -> SandboxResult<()> {
        match self.handlers.on_mouse_press.as_mut() {
            Some(handler) => handler(&mut self.sandbox, press),
            None => Ok(()),
        }
    }

    pub fn mouse_drag(&mut self, drag: &MouseDrag) -> SandboxResult<()> {
        match self.handlers.on_mouse_drag.as_mut() {
            Some(handler) => handler(&mut self.sandbox, drag),
            None => Ok(()),
        }
    }

    pub fn key_press(&mut self, key: &KeyPress) -> SandboxResult<()> {
        match self.handlers.on_key_press.as_mut() {
            Some(handler) => handler(&mut self.sandbox, key),
            None => Ok(()),
        }
    }

    fn screen_height(&self) -> f32 {
        self.sandbox.window_height()
    }
}

fn report(result: SandboxResult<()>, origin: &str) -> GameResult {
    result.map_err(|e| {
        warn!("{origin} failed: {e}");
        GameError::from(e)
    })
}

impl EventHandler<GameError> for EngineState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let elapsed = ctx.time.delta().as_secs_f32();
        report(self.advance(elapsed).map(|_| ()), "update")
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, Color::BLACK);
        let commands = render::collect_draw_commands(self.sandbox.space(), &self.draw_options);
        render::debug_draw(ctx, &mut canvas, &commands, self.screen_height())?;
        canvas.finish(ctx)?;
        Ok(())
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> GameResult {
        let press = MousePress {
            position: render::to_physics(x, y, self.screen_height()),
            button,
        };
        report(self.mouse_press(&press), "on_mouse_press")
    }

    fn mouse_motion_event(&mut self, ctx: &mut Context, x: f32, y: f32, dx: f32, dy: f32) -> GameResult {
        let buttons: Vec<MouseButton> = DRAG_BUTTONS
            .into_iter()
            .filter(|b| ctx.mouse.button_pressed(*b))
            .collect();
        if buttons.is_empty() {
            return Ok(());
        }
        let drag = MouseDrag {
            position: render::to_physics(x, y, self.screen_height()),
            delta: vector![dx, -dy],
            buttons,
        };
        report(self.mouse_drag(&drag), "on_mouse_drag")
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> GameResult {
        if repeated {
            return Ok(());
        }
        let key = KeyPress {
            keycode: input.keycode,
            mods: input.mods,
        };
        report(self.key_press(&key), "on_key_press")?;
        if input.keycode == Some(KeyCode::Escape) {
            ctx.request_quit();
        }
        Ok(())
    }
}
