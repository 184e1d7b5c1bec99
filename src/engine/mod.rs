//! The windowed facade: a ggez window wrapped around a [`Sandbox`].

pub mod handlers;
pub mod state;

pub use handlers::{Handlers, KeyPress, MouseDrag, MousePress};
pub use state::{EngineState, UpdateMode};

use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder, GameResult};
use log::info;
use rapier2d::prelude::{ColliderHandle, Point, Real};

use crate::common::SandboxResult;
use crate::config::{Settings, SettingsOverrides};
use crate::objects::{CircleDesc, CircleHandle};
use crate::world::Sandbox;

const GAME_ID: &str = "physics_sandbox";
const AUTHOR: &str = "physics_sandbox";
const WINDOW_TITLE: &str = "Physics Sandbox";

// Hands the state to the ggez loop built together with the window.
type Launcher = Box<dyn FnOnce(EngineState) -> GameResult>;

/// Owns the window and the sandbox. Build it, add bodies, then [`Engine::run`].
pub struct Engine {
    sandbox: Sandbox,
    launch: Launcher,
}

impl Engine {
    /// Resolves the settings and opens the window.
    pub fn new(overrides: SettingsOverrides) -> SandboxResult<Self> {
        Self::with_settings(Settings::resolve(overrides))
    }

    /// Opens a fixed-size, non-resizable window and creates the physics space.
    pub fn with_settings(settings: Settings) -> SandboxResult<Self> {
        let (width, height) = (settings.window_width as f32, settings.window_height as f32);
        let cb = ContextBuilder::new(GAME_ID, AUTHOR)
            .window_setup(WindowSetup::default().title(WINDOW_TITLE))
            .window_mode(WindowMode::default().dimensions(width, height).resizable(false));
        let (ctx, event_loop) = cb.build()?;
        info!("Opened {width}x{height} window");

        Ok(Self {
            sandbox: Sandbox::new(settings),
            launch: Box::new(move |state: EngineState| -> GameResult {
                event::run(ctx, event_loop, state)
            }),
        })
    }

    pub fn settings(&self) -> &Settings {
        self.sandbox.settings()
    }

    pub fn sandbox(&self) -> &Sandbox {
        &self.sandbox
    }

    pub fn sandbox_mut(&mut self) -> &mut Sandbox {
        &mut self.sandbox
    }

    /// See [`Sandbox::add_circle`].
    pub fn add_circle(&mut self, desc: CircleDesc) -> SandboxResult<CircleHandle> {
        self.sandbox.add_circle(desc)
    }

    pub fn make_wall(&mut self, a: Point<Real>, b: Point<Real>) -> ColliderHandle {
        self.sandbox.make_wall(a, b)
    }

    pub fn make_bottom_wall(&mut self) -> ColliderHandle {
        self.sandbox.make_bottom_wall()
    }

    pub fn make_4_walls(&mut self) -> [ColliderHandle; 4] {
        self.sandbox.make_4_walls()
    }

    /// Registers the handlers and hands control to the ggez event loop.
    ///
    /// Draws every frame; runs `handlers.update` (or the default step when there
    /// is none) at the configured fixed timestep. Only returns if the loop fails
    /// to start; a normal shutdown ends the process.
    pub fn run(self, handlers: Handlers) -> GameResult {
        let state = EngineState::new(self.sandbox, handlers);
        info!(
            "Running: {:?} update every {}s",
            state.update_mode(),
            state.sandbox().settings().dt
        );
        (self.launch)(state)
    }
}
