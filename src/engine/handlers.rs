//! Callbacks an embedding program can hand to [`crate::Engine::run`].

use ggez::input::keyboard::{KeyCode, KeyMods};
use ggez::input::mouse::MouseButton;
use rapier2d::prelude::{Point, Real, Vector};

use crate::common::SandboxResult;
use crate::world::Sandbox;

/// A mouse button went down. Position is in physics coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MousePress {
    pub position: Point<Real>,
    pub button: MouseButton,
}

/// The mouse moved with at least one button held. Position and delta are in
/// physics coordinates (y up).
#[derive(Debug, Clone, PartialEq)]
pub struct MouseDrag {
    pub position: Point<Real>,
    pub delta: Vector<Real>,
    pub buttons: Vec<MouseButton>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyPress {
    pub keycode: Option<KeyCode>,
    pub mods: KeyMods,
}

pub type MousePressFn = Box<dyn FnMut(&mut Sandbox, &MousePress) -> SandboxResult<()>>;
pub type MouseDragFn = Box<dyn FnMut(&mut Sandbox, &MouseDrag) -> SandboxResult<()>>;
pub type KeyPressFn = Box<dyn FnMut(&mut Sandbox, &KeyPress) -> SandboxResult<()>>;
/// Called once per fixed tick with the configured timestep.
pub type UpdateFn = Box<dyn FnMut(&mut Sandbox, Real) -> SandboxResult<()>>;

/// The program's optional event and update callbacks.
///
/// Without an `update` callback the engine steps the space itself.
#[derive(Default)]
pub struct Handlers {
    pub(crate) on_mouse_press: Option<MousePressFn>,
    pub(crate) on_mouse_drag: Option<MouseDragFn>,
    pub(crate) on_key_press: Option<KeyPressFn>,
    pub(crate) update: Option<UpdateFn>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_mouse_press<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut Sandbox, &MousePress) -> SandboxResult<()> + 'static,
    {
        self.on_mouse_press = Some(Box::new(f));
        self
    }

    pub fn on_mouse_drag<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut Sandbox, &MouseDrag) -> SandboxResult<()> + 'static,
    {
        self.on_mouse_drag = Some(Box::new(f));
        self
    }

    pub fn on_key_press<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut Sandbox, &KeyPress) -> SandboxResult<()> + 'static,
    {
        self.on_key_press = Some(Box::new(f));
        self
    }

    /// Replaces the default stepping with `f`. It is responsible for stepping the space.
    pub fn update<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut Sandbox, Real) -> SandboxResult<()> + 'static,
    {
        self.update = Some(Box::new(f));
        self
    }

    pub fn has_update(&self) -> bool {
        self.update.is_some()
    }
}

impl std::fmt::Debug for Handlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handlers")
            .field("on_mouse_press", &self.on_mouse_press.is_some())
            .field("on_mouse_drag", &self.on_mouse_drag.is_some())
            .field("on_key_press", &self.on_key_press.is_some())
            .field("update", &self.update.is_some())
            .finish()
    }
}
