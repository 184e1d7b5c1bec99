//! Sandbox settings and the overrides an embedding program can supply.
//!
//! [`SettingsOverrides`] carries whatever the program chose to set; every
//! field is optional. [`Settings::resolve`] fills the gaps with the stock
//! defaults and produces the flat, immutable record the sandbox runs on.
//!
//! # YAML format
//! Overrides can also be loaded from a YAML mapping. Every key is optional:
//!
//! ```yaml
//! window_width: 1024
//! window_height: 768
//! gravity: [0.0, -900.0]
//! density: 10.0
//! friction: 0.5
//! elasticity: 0.8
//! dt: 0.02
//! radius_range: [10, 20]
//! velocity_range: [-300, 300]
//! x_range: [400, 600]      # defaults to 40%..60% of window_width
//! y_range: [300, 460]      # defaults to 40%..60% of window_height
//! colors:
//!   red: [255, 0, 0, 255]
//! wall_thickness: 16.0
//! ```

use std::fs;
use std::path::Path;

use rapier2d::prelude::{vector, Real, Vector};
use serde::Deserialize;

use crate::common::{ColorTable, RandomRange, SandboxResult};

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
pub const DEFAULT_GRAVITY: [f32; 2] = [0.0, 0.0];
pub const DEFAULT_DENSITY: f32 = 10.0;
pub const DEFAULT_FRICTION: f32 = 0.5;
pub const DEFAULT_ELASTICITY: f32 = 0.8;
pub const DEFAULT_DT: f32 = 0.02;
pub const DEFAULT_RADIUS_RANGE: RandomRange = RandomRange::new(10, 20);
pub const DEFAULT_VELOCITY_RANGE: RandomRange = RandomRange::new(-300, 300);
pub const DEFAULT_WALL_THICKNESS: f32 = 16.0;

// Default spawn area as a fraction of the window extent.
const SPAWN_LO_FRACTION: f64 = 0.4;
const SPAWN_HI_FRACTION: f64 = 0.6;

/// Fully resolved sandbox settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub gravity: [f32; 2],
    pub density: f32,
    pub friction: f32,
    pub elasticity: f32,
    /// Fixed timestep handed to the update callback on every tick.
    pub dt: f32,
    pub radius_range: RandomRange,
    pub velocity_range: RandomRange,
    pub x_range: RandomRange,
    pub y_range: RandomRange,
    pub colors: ColorTable,
    /// Radius of the capsule used for boundary walls.
    pub wall_thickness: f32,
}

impl Settings {
    /// Takes each supplied override, or the default for anything left unset.
    ///
    /// Spawn ranges default to 40%..60% of the *resolved* window size. They are
    /// computed here, once; changing the window size afterwards does not move them.
    pub fn resolve(overrides: SettingsOverrides) -> Self {
        let window_width = overrides.window_width.unwrap_or(DEFAULT_WINDOW_WIDTH);
        let window_height = overrides.window_height.unwrap_or(DEFAULT_WINDOW_HEIGHT);

        Settings {
            window_width,
            window_height,
            gravity: overrides.gravity.unwrap_or(DEFAULT_GRAVITY),
            density: overrides.density.unwrap_or(DEFAULT_DENSITY),
            friction: overrides.friction.unwrap_or(DEFAULT_FRICTION),
            elasticity: overrides.elasticity.unwrap_or(DEFAULT_ELASTICITY),
            dt: overrides.dt.unwrap_or(DEFAULT_DT),
            radius_range: overrides.radius_range.unwrap_or(DEFAULT_RADIUS_RANGE),
            velocity_range: overrides.velocity_range.unwrap_or(DEFAULT_VELOCITY_RANGE),
            x_range: overrides.x_range.unwrap_or_else(|| {
                RandomRange::fraction_of(window_width, SPAWN_LO_FRACTION, SPAWN_HI_FRACTION)
            }),
            y_range: overrides.y_range.unwrap_or_else(|| {
                RandomRange::fraction_of(window_height, SPAWN_LO_FRACTION, SPAWN_HI_FRACTION)
            }),
            colors: overrides.colors.unwrap_or_default(),
            wall_thickness: overrides.wall_thickness.unwrap_or(DEFAULT_WALL_THICKNESS),
        }
    }

    pub fn gravity_vector(&self) -> Vector<Real> {
        vector![self.gravity[0], self.gravity[1]]
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::resolve(SettingsOverrides::default())
    }
}

/// Values supplied by the embedding program. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsOverrides {
    pub window_width: Option<u32>,
    pub window_height: Option<u32>,
    pub gravity: Option<[f32; 2]>,
    pub density: Option<f32>,
    pub friction: Option<f32>,
    pub elasticity: Option<f32>,
    pub dt: Option<f32>,
    pub radius_range: Option<RandomRange>,
    pub velocity_range: Option<RandomRange>,
    pub x_range: Option<RandomRange>,
    pub y_range: Option<RandomRange>,
    pub colors: Option<ColorTable>,
    pub wall_thickness: Option<f32>,
}

impl SettingsOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(source: &str) -> SandboxResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> SandboxResult<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = Some(width);
        self.window_height = Some(height);
        self
    }

    pub fn gravity(mut self, x: f32, y: f32) -> Self {
        self.gravity = Some([x, y]);
        self
    }

    pub fn density(mut self, density: f32) -> Self {
        self.density = Some(density);
        self
    }

    pub fn friction(mut self, friction: f32) -> Self {
        self.friction = Some(friction);
        self
    }

    pub fn elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = Some(elasticity);
        self
    }

    pub fn dt(mut self, dt: f32) -> Self {
        self.dt = Some(dt);
        self
    }

    pub fn radius_range(mut self, lo: i32, hi: i32) -> Self {
        self.radius_range = Some(RandomRange::new(lo, hi));
        self
    }

    pub fn velocity_range(mut self, lo: i32, hi: i32) -> Self {
        self.velocity_range = Some(RandomRange::new(lo, hi));
        self
    }

    pub fn x_range(mut self, lo: i32, hi: i32) -> Self {
        self.x_range = Some(RandomRange::new(lo, hi));
        self
    }

    pub fn y_range(mut self, lo: i32, hi: i32) -> Self {
        self.y_range = Some(RandomRange::new(lo, hi));
        self
    }

    pub fn colors(mut self, colors: ColorTable) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn wall_thickness(mut self, thickness: f32) -> Self {
        self.wall_thickness = Some(thickness);
        self
    }
}
