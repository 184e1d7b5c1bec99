//! Defines physical material properties.

use crate::config::Settings;

/// Material properties applied to a collider when it is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Mass per unit area; the engine derives body mass and inertia from it.
    pub density: f32,
    /// Friction coefficient. Combined with the other shape's by multiplication.
    pub friction: f32,
    /// Restitution (bounciness). Combined with the other shape's by multiplication.
    pub elasticity: f32,
}

impl Material {
    /// Creates a new material. Values are used as given, without clamping.
    pub fn new(density: f32, friction: f32, elasticity: f32) -> Self {
        Material {
            density,
            friction,
            elasticity,
        }
    }

    /// The global defaults from the resolved settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Material::new(settings.density, settings.friction, settings.elasticity)
    }

    /// Replaces each property that was supplied, keeping the rest.
    /// An explicit `Some(0.0)` is honored.
    pub fn with_overrides(
        self,
        density: Option<f32>,
        friction: Option<f32>,
        elasticity: Option<f32>,
    ) -> Self {
        Material {
            density: density.unwrap_or(self.density),
            friction: friction.unwrap_or(self.friction),
            elasticity: elasticity.unwrap_or(self.elasticity),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::from_settings(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_settings() {
        let m = Material::default();
        assert_eq!(m, Material::new(10.0, 0.5, 0.8));
    }

    #[test]
    fn test_overrides_keep_explicit_zero() {
        let m = Material::default().with_overrides(Some(0.0), None, Some(0.0));
        assert_eq!(m.density, 0.0);
        assert_eq!(m.friction, 0.5);
        assert_eq!(m.elasticity, 0.0);
    }
}
