//! Colors, the named color table and the named-or-explicit color parameter.

use std::collections::BTreeMap;

use rand::seq::IteratorRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::{SandboxError, SandboxResult};

// Marks a collider's user data as carrying a color.
const COLOR_TAG: u128 = 1 << 32;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Packs the color into a collider's `user_data` slot.
    pub fn to_user_data(self) -> u128 {
        COLOR_TAG | u128::from(u32::from_be_bytes([self.r, self.g, self.b, self.a]))
    }

    /// Recovers a color stored with [`Rgba::to_user_data`]; `None` if the slot holds none.
    pub fn from_user_data(data: u128) -> Option<Self> {
        if data & COLOR_TAG == 0 {
            return None;
        }
        let [r, g, b, a] = (data as u32).to_be_bytes();
        Some(Self { r, g, b, a })
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for ggez::graphics::Color {
    fn from(c: Rgba) -> Self {
        ggez::graphics::Color::from_rgba(c.r, c.g, c.b, c.a)
    }
}

/// Name -> color lookup used for named colors and for random color picks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTable {
    entries: BTreeMap<String, Rgba>,
}

impl ColorTable {
    pub fn empty() -> Self {
        Self { entries: BTreeMap::new() }
    }

    pub fn insert(&mut self, name: impl Into<String>, color: Rgba) -> Option<Rgba> {
        self.entries.insert(name.into(), color)
    }

    pub fn get(&self, name: &str) -> SandboxResult<Rgba> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| SandboxError::UnknownColor(name.to_owned()))
    }

    /// Picks one of the table's colors uniformly at random.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> SandboxResult<Rgba> {
        self.entries
            .values()
            .copied()
            .choose(rng)
            .ok_or(SandboxError::EmptyColorTable)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgba)> {
        self.entries.iter().map(|(name, color)| (name.as_str(), *color))
    }
}

impl Default for ColorTable {
    /// The eight stock colors.
    fn default() -> Self {
        let stock = [
            ("red", Rgba::opaque(255, 0, 0)),
            ("orange", Rgba::opaque(255, 165, 0)),
            ("yellow", Rgba::opaque(255, 255, 0)),
            ("green", Rgba::opaque(0, 255, 0)),
            ("blue", Rgba::opaque(0, 0, 255)),
            ("cyan", Rgba::opaque(0, 255, 255)),
            ("purple", Rgba::opaque(255, 0, 255)),
            ("white", Rgba::opaque(255, 255, 255)),
        ];
        Self {
            entries: stock.into_iter().map(|(name, c)| (name.to_owned(), c)).collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, Rgba)> for ColorTable {
    fn from_iter<I: IntoIterator<Item = (S, Rgba)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(name, c)| (name.into(), c)).collect(),
        }
    }
}

/// A color given either by name (looked up in a [`ColorTable`]) or by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    Named(String),
    Explicit(Rgba),
}

impl ColorSpec {
    pub fn resolve(&self, table: &ColorTable) -> SandboxResult<Rgba> {
        match self {
            ColorSpec::Named(name) => table.get(name),
            ColorSpec::Explicit(color) => Ok(*color),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Named(name.to_owned())
    }
}

impl From<String> for ColorSpec {
    fn from(name: String) -> Self {
        ColorSpec::Named(name)
    }
}

impl From<Rgba> for ColorSpec {
    fn from(color: Rgba) -> Self {
        ColorSpec::Explicit(color)
    }
}

impl From<(u8, u8, u8, u8)> for ColorSpec {
    fn from(rgba: (u8, u8, u8, u8)) -> Self {
        ColorSpec::Explicit(rgba.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_stock_table() {
        let table = ColorTable::default();
        assert_eq!(table.len(), 8);
        assert_eq!(table.get("red").unwrap(), Rgba::new(255, 0, 0, 255));
        assert_eq!(table.get("orange").unwrap(), Rgba::new(255, 165, 0, 255));
        assert_eq!(table.get("purple").unwrap(), Rgba::new(255, 0, 255, 255));
    }

    #[test]
    fn test_named_lookup_failure() {
        let table = ColorTable::default();
        let err = ColorSpec::from("magenta").resolve(&table).unwrap_err();
        assert!(matches!(err, SandboxError::UnknownColor(ref name) if name == "magenta"));
    }

    #[test]
    fn test_explicit_color_bypasses_table() {
        let spec = ColorSpec::from((1, 2, 3, 4));
        assert_eq!(spec.resolve(&ColorTable::empty()).unwrap(), Rgba::new(1, 2, 3, 4));
    }

    #[test]
    fn test_choose_returns_table_value() {
        let table = ColorTable::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let c = table.choose(&mut rng).unwrap();
            assert!(table.iter().any(|(_, v)| v == c));
        }
        assert!(matches!(
            ColorTable::empty().choose(&mut rng),
            Err(SandboxError::EmptyColorTable)
        ));
    }

    #[test]
    fn test_user_data_packing() {
        let c = Rgba::new(0, 0, 0, 0);
        assert_eq!(Rgba::from_user_data(c.to_user_data()), Some(c));
        let c = Rgba::new(255, 165, 0, 255);
        assert_eq!(Rgba::from_user_data(c.to_user_data()), Some(c));
        assert_eq!(Rgba::from_user_data(0), None);
    }

    #[test]
    fn test_table_from_yaml() {
        let table: ColorTable = serde_yaml::from_str("grey: [128, 128, 128, 255]").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("grey").unwrap(), Rgba::opaque(128, 128, 128));
    }
}
