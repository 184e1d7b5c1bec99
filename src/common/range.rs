use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::{SandboxError, SandboxResult};

/// Inclusive integer range used for every randomized spawn parameter.
///
/// Draws are uniform over the integers in `[lo, hi]`, both ends included.
/// Bounds are stored as given; an inverted range is only rejected when sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct RandomRange {
    pub lo: i32,
    pub hi: i32,
}

impl RandomRange {
    pub const fn new(lo: i32, hi: i32) -> Self {
        Self { lo, hi }
    }

    /// Builds the range `[extent * lo_fraction, extent * hi_fraction]`, truncating both ends.
    pub fn fraction_of(extent: u32, lo_fraction: f64, hi_fraction: f64) -> Self {
        let extent = f64::from(extent);
        Self {
            lo: (extent * lo_fraction) as i32,
            hi: (extent * hi_fraction) as i32,
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.lo as f32 && value <= self.hi as f32
    }

    /// Draws one integer from the range and returns it as a float.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> SandboxResult<f32> {
        if self.lo > self.hi {
            return Err(SandboxError::EmptyRange { lo: self.lo, hi: self.hi });
        }
        Ok(rng.gen_range(self.lo..=self.hi) as f32)
    }
}

impl From<[i32; 2]> for RandomRange {
    fn from([lo, hi]: [i32; 2]) -> Self {
        Self { lo, hi }
    }
}

impl From<RandomRange> for [i32; 2] {
    fn from(range: RandomRange) -> Self {
        [range.lo, range.hi]
    }
}
