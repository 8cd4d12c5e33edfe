//! Build configuration.

use crate::core::{DEFAULT_SIDE, MAX_SIDE};
use crate::error::MeshError;

/// Parameters of one build.
///
/// The grid side length is fixed for the whole build; every sampler
/// coordinate lies in `[-1, side]` on each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshConfig {
    /// Cells per block edge.
    pub side: u32,
}

impl MeshConfig {
    /// Create a validated configuration.
    pub fn new(side: u32) -> Result<Self, MeshError> {
        let config = Self { side };
        config.validate()?;
        Ok(config)
    }

    /// Check that the side length fits the column word.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.side == 0 {
            return Err(MeshError::ZeroSide);
        }
        if self.side > MAX_SIDE {
            return Err(MeshError::SideTooLarge {
                side: self.side,
                max: MAX_SIDE,
            });
        }
        Ok(())
    }

    /// Side length including the halo on both ends.
    #[inline]
    pub fn padded_side(&self) -> usize {
        self.side as usize + 2
    }

    /// Mask covering the `side` interior bits of a plane row.
    #[inline]
    pub fn row_mask(&self) -> u64 {
        (1u64 << self.side) - 1
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self { side: DEFAULT_SIDE }
    }
}
