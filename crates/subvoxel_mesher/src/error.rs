//! Errors raised before a build starts.

use thiserror::Error;

/// Configuration errors. A build either fails with one of these before
/// sampling anything or runs to completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("grid side length must be at least 1")]
    ZeroSide,

    #[error("grid side length {side} exceeds the maximum of {max} (side + 2 halo cells must fit a 64-bit column)")]
    SideTooLarge { side: u32, max: u32 },
}
