//! Multi-material binary greedy meshing for sub-block voxel volumes.
//!
//! Given a sampler over an `N³` grid of materials (plus a one-cell halo),
//! this crate produces the merged, axis-aligned faces of the visible
//! surface, split by material and direction, for one render layer:
//!
//! - [`RenderLayer::Opaque`]: occlusion merged across every non-see-through
//!   material.
//! - [`RenderLayer::NonOpaque`]: each material differenced on its own, with
//!   faces already closed by opaque neighbours left out.
//!
//! Occupancy is packed into 64-bit columns, so the grid side length is at
//! most [`MAX_SIDE`] (62).
//!
//! # Example
//!
//! ```
//! use subvoxel_mesher::{build_mesh, DenseVoxels, MeshConfig, RenderLayer, VoxelMaterial};
//!
//! let mut voxels = DenseVoxels::new(2, VoxelMaterial::AIR);
//! voxels.set(0, 0, 0, VoxelMaterial::solid(1)); // Single cell in the corner
//!
//! let faces = build_mesh(&voxels, RenderLayer::Opaque, &MeshConfig::new(2).unwrap()).unwrap();
//! assert_eq!(faces.len(), 6); // Cube = 6 faces
//! ```

pub mod buckets;
pub mod config;
pub mod convert;
pub mod core;
pub mod error;
pub mod face;
pub mod faces;
pub mod greedy;
pub mod material;
pub mod mesh;
pub mod occupancy;

// Re-export primary types
pub use crate::core::{
    Axis,
    Direction,
    RenderLayer,
    MaterialId,
    // Constants
    COLUMN_BITS, DEFAULT_SIDE, FACE_NORMALS, HALO, MATERIAL_EMPTY, MAX_SIDE,
};
pub use crate::buckets::FaceBuckets;
pub use crate::config::MeshConfig;
pub use crate::convert::DenseVoxels;
pub use crate::error::MeshError;
pub use crate::face::{project_face, Face};
pub use crate::greedy::{greedy_mesh_plane, greedy_mesh_plane_copy, PlaneRect};
pub use crate::material::{Material, MaterialTable, SurfaceKind, VoxelMaterial, VoxelSampler};

// Re-export main entry points
pub use crate::mesh::{build_mesh, build_mesh_with_stats, MeshStats};
