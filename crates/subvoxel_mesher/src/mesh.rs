//! Main meshing pipeline.
//!
//! Orchestrates one build:
//! 1. Occupancy scan (sample every padded cell once)
//! 2. Face derivation (bit-shift differencing into bit-planes)
//! 3. Greedy merge (each plane into rectangles)
//! 4. Projection (rectangles into oriented unit-cube faces)
//!
//! A build is a pure function of its inputs: identical sampler contents,
//! layer and config produce an identical face sequence, order included.

use log::{debug, trace};

use crate::config::MeshConfig;
use crate::core::{Direction, RenderLayer};
use crate::error::MeshError;
use crate::face::{project_face, Face};
use crate::faces::derive_face_planes;
use crate::greedy::{greedy_mesh_plane, PlaneRect};
use crate::material::{Material, VoxelSampler};
use crate::occupancy::OccupancyMasks;

/// Statistics about a build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshStats {
    /// Total faces emitted.
    pub face_count: usize,
    /// Faces per direction, indexed by [`Direction::index`].
    pub faces_per_direction: [usize; 6],
    /// Unit cell faces covered by all faces (the unmerged face count).
    pub covered_cells: usize,
    /// Distinct materials interned during the scan.
    pub material_count: usize,
    /// `1 - faces / covered_cells`; 0 for an empty mesh.
    pub merge_efficiency: f32,
}

impl MeshStats {
    fn record(&mut self, direction: Direction, rect: &PlaneRect) {
        self.face_count += 1;
        self.faces_per_direction[direction.index()] += 1;
        self.covered_cells += rect.area();
    }

    fn finish(&mut self) {
        self.merge_efficiency = if self.covered_cells == 0 {
            0.0
        } else {
            1.0 - self.face_count as f32 / self.covered_cells as f32
        };
    }
}

/// Mesh one voxel volume for one render layer.
///
/// The sampler is queried once for every coordinate in `[-1, side]³`.
/// Fails only when `config` is invalid, before any sampling.
///
/// # Example
/// ```
/// use subvoxel_mesher::{build_mesh, MeshConfig, RenderLayer, VoxelMaterial};
///
/// let config = MeshConfig::new(4).unwrap();
/// let stone = VoxelMaterial::solid(1);
/// let sampler = |x: i32, y: i32, z: i32| {
///     if (0..4).contains(&x) && (0..4).contains(&y) && (0..4).contains(&z) {
///         stone
///     } else {
///         VoxelMaterial::AIR
///     }
/// };
///
/// let faces = build_mesh(&sampler, RenderLayer::Opaque, &config).unwrap();
/// assert_eq!(faces.len(), 6);
/// assert!(faces.iter().all(|f| f.is_outer_boundary));
/// ```
pub fn build_mesh<M, S>(
    sampler: &S,
    layer: RenderLayer,
    config: &MeshConfig,
) -> Result<Vec<Face<M>>, MeshError>
where
    M: Material,
    S: VoxelSampler<M> + ?Sized,
{
    build_mesh_with_stats(sampler, layer, config).map(|(faces, _)| faces)
}

/// Same as [`build_mesh`], also returning [`MeshStats`].
pub fn build_mesh_with_stats<M, S>(
    sampler: &S,
    layer: RenderLayer,
    config: &MeshConfig,
) -> Result<(Vec<Face<M>>, MeshStats), MeshError>
where
    M: Material,
    S: VoxelSampler<M> + ?Sized,
{
    let masks = OccupancyMasks::build(sampler, layer, config).map_err(|err| {
        debug!("rejecting {:?} build: {}", layer, err);
        err
    })?;
    let mut stats = MeshStats {
        material_count: masks.materials().len(),
        ..MeshStats::default()
    };

    if masks.is_empty() {
        trace!("{:?} build (side {}): empty volume", layer, config.side);
        return Ok((Vec::new(), stats));
    }

    let planes = derive_face_planes(&masks);
    let materials = masks.into_materials();

    let mut faces = Vec::new();
    let mut rects = Vec::new();

    for mut plane in planes.into_planes() {
        let Some(material) = materials.get(plane.material) else {
            continue;
        };

        rects.clear();
        greedy_mesh_plane(&mut plane.rows, config.side, &mut rects);

        for rect in &rects {
            stats.record(plane.direction, rect);
            faces.push(project_face(
                rect,
                plane.direction,
                plane.axis_pos,
                config.side,
                material.clone(),
            ));
        }
    }

    stats.finish();
    trace!(
        "{:?} build (side {}): {} materials, {} faces covering {} cells",
        layer,
        config.side,
        stats.material_count,
        stats.face_count,
        stats.covered_cells
    );

    Ok((faces, stats))
}
