//! Padded occupancy columns built from a single scan of the sampler.
//!
//! Every padded cell in `[-1, side]^3` is sampled exactly once. Each
//! occupied cell sets one bit in each of the three axis projections, so the
//! X, Y and Z columns stay in sync without re-sampling.
//!
//! Column layout for a padded side `P = side + 2`, padded coordinates
//! `0..P` (padded = cell + 1):
//! - X columns: `cols[y + z * P]`, bit `x`
//! - Y columns: `cols[P² + x + z * P]`, bit `y`
//! - Z columns: `cols[2P² + x + y * P]`, bit `z`

use crate::config::MeshConfig;
use crate::core::{Axis, RenderLayer};
use crate::error::MeshError;
use crate::material::{Material, MaterialTable, VoxelSampler};

/// Three orthogonal projections of one occupancy classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSet {
    padded: usize,
    cols: Vec<u64>,
}

impl ColumnSet {
    /// Empty columns for a padded side length of at most 64.
    pub(crate) fn new(padded: usize) -> Self {
        debug_assert!(padded <= u64::BITS as usize, "padded side exceeds column width");
        Self {
            padded,
            cols: vec![0u64; 3 * padded * padded],
        }
    }

    /// Mark padded cell `(x, y, z)` occupied in all three projections.
    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, z: usize) {
        let p = self.padded;
        let p2 = p * p;
        debug_assert!(x < p && y < p && z < p, "Coordinates out of bounds");
        self.cols[y + z * p] |= 1u64 << x;
        self.cols[p2 + x + z * p] |= 1u64 << y;
        self.cols[2 * p2 + x + y * p] |= 1u64 << z;
    }

    /// Column along `axis` at the other two padded coordinates `(u, v)`.
    ///
    /// `(u, v)` is `(y, z)` for X, `(x, z)` for Y and `(x, y)` for Z.
    #[inline]
    pub fn column(&self, axis: Axis, u: usize, v: usize) -> u64 {
        let p = self.padded;
        self.cols[axis.index() * p * p + u + v * p]
    }

    /// All columns of one projection.
    pub fn axis_columns(&self, axis: Axis) -> &[u64] {
        let p2 = self.padded * self.padded;
        let start = axis.index() * p2;
        &self.cols[start..start + p2]
    }

    /// Whether padded cell `(x, y, z)` is occupied.
    #[inline]
    pub fn is_set(&self, x: usize, y: usize, z: usize) -> bool {
        (self.column(Axis::Y, x, z) >> y) & 1 != 0
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.axis_columns(Axis::Y)
            .iter()
            .map(|col| col.count_ones() as usize)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cols.iter().all(|&col| col == 0)
    }

    #[inline]
    pub fn padded_side(&self) -> usize {
        self.padded
    }
}

/// Occupancy of one volume for one render layer.
pub struct OccupancyMasks<M> {
    config: MeshConfig,
    layer: RenderLayer,
    /// Non-see-through cells, any material.
    overall: ColumnSet,
    /// NonOpaque pass only: slot `i` holds material index `i + 1`.
    per_material: Vec<ColumnSet>,
    /// Opaque pass only: material index of each interior cell, used to
    /// attribute faces without sampling twice. `x + side * (y + side * z)`.
    cell_materials: Vec<u32>,
    materials: MaterialTable<M>,
}

impl<M: Material> OccupancyMasks<M> {
    /// Scan the padded volume once and build the occupancy columns.
    ///
    /// Fails on an invalid `config` before the sampler is called.
    pub fn build<S>(sampler: &S, layer: RenderLayer, config: &MeshConfig) -> Result<Self, MeshError>
    where
        S: VoxelSampler<M> + ?Sized,
    {
        config.validate()?;

        let side = config.side as usize;
        let p = config.padded_side();
        let opaque_pass = layer == RenderLayer::Opaque;

        let mut overall = ColumnSet::new(p);
        let mut per_material: Vec<ColumnSet> = Vec::new();
        let mut cell_materials = if opaque_pass {
            vec![MaterialTable::<M>::NONE; side * side * side]
        } else {
            Vec::new()
        };
        let mut materials = MaterialTable::new();

        for x in 0..p {
            for y in 0..p {
                for z in 0..p {
                    let material = sampler.sample(x as i32 - 1, y as i32 - 1, z as i32 - 1);

                    if !material.is_see_through() {
                        overall.set(x, y, z);

                        let interior = (1..=side).contains(&x)
                            && (1..=side).contains(&y)
                            && (1..=side).contains(&z);
                        if opaque_pass && interior {
                            cell_materials[(x - 1) + side * ((y - 1) + side * (z - 1))] =
                                materials.index_for_layer(&material, layer);
                        }
                    }

                    if !opaque_pass {
                        let idx = materials.index_for_layer(&material, layer) as usize;
                        if idx != 0 {
                            while per_material.len() < idx {
                                per_material.push(ColumnSet::new(p));
                            }
                            per_material[idx - 1].set(x, y, z);
                        }
                    }
                }
            }
        }

        Ok(Self {
            config: *config,
            layer,
            overall,
            per_material,
            cell_materials,
            materials,
        })
    }
}

impl<M> OccupancyMasks<M> {
    #[inline]
    pub fn side(&self) -> usize {
        self.config.side as usize
    }

    /// Configuration the volume was scanned with.
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    #[inline]
    pub fn layer(&self) -> RenderLayer {
        self.layer
    }

    /// Columns of every non-see-through cell.
    pub fn overall(&self) -> &ColumnSet {
        &self.overall
    }

    /// Columns of one interned material (NonOpaque pass).
    pub fn material_columns(&self, idx: u32) -> Option<&ColumnSet> {
        (idx as usize)
            .checked_sub(1)
            .and_then(|i| self.per_material.get(i))
    }

    /// Number of per-material column sets (NonOpaque pass).
    pub fn material_column_count(&self) -> usize {
        self.per_material.len()
    }

    /// Material index owning interior cell `(x, y, z)` in the Opaque pass.
    /// Returns 0 for empty or filtered cells and in the NonOpaque pass.
    #[inline]
    pub fn cell_material(&self, x: usize, y: usize, z: usize) -> u32 {
        self.cell_materials
            .get(x + self.side() * (y + self.side() * z))
            .copied()
            .unwrap_or(0)
    }

    pub fn materials(&self) -> &MaterialTable<M> {
        &self.materials
    }

    pub(crate) fn into_materials(self) -> MaterialTable<M> {
        self.materials
    }

    /// True when the scan found nothing that could produce a face.
    pub fn is_empty(&self) -> bool {
        match self.layer {
            RenderLayer::Opaque => self.overall.is_empty(),
            RenderLayer::NonOpaque => self.per_material.iter().all(ColumnSet::is_empty),
        }
    }
}
