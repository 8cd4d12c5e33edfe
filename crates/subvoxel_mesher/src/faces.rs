//! Bitwise face derivation.
//!
//! A cell has a face towards a neighbour when it is occupied and the
//! neighbour is not. Along a column that is one shift and one mask:
//! shifting the occluders left by one lines each cell up with its
//! predecessor (negative faces), shifting right lines it up with its
//! successor (positive faces).
//!
//! The padded halo bits are dropped afterwards, leaving `side` bits per
//! column that are scattered into 2D bit-planes, one per
//! (direction, material, axis position).
//!
//! Plane orientation per axis (row, column within row):
//! - X planes: row = y, column = z
//! - Y planes: row = x, column = z
//! - Z planes: row = x, column = y

use std::collections::BTreeMap;

use crate::core::{Axis, Direction, RenderLayer};
use crate::occupancy::OccupancyMasks;

/// Cells of `col` whose predecessor is not in `occluders`.
#[inline]
pub fn negative_faces(col: u64, occluders: u64) -> u64 {
    col & !(occluders << 1)
}

/// Cells of `col` whose successor is not in `occluders`.
#[inline]
pub fn positive_faces(col: u64, occluders: u64) -> u64 {
    col & !(occluders >> 1)
}

/// Cell coordinates of plane bit `(row, column)` at `axis_pos` along `axis`.
#[inline]
pub fn plane_to_cell(axis: Axis, axis_pos: usize, row: usize, column: usize) -> (usize, usize, usize) {
    match axis {
        Axis::X => (axis_pos, row, column),
        Axis::Y => (row, axis_pos, column),
        Axis::Z => (row, column, axis_pos),
    }
}

/// One 2D slice of face bits: `rows[row]` bit `c` is the face at (row, c).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitPlane {
    pub direction: Direction,
    /// Interned material index (never 0).
    pub material: u32,
    /// Cell position along the direction's axis, `0..side`.
    pub axis_pos: u32,
    pub rows: Vec<u64>,
}

/// Every non-empty face bit-plane of one build.
#[derive(Clone, Debug)]
pub struct FacePlanes {
    side: usize,
    /// Per direction, keyed by (material index, axis position).
    planes: [BTreeMap<(u32, u32), Vec<u64>>; 6],
}

impl FacePlanes {
    fn new(side: usize) -> Self {
        Self {
            side,
            planes: Default::default(),
        }
    }

    #[inline]
    fn add_bit(&mut self, direction: Direction, material: u32, axis_pos: usize, row: usize, column: usize) {
        let side = self.side;
        self.planes[direction.index()]
            .entry((material, axis_pos as u32))
            .or_insert_with(|| vec![0u64; side])[row] |= 1u64 << column;
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Rows of one plane, if it has any face bits.
    pub fn plane(&self, direction: Direction, material: u32, axis_pos: u32) -> Option<&[u64]> {
        self.planes[direction.index()]
            .get(&(material, axis_pos))
            .map(Vec::as_slice)
    }

    /// Number of non-empty planes.
    pub fn len(&self) -> usize {
        self.planes.iter().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.iter().all(BTreeMap::is_empty)
    }

    /// Total face bits in one direction.
    pub fn face_count(&self, direction: Direction) -> usize {
        self.planes[direction.index()]
            .values()
            .flat_map(|rows| rows.iter())
            .map(|row| row.count_ones() as usize)
            .sum()
    }

    /// Total face bits over all directions.
    pub fn total_faces(&self) -> usize {
        Direction::ALL.iter().map(|&d| self.face_count(d)).sum()
    }

    /// Consume into planes ordered by direction, material, then axis position.
    pub fn into_planes(self) -> impl Iterator<Item = BitPlane> {
        Direction::ALL
            .into_iter()
            .zip(self.planes)
            .flat_map(|(direction, planes)| {
                planes.into_iter().map(move |((material, axis_pos), rows)| BitPlane {
                    direction,
                    material,
                    axis_pos,
                    rows,
                })
            })
    }
}

/// Derive the face bit-planes of a scanned volume for its render layer.
pub fn derive_face_planes<M>(masks: &OccupancyMasks<M>) -> FacePlanes {
    match masks.layer() {
        RenderLayer::Opaque => derive_opaque(masks),
        RenderLayer::NonOpaque => derive_non_opaque(masks),
    }
}

/// Opaque pass: one differencing of the merged occupancy. Each face bit is
/// attributed to the material of the cell that owns it.
fn derive_opaque<M>(masks: &OccupancyMasks<M>) -> FacePlanes {
    let side = masks.side();
    let interior = masks.config().row_mask();
    let overall = masks.overall();
    let mut planes = FacePlanes::new(side);

    for axis in Axis::ALL {
        for (direction, positive) in [
            (Direction::from_axis(axis, false), false),
            (Direction::from_axis(axis, true), true),
        ] {
            for row in 0..side {
                for column in 0..side {
                    let col = overall.column(axis, row + 1, column + 1);
                    if col == 0 {
                        continue;
                    }

                    let faces = if positive {
                        positive_faces(col, col)
                    } else {
                        negative_faces(col, col)
                    };
                    let mut bits = (faces >> 1) & interior;

                    while bits != 0 {
                        let axis_pos = bits.trailing_zeros() as usize;
                        bits &= bits - 1;

                        let (x, y, z) = plane_to_cell(axis, axis_pos, row, column);
                        let material = masks.cell_material(x, y, z);
                        if material != 0 {
                            planes.add_bit(direction, material, axis_pos, row, column);
                        }
                    }
                }
            }
        }
    }

    planes
}

/// NonOpaque pass: each material is differenced against itself and the
/// merged occupancy, so no face is drawn where the Opaque pass already
/// closed the surface or where the same material continues.
fn derive_non_opaque<M>(masks: &OccupancyMasks<M>) -> FacePlanes {
    let side = masks.side();
    let interior = masks.config().row_mask();
    let overall = masks.overall();
    let mut planes = FacePlanes::new(side);

    for axis in Axis::ALL {
        let neg_dir = Direction::from_axis(axis, false);
        let pos_dir = Direction::from_axis(axis, true);

        for material in 1..=masks.material_column_count() as u32 {
            let Some(columns) = masks.material_columns(material) else {
                continue;
            };

            for row in 0..side {
                for column in 0..side {
                    let material_col = columns.column(axis, row + 1, column + 1);
                    if material_col == 0 {
                        continue;
                    }
                    let occluders = material_col | overall.column(axis, row + 1, column + 1);

                    for (direction, faces) in [
                        (neg_dir, negative_faces(material_col, occluders)),
                        (pos_dir, positive_faces(material_col, occluders)),
                    ] {
                        let mut bits = (faces >> 1) & interior;
                        while bits != 0 {
                            let axis_pos = bits.trailing_zeros() as usize;
                            bits &= bits - 1;
                            planes.add_bit(direction, material, axis_pos, row, column);
                        }
                    }
                }
            }
        }
    }

    planes
}
