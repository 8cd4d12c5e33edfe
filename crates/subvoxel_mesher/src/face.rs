//! Oriented output faces and the plane-to-cube projection.

use glam::Vec3;

use crate::core::{Axis, Direction};
use crate::greedy::PlaneRect;

/// One merged, oriented rectangle on the surface of the volume.
///
/// Corners are in the unit cube `[0, 1]³`. Faces own their data; nothing
/// refers back into the mesher's buffers.
#[derive(Clone, Debug, PartialEq)]
pub struct Face<M> {
    pub material: M,
    pub direction: Direction,
    /// `[lower_left, upper_left, lower_right, upper_right]`.
    pub corners: [Vec3; 4],
    /// True when the face lies on the volume's outer shell (plane 0 or
    /// `side` along its axis) and may be culled against the neighbour block.
    pub is_outer_boundary: bool,
}

impl<M> Face<M> {
    #[inline]
    pub fn lower_left(&self) -> Vec3 {
        self.corners[0]
    }

    #[inline]
    pub fn upper_left(&self) -> Vec3 {
        self.corners[1]
    }

    #[inline]
    pub fn lower_right(&self) -> Vec3 {
        self.corners[2]
    }

    #[inline]
    pub fn upper_right(&self) -> Vec3 {
        self.corners[3]
    }

    /// Corners as 12 packed floats, ready for a vertex buffer.
    pub fn positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.corners)
    }

    /// Unit normal of the face.
    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.direction.normal())
    }

    /// Area in unit-cube space.
    pub fn area(&self) -> f32 {
        let u = self.lower_right() - self.lower_left();
        let v = self.upper_left() - self.lower_left();
        u.cross(v).length()
    }
}

/// Place logical plane coordinates `(row, axis, column)` in the cube.
///
/// X faces swap the first two components, Y faces pass through, Z faces
/// swap the last two.
#[inline]
fn permute(v: Vec3, axis: Axis) -> Vec3 {
    match axis {
        Axis::X => Vec3::new(v.y, v.x, v.z),
        Axis::Y => v,
        Axis::Z => Vec3::new(v.x, v.z, v.y),
    }
}

/// Project a merged plane rectangle into an oriented face.
///
/// `axis_pos` is the cell position along the direction's axis. Positive
/// faces sit on the far side of their cell.
pub fn project_face<M>(
    rect: &PlaneRect,
    direction: Direction,
    axis_pos: u32,
    side: u32,
    material: M,
) -> Face<M> {
    let axis = direction.axis();
    let offset = if direction.is_positive() { 1 } else { 0 };
    let plane = axis_pos + offset;
    let scale = side as f32;

    let row0 = rect.row as f32;
    let row1 = (rect.row + rect.width) as f32;
    let col0 = rect.column as f32;
    let col1 = (rect.column + rect.height) as f32;
    let depth = plane as f32;

    let corner = |row: f32, column: f32| permute(Vec3::new(row, depth, column), axis) / scale;

    Face {
        material,
        direction,
        corners: [
            corner(row0, col0),
            corner(row0, col1),
            corner(row1, col0),
            corner(row1, col1),
        ],
        is_outer_boundary: plane == 0 || plane == side,
    }
}
