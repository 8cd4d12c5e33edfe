//! Core type definitions for the sub-block mesher.

/// Numeric material identifier used by [`VoxelMaterial`](crate::material::VoxelMaterial).
pub type MaterialId = u16;

/// Reserved material value for empty voxels.
pub const MATERIAL_EMPTY: MaterialId = 0;

/// Bits in one occupancy column word.
pub const COLUMN_BITS: u32 = u64::BITS;

/// Halo cells sampled on each side of the volume.
pub const HALO: u32 = 1;

/// Largest grid side length whose padded column still fits one word (62).
pub const MAX_SIDE: u32 = COLUMN_BITS - 2 * HALO;

/// Default grid side length (cells per block edge).
pub const DEFAULT_SIDE: u32 = 16;

/// Principal axis of the unit cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Face direction (outward normal of a face).
///
/// The discriminant is the direction's slot in per-direction arrays,
/// matching the order of [`Direction::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Direction {
    /// All six directions in output order.
    pub const ALL: [Direction; 6] = [
        Direction::PosY,
        Direction::NegY,
        Direction::PosX,
        Direction::NegX,
        Direction::PosZ,
        Direction::NegZ,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::PosX | Direction::NegX => Axis::X,
            Direction::PosY | Direction::NegY => Axis::Y,
            Direction::PosZ | Direction::NegZ => Axis::Z,
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, Direction::PosX | Direction::PosY | Direction::PosZ)
    }

    /// The direction facing the other way along the same axis.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::PosY => Direction::NegY,
            Direction::NegY => Direction::PosY,
            Direction::PosX => Direction::NegX,
            Direction::NegX => Direction::PosX,
            Direction::PosZ => Direction::NegZ,
            Direction::NegZ => Direction::PosZ,
        }
    }

    /// Direction along `axis` with the given sign.
    pub fn from_axis(axis: Axis, positive: bool) -> Direction {
        match (axis, positive) {
            (Axis::X, true) => Direction::PosX,
            (Axis::X, false) => Direction::NegX,
            (Axis::Y, true) => Direction::PosY,
            (Axis::Y, false) => Direction::NegY,
            (Axis::Z, true) => Direction::PosZ,
            (Axis::Z, false) => Direction::NegZ,
        }
    }

    /// Unit normal vector.
    pub fn normal(self) -> [f32; 3] {
        FACE_NORMALS[self.index()]
    }
}

/// Normal vectors for each face direction, indexed by [`Direction::index`].
pub const FACE_NORMALS: [[f32; 3]; 6] = [
    [0.0, 1.0, 0.0],   // +Y
    [0.0, -1.0, 0.0],  // -Y
    [1.0, 0.0, 0.0],   // +X
    [-1.0, 0.0, 0.0],  // -X
    [0.0, 0.0, 1.0],   // +Z
    [0.0, 0.0, -1.0],  // -Z
];

/// Rendering pass a build is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderLayer {
    /// Occlusion merged across every non-see-through material.
    Opaque,
    /// Faces generated per material so each keeps its own transparency.
    NonOpaque,
}
