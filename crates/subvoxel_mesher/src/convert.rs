//! Dense voxel storage usable as a sampler.
//!
//! Stores the volume together with its halo as one padded array, so halo
//! neighbours (cells just outside the block) can be filled in by the caller
//! and take part in boundary culling.

use crate::material::VoxelSampler;

/// Dense padded voxel volume covering `[-1, side]` on each axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseVoxels<M> {
    side: u32,
    empty: M,
    /// `(x + 1) + P * ((y + 1) + P * (z + 1))` with `P = side + 2`.
    cells: Vec<M>,
}

impl<M: Clone> DenseVoxels<M> {
    /// All cells, halo included, set to `empty`.
    pub fn new(side: u32, empty: M) -> Self {
        let p = side as usize + 2;
        Self {
            side,
            cells: vec![empty.clone(); p * p * p],
            empty,
        }
    }

    /// Fill every cell in `[-1, side]³` from `f`.
    pub fn from_fn<F>(side: u32, empty: M, f: F) -> Self
    where
        F: Fn(i32, i32, i32) -> M,
    {
        let mut voxels = Self::new(side, empty);
        let max = side as i32;
        for z in -1..=max {
            for y in -1..=max {
                for x in -1..=max {
                    if let Some(idx) = voxels.index(x, y, z) {
                        voxels.cells[idx] = f(x, y, z);
                    }
                }
            }
        }
        voxels
    }

    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        let range = -1..=self.side as i32;
        if !(range.contains(&x) && range.contains(&y) && range.contains(&z)) {
            return None;
        }
        let p = self.side as usize + 2;
        Some((x + 1) as usize + p * ((y + 1) as usize + p * (z + 1) as usize))
    }

    /// Set one cell. Halo coordinates are allowed; anything outside
    /// `[-1, side]` is ignored and returns `false`.
    pub fn set(&mut self, x: i32, y: i32, z: i32, material: M) -> bool {
        match self.index(x, y, z) {
            Some(idx) => {
                self.cells[idx] = material;
                true
            }
            None => false,
        }
    }

    /// Material at a cell, or the empty material outside `[-1, side]`.
    pub fn get(&self, x: i32, y: i32, z: i32) -> &M {
        match self.index(x, y, z) {
            Some(idx) => &self.cells[idx],
            None => &self.empty,
        }
    }

    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn empty_material(&self) -> &M {
        &self.empty
    }
}

impl<M: Clone + PartialEq> DenseVoxels<M> {
    /// True when no cell, halo included, differs from the empty material.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|m| *m == self.empty)
    }
}

impl<M: Clone> VoxelSampler<M> for DenseVoxels<M> {
    #[inline]
    fn sample(&self, x: i32, y: i32, z: i32) -> M {
        self.get(x, y, z).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::VoxelMaterial;

    #[test]
    fn set_get_interior_and_halo() {
        let mut voxels = DenseVoxels::new(4, VoxelMaterial::AIR);
        assert!(voxels.is_empty());

        assert!(voxels.set(0, 0, 0, VoxelMaterial::solid(1)));
        assert!(voxels.set(-1, 4, 2, VoxelMaterial::solid(2)));
        assert_eq!(*voxels.get(0, 0, 0), VoxelMaterial::solid(1));
        assert_eq!(*voxels.get(-1, 4, 2), VoxelMaterial::solid(2));
        assert!(voxels.get(1, 0, 0).is_air());
        assert!(!voxels.is_empty());
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut voxels = DenseVoxels::new(2, VoxelMaterial::AIR);
        assert!(!voxels.set(3, 0, 0, VoxelMaterial::solid(1)));
        assert!(!voxels.set(0, -2, 0, VoxelMaterial::solid(1)));
        assert!(voxels.is_empty());
        assert!(voxels.get(100, 0, 0).is_air());
        assert!(voxels.sample(-5, -5, -5).is_air());
    }

    #[test]
    fn from_fn_covers_padded_range() {
        let voxels = DenseVoxels::from_fn(2, VoxelMaterial::AIR, |x, y, z| {
            VoxelMaterial::solid((x + 1 + 4 * (y + 1) + 16 * (z + 1)) as u16 + 1)
        });
        for z in -1..=2 {
            for y in -1..=2 {
                for x in -1..=2 {
                    let expected = (x + 1 + 4 * (y + 1) + 16 * (z + 1)) as u16 + 1;
                    assert_eq!(voxels.sample(x, y, z).id, expected);
                }
            }
        }
        assert_eq!(voxels.side(), 2);
    }

    #[test]
    fn distinct_cells_do_not_alias() {
        let mut voxels = DenseVoxels::new(3, 0u8);
        let mut n = 0u8;
        for z in -1..=3 {
            for y in -1..=3 {
                for x in -1..=3 {
                    n += 1;
                    voxels.set(x, y, z, n);
                }
            }
        }
        assert_eq!(n, 125);
        assert_eq!(*voxels.get(-1, -1, -1), 1);
        assert_eq!(*voxels.get(3, 3, 3), 125);
        assert_eq!(*voxels.get(0, -1, -1), 2);
        assert_eq!(*voxels.get(-1, 0, -1), 6);
    }
}
