//! Material classification, voxel sampling and the per-build intern table.

use std::collections::HashMap;
use std::hash::Hash;

use crate::core::{MaterialId, RenderLayer, MATERIAL_EMPTY};

/// A renderable material as seen by the mesher.
///
/// The mesher only compares, hashes and classifies materials; it never
/// constructs or mutates them. Both predicates must be pure for the
/// duration of a build.
pub trait Material: Clone + Eq + Hash {
    /// Whether light passes through this material (air, glass, water...).
    /// See-through cells never occlude a neighbour in the Opaque pass.
    fn is_see_through(&self) -> bool;

    /// Whether this material emits faces in the given render pass.
    fn is_required_for_layer(&self, layer: RenderLayer) -> bool;

    #[inline]
    fn is_opaque(&self) -> bool {
        !self.is_see_through()
    }
}

/// Source of voxel data for one build.
///
/// Coordinates range over `[-1, side]` on each axis: the volume plus a
/// one-cell halo. Cells without data, halo cells included, must report an
/// empty (see-through, layer-less) material.
///
/// The sampler must return the same material for the same coordinate for
/// the whole build. The mesher queries each coordinate at most once but
/// does not detect an unstable sampler; output is unspecified if it is.
pub trait VoxelSampler<M> {
    fn sample(&self, x: i32, y: i32, z: i32) -> M;
}

impl<M, F> VoxelSampler<M> for F
where
    F: Fn(i32, i32, i32) -> M + ?Sized,
{
    #[inline]
    fn sample(&self, x: i32, y: i32, z: i32) -> M {
        self(x, y, z)
    }
}

/// Dense index assigned to each distinct material seen during a build.
///
/// Index 0 is reserved for "no material / filtered out by this layer";
/// real materials are numbered from 1 in first-seen order. A table lives
/// for exactly one build.
#[derive(Clone, Debug)]
pub struct MaterialTable<M> {
    materials: Vec<M>,
    index: HashMap<M, u32>,
}

impl<M: Material> MaterialTable<M> {
    /// Reserved index for cells that contribute no per-material faces.
    pub const NONE: u32 = 0;

    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Index of `material`, assigning the next one on first sight.
    pub fn intern(&mut self, material: &M) -> u32 {
        if let Some(&idx) = self.index.get(material) {
            return idx;
        }
        self.materials.push(material.clone());
        let idx = self.materials.len() as u32;
        self.index.insert(material.clone(), idx);
        idx
    }

    /// Index of `material` if it participates in `layer`, otherwise [`Self::NONE`].
    #[inline]
    pub fn index_for_layer(&mut self, material: &M, layer: RenderLayer) -> u32 {
        if material.is_required_for_layer(layer) {
            self.intern(material)
        } else {
            Self::NONE
        }
    }

    /// Look up an already interned index. Returns `None` for [`Self::NONE`].
    pub fn get(&self, idx: u32) -> Option<&M> {
        idx.checked_sub(1)
            .and_then(|i| self.materials.get(i as usize))
    }

    /// Number of distinct materials interned.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl<M: Material> Default for MaterialTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// How a [`VoxelMaterial`] interacts with light and render passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// No voxel. See-through, never rendered.
    Empty,
    /// Fully opaque, drawn in the Opaque pass.
    Solid,
    /// Alpha-tested (leaves, grates). Occludes, drawn in the NonOpaque pass.
    Cutout,
    /// Blended (glass, water). See-through, drawn in the NonOpaque pass.
    Translucent,
}

/// Simple concrete material: a numeric id plus its surface kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelMaterial {
    pub id: MaterialId,
    pub kind: SurfaceKind,
}

impl VoxelMaterial {
    pub const AIR: VoxelMaterial = VoxelMaterial {
        id: MATERIAL_EMPTY,
        kind: SurfaceKind::Empty,
    };

    pub const fn solid(id: MaterialId) -> Self {
        Self { id, kind: SurfaceKind::Solid }
    }

    pub const fn cutout(id: MaterialId) -> Self {
        Self { id, kind: SurfaceKind::Cutout }
    }

    pub const fn translucent(id: MaterialId) -> Self {
        Self { id, kind: SurfaceKind::Translucent }
    }

    #[inline]
    pub fn is_air(&self) -> bool {
        self.kind == SurfaceKind::Empty
    }
}

impl Default for VoxelMaterial {
    fn default() -> Self {
        Self::AIR
    }
}

impl Material for VoxelMaterial {
    #[inline]
    fn is_see_through(&self) -> bool {
        matches!(self.kind, SurfaceKind::Empty | SurfaceKind::Translucent)
    }

    #[inline]
    fn is_required_for_layer(&self, layer: RenderLayer) -> bool {
        match self.kind {
            SurfaceKind::Empty => false,
            SurfaceKind::Solid => layer == RenderLayer::Opaque,
            SurfaceKind::Cutout | SurfaceKind::Translucent => layer == RenderLayer::NonOpaque,
        }
    }
}
