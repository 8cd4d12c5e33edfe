use criterion::{black_box, criterion_group, criterion_main, Criterion};

use subvoxel_mesher::{
    build_mesh, greedy_mesh_plane_copy, DenseVoxels, MeshConfig, RenderLayer, VoxelMaterial,
};

const STONE: VoxelMaterial = VoxelMaterial::solid(1);
const DIRT: VoxelMaterial = VoxelMaterial::solid(2);
const LEAVES: VoxelMaterial = VoxelMaterial::cutout(3);
const GLASS: VoxelMaterial = VoxelMaterial::translucent(4);

/// Cheap deterministic per-cell hash so volumes are reproducible without an RNG.
fn cell_hash(x: i32, y: i32, z: i32) -> u32 {
    let mut h = (x as u32).wrapping_mul(0x9E37_79B1)
        ^ (y as u32).wrapping_mul(0x85EB_CA77)
        ^ (z as u32).wrapping_mul(0xC2B2_AE3D);
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^ (h >> 12)
}

fn solid(side: u32) -> DenseVoxels<VoxelMaterial> {
    let n = side as i32;
    DenseVoxels::from_fn(side, VoxelMaterial::AIR, |x, y, z| {
        let inside = |c: i32| (0..n).contains(&c);
        if inside(x) && inside(y) && inside(z) { STONE } else { VoxelMaterial::AIR }
    })
}

/// Chiselled-looking mix: solid base, carved noise, glass and leaves on top.
fn mixed(side: u32) -> DenseVoxels<VoxelMaterial> {
    let n = side as i32;
    DenseVoxels::from_fn(side, VoxelMaterial::AIR, |x, y, z| {
        let inside = |c: i32| (0..n).contains(&c);
        if !(inside(x) && inside(y) && inside(z)) {
            return VoxelMaterial::AIR;
        }
        let h = cell_hash(x, y, z);
        match (y * 4 / n, h % 8) {
            (0, 0) => DIRT,
            (0, _) | (1, 1..=6) => STONE,
            (2, 0..=2) => GLASS,
            (2, 3..=4) => LEAVES,
            (3, 0) => LEAVES,
            _ => VoxelMaterial::AIR,
        }
    })
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_mesh");

    for side in [8u32, 16, 32] {
        let config = MeshConfig::new(side).unwrap();
        let solid = solid(side);
        let mixed = mixed(side);

        group.bench_function(format!("solid_{side}_opaque"), |b| {
            b.iter(|| black_box(build_mesh(&solid, RenderLayer::Opaque, &config).unwrap()))
        });
        group.bench_function(format!("mixed_{side}_opaque"), |b| {
            b.iter(|| black_box(build_mesh(&mixed, RenderLayer::Opaque, &config).unwrap()))
        });
        group.bench_function(format!("mixed_{side}_non_opaque"), |b| {
            b.iter(|| black_box(build_mesh(&mixed, RenderLayer::NonOpaque, &config).unwrap()))
        });
    }

    group.finish();
}

fn bench_plane(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_mesh_plane");

    let full = vec![(1u64 << 62) - 1; 62];
    let noisy: Vec<u64> = (0..62)
        .map(|row| {
            (0..62).fold(0u64, |acc, col| {
                acc | (((cell_hash(row, col, 0) & 1) as u64) << col)
            })
        })
        .collect();

    group.bench_function("full_62", |b| b.iter(|| black_box(greedy_mesh_plane_copy(&full, 62))));
    group.bench_function("noisy_62", |b| b.iter(|| black_box(greedy_mesh_plane_copy(&noisy, 62))));

    group.finish();
}

criterion_group!(benches, bench_build, bench_plane);
criterion_main!(benches);
