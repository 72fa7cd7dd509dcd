//! Conversions between the legacy map coordinate system, the grid ("new")
//! coordinate system, and chunk space.
//!
//! Legacy maps put the origin at the top right with +X west and +Y south.
//! The voxel grid uses +X south and +Y west, and chunks use +X east and
//! +Y south with the origin at the top left. Every consumer goes through
//! these functions instead of flipping axes inline.

use crate::{
    AbsoluteChunkVoxelInt2, ChunkInt2, ChunkVoxelInt2, Double2, Int2, NewInt2, OriginalInt2,
};

pub const CHUNK_DIM: i32 = 64;

/// Legacy distance units per voxel.
pub const ARENA_UNITS: f64 = 128.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkVoxel {
    pub chunk: ChunkInt2,
    pub voxel: ChunkVoxelInt2,
}

/// Swaps axes between the legacy and new systems. The conversion is its own inverse.
#[inline]
pub fn original_voxel_to_new_voxel(voxel: OriginalInt2) -> NewInt2 {
    Int2::new(voxel.y, voxel.x)
}

#[inline]
pub fn new_voxel_to_original_voxel(voxel: NewInt2) -> OriginalInt2 {
    original_voxel_to_new_voxel(voxel)
}

#[inline]
pub fn transformed_double(voxel: Double2) -> Double2 {
    Double2::new(voxel.y, voxel.x)
}

/// Rounds `coord` up to the nearest multiple of the chunk dimension.
#[inline]
pub fn next_higher_chunk_multiple(coord: i32) -> i32 {
    let remainder = coord.rem_euclid(CHUNK_DIM);
    if remainder == 0 {
        coord
    } else {
        coord + CHUNK_DIM - remainder
    }
}

pub fn chunk_voxel_to_new_voxel(
    chunk: ChunkInt2,
    voxel: ChunkVoxelInt2,
    _grid_width: i32,
    grid_depth: i32,
) -> NewInt2 {
    let absolute = chunk_voxel_to_absolute(chunk, voxel);
    let next_higher_x = next_higher_chunk_multiple(grid_depth);
    Int2::new(absolute.y, (next_higher_x - 1) - absolute.x)
}

#[inline]
pub fn chunk_voxel_to_absolute(chunk: ChunkInt2, voxel: ChunkVoxelInt2) -> AbsoluteChunkVoxelInt2 {
    Int2::new(
        chunk.x * CHUNK_DIM + voxel.x,
        chunk.y * CHUNK_DIM + voxel.y,
    )
}

pub fn new_voxel_to_chunk_voxel(voxel: NewInt2, _grid_width: i32, grid_depth: i32) -> ChunkVoxel {
    let next_higher_x = next_higher_chunk_multiple(grid_depth);
    let absolute = Int2::new((next_higher_x - 1) - voxel.y, voxel.x);
    absolute_to_chunk_voxel(absolute)
}

#[inline]
pub fn new_voxel_to_chunk(voxel: NewInt2, grid_width: i32, grid_depth: i32) -> ChunkInt2 {
    new_voxel_to_chunk_voxel(voxel, grid_width, grid_depth).chunk
}

pub fn new_voxel_to_absolute(
    voxel: NewInt2,
    grid_width: i32,
    grid_depth: i32,
) -> AbsoluteChunkVoxelInt2 {
    let cv = new_voxel_to_chunk_voxel(voxel, grid_width, grid_depth);
    chunk_voxel_to_absolute(cv.chunk, cv.voxel)
}

/// Splits an absolute chunk voxel into its chunk and in-chunk voxel. Negative
/// coordinates floor toward the lower chunk.
#[inline]
pub fn absolute_to_chunk_voxel(voxel: AbsoluteChunkVoxelInt2) -> ChunkVoxel {
    ChunkVoxel {
        chunk: Int2::new(voxel.x.div_euclid(CHUNK_DIM), voxel.y.div_euclid(CHUNK_DIM)),
        voxel: Int2::new(voxel.x.rem_euclid(CHUNK_DIM), voxel.y.rem_euclid(CHUNK_DIM)),
    }
}

/// Index into a legacy layer array for grid cell `(x, z)`. Legacy layers are
/// stored in reverse on both axes relative to the grid.
#[inline]
pub fn legacy_layer_index(x: usize, z: usize, width: usize, depth: usize) -> usize {
    ((depth - 1) - z) + ((width - 1) - x) * depth
}

/// Mirrors a legacy map position (e.g. a lock) on both axes into grid space.
#[inline]
pub fn flip_legacy_voxel(voxel: OriginalInt2, width: i32, depth: i32) -> NewInt2 {
    Int2::new((width - 1) - voxel.x, (depth - 1) - voxel.y)
}

/// Converts a legacy start point (in legacy units) to voxel-space reals.
#[inline]
pub fn start_point_to_real(point: OriginalInt2) -> Double2 {
    Double2::new(point.x as f64 / ARENA_UNITS, point.y as f64 / ARENA_UNITS)
}
