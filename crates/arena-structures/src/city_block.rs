//! Naming of procedural city block templates.

/// Block codes, indexed by block kind (equipment, mages guild, noble house,
/// temple, tavern, spacer, houses).
pub const CITY_BLOCK_CODES: [&str; 7] = ["EQ", "MG", "NB", "TP", "TV", "TS", "BS"];

/// Number of variations shipped for each block code.
pub const CITY_BLOCK_VARIATIONS: [u32; 7] = [13, 11, 10, 12, 15, 11, 20];

pub const CITY_BLOCK_ROTATIONS: [&str; 4] = ["A", "B", "C", "D"];

/// Spacing between stamped city blocks, in voxels.
pub const CITY_BLOCK_STRIDE: usize = 20;

pub fn city_block_code(block_index: usize) -> Option<&'static str> {
    CITY_BLOCK_CODES.get(block_index).copied()
}

pub fn city_block_variations(block_index: usize) -> Option<u32> {
    CITY_BLOCK_VARIATIONS.get(block_index).copied()
}

pub fn city_block_rotation(index: usize) -> Option<&'static str> {
    CITY_BLOCK_ROTATIONS.get(index).copied()
}

pub fn city_block_mif_name(code: &str, variation: u32, rotation: &str) -> String {
    format!("{code}BD{variation}{rotation}.MIF")
}
