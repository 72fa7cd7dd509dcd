//! Wilderness layout: which chunk template fills each of the 64x64 chunk
//! cells, and splicing the location's city into the center chunks.

use arena_geom::{Int2, NewInt2, OriginalInt2};
use arena_structures::template::WILD_CHUNK_DIM;
use arena_structures::{LayerSet, TemplateSource};
use arena_world::ArenaRandom;
use arena_world::tables::WildBlockPools;

use crate::citygen::generate_city;
use crate::error::{GenError, GenResult};
use crate::location::CityDefinition;

/// Chunk cells per side of the wilderness.
pub const WILD_CHUNKS: usize = 64;

/// The city occupies the 2x2 chunks starting at this chunk coordinate.
pub const WILD_CITY_CHUNK: usize = WILD_CHUNKS / 2 - 1;

const NORMAL_CHANCE: u32 = 0x6666;
const VILLAGE_CHANCE: u32 = 0x4000;
const DUNGEON_CHANCE: u32 = 0x2666;
const TAVERN_CHANCE: u32 = 0x1999;

const PLACEHOLDER_DIM: usize = WILD_CHUNK_DIM * 2;
const PLACEHOLDER_OFFSET: usize = WILD_CHUNK_DIM * WILD_CITY_CHUNK;

/// Chunk template ids for the whole wilderness, indexed `x + y * 64`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WildIndices {
    cells: Vec<u8>,
}

impl WildIndices {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= WILD_CHUNKS {
            return None;
        }
        self.cells.get(x + y * WILD_CHUNKS).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    fn set(&mut self, x: usize, y: usize, id: u8) {
        self.cells[x + y * WILD_CHUNKS] = id;
    }
}

fn pick<'a>(pools: &'a WildBlockPools, rng: &mut ArenaRandom) -> (&'a [u8], &'static str) {
    let mut r = rng.next();
    if r < NORMAL_CHANCE {
        return (&pools.normal, "normal");
    }
    r -= NORMAL_CHANCE;
    if r < VILLAGE_CHANCE {
        return (&pools.village, "village");
    }
    r -= VILLAGE_CHANCE;
    if r < DUNGEON_CHANCE {
        return (&pools.dungeon, "dungeon");
    }
    r -= DUNGEON_CHANCE;
    if r < TAVERN_CHANCE {
        (&pools.tavern, "tavern")
    } else {
        (&pools.temple, "temple")
    }
}

/// Picks a chunk template for every wilderness cell. The four center cells
/// always hold the city placeholders 1 to 4.
pub fn generate_wilderness_indices(seed: u32, pools: &WildBlockPools) -> GenResult<WildIndices> {
    let mut rng = ArenaRandom::new(seed);
    let mut cells = Vec::with_capacity(WILD_CHUNKS * WILD_CHUNKS);
    for _ in 0..WILD_CHUNKS * WILD_CHUNKS {
        let (pool, name) = pick(pools, &mut rng);
        if pool.is_empty() {
            return Err(GenError::EmptyWildPool(name));
        }
        let i = (rng.next() & 0xFF) as usize % pool.len();
        cells.push(pool[i]);
    }

    let mut indices = WildIndices { cells };
    let c = WILD_CITY_CHUNK;
    indices.set(c, c, 1);
    indices.set(c + 1, c, 2);
    indices.set(c, c + 1, 3);
    indices.set(c + 1, c + 1, 4);
    Ok(indices)
}

/// Applies wilderness rules to a city cell: only plain walls survive, and
/// the wall textures swap to their wilderness versions.
fn revise_city_cell(map1: &mut u16, map2: &mut u16) {
    if *map1 & 0x8000 != 0 {
        *map1 = 0;
        *map2 = 0;
        return;
    }
    match *map1 {
        0x2F2F => *map1 = 0x3030,
        0x2D2D => *map1 = 0x2F2F,
        0x2E2E => {}
        _ => {
            *map1 = 0;
            *map2 = 0;
            return;
        }
    }
    *map2 = 0x3030 | (*map2 & 0x8080);
}

/// Replaces the placeholder city in the center of a wilderness layer set
/// with the location's city walls. `layers` must reach past the center
/// chunks on both axes.
pub fn revise_wilderness_city<T: TemplateSource + ?Sized>(
    city: &CityDefinition,
    layers: &mut LayerSet,
    templates: &T,
) -> GenResult<()> {
    let needed = PLACEHOLDER_OFFSET + PLACEHOLDER_DIM;
    if layers.width < needed || layers.depth < needed {
        return Err(GenError::LayerSize {
            needed: needed * needed,
            actual: layers.len(),
        });
    }
    layers.clear_region(
        PLACEHOLDER_OFFSET,
        PLACEHOLDER_OFFSET,
        PLACEHOLDER_DIM,
        PLACEHOLDER_DIM,
    );

    let template = templates
        .map(&city.map_filename)
        .ok_or_else(|| GenError::MissingMap(city.map_filename.clone()))?;
    let mut city_layers = template.layers.clone();
    if !city.premade {
        let mut rng = ArenaRandom::new(city.city_seed);
        generate_city(
            city.city_seed,
            city.blocks_per_side,
            city_layers.width,
            &city.reserved_blocks,
            city.block_start(),
            &mut rng,
            templates,
            &mut city_layers,
        )?;
    }

    for (map1, map2) in city_layers.map1.iter_mut().zip(city_layers.map2.iter_mut()) {
        revise_city_cell(map1, map2);
    }

    if !layers.stamp(&city_layers, PLACEHOLDER_OFFSET, PLACEHOLDER_OFFSET) {
        return Err(GenError::LayerSize {
            needed: (PLACEHOLDER_OFFSET + city_layers.width)
                * (PLACEHOLDER_OFFSET + city_layers.depth),
            actual: layers.len(),
        });
    }
    log::debug!(target: "gen", "revised wilderness city {}", city.map_filename);
    Ok(())
}

/// Origin of the 128x128 area holding `voxel`, in legacy coordinates.
pub fn relative_wild_origin(voxel: Int2) -> OriginalInt2 {
    let dim = PLACEHOLDER_DIM as i32;
    Int2::new(voxel.x - voxel.x % dim, voxel.y - voxel.y % dim)
}

/// Chunk-aligned origin of the area centered on `voxel`.
pub fn centered_wild_origin(voxel: NewInt2) -> NewInt2 {
    let dim = WILD_CHUNK_DIM as i32;
    Int2::new(
        ((voxel.x - 32).max(0) / dim) * dim,
        ((voxel.y - 32).max(0) / dim) * dim,
    )
}
