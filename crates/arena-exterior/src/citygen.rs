//! Procedural city layout: decide which block goes in each cell of the city
//! plan, then stamp the matching block templates into the city layers.

use arena_geom::OriginalInt2;
use arena_structures::city_block::{
    CITY_BLOCK_ROTATIONS, CITY_BLOCK_STRIDE, city_block_code, city_block_mif_name,
    city_block_rotation, city_block_variations,
};
use arena_structures::{LayerSet, TemplateSource};
use arena_world::ArenaRandom;

use crate::error::{GenError, GenResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockType {
    Empty,
    Reserved,
    Equipment,
    MagesGuild,
    NobleHouse,
    Temple,
    Tavern,
    Spacer,
    Houses,
}

impl BlockType {
    /// Seeded once each before the random fill.
    pub const SEEDED: [BlockType; 6] = [
        BlockType::Equipment,
        BlockType::MagesGuild,
        BlockType::NobleHouse,
        BlockType::Temple,
        BlockType::Tavern,
        BlockType::Spacer,
    ];

    /// Index into the city block code tables. `None` for cells that are
    /// never stamped.
    pub fn block_index(self) -> Option<usize> {
        match self {
            BlockType::Empty | BlockType::Reserved => None,
            BlockType::Equipment => Some(0),
            BlockType::MagesGuild => Some(1),
            BlockType::NobleHouse => Some(2),
            BlockType::Temple => Some(3),
            BlockType::Tavern => Some(4),
            BlockType::Spacer => Some(5),
            BlockType::Houses => Some(6),
        }
    }

    fn from_draw(value: u32) -> Self {
        if value <= 0x7333 {
            BlockType::Houses
        } else if value <= 0xA666 {
            BlockType::Tavern
        } else if value <= 0xCCCC {
            BlockType::Equipment
        } else if value <= 0xE666 {
            BlockType::Temple
        } else {
            BlockType::NobleHouse
        }
    }
}

/// Square grid of block assignments, row-major with x varying fastest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityPlan {
    blocks_per_side: usize,
    blocks: Vec<BlockType>,
}

impl CityPlan {
    #[inline]
    pub fn blocks_per_side(&self) -> usize {
        self.blocks_per_side
    }

    #[inline]
    pub fn blocks(&self) -> &[BlockType] {
        &self.blocks
    }

    pub fn get(&self, col: usize, row: usize) -> Option<BlockType> {
        if col >= self.blocks_per_side {
            return None;
        }
        self.blocks.get(col + row * self.blocks_per_side).copied()
    }

    pub fn count(&self, kind: BlockType) -> usize {
        self.blocks.iter().filter(|&&b| b == kind).count()
    }

    /// Draws cells until an empty one comes up.
    fn place(&mut self, kind: BlockType, rng: &mut ArenaRandom) {
        let size = self.blocks.len();
        loop {
            let i = rng.next() as usize % size;
            if self.blocks[i] == BlockType::Empty {
                self.blocks[i] = kind;
                return;
            }
        }
    }
}

/// Decides the block kind of every cell. Reserved indices outside the plan
/// are ignored.
pub fn generate_city_plan(
    blocks_per_side: usize,
    reserved: &[u8],
    rng: &mut ArenaRandom,
) -> GenResult<CityPlan> {
    let size = blocks_per_side * blocks_per_side;
    let mut plan = CityPlan {
        blocks_per_side,
        blocks: vec![BlockType::Empty; size],
    };
    for &block in reserved {
        if let Some(cell) = plan.blocks.get_mut(block as usize) {
            *cell = BlockType::Reserved;
        }
    }

    let empty = plan.count(BlockType::Empty);
    if empty < BlockType::SEEDED.len() {
        return Err(GenError::CityTooSmall {
            blocks: size,
            empty,
        });
    }
    for kind in BlockType::SEEDED {
        plan.place(kind, rng);
    }

    for _ in 0..plan.count(BlockType::Empty) {
        let kind = BlockType::from_draw(rng.next());
        plan.place(kind, rng);
    }
    Ok(plan)
}

/// Copies each row of `src` into `dst`, where rows of the destination are
/// `grid_depth` cells apart.
fn copy_block(
    src: &LayerSet,
    dst: &mut LayerSet,
    grid_depth: usize,
    x_offset: usize,
    z_offset: usize,
) -> GenResult<()> {
    let needed = x_offset + (src.depth + z_offset).saturating_sub(1) * grid_depth + src.width;
    if src.depth > 0 && needed > dst.len() {
        return Err(GenError::LayerSize {
            needed,
            actual: dst.len(),
        });
    }
    for z in 0..src.depth {
        let s = z * src.width;
        let d = x_offset + (z + z_offset) * grid_depth;
        let n = src.width;
        dst.flor[d..d + n].copy_from_slice(&src.flor[s..s + n]);
        dst.map1[d..d + n].copy_from_slice(&src.map1[s..s + n]);
        dst.map2[d..d + n].copy_from_slice(&src.map2[s..s + n]);
    }
    Ok(())
}

/// Generates a city plan and stamps a random variation and rotation of each
/// planned block into `dst`. Blocks are laid out `CITY_BLOCK_STRIDE` apart
/// starting at `start`.
#[allow(clippy::too_many_arguments)]
pub fn generate_city<T: TemplateSource + ?Sized>(
    city_seed: u32,
    blocks_per_side: usize,
    grid_depth: usize,
    reserved: &[u8],
    start: OriginalInt2,
    rng: &mut ArenaRandom,
    templates: &T,
    dst: &mut LayerSet,
) -> GenResult<CityPlan> {
    log::debug!(target: "gen", "generating city {city_seed:#010X} ({blocks_per_side}x{blocks_per_side})");
    let plan = generate_city_plan(blocks_per_side, reserved, rng)?;

    for (i, &block) in plan.blocks.iter().enumerate() {
        let Some(block_index) = block.block_index() else {
            continue;
        };
        let (col, row) = (i % blocks_per_side, i / blocks_per_side);

        let rotation_index = rng.next() as usize % CITY_BLOCK_ROTATIONS.len();
        let (Some(code), Some(variations), Some(rotation)) = (
            city_block_code(block_index),
            city_block_variations(block_index),
            city_block_rotation(rotation_index),
        ) else {
            continue;
        };
        let variation = (rng.next() % variations).max(1);
        let name = city_block_mif_name(code, variation, rotation);
        let template = templates
            .city_block(&name)
            .ok_or_else(|| GenError::MissingCityBlock(name.clone()))?;

        let x_offset = start.x + (col * CITY_BLOCK_STRIDE) as i32;
        let z_offset = start.y + (row * CITY_BLOCK_STRIDE) as i32;
        if x_offset < 0 || z_offset < 0 {
            return Err(GenError::BlockOffset {
                x: x_offset,
                z: z_offset,
            });
        }
        copy_block(
            &template.layers,
            dst,
            grid_depth,
            x_offset as usize,
            z_offset as usize,
        )?;
    }
    Ok(plan)
}
