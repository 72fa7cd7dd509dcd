//! Display names for taverns, equipment stores and temples.
//!
//! Names are drawn from the name fragment tables with the level's RNG after
//! the main floor has been decoded, so menu walls are found by definition
//! rather than by re-reading layer bits.

use arena_blocks::menu::{MenuType, menu_type};
use arena_blocks::{VoxelDefinition, WallKind};
use arena_geom::{Int2, NewInt2};
use arena_structures::template::WILD_CHUNK_DIM;
use arena_world::tables::CityGenTables;
use arena_world::{ArenaRandom, LevelData};

use crate::error::{GenError, GenResult};
use crate::location::CityDefinition;

/// Suffix counts for each temple model.
const TEMPLE_MODEL_VARIATIONS: [u32; 3] = [5, 9, 10];
/// Distinct temple names across all models.
const TEMPLE_NAMES: u32 = 5 + 9 + 10;
const TAVERN_FRAGMENTS: u32 = 23;
const EQUIPMENT_PREFIXES: u32 = 20;
const EQUIPMENT_SUFFIXES: u32 = 10;
const WILD_CHUNKS_PER_SIDE: usize = 64;

/// Generates NPC names for equipment store names. Implementations must draw
/// only from `rng` so names stay reproducible.
pub trait NpcNameGenerator {
    fn generate(&self, race_id: i32, is_male: bool, rng: &mut ArenaRandom) -> String;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildingName {
    pub position: NewInt2,
    pub name: String,
}

fn entry<'a>(table: &'a [String], name: &'static str, index: usize) -> GenResult<&'a str> {
    table
        .get(index)
        .map(String::as_str)
        .ok_or(GenError::NameTable { table: name, index })
}

fn tavern_name(tables: &CityGenTables, coastal: bool, m: usize, n: usize) -> GenResult<String> {
    let prefix = entry(&tables.tavern_prefixes, "tavern_prefixes", m)?;
    let suffix = if coastal {
        entry(&tables.tavern_marine_suffixes, "tavern_marine_suffixes", n)?
    } else {
        entry(&tables.tavern_suffixes, "tavern_suffixes", n)?
    };
    Ok(format!("{prefix} {suffix}"))
}

/// Temple names have no separator; prefixes carry their own spacing.
fn temple_name(tables: &CityGenTables, model: usize, n: usize) -> GenResult<String> {
    let prefix = entry(&tables.temple_prefixes, "temple_prefixes", model)?;
    let table = match model {
        0 => "temple1_suffixes",
        1 => "temple2_suffixes",
        _ => "temple3_suffixes",
    };
    let suffix = entry(tables.temple_suffixes(model), table, n)?;
    Ok(format!("{prefix}{suffix}"))
}

fn equipment_name(
    tables: &CityGenTables,
    city: &CityDefinition,
    npc_names: &dyn NpcNameGenerator,
    (m, n): (usize, usize),
    (x, z): (usize, usize),
) -> GenResult<String> {
    let prefix = entry(&tables.equipment_prefixes, "equipment_prefixes", m)?;
    let suffix = entry(&tables.equipment_suffixes, "equipment_suffixes", n)?;
    let mut name = format!("{prefix} {suffix}");

    if name.contains("%ct") {
        name = name.replacen("%ct", &city.type_display_name, 1);
    }
    // Name seeds use the legacy axis order.
    if name.contains("%ef") {
        let mut rng = ArenaRandom::new(((x as u32) << 16).wrapping_add(z as u32));
        let full = npc_names.generate(city.race_id, true, &mut rng);
        let first = full.split_whitespace().next().unwrap_or_default();
        name = name.replacen("%ef", first, 1);
    }
    if name.contains("%n") {
        let mut rng = ArenaRandom::new(((z as u32) << 16).wrapping_add(x as u32));
        let full = npc_names.generate(city.race_id, true, &mut rng);
        name = name.replacen("%n", &full, 1);
    }
    Ok(name)
}

fn menu_type_at(level: &LevelData, x: i32, z: i32, is_city: bool) -> Option<MenuType> {
    match level.grid().def_at(x, 1, z)? {
        VoxelDefinition::Wall {
            kind: WallKind::Menu,
            menu_id: Some(id),
            ..
        } => Some(menu_type(*id, is_city)),
        _ => None,
    }
}

/// Names every tavern, equipment store and temple in a city level, in that
/// order. Equipment stores and temples reseed `rng` from the city's local
/// point first; taverns continue the sequence the caller passes in.
///
/// Names repeat only once a category has used every combination.
pub fn generate_building_names(
    level: &LevelData,
    city: &CityDefinition,
    tables: &CityGenTables,
    rng: &mut ArenaRandom,
    is_city: bool,
    npc_names: &dyn NpcNameGenerator,
) -> GenResult<Vec<BuildingName>> {
    let local = city.local_city_point();
    let (width, depth) = (level.grid().width(), level.grid().depth());
    let mut names = Vec::new();

    for target in [MenuType::Tavern, MenuType::Equipment, MenuType::Temple] {
        if target != MenuType::Tavern {
            rng.srand(((local.x as u32) << 16).wrapping_add(local.y as u32));
        }
        let mut seen: Vec<u32> = Vec::new();

        for x in (0..width).rev() {
            for z in (0..depth).rev() {
                if menu_type_at(level, x as i32, z as i32, is_city) != Some(target) {
                    continue;
                }

                let (hash, name) = match target {
                    MenuType::Tavern => {
                        let exhausted =
                            seen.len() >= (TAVERN_FRAGMENTS * TAVERN_FRAGMENTS) as usize;
                        let (m, n, hash) = loop {
                            let m = rng.next() % TAVERN_FRAGMENTS;
                            let n = rng.next() % TAVERN_FRAGMENTS;
                            let hash = (m << 8) + n;
                            if exhausted || !seen.contains(&hash) {
                                break (m, n, hash);
                            }
                        };
                        (hash, tavern_name(tables, city.coastal, m as usize, n as usize)?)
                    }
                    MenuType::Equipment => {
                        let exhausted =
                            seen.len() >= (EQUIPMENT_PREFIXES * EQUIPMENT_SUFFIXES) as usize;
                        let (m, n, hash) = loop {
                            let m = rng.next() % EQUIPMENT_PREFIXES;
                            let n = rng.next() % EQUIPMENT_SUFFIXES;
                            let hash = (m << 8) + n;
                            if exhausted || !seen.contains(&hash) {
                                break (m, n, hash);
                            }
                        };
                        let name = equipment_name(
                            tables,
                            city,
                            npc_names,
                            (m as usize, n as usize),
                            (x, z),
                        )?;
                        (hash, name)
                    }
                    _ => {
                        let exhausted = seen.len() >= TEMPLE_NAMES as usize;
                        let (model, n, hash) = loop {
                            let model = rng.next() % 3;
                            let n = rng.next() % TEMPLE_MODEL_VARIATIONS[model as usize];
                            let hash = (model << 8) + n;
                            if exhausted || !seen.contains(&hash) {
                                break (model, n, hash);
                            }
                        };
                        (hash, temple_name(tables, model as usize, n as usize)?)
                    }
                };

                names.push(BuildingName {
                    position: Int2::new(x as i32, z as i32),
                    name,
                });
                seen.push(hash);
            }
        }

        if target == MenuType::Temple {
            if let Some(fix) = city.main_quest_temple_override {
                let name = temple_name(tables, fix.model_index, fix.suffix_index)?;
                match names.get_mut(fix.menu_names_index) {
                    Some(entry) => entry.name = name,
                    None => log::warn!(
                        "Main quest temple override index {} out of range ({} names).",
                        fix.menu_names_index,
                        names.len()
                    ),
                }
            }
        }
    }

    log::debug!(target: "gen", "generated {} building names", names.len());
    Ok(names)
}

/// Names taverns and temples in one wilderness chunk. Each matching voxel
/// draws from a fresh RNG seeded by the chunk, so names do not depend on
/// scan order and may repeat. Chunk coordinates must lie in `0..64`.
pub fn generate_chunk_building_names(
    level: &LevelData,
    tables: &CityGenTables,
    wild_x: usize,
    wild_y: usize,
    out: &mut Vec<BuildingName>,
) -> GenResult<()> {
    if wild_x >= WILD_CHUNKS_PER_SIDE || wild_y >= WILD_CHUNKS_PER_SIDE {
        return Err(GenError::WildChunkOutOfRange {
            x: wild_x,
            y: wild_y,
        });
    }
    let dim = WILD_CHUNK_DIM;
    let seed = ((wild_y as u32) << 16).wrapping_add(wild_x as u32);
    let origin_x = ((dim - 1) - wild_y) as i32 * dim as i32;
    let origin_z = ((dim - 1) - wild_x) as i32 * dim as i32;

    for target in [MenuType::Tavern, MenuType::Temple] {
        for x in 0..dim {
            for z in 0..dim {
                let dst = Int2::new(
                    origin_x + ((dim - 1) - x) as i32,
                    origin_z + ((dim - 1) - z) as i32,
                );
                if menu_type_at(level, dst.x, dst.y, false) != Some(target) {
                    continue;
                }

                let mut rng = ArenaRandom::new(seed);
                let name = if target == MenuType::Tavern {
                    let m = rng.next() % TAVERN_FRAGMENTS;
                    let n = rng.next() % TAVERN_FRAGMENTS;
                    tavern_name(tables, false, m as usize, n as usize)?
                } else {
                    let model = rng.next() % 3;
                    let n = rng.next() % TEMPLE_MODEL_VARIATIONS[model as usize];
                    temple_name(tables, model as usize, n as usize)?
                };
                out.push(BuildingName {
                    position: dst,
                    name,
                });
            }
        }
    }
    Ok(())
}

/// Names every tavern and temple in the wilderness, chunk by chunk.
pub fn generate_wild_chunk_building_names(
    level: &LevelData,
    tables: &CityGenTables,
) -> GenResult<Vec<BuildingName>> {
    let mut names = Vec::new();
    for wild_y in 0..WILD_CHUNKS_PER_SIDE {
        for wild_x in 0..WILD_CHUNKS_PER_SIDE {
            generate_chunk_building_names(level, tables, wild_x, wild_y, &mut names)?;
        }
    }
    log::debug!(target: "gen", "generated {} wilderness building names", names.len());
    Ok(names)
}
