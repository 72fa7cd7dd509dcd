use arena_blocks::LevelInfo;
use arena_geom::Double2;
use arena_geom::coords::{start_point_to_real, transformed_double};
use arena_structures::template::WILD_CHUNK_DIM;
use arena_structures::{LayerSet, MapTemplate, TemplateSource};
use arena_world::{ArenaRandom, GameTables, LevelData, WorldType};

use crate::citygen::generate_city;
use crate::error::{GenError, GenResult};
use crate::location::CityDefinition;
use crate::names::{
    BuildingName, NpcNameGenerator, generate_building_names, generate_wild_chunk_building_names,
};
use crate::palace::revise_palace_graphics;
use crate::wild::{WILD_CHUNKS, generate_wilderness_indices, revise_wilderness_city};

pub const WILD_LEVEL_HEIGHT: usize = 6;
pub const WILD_LEVEL_NAME: &str = "WILD";

/// A decoded city or wilderness level with its building names.
pub struct ExteriorLevel {
    level: LevelData,
    building_names: Vec<BuildingName>,
    start_points: Vec<Double2>,
    is_city: bool,
}

impl ExteriorLevel {
    /// Builds a city from its skeleton map. Procedural cities get their
    /// blocks stamped in before the palace pass; premade ones are used
    /// as-is.
    pub fn load_city<T: TemplateSource + ?Sized>(
        city: &CityDefinition,
        template: &MapTemplate,
        info: LevelInfo,
        tables: &GameTables,
        templates: &T,
        npc_names: &dyn NpcNameGenerator,
    ) -> GenResult<Self> {
        let mut layers = template.layers.clone();
        let mut rng = ArenaRandom::new(city.city_seed);
        if !city.premade {
            generate_city(
                city.city_seed,
                city.blocks_per_side,
                layers.width,
                &city.reserved_blocks,
                city.block_start(),
                &mut rng,
                templates,
                &mut layers,
            )?;
        }

        // Grid x runs along template rows.
        let (width, depth) = (layers.depth, layers.width);
        revise_palace_graphics(&mut layers.map1, width, depth);

        let mut level = LevelData::new(width, template.height, depth, info, template.name.clone());
        level.read_flor(&layers.flor);
        level.read_map1(&layers.map1, WorldType::City, tables);
        level.read_map2(&layers.map2);

        let building_names =
            generate_building_names(&level, city, &tables.city_gen, &mut rng, true, npc_names)?;
        let start_points = template
            .start_points
            .iter()
            .map(|&p| transformed_double(start_point_to_real(p)))
            .collect();
        log::info!(target: "gen", "loaded city {} ({}x{}x{})", template.name, width, template.height, depth);

        Ok(Self {
            level,
            building_names,
            start_points,
            is_city: true,
        })
    }

    /// Builds the whole wilderness around a city: one chunk template per
    /// chunk cell, with the city spliced into the center.
    pub fn load_wilderness<T: TemplateSource + ?Sized>(
        city: &CityDefinition,
        info: LevelInfo,
        tables: &GameTables,
        templates: &T,
    ) -> GenResult<Self> {
        let layers = build_wilderness_layers(city, tables, templates)?;
        let (width, depth) = (layers.depth, layers.width);

        let mut level = LevelData::new(width, WILD_LEVEL_HEIGHT, depth, info, WILD_LEVEL_NAME);
        level.read_flor(&layers.flor);
        level.read_map1(&layers.map1, WorldType::Wilderness, tables);
        level.read_map2(&layers.map2);

        let building_names = generate_wild_chunk_building_names(&level, &tables.city_gen)?;
        log::info!(target: "gen", "loaded wilderness for {}", city.name);

        Ok(Self {
            level,
            building_names,
            start_points: Vec::new(),
            is_city: false,
        })
    }

    #[inline]
    pub fn level(&self) -> &LevelData {
        &self.level
    }
    #[inline]
    pub fn level_mut(&mut self) -> &mut LevelData {
        &mut self.level
    }
    #[inline]
    pub fn building_names(&self) -> &[BuildingName] {
        &self.building_names
    }
    /// Player start points in voxel space.
    #[inline]
    pub fn start_points(&self) -> &[Double2] {
        &self.start_points
    }
    #[inline]
    pub fn is_city(&self) -> bool {
        self.is_city
    }

    pub fn world_type(&self) -> WorldType {
        if self.is_city {
            WorldType::City
        } else {
            WorldType::Wilderness
        }
    }
}

/// Stamps every wilderness chunk and the center city into one layer set
/// of `64 * 64` cells per side.
pub fn build_wilderness_layers<T: TemplateSource + ?Sized>(
    city: &CityDefinition,
    tables: &GameTables,
    templates: &T,
) -> GenResult<LayerSet> {
    let indices = generate_wilderness_indices(city.wild_seed, &tables.wild)?;
    let dim = WILD_CHUNKS * WILD_CHUNK_DIM;
    let mut layers = LayerSet::new(dim, dim);

    for y in 0..WILD_CHUNKS {
        for x in 0..WILD_CHUNKS {
            let Some(id) = indices.get(x, y) else {
                continue;
            };
            let chunk = templates
                .wild_chunk(id)
                .ok_or(GenError::MissingWildChunk(id))?;
            if !layers.stamp(chunk, x * WILD_CHUNK_DIM, y * WILD_CHUNK_DIM) {
                return Err(GenError::LayerSize {
                    needed: chunk.len(),
                    actual: WILD_CHUNK_DIM * WILD_CHUNK_DIM,
                });
            }
        }
    }

    revise_wilderness_city(city, &mut layers, templates)?;
    Ok(layers)
}
