//! A level under construction: voxel grid, definition caches, flats, locks
//! and the door/fade animation lists.

use arena_blocks::types::{EdgeDef, RaisedDef};
use arena_blocks::{
    ChasmFaces, ChasmKind, DefCache, DefCacheStats, LevelInfo, VoxelDefinition, WallKind,
};
use arena_geom::coords::{ARENA_UNITS, flip_legacy_voxel, legacy_layer_index};
use arena_geom::{Int2, NewInt2};
use arena_structures::{LockRecord, MapTemplate};
use hashbrown::HashMap;

use crate::decode::{self, FloorCode, Map1Code};
use crate::door::{DoorDirection, DoorState, FadeState};
use crate::entity::{self, EntityPlan};
use crate::grid::VoxelGrid;
use crate::tables::GameTables;
use crate::world_type::WorldType;

/// Every grid cell holding a given flat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatDef {
    pub flat_index: usize,
    pub positions: Vec<NewInt2>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lock {
    pub position: NewInt2,
    pub lock_level: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelCacheStats {
    pub floor: DefCacheStats,
    pub chasm: DefCacheStats,
    pub wall: DefCacheStats,
    pub map2: DefCacheStats,
}

pub struct LevelData {
    name: String,
    info: LevelInfo,
    grid: VoxelGrid,
    floor_defs: DefCache<u16>,
    chasm_defs: DefCache<(u16, ChasmFaces)>,
    wall_defs: DefCache<u16>,
    map2_defs: DefCache<u16>,
    flats: Vec<FlatDef>,
    locks: HashMap<NewInt2, Lock>,
    open_doors: Vec<DoorState>,
    fading_voxels: Vec<FadeState>,
}

#[inline]
fn layer_code(layer: &[u16], x: usize, z: usize, width: usize, depth: usize) -> u16 {
    layer
        .get(legacy_layer_index(x, z, width, depth))
        .copied()
        .unwrap_or(0)
}

fn chasm_texture(info: &LevelInfo, kind: ChasmKind) -> i32 {
    let (id, name) = match kind {
        ChasmKind::Dry => (info.dry_chasm, "dry"),
        ChasmKind::Wet => (info.wet_chasm, "wet"),
        ChasmKind::Lava => (info.lava_chasm, "lava"),
    };
    id.unwrap_or_else(|| {
        log::warn!("Missing {name} chasm texture id.");
        0
    })
}

fn def_limit_reached(layer: &str, code: u16, x: usize, z: usize) {
    log::warn!("Voxel definition limit reached; {layer} code {code:#06X} at ({x}, {z}) left empty.");
}

fn table_value(table: &[i32], index: usize, name: &str) -> i32 {
    match table.get(index) {
        Some(&v) => v,
        None => {
            log::warn!("Height table {name} has no entry {index}.");
            0
        }
    }
}

impl LevelData {
    pub fn new(
        width: usize,
        height: usize,
        depth: usize,
        info: LevelInfo,
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            info,
            grid: VoxelGrid::new(width, height, depth),
            floor_defs: DefCache::new(),
            chasm_defs: DefCache::new(),
            wall_defs: DefCache::new(),
            map2_defs: DefCache::new(),
            flats: Vec::new(),
            locks: HashMap::new(),
            open_doors: Vec::new(),
            fading_voxels: Vec::new(),
        }
    }

    /// Builds an interior level from one map level: floor, main floor,
    /// ceiling, upper walls, then locks.
    pub fn load_interior(template: &MapTemplate, info: LevelInfo, tables: &GameTables) -> Self {
        let layers = &template.layers;
        let (width, depth) = (layers.depth, layers.width);
        let map2_stories = layers
            .map2
            .iter()
            .filter(|&&c| c != 0)
            .map(|&c| decode::map2_height(c))
            .max()
            .unwrap_or(0);
        let height = template.height.max(3).max(2 + map2_stories);

        let mut level = Self::new(width, height, depth, info, template.name.clone());
        level.read_flor(&layers.flor);
        level.read_map1(&layers.map1, WorldType::Interior, tables);
        level.read_ceiling();
        level.read_map2(&layers.map2);
        level.read_locks(&template.locks);
        log::debug!(target: "gen", "loaded interior {} ({}x{}x{})", level.name, width, height, depth);
        level
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[inline]
    pub fn info(&self) -> &LevelInfo {
        &self.info
    }
    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }
    #[inline]
    pub fn grid_mut(&mut self) -> &mut VoxelGrid {
        &mut self.grid
    }
    #[inline]
    pub fn flats(&self) -> &[FlatDef] {
        &self.flats
    }
    #[inline]
    pub fn open_doors(&self) -> &[DoorState] {
        &self.open_doors
    }
    #[inline]
    pub fn open_doors_mut(&mut self) -> &mut Vec<DoorState> {
        &mut self.open_doors
    }
    #[inline]
    pub fn fading_voxels(&self) -> &[FadeState] {
        &self.fading_voxels
    }
    #[inline]
    pub fn fading_voxels_mut(&mut self) -> &mut Vec<FadeState> {
        &mut self.fading_voxels
    }

    /// Ceiling height in voxel units.
    pub fn ceiling_height(&self) -> f64 {
        self.info.ceiling.height as f64 / ARENA_UNITS
    }

    pub fn lock(&self, voxel: NewInt2) -> Option<&Lock> {
        self.locks.get(&voxel)
    }

    pub fn cache_stats(&self) -> LevelCacheStats {
        LevelCacheStats {
            floor: self.floor_defs.stats(),
            chasm: self.chasm_defs.stats(),
            wall: self.wall_defs.stats(),
            map2: self.map2_defs.stats(),
        }
    }

    pub fn add_flat_instance(&mut self, flat_index: usize, position: NewInt2) {
        match self.flats.iter_mut().find(|f| f.flat_index == flat_index) {
            Some(def) => def.positions.push(position),
            None => self.flats.push(FlatDef {
                flat_index,
                positions: vec![position],
            }),
        }
    }

    #[inline]
    pub fn set_voxel(&mut self, x: usize, y: usize, z: usize, id: u16) {
        self.grid.set(x as i32, y as i32, z as i32, id);
    }

    /// Starts opening the door at `voxel`, or reverses one that is closing.
    pub fn open_door(&mut self, voxel: NewInt2) {
        match self.open_doors.iter_mut().find(|d| d.voxel() == voxel) {
            Some(door) => door.set_direction(DoorDirection::Opening),
            None => self.open_doors.push(DoorState::new(voxel)),
        }
    }

    pub fn close_door(&mut self, voxel: NewInt2) {
        if let Some(door) = self.open_doors.iter_mut().find(|d| d.voxel() == voxel) {
            door.set_direction(DoorDirection::Closing);
        }
    }

    pub fn start_fade(&mut self, voxel: (i32, i32, i32)) {
        if !self.fading_voxels.iter().any(|f| f.voxel() == voxel) {
            self.fading_voxels.push(FadeState::new(voxel));
        }
    }

    /// Advances door and fade animations. Doors that finish closing are
    /// dropped; voxels that finish fading become empty and are dropped.
    pub fn tick_animations(&mut self, dt: f64) {
        for door in &mut self.open_doors {
            door.update(dt);
        }
        self.open_doors
            .retain(|d| !(d.is_closed() && d.direction() == DoorDirection::None));

        for fade in &mut self.fading_voxels {
            fade.update(dt);
        }
        let grid = &mut self.grid;
        self.fading_voxels.retain(|f| {
            if f.is_done_fading() {
                let (x, y, z) = f.voxel();
                grid.set(x, y, z, VoxelGrid::EMPTY);
                false
            } else {
                true
            }
        });
    }

    /// Decodes the floor layer into `y = 0`, including chasm faces and
    /// floor flats.
    pub fn read_flor(&mut self, flor: &[u16]) {
        let (w, d) = (self.grid.width(), self.grid.depth());
        for x in 0..w {
            for z in 0..d {
                let code = layer_code(flor, x, z, w, d);
                let id = match decode::decode_floor(code) {
                    FloorCode::Floor { texture } => {
                        let grid = &mut self.grid;
                        self.floor_defs.try_get_or_insert_with(code, || {
                            grid.add_def(VoxelDefinition::Floor {
                                texture: texture as i32,
                            })
                        })
                    }
                    FloorCode::Chasm { kind } => {
                        let is_chasm = |nx: usize, nz: usize| {
                            decode::decode_floor(layer_code(flor, nx, nz, w, d)).is_chasm()
                        };
                        let faces = ChasmFaces::from_flags(
                            !is_chasm((x + 1).min(w - 1), z),
                            !is_chasm(x, (z + 1).min(d - 1)),
                            !is_chasm(x.saturating_sub(1), z),
                            !is_chasm(x, z.saturating_sub(1)),
                        );
                        let info = &self.info;
                        let grid = &mut self.grid;
                        self.chasm_defs.try_get_or_insert_with((code, faces), || {
                            grid.add_def(VoxelDefinition::Chasm {
                                texture: chasm_texture(info, kind),
                                faces,
                                kind,
                            })
                        })
                    }
                };
                match id {
                    Some(id) => self.set_voxel(x, 0, z, id),
                    None => def_limit_reached("floor", code, x, z),
                }

                if let Some(flat) = decode::floor_flat_index(code) {
                    self.add_flat_instance(flat, Int2::new(x as i32, z as i32));
                }
            }
        }
    }

    /// Decodes the main floor layer into `y = 1`.
    pub fn read_map1(&mut self, map1: &[u16], world_type: WorldType, tables: &GameTables) {
        let (w, d) = (self.grid.width(), self.grid.depth());
        for x in 0..w {
            for z in 0..d {
                let code = layer_code(map1, x, z, w, d);
                let decoded = decode::decode_map1(code);
                match decoded {
                    Map1Code::Empty => continue,
                    Map1Code::Flat { index } => {
                        self.add_flat_instance(index, Int2::new(x as i32, z as i32));
                        continue;
                    }
                    Map1Code::Unsupported { code } => {
                        log::warn!("Voxel code {code:#06X} at ({x}, {z}) not implemented.");
                        continue;
                    }
                    _ => {}
                }
                let info = &self.info;
                let grid = &mut self.grid;
                let Some(id) = self.wall_defs.try_get_or_insert_with(code, || {
                    grid.add_def(map1_def(decoded, info, world_type, tables, x, z))
                }) else {
                    def_limit_reached("map1", code, x, z);
                    continue;
                };
                self.set_voxel(x, 1, z, id);
            }
        }
    }

    /// Decodes the upper wall layer into `y = 2` and up. Stories beyond the
    /// grid height are dropped.
    pub fn read_map2(&mut self, map2: &[u16]) {
        let (w, d) = (self.grid.width(), self.grid.depth());
        let h = self.grid.height();
        for x in 0..w {
            for z in 0..d {
                let code = layer_code(map2, x, z, w, d);
                if code == 0 {
                    continue;
                }
                let stories = decode::map2_height(code);
                let grid = &mut self.grid;
                let Some(id) = self.map2_defs.try_get_or_insert_with(code, || {
                    grid.add_def(VoxelDefinition::solid_wall(decode::map2_texture(code)))
                }) else {
                    def_limit_reached("map2", code, x, z);
                    continue;
                };
                for y in 2..(2 + stories).min(h) {
                    self.set_voxel(x, y, z, id);
                }
            }
        }
    }

    /// Fills `y = 2` with the level's ceiling. Levels without a ceiling
    /// texture use texture 1.
    pub fn read_ceiling(&mut self) {
        let texture = self.info.ceiling.texture_index.unwrap_or(1);
        let Some(id) = self.grid.add_def(VoxelDefinition::Ceiling { texture }) else {
            log::warn!("Voxel definition limit reached; ceiling left empty.");
            return;
        };
        for x in 0..self.grid.width() {
            for z in 0..self.grid.depth() {
                self.set_voxel(x, 2, z, id);
            }
        }
    }

    pub fn read_locks(&mut self, locks: &[LockRecord]) {
        let (w, d) = (self.grid.width() as i32, self.grid.depth() as i32);
        for lock in locks {
            let position = flip_legacy_voxel(lock.position, w, d);
            self.locks.insert(
                position,
                Lock {
                    position,
                    lock_level: lock.lock_level,
                },
            );
        }
    }

    /// One animation plan per flat def, in the order flats were first seen.
    pub fn activation_plan(&self, tables: &GameTables) -> Vec<EntityPlan> {
        self.flats
            .iter()
            .filter_map(|def| {
                let plan = entity::plan_flat(def.flat_index, &self.info, tables);
                if plan.is_none() {
                    log::warn!("Level info has no flat {}.", def.flat_index);
                }
                plan
            })
            .collect()
    }
}

fn wall_def(info: &LevelInfo, texture: i32) -> VoxelDefinition {
    let menu_id = info.menu_index(texture);
    let kind = if info.level_up == Some(texture) {
        WallKind::LevelUp
    } else if info.level_down == Some(texture) {
        WallKind::LevelDown
    } else if menu_id.is_some() {
        WallKind::Menu
    } else {
        WallKind::Solid
    };
    VoxelDefinition::Wall {
        texture,
        kind,
        menu_id,
    }
}

#[allow(clippy::too_many_arguments)]
fn raised_def(
    info: &LevelInfo,
    side_id: u8,
    cap_id: u8,
    height_index: usize,
    thickness_index: usize,
    world_type: WorldType,
    tables: &GameTables,
    (x, z): (usize, usize),
) -> VoxelDefinition {
    let side_texture = info.box_side(side_id as i32).unwrap_or_else(|| {
        log::warn!("Missing box side id {side_id}.");
        0
    });
    let floor_texture = info.ceiling.texture_index.unwrap_or_else(|| {
        log::warn!("Missing platform floor id ({x}, {z}).");
        0
    });
    let ceiling_texture = info.box_cap(cap_id as i32).unwrap_or_else(|| {
        log::warn!("Missing box cap id {cap_id}.");
        0
    });

    let heights = &tables.wall_heights;
    let box_scale = info.ceiling.box_scale;
    let (base_offset, base_size) = match world_type {
        WorldType::City => (
            table_value(&heights.box1b, height_index, "box1b"),
            table_value(&heights.box2b, thickness_index, "box2b"),
        ),
        WorldType::Interior => {
            let size = table_value(&heights.box2a, thickness_index, "box2a");
            (
                table_value(&heights.box1a, height_index, "box1a"),
                box_scale.map_or(size, |s| (size * s) / 256),
            )
        }
        WorldType::Wilderness => (
            table_value(&heights.box1c, height_index, "box1c"),
            (32 * box_scale.unwrap_or(192)) / 256,
        ),
    };

    let normalized_scale = info.ceiling.height as f64 / ARENA_UNITS;
    let y_offset = (base_offset as f64 / ARENA_UNITS) / normalized_scale;
    let y_size = (base_size as f64 / ARENA_UNITS) / normalized_scale;
    let v_top = (1.0 - y_offset - y_size).max(0.0);
    let v_bottom = (v_top + y_size).min(1.0);

    VoxelDefinition::Raised(RaisedDef {
        side_texture,
        floor_texture,
        ceiling_texture,
        y_offset,
        y_size,
        v_top,
        v_bottom,
    })
}

fn map1_def(
    code: Map1Code,
    info: &LevelInfo,
    world_type: WorldType,
    tables: &GameTables,
    x: usize,
    z: usize,
) -> VoxelDefinition {
    match code {
        Map1Code::Wall { texture } => wall_def(info, texture),
        Map1Code::Raised {
            side_id,
            cap_id,
            height_index,
            thickness_index,
        } => raised_def(
            info,
            side_id,
            cap_id,
            height_index,
            thickness_index,
            world_type,
            tables,
            (x, z),
        ),
        Map1Code::TransparentWall { texture, collider } => {
            VoxelDefinition::TransparentWall { texture, collider }
        }
        Map1Code::Edge {
            texture,
            offset_step,
            collider,
            facing,
        } => {
            let full_offset = match world_type {
                WorldType::Interior => offset_step * 8,
                WorldType::City | WorldType::Wilderness => offset_step * 32 - 8,
            };
            VoxelDefinition::Edge(EdgeDef {
                texture,
                y_offset: full_offset as f64 / ARENA_UNITS,
                collider,
                flipped: collider,
                facing,
            })
        }
        Map1Code::Door { texture, kind } => VoxelDefinition::Door { texture, kind },
        Map1Code::Diagonal { texture, is_right } => VoxelDefinition::Diagonal { texture, is_right },
        Map1Code::Empty | Map1Code::Flat { .. } | Map1Code::Unsupported { .. } => {
            VoxelDefinition::Empty
        }
    }
}
