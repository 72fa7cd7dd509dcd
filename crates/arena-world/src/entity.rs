//! Decides which animation states each flat needs. Loading the sprite
//! frames themselves is left to the caller.

use arena_blocks::LevelInfo;
use arena_blocks::config::FlatInfo;
use arena_geom::coords::ARENA_UNITS;

use crate::tables::GameTables;

pub const MAX_ANIM_DIRECTIONS: u8 = 8;
pub const FIRST_FLIPPED_ANIM_ID: u8 = 6;
pub const STREET_LIGHT_FLAT_INDEX: usize = 29;
pub const HUMAN_PLACEHOLDER_ANIM: &str = "01PLTWLK.CFA";

const CREATURE_IDLE_SECONDS_PER_FRAME: f64 = 1.0 / 4.0;
const CREATURE_LOOK_SECONDS_PER_FRAME: f64 = 1.0 / 4.0;
const CREATURE_WALK_SECONDS_PER_FRAME: f64 = 1.0 / 8.0;
const CREATURE_ATTACK_SECONDS_PER_FRAME: f64 = 1.0 / 8.0;
const CREATURE_DEATH_SECONDS_PER_FRAME: f64 = 1.0 / 4.0;
const STATIC_IDLE_SECONDS_PER_FRAME: f64 = 1.0 / 12.0;

const CREATURE_IDLE_FRAMES: &[usize] = &[0];
const CREATURE_LOOK_FRAMES: &[usize] = &[6, 0, 7, 0];
const CREATURE_WALK_FRAMES: &[usize] = &[0, 1, 2, 3, 4, 5];
const CREATURE_ATTACK_FRAMES: &[usize] = &[8, 9, 10, 11];

// Attack frames only exist in the first direction's file, death in the sixth.
const ATTACK_DIRECTION: u8 = 1;
const DEATH_DIRECTION: u8 = 6;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Static,
    Dynamic,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimStateKind {
    Idle,
    Look,
    Walk,
    Attack,
    Death,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimStatePlan {
    pub kind: AnimStateKind,
    pub seconds_per_frame: f64,
    pub looping: bool,
    pub flipped: bool,
    pub texture_name: String,
    /// Frame indices into the texture. Empty means every frame it holds.
    pub frames: Vec<usize>,
}

impl AnimStatePlan {
    fn new(
        kind: AnimStateKind,
        seconds_per_frame: f64,
        looping: bool,
        flipped: bool,
        texture_name: String,
        frames: &[usize],
    ) -> Self {
        Self {
            kind,
            seconds_per_frame,
            looping,
            flipped,
            texture_name,
            frames: frames.to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntityPlan {
    pub flat_index: usize,
    pub kind: EntityKind,
    pub street_light: bool,
    pub y_offset: i32,
    pub idle: Vec<AnimStatePlan>,
    pub look: Vec<AnimStatePlan>,
    pub walk: Vec<AnimStatePlan>,
    pub attack: Vec<AnimStatePlan>,
    pub death: Vec<AnimStatePlan>,
}

impl EntityPlan {
    fn empty(flat_index: usize, kind: EntityKind, y_offset: i32) -> Self {
        Self {
            flat_index,
            kind,
            street_light: is_street_light(flat_index),
            y_offset,
            idle: Vec::new(),
            look: Vec::new(),
            walk: Vec::new(),
            attack: Vec::new(),
            death: Vec::new(),
        }
    }
}

/// Items 32 to 54 are creatures (rat, goblin, ...).
#[inline]
pub fn is_creature_index(item_index: i32) -> bool {
    (32..=54).contains(&item_index)
}

/// Items 55 to 73 are human enemies (guard, wizard, ...).
#[inline]
pub fn is_human_enemy_index(item_index: i32) -> bool {
    (55..=73).contains(&item_index)
}

pub fn entity_kind(flat: &FlatInfo) -> EntityKind {
    match flat.item_index {
        Some(item) if is_creature_index(item) || is_human_enemy_index(item) => EntityKind::Dynamic,
        _ => EntityKind::Static,
    }
}

/// Creature ids are one-based (rat = 1).
#[inline]
pub fn creature_id(item_index: i32) -> i32 {
    item_index - 31
}

#[inline]
pub fn is_street_light(flat_index: usize) -> bool {
    flat_index == STREET_LIGHT_FLAT_INDEX
}

/// Directions are one-based, 1 facing the viewer.
#[inline]
pub fn is_direction_flipped(direction: u8) -> bool {
    direction >= FIRST_FLIPPED_ANIM_ID
}

/// Maps a direction to the one whose frames it mirrors, and whether it is mirrored.
pub fn corrected_direction(direction: u8) -> (u8, bool) {
    if is_direction_flipped(direction) {
        (((FIRST_FLIPPED_ANIM_ID - 1) * 2) - direction, true)
    } else {
        (direction, false)
    }
}

/// Upper-cases a creature animation filename and writes the direction digit
/// over its `@` placeholder.
pub fn creature_filename_for_direction(filename: &str, direction: u8) -> Option<String> {
    let upper = filename.to_ascii_uppercase();
    let at = upper.find('@')?;
    let mut out = String::with_capacity(upper.len());
    out.push_str(&upper[..at]);
    out.push(char::from(b'0' + direction));
    out.push_str(&upper[at + 1..]);
    Some(out)
}

/// Legacy sprite scaling. `scale` is out of 256.
pub fn base_flat_dimensions(width: i32, height: i32, scale: u16) -> (i32, i32) {
    let scale = scale as i32;
    let w = (width * scale) / 256;
    let h = (((height * scale) / 256) * 200) / 256;
    (w, h)
}

/// Keyframe size in voxel units for a sprite of `width x height` pixels.
pub fn keyframe_dimensions(width: i32, height: i32, scale: u16) -> (f64, f64) {
    let (w, h) = base_flat_dimensions(width, height, scale);
    (w as f64 / ARENA_UNITS, h as f64 / ARENA_UNITS)
}

/// Scale of a zero-based creature index; a stored zero means 256.
pub fn creature_scale(tables: &GameTables, creature_index: usize) -> u16 {
    match tables.entities.scales.get(creature_index) {
        Some(0) | None => 256,
        Some(&s) => s,
    }
}

fn texture_extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_uppercase())
}

/// Idle state for a static flat. Extensionless names are leftover lore
/// entries and produce no state.
pub fn plan_static_idle(flat: &FlatInfo) -> Option<AnimStatePlan> {
    match texture_extension(&flat.texture_name).as_deref() {
        Some("DFA") | Some("IMG") => Some(AnimStatePlan::new(
            AnimStateKind::Idle,
            STATIC_IDLE_SECONDS_PER_FRAME,
            true,
            false,
            flat.texture_name.to_ascii_uppercase(),
            &[],
        )),
        None => None,
        Some(_) => {
            log::warn!("Unrecognized flat texture name \"{}\".", flat.texture_name);
            None
        }
    }
}

fn plan_creature(plan: &mut EntityPlan, tables: &GameTables, creature_index: usize) {
    let Some(filename) = tables.entities.animation_filenames.get(creature_index) else {
        log::warn!("Missing animation filename for creature {}.", creature_index + 1);
        return;
    };

    for direction in 1..=MAX_ANIM_DIRECTIONS {
        let (corrected, flipped) = corrected_direction(direction);
        let Some(name) = creature_filename_for_direction(filename, corrected) else {
            log::warn!("Couldn't set direction {corrected} in \"{filename}\".");
            continue;
        };
        plan.idle.push(AnimStatePlan::new(
            AnimStateKind::Idle,
            CREATURE_IDLE_SECONDS_PER_FRAME,
            true,
            flipped,
            name.clone(),
            CREATURE_IDLE_FRAMES,
        ));
        plan.look.push(AnimStatePlan::new(
            AnimStateKind::Look,
            CREATURE_LOOK_SECONDS_PER_FRAME,
            false,
            flipped,
            name.clone(),
            CREATURE_LOOK_FRAMES,
        ));
        plan.walk.push(AnimStatePlan::new(
            AnimStateKind::Walk,
            CREATURE_WALK_SECONDS_PER_FRAME,
            true,
            flipped,
            name,
            CREATURE_WALK_FRAMES,
        ));
    }

    if let Some(name) = creature_filename_for_direction(filename, ATTACK_DIRECTION) {
        plan.attack.push(AnimStatePlan::new(
            AnimStateKind::Attack,
            CREATURE_ATTACK_SECONDS_PER_FRAME,
            false,
            false,
            name,
            CREATURE_ATTACK_FRAMES,
        ));
    }
    if let Some(name) = creature_filename_for_direction(filename, DEATH_DIRECTION) {
        plan.death.push(AnimStatePlan::new(
            AnimStateKind::Death,
            CREATURE_DEATH_SECONDS_PER_FRAME,
            false,
            false,
            name,
            &[],
        ));
    }
}

fn plan_human(plan: &mut EntityPlan) {
    // TODO: swap the placeholder for per-class human animations once the
    // class-to-filename table is loaded.
    for _ in 1..=MAX_ANIM_DIRECTIONS {
        plan.idle.push(AnimStatePlan::new(
            AnimStateKind::Idle,
            CREATURE_IDLE_SECONDS_PER_FRAME,
            true,
            false,
            HUMAN_PLACEHOLDER_ANIM.to_string(),
            &[0],
        ));
    }
    plan.attack.push(AnimStatePlan::new(
        AnimStateKind::Attack,
        CREATURE_ATTACK_SECONDS_PER_FRAME,
        false,
        false,
        HUMAN_PLACEHOLDER_ANIM.to_string(),
        &[0],
    ));
    plan.death.push(AnimStatePlan::new(
        AnimStateKind::Death,
        CREATURE_ATTACK_SECONDS_PER_FRAME,
        false,
        false,
        HUMAN_PLACEHOLDER_ANIM.to_string(),
        &[0],
    ));
}

/// Builds the animation plan for one flat. Returns `None` when the level
/// info has no flat at `flat_index`.
pub fn plan_flat(flat_index: usize, info: &LevelInfo, tables: &GameTables) -> Option<EntityPlan> {
    let flat = info.flat(flat_index)?;
    let kind = entity_kind(flat);
    match (kind, flat.item_index) {
        (EntityKind::Dynamic, Some(item)) if is_creature_index(item) => {
            let creature_index = (creature_id(item) - 1) as usize;
            let y_offset = tables
                .entities
                .y_offsets
                .get(creature_index)
                .copied()
                .unwrap_or(0);
            let mut plan = EntityPlan::empty(flat_index, kind, y_offset);
            plan_creature(&mut plan, tables, creature_index);
            Some(plan)
        }
        (EntityKind::Dynamic, _) => {
            let mut plan = EntityPlan::empty(flat_index, kind, flat.y_offset);
            plan_human(&mut plan);
            Some(plan)
        }
        (EntityKind::Static, _) => {
            let mut plan = EntityPlan::empty(flat_index, kind, flat.y_offset);
            plan.idle.extend(plan_static_idle(flat));
            Some(plan)
        }
    }
}
