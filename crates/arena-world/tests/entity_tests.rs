use arena_blocks::LevelInfo;
use arena_blocks::config::FlatInfo;
use arena_geom::Int2;
use arena_world::entity::{
    self, AnimStateKind, EntityKind, HUMAN_PLACEHOLDER_ANIM, MAX_ANIM_DIRECTIONS,
};
use arena_world::tables::CreatureTables;
use arena_world::{GameTables, LevelData};

fn flat(texture_name: &str, item_index: Option<i32>) -> FlatInfo {
    FlatInfo {
        texture_name: texture_name.to_string(),
        item_index,
        y_offset: -4,
        ..FlatInfo::default()
    }
}

fn tables() -> GameTables {
    GameTables {
        entities: CreatureTables {
            animation_filenames: vec!["rat@.cfa".to_string(), "goblin@.cfa".to_string()],
            scales: vec![0, 200],
            y_offsets: vec![3, 7],
        },
        ..GameTables::default()
    }
}

#[test]
fn item_ranges_pick_entity_kind() {
    assert_eq!(entity::entity_kind(&flat("TREE.IMG", None)), EntityKind::Static);
    assert_eq!(entity::entity_kind(&flat("X.IMG", Some(31))), EntityKind::Static);
    assert_eq!(entity::entity_kind(&flat("X.IMG", Some(32))), EntityKind::Dynamic);
    assert_eq!(entity::entity_kind(&flat("X.IMG", Some(73))), EntityKind::Dynamic);
    assert_eq!(entity::entity_kind(&flat("X.IMG", Some(74))), EntityKind::Static);
    assert_eq!(entity::creature_id(32), 1);
}

#[test]
fn back_facing_directions_mirror_front_ones() {
    assert_eq!(entity::corrected_direction(1), (1, false));
    assert_eq!(entity::corrected_direction(5), (5, false));
    assert_eq!(entity::corrected_direction(6), (4, true));
    assert_eq!(entity::corrected_direction(8), (2, true));
}

#[test]
fn creature_filenames_take_the_direction_digit() {
    assert_eq!(
        entity::creature_filename_for_direction("rat@.cfa", 3).as_deref(),
        Some("RAT3.CFA")
    );
    assert_eq!(entity::creature_filename_for_direction("rat.cfa", 3), None);
}

#[test]
fn flat_dimensions_use_legacy_scaling() {
    assert_eq!(entity::base_flat_dimensions(64, 128, 256), (64, 100));
    assert_eq!(entity::base_flat_dimensions(64, 128, 128), (32, 50));
    assert_eq!(entity::keyframe_dimensions(64, 128, 256), (0.5, 100.0 / 128.0));
}

#[test]
fn zero_or_missing_creature_scale_means_full_size() {
    let tables = tables();
    assert_eq!(entity::creature_scale(&tables, 0), 256);
    assert_eq!(entity::creature_scale(&tables, 1), 200);
    assert_eq!(entity::creature_scale(&tables, 9), 256);
}

#[test]
fn static_flats_idle_only_for_known_extensions() {
    let idle = entity::plan_static_idle(&flat("fire.dfa", None)).expect("idle");
    assert_eq!(idle.kind, AnimStateKind::Idle);
    assert_eq!(idle.texture_name, "FIRE.DFA");
    assert!(idle.looping);
    assert!(idle.frames.is_empty());

    assert!(entity::plan_static_idle(&flat("NOTE", None)).is_none());
    assert!(entity::plan_static_idle(&flat("X.BMP", None)).is_none());
}

#[test]
fn creature_plan_covers_every_direction() {
    let info = LevelInfo {
        flats: vec![flat("", Some(33))],
        ..LevelInfo::default()
    };
    let plan = entity::plan_flat(0, &info, &tables()).expect("plan");
    assert_eq!(plan.kind, EntityKind::Dynamic);
    assert_eq!(plan.y_offset, 7);
    let n = MAX_ANIM_DIRECTIONS as usize;
    assert_eq!((plan.idle.len(), plan.look.len(), plan.walk.len()), (n, n, n));
    assert_eq!(plan.walk[0].texture_name, "GOBLIN1.CFA");
    assert!(!plan.walk[0].flipped);
    assert_eq!(plan.walk[6].texture_name, "GOBLIN3.CFA");
    assert!(plan.walk[6].flipped);
    assert!(!plan.look[0].looping);
    assert_eq!(plan.attack.len(), 1);
    assert_eq!(plan.death[0].texture_name, "GOBLIN6.CFA");
}

#[test]
fn creature_without_animation_gets_no_states() {
    let info = LevelInfo {
        flats: vec![flat("", Some(40))],
        ..LevelInfo::default()
    };
    let plan = entity::plan_flat(0, &info, &tables()).expect("plan");
    assert!(plan.idle.is_empty() && plan.attack.is_empty());
    assert_eq!(plan.y_offset, 0);
}

#[test]
fn human_enemies_use_the_placeholder() {
    let info = LevelInfo {
        flats: vec![flat("", Some(60))],
        ..LevelInfo::default()
    };
    let plan = entity::plan_flat(0, &info, &tables()).expect("plan");
    assert_eq!(plan.idle.len(), MAX_ANIM_DIRECTIONS as usize);
    assert!(plan.idle.iter().all(|s| s.texture_name == HUMAN_PLACEHOLDER_ANIM));
    assert_eq!((plan.attack.len(), plan.death.len()), (1, 1));
    assert!(plan.walk.is_empty());
    assert_eq!(plan.y_offset, -4);
}

#[test]
fn activation_plan_follows_first_seen_order() {
    let mut flats: Vec<FlatInfo> = (0..30).map(|_| flat("LAMP.IMG", None)).collect();
    flats[3] = flat("", Some(32));
    let info = LevelInfo {
        flats,
        ..LevelInfo::default()
    };
    let mut level = LevelData::new(4, 3, 4, info, "T");
    level.add_flat_instance(29, Int2::new(0, 0));
    level.add_flat_instance(3, Int2::new(1, 0));
    level.add_flat_instance(29, Int2::new(2, 0));
    level.add_flat_instance(99, Int2::new(3, 0));

    let plans = level.activation_plan(&tables());
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].flat_index, 29);
    assert!(plans[0].street_light);
    assert_eq!(plans[0].idle.len(), 1);
    assert_eq!(plans[1].flat_index, 3);
    assert_eq!(plans[1].idle[0].texture_name, "RAT1.CFA");
}
