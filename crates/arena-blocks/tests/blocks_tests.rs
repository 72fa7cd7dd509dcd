use arena_blocks::config::FlatInfo;
use arena_blocks::menu::menu_type;
use arena_blocks::{ChasmFaces, DefCache, LevelInfo, MenuType, VoxelDefinition, WallKind};

#[test]
fn city_menu_ids() {
    let expected = [
        MenuType::Equipment,
        MenuType::Tavern,
        MenuType::MagesGuild,
        MenuType::Temple,
        MenuType::House,
        MenuType::House,
        MenuType::House,
        MenuType::CityGates,
        MenuType::CityGates,
        MenuType::Noble,
        MenuType::None,
        MenuType::Palace,
        MenuType::Palace,
        MenuType::Palace,
    ];
    for (id, ty) in expected.iter().enumerate() {
        assert_eq!(menu_type(id as i32, true), *ty, "city id {id}");
    }
    assert_eq!(menu_type(14, true), MenuType::None);
    assert_eq!(menu_type(-1, true), MenuType::None);
}

#[test]
fn wild_menu_ids() {
    let expected = [
        MenuType::None,
        MenuType::Crypt,
        MenuType::House,
        MenuType::Tavern,
        MenuType::Temple,
        MenuType::Tower,
        MenuType::CityGates,
        MenuType::CityGates,
        MenuType::Dungeon,
        MenuType::Dungeon,
    ];
    for (id, ty) in expected.iter().enumerate() {
        assert_eq!(menu_type(id as i32, false), *ty, "wild id {id}");
    }
    assert_eq!(menu_type(10, false), MenuType::None);
}

#[test]
fn chasm_faces_flags() {
    let f = ChasmFaces::from_flags(true, false, true, false);
    assert!(f.north() && f.south());
    assert!(!f.east() && !f.west());
    assert_eq!(f.bits(), ChasmFaces::NORTH | ChasmFaces::SOUTH);
    assert_eq!(ChasmFaces::from_bits(0xFF).bits(), 0x0F);
}

#[test]
fn cache_counts_hits_and_misses() {
    let mut cache: DefCache<u16> = DefCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.get_or_insert_with(0x0101, || 3), 3);
    assert_eq!(cache.get_or_insert_with(0x0101, || 99), 3);
    assert_eq!(cache.get(&0x0101), Some(3));
    let stats = cache.stats();
    assert_eq!((stats.hits, stats.misses, stats.entries), (1, 1, 1));
}

#[test]
fn failed_builds_are_not_cached() {
    let mut cache: DefCache<u16> = DefCache::new();
    assert_eq!(cache.try_get_or_insert_with(0x0101, || None), None);
    assert!(cache.is_empty());
    assert_eq!(cache.try_get_or_insert_with(0x0101, || Some(4)), Some(4));
    assert_eq!(cache.try_get_or_insert_with(0x0101, || Some(9)), Some(4));
    let stats = cache.stats();
    assert_eq!((stats.hits, stats.misses, stats.entries), (1, 2, 1));
}

#[test]
fn menu_wall_reports_menu_id() {
    let wall = VoxelDefinition::Wall {
        texture: 4,
        kind: WallKind::Menu,
        menu_id: Some(1),
    };
    assert_eq!(wall.menu_id(), Some(1));
    assert_eq!(VoxelDefinition::solid_wall(4).menu_id(), None);
    assert!(VoxelDefinition::Empty.is_empty());
}

#[test]
fn level_info_from_toml() {
    let src = r#"
        dry_chasm = 12
        level_up = 7
        menus = [{ texture = 4, menu = 1 }, { texture = 5, menu = 0 }]
        box_sides = [{ id = 2, texture = 30 }]
        box_caps = [{ id = 1, texture = 31 }]

        [ceiling]
        height = 128
        texture_index = 9

        [[flats]]
        texture_name = "TREE1.IMG"
        collider = true

        [[voxel_textures]]
        filename = "WALL.SET"
        set_index = 2
    "#;
    let info = LevelInfo::from_toml_str(src).expect("parse");
    assert_eq!(info.dry_chasm, Some(12));
    assert_eq!(info.wet_chasm, None);
    assert_eq!(info.level_up, Some(7));
    assert_eq!(info.menu_index(4), Some(1));
    assert_eq!(info.menu_index(6), None);
    assert_eq!(info.box_side(2), Some(30));
    assert_eq!(info.box_cap(1), Some(31));
    assert_eq!(info.box_cap(2), None);
    assert_eq!(info.ceiling.height, 128);
    assert_eq!(info.ceiling.texture_index, Some(9));
    assert_eq!(info.ceiling.box_scale, None);
    assert_eq!(
        info.flat(0),
        Some(&FlatInfo {
            texture_name: "TREE1.IMG".into(),
            collider: true,
            ..FlatInfo::default()
        })
    );
    assert_eq!(info.voxel_textures[0].set_index, Some(2));
}

#[test]
fn level_info_defaults() {
    let info = LevelInfo::from_toml_str("").expect("empty parses");
    assert_eq!(info.ceiling.height, 100);
    assert!(info.flats.is_empty());
}
