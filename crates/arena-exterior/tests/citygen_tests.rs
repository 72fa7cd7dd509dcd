use arena_exterior::{BlockType, GenError, generate_city, generate_city_plan};
use arena_geom::Int2;
use arena_structures::city_block::{
    CITY_BLOCK_CODES, CITY_BLOCK_ROTATIONS, CITY_BLOCK_STRIDE, CITY_BLOCK_VARIATIONS,
    city_block_mif_name,
};
use arena_structures::{LayerSet, MapTemplate, TemplateLibrary};
use arena_world::ArenaRandom;

fn marker(block_index: usize) -> u16 {
    ((block_index as u16) + 1) << 8
}

/// Every block name the generator can ask for, as 2x2 templates whose floor
/// carries the block kind.
fn block_library() -> TemplateLibrary {
    let mut lib = TemplateLibrary::new();
    for (b, code) in CITY_BLOCK_CODES.iter().enumerate() {
        for variation in 0..CITY_BLOCK_VARIATIONS[b] {
            for rotation in CITY_BLOCK_ROTATIONS {
                let layers =
                    LayerSet::from_layers(2, 2, vec![marker(b); 4], vec![0x0101; 4], vec![7; 4])
                        .expect("sizes");
                let name = city_block_mif_name(code, variation, rotation);
                lib.insert_city_block(MapTemplate::new(name, 1, layers));
            }
        }
    }
    lib
}

#[test]
fn scenario_plan_has_every_seeded_block() {
    let mut rng = ArenaRandom::new(0x12345678);
    let plan = generate_city_plan(8, &[], &mut rng).expect("plan");
    assert_eq!(plan.blocks().len(), 64);
    assert_eq!(plan.count(BlockType::Empty), 0);
    assert_eq!(plan.count(BlockType::Reserved), 0);
    assert_eq!(plan.count(BlockType::MagesGuild), 1);
    assert_eq!(plan.count(BlockType::Spacer), 1);
    for kind in [
        BlockType::Equipment,
        BlockType::NobleHouse,
        BlockType::Temple,
        BlockType::Tavern,
    ] {
        assert!(plan.count(kind) >= 1, "{kind:?}");
    }
}

#[test]
fn plans_are_deterministic_per_seed() {
    let a = generate_city_plan(6, &[3], &mut ArenaRandom::new(77)).expect("plan");
    let b = generate_city_plan(6, &[3], &mut ArenaRandom::new(77)).expect("plan");
    assert_eq!(a, b);
}

#[test]
fn reserved_blocks_out_of_range_are_ignored() {
    let mut rng = ArenaRandom::new(5);
    let plan = generate_city_plan(3, &[0, 4, 200], &mut rng).expect("plan");
    assert_eq!(plan.get(0, 0), Some(BlockType::Reserved));
    assert_eq!(plan.get(1, 1), Some(BlockType::Reserved));
    assert_eq!(plan.count(BlockType::Reserved), 2);
    assert_eq!(plan.count(BlockType::Empty), 0);
}

#[test]
fn plans_without_room_for_seeded_blocks_fail() {
    let mut rng = ArenaRandom::default();
    let err = generate_city_plan(2, &[], &mut rng).unwrap_err();
    assert_eq!(err, GenError::CityTooSmall { blocks: 4, empty: 4 });
    let err = generate_city_plan(3, &[0, 1, 2, 3], &mut rng).unwrap_err();
    assert_eq!(err, GenError::CityTooSmall { blocks: 9, empty: 5 });
}

#[test]
fn blocks_are_stamped_at_their_plan_cells() {
    let lib = block_library();
    let start = Int2::new(1, 2);
    let mut dst = LayerSet::new(64, 64);
    let mut rng = ArenaRandom::new(0xBEEF);
    let plan = generate_city(0xBEEF, 3, 64, &[4], start, &mut rng, &lib, &mut dst).expect("city");

    for row in 0..3 {
        for col in 0..3 {
            let x = 1 + col * CITY_BLOCK_STRIDE;
            let z = 2 + row * CITY_BLOCK_STRIDE;
            let i = x + z * 64;
            let block = plan.get(col, row).expect("cell");
            match block.block_index() {
                Some(b) => {
                    assert_eq!(dst.flor[i], marker(b), "cell ({col}, {row})");
                    assert_eq!(dst.flor[i + 1 + 64], marker(b));
                    assert_eq!(dst.map1[i], 0x0101);
                    assert_eq!(dst.map2[i + 64], 7);
                }
                None => assert_eq!(dst.flor[i], 0),
            }
        }
    }
    assert_eq!(plan.get(1, 1), Some(BlockType::Reserved));
}

#[test]
fn stamping_is_deterministic() {
    let lib = block_library();
    let run = || {
        let mut dst = LayerSet::new(64, 64);
        let mut rng = ArenaRandom::new(31337);
        generate_city(31337, 3, 64, &[], Int2::ZERO, &mut rng, &lib, &mut dst).expect("city");
        (dst, rng)
    };
    let (a, rng_a) = run();
    let (b, rng_b) = run();
    assert_eq!(a, b);
    assert_eq!(rng_a, rng_b);
}

#[test]
fn missing_block_template_is_fatal() {
    let lib = TemplateLibrary::new();
    let mut dst = LayerSet::new(64, 64);
    let mut rng = ArenaRandom::new(1);
    let err = generate_city(1, 3, 64, &[], Int2::ZERO, &mut rng, &lib, &mut dst).unwrap_err();
    match err {
        GenError::MissingCityBlock(name) => assert!(name.ends_with(".MIF"), "{name}"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn blocks_past_the_layers_are_rejected() {
    let lib = block_library();
    let mut dst = LayerSet::new(30, 30);
    let mut rng = ArenaRandom::new(9);
    let err = generate_city(9, 3, 30, &[], Int2::ZERO, &mut rng, &lib, &mut dst).unwrap_err();
    assert!(matches!(err, GenError::LayerSize { .. }), "{err:?}");

    let mut rng = ArenaRandom::new(9);
    let err =
        generate_city(9, 3, 64, &[], Int2::new(-30, 0), &mut rng, &lib, &mut LayerSet::new(64, 64))
            .unwrap_err();
    assert!(matches!(err, GenError::BlockOffset { .. }), "{err:?}");
}
