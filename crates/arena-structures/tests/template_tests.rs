use arena_structures::city_block::{
    CITY_BLOCK_CODES, CITY_BLOCK_VARIATIONS, city_block_code, city_block_mif_name,
    city_block_rotation, city_block_variations,
};
use arena_structures::{LayerSet, MapTemplate, TemplateLibrary, TemplateSource};

#[test]
fn block_names() {
    assert_eq!(city_block_mif_name("EQ", 3, "B"), "EQBD3B.MIF");
    assert_eq!(city_block_code(6), Some("BS"));
    assert_eq!(city_block_code(7), None);
    assert_eq!(city_block_variations(4), Some(15));
    assert_eq!(city_block_rotation(3), Some("D"));
    assert_eq!(city_block_rotation(4), None);
    assert_eq!(CITY_BLOCK_CODES.len(), CITY_BLOCK_VARIATIONS.len());
}

#[test]
fn stamp_rejects_overflow_without_writing() {
    let src = LayerSet::from_layers(2, 2, vec![1; 4], vec![2; 4], vec![3; 4]).expect("sizes");
    let mut dst = LayerSet::new(3, 3);
    assert!(!dst.stamp(&src, 2, 0));
    assert!(dst.flor.iter().all(|&c| c == 0));
    assert!(dst.stamp(&src, 1, 1));
    assert_eq!(dst.flor, vec![0, 0, 0, 0, 1, 1, 0, 1, 1]);
}

#[test]
fn clear_region_zeroes_window() {
    let mut set = LayerSet::from_layers(3, 2, vec![5; 6], vec![6; 6], vec![7; 6]).expect("sizes");
    assert!(set.clear_region(1, 0, 2, 2));
    assert_eq!(set.map1, vec![6, 0, 0, 6, 0, 0]);
    assert!(!set.clear_region(2, 0, 2, 1));
}

#[test]
fn mismatched_buffers_are_rejected() {
    assert!(LayerSet::from_layers(2, 2, vec![0; 4], vec![0; 3], vec![0; 4]).is_none());
}

#[test]
fn library_lookups_are_case_insensitive_and_wild_ids_one_based() {
    let mut lib = TemplateLibrary::new();
    lib.insert_city_block(MapTemplate::new("eqbd1a.mif", 1, LayerSet::new(20, 20)));
    lib.insert_map(MapTemplate::new("CITY.MIF", 6, LayerSet::new(80, 80)));
    let id = lib.push_wild_chunk(LayerSet::new(64, 64));
    assert_eq!(id, 1);
    assert!(lib.city_block("EQBD1A.MIF").is_some());
    assert_eq!(lib.map("city.mif").map(|m| m.width()), Some(80));
    assert!(lib.wild_chunk(0).is_none());
    assert!(lib.wild_chunk(1).is_some());
    assert!(lib.wild_chunk(2).is_none());
    assert_eq!(lib.city_block_count(), 1);
}
