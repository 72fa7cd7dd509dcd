use arena_geom::coords::{
    CHUNK_DIM, absolute_to_chunk_voxel, chunk_voxel_to_absolute, chunk_voxel_to_new_voxel,
    legacy_layer_index, new_voxel_to_absolute, new_voxel_to_chunk, new_voxel_to_chunk_voxel,
    next_higher_chunk_multiple,
};
use arena_geom::Int2;
use proptest::prelude::*;

fn grid_dims() -> impl Strategy<Value = (i32, i32)> {
    (1i32..=512, 1i32..=512)
}

proptest! {
    #[test]
    fn chunk_multiple_is_smallest_multiple_at_or_above(c in -10_000i32..10_000) {
        let m = next_higher_chunk_multiple(c);
        prop_assert_eq!(m.rem_euclid(CHUNK_DIM), 0);
        prop_assert!(m >= c);
        prop_assert!(m - c < CHUNK_DIM);
    }

    #[test]
    fn absolute_split_recombines(x in -5_000i32..5_000, y in -5_000i32..5_000) {
        let cv = absolute_to_chunk_voxel(Int2::new(x, y));
        prop_assert!((0..CHUNK_DIM).contains(&cv.voxel.x));
        prop_assert!((0..CHUNK_DIM).contains(&cv.voxel.y));
        prop_assert_eq!(chunk_voxel_to_absolute(cv.chunk, cv.voxel), Int2::new(x, y));
    }

    #[test]
    fn new_voxel_round_trips_through_chunk_space(
        (w, d) in grid_dims(),
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        let v = Int2::new((fx * w as f64) as i32, (fy * d as f64) as i32);
        let cv = new_voxel_to_chunk_voxel(v, w, d);
        prop_assert_eq!(chunk_voxel_to_new_voxel(cv.chunk, cv.voxel, w, d), v);
        prop_assert_eq!(new_voxel_to_chunk(v, w, d), cv.chunk);
        prop_assert_eq!(new_voxel_to_absolute(v, w, d), chunk_voxel_to_absolute(cv.chunk, cv.voxel));
    }

    #[test]
    fn legacy_index_is_a_permutation(w in 1usize..24, d in 1usize..24) {
        let mut seen = vec![false; w * d];
        for x in 0..w {
            for z in 0..d {
                let i = legacy_layer_index(x, z, w, d);
                prop_assert!(i < w * d);
                prop_assert!(!seen[i]);
                seen[i] = true;
            }
        }
    }
}
