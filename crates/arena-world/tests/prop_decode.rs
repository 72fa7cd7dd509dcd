use arena_blocks::ChasmKind;
use arena_world::ArenaRandom;
use arena_world::decode::{
    FloorCode, Map1Code, decode_floor, decode_map1, floor_flat_index, map2_height,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rng_outputs_fit_sixteen_bits(seed in any::<u32>()) {
        let mut r = ArenaRandom::new(seed);
        for _ in 0..32 {
            prop_assert!(r.next() <= 0xFFFF);
        }
    }

    #[test]
    fn same_seed_same_sequence(seed in any::<u32>()) {
        let mut a = ArenaRandom::new(seed);
        let mut b = ArenaRandom::new(seed);
        for _ in 0..16 {
            prop_assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn only_chasm_ids_decode_as_chasms(code in any::<u16>()) {
        let texture = (code >> 8) as u8;
        match decode_floor(code) {
            FloorCode::Chasm { kind } => {
                let expected = match texture {
                    0xC => ChasmKind::Dry,
                    0xD => ChasmKind::Wet,
                    0xE => ChasmKind::Lava,
                    _ => return Err(TestCaseError::fail("non-chasm id decoded as chasm")),
                };
                prop_assert_eq!(kind, expected);
            }
            FloorCode::Floor { texture: t } => {
                prop_assert!(!(0xC..=0xE).contains(&texture));
                prop_assert_eq!(t, texture);
            }
        }
    }

    #[test]
    fn floor_flats_are_one_based(code in any::<u16>()) {
        let low = (code & 0xFF) as usize;
        prop_assert_eq!(floor_flat_index(code), low.checked_sub(1));
    }

    #[test]
    fn map1_low_codes_are_walls_iff_bytes_match(code in 1u16..0x8000) {
        let msb = (code >> 8) & 0x7F;
        let lsb = code & 0x7F;
        match decode_map1(code) {
            Map1Code::Wall { texture } => {
                prop_assert_eq!(msb, lsb);
                prop_assert_eq!(texture, msb as i32 - 1);
            }
            Map1Code::Raised { height_index, thickness_index, .. } => {
                prop_assert_ne!(msb, lsb);
                prop_assert!(height_index < 8);
                prop_assert!(thickness_index < 16);
            }
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn edges_never_carry_negative_textures(low in 0u16..0x1000) {
        match decode_map1(0xA000 | low) {
            Map1Code::Edge { texture, .. } => prop_assert!(texture >= 0),
            Map1Code::Empty => prop_assert_eq!(low & 0x3F, 0),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn map2_stories_are_one_to_three(code in any::<u16>()) {
        let h = map2_height(code);
        prop_assert!((1..=3).contains(&h));
    }
}
