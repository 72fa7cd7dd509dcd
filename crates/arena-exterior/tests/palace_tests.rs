use arena_exterior::{PalaceSide, revise_palace_graphics};
use arena_geom::Int2;

const W: usize = 6;
const D: usize = 5;

fn map(cells: &[((usize, usize), u16)]) -> Vec<u16> {
    let mut map1 = vec![0x0101; W * D];
    for &((x, z), code) in cells {
        map1[z + x * D] = code;
    }
    map1
}

fn at(map1: &[u16], x: i32, z: i32) -> u16 {
    map1[z as usize + x as usize * D]
}

#[test]
fn north_palace_with_gate() {
    let mut map1 = map(&[((0, 2), 0x9000), ((3, 2), 0xA000)]);
    let rev = revise_palace_graphics(&mut map1, W, D).expect("palace");
    assert_eq!(rev.side, PalaceSide::North);
    assert_eq!(rev.first_palace, Int2::new(5, 2));
    assert_eq!(rev.second_palace, Int2::new(5, 1));
    assert_eq!(rev.gate, Some((Int2::new(3, 2), Int2::new(3, 1))));
    assert_eq!(at(&map1, 5, 2), 0xA5B5);
    assert_eq!(at(&map1, 5, 1), 0xA5B4);
    assert_eq!(at(&map1, 3, 2), 0xA1B3);
    assert_eq!(at(&map1, 3, 1), 0xA1B3);
}

#[test]
fn south_palace_without_gate() {
    let mut map1 = map(&[((5, 3), 0x9123)]);
    let before = map1.clone();
    let rev = revise_palace_graphics(&mut map1, W, D).expect("palace");
    assert_eq!(rev.side, PalaceSide::South);
    assert_eq!(rev.first_palace, Int2::new(0, 3));
    assert_eq!(rev.gate, None);
    assert_eq!(at(&map1, 0, 3), 0xA534);
    assert_eq!(at(&map1, 0, 2), 0xA535);
    let changed = map1.iter().zip(&before).filter(|(a, b)| a != b).count();
    assert_eq!(changed, 2);
}

#[test]
fn east_and_west_palaces() {
    let mut map1 = map(&[((2, 0), 0x9000), ((2, 1), 0xA000)]);
    let rev = revise_palace_graphics(&mut map1, W, D).expect("palace");
    assert_eq!(rev.side, PalaceSide::East);
    assert_eq!(rev.first_palace, Int2::new(2, 4));
    assert_eq!(rev.second_palace, Int2::new(1, 4));
    assert_eq!(rev.gate, Some((Int2::new(2, 1), Int2::new(1, 1))));
    assert_eq!(at(&map1, 2, 4), 0xA574);
    assert_eq!(at(&map1, 1, 1), 0xA173);

    let mut map1 = map(&[((3, 4), 0x9000)]);
    let rev = revise_palace_graphics(&mut map1, W, D).expect("palace");
    assert_eq!(rev.side, PalaceSide::West);
    assert_eq!(rev.first_palace, Int2::new(3, 0));
    assert_eq!(at(&map1, 3, 0), 0xA5F5);
    assert_eq!(at(&map1, 2, 0), 0xA5F4);
}

#[test]
fn gate_on_the_palace_cell_itself() {
    // The first palace cell is on the far edge; a gate marker there is found
    // at distance zero.
    let mut map1 = map(&[((0, 2), 0x9000), ((5, 2), 0xA000)]);
    let rev = revise_palace_graphics(&mut map1, W, D).expect("palace");
    assert_eq!(rev.gate, Some((Int2::new(5, 2), Int2::new(5, 1))));
    assert_eq!(at(&map1, 5, 2), 0xA1B3);
}

#[test]
fn corners_are_not_searched() {
    let mut map1 = map(&[((0, 0), 0x9000), ((W - 1, D - 1), 0x9000)]);
    let before = map1.clone();
    assert_eq!(revise_palace_graphics(&mut map1, W, D), None);
    assert_eq!(map1, before);
}
