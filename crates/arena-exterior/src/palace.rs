//! City maps mark the palace with placeholder graphics on their perimeter.
//! This pass swaps them, and the nearby gate, for the codes used in game.

use arena_geom::{Int2, NewInt2};

const MAX_GATE_DISTANCE: i32 = 8;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PalaceSide {
    North,
    South,
    East,
    West,
}

/// What the palace pass wrote. Positions are `(x, z)` grid cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PalaceRevision {
    pub side: PalaceSide,
    pub first_palace: NewInt2,
    pub second_palace: NewInt2,
    /// Both gate cells, when a gate lies within reach of the palace.
    pub gate: Option<(NewInt2, NewInt2)>,
}

struct SideCodes {
    first_palace: u16,
    second_palace: u16,
    gate: u16,
}

struct Map1View<'a> {
    map1: &'a mut [u16],
    width: i32,
    depth: i32,
}

impl Map1View<'_> {
    fn index(&self, x: i32, z: i32) -> Option<usize> {
        if x < 0 || z < 0 || x >= self.width || z >= self.depth {
            return None;
        }
        let i = (z + x * self.depth) as usize;
        (i < self.map1.len()).then_some(i)
    }

    fn top_nibble(&self, x: i32, z: i32) -> Option<u16> {
        self.index(x, z).map(|i| (self.map1[i] & 0xF000) >> 12)
    }

    fn set(&mut self, voxel: NewInt2, code: u16) {
        if let Some(i) = self.index(voxel.x, voxel.y) {
            self.map1[i] = code;
        }
    }

    fn find_palace(&self) -> Option<(PalaceSide, i32)> {
        let is_palace = |x, z| self.top_nibble(x, z) == Some(0x9);
        for z in 1..self.depth - 1 {
            if is_palace(0, z) {
                return Some((PalaceSide::North, z));
            }
            if is_palace(self.width - 1, z) {
                return Some((PalaceSide::South, z));
            }
        }
        for x in 1..self.width - 1 {
            if is_palace(x, 0) {
                return Some((PalaceSide::East, x));
            }
            if is_palace(x, self.depth - 1) {
                return Some((PalaceSide::West, x));
            }
        }
        None
    }

    /// Steps from `start` until a gate marker turns up. Leaving the map
    /// ends the search.
    fn gate_distance(&self, start: NewInt2, dir: NewInt2) -> Option<i32> {
        let mut position = start;
        for i in 0..MAX_GATE_DISTANCE {
            match self.top_nibble(position.x, position.y) {
                Some(0xA) => return Some(i),
                Some(_) => position += dir,
                None => return None,
            }
        }
        None
    }
}

/// Rewrites the palace graphics found on the map1 perimeter. `map1` is
/// indexed `z + x * depth`. Returns `None` when the map has no palace.
pub fn revise_palace_graphics(
    map1: &mut [u16],
    width: usize,
    depth: usize,
) -> Option<PalaceRevision> {
    let mut view = Map1View {
        map1,
        width: width as i32,
        depth: depth as i32,
    };
    let Some((side, offset)) = view.find_palace() else {
        log::warn!("No palace graphics found to revise.");
        return None;
    };

    let north_south_step = Int2::new(0, -1);
    let east_west_step = Int2::new(-1, 0);
    let (first_palace, step, gate_dir, codes) = match side {
        PalaceSide::North => (
            Int2::new(view.width - 1, offset),
            north_south_step,
            Int2::new(-1, 0),
            SideCodes {
                first_palace: 0xA5B5,
                second_palace: 0xA5B4,
                gate: 0xA1B3,
            },
        ),
        PalaceSide::South => (
            Int2::new(0, offset),
            north_south_step,
            Int2::new(1, 0),
            SideCodes {
                first_palace: 0xA534,
                second_palace: 0xA535,
                gate: 0xA133,
            },
        ),
        PalaceSide::East => (
            Int2::new(offset, view.depth - 1),
            east_west_step,
            Int2::new(0, -1),
            SideCodes {
                first_palace: 0xA574,
                second_palace: 0xA575,
                gate: 0xA173,
            },
        ),
        PalaceSide::West => (
            Int2::new(offset, 0),
            east_west_step,
            Int2::new(0, 1),
            SideCodes {
                first_palace: 0xA5F5,
                second_palace: 0xA5F4,
                gate: 0xA1F3,
            },
        ),
    };
    let second_palace = first_palace + step;
    let gate = view.gate_distance(first_palace, gate_dir).map(|d| {
        let first = first_palace + gate_dir * d;
        (first, first + step)
    });

    view.set(first_palace, codes.first_palace);
    view.set(second_palace, codes.second_palace);
    if let Some((a, b)) = gate {
        view.set(a, codes.gate);
        view.set(b, codes.gate);
    }
    log::debug!(target: "gen", "revised palace on {side:?} side at {first_palace:?}");

    Some(PalaceRevision {
        side,
        first_palace,
        second_palace,
        gate,
    })
}
