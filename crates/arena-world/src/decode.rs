//! Bit-level decoding of legacy layer codes into tagged variants.
//!
//! These functions only classify a single code; turning a variant into a
//! voxel definition needs level info and happens in `level`.

use arena_blocks::{ChasmKind, DoorKind, Facing};

pub const DRY_CHASM: u8 = 0xC;
pub const WET_CHASM: u8 = 0xD;
pub const LAVA_CHASM: u8 = 0xE;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FloorCode {
    Floor { texture: u8 },
    Chasm { kind: ChasmKind },
}

impl FloorCode {
    #[inline]
    pub fn is_chasm(self) -> bool {
        matches!(self, FloorCode::Chasm { .. })
    }
}

#[inline]
pub fn floor_texture_id(code: u16) -> u8 {
    ((code & 0xFF00) >> 8) as u8
}

pub fn chasm_kind(texture_id: u8) -> Option<ChasmKind> {
    match texture_id {
        DRY_CHASM => Some(ChasmKind::Dry),
        WET_CHASM => Some(ChasmKind::Wet),
        LAVA_CHASM => Some(ChasmKind::Lava),
        _ => None,
    }
}

pub fn decode_floor(code: u16) -> FloorCode {
    let texture = floor_texture_id(code);
    match chasm_kind(texture) {
        Some(kind) => FloorCode::Chasm { kind },
        None => FloorCode::Floor { texture },
    }
}

/// Flat placed on a floor cell. The low byte is one-based; zero means none.
#[inline]
pub fn floor_flat_index(code: u16) -> Option<usize> {
    match code & 0x00FF {
        0 => None,
        f => Some((f - 1) as usize),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Map1Code {
    Empty,
    /// Full-height wall; `texture` is zero-based.
    Wall { texture: i32 },
    Raised {
        side_id: u8,
        cap_id: u8,
        height_index: usize,
        thickness_index: usize,
    },
    /// Object flat. The index is used as-is.
    Flat { index: usize },
    TransparentWall { texture: i32, collider: bool },
    /// Fence, sign or palace graphic on one face of the voxel. `offset_step`
    /// is the raw 3-bit offset; its scale depends on the world type.
    Edge {
        texture: i32,
        offset_step: i32,
        collider: bool,
        facing: Facing,
    },
    Door { texture: i32, kind: DoorKind },
    Diagonal { texture: i32, is_right: bool },
    /// Known-but-unhandled encodings. The cell is left empty.
    Unsupported { code: u16 },
}

pub fn decode_map1(code: u16) -> Map1Code {
    if code & 0x8000 == 0 {
        if code == 0 {
            return Map1Code::Empty;
        }
        let msb = ((code & 0x7F00) >> 8) as u8;
        let lsb = (code & 0x007F) as u8;
        if msb == lsb {
            return Map1Code::Wall {
                texture: msb as i32 - 1,
            };
        }
        return Map1Code::Raised {
            side_id: (code & 0x000F) as u8,
            cap_id: ((code & 0x00F0) >> 4) as u8,
            height_index: (msb & 0x07) as usize,
            thickness_index: ((msb & 0x78) >> 3) as usize,
        };
    }

    match (code & 0xF000) >> 12 {
        0x8 => match code & 0x00FF {
            0 => Map1Code::Empty,
            index => Map1Code::Flat {
                index: index as usize,
            },
        },
        0x9 => Map1Code::TransparentWall {
            texture: (code & 0x00FF) as i32 - 1,
            collider: code & 0x0100 == 0,
        },
        0xA => {
            let texture = (code & 0x003F) as i32 - 1;
            // Zero texture ids occur in shipped data; the cell stays empty.
            if texture < 0 {
                return Map1Code::Empty;
            }
            let collider = code & 0x0100 != 0;
            let facing = match (code & 0x00C0) >> 4 {
                0x0 => Facing::PositiveX,
                0x4 => Facing::NegativeZ,
                0x8 => Facing::NegativeX,
                _ => Facing::PositiveZ,
            };
            Map1Code::Edge {
                texture,
                offset_step: ((code & 0x0E00) >> 9) as i32,
                collider,
                facing,
            }
        }
        0xB => {
            let texture = (code & 0x003F) as i32 - 1;
            let kind = match (code & 0x00C0) >> 4 {
                0x0 => DoorKind::Swinging,
                0x4 => DoorKind::Sliding,
                0x8 => DoorKind::Raising,
                _ => return Map1Code::Unsupported { code },
            };
            Map1Code::Door { texture, kind }
        }
        0xD => Map1Code::Diagonal {
            texture: (code & 0x00FF) as i32 - 1,
            is_right: code & 0x0100 == 0,
        },
        _ => Map1Code::Unsupported { code },
    }
}

/// Number of stories a second-layer wall occupies.
pub fn map2_height(code: u16) -> usize {
    if code & 0x0080 != 0 {
        2
    } else if code & 0x8000 != 0 {
        3
    } else {
        1
    }
}

#[inline]
pub fn map2_texture(code: u16) -> i32 {
    (code & 0x007F) as i32 - 1
}
