//! The closed set of voxel definitions a level grid can reference.

/// What a solid wall does when the player interacts with it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WallKind {
    Solid,
    LevelUp,
    LevelDown,
    Menu,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChasmKind {
    Dry,
    Wet,
    Lava,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DoorKind {
    Swinging,
    Sliding,
    Raising,
}

/// Which side of its voxel an edge occupies, in grid axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    PositiveX,
    NegativeX,
    PositiveZ,
    NegativeZ,
}

/// Bitset of chasm faces that border a non-chasm floor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChasmFaces(u8);

impl ChasmFaces {
    pub const NORTH: u8 = 1 << 0;
    pub const EAST: u8 = 1 << 1;
    pub const SOUTH: u8 = 1 << 2;
    pub const WEST: u8 = 1 << 3;

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x0F)
    }

    /// Builds from face flags in north, east, south, west order.
    pub fn from_flags(north: bool, east: bool, south: bool, west: bool) -> Self {
        let mut bits = 0;
        if north {
            bits |= Self::NORTH;
        }
        if east {
            bits |= Self::EAST;
        }
        if south {
            bits |= Self::SOUTH;
        }
        if west {
            bits |= Self::WEST;
        }
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }
    #[inline]
    pub const fn north(self) -> bool {
        self.0 & Self::NORTH != 0
    }
    #[inline]
    pub const fn east(self) -> bool {
        self.0 & Self::EAST != 0
    }
    #[inline]
    pub const fn south(self) -> bool {
        self.0 & Self::SOUTH != 0
    }
    #[inline]
    pub const fn west(self) -> bool {
        self.0 & Self::WEST != 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RaisedDef {
    pub side_texture: i32,
    pub floor_texture: i32,
    pub ceiling_texture: i32,
    /// Normalized to the ceiling height.
    pub y_offset: f64,
    pub y_size: f64,
    pub v_top: f64,
    pub v_bottom: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeDef {
    pub texture: i32,
    pub y_offset: f64,
    pub collider: bool,
    /// Mirrors the texture horizontally (palace graphics, store signs).
    pub flipped: bool,
    pub facing: Facing,
}

#[derive(Clone, Debug, PartialEq)]
pub enum VoxelDefinition {
    Empty,
    Floor {
        texture: i32,
    },
    Wall {
        texture: i32,
        kind: WallKind,
        menu_id: Option<i32>,
    },
    Ceiling {
        texture: i32,
    },
    Raised(RaisedDef),
    Diagonal {
        texture: i32,
        is_right: bool,
    },
    TransparentWall {
        texture: i32,
        collider: bool,
    },
    Edge(EdgeDef),
    Chasm {
        texture: i32,
        faces: ChasmFaces,
        kind: ChasmKind,
    },
    Door {
        texture: i32,
        kind: DoorKind,
    },
}

impl VoxelDefinition {
    pub fn solid_wall(texture: i32) -> Self {
        VoxelDefinition::Wall {
            texture,
            kind: WallKind::Solid,
            menu_id: None,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, VoxelDefinition::Empty)
    }

    #[inline]
    pub fn is_chasm(&self) -> bool {
        matches!(self, VoxelDefinition::Chasm { .. })
    }

    /// Menu id of a menu wall, if any.
    pub fn menu_id(&self) -> Option<i32> {
        match self {
            VoxelDefinition::Wall {
                kind: WallKind::Menu,
                menu_id,
                ..
            } => *menu_id,
            _ => None,
        }
    }
}
