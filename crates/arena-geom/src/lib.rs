//! Integer/real grid vectors and the coordinate transform layer.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

pub mod coords;
pub mod direction;

pub use coords::{CHUNK_DIM, ChunkVoxel};
pub use direction::CardinalDirectionName;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Int2 {
    pub x: i32,
    pub y: i32,
}

// Aliases for the coordinate systems in play. All are top-down, like a 2D array.
/// +X west, +Y south (legacy maps, origin at top right).
pub type OriginalInt2 = Int2;
/// +X south, +Y west.
pub type NewInt2 = Int2;
/// +X east, +Y south, unbounded (origin at top left).
pub type ChunkInt2 = Int2;
/// Same directions as a chunk, in `[0, CHUNK_DIM)`.
pub type ChunkVoxelInt2 = Int2;
/// Chunk voxel offset by its chunk, unbounded.
pub type AbsoluteChunkVoxelInt2 = Int2;

impl Int2 {
    pub const ZERO: Int2 = Int2 { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Int2 {
    type Output = Int2;
    #[inline]
    fn add(self, rhs: Int2) -> Int2 {
        Int2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Int2 {
    #[inline]
    fn add_assign(&mut self, rhs: Int2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Int2 {
    type Output = Int2;
    #[inline]
    fn sub(self, rhs: Int2) -> Int2 {
        Int2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Int2 {
    type Output = Int2;
    #[inline]
    fn mul(self, rhs: i32) -> Int2 {
        Int2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(i32, i32)> for Int2 {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Double2 {
    pub x: f64,
    pub y: f64,
}

impl Double2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, rhs: Double2) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Double2 {
        let len = self.length();
        if len > 0.0 {
            Double2::new(self.x / len, self.y / len)
        } else {
            self
        }
    }
}

impl Add for Double2 {
    type Output = Double2;
    #[inline]
    fn add(self, rhs: Double2) -> Double2 {
        Double2::new(self.x + rhs.x, self.y + rhs.y)
    }
}
