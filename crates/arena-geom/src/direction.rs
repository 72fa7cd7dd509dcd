//! Cardinal directions in the grid ("new") coordinate system.

use crate::{Double2, Int2, NewInt2};

pub const NORTH: NewInt2 = Int2::new(-1, 0);
pub const SOUTH: NewInt2 = Int2::new(1, 0);
pub const EAST: NewInt2 = Int2::new(0, -1);
pub const WEST: NewInt2 = Int2::new(0, 1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardinalDirectionName {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CardinalDirectionName {
    pub const ALL: [CardinalDirectionName; 8] = [
        CardinalDirectionName::North,
        CardinalDirectionName::NorthEast,
        CardinalDirectionName::East,
        CardinalDirectionName::SouthEast,
        CardinalDirectionName::South,
        CardinalDirectionName::SouthWest,
        CardinalDirectionName::West,
        CardinalDirectionName::NorthWest,
    ];

    pub fn to_str(self) -> &'static str {
        match self {
            CardinalDirectionName::North => "North",
            CardinalDirectionName::NorthEast => "Northeast",
            CardinalDirectionName::East => "East",
            CardinalDirectionName::SouthEast => "Southeast",
            CardinalDirectionName::South => "South",
            CardinalDirectionName::SouthWest => "Southwest",
            CardinalDirectionName::West => "West",
            CardinalDirectionName::NorthWest => "Northwest",
        }
    }

    /// Unit vector for this direction.
    pub fn vector(self) -> Double2 {
        let (a, b) = match self {
            CardinalDirectionName::North => (NORTH, None),
            CardinalDirectionName::NorthEast => (NORTH, Some(EAST)),
            CardinalDirectionName::East => (EAST, None),
            CardinalDirectionName::SouthEast => (SOUTH, Some(EAST)),
            CardinalDirectionName::South => (SOUTH, None),
            CardinalDirectionName::SouthWest => (SOUTH, Some(WEST)),
            CardinalDirectionName::West => (WEST, None),
            CardinalDirectionName::NorthWest => (NORTH, Some(WEST)),
        };
        let a = to_double(a);
        match b {
            Some(b) => (a + to_double(b)).normalized(),
            None => a,
        }
    }
}

impl core::fmt::Display for CardinalDirectionName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.to_str())
    }
}

#[inline]
fn to_double(v: Int2) -> Double2 {
    Double2::new(v.x as f64, v.y as f64)
}

/// Resolves the closest of the eight named directions. The input is
/// normalized first; a zero vector resolves to North.
pub fn direction_name(direction: Double2) -> CardinalDirectionName {
    const DEVIATION: f64 = 1.0 / 12.0;
    let direction = direction.normalized();
    CardinalDirectionName::ALL
        .into_iter()
        .find(|name| direction.dot(name.vector()) >= 1.0 - DEVIATION)
        .unwrap_or(CardinalDirectionName::North)
}
