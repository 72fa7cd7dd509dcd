//! Level construction: the legacy RNG, voxel grid, layer decoding, level
//! data and entity animation planning.
#![forbid(unsafe_code)]

pub mod decode;
pub mod door;
pub mod entity;
pub mod grid;
pub mod level;
pub mod random;
pub mod tables;
pub mod world_type;

pub use door::{DoorDirection, DoorState, FadeState};
pub use grid::VoxelGrid;
pub use level::{FlatDef, LevelData, Lock};
pub use random::ArenaRandom;
pub use tables::GameTables;
pub use world_type::WorldType;
