//! Voxel definitions, menu types, definition caches and level info.
#![forbid(unsafe_code)]

pub mod cache;
pub mod config;
pub mod menu;
pub mod types;

pub use cache::{DefCache, DefCacheStats};
pub use config::LevelInfo;
pub use menu::MenuType;
pub use types::{ChasmFaces, ChasmKind, DoorKind, Facing, VoxelDefinition, WallKind};
