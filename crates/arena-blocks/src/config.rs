use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

// Per-level info: texture ids, menus, flats. One file per level.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LevelInfo {
    pub ceiling: CeilingInfo,
    pub dry_chasm: Option<i32>,
    pub wet_chasm: Option<i32>,
    pub lava_chasm: Option<i32>,
    pub level_up: Option<i32>,
    pub level_down: Option<i32>,
    pub menus: Vec<MenuEntry>,
    pub box_sides: Vec<TextureEntry>,
    pub box_caps: Vec<TextureEntry>,
    pub voxel_textures: Vec<VoxelTexture>,
    pub flats: Vec<FlatInfo>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CeilingInfo {
    /// Ceiling height in legacy units.
    pub height: i32,
    pub texture_index: Option<i32>,
    /// Scales raised platform thickness, out of 256.
    pub box_scale: Option<i32>,
    pub outdoor_dungeon: bool,
}

impl Default for CeilingInfo {
    fn default() -> Self {
        Self {
            height: 100,
            texture_index: None,
            box_scale: None,
            outdoor_dungeon: false,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub texture: i32,
    pub menu: i32,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureEntry {
    pub id: i32,
    pub texture: i32,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VoxelTexture {
    pub filename: String,
    #[serde(default)]
    pub set_index: Option<i32>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FlatInfo {
    pub texture_name: String,
    pub item_index: Option<i32>,
    pub y_offset: i32,
    pub collider: bool,
    pub puddle: bool,
    pub large_scale: bool,
    pub medium_scale: bool,
    pub dark: bool,
    pub transparent: bool,
    pub ceiling: bool,
}

impl LevelInfo {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let info: LevelInfo = toml::from_str(toml_str)?;
        Ok(info)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Menu id attached to a wall texture, if that texture is a menu.
    pub fn menu_index(&self, texture: i32) -> Option<i32> {
        self.menus
            .iter()
            .find(|m| m.texture == texture)
            .map(|m| m.menu)
    }

    pub fn box_side(&self, id: i32) -> Option<i32> {
        self.box_sides
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.texture)
    }

    pub fn box_cap(&self, id: i32) -> Option<i32> {
        self.box_caps
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.texture)
    }

    pub fn flat(&self, index: usize) -> Option<&FlatInfo> {
        self.flats.get(index)
    }
}
