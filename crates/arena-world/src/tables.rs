//! Lookup tables lifted from the original executable: raised platform
//! heights, building name fragments, wilderness chunk pools and creature data.

use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GameTables {
    #[serde(default)]
    pub wall_heights: WallHeightTables,
    #[serde(default)]
    pub city_gen: CityGenTables,
    #[serde(default)]
    pub wild: WildBlockPools,
    #[serde(default)]
    pub entities: CreatureTables,
}

/// Raised platform offsets (`box1*`) and thicknesses (`box2*`) in legacy units.
/// `a` is interiors, `b` cities, `c` the wilderness.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct WallHeightTables {
    #[serde(default)]
    pub box1a: Vec<i32>,
    #[serde(default)]
    pub box1b: Vec<i32>,
    #[serde(default)]
    pub box1c: Vec<i32>,
    #[serde(default)]
    pub box2a: Vec<i32>,
    #[serde(default)]
    pub box2b: Vec<i32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CityGenTables {
    #[serde(default)]
    pub tavern_prefixes: Vec<String>,
    #[serde(default)]
    pub tavern_suffixes: Vec<String>,
    #[serde(default)]
    pub tavern_marine_suffixes: Vec<String>,
    #[serde(default)]
    pub equipment_prefixes: Vec<String>,
    #[serde(default)]
    pub equipment_suffixes: Vec<String>,
    #[serde(default)]
    pub temple_prefixes: Vec<String>,
    #[serde(default)]
    pub temple1_suffixes: Vec<String>,
    #[serde(default)]
    pub temple2_suffixes: Vec<String>,
    #[serde(default)]
    pub temple3_suffixes: Vec<String>,
}

impl CityGenTables {
    /// Suffix list for a temple model (0, 1 or 2).
    pub fn temple_suffixes(&self, model: usize) -> &[String] {
        match model {
            0 => &self.temple1_suffixes,
            1 => &self.temple2_suffixes,
            _ => &self.temple3_suffixes,
        }
    }
}

/// Wilderness chunk ids grouped by the kind of chunk they hold.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct WildBlockPools {
    #[serde(default)]
    pub normal: Vec<u8>,
    #[serde(default)]
    pub village: Vec<u8>,
    #[serde(default)]
    pub dungeon: Vec<u8>,
    #[serde(default)]
    pub tavern: Vec<u8>,
    #[serde(default)]
    pub temple: Vec<u8>,
}

/// Per-creature data indexed by creature id minus one.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CreatureTables {
    /// Animation filenames with `@` where the direction digit goes.
    #[serde(default)]
    pub animation_filenames: Vec<String>,
    #[serde(default)]
    pub scales: Vec<u16>,
    #[serde(default)]
    pub y_offsets: Vec<i32>,
}

impl GameTables {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let tables: GameTables = toml::from_str(toml_str)?;
        Ok(tables)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
