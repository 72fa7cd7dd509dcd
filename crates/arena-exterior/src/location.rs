use arena_geom::{Int2, OriginalInt2};
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClimateType {
    #[default]
    Temperate,
    Desert,
    Mountain,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeatherType {
    #[default]
    Clear,
    Overcast,
    Rain,
    Snow,
    SnowOvercast,
    Rain2,
    Overcast2,
    SnowOvercast2,
}

/// Rewrites one temple name in a main quest city after generation.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainQuestTempleOverride {
    pub model_index: usize,
    pub suffix_index: usize,
    /// Position in the generated building name list.
    pub menu_names_index: usize,
}

// City generation inputs for one location. Loaded once per location.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CityDefinition {
    pub name: String,
    /// Skeleton map the generated blocks are stamped into.
    pub map_filename: String,
    pub city_seed: u32,
    pub wild_seed: u32,
    pub blocks_per_side: usize,
    pub block_start_x: i32,
    pub block_start_y: i32,
    pub reserved_blocks: Vec<u8>,
    pub climate: ClimateType,
    pub coastal: bool,
    pub premade: bool,
    pub race_id: i32,
    /// "City", "Town" or "Village"; substituted into equipment store names.
    pub type_display_name: String,
    pub main_quest_temple_override: Option<MainQuestTempleOverride>,
}

impl Default for CityDefinition {
    fn default() -> Self {
        Self {
            name: String::new(),
            map_filename: String::new(),
            city_seed: 0,
            wild_seed: 0,
            blocks_per_side: 4,
            block_start_x: 0,
            block_start_y: 0,
            reserved_blocks: Vec::new(),
            climate: ClimateType::Temperate,
            coastal: false,
            premade: false,
            race_id: 0,
            type_display_name: "City".to_string(),
            main_quest_temple_override: None,
        }
    }
}

impl CityDefinition {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let def: CityDefinition = toml::from_str(toml_str)?;
        Ok(def)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    #[inline]
    pub fn block_start(&self) -> OriginalInt2 {
        Int2::new(self.block_start_x, self.block_start_y)
    }

    #[inline]
    pub fn local_city_point(&self) -> Int2 {
        local_city_point(self.city_seed)
    }
}

/// The city's position within its province, packed into the seed.
#[inline]
pub fn local_city_point(city_seed: u32) -> Int2 {
    Int2::new((city_seed >> 16) as i32, (city_seed & 0xFFFF) as i32)
}

fn climate_letter(climate: ClimateType) -> char {
    match climate {
        ClimateType::Temperate => 'T',
        ClimateType::Desert => 'D',
        ClimateType::Mountain => 'M',
    }
}

fn weather_letter(climate: ClimateType, weather: WeatherType) -> char {
    match weather {
        WeatherType::Clear | WeatherType::Overcast | WeatherType::Overcast2 => 'N',
        WeatherType::Rain | WeatherType::Rain2 => 'R',
        WeatherType::Snow | WeatherType::SnowOvercast | WeatherType::SnowOvercast2 => {
            if climate == ClimateType::Desert {
                log::warn!("Deserts do not have snow templates.");
                'N'
            } else {
                'S'
            }
        }
    }
}

fn inf_name(climate: ClimateType, location: char, weather: WeatherType) -> String {
    format!(
        "{}{}{}.INF",
        climate_letter(climate),
        location,
        weather_letter(climate, weather)
    )
}

/// Level info file for a city under the given weather, e.g. `TCN.INF`.
pub fn city_inf_name(climate: ClimateType, weather: WeatherType) -> String {
    inf_name(climate, 'C', weather)
}

pub fn wilderness_inf_name(climate: ClimateType, weather: WeatherType) -> String {
    inf_name(climate, 'W', weather)
}
