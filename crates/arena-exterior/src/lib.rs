//! Exterior generation: city block layout, building names, wilderness
//! chunks, palace gate revision and exterior level loading.
#![forbid(unsafe_code)]

pub mod citygen;
pub mod error;
pub mod exterior;
pub mod location;
pub mod names;
pub mod palace;
pub mod wild;

pub use citygen::{BlockType, CityPlan, generate_city, generate_city_plan};
pub use error::{GenError, GenResult};
pub use exterior::ExteriorLevel;
pub use location::{CityDefinition, ClimateType, WeatherType};
pub use names::{BuildingName, NpcNameGenerator};
pub use palace::{PalaceRevision, PalaceSide, revise_palace_graphics};
pub use wild::{WildIndices, generate_wilderness_indices, revise_wilderness_city};
