use thiserror::Error;

/// Fatal generation failures. The caller aborts the level load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("missing city block template {0}")]
    MissingCityBlock(String),

    #[error("missing map template {0}")]
    MissingMap(String),

    #[error("missing wilderness chunk {0}")]
    MissingWildChunk(u8),

    #[error("wilderness pool {0} is empty")]
    EmptyWildPool(&'static str),

    #[error("name table {table} has no entry {index}")]
    NameTable { table: &'static str, index: usize },

    #[error("city plan of {blocks} blocks has only {empty} free cells")]
    CityTooSmall { blocks: usize, empty: usize },

    #[error("city block offset ({x}, {z}) is outside the layers")]
    BlockOffset { x: i32, z: i32 },

    #[error("wilderness chunk ({x}, {y}) is outside the 64x64 chunk grid")]
    WildChunkOutOfRange { x: usize, y: usize },

    #[error("layer buffer too small: need {needed} cells, have {actual}")]
    LayerSize { needed: usize, actual: usize },
}

pub type GenResult<T> = Result<T, GenError>;
