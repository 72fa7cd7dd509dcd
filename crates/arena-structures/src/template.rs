use arena_geom::OriginalInt2;
use hashbrown::HashMap;

use crate::layers::LayerSet;

/// Size of one wilderness chunk on each side.
pub const WILD_CHUNK_DIM: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockRecord {
    pub position: OriginalInt2,
    pub lock_level: i32,
}

/// One level of a map file: its layers plus the metadata the loaders need.
#[derive(Clone, Debug, Default)]
pub struct MapTemplate {
    pub name: String,
    /// Stories in the level's voxel grid.
    pub height: usize,
    pub layers: LayerSet,
    /// In legacy units.
    pub start_points: Vec<OriginalInt2>,
    pub locks: Vec<LockRecord>,
}

impl MapTemplate {
    pub fn new(name: impl Into<String>, height: usize, layers: LayerSet) -> Self {
        Self {
            name: name.into(),
            height,
            layers,
            start_points: Vec::new(),
            locks: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.layers.width
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.layers.depth
    }
}

/// Where generators fetch city blocks, whole maps and wilderness chunks.
pub trait TemplateSource {
    fn city_block(&self, name: &str) -> Option<&MapTemplate>;
    fn map(&self, name: &str) -> Option<&MapTemplate>;
    /// Wilderness chunk ids are one-based.
    fn wild_chunk(&self, id: u8) -> Option<&LayerSet>;
}

/// In-memory template store keyed by upper-case name.
#[derive(Default)]
pub struct TemplateLibrary {
    city_blocks: HashMap<String, MapTemplate>,
    maps: HashMap<String, MapTemplate>,
    wild_chunks: Vec<LayerSet>,
}

impl TemplateLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_city_block(&mut self, template: MapTemplate) {
        self.city_blocks
            .insert(template.name.to_ascii_uppercase(), template);
    }

    pub fn insert_map(&mut self, template: MapTemplate) {
        self.maps.insert(template.name.to_ascii_uppercase(), template);
    }

    /// Appends a wilderness chunk; the first one pushed has id 1.
    pub fn push_wild_chunk(&mut self, chunk: LayerSet) -> u8 {
        self.wild_chunks.push(chunk);
        self.wild_chunks.len() as u8
    }

    pub fn city_block_count(&self) -> usize {
        self.city_blocks.len()
    }

    pub fn wild_chunk_count(&self) -> usize {
        self.wild_chunks.len()
    }
}

impl TemplateSource for TemplateLibrary {
    fn city_block(&self, name: &str) -> Option<&MapTemplate> {
        self.city_blocks.get(&name.to_ascii_uppercase())
    }

    fn map(&self, name: &str) -> Option<&MapTemplate> {
        self.maps.get(&name.to_ascii_uppercase())
    }

    fn wild_chunk(&self, id: u8) -> Option<&LayerSet> {
        (id as usize)
            .checked_sub(1)
            .and_then(|i| self.wild_chunks.get(i))
    }
}
