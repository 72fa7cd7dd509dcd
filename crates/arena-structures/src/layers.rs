/// The three legacy layers of a map region: floor, main floor objects, and
/// upper walls. Each is `width * depth` codes, stored `depth` rows of
/// `width` codes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerSet {
    pub width: usize,
    pub depth: usize,
    pub flor: Vec<u16>,
    pub map1: Vec<u16>,
    pub map2: Vec<u16>,
}

impl LayerSet {
    pub fn new(width: usize, depth: usize) -> Self {
        let n = width * depth;
        Self {
            width,
            depth,
            flor: vec![0; n],
            map1: vec![0; n],
            map2: vec![0; n],
        }
    }

    /// Builds a layer set from existing buffers. Returns `None` if any buffer
    /// is not exactly `width * depth` long.
    pub fn from_layers(
        width: usize,
        depth: usize,
        flor: Vec<u16>,
        map1: Vec<u16>,
        map2: Vec<u16>,
    ) -> Option<Self> {
        let n = width * depth;
        if flor.len() != n || map1.len() != n || map2.len() != n {
            return None;
        }
        Some(Self {
            width,
            depth,
            flor,
            map1,
            map2,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.depth
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn index(&self, col: usize, row: usize) -> usize {
        col + row * self.width
    }

    /// Copies every row of `src` into this set with its top-left cell at
    /// `(col, row)`. Nothing is written and false is returned when `src`
    /// does not fit.
    pub fn stamp(&mut self, src: &LayerSet, col: usize, row: usize) -> bool {
        if col + src.width > self.width || row + src.depth > self.depth {
            return false;
        }
        for z in 0..src.depth {
            let s = z * src.width;
            let d = col + (z + row) * self.width;
            self.flor[d..d + src.width].copy_from_slice(&src.flor[s..s + src.width]);
            self.map1[d..d + src.width].copy_from_slice(&src.map1[s..s + src.width]);
            self.map2[d..d + src.width].copy_from_slice(&src.map2[s..s + src.width]);
        }
        true
    }

    /// Zeroes a `width x depth` region of all three layers. Returns false
    /// without writing when the region does not fit.
    pub fn clear_region(&mut self, col: usize, row: usize, width: usize, depth: usize) -> bool {
        if col + width > self.width || row + depth > self.depth {
            return false;
        }
        for z in row..row + depth {
            let d = col + z * self.width;
            self.flor[d..d + width].fill(0);
            self.map1[d..d + width].fill(0);
            self.map2[d..d + width].fill(0);
        }
        true
    }
}

/// Reads little-endian `u16` codes. A trailing odd byte is ignored.
pub fn codes_from_le_bytes(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .collect()
}
