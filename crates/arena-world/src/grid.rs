use arena_blocks::VoxelDefinition;

/// Dense voxel index grid plus the definitions those indices point at.
/// Index 0 is always the empty definition.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    width: usize,
    height: usize,
    depth: usize,
    voxels: Vec<u16>,
    defs: Vec<VoxelDefinition>,
}

impl VoxelGrid {
    pub const EMPTY: u16 = 0;

    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
            voxels: vec![Self::EMPTY; width * height * depth],
            defs: vec![VoxelDefinition::Empty],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.width
            && (y as usize) < self.height
            && (z as usize) < self.depth
    }

    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.width + z * self.width * self.height
    }

    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<u16> {
        if !self.contains(x, y, z) {
            return None;
        }
        Some(self.voxels[self.index(x as usize, y as usize, z as usize)])
    }

    /// Writes `id` at `(x, y, z)`. Returns false (and writes nothing) when the
    /// position is outside the grid or `id` names no definition.
    pub fn set(&mut self, x: i32, y: i32, z: i32, id: u16) -> bool {
        if !self.contains(x, y, z) || (id as usize) >= self.defs.len() {
            return false;
        }
        let i = self.index(x as usize, y as usize, z as usize);
        self.voxels[i] = id;
        true
    }

    /// Appends `def` and returns its index. Returns `None` (and stores
    /// nothing) once every `u16` index is taken.
    pub fn add_def(&mut self, def: VoxelDefinition) -> Option<u16> {
        let id = u16::try_from(self.defs.len()).ok()?;
        self.defs.push(def);
        Some(id)
    }

    pub fn def(&self, id: u16) -> Option<&VoxelDefinition> {
        self.defs.get(id as usize)
    }

    pub fn def_at(&self, x: i32, y: i32, z: i32) -> Option<&VoxelDefinition> {
        self.get(x, y, z).and_then(|id| self.def(id))
    }

    pub fn defs(&self) -> &[VoxelDefinition] {
        &self.defs
    }

    pub fn voxels(&self) -> &[u16] {
        &self.voxels
    }
}
