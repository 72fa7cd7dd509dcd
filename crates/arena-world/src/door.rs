use arena_geom::NewInt2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DoorDirection {
    Opening,
    Closing,
    None,
}

/// Animation progress of a door that is not fully closed.
#[derive(Clone, Debug, PartialEq)]
pub struct DoorState {
    voxel: NewInt2,
    percent_open: f64,
    direction: DoorDirection,
}

impl DoorState {
    /// Fraction of a full swing per second.
    pub const DEFAULT_SPEED: f64 = 1.3;

    /// A closed door that has just started opening.
    pub fn new(voxel: NewInt2) -> Self {
        Self::with_progress(voxel, 0.0, DoorDirection::Opening)
    }

    pub fn with_progress(voxel: NewInt2, percent_open: f64, direction: DoorDirection) -> Self {
        Self {
            voxel,
            percent_open: percent_open.clamp(0.0, 1.0),
            direction,
        }
    }

    #[inline]
    pub fn voxel(&self) -> NewInt2 {
        self.voxel
    }
    #[inline]
    pub fn percent_open(&self) -> f64 {
        self.percent_open
    }
    #[inline]
    pub fn direction(&self) -> DoorDirection {
        self.direction
    }
    #[inline]
    pub fn is_closing(&self) -> bool {
        self.direction == DoorDirection::Closing
    }
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.percent_open == 0.0
    }

    pub fn set_direction(&mut self, direction: DoorDirection) {
        self.direction = direction;
    }

    pub fn update(&mut self, dt: f64) {
        let delta = Self::DEFAULT_SPEED * dt;
        match self.direction {
            DoorDirection::Opening => {
                self.percent_open = (self.percent_open + delta).min(1.0);
                if self.percent_open == 1.0 {
                    self.direction = DoorDirection::None;
                }
            }
            DoorDirection::Closing => {
                self.percent_open = (self.percent_open - delta).max(0.0);
                if self.is_closed() {
                    self.direction = DoorDirection::None;
                }
            }
            DoorDirection::None => {}
        }
    }
}

/// A voxel fading out (e.g. a destroyed wall). `voxel` is `(x, y, z)`.
#[derive(Clone, Debug, PartialEq)]
pub struct FadeState {
    voxel: (i32, i32, i32),
    current_seconds: f64,
    target_seconds: f64,
}

impl FadeState {
    pub const DEFAULT_SECONDS: f64 = 1.0;

    pub fn new(voxel: (i32, i32, i32)) -> Self {
        Self::with_target(voxel, Self::DEFAULT_SECONDS)
    }

    pub fn with_target(voxel: (i32, i32, i32), target_seconds: f64) -> Self {
        Self {
            voxel,
            current_seconds: 0.0,
            target_seconds,
        }
    }

    #[inline]
    pub fn voxel(&self) -> (i32, i32, i32) {
        self.voxel
    }

    pub fn percent_done(&self) -> f64 {
        if self.target_seconds <= 0.0 {
            return 1.0;
        }
        (self.current_seconds / self.target_seconds).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_done_fading(&self) -> bool {
        self.percent_done() == 1.0
    }

    pub fn update(&mut self, dt: f64) {
        self.current_seconds = (self.current_seconds + dt).min(self.target_seconds);
    }
}
