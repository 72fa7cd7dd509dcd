/// The legacy linear congruential generator. Every procedural pass threads
/// one of these through by `&mut` so sequences stay reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaRandom {
    value: u32,
}

impl ArenaRandom {
    pub const DEFAULT_SEED: u32 = 12345;
    const MULTIPLIER: u32 = 7143469;

    pub fn new(seed: u32) -> Self {
        Self { value: seed }
    }

    pub fn srand(&mut self, seed: u32) {
        self.value = seed;
    }

    /// Advances the state and returns the next value in `[0, 0xFFFF]`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u32 {
        self.value = self.value.wrapping_mul(Self::MULTIPLIER);
        (self.value >> 16) & 0xFFFF
    }
}

impl Default for ArenaRandom {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}
