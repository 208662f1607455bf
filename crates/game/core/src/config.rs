/// Session configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of life hearts the player holds at full health.
    pub max_life: u32,
    /// Number of shield hearts the player can accumulate.
    pub max_shield: u32,
    /// Score awarded for collecting a coin.
    pub coin_value: u32,
    /// Score delta applied on death. Additive: deaths increase the score.
    pub death_penalty: u32,
    /// Movement speed restored when a dialogue releases the player.
    pub walk_speed: f32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Capacity of the heart slot array (life + shield slots combined).
    pub const MAX_HEART_SLOTS: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_LIFE: u32 = 3;
    pub const DEFAULT_MAX_SHIELD: u32 = 6;
    pub const DEFAULT_COIN_VALUE: u32 = 5;
    pub const DEFAULT_DEATH_PENALTY: u32 = 20;
    pub const DEFAULT_WALK_SPEED: f32 = 5.0;

    pub fn new() -> Self {
        Self {
            max_life: Self::DEFAULT_MAX_LIFE,
            max_shield: Self::DEFAULT_MAX_SHIELD,
            coin_value: Self::DEFAULT_COIN_VALUE,
            death_penalty: Self::DEFAULT_DEATH_PENALTY,
            walk_speed: Self::DEFAULT_WALK_SPEED,
        }
    }

    /// Total number of heart slots this configuration lays out.
    pub fn total_hearts(&self) -> usize {
        (self.max_life + self.max_shield) as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
