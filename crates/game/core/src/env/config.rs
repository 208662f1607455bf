/// Oracle exposing the tunable session parameters.
pub trait ConfigOracle: Send + Sync {
    /// Number of life hearts at full health.
    fn max_life(&self) -> u32;

    /// Number of shield hearts the player can accumulate.
    fn max_shield(&self) -> u32;

    /// Score awarded per coin.
    fn coin_value(&self) -> u32;

    /// Score delta applied on death (additive).
    fn death_penalty(&self) -> u32;

    /// Movement speed restored when a dialogue releases the player.
    fn walk_speed(&self) -> f32;
}
