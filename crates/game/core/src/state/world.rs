/// World-level switches outside any single entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    /// Set when the finish trigger fires; the host stops the global clock.
    pub clock_paused: bool,
}
