use crate::state::Vec2;

/// Oracle exposing the fixed level geometry the session logic needs.
///
/// Replaces scene lookups by tag: the respawn-marked point is resolved by the
/// host once and injected here.
pub trait LayoutOracle: Send + Sync {
    /// Position the player starts at.
    fn player_spawn(&self) -> Vec2;

    /// Position the player is moved to after death.
    fn respawn_point(&self) -> Vec2;
}
