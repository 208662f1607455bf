//! Contact-tag vocabulary shared with the physics layer.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Category tag carried by every trigger/collision contact.
///
/// The variant names are the exact strings the physics layer reports, so the
/// enum round-trips through `FromStr`/`Display` without a mapping table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContactTag {
    /// The player's own collider.
    Player,
    /// Insta-death zones (spikes, pits). Non-solid triggers.
    Death,
    /// Collectible coin pickups.
    Coin,
    /// The level-end trigger.
    Finish,
    /// Life heart pickups.
    Health,
    /// Shield heart pickups.
    Shield,
    /// Solid obstacles dealing one point of damage.
    Enemy,
    /// The designated respawn point marker.
    Respawn,
}
