//! Data-driven content definitions and loaders.
//!
//! This crate houses the static session content and provides loaders for
//! RON/TOML data files:
//! - Game configuration (data-driven via TOML)
//! - Level layout: spawn/respawn points and the guide's dialogue (via RON)
//!
//! Content is consumed by runtime oracles and never appears in session state.
//!
//! All loaders use game-core types directly with serde for deserialization.

pub mod level;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use level::{GuideSpec, LevelSpec};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LevelLoader};
