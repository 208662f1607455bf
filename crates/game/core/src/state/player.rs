//! Player-owned state: meters, score, motion.

use crate::config::GameConfig;

use super::{HeartBar, InitializationError, ResourceMeter, Vec2};

/// Mutable player state tracked by the session.
///
/// The shield/health split mirrors a two-tier heart system: life hearts leave
/// an empty container behind when lost and refill on respawn; shield hearts
/// vanish from the display when consumed and never refill on respawn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub life: ResourceMeter,
    pub shield: ResourceMeter,
    pub score: u32,
    pub hearts: HeartBar,
    pub position: Vec2,
    pub velocity: Vec2,
    pub move_speed: f32,
}

impl PlayerState {
    /// Spawns a full-life, zero-shield player at `spawn`.
    pub fn new(config: &GameConfig, spawn: Vec2) -> Result<Self, InitializationError> {
        Ok(Self {
            life: ResourceMeter::full(config.max_life),
            shield: ResourceMeter::empty(config.max_shield),
            score: 0,
            hearts: HeartBar::new(config.max_life, config.max_shield)?,
            position: spawn,
            velocity: Vec2::ORIGIN,
            move_speed: config.walk_speed,
        })
    }

    /// Gains one life heart, if any container is empty.
    ///
    /// Returns whether the meter changed.
    pub fn gain_life(&mut self) -> bool {
        if self.life.is_full() {
            return false;
        }

        self.hearts.restore_life(self.life.current);
        self.life.current += 1;
        true
    }

    /// Gains one shield heart, if below the shield cap.
    ///
    /// Returns whether the meter changed.
    pub fn gain_shield(&mut self) -> bool {
        if self.shield.is_full() {
            return false;
        }

        self.hearts.reveal_shield(self.shield.current);
        self.shield.current += 1;
        true
    }

    /// Consumes the topmost shield heart, if one is held.
    ///
    /// Returns whether a shield absorbed the hit.
    pub fn absorb_with_shield(&mut self) -> bool {
        if self.shield.is_empty() {
            return false;
        }

        self.hearts.conceal_shield(self.shield.current - 1);
        self.shield.current -= 1;
        true
    }

    /// Loses one life heart, leaving an empty container behind.
    ///
    /// Callers keep `life.current > 0`.
    pub fn lose_life(&mut self) {
        debug_assert!(!self.life.is_empty(), "damage applied to an empty meter");
        self.hearts.deplete_life(self.life.current - 1);
        self.life.current -= 1;
    }

    /// Refills every life heart (respawn path). Shield is untouched.
    pub fn refill_life(&mut self) {
        while !self.life.is_full() {
            self.hearts.restore_life(self.life.current);
            self.life.current += 1;
        }
    }

    pub fn add_points(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
    }

    /// Score rendered the way the HUD shows it: 4-digit zero-padded decimal.
    pub fn score_text(&self) -> String {
        format!("{:04}", self.score)
    }
}
