//! Heart slot display model.
//!
//! The bar is laid out once at initialization: life slots first, shield slots
//! after. Life slots stay visible and swap icons between `Life` and
//! `Container`; shield slots keep the `Shield` icon and toggle visibility.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

use super::InitializationError;

/// Icon displayed by a single heart slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeartIcon {
    /// Empty container where a life heart used to be.
    Container,
    /// A filled life heart.
    Life,
    /// A shield heart.
    Shield,
}

/// One discrete visual unit of the health display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeartSlot {
    pub visible: bool,
    pub icon: HeartIcon,
}

type HeartSlots = ArrayVec<HeartSlot, { GameConfig::MAX_HEART_SLOTS }>;

/// Ordered heart display backing the UI row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeartBar {
    slots: HeartSlots,
    max_life: u32,
    max_shield: u32,
}

impl HeartBar {
    /// Lays out the bar for a full-life, zero-shield player.
    pub fn new(max_life: u32, max_shield: u32) -> Result<Self, InitializationError> {
        let total = (max_life + max_shield) as usize;
        if total > GameConfig::MAX_HEART_SLOTS {
            return Err(InitializationError::TooManyHearts {
                requested: total,
                capacity: GameConfig::MAX_HEART_SLOTS,
            });
        }

        let mut slots = HeartSlots::new();
        for index in 0..total {
            let slot = if index < max_life as usize {
                HeartSlot {
                    visible: true,
                    icon: HeartIcon::Life,
                }
            } else {
                HeartSlot {
                    visible: false,
                    icon: HeartIcon::Shield,
                }
            };
            slots.push(slot);
        }

        Ok(Self {
            slots,
            max_life,
            max_shield,
        })
    }

    pub fn slots(&self) -> &[HeartSlot] {
        &self.slots
    }

    pub fn max_life(&self) -> u32 {
        self.max_life
    }

    pub fn max_shield(&self) -> u32 {
        self.max_shield
    }

    /// Restores the life icon of slot `life_index`.
    ///
    /// Callers keep `life_index < max_life`.
    pub fn restore_life(&mut self, life_index: u32) {
        self.slots[life_index as usize].icon = HeartIcon::Life;
    }

    /// Swaps the life icon of slot `life_index` for an empty container.
    ///
    /// Callers keep `life_index < max_life`.
    pub fn deplete_life(&mut self, life_index: u32) {
        self.slots[life_index as usize].icon = HeartIcon::Container;
    }

    /// Reveals shield slot `shield_index`.
    ///
    /// Callers keep `shield_index < max_shield`.
    pub fn reveal_shield(&mut self, shield_index: u32) {
        self.slots[(self.max_life + shield_index) as usize].visible = true;
    }

    /// Hides shield slot `shield_index`.
    ///
    /// Callers keep `shield_index < max_shield`.
    pub fn conceal_shield(&mut self, shield_index: u32) {
        self.slots[(self.max_life + shield_index) as usize].visible = false;
    }

    /// Checks the bar against the meter values it is supposed to display.
    ///
    /// Slots `[0, life)` show `Life`, `[life, max_life)` show `Container`,
    /// shield slots `[0, shield)` are visible, the remainder hidden.
    pub fn matches(&self, life: u32, shield: u32) -> bool {
        self.slots.iter().enumerate().all(|(index, slot)| {
            let index = index as u32;
            if index < self.max_life {
                let expected = if index < life {
                    HeartIcon::Life
                } else {
                    HeartIcon::Container
                };
                slot.visible && slot.icon == expected
            } else {
                let shield_index = index - self.max_life;
                slot.icon == HeartIcon::Shield && slot.visible == (shield_index < shield)
            }
        })
    }
}
