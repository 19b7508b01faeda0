//! Health Module
//!
//! Tracks hit points for anything in the game that can be hurt or healed.
use std::cmp;

/// Hit point state for a living entity.
///
/// Current HP is kept within `[0, max_hp]` at all times; `damage` saturates
/// at zero and `heal` clamps at the maximum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthState {
    max_hp: u32,
    current_hp: u32,
}
impl HealthState {
    /// Create a clean `HealthState` at full health.
    pub fn new_at_max(max_hp: u32) -> HealthState {
        HealthState {
            max_hp,
            current_hp: max_hp,
        }
    }

    /// Get the maximum HP for this entity
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Get the current HP for this entity
    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Return whether this entity is alive or dead.
    pub fn life_state(&self) -> LifeState {
        if self.current_hp > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// Do damage to health. Saturates at zero.
    pub fn damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Heal the character. Saturates at max health.
    pub fn heal(&mut self, amount: u32) {
        self.current_hp = cmp::min(self.max_hp, self.current_hp.saturating_add(amount));
    }

    /// Set current HP directly (used when restoring a saved game), clamped to max.
    pub fn set_current(&mut self, hp: u32) {
        self.current_hp = cmp::min(self.max_hp, hp);
    }
}

/// Possible life states for living entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    Dead,
}

/// Capabilities common to game entities that are alive (the player, hostiles).
pub trait Character {
    fn name(&self) -> &str;
    fn health(&self) -> &HealthState;
    fn health_mut(&mut self) -> &mut HealthState;

    fn is_alive(&self) -> bool {
        matches!(self.health().life_state(), LifeState::Alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_saturates_at_zero() {
        let mut state = HealthState::new_at_max(10);
        state.damage(4);
        assert_eq!(state.current_hp(), 6);

        state.damage(100);
        assert_eq!(state.current_hp(), 0);
        assert_eq!(state.life_state(), LifeState::Dead);
    }

    #[test]
    fn heal_saturates_at_max_hp() {
        let mut state = HealthState::new_at_max(10);
        state.damage(5);
        state.heal(3);
        assert_eq!(state.current_hp(), 8);

        state.heal(10);
        assert_eq!(state.current_hp(), 10);
    }

    #[test]
    fn set_current_clamps_to_max() {
        let mut state = HealthState::new_at_max(50);
        state.set_current(9000);
        assert_eq!(state.current_hp(), 50);

        state.set_current(12);
        assert_eq!(state.current_hp(), 12);
    }

    #[test]
    fn alive_iff_hp_above_zero() {
        let mut state = HealthState::new_at_max(1);
        assert_eq!(state.life_state(), LifeState::Alive);
        state.damage(1);
        assert_eq!(state.life_state(), LifeState::Dead);
        state.heal(1);
        assert_eq!(state.life_state(), LifeState::Alive);
    }
}
