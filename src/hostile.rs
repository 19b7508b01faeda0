//! Hostile entities.
//!
//! A `Hostile` occupies a room and can be fought. Combat is deterministic:
//! no rolls, just fixed attack powers and saturating subtraction. A hostile
//! reduced to zero HP stays in its room, inert, for the rest of the session.

use crate::health::{Character, HealthState};
use crate::style::GameStyle;

/// An enemy character occupying a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostile {
    pub name: String,
    pub health: HealthState,
    pub attack_power: u32,
}
impl Hostile {
    pub fn new(name: impl Into<String>, max_hp: u32, attack_power: u32) -> Hostile {
        Hostile {
            name: name.into(),
            health: HealthState::new_at_max(max_hp),
            attack_power,
        }
    }

    /// Case-insensitive match against the hostile's name.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Strike another character for this hostile's fixed attack power.
    pub fn attack<C: Character>(&self, target: &mut C) {
        println!(
            "{} attacks {} for {} damage!",
            self.name.hostile_style(),
            target.name(),
            self.attack_power
        );
        target.health_mut().damage(self.attack_power);
    }
}
impl Character for Hostile {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> &HealthState {
        &self.health
    }

    fn health_mut(&mut self) -> &mut HealthState {
        &mut self.health
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;

    #[test]
    fn attack_applies_fixed_power() {
        let goblin = Hostile::new("Goblin Scout", 15, 4);
        let mut player = Player::new("Adventurer", 50, "courtyard");
        goblin.attack(&mut player);
        assert_eq!(player.health.current_hp(), 46);
    }

    #[test]
    fn hostile_dies_at_zero_hp() {
        let mut goblin = Hostile::new("Goblin Scout", 15, 4);
        goblin.health_mut().damage(15);
        assert!(!goblin.is_alive());
    }
}
