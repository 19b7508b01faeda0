//! Player -- the character driven by the command loop.

use crate::health::{Character, HealthState};
use crate::item::Item;
use crate::style::GameStyle;

use colored::Colorize;

/// The player character: health, inventory, and a (non-owning) reference by
/// id to the current room in the world registry.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub health: HealthState,
    pub inventory: Vec<Item>,
    /// Id of the room the player currently occupies.
    pub location: String,
}
impl Player {
    pub fn new(name: impl Into<String>, max_hp: u32, starting_room: impl Into<String>) -> Player {
        Player {
            name: name.into(),
            health: HealthState::new_at_max(max_hp),
            inventory: Vec::new(),
            location: starting_room.into(),
        }
    }

    /// Look up an inventory item by name (case-insensitive).
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|item| item.matches(name))
    }

    /// Returns true if any inventory item matches `name` (case-insensitive).
    pub fn has_item(&self, name: &str) -> bool {
        self.find_item(name).is_some()
    }

    /// Remove one inventory item by name (first match wins when names collide).
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let idx = self.inventory.iter().position(|item| item.matches(name))?;
        Some(self.inventory.remove(idx))
    }

    /// Print the inventory listing.
    pub fn show_inventory(&self) {
        if self.inventory.is_empty() {
            println!("Inventory: {}", "(empty)".italic().dimmed());
        } else {
            println!("Inventory:");
            for item in &self.inventory {
                println!(" - {}: {}", item.name.item_style(), item.description);
            }
        }
    }
}
impl Character for Player {
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

    fn player_with_potions() -> Player {
        let mut player = Player::new("Tester", 50, "room-1");
        player.inventory.push(Item::healing_potion("small potion", "Red.", 20));
        player.inventory.push(Item::healing_potion("small potion", "Also red.", 20));
        player
    }

    #[test]
    fn find_item_is_case_insensitive() {
        let player = player_with_potions();
        assert!(player.find_item("Small Potion").is_some());
        assert!(player.find_item("elixir").is_none());
    }

    #[test]
    fn remove_item_takes_exactly_one_of_stacked_names() {
        let mut player = player_with_potions();
        let removed = player.remove_item("small potion");
        assert!(removed.is_some());
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn remove_item_missing_name_is_none() {
        let mut player = player_with_potions();
        assert!(player.remove_item("spellbook").is_none());
        assert_eq!(player.inventory.len(), 2);
    }
}
