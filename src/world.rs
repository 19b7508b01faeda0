//! Data structures representing the game world.
//!
//! [`World`] owns the room registry and the player. It is created once at
//! startup and passed by reference to the command handlers; there is no
//! process-wide state.

use crate::item::Item;
use crate::player::Player;
use crate::room::Room;

use anyhow::{Result, anyhow};
use std::collections::HashMap;

/// Complete state of the running game: every room plus the player character.
#[derive(Debug, Clone)]
pub struct World {
    pub rooms: HashMap<String, Room>,
    pub player: Player,
}
impl World {
    /// Create a world containing only the given player.
    pub fn new(player: Player) -> World {
        World {
            rooms: HashMap::new(),
            player,
        }
    }

    /// Register a room under its own id.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.id.clone(), room);
    }

    /// Obtain a reference to the room the player occupies.
    ///
    /// # Errors
    /// - if the player's room id is not found in the registry
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.rooms
            .get(&self.player.location)
            .ok_or_else(|| anyhow!("player's room id ({}) not found in world", self.player.location))
    }

    /// Obtain a mutable reference to the room the player occupies.
    ///
    /// # Errors
    /// - if the player's room id is not found in the registry
    pub fn player_room_mut(&mut self) -> Result<&mut Room> {
        self.rooms
            .get_mut(&self.player.location)
            .ok_or_else(|| anyhow!("player's room id ({}) not found in world", self.player.location))
    }

    /// Search every room's contents for an item by name (case-insensitive).
    /// Used when reloading a save to resolve item names back to instances.
    pub fn find_room_item(&self, name: &str) -> Option<&Item> {
        self.rooms.values().find_map(|room| room.find_item(name))
    }
}
