//! Room definitions and the directed room graph.
//!
//! Each room is a node keyed by a stable string id (used for persistence).
//! Exits are one-way, free-form direction labels; bidirectional passages
//! must be declared from both sides. Direction labels are normalized to
//! lowercase on insert and lookup -- the one normalization policy applied
//! everywhere.

use crate::hostile::Hostile;
use crate::item::Item;
use crate::npc::Npc;
use crate::style::GameStyle;

use crate::health::Character;
use textwrap::{fill, termwidth};

/// A one-way edge in the room graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub direction: String,
    pub to: String,
}

/// A node in the room graph: description, contents, optional resident NPC,
/// optional hostile.
///
/// Exits and items are kept in insertion order so the room renders
/// deterministically.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub description: String,
    pub exits: Vec<Exit>,
    pub items: Vec<Item>,
    pub resident: Option<Npc>,
    pub hostile: Option<Hostile>,
}
impl Room {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Room {
        Room {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            exits: Vec::new(),
            items: Vec::new(),
            resident: None,
            hostile: None,
        }
    }

    /// Register a one-way exit. The direction label is lowercased; declaring
    /// the same direction twice replaces the earlier edge.
    pub fn add_exit(&mut self, direction: &str, to: impl Into<String>) {
        let direction = direction.trim().to_lowercase();
        let to = to.into();
        if let Some(existing) = self.exits.iter_mut().find(|exit| exit.direction == direction) {
            existing.to = to;
        } else {
            self.exits.push(Exit { direction, to });
        }
    }

    /// Id of the room connected in `direction`, or None if no such exit.
    pub fn exit_to(&self, direction: &str) -> Option<&str> {
        let direction = direction.trim().to_lowercase();
        self.exits
            .iter()
            .find(|exit| exit.direction == direction)
            .map(|exit| exit.to.as_str())
    }

    /// Add an item to the room's contents.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Look up a room item by name (case-insensitive).
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.matches(name))
    }

    /// Remove one item by name (first match wins when names collide).
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let idx = self.items.iter().position(|item| item.matches(name))?;
        Some(self.items.remove(idx))
    }

    /// Render the room: title, description, items, residents, exits.
    pub fn show(&self) {
        println!("\n== {} ==", self.name.room_titlebar_style());
        println!("{}", fill(&self.description, termwidth().min(84)).description_style());
        if !self.items.is_empty() {
            println!("You see:");
            for item in &self.items {
                println!(" - {}: {}", item.name.item_style(), item.description);
            }
        }
        if let Some(resident) = &self.resident {
            println!("Here: {}", resident.name.npc_style());
        }
        if let Some(hostile) = &self.hostile
            && hostile.is_alive()
        {
            println!("Danger: {} (hostile)", hostile.name.hostile_style());
        }
        if !self.exits.is_empty() {
            println!("Exits:");
            for exit in &self.exits {
                println!(" - {}", exit.direction.exit_style());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_exit_normalizes_direction_to_lowercase() {
        let mut room = Room::new("hall", "Great Hall", "A grand hall.");
        room.add_exit("North", "tower");
        assert_eq!(room.exit_to("north"), Some("tower"));
        assert_eq!(room.exit_to("NORTH"), Some("tower"));
        assert_eq!(room.exits[0].direction, "north");
    }

    #[test]
    fn redeclaring_a_direction_replaces_the_edge() {
        let mut room = Room::new("hall", "Great Hall", "A grand hall.");
        room.add_exit("up", "tower");
        room.add_exit("UP", "attic");
        assert_eq!(room.exits.len(), 1);
        assert_eq!(room.exit_to("up"), Some("attic"));
    }

    #[test]
    fn exits_keep_insertion_order() {
        let mut room = Room::new("hall", "Great Hall", "A grand hall.");
        room.add_exit("south", "courtyard");
        room.add_exit("east", "armory");
        room.add_exit("up", "tower");
        let labels: Vec<_> = room.exits.iter().map(|exit| exit.direction.as_str()).collect();
        assert_eq!(labels, ["south", "east", "up"]);
    }

    #[test]
    fn undeclared_direction_has_no_exit() {
        let room = Room::new("tower", "Wizard's Tower", "Sigils glow.");
        assert_eq!(room.exit_to("west"), None);
    }

    #[test]
    fn remove_item_returns_first_name_match() {
        let mut room = Room::new("armory", "Old Armory", "Rusty racks.");
        room.add_item(Item::new("sword", "A short sword."));
        room.add_item(Item::new("sword", "A spare sword."));
        let taken = room.remove_item("SWORD").unwrap();
        assert_eq!(taken.description, "A short sword.");
        assert_eq!(room.items.len(), 1);
    }
}
