//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that move items between the
//! current room and the player's inventory. Transfers move the item value
//! itself; nothing is copied.

use crate::health::Character;
use crate::style::GameStyle;
use crate::world::World;

use anyhow::Result;
use log::info;

/// Pick up a named item from the current room.
///
/// # Errors
/// - if the player's room id is not in the registry
pub fn take_handler(world: &mut World, thing: &str) -> Result<()> {
    if thing.is_empty() {
        println!("Take what?");
        return Ok(());
    }

    let room = world.player_room_mut()?;
    if let Some(item) = room.remove_item(thing) {
        println!("You picked up: {}", item.name.item_style());
        info!("{} took '{}' from '{}'", world.player.name(), item.name, world.player.location);
        world.player.inventory.push(item);
    } else {
        println!("No {} here.", thing.error_style());
    }
    Ok(())
}

/// Drop a named inventory item into the current room.
///
/// # Errors
/// - if the player's room id is not in the registry
pub fn drop_handler(world: &mut World, thing: &str) -> Result<()> {
    if thing.is_empty() {
        println!("Drop what?");
        return Ok(());
    }

    if let Some(item) = world.player.remove_item(thing) {
        println!("You dropped the {}.", item.name.item_style());
        info!("{} dropped '{}' in '{}'", world.player.name(), item.name, world.player.location);
        world.player_room_mut()?.add_item(item);
    } else {
        println!("You don't have a {}.", thing.error_style());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::build_world;

    #[test]
    fn take_moves_item_from_room_to_inventory() {
        let mut world = build_world();
        take_handler(&mut world, "coin").unwrap();
        assert!(world.player.has_item("coin"));
        assert!(world.rooms["courtyard"].find_item("coin").is_none());
    }

    #[test]
    fn take_missing_item_changes_nothing() {
        let mut world = build_world();
        take_handler(&mut world, "crown").unwrap();
        assert_eq!(world.player.inventory.len(), 1); // starter potion only
        assert_eq!(world.rooms["courtyard"].items.len(), 1);
    }

    #[test]
    fn take_then_drop_round_trips_the_room_item_set() {
        let mut world = build_world();
        let before: Vec<String> = world.rooms["courtyard"].items.iter().map(|i| i.name.clone()).collect();
        take_handler(&mut world, "coin").unwrap();
        drop_handler(&mut world, "coin").unwrap();
        let after: Vec<String> = world.rooms["courtyard"].items.iter().map(|i| i.name.clone()).collect();
        assert_eq!(before, after);
        assert!(!world.player.has_item("coin"));
    }

    #[test]
    fn drop_without_the_item_is_rejected() {
        let mut world = build_world();
        drop_handler(&mut world, "sword").unwrap();
        assert!(world.rooms["courtyard"].find_item("sword").is_none());
    }
}
