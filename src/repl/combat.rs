//! `repl::combat` module
//!
//! Deterministic combat resolution: fixed attack powers, no rolls. The
//! player hits harder with a sword in inventory; a surviving hostile
//! retaliates immediately. A hostile reduced to zero HP stops being
//! engageable and deposits a trophy in the room.

use crate::health::Character;
use crate::item::Item;
use crate::style::GameStyle;
use crate::world::World;

use anyhow::{Result, anyhow};
use log::info;

/// Attack power with the named weapon in inventory.
pub const ARMED_ATTACK_POWER: u32 = 10;
/// Attack power with bare hands.
pub const UNARMED_ATTACK_POWER: u32 = 3;
/// Inventory item name that grants the armed attack power.
pub const WEAPON_NAME: &str = "sword";

/// Attack a named hostile in the current room.
///
/// # Errors
/// - if the player's room id is not in the registry
pub fn attack_handler(world: &mut World, target: &str) -> Result<()> {
    if target.is_empty() {
        println!("Attack what?");
        return Ok(());
    }

    let World { rooms, player } = world;
    let room = rooms
        .get_mut(&player.location)
        .ok_or_else(|| anyhow!("player's room id ({}) not found in world", player.location))?;

    let Some(hostile) = room
        .hostile
        .as_mut()
        .filter(|h| h.is_alive() && h.matches(target))
    else {
        println!("No hostile {} to attack here.", target.error_style());
        return Ok(());
    };

    let power = if player.has_item(WEAPON_NAME) {
        ARMED_ATTACK_POWER
    } else {
        UNARMED_ATTACK_POWER
    };
    println!("You attack {} for {} damage!", hostile.name.hostile_style(), power);
    hostile.health.damage(power);

    if hostile.is_alive() {
        hostile.attack(player);
        if !player.is_alive() {
            println!("You were slain by the enemy's attack.");
            info!("{} was slain by '{}'", player.name, hostile.name);
        }
    } else {
        println!("You defeated {}!", hostile.name.hostile_style());
        info!("{} defeated '{}' in '{}'", player.name, hostile.name, room.id);
        let trophy = Item::new("trophy", format!("A remnant of {}.", hostile.name));
        room.items.push(trophy);
    }
    Ok(())
}
