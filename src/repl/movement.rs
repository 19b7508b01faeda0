//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location.

use crate::health::Character;
use crate::style::GameStyle;
use crate::world::World;

use anyhow::{Result, anyhow};
use log::info;

/// Move the player through a declared exit, if one matches the direction.
///
/// Entering a room with a living hostile triggers one unavoidable ambush
/// attack -- there is no avoidance mechanic.
///
/// # Errors
/// - if a declared exit leads to a room id missing from the registry
pub fn go_handler(world: &mut World, direction: &str) -> Result<()> {
    if direction.is_empty() {
        println!("Go where? Specify a direction.");
        return Ok(());
    }

    let current_room = world.player_room_ref()?;
    let Some(destination_id) = current_room.exit_to(direction).map(str::to_string) else {
        println!("You can't go that way.");
        return Ok(());
    };

    let destination = world
        .rooms
        .get(&destination_id)
        .ok_or_else(|| anyhow!("exit '{direction}' from '{}' leads to unknown room '{destination_id}'", world.player.location))?;
    let destination_name = destination.name.clone();

    world.player.location = destination_id;
    println!(
        "You move {} to {}.",
        direction.trim().to_lowercase(),
        destination_name.room_style()
    );
    info!("{} moved to '{}'", world.player.name(), world.player.location);

    ambush_check(world);
    Ok(())
}

/// One free hostile attack when the player enters an occupied room.
pub fn ambush_check(world: &mut World) {
    let World { rooms, player } = world;
    let Some(room) = rooms.get(&player.location) else {
        return;
    };
    if let Some(hostile) = room.hostile.as_ref().filter(|h| h.is_alive()) {
        println!("A hostile {} notices you!", hostile.name.hostile_style());
        hostile.attack(player);
        info!(
            "{} ambushed by '{}' on entering '{}'",
            player.name, hostile.name, room.id
        );
    }
}
