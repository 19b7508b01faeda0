//! `repl::npc` module
//!
//! Contains the handler for talking to a room's resident NPC.

use crate::health::Character;
use crate::style::GameStyle;
use crate::world::World;

use anyhow::Result;
use log::info;

/// Talk to a named NPC in the current room.
///
/// # Errors
/// - if the player's room id is not in the registry
pub fn talk_handler(world: &World, name: &str) -> Result<()> {
    if name.is_empty() {
        println!("Talk to whom?");
        return Ok(());
    }

    let room = world.player_room_ref()?;
    if let Some(resident) = room.resident.as_ref().filter(|npc| npc.matches(name)) {
        resident.talk();
        info!("{} talked to '{}'", world.player.name(), resident.name);
    } else {
        println!("No one named {} here to talk to.", name.error_style());
    }
    Ok(())
}
