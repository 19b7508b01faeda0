//! Save / load for the single save slot.
//!
//! The snapshot is deliberately flat and lossy: only the player's name,
//! health, current room id, and inventory item *names* are persisted.
//! Reload resolves each name back to an item instance by searching the
//! world's rooms first, then falling back to a hard-coded guess by name
//! pattern. Item descriptions and custom effects are not round-tripped;
//! that fidelity gap is by design.

use crate::item::Item;
use crate::world::World;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// The single well-known save slot, relative to the working directory.
pub const SAVE_FILE: &str = "savegame.json";

/// Ways the save/load cycle can fail. All of them degrade to a printed
/// message at the REPL; none end the session.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no saved game found")]
    NotFound,
    #[error("could not read save file: {0}")]
    Unreadable(#[source] io::Error),
    #[error("save file corrupted: {0}")]
    Corrupted(#[source] serde_json::Error),
    #[error("save file references unknown room '{0}'")]
    UnknownRoom(String),
    #[error("could not write save file: {0}")]
    WriteFailed(#[source] io::Error),
}

/// Flat snapshot of the session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub player_name: String,
    pub player_health: u32,
    pub current_room_id: String,
    pub inventory: Vec<String>,
}
impl SaveData {
    /// Capture a snapshot of the live world.
    pub fn snapshot(world: &World) -> SaveData {
        SaveData {
            player_name: world.player.name.clone(),
            player_health: world.player.health.current_hp(),
            current_room_id: world.player.location.clone(),
            inventory: world.player.inventory.iter().map(|item| item.name.clone()).collect(),
        }
    }
}

/// Serialize the current snapshot to `path`, overwriting any prior save.
///
/// # Errors
/// - [`SaveError::WriteFailed`] if the file cannot be written
pub fn save_game(world: &World, path: &Path) -> Result<(), SaveError> {
    let data = SaveData::snapshot(world);
    let json = serde_json::to_string_pretty(&data).map_err(SaveError::Corrupted)?;
    fs::write(path, json).map_err(SaveError::WriteFailed)?;
    info!(
        "saved game to '{}': room '{}', {} item(s)",
        path.display(),
        data.current_room_id,
        data.inventory.len()
    );
    Ok(())
}

/// Read the save slot at `path` and overwrite the live player state.
///
/// On any error the world is left untouched.
///
/// # Errors
/// - [`SaveError::NotFound`] if no save file exists
/// - [`SaveError::Unreadable`] / [`SaveError::Corrupted`] for I/O or parse failures
/// - [`SaveError::UnknownRoom`] if the saved room id is not in the registry
pub fn load_game(world: &mut World, path: &Path) -> Result<(), SaveError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(SaveError::NotFound),
        Err(err) => return Err(SaveError::Unreadable(err)),
    };
    let data: SaveData = serde_json::from_str(&raw).map_err(SaveError::Corrupted)?;
    if !world.rooms.contains_key(&data.current_room_id) {
        return Err(SaveError::UnknownRoom(data.current_room_id));
    }

    let rebuilt: Vec<Item> = data.inventory.iter().map(|name| resolve_item_name(world, name)).collect();

    world.player.name = data.player_name;
    world.player.health.set_current(data.player_health);
    world.player.location = data.current_room_id;
    world.player.inventory = rebuilt;
    info!("loaded game from '{}'", path.display());
    Ok(())
}

/// Heal amount assumed for potions reconstructed by name pattern alone.
const GUESSED_POTION_HEAL: u32 = 20;

/// Resolve a saved item name back to an instance: search the world's rooms
/// for a matching item first, then guess from the name pattern.
fn resolve_item_name(world: &World, name: &str) -> Item {
    if let Some(found) = world.find_room_item(name) {
        return found.clone();
    }
    warn!("saved item '{name}' not found in any room; reconstructing by name pattern");
    let lower = name.to_lowercase();
    if lower.contains("potion") {
        Item::healing_potion(name, "Restores health.", GUESSED_POTION_HEAL)
    } else if lower == "sword" {
        Item::new("sword", "A short sword.")
    } else {
        Item::new(name, "Recovered item.")
    }
}
