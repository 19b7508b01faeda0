//! `repl::system` module
//!
//! Contains repl loop handlers for system utilities: help, quit, and the
//! save/load cycle.

use crate::health::Character;
use crate::repl::ReplControl;
use crate::save::{self, SAVE_FILE, SaveError};
use crate::style::GameStyle;
use crate::world::World;

use colored::Colorize;
use log::{info, warn};
use std::path::Path;

/// Show available commands.
pub fn help_handler() {
    println!("\nCommands:");
    println!(" - help : Show this help.");
    println!(" - look : Examine the current room.");
    println!(" - go <direction> : Move to another room (e.g., go north).");
    println!(" - take <item> : Pick up an item (e.g., take sword).");
    println!(" - drop <item> : Drop an item from your inventory.");
    println!(" - inventory : Show your inventory.");
    println!(" - use <item> : Use an item from your inventory (e.g., use small potion).");
    println!(" - talk <name> : Talk to an NPC in the room.");
    println!(" - attack <target> : Attack a hostile in the room.");
    println!(" - save : Save your current game.");
    println!(" - load : Load the saved game (if available).");
    println!(" - quit/exit : Quit the game.");
}

/// Quit the game.
pub fn quit_handler(world: &World) -> ReplControl {
    info!(
        "{} quit in '{}' with {} item(s)",
        world.player.name(),
        world.player.location,
        world.player.inventory.len()
    );
    println!("Thanks for playing StoryQuest.");
    ReplControl::Quit
}

/// Save the game to the single well-known slot. Failure is reported and
/// the session continues.
pub fn save_handler(world: &World) {
    match save::save_game(world, Path::new(SAVE_FILE)) {
        Ok(()) => println!("Game saved to {}.", SAVE_FILE.bold()),
        Err(err) => {
            warn!("save failed: {err}");
            println!("Failed to save game: {}", err.to_string().error_style());
        },
    }
}

/// Load the saved game. Any failure leaves the session state untouched.
pub fn load_handler(world: &mut World) {
    match save::load_game(world, Path::new(SAVE_FILE)) {
        Ok(()) => println!("Game loaded."),
        Err(SaveError::NotFound) => println!("No saved game found."),
        Err(SaveError::Corrupted(err)) => {
            warn!("save file corrupted: {err}");
            println!("Save file corrupted.");
        },
        Err(err) => {
            warn!("load failed: {err}");
            println!("Failed to load game: {}", err.to_string().error_style());
        },
    }
}
