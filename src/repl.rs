//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop with exactly two states: Running
//! and Stopped. Stopped is reached when the player quits or dies, and is
//! terminal for the process. This module and its submodules implement the
//! command handlers that manipulate the [`World`].

mod input;
pub mod combat;
pub mod inventory;
pub mod item;
pub mod movement;
pub mod npc;
pub mod system;

pub use combat::*;
pub use inventory::*;
pub use item::*;
pub use movement::*;
pub use npc::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::health::Character;
use crate::style::GameStyle;
use crate::world::World;

use anyhow::Result;
use colored::Colorize;
use log::info;

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// True once the session has reached its terminal state (player dead).
pub fn game_over(world: &World) -> bool {
    !world.player.is_alive()
}

/// Run the main read-eval-print loop until the player quits or dies.
///
/// Each turn prints the current room and status line, checks for the
/// terminal defeat state, then reads and dispatches one command.
///
/// # Errors
/// - Propagates handler failures, such as a dangling room id for the player.
pub fn run_repl(world: &mut World) -> Result<()> {
    let mut input_manager = InputManager::new();
    loop {
        describe_current_room(world)?;
        if game_over(world) {
            println!("\n{}", "You have perished. Game over.".error_style());
            info!("{} died; session over", world.player.name());
            break;
        }

        let prompt = "\n> ".prompt_style().to_string();
        let input_event = match input_manager.read_line(&prompt) {
            Ok(event) => event,
            Err(err) => {
                println!("{}", "Failed to read input. Try again.".error_style());
                info!("input error: {err}");
                continue;
            },
        };

        let line = match input_event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                println!("{}", "Command canceled.".italic());
                continue;
            },
        };

        match parse_command(&line) {
            Command::Empty => {},
            Command::Help => help_handler(),
            Command::Look => world.player_room_ref()?.show(),
            Command::Go(direction) => go_handler(world, &direction)?,
            Command::Take(thing) => take_handler(world, &thing)?,
            Command::Drop(thing) => drop_handler(world, &thing)?,
            Command::Inventory => world.player.show_inventory(),
            Command::Use(thing) => use_handler(world, &thing),
            Command::Talk(name) => talk_handler(world, &name)?,
            Command::Attack(target) => attack_handler(world, &target)?,
            Command::Save => save_handler(world),
            Command::Load => load_handler(world),
            Command::Quit => {
                if let ReplControl::Quit = quit_handler(world) {
                    break;
                }
            },
            Command::Unknown => {
                println!("Unknown command. Type '{}' for commands.", "help".bold());
            },
        }
    }
    Ok(())
}

/// Print the current room followed by the player status line.
///
/// # Errors
/// - if the player's room id is not in the registry
pub fn describe_current_room(world: &World) -> Result<()> {
    world.player_room_ref()?.show();
    let hp = format!("{}/{}", world.player.health.current_hp(), world.player.health.max_hp());
    println!("Player: {} HP: {}", world.player.name().bold(), hp.health_style());
    Ok(())
}
