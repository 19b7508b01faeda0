#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** StoryQuest **
//! A small castle-crawl text adventure.

use storyquest::style::GameStyle;
use storyquest::{build_world, run_repl};

use anyhow::Result;
use colored::Colorize;
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: building the StoryQuest world...");
    let mut world = build_world();

    // `--load` is only a hint; restoring happens through the 'load' command
    if std::env::args().skip(1).any(|arg| arg == "--load") {
        println!("A previous game can be restored by typing 'load' at the prompt.");
    }

    println!("{}", "Welcome to StoryQuest: A Text Adventure!".room_titlebar_style());
    println!("Type '{}' for a list of commands.\n", "help".bold());

    run_repl(&mut world)
}
