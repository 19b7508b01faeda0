#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod health;
pub mod hostile;
pub mod item;
pub mod npc;
pub mod player;
pub mod repl;
pub mod room;
pub mod save;
pub mod setup;
pub mod style;
pub mod world;

// Re-exports for convenience
pub use health::{Character, HealthState, LifeState};
pub use hostile::Hostile;
pub use item::{Item, ItemEffect};
pub use npc::Npc;
pub use player::Player;
pub use repl::run_repl;
pub use room::Room;
pub use setup::build_world;
pub use world::World;
