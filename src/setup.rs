//! World content.
//!
//! The castle scenario is hard-coded here; rooms and items are constructed
//! once at startup and never destroyed during a session.

use crate::hostile::Hostile;
use crate::item::Item;
use crate::npc::Npc;
use crate::player::Player;
use crate::room::Room;
use crate::world::World;

use log::info;

/// Build the castle world: four rooms, their contents, and the player
/// standing in the courtyard with a starter potion.
pub fn build_world() -> World {
    let mut courtyard = Room::new(
        "courtyard",
        "Castle Courtyard",
        "A cold stone courtyard with creeping fog. Torches flicker in the wind.",
    );
    let mut hall = Room::new(
        "hall",
        "Great Hall",
        "A grand hall with long tables. A dusty banner hangs on the wall.",
    );
    let mut armory = Room::new(
        "armory",
        "Old Armory",
        "Racks of rusted weapons and a locked chest in the corner.",
    );
    let mut tower = Room::new(
        "tower",
        "Wizard's Tower",
        "A spiral staircase winds upward. Magical sigils glow on the walls.",
    );

    courtyard.add_exit("north", "hall");
    hall.add_exit("south", "courtyard");
    hall.add_exit("east", "armory");
    hall.add_exit("up", "tower");
    armory.add_exit("west", "hall");
    tower.add_exit("down", "hall");

    courtyard.add_item(Item::new("coin", "A tarnished gold coin."));
    armory.add_item(Item::new("sword", "A short sword. It looks usable."));
    armory.add_item(Item::healing_potion(
        "small potion",
        "A small red bottle. Restores 20 HP.",
        20,
    ));
    hall.add_item(Item::new("map", "A map of the castle. Helpful to not get lost."));
    tower.add_item(Item::new("spellbook", "A leather-bound book filled with arcane notes."));

    hall.resident = Some(Npc::new("Old Butler", "Welcome traveler. Beware the tower at night."));

    courtyard.hostile = Some(Hostile::new("Goblin Scout", 15, 4));
    armory.hostile = Some(Hostile::new("Armory Warden", 30, 7));

    let mut player = Player::new("Adventurer", 50, "courtyard");
    player
        .inventory
        .push(Item::healing_potion("starter potion", "A tiny potion to help you begin.", 10));

    let mut world = World::new(player);
    world.add_room(courtyard);
    world.add_room(hall);
    world.add_room(armory);
    world.add_room(tower);
    info!("castle world built: {} rooms", world.rooms.len());
    world
}
