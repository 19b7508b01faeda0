//! `repl::item` module
//!
//! Contains the handler for using inventory items. Usability is a gate
//! checked before any effect runs; the effect itself is dispatched by
//! value from [`ItemEffect`].

use crate::health::Character;
use crate::item::ItemEffect;
use crate::style::GameStyle;
use crate::world::World;

use log::info;

/// Use a named inventory item.
pub fn use_handler(world: &mut World, thing: &str) {
    if thing.is_empty() {
        println!("Use what?");
        return;
    }

    let Some(item) = world.player.find_item(thing) else {
        println!("You don't have that item.");
        return;
    };
    if !item.usable {
        println!("The {} can't be used.", item.name.item_style());
        return;
    }

    let name = item.name.clone();
    match item.effect {
        ItemEffect::None => {
            println!("You try to use {}, but nothing happens.", name.item_style());
        },
        ItemEffect::Heal(amount) => {
            world.player.health.heal(amount);
            // consume exactly one unit; removal is by name, so with stacked
            // duplicates an arbitrary one goes
            let _ = world.player.remove_item(&name);
            println!(
                "You used {} and recovered {} health. (Now: {}/{})",
                name.item_style(),
                amount,
                world.player.health.current_hp(),
                world.player.health.max_hp()
            );
            info!(
                "{} used '{}': hp now {}/{}",
                world.player.name(),
                name,
                world.player.health.current_hp(),
                world.player.health.max_hp()
            );
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::setup::build_world;

    #[test]
    fn healing_potion_heals_exactly_and_consumes_one() {
        let mut world = build_world();
        world.player.health.damage(30);
        use_handler(&mut world, "starter potion");
        assert_eq!(world.player.health.current_hp(), 30); // 20 + 10
        assert!(!world.player.has_item("starter potion"));
    }

    #[test]
    fn healing_is_clamped_to_max() {
        let mut world = build_world();
        world.player.health.damage(3);
        use_handler(&mut world, "starter potion");
        assert_eq!(world.player.health.current_hp(), 50);
    }

    #[test]
    fn non_usable_item_never_changes_health_or_inventory() {
        let mut world = build_world();
        world.player.inventory.push(Item::new("coin", "A tarnished gold coin."));
        world.player.health.damage(10);
        use_handler(&mut world, "coin");
        assert_eq!(world.player.health.current_hp(), 40);
        assert!(world.player.has_item("coin"));
        assert_eq!(world.player.inventory.len(), 2);
    }

    #[test]
    fn using_an_item_you_lack_is_a_no_op() {
        let mut world = build_world();
        let hp_before = world.player.health.current_hp();
        use_handler(&mut world, "elixir");
        assert_eq!(world.player.health.current_hp(), hp_before);
    }

    #[test]
    fn stacked_potions_lose_exactly_one_per_use() {
        let mut world = build_world();
        world
            .player
            .inventory
            .push(Item::healing_potion("starter potion", "Another tiny potion.", 10));
        world.player.health.damage(40);
        use_handler(&mut world, "starter potion");
        assert_eq!(world.player.health.current_hp(), 20);
        assert_eq!(
            world.player.inventory.iter().filter(|i| i.matches("starter potion")).count(),
            1
        );
    }
}
