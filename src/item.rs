//! Item definitions.
//!
//! Items are named, described values that live in a room or the player's
//! inventory. An item's behavior when used is carried by [`ItemEffect`],
//! dispatched by value rather than by type.

/// What happens when an item is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    /// No effect; using the item reports failure narratively.
    None,
    /// Restore the given number of hit points (clamped to max) and consume
    /// one unit of the item.
    Heal(u32),
}

/// A named, described object the player can see, carry, and possibly use.
///
/// The name is the item's identity key; all lookups on it are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub usable: bool,
    pub effect: ItemEffect,
}
impl Item {
    /// Create an inert, non-usable item.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Item {
        Item {
            name: name.into(),
            description: description.into(),
            usable: false,
            effect: ItemEffect::None,
        }
    }

    /// Create a consumable healing potion restoring `heal_amount` HP.
    pub fn healing_potion(name: impl Into<String>, description: impl Into<String>, heal_amount: u32) -> Item {
        Item {
            name: name.into(),
            description: description.into(),
            usable: true,
            effect: ItemEffect::Heal(heal_amount),
        }
    }

    /// Case-insensitive match against the item's identity key.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}
