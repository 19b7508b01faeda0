//! NPC Module

use crate::style::GameStyle;

/// A non-hostile resident of a room with a single line of dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    pub name: String,
    pub dialogue: String,
}
impl Npc {
    pub fn new(name: impl Into<String>, dialogue: impl Into<String>) -> Npc {
        Npc {
            name: name.into(),
            dialogue: dialogue.into(),
        }
    }

    /// Case-insensitive match against the NPC's name.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Print the NPC's dialogue line.
    pub fn talk(&self) {
        println!("{} says: \"{}\"", self.name.npc_style(), self.dialogue);
    }
}
