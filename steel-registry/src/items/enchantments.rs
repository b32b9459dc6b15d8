//! Enchantments attached to item stacks.

use smallvec::SmallVec;
use steel_utils::Identifier;

/// Unbreaking: each durability point has a `1 / (level + 1)` chance to be taken.
pub const UNBREAKING: Identifier = Identifier::vanilla_static("unbreaking");

/// Mending.
pub const MENDING: Identifier = Identifier::vanilla_static("mending");

/// The enchantments on one stack, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEnchantments {
    entries: SmallVec<[(Identifier, u8); 2]>,
}

impl ItemEnchantments {
    /// The level of `enchantment`, 0 if absent.
    #[must_use]
    pub fn level(&self, enchantment: &Identifier) -> u8 {
        self.entries
            .iter()
            .find(|(id, _)| id == enchantment)
            .map_or(0, |(_, level)| *level)
    }

    /// Sets the level of `enchantment`; level 0 removes it.
    pub fn set(&mut self, enchantment: Identifier, level: u8) {
        if level == 0 {
            self.entries.retain(|(id, _)| *id != enchantment);
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|(id, _)| *id == enchantment) {
            entry.1 = level;
        } else {
            self.entries.push((enchantment, level));
        }
    }
}
