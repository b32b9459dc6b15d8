//! Item behaviors.

pub mod context;
pub mod items;

pub use context::{InteractionResult, ItemUseResult, UseItemContext};

use steel_registry::item_stack::ItemStack;
use steel_utils::Identifier;

/// Behavior attached to an item.
pub trait ItemBehavior: Send + Sync {
    /// Called when the player uses the item, whether or not a block is targeted.
    fn use_item(&self, context: &mut UseItemContext<'_>) -> ItemUseResult;

    /// Whether an anvil may repair `stack` with `ingredient`.
    fn is_valid_repair_item(&self, _stack: &ItemStack, _ingredient: &Identifier) -> bool {
        false
    }

    /// Whether two damaged copies of `stack` may be combined in the crafting grid.
    fn can_repair_via_crafting(&self, stack: &ItemStack) -> bool {
        stack.is_damageable_item()
    }
}
