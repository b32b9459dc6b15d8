//! Repair eligibility. Only empty buckets can be repaired.

use steel_registry::item_stack::ItemStack;
use steel_utils::Identifier;

/// Anvil and crafting grid repair rules for buckets.
pub struct RepairPolicy;

impl RepairPolicy {
    /// Whether an anvil may repair `stack` with `ingredient`.
    #[must_use]
    pub fn can_repair(stack: &ItemStack, ingredient: &Identifier) -> bool {
        Self::can_repair_via_crafting(stack)
            && stack
                .family()
                .repair_ingredient
                .as_ref()
                .is_some_and(|expected| expected == ingredient)
    }

    /// Whether two copies of `stack` may be combined in the crafting grid.
    #[must_use]
    pub const fn can_repair_via_crafting(stack: &ItemStack) -> bool {
        stack.variant().is_empty() && stack.is_damageable_item()
    }
}
