//! Advancement criteria fired by bucket use.

use steel_registry::item_stack::ItemStack;
use steel_utils::BlockPos;

use crate::player::Player;

/// Criteria triggers the server's advancement system implements.
pub trait CriteriaTriggers: Send + Sync {
    /// `minecraft:filled_bucket`
    fn filled_bucket(&self, player: &dyn Player, stack: &ItemStack);

    /// `minecraft:placed_block`
    fn placed_block(&self, player: &dyn Player, pos: BlockPos, stack: &ItemStack);
}

/// Ignores every trigger. For client-side prediction, where criteria never fire.
pub struct NoCriteria;

impl CriteriaTriggers for NoCriteria {
    fn filled_bucket(&self, _player: &dyn Player, _stack: &ItemStack) {}

    fn placed_block(&self, _player: &dyn Player, _pos: BlockPos, _stack: &ItemStack) {}
}
