//! Context and result types for item behaviors.

use rand::RngCore;
use steel_registry::item_stack::ItemStack;

use crate::criteria::CriteriaTriggers;
use crate::player::{InteractionHand, Player};
use crate::world::World;

/// Result of an interaction, without the resulting stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionResult {
    /// The interaction happened.
    Success,
    /// The interaction was attempted and failed.
    Fail,
    /// Nothing to do here; let something else handle the input.
    Pass,
}

/// Result of using an item, carrying the stack that should end up in the hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemUseResult {
    /// Not applicable; the stack is unchanged.
    Pass(ItemStack),
    /// Failed; the stack is unchanged.
    Fail(ItemStack),
    /// Succeeded with the resulting stack.
    Success {
        /// The stack for the hand.
        stack: ItemStack,
        /// Computed by a client predicting the server's decision.
        client_side: bool,
    },
}

impl ItemUseResult {
    /// The untyped result.
    #[must_use]
    pub const fn result(&self) -> InteractionResult {
        match self {
            Self::Pass(_) => InteractionResult::Pass,
            Self::Fail(_) => InteractionResult::Fail,
            Self::Success { .. } => InteractionResult::Success,
        }
    }

    /// The stack for the hand.
    #[must_use]
    pub const fn stack(&self) -> &ItemStack {
        match self {
            Self::Pass(stack) | Self::Fail(stack) | Self::Success { stack, .. } => stack,
        }
    }

    /// Consumes the result, returning the stack for the hand.
    #[must_use]
    pub fn into_stack(self) -> ItemStack {
        match self {
            Self::Pass(stack) | Self::Fail(stack) | Self::Success { stack, .. } => stack,
        }
    }
}

/// Everything an item needs to handle a right click in the air or at a block.
pub struct UseItemContext<'a> {
    /// The world the item is used in.
    pub world: &'a dyn World,
    /// The player using the item.
    pub player: &'a dyn Player,
    /// The hand holding the item.
    pub hand: InteractionHand,
    /// Advancement criteria.
    pub criteria: &'a dyn CriteriaTriggers,
    /// Randomness for durability.
    pub rng: &'a mut dyn RngCore,
}
