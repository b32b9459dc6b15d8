//! The stack a bucket leaves in the player's hand.

use rand::RngCore;
use steel_registry::FluidId;
use steel_registry::item_stack::ItemStack;
use steel_registry::items::BucketVariant;

use super::interaction::FluidTransfer;
use crate::player::{InteractionHand, Player};
use crate::world::World;

/// How a completed transfer is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consumption {
    /// Creative players keep their stack untouched.
    Infinite,
    /// One unit is exchanged.
    Consume {
        /// Pouring wears the bucket down. Only the server rolls durability.
        wear: bool,
    },
}

impl Consumption {
    /// The policy for `player` acting in `world`.
    #[must_use]
    pub fn of(world: &dyn World, player: &dyn Player) -> Self {
        if player.has_infinite_materials() {
            Self::Infinite
        } else {
            Self::Consume {
                wear: !world.is_client_side(),
            }
        }
    }
}

/// Turns a committed transfer into the resulting hand stack.
pub struct StackTransformer;

impl StackTransformer {
    /// The stack for `hand` after `transfer` happened with `source` in it.
    pub fn produce(
        world: &dyn World,
        player: &dyn Player,
        hand: InteractionHand,
        source: ItemStack,
        transfer: &FluidTransfer,
        rng: &mut dyn RngCore,
    ) -> ItemStack {
        let consumption = Consumption::of(world, player);

        match (*transfer, consumption) {
            (FluidTransfer::Drained { filled, .. }, Consumption::Infinite) => {
                if !player.inventory_contains(filled) {
                    player.add_or_drop(ItemStack::new(filled));
                }
                source
            }
            (FluidTransfer::Drained { filled, .. }, Consumption::Consume { .. }) => {
                if source.is_empty() {
                    return source;
                }
                Self::exchange(player, source, filled)
            }
            (FluidTransfer::Placed { .. }, Consumption::Infinite) => source,
            (FluidTransfer::Placed { fluid, .. }, Consumption::Consume { wear }) => {
                if source.is_empty() {
                    return source;
                }
                let cost = fluid_cost(&source, fluid, wear);
                Self::emptied(player, hand, source, cost, rng)
            }
        }
    }

    /// Swaps one unit of `source` for `filled`, carrying damage and modifiers over.
    fn exchange(player: &dyn Player, mut source: ItemStack, filled: BucketVariant) -> ItemStack {
        let unit = source.split(1);
        let product = carried_over(&unit, filled);
        hand_back(player, source, product)
    }

    fn emptied(
        player: &dyn Player,
        hand: InteractionHand,
        mut source: ItemStack,
        cost: i32,
        rng: &mut dyn RngCore,
    ) -> ItemStack {
        let mut unit = source.split(1);
        if unit.hurt_and_break(cost, rng) {
            log::debug!("{} broke in the hand of {}", unit.variant(), player.id());
            player.on_item_broken(hand);
            return source;
        }

        let product = carried_over(&unit, unit.variant().empty_counterpart());
        hand_back(player, source, product)
    }
}

fn fluid_cost(source: &ItemStack, fluid: FluidId, wear: bool) -> i32 {
    if wear {
        source.variant().damage_for_fluid(fluid)
    } else {
        0
    }
}

/// A single `variant` with the damage and modifiers of `unit`.
fn carried_over(unit: &ItemStack, variant: BucketVariant) -> ItemStack {
    let mut product = ItemStack::new(variant);
    product.set_damage(unit.damage());
    product.copy_modifiers_from(unit);
    product
}

/// The product goes to the hand if nothing is left there, otherwise to the inventory.
fn hand_back(player: &dyn Player, remainder: ItemStack, product: ItemStack) -> ItemStack {
    if remainder.is_empty() {
        return product;
    }
    player.add_or_drop(product);
    remainder
}
