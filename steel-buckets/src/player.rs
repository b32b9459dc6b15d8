//! The player side of a bucket interaction.

use steel_registry::blocks::properties::Direction;
use steel_registry::item_stack::ItemStack;
use steel_registry::items::BucketVariant;
use steel_utils::math::Vector3;
use steel_utils::{BlockPos, Identifier};
use uuid::Uuid;

/// The hand an item is used from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionHand {
    /// Main hand.
    MainHand,
    /// Off hand.
    OffHand,
}

/// A statistic increment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stat {
    /// `minecraft.used:<item>`
    ItemUsed(Identifier),
}

/// The acting player, implemented by the server's player entity.
pub trait Player: Send + Sync {
    /// The player's UUID.
    fn id(&self) -> Uuid;

    /// Where the player's eyes are.
    fn eye_position(&self) -> Vector3<f64>;

    /// `(yaw, pitch)` in degrees.
    fn rotation(&self) -> (f32, f32);

    /// Creative mode: items are neither consumed nor worn down.
    fn has_infinite_materials(&self) -> bool;

    /// Whether the player may build at `pos`, against `face`, holding `stack`.
    fn may_build_at(&self, pos: &BlockPos, face: Direction, stack: &ItemStack) -> bool;

    /// The stack held in `hand`.
    fn item_in_hand(&self, hand: InteractionHand) -> ItemStack;

    /// Increments a statistic.
    fn award_stat(&self, stat: Stat);

    /// Whether the inventory already holds an item of `variant`.
    fn inventory_contains(&self, variant: BucketVariant) -> bool;

    /// Adds `stack` to the inventory, dropping whatever does not fit.
    fn add_or_drop(&self, stack: ItemStack);

    /// Tells the client the item in `hand` broke.
    fn on_item_broken(&self, hand: InteractionHand);
}
