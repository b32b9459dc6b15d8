//! Bucket item behavior.
//!
//! A use runs in three stages: [`TargetResolver`] finds the block the player aims at,
//! [`FluidInteractionEngine`] drains or pours it, and [`StackTransformer`] works out what the
//! player holds afterwards. Any stage can stop the use; the world and the stack are only
//! changed once the engine has committed a transfer.

mod interaction;
mod repair;
mod stack;
mod target;

pub use interaction::{FluidInteractionEngine, FluidTransfer};
pub use repair::RepairPolicy;
pub use stack::{Consumption, StackTransformer};
pub use target::TargetResolver;

use steel_registry::item_stack::ItemStack;
use steel_utils::Identifier;

use crate::behavior::context::{InteractionResult, ItemUseResult, UseItemContext};
use crate::behavior::ItemBehavior;
use crate::config::BucketConfig;
use crate::player::Stat;

/// Behavior shared by every bucket item, empty or filled.
pub struct BucketBehavior {
    config: BucketConfig,
    resolver: TargetResolver,
}

impl BucketBehavior {
    /// Creates the behavior with the given tunables.
    #[must_use]
    pub fn new(config: BucketConfig) -> Self {
        let resolver = TargetResolver::new(config.interaction_range);
        Self { config, resolver }
    }

    /// The tunables in use.
    #[must_use]
    pub const fn config(&self) -> &BucketConfig {
        &self.config
    }

    /// Statistics and criteria are only recorded on the server, and for creative players
    /// only when configured.
    fn tracks_progress(&self, context: &UseItemContext<'_>) -> bool {
        !context.world.is_client_side()
            && (!context.player.has_infinite_materials() || self.config.track_privileged_usage)
    }

    fn record_progress(
        &self,
        context: &UseItemContext<'_>,
        source: &ItemStack,
        result: &ItemStack,
        transfer: &FluidTransfer,
    ) {
        if !self.tracks_progress(context) {
            return;
        }

        context
            .player
            .award_stat(Stat::ItemUsed(source.variant().item_key().clone()));
        match *transfer {
            FluidTransfer::Drained { filled, .. } => {
                // Creative players keep the empty bucket; report the bucket they gained.
                let filled_stack = if result.variant() == filled {
                    result.clone()
                } else {
                    ItemStack::new(filled)
                };
                context.criteria.filled_bucket(context.player, &filled_stack);
            }
            FluidTransfer::Placed { pos, .. } => {
                context.criteria.placed_block(context.player, pos, source);
            }
        }
    }
}

impl ItemBehavior for BucketBehavior {
    fn use_item(&self, context: &mut UseItemContext<'_>) -> ItemUseResult {
        let source = context.player.item_in_hand(context.hand);
        let _span = tracing::debug_span!(
            "bucket_use",
            player = %context.player.id(),
            item = %source.variant(),
        )
        .entered();

        let engine = FluidInteractionEngine::new(&self.config);
        let outcome = self
            .resolver
            .resolve_target(context.world, context.player, &source)
            .and_then(|hit| engine.apply(context.world, context.player, &source, &hit));

        let transfer = match outcome {
            Ok(transfer) => transfer,
            Err(err) => {
                log::debug!(
                    "Bucket use by {} at {:?} stopped: {err}",
                    context.player.id(),
                    context.player.eye_position()
                );
                return match err.result() {
                    InteractionResult::Fail => ItemUseResult::Fail(source),
                    InteractionResult::Pass | InteractionResult::Success => {
                        ItemUseResult::Pass(source)
                    }
                };
            }
        };

        let result = StackTransformer::produce(
            context.world,
            context.player,
            context.hand,
            source.clone(),
            &transfer,
            &mut *context.rng,
        );
        self.record_progress(context, &source, &result, &transfer);

        ItemUseResult::Success {
            stack: result,
            client_side: context.world.is_client_side(),
        }
    }

    fn is_valid_repair_item(&self, stack: &ItemStack, ingredient: &Identifier) -> bool {
        RepairPolicy::can_repair(stack, ingredient)
    }

    fn can_repair_via_crafting(&self, stack: &ItemStack) -> bool {
        RepairPolicy::can_repair_via_crafting(stack)
    }
}
