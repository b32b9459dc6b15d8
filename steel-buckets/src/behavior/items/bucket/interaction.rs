//! Moving fluid between the world and a bucket.

use steel_registry::FluidId;
use steel_registry::item_stack::ItemStack;
use steel_registry::items::BucketVariant;
use steel_utils::BlockPos;

use crate::config::BucketConfig;
use crate::error::InteractionError;
use crate::player::Player;
use crate::world::{BlockHitResult, World};

/// A fluid transfer the world has already committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluidTransfer {
    /// Fluid was scooped out of the world.
    Drained {
        /// The drained fluid.
        fluid: FluidId,
        /// The bucket that now holds it.
        filled: BucketVariant,
    },
    /// Fluid was poured into the world.
    Placed {
        /// The poured fluid.
        fluid: FluidId,
        /// Where it went.
        pos: BlockPos,
    },
}

/// Decides between draining and pouring and makes the one world mutation.
pub struct FluidInteractionEngine<'a> {
    config: &'a BucketConfig,
}

impl<'a> FluidInteractionEngine<'a> {
    /// An engine using `config` for the merge rule.
    #[must_use]
    pub const fn new(config: &'a BucketConfig) -> Self {
        Self { config }
    }

    /// Empty buckets drain the struck block, filled ones pour their fluid out.
    ///
    /// On error the world has not been changed.
    pub fn apply(
        &self,
        world: &dyn World,
        player: &dyn Player,
        stack: &ItemStack,
        hit: &BlockHitResult,
    ) -> Result<FluidTransfer, InteractionError> {
        if stack.variant().is_empty() {
            Self::drain(world, player, stack.variant(), hit)
        } else {
            self.pour(world, player, stack.variant(), hit)
        }
    }

    fn drain(
        world: &dyn World,
        player: &dyn Player,
        bucket: BucketVariant,
        hit: &BlockHitResult,
    ) -> Result<FluidTransfer, InteractionError> {
        let pos = hit.block_pos;
        let state = world.get_block_state(&pos);
        if !state.get_block().bucket_pickup {
            return Err(InteractionError::UnsupportedExtraction(pos));
        }

        // Checked before draining so an unsupported fluid never leaves the world.
        let held = state.fluid_state().fluid_id;
        let Some(expected) = bucket.filled_counterpart(held) else {
            return Err(InteractionError::UnsupportedExtraction(pos));
        };

        let fluid = world.try_drain_fluid(&pos, state);
        if fluid.is_empty() {
            return Err(InteractionError::UnsupportedExtraction(pos));
        }

        let filled = bucket.filled_counterpart(fluid).unwrap_or_else(|| {
            log::warn!(
                "Block at {pos} held fluid {} but drained {}, keeping {expected}",
                held.0,
                fluid.0
            );
            expected
        });

        world.play_sound(
            BucketVariant::fill_sound(fluid),
            player.eye_position(),
            Some(player.id()),
        );

        Ok(FluidTransfer::Drained { fluid, filled })
    }

    fn pour(
        &self,
        world: &dyn World,
        player: &dyn Player,
        bucket: BucketVariant,
        hit: &BlockHitResult,
    ) -> Result<FluidTransfer, InteractionError> {
        let fluid = bucket.fluid();
        let state = world.get_block_state(&hit.block_pos);

        // Mergeable fluids go straight into a waterloggable target instead of next to it.
        let pos = if state.get_block().liquid_container && self.config.is_mergeable(fluid) {
            hit.block_pos
        } else {
            hit.direction.relative(&hit.block_pos)
        };

        if !world.try_place_fluid(player, &pos, fluid, hit) {
            return Err(InteractionError::PlacementRejected(pos));
        }

        world.on_fluid_placed(&pos, fluid);
        world.play_sound(bucket.empty_sound(), pos.center(), Some(player.id()));

        Ok(FluidTransfer::Placed { fluid, pos })
    }
}
