//! Finding the block a bucket is aimed at.

use steel_registry::item_stack::ItemStack;

use crate::error::InteractionError;
use crate::player::Player;
use crate::world::raytrace::{clip, view_ray};
use crate::world::{BlockHitResult, FluidHandling, HitResult, World};

/// Casts the player's view ray and checks build permissions at the hit.
#[derive(Debug, Clone, Copy)]
pub struct TargetResolver {
    range: f64,
}

impl TargetResolver {
    /// A resolver reaching `range` blocks.
    #[must_use]
    pub const fn new(range: f64) -> Self {
        Self { range }
    }

    /// Empty buckets aim for fluid sources, filled ones look through fluids.
    #[must_use]
    pub fn fluid_handling(stack: &ItemStack) -> FluidHandling {
        if stack.variant().is_empty() {
            FluidHandling::SourceOnly
        } else {
            FluidHandling::None
        }
    }

    /// Casts the ray. Reads the world only.
    #[must_use]
    pub fn resolve(
        &self,
        world: &dyn World,
        player: &dyn Player,
        fluid: FluidHandling,
    ) -> HitResult {
        let (start, end) = view_ray(player, self.range);
        clip(world, start, end, fluid)
    }

    /// Casts the ray for `stack` and requires a block the player may work on.
    ///
    /// The player must be allowed to modify the struck block and to build against the
    /// neighbour on the struck face.
    pub fn resolve_target(
        &self,
        world: &dyn World,
        player: &dyn Player,
        stack: &ItemStack,
    ) -> Result<BlockHitResult, InteractionError> {
        let hit = match self.resolve(world, player, Self::fluid_handling(stack)) {
            HitResult::Miss { .. } => return Err(InteractionError::Miss),
            HitResult::Entity(_) => return Err(InteractionError::NotApplicable),
            HitResult::Block(hit) => hit,
        };

        let pos = hit.block_pos;
        if !world.may_interact(player, &pos) {
            return Err(InteractionError::PermissionDenied(pos));
        }

        let adjacent = hit.direction.relative(&pos);
        if !player.may_build_at(&adjacent, hit.direction, stack) {
            return Err(InteractionError::PermissionDenied(adjacent));
        }

        Ok(hit)
    }
}
