//! The world side of a bucket interaction.
//!
//! The server's world implements [`World`]; this crate only reads block states through it
//! and asks it to perform the single fluid mutation a bucket use makes.

mod hit_result;
pub mod raytrace;

pub use hit_result::{BlockHitResult, EntityHitResult, FluidHandling, HitResult};

use steel_registry::FluidId;
use steel_registry::blocks::BlockState;
use steel_registry::sound_events::SoundEventRef;
use steel_utils::BlockPos;
use steel_utils::math::Vector3;
use uuid::Uuid;

use crate::player::Player;

/// The world a bucket is used in.
///
/// Methods take `&self`; implementations own their synchronization.
pub trait World: Send + Sync {
    /// True in a client's prediction copy of the world.
    fn is_client_side(&self) -> bool;

    /// The block at `pos`. Unloaded or out of bounds positions read as air.
    fn get_block_state(&self, pos: &BlockPos) -> BlockState;

    /// Whether `player` may modify the block at `pos` (spawn protection, world border).
    fn may_interact(&self, player: &dyn Player, pos: &BlockPos) -> bool;

    /// Removes the fluid from the block at `pos`.
    ///
    /// Returns the drained fluid, or [`FluidId::EMPTY`] if nothing was taken, in which case
    /// the block is unchanged.
    fn try_drain_fluid(&self, pos: &BlockPos, state: BlockState) -> FluidId;

    /// Puts `fluid` at `pos`, replacing or waterlogging the block there.
    ///
    /// Returns false, leaving the world unchanged, if the position cannot take it.
    fn try_place_fluid(
        &self,
        player: &dyn Player,
        pos: &BlockPos,
        fluid: FluidId,
        hit: &BlockHitResult,
    ) -> bool;

    /// Runs after a bucket poured `fluid` at `pos`; schedules the fluid tick.
    fn on_fluid_placed(&self, _pos: &BlockPos, _fluid: FluidId) {}

    /// Plays a sound at `at`. `source` already heard it client side and is skipped.
    fn play_sound(&self, sound: SoundEventRef, at: Vector3<f64>, source: Option<Uuid>);

    /// The closest entity between `start` and `end`, if the world tracks any.
    fn clip_entities(&self, _start: Vector3<f64>, _end: Vector3<f64>) -> Option<EntityHitResult> {
        None
    }
}
