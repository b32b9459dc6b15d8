//! # Steel Buckets
//!
//! Interaction logic for bucket items: draining fluid source blocks into an empty bucket,
//! pouring a filled bucket back out, and working out the stack the player ends up holding.
//!
//! The crate never owns world or player state. The server implements [`world::World`],
//! [`player::Player`] and [`criteria::CriteriaTriggers`], and calls
//! [`behavior::items::BucketBehavior`] through the [`behavior::ItemBehavior`] trait.
//!
//! # Example
//!
//! ```ignore
//! let behavior = BucketBehavior::new(BucketConfig::load_or_create(path)?);
//! let result = behavior.use_item(&mut UseItemContext {
//!     world: &world,
//!     player: &player,
//!     hand: InteractionHand::MainHand,
//!     criteria: &criteria,
//!     rng: &mut rand::rng(),
//! });
//! ```

pub mod behavior;
pub mod config;
pub mod criteria;
pub mod error;
pub mod player;
pub mod world;

#[cfg(test)]
mod testing;

pub use behavior::items::BucketBehavior;
pub use config::BucketConfig;
pub use error::{ConfigError, InteractionError};
